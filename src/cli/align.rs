use std::path::PathBuf;

use clap::Args;

use crate::aligner::Exonerate;
use crate::cli::{output, OutputFormat};
use crate::parsing::report::parse_report_file;

#[derive(Args)]
pub struct AlignArgs {
    /// Assembly FASTA file (queries)
    #[arg(required = true)]
    pub assembly: PathBuf,

    /// Reference genome FASTA file (targets)
    #[arg(required = true)]
    pub genome: PathBuf,

    /// Directory the exonerate report is written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to the exonerate executable (searched on PATH by default)
    #[arg(long)]
    pub exonerate: Option<PathBuf>,
}

/// Execute the align subcommand.
///
/// # Errors
///
/// Returns an error if exonerate cannot be located, the alignment run
/// fails, or the report cannot be parsed.
pub fn run(args: &AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let aligner = match &args.exonerate {
        Some(executable) => Exonerate::with_executable(executable, &args.output_dir),
        None => Exonerate::new(&args.output_dir)?,
    };

    if verbose {
        eprintln!("Using exonerate at {}", aligner.executable().display());
    }

    let report = aligner.run(&args.assembly, &args.genome)?;

    if verbose {
        eprintln!("Report written to {}", report.display());
    }

    let index = parse_report_file(&report)?;

    if index.is_empty() {
        eprintln!("No alignments reported.");
        return Ok(());
    }

    output::print_index(&index, format)
}
