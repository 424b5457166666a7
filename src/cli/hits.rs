use std::path::PathBuf;

use clap::Args;

use crate::cli::{output, OutputFormat};
use crate::parsing::report::parse_report_file;

#[derive(Args)]
pub struct HitsArgs {
    /// Exonerate report file from a previous align run
    #[arg(required = true)]
    pub report: PathBuf,
}

/// Execute the hits subcommand.
///
/// # Errors
///
/// Returns an error if the report file is missing or unreadable.
pub fn run(args: &HitsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = parse_report_file(&args.report)?;

    if verbose {
        eprintln!(
            "Indexed {} contigs from {}",
            index.len(),
            args.report.display()
        );
    }

    if index.is_empty() {
        eprintln!("No alignments reported.");
        return Ok(());
    }

    output::print_index(&index, format)
}
