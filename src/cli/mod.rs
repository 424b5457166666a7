//! Command-line interface for exomap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: run exonerate on an assembly/genome pair, then index and
//!   print the best hit per contig
//! - **hits**: index and print an existing exonerate report without
//!   re-running the aligner
//!
//! ## Usage
//!
//! ```text
//! # Align an assembly against a genome and print best hits
//! exomap align assembly.fa genome.fa --output-dir work/
//!
//! # JSON output for scripting
//! exomap align assembly.fa genome.fa --format json
//!
//! # Re-index a report from an earlier run
//! exomap hits work/exonerate.out
//! ```

use clap::{Parser, Subcommand};

pub mod align;
pub mod hits;
mod output;

#[derive(Parser)]
#[command(name = "exomap")]
#[command(version)]
#[command(about = "Map assembly contigs to a reference genome via exonerate best hits")]
#[command(
    long_about = "exomap aligns an assembly against a reference genome with exonerate's est2genome model and reduces the output to the single best-scoring alignment per contig.\n\nThe external exonerate executable must be installed and on PATH (or supplied with --exonerate)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align an assembly against a genome and index the best hits
    Align(align::AlignArgs),

    /// Index best hits from an existing exonerate report
    Hits(hits::HitsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
