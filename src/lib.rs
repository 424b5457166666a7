//! # exomap
//!
//! A library for mapping assembly contigs onto a reference genome using the
//! external [exonerate](https://www.ebi.ac.uk/about/vertebrate-genomics/software/exonerate)
//! aligner.
//!
//! Contigs from a draft assembly rarely carry any indication of where they
//! belong on a finished reference. `exomap` answers that by running an
//! `est2genome`-model alignment of every contig against the genome, then
//! reducing exonerate's per-alignment summary lines to the single
//! best-scoring hit per contig.
//!
//! ## How it works
//!
//! 1. [`Exonerate`] resolves the external binary (from `PATH`, or injected
//!    explicitly) and runs it with a custom `--ryo` one-line-per-alignment
//!    format, redirecting the summary into a report file.
//! 2. [`parsing::report`] streams that report, keeping only lines tagged
//!    with the `@` sentinel, and folds them into a [`HitIndex`]: for each
//!    contig, the highest-scoring [`Hit`] wins, with ties keeping the
//!    first record seen.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use exomap::{parse_report_file, Exonerate};
//!
//! let aligner = Exonerate::new("work")?;
//! let report = aligner.run(Path::new("assembly.fa"), Path::new("genome.fa"))?;
//!
//! let hits = parse_report_file(&report)?;
//! if let Some(hit) = hits.get("ctgA") {
//!     println!("ctgA maps to {} with score {}", hit.target, hit.score);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: `Hit` and `HitIndex` value types
//! - [`parsing`]: exonerate report parser
//! - [`aligner`]: exonerate discovery and invocation
//! - [`cli`]: command-line interface implementation

pub mod aligner;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use aligner::{Exonerate, ExonerateError};
pub use core::hit::Hit;
pub use core::index::HitIndex;
pub use parsing::report::{parse_report_file, parse_report_text, ReportError};
