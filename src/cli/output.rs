//! Shared hit-index printing for the CLI subcommands.

use crate::cli::OutputFormat;
use crate::core::index::HitIndex;

/// Print the index in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn print_index(index: &HitIndex, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(index),
        OutputFormat::Json => print_json(index)?,
        OutputFormat::Tsv => print_tsv(index),
    }
    Ok(())
}

fn print_text(index: &HitIndex) {
    for hit in index.sorted_hits() {
        println!(
            "{} -> {} (score {}, {:.1}% identity)",
            hit.query,
            hit.target,
            hit.score,
            hit.percent_identity * 100.0
        );
        println!(
            "   query:  {}..{} of {} ({:.1}% coverage)",
            hit.query_start,
            hit.query_end,
            hit.query_length,
            hit.query_coverage() * 100.0
        );
        println!("   target: {}..{}", hit.target_start, hit.target_end);
    }
    println!("\n{} contigs indexed", index.len());
}

fn print_json(index: &HitIndex) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&index.sorted_hits())?;
    println!("{json}");
    Ok(())
}

fn print_tsv(index: &HitIndex) {
    println!("query\ttarget\tpercent_identity\tquery_start\tquery_end\ttarget_start\ttarget_end\tquery_length\tscore");
    for hit in index.sorted_hits() {
        println!(
            "{}\t{}\t{:.4}\t{}\t{}\t{}\t{}\t{}\t{}",
            hit.query,
            hit.target,
            hit.percent_identity,
            hit.query_start,
            hit.query_end,
            hit.target_start,
            hit.target_end,
            hit.query_length,
            hit.score
        );
    }
}
