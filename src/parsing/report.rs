//! Parser for exonerate `--ryo` summary reports.
//!
//! The invocation built by [`crate::aligner::Exonerate`] asks exonerate for
//! one summary line per alignment, tagged with a leading `@` sentinel so the
//! records can be told apart from the banner and diagnostic chatter the tool
//! also writes:
//!
//! ```text
//! @\t<query>\t<target>\t<identity%>\t<qstart>\t<qend>\t<tstart>\t<tend>\t<qlen>\t<score>
//! ```
//!
//! Parsing is a single streaming pass that folds record lines into a
//! [`HitIndex`], keeping the highest-scoring hit per query. Lines without
//! the sentinel are ignored outright.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::core::hit::Hit;
use crate::core::index::HitIndex;

/// Leading marker identifying a record line in the report.
pub const RECORD_SENTINEL: char = '@';

/// Number of tab-separated fields in a record line, sentinel included.
pub const RECORD_FIELDS: usize = 10;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("alignment report not found: {0} (run the aligner first?)")]
    ReportMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse an exonerate report file into a best-hit index.
///
/// The file is read line by line; memory use grows with the number of
/// distinct queries, not with report size.
///
/// # Errors
///
/// Returns `ReportError::ReportMissing` if `path` does not name an existing
/// file, or `ReportError::Io` if reading fails partway through. Record
/// lines that cannot be converted are skipped with a warning, never an
/// error.
pub fn parse_report_file(path: &Path) -> Result<HitIndex, ReportError> {
    if !path.is_file() {
        return Err(ReportError::ReportMissing(path.to_path_buf()));
    }

    let reader = File::open(path).map(BufReader::new)?;
    let mut index = HitIndex::new();

    for (i, line) in reader.lines().enumerate() {
        fold_line(&mut index, &line?, i + 1);
    }

    Ok(index)
}

/// Parse report text already held in memory.
///
/// Same per-line behavior as [`parse_report_file`]; infallible because
/// there is no file to miss and no I/O to fail.
#[must_use]
pub fn parse_report_text(text: &str) -> HitIndex {
    let mut index = HitIndex::new();

    for (i, line) in text.lines().enumerate() {
        fold_line(&mut index, line, i + 1);
    }

    index
}

/// Fold one report line into the index. Line numbers are 1-based and only
/// used for warnings.
fn fold_line(index: &mut HitIndex, line: &str, line_num: usize) {
    if !line.starts_with(RECORD_SENTINEL) {
        return;
    }

    match parse_record(line) {
        Some(hit) => index.insert_candidate(hit),
        None => {
            warn!(line = line_num, "Skipping malformed record line");
        }
    }
}

/// Convert a sentinel-tagged line into a `Hit` by fixed field position.
///
/// Returns `None` when the field count is wrong or a numeric field does not
/// parse; the caller decides what to do with such lines.
fn parse_record(line: &str) -> Option<Hit> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != RECORD_FIELDS {
        return None;
    }

    // Field 3 is emitted as a percentage; the index stores a fraction.
    let percent_identity = fields[3].parse::<f64>().ok()? / 100.0;

    Some(Hit::new(
        fields[1],
        fields[2],
        percent_identity,
        fields[4].parse().ok()?,
        fields[5].parse().ok()?,
        fields[6].parse().ok()?,
        fields[7].parse().ok()?,
        fields[8].parse().ok()?,
        fields[9].parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mapping() {
        let index = parse_report_text("@\tctgA\tchrX\t95.50\t10\t500\t1000\t1490\t510\t870\n");

        let hit = index.get("ctgA").expect("record line should index");
        assert_eq!(hit.query, "ctgA");
        assert_eq!(hit.target, "chrX");
        assert!((hit.percent_identity - 0.955).abs() < 1e-9);
        assert_eq!(hit.query_start, 10);
        assert_eq!(hit.query_end, 500);
        assert_eq!(hit.target_start, 1000);
        assert_eq!(hit.target_end, 1490);
        assert_eq!(hit.query_length, 510);
        assert_eq!(hit.score, 870);
    }

    #[test]
    fn test_non_record_lines_ignored() {
        let report = "Command line: [exonerate --model est2genome]\n\
                      Hostname: [node42]\n\
                      -- completed exonerate analysis\n";
        let index = parse_report_text(report);
        assert!(index.is_empty());
    }

    #[test]
    fn test_best_score_wins_across_duplicates() {
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\n\
                      @\tctgA\tchr2\t91.00\t0\t100\t0\t100\t100\t800\n\
                      @\tctgA\tchr3\t99.00\t0\t100\t0\t100\t100\t300\n";
        let index = parse_report_text(report);

        assert_eq!(index.len(), 1);
        let hit = index.get("ctgA").unwrap();
        assert_eq!(hit.score, 800);
        assert_eq!(hit.target, "chr2");
    }

    #[test]
    fn test_tie_keeps_first_record() {
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\n\
                      @\tctgA\tchr2\t90.00\t0\t100\t0\t100\t100\t500\n";
        let index = parse_report_text(report);
        assert_eq!(index.get("ctgA").unwrap().target, "chr1");
    }

    #[test]
    fn test_interleaved_queries() {
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\n\
                      @\tctgB\tchr2\t95.00\t0\t200\t0\t200\t200\t900\n\
                      @\tctgA\tchr1\t92.00\t0\t100\t0\t100\t100\t650\n\
                      @\tctgB\tchr3\t80.00\t0\t200\t0\t200\t200\t100\n";
        let index = parse_report_text(report);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("ctgA").unwrap().score, 650);
        assert_eq!(index.get("ctgB").unwrap().score, 900);
        assert_eq!(index.get("ctgB").unwrap().target, "chr2");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        // Short field count, then a non-numeric score, between good records.
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\n\
                      @\tctgB\tchr1\t90.00\n\
                      @\tctgC\tchr1\t90.00\t0\t100\t0\t100\t100\tNaNsense\n\
                      @\tctgD\tchr2\t95.00\t0\t50\t0\t50\t60\t200\n";
        let index = parse_report_text(report);

        assert_eq!(index.len(), 2);
        assert!(index.get("ctgA").is_some());
        assert!(index.get("ctgB").is_none());
        assert!(index.get("ctgC").is_none());
        assert!(index.get("ctgD").is_some());
    }

    #[test]
    fn test_malformed_duplicate_does_not_shadow_good_record() {
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\n\
                      @\tctgA\tchr1\tninety\t0\t100\t0\t100\t100\t999\n";
        let index = parse_report_text(report);
        assert_eq!(index.get("ctgA").unwrap().score, 500);
    }

    #[test]
    fn test_extra_fields_are_malformed() {
        let report = "@\tctgA\tchr1\t90.00\t0\t100\t0\t100\t100\t500\textra\n";
        let index = parse_report_text(report);
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_report() {
        assert!(parse_report_text("").is_empty());
    }

    #[test]
    fn test_missing_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exonerate.out");

        let err = parse_report_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::ReportMissing(_)));
    }

    #[test]
    fn test_parse_report_file_matches_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exonerate.out");
        std::fs::write(
            &path,
            "exonerate banner\n@\tctgA\tchrX\t95.50\t10\t500\t1000\t1490\t510\t870\n",
        )
        .unwrap();

        let index = parse_report_file(&path).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("ctgA").unwrap().score, 870);
    }
}
