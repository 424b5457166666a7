//! Parsers for exonerate output.
//!
//! The only format consumed is the tab-separated `--ryo` summary report
//! described in [`report`].
//!
//! ## Example
//!
//! ```rust
//! use exomap::parsing::report::parse_report_text;
//!
//! let report = "@\tctgA\tchrX\t95.50\t10\t500\t1000\t1490\t510\t870\n";
//! let index = parse_report_text(report);
//! assert_eq!(index.get("ctgA").unwrap().score, 870);
//! ```

pub mod report;

pub use report::{parse_report_file, parse_report_text, ReportError};
