use serde::{Deserialize, Serialize};

/// A single alignment result for a query sequence.
///
/// One `Hit` corresponds to one record line of the exonerate summary report.
/// Hits are plain values: every field is set at construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Query (assembly contig) identifier
    pub query: String,

    /// Target (reference/genome sequence) identifier
    pub target: String,

    /// Fraction of aligned bases that match exactly, in [0.0, 1.0]
    pub percent_identity: f64,

    /// Alignment start offset in the query
    pub query_start: u64,

    /// Alignment end offset in the query
    pub query_end: u64,

    /// Alignment start offset in the target
    pub target_start: u64,

    /// Alignment end offset in the target
    pub target_end: u64,

    /// Total length of the query sequence
    pub query_length: u64,

    /// Raw alignment score; higher is better
    pub score: i64,
}

impl Hit {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        target: impl Into<String>,
        percent_identity: f64,
        query_start: u64,
        query_end: u64,
        target_start: u64,
        target_end: u64,
        query_length: u64,
        score: i64,
    ) -> Self {
        Self {
            query: query.into(),
            target: target.into(),
            percent_identity,
            query_start,
            query_end,
            target_start,
            target_end,
            query_length,
            score,
        }
    }

    /// Fraction of the query covered by the aligned span.
    ///
    /// Returns 0.0 for a zero-length query rather than dividing by zero.
    #[must_use]
    pub fn query_coverage(&self) -> f64 {
        if self.query_length == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.query_end.abs_diff(self.query_start) as f64 / self.query_length as f64
        }
    }
}
