use std::collections::HashMap;

use serde::Serialize;

use crate::core::hit::Hit;

/// Best-hit-per-query index built from one pass over an alignment report.
///
/// Each distinct query id maps to the single highest-scoring `Hit` seen for
/// it. The index is populated by [`HitIndex::insert_candidate`] during
/// parsing and is read-only afterwards; entries are never removed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct HitIndex {
    hits: HashMap<String, Hit>,
}

impl HitIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a candidate record into the index.
    ///
    /// A query with no entry yet takes the candidate. An existing entry is
    /// replaced only when the candidate's score is strictly greater, so on
    /// equal scores the first-seen record wins.
    pub fn insert_candidate(&mut self, candidate: Hit) {
        match self.hits.get(&candidate.query) {
            Some(existing) if existing.score >= candidate.score => {}
            _ => {
                self.hits.insert(candidate.query.clone(), candidate);
            }
        }
    }

    /// Look up the best hit for a query, if any record for it was seen.
    #[must_use]
    pub fn get(&self, query: &str) -> Option<&Hit> {
        self.hits.get(query)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hit)> {
        self.hits.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Hits sorted by query id, for deterministic output.
    #[must_use]
    pub fn sorted_hits(&self) -> Vec<&Hit> {
        let mut hits: Vec<&Hit> = self.hits.values().collect();
        hits.sort_by(|a, b| a.query.cmp(&b.query));
        hits
    }
}
