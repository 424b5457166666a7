//! Core data types for alignment hits.
//!
//! This module provides the two value types the rest of the crate is built
//! around:
//!
//! - [`Hit`]: one alignment record for a query contig
//! - [`HitIndex`]: the best-scoring `Hit` per distinct query

pub mod hit;
pub mod index;

pub use hit::Hit;
pub use index::HitIndex;
