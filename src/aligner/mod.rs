//! Discovery and invocation of the external exonerate executable.

pub mod exonerate;

pub use exonerate::{locate, Exonerate, ExonerateError};
