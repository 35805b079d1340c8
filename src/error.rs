//! Unified error handling for pseudo-boundary generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoundaryError>;

/// Errors produced while partitioning features and aggregating boundaries.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// A tuning parameter was non-positive or non-finite.
    ///
    /// Raised before any traversal starts; the caller must re-invoke
    /// with a corrected value.
    #[error("invalid input: {parameter} must be a positive finite number, got {value}")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
    },

    /// The feature stream contained no features to partition.
    #[error("empty stream: no features to partition")]
    EmptyStream,

    /// A group or hull reached a geometric stage without usable geometry.
    #[error("degenerate geometry in group {group_index}: {reason}")]
    DegenerateGeometry { group_index: usize, reason: String },
}
