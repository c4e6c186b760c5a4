//! Layered error types for the aggregation core

use thiserror::Error;

/// Failure reported by a [`SentenceScorer`](crate::scorer::SentenceScorer)
/// implementation.
///
/// Carries the scorer's name so that callers swapping backends can tell
/// which one faulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("scorer '{scorer}' failed: {reason}")]
pub struct ScoringError {
    /// Name of the scorer that failed
    pub scorer: String,
    /// Implementation-specific failure description
    pub reason: String,
}

impl ScoringError {
    /// Create a new scoring error
    pub fn new(scorer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            scorer: scorer.into(),
            reason: reason.into(),
        }
    }
}

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The pluggable scorer failed on one sentence; the whole aggregate is
    /// abandoned rather than padded with substitute values.
    #[error("scoring failed at sentence {index}: {source}")]
    Scoring {
        /// Zero-based index of the sentence that failed
        index: usize,
        /// The underlying scorer failure
        source: ScoringError,
    },

    /// Caller-supplied argument outside its documented range
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
