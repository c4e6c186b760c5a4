//! Sentence scoring capability
//!
//! Scoring is pluggable: the aggregator only depends on the
//! [`SentenceScorer`] contract, so alternative backends (a remote model, a
//! deterministic test fake) slot in without touching aggregation logic.

mod lexicon;
mod words;

pub use lexicon::LexiconScorer;

use crate::error::ScoringError;
use crate::types::SentenceScore;

/// A sentiment scorer for single sentences.
///
/// Implementations must be pure functions of their input: no state mutated
/// across calls, so scoring the same sentence twice yields the same
/// [`SentenceScore`]. Scoring an empty or whitespace-only sentence returns a
/// zero-valued score rather than failing; genuine failures are reported as
/// [`ScoringError`] and must not be papered over with defaults.
pub trait SentenceScorer {
    /// Score one sentence.
    ///
    /// The returned polarity lies in `[-1, 1]` and subjectivity in `[0, 1]`.
    fn score(&self, sentence: &str) -> Result<SentenceScore, ScoringError>;

    /// Short scorer name for diagnostics and run metadata
    fn name(&self) -> &str;
}
