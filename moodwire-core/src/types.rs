//! Value types produced by the aggregation pipeline
//!
//! All types here are immutable request-scoped values: created fresh per
//! analysis call, never mutated after construction, never shared across
//! calls.

use chrono::{DateTime, Utc};

/// Sentiment of a single sentence.
///
/// `polarity` lies in `[-1, 1]` (negative = unfavorable) and `subjectivity`
/// in `[0, 1]` (0 = factual, 1 = opinion-laden).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceScore {
    /// The sentence that was scored
    pub text: String,
    /// Sentiment polarity in `[-1, 1]`
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`
    pub subjectivity: f64,
}

impl SentenceScore {
    /// Create a new sentence score
    pub fn new(text: impl Into<String>, polarity: f64, subjectivity: f64) -> Self {
        Self {
            text: text.into(),
            polarity,
            subjectivity,
        }
    }
}

/// Document-level sentiment: per-sentence scores plus their arithmetic means.
///
/// `sentence_scores` preserves the order in which sentences appear in the
/// source text. Both overall values are `0.0` when no sentences were found.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSentiment {
    /// Mean polarity across all sentences
    pub overall_polarity: f64,
    /// Mean subjectivity across all sentences
    pub overall_subjectivity: f64,
    /// Per-sentence scores in order of appearance
    pub sentence_scores: Vec<SentenceScore>,
}

impl DocumentSentiment {
    /// The zero-valued result returned for empty input
    pub fn empty() -> Self {
        Self {
            overall_polarity: 0.0,
            overall_subjectivity: 0.0,
            sentence_scores: Vec::new(),
        }
    }

    /// Whether this result came from input with no sentences
    pub fn is_empty(&self) -> bool {
        self.sentence_scores.is_empty()
    }
}

/// One document's row in a corpus: identity fields passed through unchanged
/// from the source article plus that document's overall sentiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSummary {
    /// Source-assigned identifier, passed through untouched
    pub id: String,
    /// Article title
    pub title: String,
    /// Overall polarity of the document in `[-1, 1]`
    pub polarity: f64,
    /// Overall subjectivity of the document in `[0, 1]`
    pub subjectivity: f64,
    /// Link to the source article
    pub source_url: String,
    /// Publication timestamp, passed through untouched
    pub published_at: DateTime<Utc>,
}

/// Corpus-level aggregate over a batch of documents.
///
/// `positive_count`/`negative_count` use strict inequalities; documents with
/// polarity exactly `0.0` are neutral and counted by neither. The extremes
/// lists are stable-sorted by polarity (descending for `top_positive`,
/// ascending for `top_negative`) with ties keeping original input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorpusSummary {
    /// Mean polarity across all documents, `0.0` for an empty corpus
    pub mean_polarity: f64,
    /// Number of documents with polarity strictly above zero
    pub positive_count: usize,
    /// Number of documents with polarity strictly below zero
    pub negative_count: usize,
    /// Up to K most positive documents, most positive first
    pub top_positive: Vec<DocumentSummary>,
    /// Up to K most negative documents, most negative first
    pub top_negative: Vec<DocumentSummary>,
}

impl CorpusSummary {
    /// The zero-valued summary returned for an empty corpus
    pub fn empty() -> Self {
        Self {
            mean_polarity: 0.0,
            positive_count: 0,
            negative_count: 0,
            top_positive: Vec::new(),
            top_negative: Vec::new(),
        }
    }
}
