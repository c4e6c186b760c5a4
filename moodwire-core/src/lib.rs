//! Sentiment aggregation core for the Moodwire dashboard
//!
//! This crate implements the data-transformation pipeline behind the
//! dashboard: sentence segmentation, per-sentence sentiment scoring through
//! a pluggable [`SentenceScorer`], document-level reduction, and
//! corpus-level summarization of many documents at once.
//!
//! Everything here is pure and synchronous. All produced values are
//! immutable and request-scoped, so concurrent calls from any number of
//! threads are safe without coordination.
//!
//! # Example
//!
//! ```rust
//! use moodwire_core::{LexiconScorer, SentimentAggregator};
//!
//! let aggregator = SentimentAggregator::new();
//! let scorer = LexiconScorer::new();
//!
//! let doc = aggregator
//!     .analyze("The launch was a great success. Critics were furious.", &scorer)
//!     .unwrap();
//!
//! assert_eq!(doc.sentence_scores.len(), 2);
//! assert!(doc.overall_polarity >= -1.0 && doc.overall_polarity <= 1.0);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod corpus;
pub mod error;
pub mod scorer;
pub mod segment;
pub mod types;

// Re-export key types
pub use aggregate::SentimentAggregator;
pub use corpus::{summarize, DEFAULT_TOP_K};
pub use error::{CoreError, Result, ScoringError};
pub use scorer::{LexiconScorer, SentenceScorer};
pub use segment::{default_splitter, SentenceSplitter};
pub use types::{CorpusSummary, DocumentSentiment, DocumentSummary, SentenceScore};
