//! Document-level sentiment aggregation

use tracing::{debug, trace};

use crate::error::{CoreError, Result};
use crate::scorer::SentenceScorer;
use crate::segment::SentenceSplitter;
use crate::types::DocumentSentiment;

/// Splits a document into sentences, scores each one, and reduces the
/// per-sentence scores to document-level means.
///
/// The aggregator owns its splitter but not a scorer: scoring is passed per
/// call so one aggregator can serve any number of backends. Each call is
/// independent and side-effect free; concurrent callers need no
/// coordination.
#[derive(Debug, Clone)]
pub struct SentimentAggregator {
    splitter: SentenceSplitter,
}

impl SentimentAggregator {
    /// Create an aggregator with the default English splitter
    pub fn new() -> Self {
        Self {
            splitter: SentenceSplitter::new(),
        }
    }

    /// Create an aggregator around a custom splitter
    pub fn with_splitter(splitter: SentenceSplitter) -> Self {
        Self { splitter }
    }

    /// The splitter in use
    pub fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    /// Analyze one document.
    ///
    /// Input with no sentences yields the zero-valued
    /// [`DocumentSentiment`] - that is the defined empty-input policy, not
    /// an error. A scorer failure on any sentence aborts the whole analysis
    /// and surfaces as [`CoreError::Scoring`] with the sentence index
    /// attached; substituting default scores would corrupt the aggregate.
    pub fn analyze<S>(&self, text: &str, scorer: &S) -> Result<DocumentSentiment>
    where
        S: SentenceScorer + ?Sized,
    {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            trace!("no sentences in input, returning empty sentiment");
            return Ok(DocumentSentiment::empty());
        }

        let mut sentence_scores = Vec::with_capacity(sentences.len());
        for (index, sentence) in sentences.iter().enumerate() {
            let score = scorer
                .score(sentence)
                .map_err(|source| CoreError::Scoring { index, source })?;
            sentence_scores.push(score);
        }

        let count = sentence_scores.len() as f64;
        let overall_polarity = sentence_scores.iter().map(|s| s.polarity).sum::<f64>() / count;
        let overall_subjectivity =
            sentence_scores.iter().map(|s| s.subjectivity).sum::<f64>() / count;

        debug!(
            sentences = sentence_scores.len(),
            polarity = overall_polarity,
            subjectivity = overall_subjectivity,
            scorer = scorer.name(),
            "aggregated document sentiment"
        );

        Ok(DocumentSentiment {
            overall_polarity,
            overall_subjectivity,
            sentence_scores,
        })
    }
}

impl Default for SentimentAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;
    use crate::types::SentenceScore;

    /// Deterministic scorer keyed on sentence content
    struct StubScorer;

    impl SentenceScorer for StubScorer {
        fn score(&self, sentence: &str) -> std::result::Result<SentenceScore, ScoringError> {
            let polarity = if sentence.contains("love") {
                0.8
            } else if sentence.contains("hate") {
                -0.8
            } else {
                0.0
            };
            Ok(SentenceScore::new(sentence, polarity, 0.5))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Scorer that always fails
    struct FailingScorer;

    impl SentenceScorer for FailingScorer {
        fn score(&self, _sentence: &str) -> std::result::Result<SentenceScore, ScoringError> {
            Err(ScoringError::new("failing", "backend unavailable"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn opposite_sentences_cancel_out() {
        let aggregator = SentimentAggregator::new();
        let doc = aggregator
            .analyze("I love this. I hate that.", &StubScorer)
            .unwrap();

        assert_eq!(doc.overall_polarity, 0.0);
        assert_eq!(doc.sentence_scores.len(), 2);
        assert_eq!(doc.sentence_scores[0].text, "I love this.");
        assert_eq!(doc.sentence_scores[1].text, "I hate that.");
    }

    #[test]
    fn empty_input_yields_zero_sentiment() {
        let aggregator = SentimentAggregator::new();

        assert_eq!(
            aggregator.analyze("", &StubScorer).unwrap(),
            DocumentSentiment::empty()
        );
        assert_eq!(
            aggregator.analyze("  \n ", &StubScorer).unwrap(),
            DocumentSentiment::empty()
        );
    }

    #[test]
    fn scorer_failure_propagates_with_index() {
        let aggregator = SentimentAggregator::new();
        let err = aggregator
            .analyze("First. Second.", &FailingScorer)
            .unwrap_err();

        match err {
            CoreError::Scoring { index, source } => {
                assert_eq!(index, 0);
                assert_eq!(source.scorer, "failing");
            }
            other => panic!("expected Scoring error, got {other:?}"),
        }
    }

    #[test]
    fn means_are_plain_averages() {
        let aggregator = SentimentAggregator::new();
        let doc = aggregator
            .analyze("I love this. Nothing here. I love it too.", &StubScorer)
            .unwrap();

        assert_eq!(doc.sentence_scores.len(), 3);
        let expected = (0.8 + 0.0 + 0.8) / 3.0;
        assert!((doc.overall_polarity - expected).abs() < 1e-12);
        assert!((doc.overall_subjectivity - 0.5).abs() < 1e-12);
    }
}
