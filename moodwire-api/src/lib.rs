//! Public API for Moodwire sentiment analysis
//!
//! This crate provides a clean, stable interface over the aggregation core:
//! analyze a block of text or a batch of news articles and get back
//! document- and corpus-level sentiment, ready for a dashboard to render.
//!
//! # Example
//!
//! ```rust
//! use moodwire_api::analyze_text;
//!
//! let analysis = analyze_text("The launch was a great success. Fans were thrilled.").unwrap();
//!
//! assert_eq!(analysis.document.sentence_scores.len(), 2);
//! assert!(analysis.document.overall_polarity > 0.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;
use std::time::Instant;

use moodwire_core::{corpus, SentenceSplitter, SentimentAggregator};
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Analysis, Article, CorpusReport, Input, Metadata, Mood, DEFAULT_MOOD_THRESHOLD};
pub use error::{ApiError, Result};
pub use moodwire_core::{
    CorpusSummary, DocumentSentiment, DocumentSummary, LexiconScorer, ScoringError, SentenceScore,
    SentenceScorer,
};

/// Main entry point for sentiment analysis.
///
/// Owns a configured sentence splitter and a scorer backend; the default
/// backend is the built-in lexicon scorer. Construction is cheap and the
/// analyzer is immutable, so one instance can serve concurrent callers.
pub struct SentimentAnalyzer {
    aggregator: SentimentAggregator,
    scorer: Arc<dyn SentenceScorer + Send + Sync>,
    config: Config,
}

impl SentimentAnalyzer {
    /// Create an analyzer with default configuration and the lexicon scorer
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let splitter = if config.extra_abbreviations.is_empty() {
            SentenceSplitter::new()
        } else {
            SentenceSplitter::with_extra_abbreviations(&config.extra_abbreviations)
        };

        Ok(Self {
            aggregator: SentimentAggregator::with_splitter(splitter),
            scorer: Arc::new(LexiconScorer::new()),
            config,
        })
    }

    /// Create an analyzer with a custom scoring backend
    pub fn with_scorer<S>(scorer: S) -> Result<Self>
    where
        S: SentenceScorer + Send + Sync + 'static,
    {
        let mut analyzer = Self::new()?;
        analyzer.scorer = Arc::new(scorer);
        Ok(analyzer)
    }

    /// Replace the scoring backend, keeping the rest of the configuration
    pub fn set_scorer<S>(&mut self, scorer: S)
    where
        S: SentenceScorer + Send + Sync + 'static,
    {
        self.scorer = Arc::new(scorer);
    }

    /// The current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name of the active scoring backend
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Analyze a single input and return document-level sentiment.
    ///
    /// Empty input yields a well-formed zero-valued result; scorer failures
    /// surface as [`ApiError::Core`].
    pub fn analyze(&self, input: Input) -> Result<Analysis> {
        let start = Instant::now();
        let text = input.read_text()?;

        let document = self.aggregator.analyze(&text, self.scorer.as_ref())?;

        let metadata = Metadata {
            total_bytes: text.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            scorer: self.scorer.name().to_string(),
        };
        debug!(
            sentences = document.sentence_scores.len(),
            total_bytes = metadata.total_bytes,
            "analyzed input"
        );

        Ok(Analysis { document, metadata })
    }

    /// Analyze text directly (convenience method)
    pub fn analyze_text(&self, text: &str) -> Result<Analysis> {
        self.analyze(Input::from_text(text))
    }

    /// Analyze a batch of articles and summarize the corpus.
    ///
    /// Each article's headline and teaser are analyzed together; identity
    /// fields pass through untouched. `documents` keeps the caller-supplied
    /// article order - callers that parallelize scoring elsewhere must
    /// restore that order before summarizing, since extreme-list
    /// tie-breaking depends on it. An empty batch yields an empty summary.
    pub fn analyze_articles(&self, articles: &[Article]) -> Result<CorpusReport> {
        let start = Instant::now();
        let mut total_bytes = 0usize;

        let mut documents = Vec::with_capacity(articles.len());
        for article in articles {
            let text = article.analysis_text();
            total_bytes += text.len();

            let sentiment = self.aggregator.analyze(&text, self.scorer.as_ref())?;
            documents.push(DocumentSummary {
                id: article.id.clone(),
                title: article.title.clone(),
                polarity: sentiment.overall_polarity,
                subjectivity: sentiment.overall_subjectivity,
                source_url: article.url.clone(),
                published_at: article.published_at,
            });
        }

        let summary = corpus::summarize(&documents, self.config.top_k)?;

        let metadata = Metadata {
            total_bytes,
            processing_time_ms: start.elapsed().as_millis() as u64,
            scorer: self.scorer.name().to_string(),
        };
        debug!(
            articles = documents.len(),
            mean_polarity = summary.mean_polarity,
            "summarized article batch"
        );

        Ok(CorpusReport {
            summary,
            documents,
            metadata,
        })
    }

    /// Label a polarity with the configured mood threshold
    pub fn mood(&self, polarity: f64) -> Mood {
        Mood::from_polarity(polarity, self.config.mood_threshold)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new().expect("default analyzer creation should not fail")
    }
}

// Convenience functions

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> Result<Analysis> {
    let analyzer = SentimentAnalyzer::new()?;
    analyzer.analyze(Input::from_text(text))
}

/// Analyze a batch of articles with default configuration
pub fn summarize_articles(articles: &[Article]) -> Result<CorpusReport> {
    let analyzer = SentimentAnalyzer::new()?;
    analyzer.analyze_articles(articles)
}
