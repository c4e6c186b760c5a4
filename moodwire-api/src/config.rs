//! High-level configuration API

use crate::dto::DEFAULT_MOOD_THRESHOLD;
use crate::error::{ApiError, Result};
use moodwire_core::DEFAULT_TOP_K;

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) top_k: usize,
    pub(crate) mood_threshold: f64,
    pub(crate) extra_abbreviations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            mood_threshold: DEFAULT_MOOD_THRESHOLD,
            extra_abbreviations: Vec::new(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Number of extreme documents kept per direction in corpus summaries
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Polarity threshold used for mood labeling
    pub fn mood_threshold(&self) -> f64 {
        self.mood_threshold
    }

    /// Abbreviations added on top of the default English set
    pub fn extra_abbreviations(&self) -> &[String] {
        &self.extra_abbreviations
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of extreme documents kept per direction
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Set the polarity threshold for mood labeling
    pub fn mood_threshold(mut self, threshold: f64) -> Self {
        self.config.mood_threshold = threshold;
        self
    }

    /// Add one abbreviation to the splitter's vocabulary
    pub fn extra_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.config.extra_abbreviations.push(abbreviation.into());
        self
    }

    /// Add several abbreviations to the splitter's vocabulary
    pub fn extra_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .extra_abbreviations
            .extend(abbreviations.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.top_k == 0 {
            return Err(ApiError::Config("top_k must be at least 1".to_string()));
        }
        if !self.config.mood_threshold.is_finite() || self.config.mood_threshold < 0.0 {
            return Err(ApiError::Config(
                "mood_threshold must be finite and non-negative".to_string(),
            ));
        }

        Ok(self.config)
    }
}
