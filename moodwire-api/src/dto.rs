//! Data Transfer Objects for the API

use crate::error::{ApiError, Result};
use chrono::{DateTime, Utc};
use moodwire_core::{CorpusSummary, DocumentSentiment, DocumentSummary};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for analysis
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A news article record as handed over by the fetch collaborator.
///
/// Identity fields (`id`, `url`, `published_at`) pass through the pipeline
/// untouched into [`DocumentSummary`] rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Source-assigned identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Teaser/summary text, possibly empty
    pub description: String,
    /// Link to the article
    pub url: String,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article record
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            url: url.into(),
            published_at,
        }
    }

    /// The text that gets analyzed: headline plus teaser
    pub fn analysis_text(&self) -> String {
        if self.description.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.title, self.description)
        }
    }
}

/// Run statistics attached to every analysis result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes of analyzed text
    pub total_bytes: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
    /// Name of the scorer that produced the result
    pub scorer: String,
}

/// Result of analyzing a single input
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Document-level sentiment with per-sentence detail
    pub document: DocumentSentiment,
    /// Run statistics
    pub metadata: Metadata,
}

/// Result of analyzing a batch of articles
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorpusReport {
    /// Corpus-level aggregate
    pub summary: CorpusSummary,
    /// Per-article rows in the caller-supplied order
    pub documents: Vec<DocumentSummary>,
    /// Run statistics
    pub metadata: Metadata,
}

/// Default polarity threshold for [`Mood`] labeling, matching the
/// dashboard's traffic-light convention
pub const DEFAULT_MOOD_THRESHOLD: f64 = 0.3;

/// Categorical sentiment label.
///
/// Labeling is presentation policy layered on top of the continuous
/// polarity score; the threshold is always supplied by the caller and no
/// core type carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mood {
    /// Polarity above the threshold
    Positive,
    /// Polarity within the threshold band around zero
    Neutral,
    /// Polarity below the negated threshold
    Negative,
}

impl Mood {
    /// Label a polarity against a threshold.
    ///
    /// `polarity > threshold` is positive, `polarity < -threshold` is
    /// negative, anything in between (inclusive) is neutral.
    pub fn from_polarity(polarity: f64, threshold: f64) -> Self {
        if polarity > threshold {
            Mood::Positive
        } else if polarity < -threshold {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_text_concatenates_title_and_description() {
        let article = Article::new(
            "reuters",
            "Markets rally",
            "Stocks closed higher.",
            "https://news.example/1",
            Utc::now(),
        );

        assert_eq!(article.analysis_text(), "Markets rally Stocks closed higher.");
    }

    #[test]
    fn analysis_text_falls_back_to_title() {
        let article = Article::new("ap", "Markets rally", "  ", "https://news.example/2", Utc::now());

        assert_eq!(article.analysis_text(), "Markets rally");
    }

    #[test]
    fn mood_labeling_follows_threshold() {
        assert_eq!(Mood::from_polarity(0.5, DEFAULT_MOOD_THRESHOLD), Mood::Positive);
        assert_eq!(Mood::from_polarity(-0.5, DEFAULT_MOOD_THRESHOLD), Mood::Negative);
        assert_eq!(Mood::from_polarity(0.0, DEFAULT_MOOD_THRESHOLD), Mood::Neutral);
        // the threshold itself is neutral in both directions
        assert_eq!(Mood::from_polarity(0.3, DEFAULT_MOOD_THRESHOLD), Mood::Neutral);
        assert_eq!(Mood::from_polarity(-0.3, DEFAULT_MOOD_THRESHOLD), Mood::Neutral);
        // a custom threshold moves the band
        assert_eq!(Mood::from_polarity(0.2, 0.1), Mood::Positive);
    }
}
