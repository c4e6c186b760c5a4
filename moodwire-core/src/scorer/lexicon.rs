//! Lexicon/rule-based sentiment estimation

use std::collections::HashMap;

use crate::error::ScoringError;
use crate::scorer::words::{BOOSTERS, NEGATORS, WORDS};
use crate::scorer::SentenceScorer;
use crate::types::SentenceScore;

/// How many tokens before a lexicon hit a negator may sit
const NEGATION_WINDOW: usize = 2;

/// Polarity multiplier applied under negation.
///
/// Flipping and damping (rather than a plain sign flip) reflects that "not
/// good" is milder than "bad".
const NEGATION_FACTOR: f64 = -0.5;

/// The default lexicon/rule-based scorer.
///
/// Tokenizes a sentence, looks each token up in an embedded scored
/// vocabulary, applies intensifier and negation rules, and averages over the
/// hits. Stateless after construction; scoring never fails.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<&'static str, (f64, f64)>,
}

impl LexiconScorer {
    /// Create a scorer over the embedded vocabulary
    pub fn new() -> Self {
        let words = WORDS
            .iter()
            .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
            .collect();
        Self { words }
    }

    /// Number of scored vocabulary entries
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceScorer for LexiconScorer {
    fn score(&self, sentence: &str) -> Result<SentenceScore, ScoringError> {
        let tokens = tokenize(sentence);

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(base_polarity, base_subjectivity)) = self.words.get(token.as_str()) else {
                continue;
            };

            let mut polarity = base_polarity;
            let mut subjectivity = base_subjectivity;

            if i > 0 {
                if let Some(factor) = booster_factor(&tokens[i - 1]) {
                    polarity *= factor;
                    subjectivity *= factor;
                }
            }
            if is_negated(&tokens, i) {
                polarity *= NEGATION_FACTOR;
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity.clamp(0.0, 1.0);
            hits += 1;
        }

        let (polarity, subjectivity) = if hits == 0 {
            (0.0, 0.0)
        } else {
            (polarity_sum / hits as f64, subjectivity_sum / hits as f64)
        };

        Ok(SentenceScore::new(sentence, polarity, subjectivity))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Lowercase alphanumeric tokens, in-word apostrophes kept ("don't")
fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.to_lowercase()
                .replace('’', "'")
                .trim_matches('\'')
                .to_string()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

fn booster_factor(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|&&(word, _)| word == token)
        .map(|&(_, factor)| factor)
}

fn is_negated(tokens: &[String], i: usize) -> bool {
    tokens[i.saturating_sub(NEGATION_WINDOW)..i]
        .iter()
        .any(|t| NEGATORS.contains(&t.as_str()))
}
