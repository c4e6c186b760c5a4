//! Rule-based sentence segmentation
//!
//! Splits text on terminal punctuation (`.`, `!`, `?`) with three
//! suppression rules: decimal points, ellipsis runs, and known
//! abbreviations. A closing quote or bracket straight after a terminator is
//! attached to the finished sentence.
//!
//! Segmentation is deterministic and side-effect free: the same input always
//! yields the same sentences, and empty input yields an empty list rather
//! than an error.

mod abbreviation;
mod terminator;

pub use abbreviation::AbbreviationSet;
pub use terminator::{classify_dot, DotRole, TerminatorSet};

use std::sync::OnceLock;

/// Sentence splitter with configurable abbreviation vocabulary
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminators: TerminatorSet,
    abbreviations: AbbreviationSet,
}

impl SentenceSplitter {
    /// Create a splitter with the default English rule set
    pub fn new() -> Self {
        Self {
            terminators: TerminatorSet::english(),
            abbreviations: AbbreviationSet::english(),
        }
    }

    /// Create a splitter with extra abbreviations on top of the default set
    pub fn with_extra_abbreviations<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut abbreviations = AbbreviationSet::english();
        abbreviations.extend(extra);
        Self {
            terminators: TerminatorSet::english(),
            abbreviations,
        }
    }

    /// The abbreviation vocabulary in use
    pub fn abbreviations(&self) -> &AbbreviationSet {
        &self.abbreviations
    }

    /// Split `text` into sentences in order of appearance.
    ///
    /// Sentences come back trimmed of surrounding whitespace. Empty or
    /// whitespace-only input yields an empty vector. Text without any
    /// accepted boundary is a single sentence.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if self.terminators.contains(ch) {
                let prev = if i > 0 { Some(chars[i - 1].1) } else { None };
                let next = chars.get(i + 1).map(|&(_, c)| c);

                if self.is_boundary(text, pos, ch, prev, next) {
                    // attach closing quotes/brackets to the finished sentence
                    let mut end_idx = i + 1;
                    while end_idx < chars.len() && is_closer(chars[end_idx].1) {
                        end_idx += 1;
                    }
                    let end_byte = chars.get(end_idx).map_or(text.len(), |&(p, _)| p);

                    push_trimmed(&mut sentences, &text[start..end_byte]);
                    start = end_byte;
                    i = end_idx;
                    continue;
                }
            }
            i += 1;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn is_boundary(
        &self,
        text: &str,
        pos: usize,
        ch: char,
        prev: Option<char>,
        next: Option<char>,
    ) -> bool {
        // a boundary needs whitespace, a closing mark, or end of text after
        // the terminator; this also rejects URLs, decimals, and "?!" runs
        // short of their last character
        if let Some(n) = next {
            if !n.is_whitespace() && !is_closer(n) {
                return false;
            }
        }

        if ch == '.' {
            match classify_dot(prev, next) {
                DotRole::Decimal | DotRole::Ellipsis => return false,
                DotRole::Ordinary => {}
            }
            if self.abbreviations.is_abbreviation(text, pos) {
                return false;
            }
        }

        true
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared splitter with the default English rule set.
///
/// Built once on first use and reused afterwards; calling this redundantly
/// is safe and cheap.
pub fn default_splitter() -> &'static SentenceSplitter {
    static DEFAULT: OnceLock<SentenceSplitter> = OnceLock::new();
    DEFAULT.get_or_init(SentenceSplitter::new)
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '}' | '”' | '’')
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("I love this. I hate that. Do you?");

        assert_eq!(
            sentences,
            vec!["I love this.", "I hate that.", "Do you?"]
        );
    }

    #[test]
    fn empty_and_whitespace_input_yield_nothing() {
        let splitter = SentenceSplitter::new();

        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   \n\t ").is_empty());
    }

    #[test]
    fn text_without_boundary_is_one_sentence() {
        let splitter = SentenceSplitter::new();

        assert_eq!(splitter.split("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Dr. Smith arrived. He was late.");

        assert_eq!(sentences, vec!["Dr. Smith arrived.", "He was late."]);
    }

    #[test]
    fn initialisms_do_not_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("The U.S. economy grew. Markets cheered.");

        assert_eq!(
            sentences,
            vec!["The U.S. economy grew.", "Markets cheered."]
        );
    }

    #[test]
    fn decimals_and_urls_do_not_split() {
        let splitter = SentenceSplitter::new();

        assert_eq!(
            splitter.split("Pi is 3.14 roughly. Visit example.com today."),
            vec!["Pi is 3.14 roughly.", "Visit example.com today."]
        );
    }

    #[test]
    fn ellipsis_stays_inside_a_sentence() {
        let splitter = SentenceSplitter::new();

        assert_eq!(
            splitter.split("Well... that happened. Moving on."),
            vec!["Well... that happened.", "Moving on."]
        );
    }

    #[test]
    fn closing_quote_attaches_to_sentence() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("He said \"Stop.\" Then he left.");

        assert_eq!(sentences, vec!["He said \"Stop.\"", "Then he left."]);
    }

    #[test]
    fn terminator_runs_end_once() {
        let splitter = SentenceSplitter::new();

        assert_eq!(
            splitter.split("What?! Really? Yes."),
            vec!["What?!", "Really?", "Yes."]
        );
    }

    #[test]
    fn trailing_text_without_terminator_is_kept() {
        let splitter = SentenceSplitter::new();

        assert_eq!(
            splitter.split("First sentence. and a fragment"),
            vec!["First sentence.", "and a fragment"]
        );
    }

    #[test]
    fn extra_abbreviations_are_honored() {
        let splitter = SentenceSplitter::with_extra_abbreviations(["Pty"]);
        let sentences = splitter.split("Acme Pty. shares rose. Analysts agreed.");

        assert_eq!(
            sentences,
            vec!["Acme Pty. shares rose.", "Analysts agreed."]
        );
    }

    #[test]
    fn same_input_same_output() {
        let splitter = SentenceSplitter::new();
        let text = "One. Two! Three?";

        assert_eq!(splitter.split(text), splitter.split(text));
    }

    #[test]
    fn default_splitter_is_shared() {
        let a = default_splitter() as *const SentenceSplitter;
        let b = default_splitter() as *const SentenceSplitter;

        assert_eq!(a, b);
    }
}
