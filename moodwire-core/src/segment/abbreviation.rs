//! Abbreviation matching with backward word scanning
//!
//! A dot closing a known abbreviation ("Dr.", "U.S.", "e.g.") does not end a
//! sentence. Matching scans back from the dot to the start of the preceding
//! word, then looks the word up case-insensitively.

use std::collections::HashSet;

/// Set of known abbreviations, stored lowercased without the trailing dot
#[derive(Debug, Clone, Default)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

/// Default English abbreviation vocabulary.
///
/// Entries that double as ordinary sentence-final words ("no", "sat", "sun",
/// "may") are deliberately absent: a false suppression merges two sentences,
/// which is worse than the occasional extra split.
const DEFAULT_ENGLISH: &[&str] = &[
    // titles
    "dr", "mr", "mrs", "ms", "prof", "rev", "hon", "fr", "gen", "gov", "sen", "rep", "sgt",
    "capt", "lt", "cmdr", "jr", "sr", "st",
    // latinisms and editorial
    "e.g", "i.e", "etc", "cf", "al", "vs", "viz", "approx", "ca",
    // corporate
    "inc", "ltd", "co", "corp", "dept", "assn", "bros",
    // references
    "fig", "vol", "p", "pp", "ch", "sec", "ed", "eds", "est",
    // months and weekdays that are not also words
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "mon", "tue", "tues", "wed", "thu", "thurs", "fri",
    // dotted initialisms
    "u.s", "u.s.a", "u.k", "u.n", "d.c", "a.m", "p.m", "ph.d", "b.c", "a.d",
];

impl AbbreviationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default English set
    pub fn english() -> Self {
        let mut set = Self::new();
        for abbr in DEFAULT_ENGLISH {
            set.insert(abbr);
        }
        set
    }

    /// Insert an abbreviation.
    ///
    /// Normalizes to lowercase and strips a trailing dot. Dotted entries are
    /// also matched at each interior dot, so "U.S.A" covers "U." and "U.S."
    /// while scanning left to right.
    pub fn insert(&mut self, abbr: &str) {
        let normalized = abbr.trim().trim_end_matches('.').to_lowercase();
        if normalized.is_empty() {
            return;
        }

        if normalized.contains('.') {
            let parts: Vec<&str> = normalized.split('.').collect();
            for i in 1..parts.len() {
                self.entries.insert(parts[..i].join("."));
            }
        }

        self.entries.insert(normalized);
    }

    /// Insert every abbreviation from an iterator
    pub fn extend<I, S>(&mut self, abbrs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbr in abbrs {
            self.insert(abbr.as_ref());
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the dot at byte position `dot_pos` close an abbreviation?
    ///
    /// Scans backwards from the dot to the start of the preceding word,
    /// stopping at whitespace and clause delimiters; dots and letters stay
    /// inside the word so "U.S" is scanned whole. A lone capital letter is
    /// read as an initial ("J. K. Rowling").
    pub fn is_abbreviation(&self, text: &str, dot_pos: usize) -> bool {
        if dot_pos == 0 || dot_pos > text.len() || !text.is_char_boundary(dot_pos) {
            return false;
        }

        let before = &text[..dot_pos];
        let word_start = before
            .char_indices()
            .rev()
            .find(|&(_, c)| is_word_break(c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = &before[word_start..];
        if word.is_empty() {
            return false;
        }

        if word.len() == 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
            return true;
        }

        self.entries.contains(&word.to_lowercase())
    }
}

fn is_word_break(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '!' | '?'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match() {
        let set = AbbreviationSet::english();

        assert!(set.is_abbreviation("Dr.", 2));
        assert!(set.is_abbreviation("Hello Dr.", 8));
        assert!(set.is_abbreviation("mr.", 2));
        assert!(!set.is_abbreviation("door.", 4));
    }

    #[test]
    fn dotted_initialisms_match_at_every_dot() {
        let set = AbbreviationSet::english();

        // "U.S." has dots at byte 1 and byte 3
        assert!(set.is_abbreviation("U.S.", 1));
        assert!(set.is_abbreviation("U.S.", 3));
        assert!(set.is_abbreviation("from the U.S.", 12));
        assert!(set.is_abbreviation("U.S.A.", 5));
    }

    #[test]
    fn single_capitals_read_as_initials() {
        let set = AbbreviationSet::english();

        assert!(set.is_abbreviation("J. K. Rowling", 1));
        assert!(set.is_abbreviation("J. K. Rowling", 4));
        assert!(!set.is_abbreviation("x. point", 1));
    }

    #[test]
    fn custom_entries() {
        let mut set = AbbreviationSet::english();
        set.insert("Pty.");

        assert!(set.is_abbreviation("Acme Pty.", 8));
        assert!(set.is_abbreviation("acme pty.", 8));
    }

    #[test]
    fn delimiters_bound_the_word_scan() {
        let set = AbbreviationSet::english();

        // word starts after the paren, not at line start
        assert!(set.is_abbreviation("(e.g.", 4));
        assert!(set.is_abbreviation("fruit (e.g. apples)", 10));
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let set = AbbreviationSet::english();

        assert!(!set.is_abbreviation("Dr.", 0));
        assert!(!set.is_abbreviation("Dr.", 99));
    }
}
