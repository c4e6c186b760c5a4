//! Static lexicon tables for the default scorer
//!
//! Each entry is `(word, polarity, subjectivity)` with polarity in `[-1, 1]`
//! and subjectivity in `[0, 1]`. The vocabulary leans toward news copy:
//! market verbs, incident nouns, and evaluative adjectives.

/// Scored vocabulary
pub(super) const WORDS: &[(&str, f64, f64)] = &[
    // evaluative adjectives, positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.9, 0.9),
    ("wonderful", 1.0, 1.0),
    ("brilliant", 0.9, 0.9),
    ("superb", 0.85, 0.9),
    ("outstanding", 0.9, 0.9),
    ("impressive", 0.7, 0.8),
    ("remarkable", 0.75, 0.75),
    ("beautiful", 0.85, 1.0),
    ("perfect", 0.9, 0.95),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("strong", 0.5, 0.4),
    ("positive", 0.4, 0.5),
    ("promising", 0.6, 0.7),
    ("optimistic", 0.6, 0.8),
    ("innovative", 0.5, 0.6),
    ("safe", 0.4, 0.4),
    ("secure", 0.45, 0.45),
    // positive verbs and events
    ("love", 0.5, 0.6),
    ("like", 0.3, 0.4),
    ("enjoy", 0.5, 0.6),
    ("enjoyed", 0.5, 0.6),
    ("win", 0.6, 0.5),
    ("won", 0.5, 0.4),
    ("wins", 0.6, 0.5),
    ("succeed", 0.6, 0.5),
    ("success", 0.6, 0.5),
    ("successful", 0.65, 0.6),
    ("improve", 0.45, 0.4),
    ("improved", 0.5, 0.4),
    ("improves", 0.45, 0.4),
    ("gain", 0.4, 0.3),
    ("gains", 0.4, 0.3),
    ("growth", 0.4, 0.3),
    ("grow", 0.35, 0.3),
    ("surge", 0.45, 0.45),
    ("surges", 0.45, 0.45),
    ("soar", 0.55, 0.5),
    ("soars", 0.55, 0.5),
    ("rally", 0.4, 0.4),
    ("boost", 0.5, 0.4),
    ("boosts", 0.5, 0.4),
    ("recovery", 0.45, 0.4),
    ("rebound", 0.4, 0.4),
    ("breakthrough", 0.6, 0.6),
    ("praise", 0.5, 0.6),
    ("praised", 0.5, 0.6),
    ("celebrate", 0.6, 0.6),
    ("celebrated", 0.55, 0.6),
    // positive affect
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("pleased", 0.6, 0.8),
    ("delighted", 0.9, 0.9),
    ("thrilled", 0.85, 0.95),
    ("excited", 0.6, 0.85),
    ("exciting", 0.55, 0.8),
    ("hope", 0.4, 0.6),
    ("hopeful", 0.5, 0.7),
    ("relief", 0.4, 0.5),
    // evaluative adjectives, negative
    ("bad", -0.7, 0.65),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.6, 0.7),
    ("poor", -0.4, 0.6),
    ("weak", -0.4, 0.45),
    ("ugly", -0.7, 0.9),
    ("risky", -0.4, 0.6),
    ("dangerous", -0.6, 0.65),
    ("volatile", -0.3, 0.5),
    ("uncertain", -0.3, 0.6),
    ("disappointing", -0.6, 0.75),
    ("disappointed", -0.6, 0.75),
    ("tragic", -0.8, 0.85),
    ("broken", -0.4, 0.45),
    // negative verbs and events
    ("hate", -0.6, 0.9),
    ("dislike", -0.4, 0.6),
    ("fail", -0.5, 0.5),
    ("failed", -0.55, 0.5),
    ("fails", -0.5, 0.5),
    ("failure", -0.6, 0.6),
    ("lose", -0.4, 0.4),
    ("lost", -0.35, 0.4),
    ("loss", -0.4, 0.4),
    ("losses", -0.4, 0.4),
    ("decline", -0.35, 0.35),
    ("declines", -0.35, 0.35),
    ("drop", -0.3, 0.3),
    ("drops", -0.3, 0.3),
    ("plunge", -0.5, 0.5),
    ("plunges", -0.5, 0.5),
    ("slump", -0.45, 0.45),
    ("crash", -0.6, 0.5),
    ("collapse", -0.6, 0.55),
    ("crisis", -0.6, 0.55),
    ("recession", -0.55, 0.5),
    ("inflation", -0.3, 0.35),
    ("layoffs", -0.5, 0.45),
    ("shutdown", -0.4, 0.4),
    ("warn", -0.3, 0.4),
    ("warns", -0.3, 0.4),
    ("warning", -0.35, 0.4),
    ("threat", -0.5, 0.5),
    ("threats", -0.5, 0.5),
    ("danger", -0.55, 0.55),
    ("fraud", -0.7, 0.6),
    ("scandal", -0.6, 0.6),
    ("corruption", -0.65, 0.6),
    ("lawsuit", -0.35, 0.4),
    ("disaster", -0.8, 0.7),
    ("catastrophe", -0.85, 0.8),
    ("tragedy", -0.75, 0.8),
    ("death", -0.55, 0.5),
    ("dead", -0.55, 0.5),
    ("kill", -0.65, 0.6),
    ("killed", -0.65, 0.6),
    ("war", -0.5, 0.4),
    ("conflict", -0.4, 0.4),
    ("chaos", -0.6, 0.65),
    ("panic", -0.6, 0.7),
    // negative affect
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.8),
    ("angry", -0.5, 0.9),
    ("furious", -0.8, 0.95),
    ("fear", -0.45, 0.6),
    ("fears", -0.45, 0.6),
    ("worry", -0.4, 0.65),
    ("worried", -0.45, 0.7),
    ("concern", -0.3, 0.5),
    ("concerns", -0.3, 0.5),
    ("doubt", -0.35, 0.6),
    ("trouble", -0.4, 0.45),
    ("problem", -0.3, 0.4),
    ("problems", -0.3, 0.4),
];

/// Tokens that flip and damp the polarity of a nearby hit
pub(super) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "hardly", "scarcely", "without",
    "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't",
    "couldn't", "shouldn't", "can't", "ain't",
];

/// Tokens that scale the next hit: `(token, factor)`.
///
/// Factors above 1 intensify, below 1 damp.
pub(super) const BOOSTERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("remarkably", 1.3),
    ("highly", 1.25),
    ("truly", 1.25),
    ("deeply", 1.25),
    ("really", 1.2),
    ("quite", 1.1),
    ("fairly", 0.9),
    ("moderately", 0.85),
    ("somewhat", 0.8),
    ("slightly", 0.7),
];
