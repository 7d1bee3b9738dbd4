//! Lexicon-based polarity scoring.
//!
//! Maps words and emoji to valences in `[-1, 1]` and scores a text as
//! the mean valence of its matched tokens. Word matching is
//! case-insensitive; text with no matched tokens scores 0.0, so empty
//! or content-free input always has a defined score.

use std::collections::HashMap;

/// Any function mapping text to a continuous polarity score.
///
/// The contract is `score(text) -> f64` in the closed interval
/// `[-1.0, 1.0]`: negative values read negative, positive values read
/// positive, 0.0 is neutral. Implementations must return a defined
/// score for every input, including the empty string.
pub trait PolarityOracle {
    /// Score the polarity of `text`.
    fn score(&self, text: &str) -> f64;
}

/// Word and emoji valences, `(token, valence)` with valence in `[-1, 1]`.
const VALENCES: &[(&str, f64)] = &[
    // Positive words
    ("love", 0.7),
    ("loves", 0.7),
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("best", 0.8),
    ("better", 0.5),
    ("excellent", 0.8),
    ("fantastic", 0.8),
    ("good", 0.5),
    ("great", 0.7),
    ("happy", 0.7),
    ("incredible", 0.8),
    ("wonderful", 0.8),
    // Negative words
    ("awful", -0.8),
    ("bad", -0.5),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("frustrated", -0.6),
    ("hate", -0.8),
    ("hates", -0.8),
    ("headache", -0.5),
    ("overrated", -0.5),
    ("terrible", -0.8),
    ("waste", -0.6),
    ("worst", -0.8),
    // Positive emoji
    ("😍", 0.9),
    ("❤️", 0.8),
    ("🎉", 0.7),
    ("👍", 0.6),
    ("😊", 0.7),
    ("🌟", 0.6),
    ("😄", 0.7),
    // Negative emoji
    ("😞", -0.7),
    ("👎", -0.6),
    ("💸", -0.5),
    ("😤", -0.6),
    ("😣", -0.6),
    ("😠", -0.7),
    ("😔", -0.6),
];

/// The default polarity oracle: a fixed sentiment lexicon.
#[derive(Debug, Clone)]
pub struct LexiconOracle {
    valences: HashMap<&'static str, f64>,
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
        }
    }
}

impl LexiconOracle {
    /// Number of tokens in the lexicon.
    #[allow(dead_code)] // Utility for lexicon inspection
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Whether the lexicon is empty.
    #[allow(dead_code)] // Companion to len()
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl PolarityOracle for LexiconOracle {
    fn score(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut matched = 0usize;

        for token in tokenize(text) {
            if let Some(valence) = self.valences.get(token.as_str()) {
                sum += valence;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }

        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}

/// Split on whitespace, lowercase, and strip edge punctuation.
///
/// Emoji survive untouched: lowercasing and ASCII punctuation trimming
/// only affect ASCII text, so emoji match the lexicon verbatim.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let oracle = LexiconOracle::default();
        assert_eq!(oracle.score(""), 0.0);
    }

    #[test]
    fn test_unmatched_text_scores_zero() {
        let oracle = LexiconOracle::default();
        assert_eq!(oracle.score("Just had pizza"), 0.0);
        assert_eq!(oracle.score("Store sells pizza"), 0.0);
    }

    #[test]
    fn test_positive_text_scores_positive() {
        let oracle = LexiconOracle::default();
        assert!(oracle.score("I love pizza! 😍") > 0.1);
        assert!(oracle.score("Best pizza ever! 🎉") > 0.1);
    }

    #[test]
    fn test_negative_text_scores_negative() {
        let oracle = LexiconOracle::default();
        assert!(oracle.score("I hate pizza 😞") < -0.1);
        assert!(oracle.score("Worst pizza ever 😠") < -0.1);
    }

    #[test]
    fn test_score_is_in_range() {
        let oracle = LexiconOracle::default();
        for text in [
            "love love love 😍 😍 😍",
            "hate hate hate 😠 😠 😠",
            "amazing terrible",
            "",
        ] {
            let score = oracle.score(text);
            assert!((-1.0..=1.0).contains(&score), "score {} for {:?}", score, text);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let oracle = LexiconOracle::default();
        assert_eq!(oracle.score("LOVE"), oracle.score("love"));
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let oracle = LexiconOracle::default();
        assert!(oracle.score("amazing!") > 0.1);
        assert!(oracle.score("terrible...") < -0.1);
    }

    #[test]
    fn test_mixed_text_averages() {
        let oracle = LexiconOracle::default();
        // love (0.7) and hate (-0.8) average to -0.05, inside the dead zone.
        let score = oracle.score("love hate");
        assert!(score.abs() <= 0.1);
    }

    #[test]
    fn test_score_is_deterministic() {
        let oracle = LexiconOracle::default();
        let text = "Can't get enough of pizza! It's incredible 🌟";
        assert_eq!(oracle.score(text), oracle.score(text));
    }
}
