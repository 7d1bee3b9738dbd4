//! Threshold classification of polarity scores.
//!
//! The thresholds are design constants, not configuration: a score
//! strictly greater than 0.1 is Positive, strictly less than -0.1 is
//! Negative, and everything else, the boundary values included, is
//! Neutral.

use crate::analysis::lexicon::{LexiconOracle, PolarityOracle};
use crate::models::{ClassifiedItem, SentimentLabel, TextItem};

/// Scores strictly above this classify as Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores strictly below this classify as Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Classifies posts by delegating polarity scoring to an oracle.
pub struct SentimentClassifier<O: PolarityOracle> {
    oracle: O,
}

impl Default for SentimentClassifier<LexiconOracle> {
    fn default() -> Self {
        Self::new(LexiconOracle::default())
    }
}

impl<O: PolarityOracle> SentimentClassifier<O> {
    /// Create a classifier over the given oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Classify a single text. Pure: identical text, identical label.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        let score = self.oracle.score(text);

        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Classify one item into a new, immutable [`ClassifiedItem`].
    pub fn classify_item(&self, item: TextItem) -> ClassifiedItem {
        let label = self.classify(&item.text);
        ClassifiedItem { item, label }
    }

    /// Classify a whole corpus, preserving input order.
    ///
    /// Invokes `on_item` after each classification, for progress
    /// reporting.
    pub fn classify_batch<F>(&self, items: Vec<TextItem>, mut on_item: F) -> Vec<ClassifiedItem>
    where
        F: FnMut(&ClassifiedItem),
    {
        items
            .into_iter()
            .map(|item| {
                let classified = self.classify_item(item);
                on_item(&classified);
                classified
            })
            .collect()
    }
}
