//! Data models for the sentiment pipeline.
//!
//! This module contains all the core data structures used throughout
//! the application for representing posts, sentiment labels, and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Polarity score above the positive threshold.
    Positive,
    /// Polarity score below the negative threshold.
    Negative,
    /// Polarity score inside the dead zone, boundaries included.
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

impl SentimentLabel {
    /// Returns an emoji representation of the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
        }
    }

    /// All labels, in report display order.
    #[allow(dead_code)] // Utility for tests and coverage checks
    pub fn all() -> [SentimentLabel; 3] {
        [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ]
    }
}

/// A single synthesized post about a topic.
///
/// Immutable once produced; the classifier never alters the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    /// Human-readable post text.
    pub text: String,
    /// Topic the post was generated about.
    pub topic: String,
}

impl TextItem {
    /// Creates a new text item.
    pub fn new(text: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            topic: topic.into(),
        }
    }
}

/// A text item paired with its derived sentiment label.
///
/// Created once per item by the classifier, immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    /// The original post.
    #[serde(flatten)]
    pub item: TextItem,
    /// Sentiment derived from the text alone.
    pub label: SentimentLabel,
}

impl ClassifiedItem {
    /// The post text.
    pub fn text(&self) -> &str {
        &self.item.text
    }

    /// The topic the post was generated about.
    pub fn topic(&self) -> &str {
        &self.item.topic
    }
}

/// Count and share of a single label within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCount {
    /// The sentiment label.
    pub label: SentimentLabel,
    /// Number of posts with this label.
    pub count: usize,
    /// Share of the batch, in percent.
    pub percent: f64,
}

/// A representative post for one sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelExample {
    /// The sentiment label.
    pub label: SentimentLabel,
    /// First post in the batch carrying this label.
    pub text: String,
}

/// Metadata about the analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Topic the corpus was generated about.
    pub topic: String,
    /// Date and time of the analysis.
    pub analysis_date: DateTime<Utc>,
    /// Number of posts generated and classified.
    pub total_posts: usize,
    /// RNG seed, when one was injected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Duration of the analysis in seconds.
    pub duration_seconds: f64,
}

/// The complete sentiment analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the run.
    pub metadata: ReportMetadata,
    /// Per-label counts, descending, ties in first-seen order.
    pub breakdown: Vec<LabelCount>,
    /// The label with the highest count.
    pub dominant: SentimentLabel,
    /// One representative post per label present in the batch.
    pub examples: Vec<LabelExample>,
    /// Every classified post, in generation order.
    pub items: Vec<ClassifiedItem>,
}
