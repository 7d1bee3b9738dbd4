//! Label aggregation and ordering.
//!
//! Tallies sentiment labels over a classified batch and orders them by
//! descending count. Ties keep the order in which each label was first
//! seen while scanning the batch front-to-back; the ordering is never
//! alphabetical.

use crate::analysis::AnalysisError;
use crate::models::{ClassifiedItem, LabelCount, LabelExample, SentimentLabel};

/// Per-label counts over one classified batch.
///
/// Entries are sorted by descending count; equal counts keep first-seen
/// order. A label with zero occurrences is absent entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateCounts {
    entries: Vec<(SentimentLabel, usize)>,
    total: usize,
}

/// Tally labels over a classified batch.
pub fn aggregate(items: &[ClassifiedItem]) -> AggregateCounts {
    // First-seen insertion order is the tie-break, so counts live in a
    // Vec rather than a HashMap.
    let mut entries: Vec<(SentimentLabel, usize)> = Vec::new();

    for item in items {
        match entries.iter_mut().find(|(label, _)| *label == item.label) {
            Some((_, count)) => *count += 1,
            None => entries.push((item.label, 1)),
        }
    }

    // sort_by_key is stable, so ties stay in first-seen order.
    entries.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    AggregateCounts {
        entries,
        total: items.len(),
    }
}

impl AggregateCounts {
    /// Labels and counts, descending, ties in first-seen order.
    pub fn entries(&self) -> &[(SentimentLabel, usize)] {
        &self.entries
    }

    /// Total number of classified items (sum of all counts).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the batch was empty.
    #[allow(dead_code)] // Utility for callers guarding dominant()
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Count for one label; 0 when absent.
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Share of one label in percent; 0.0 for an empty batch.
    pub fn percent(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.count(label) as f64 / self.total as f64) * 100.0
    }

    /// The label with the highest count.
    ///
    /// Undefined over an empty batch: errs rather than guessing a
    /// default label.
    pub fn dominant(&self) -> Result<SentimentLabel, AnalysisError> {
        self.entries
            .first()
            .map(|(label, _)| *label)
            .ok_or(AnalysisError::EmptyBatch)
    }

    /// Counts as serializable [`LabelCount`] rows, in entry order.
    pub fn breakdown(&self) -> Vec<LabelCount> {
        self.entries
            .iter()
            .map(|(label, count)| LabelCount {
                label: *label,
                count: *count,
                percent: self.percent(*label),
            })
            .collect()
    }
}

/// First post per label present in the batch, in label-first-seen order.
pub fn first_examples(items: &[ClassifiedItem]) -> Vec<LabelExample> {
    let mut examples: Vec<LabelExample> = Vec::new();

    for item in items {
        if !examples.iter().any(|e| e.label == item.label) {
            examples.push(LabelExample {
                label: item.label,
                text: item.text().to_string(),
            });
        }
    }

    examples
}
