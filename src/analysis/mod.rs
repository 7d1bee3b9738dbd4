//! Sentiment classification and aggregation.
//!
//! The classifier delegates polarity scoring to a [`PolarityOracle`];
//! the aggregator tallies labels with first-seen tie-break ordering.

pub mod aggregator;
pub mod classifier;
pub mod lexicon;

pub use aggregator::{aggregate, first_examples, AggregateCounts};
pub use classifier::SentimentClassifier;
pub use lexicon::{LexiconOracle, PolarityOracle};

use thiserror::Error;

/// Precondition violations in the analysis pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The dominant label of an empty batch is undefined.
    #[error("cannot determine the dominant sentiment of an empty batch")]
    EmptyBatch,
}
