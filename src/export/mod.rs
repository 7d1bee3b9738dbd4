//! CSV export of the classified corpus.
//!
//! Writes the full batch to a flat delimited file named after the
//! topic, one row per post.

use crate::models::ClassifiedItem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Deterministic CSV file name for a topic: lowercased, spaces
/// replaced by underscores.
pub fn csv_file_name(topic: &str) -> String {
    let slug = topic.to_lowercase().replace(' ', "_");
    format!("sentiment_analysis_{}.csv", slug)
}

/// Write the classified batch to `dir` as CSV.
///
/// Columns: `index,text,topic,sentiment`, index 1-based in generation
/// order. Returns the path of the written file.
pub fn export_csv(items: &[ClassifiedItem], topic: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(topic));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer
        .write_record(["index", "text", "topic", "sentiment"])
        .context("Failed to write CSV header")?;

    for (index, item) in items.iter().enumerate() {
        writer
            .write_record([
                (index + 1).to_string().as_str(),
                item.text(),
                item.topic(),
                &item.label.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row {}", index + 1))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {}", path.display()))?;

    info!("Exported {} posts to {}", items.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SentimentLabel, TextItem};

    fn sample_items() -> Vec<ClassifiedItem> {
        vec![
            ClassifiedItem {
                item: TextItem::new("I love pizza! 😍", "pizza"),
                label: SentimentLabel::Positive,
            },
            ClassifiedItem {
                item: TextItem::new("Just had pizza, with a comma", "pizza"),
                label: SentimentLabel::Neutral,
            },
        ]
    }

    #[test]
    fn test_csv_file_name_slug() {
        assert_eq!(csv_file_name("pizza"), "sentiment_analysis_pizza.csv");
        assert_eq!(
            csv_file_name("Bubble Tea"),
            "sentiment_analysis_bubble_tea.csv"
        );
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_csv(&sample_items(), "pizza", dir.path()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "sentiment_analysis_pizza.csv"
        );

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "index,text,topic,sentiment");
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].ends_with(",pizza,Positive"));
        // The csv writer quotes fields containing the delimiter.
        assert!(lines[2].contains("\"Just had pizza, with a comma\""));
    }

    #[test]
    fn test_export_empty_batch_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_csv(&[], "pizza", dir.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "index,text,topic,sentiment");
    }

    #[test]
    fn test_export_roundtrips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_csv(&sample_items(), "pizza", dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "I love pizza! 😍");
        assert_eq!(&rows[1][3], "Neutral");
    }
}
