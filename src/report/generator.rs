//! Report generation.
//!
//! This module renders a finished analysis as a console-style text
//! report, a Markdown document, or JSON.

use crate::models::{LabelCount, LabelExample, Report, ReportMetadata, SentimentLabel};
use crate::report::chart::render_bar_chart;
use anyhow::Result;

/// Longest example post shown in a report, in characters.
const MAX_EXAMPLE_CHARS: usize = 100;

/// Generate the console-style text report.
pub fn generate_text_report(report: &Report, include_chart: bool) -> String {
    let mut output = String::new();
    let divider = "━".repeat(40);

    output.push_str("📊 SENTIMENT ANALYSIS REPORT\n");
    output.push_str(&format!("Topic: {}\n", title_case(&report.metadata.topic)));
    output.push_str(&format!(
        "Date: {}\n",
        report.metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Total posts: {}\n", report.metadata.total_posts));
    output.push_str(&format!("Most common sentiment: {}\n", report.dominant));

    output.push_str(&format!("\nResults:\n{}\n", divider));
    for row in &report.breakdown {
        output.push_str(&format!(
            "{} {}: {} ({:.1}%)\n",
            row.label.emoji(),
            row.label,
            row.count,
            row.percent
        ));
    }

    if include_chart {
        output.push_str(&format!("\n{}\n", divider));
        output.push_str(&render_bar_chart(&report.breakdown));
    }

    output.push_str(&format!("\nWhat this means:\n{}\n", divider));
    output.push_str(&interpretation(report.dominant, &report.metadata.topic));
    output.push('\n');

    if !report.examples.is_empty() {
        output.push_str(&format!("\nExample posts:\n{}\n", divider));
        for example in &report.examples {
            output.push_str(&format!(
                "{} {}: \"{}\"\n",
                example.label.emoji(),
                example.label,
                truncate(&example.text, MAX_EXAMPLE_CHARS)
            ));
        }
    }

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report, include_chart: bool) -> String {
    let mut output = String::new();

    output.push_str("# Moodscan Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_summary_section(
        &report.breakdown,
        report.dominant,
        &report.metadata.topic,
    ));

    if include_chart {
        output.push_str("## Chart\n\n```\n");
        output.push_str(&render_bar_chart(&report.breakdown));
        output.push_str("```\n\n");
    }

    output.push_str(&generate_examples_section(&report.examples));
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Topic:** {}\n", title_case(&metadata.topic)));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Posts Analyzed:** {}\n", metadata.total_posts));
    if let Some(seed) = metadata.seed {
        section.push_str(&format!("- **Seed:** {}\n", seed));
    }
    section.push_str(&format!(
        "- **Analysis Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the summary section with the sentiment breakdown table.
fn generate_summary_section(
    breakdown: &[LabelCount],
    dominant: SentimentLabel,
    topic: &str,
) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str(&format!(
        "Most common sentiment: {} **{}**\n\n",
        dominant.emoji(),
        dominant
    ));

    section.push_str("| Sentiment | Posts | Share |\n");
    section.push_str("|:---|:---:|:---:|\n");
    for row in breakdown {
        section.push_str(&format!(
            "| {} {} | {} | {:.1}% |\n",
            row.label.emoji(),
            row.label,
            row.count,
            row.percent
        ));
    }
    section.push('\n');

    section.push_str(&interpretation(dominant, topic));
    section.push_str("\n\n");

    section
}

/// Generate the example posts section.
fn generate_examples_section(examples: &[LabelExample]) -> String {
    if examples.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Example Posts\n\n");
    for example in examples {
        section.push_str(&format!(
            "> {} **{}:** {}\n\n",
            example.label.emoji(),
            example.label,
            truncate(&example.text, MAX_EXAMPLE_CHARS)
        ));
    }

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    "---\n\n*Report generated by moodscan*\n".to_string()
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// One-line reading of the dominant sentiment.
fn interpretation(dominant: SentimentLabel, topic: &str) -> String {
    match dominant {
        SentimentLabel::Positive => format!(
            "Great news! Most people seem to have positive feelings about {}!",
            topic
        ),
        SentimentLabel::Negative => format!(
            "It looks like many people have concerns or negative feelings about {}.",
            topic
        ),
        SentimentLabel::Neutral => {
            format!("People seem to have mixed or neutral feelings about {}.", topic)
        }
    }
}

/// Uppercase the first letter of each word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max` characters, appending an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max).collect();
    format!("{}...", cut)
}
