//! Terminal bar chart of sentiment counts.

use crate::models::LabelCount;

/// Widest bar, in block characters.
const MAX_BAR_WIDTH: usize = 40;

/// Render label counts as proportional horizontal bars.
///
/// The largest count gets the full bar width; the rest scale down from
/// it. Rows follow the breakdown order (descending count, first-seen
/// ties).
pub fn render_bar_chart(breakdown: &[LabelCount]) -> String {
    let max_count = breakdown.iter().map(|row| row.count).max().unwrap_or(0);
    if max_count == 0 {
        return String::new();
    }

    let mut chart = String::new();
    for row in breakdown {
        let width = (row.count * MAX_BAR_WIDTH).div_ceil(max_count);
        chart.push_str(&format!(
            "{} {:<8} {} {} ({:.1}%)\n",
            row.label.emoji(),
            row.label.to_string(),
            "█".repeat(width),
            row.count,
            row.percent,
        ));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    fn row(label: SentimentLabel, count: usize, percent: f64) -> LabelCount {
        LabelCount {
            label,
            count,
            percent,
        }
    }

    #[test]
    fn test_empty_breakdown_renders_nothing() {
        assert_eq!(render_bar_chart(&[]), "");
    }

    #[test]
    fn test_largest_count_gets_full_width() {
        let chart = render_bar_chart(&[
            row(SentimentLabel::Positive, 10, 62.5),
            row(SentimentLabel::Negative, 5, 31.25),
            row(SentimentLabel::Neutral, 1, 6.25),
        ]);

        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);

        let bar_width = |line: &str| line.chars().filter(|c| *c == '█').count();
        assert_eq!(bar_width(lines[0]), MAX_BAR_WIDTH);
        assert_eq!(bar_width(lines[1]), MAX_BAR_WIDTH / 2);
        // Nonzero counts always get at least one block.
        assert!(bar_width(lines[2]) >= 1);
    }

    #[test]
    fn test_rows_follow_breakdown_order() {
        let chart = render_bar_chart(&[
            row(SentimentLabel::Neutral, 3, 60.0),
            row(SentimentLabel::Positive, 2, 40.0),
        ]);

        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[0].contains("Neutral"));
        assert!(lines[1].contains("Positive"));
    }

    #[test]
    fn test_counts_and_percent_in_output() {
        let chart = render_bar_chart(&[row(SentimentLabel::Positive, 7, 70.0)]);
        assert!(chart.contains("7 (70.0%)"));
    }
}
