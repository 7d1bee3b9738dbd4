//! Report rendering modules.
//!
//! Text, Markdown, and JSON renderings of a finished analysis, plus the
//! terminal bar chart embedded in them.

pub mod chart;
pub mod generator;

pub use chart::render_bar_chart;
pub use generator::{generate_json_report, generate_markdown_report, generate_text_report};
