//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.moodscan.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Corpus generation settings.
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default report file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "moodscan_report.md".to_string()
}

/// Corpus generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Topic to generate posts about.
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Number of posts to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Fixed RNG seed for reproducible corpora.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            count: default_count(),
            seed: None,
        }
    }
}

fn default_topic() -> String {
    "pizza".to_string()
}

fn default_count() -> usize {
    100
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the bar chart in the report.
    #[serde(default = "default_true")]
    pub include_chart: bool,

    /// Include example posts per sentiment.
    #[serde(default = "default_true")]
    pub include_examples: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_chart: true,
            include_examples: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// CSV export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Write the CSV export.
    #[serde(default = "default_true")]
    pub csv: bool,

    /// Directory the CSV is written to.
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv: true,
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".moodscan.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Corpus settings - always override since they have defaults in CLI
        self.corpus.topic = args.topic.clone();
        self.corpus.count = args.count;

        // Seed - only override if explicitly provided via CLI
        if let Some(seed) = args.seed {
            self.corpus.seed = Some(seed);
        }

        // Flags only ever disable; absence keeps the config value
        if args.no_chart {
            self.report.include_chart = false;
        }
        if args.no_csv {
            self.export.csv = false;
        }
        if let Some(ref dir) = args.csv_dir {
            self.export.dir = dir.display().to_string();
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.corpus.topic, "pizza");
        assert_eq!(config.corpus.count, 100);
        assert!(config.corpus.seed.is_none());
        assert!(config.report.include_chart);
        assert!(config.export.csv);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "custom_report.md"
verbose = true

[corpus]
topic = "coffee"
count = 250
seed = 7

[report]
include_chart = false

[export]
csv = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "custom_report.md");
        assert!(config.general.verbose);
        assert_eq!(config.corpus.topic, "coffee");
        assert_eq!(config.corpus.count, 250);
        assert_eq!(config.corpus.seed, Some(7));
        assert!(!config.report.include_chart);
        assert!(!config.export.csv);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[corpus]\ntopic = \"ramen\"\n").unwrap();
        assert_eq!(config.corpus.topic, "ramen");
        assert_eq!(config.corpus.count, 100);
        assert!(config.report.include_examples);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[corpus]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("[export]"));
    }
}
