//! Configuration types for swift-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for swift-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit status (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    ///
    /// An explicit `enabled` setting always wins. Otherwise regular rules are
    /// on and opt-in rules are off.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str, opt_in: bool) -> bool {
        self.rules
            .get(rule_name)
            .and_then(|c| c.enabled)
            .unwrap_or(!opt_in)
    }

    /// Explicitly enables a rule, as if `enabled = true` had been configured.
    pub fn enable_rule(&mut self, rule_name: &str) {
        self.rules.entry(rule_name.to_string()).or_default().enabled = Some(true);
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration block of a rule.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Severity at which the run counts as failed.
    #[must_use]
    pub fn fail_threshold(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Maximum number of parallel file analyses.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            respect_gitignore: true,
            parallelism: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec![
        "**/.build/**".to_string(),
        "**/Pods/**".to_string(),
        "**/Carthage/**".to_string(),
        "**/DerivedData/**".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule rejected one of its options.
    #[error("Invalid configuration for rule '{rule}': {message}")]
    InvalidOption {
        /// Rule the option belongs to.
        rule: String,
        /// What is wrong with it.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_threshold(), Severity::Error);
        assert!(config.analyzer.exclude.iter().any(|e| e == "**/.build/**"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
root = "./Sources"
exclude = ["**/Generated/**"]
parallelism = 2

[rules.no-magic-numbers]
enabled = true
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./Sources"));
        assert_eq!(config.analyzer.exclude, vec!["**/Generated/**".to_string()]);
        assert_eq!(config.analyzer.parallelism, Some(2));
        assert_eq!(config.fail_threshold(), Severity::Warning);
        assert!(config.is_rule_enabled("no-magic-numbers", true));
        assert_eq!(
            config.rule_severity("no-magic-numbers"),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_opt_in_rules_default_off() {
        let config = Config::default();
        assert!(!config.is_rule_enabled("no-magic-numbers", true));
        assert!(config.is_rule_enabled("some-default-rule", false));
    }

    #[test]
    fn test_explicit_disable_wins() {
        let config = Config::parse("[rules.some-default-rule]\nenabled = false\n")
            .expect("Failed to parse");
        assert!(!config.is_rule_enabled("some-default-rule", false));
    }

    #[test]
    fn test_enable_rule() {
        let mut config = Config::default();
        config.enable_rule("no-magic-numbers");
        assert!(config.is_rule_enabled("no-magic-numbers", true));
    }

    #[test]
    fn test_unknown_options_are_kept() {
        let config = Config::parse("[rules.no-magic-numbers]\nthreshold = 3\n")
            .expect("Failed to parse");
        let rule = config.rule("no-magic-numbers").expect("rule block");
        assert_eq!(
            rule.options.get("threshold"),
            Some(&toml::Value::Integer(3))
        );
    }

    #[test]
    fn test_invalid_severity_is_parse_error() {
        let err = Config::parse("[rules.no-magic-numbers]\nseverity = \"fatal\"\n")
            .expect_err("unknown severity should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
