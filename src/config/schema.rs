//! Configuration schema types

use crate::domain::{IdentityPolicy, RedactionMode, Result, VeilError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main engine configuration
///
/// Maps directly to the TOML configuration file; every field has a
/// default so an empty file (or `RedactionConfig::default()`) is a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Rewriting mode used by `process`
    #[serde(default)]
    pub mode: RedactionMode,

    /// Language codes the engine must support. The first entry is the
    /// default for calls that don't name a language. Recognizer
    /// resources for every listed code are checked at construction.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Index assignment policy for pseudonymization
    #[serde(default)]
    pub identity_policy: IdentityPolicy,

    /// Maximum accepted input length in characters
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Maximum documents processed concurrently in a batch
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,

    /// Path to a pattern library TOML file replacing the built-in set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_library: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_max_text_length() -> usize {
    75_000
}

fn default_batch_concurrency() -> usize {
    4
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            mode: RedactionMode::default(),
            languages: default_languages(),
            identity_policy: IdentityPolicy::default(),
            max_text_length: default_max_text_length(),
            batch_concurrency: default_batch_concurrency(),
            pattern_library: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl RedactionConfig {
    /// The language used when a call doesn't name one
    pub fn default_language(&self) -> &str {
        self.languages.first().map(String::as_str).unwrap_or("en")
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(VeilError::Configuration(
                "at least one language must be configured".to_string(),
            ));
        }
        if self.max_text_length == 0 {
            return Err(VeilError::Configuration(
                "max_text_length must be greater than zero".to_string(),
            ));
        }
        if self.batch_concurrency == 0 {
            return Err(VeilError::Configuration(
                "batch_concurrency must be greater than zero".to_string(),
            ));
        }
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(VeilError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(VeilError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Applies `VEIL_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_MODE") {
            self.mode = match val.to_lowercase().as_str() {
                "anonymize" => RedactionMode::Anonymize,
                "pseudonymize" => RedactionMode::Pseudonymize,
                _ => {
                    return Err(VeilError::Configuration(format!(
                        "Invalid VEIL_MODE: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("VEIL_LANGUAGES") {
            self.languages = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("VEIL_IDENTITY_POLICY") {
            self.identity_policy = match val.to_lowercase().as_str() {
                "reuse_by_value" => IdentityPolicy::ReuseByValue,
                "always_new" => IdentityPolicy::AlwaysNew,
                _ => {
                    return Err(VeilError::Configuration(format!(
                        "Invalid VEIL_IDENTITY_POLICY: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("VEIL_MAX_TEXT_LENGTH") {
            self.max_text_length = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_MAX_TEXT_LENGTH: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("VEIL_BATCH_CONCURRENCY") {
            self.batch_concurrency = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_BATCH_CONCURRENCY: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("VEIL_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,

    /// Also write daily-rotated log files into this directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RedactionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_language(), "en");
        assert_eq!(config.mode, RedactionMode::Pseudonymize);
        assert_eq!(config.max_text_length, 75_000);
    }

    #[test]
    fn test_empty_languages_rejected() {
        let config = RedactionConfig {
            languages: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = RedactionConfig {
            batch_concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_pattern_library_rejected() {
        let config = RedactionConfig {
            pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let config: RedactionConfig = toml::from_str("").unwrap();
        assert_eq!(config.languages, vec!["en".to_string()]);
        assert_eq!(config.batch_concurrency, 4);
    }

    #[test]
    fn test_toml_parse() {
        let config: RedactionConfig = toml::from_str(
            r#"
            mode = "anonymize"
            languages = ["en", "de"]
            identity_policy = "always_new"

            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, RedactionMode::Anonymize);
        assert_eq!(config.languages, vec!["en", "de"]);
        assert_eq!(config.identity_policy, IdentityPolicy::AlwaysNew);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }
}
