//! Configuration loader with TOML parsing and environment overrides

use super::schema::RedactionConfig;
use crate::domain::{Result, VeilError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`RedactionConfig`]
/// 4. Applies environment variable overrides (`VEIL_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a [`VeilError::Configuration`] if the file cannot be read,
/// a referenced environment variable is unset, parsing fails, or
/// validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<RedactionConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VeilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RedactionConfig = toml::from_str(&contents)
        .map_err(|e| VeilError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}

/// Substitutes environment variables written as `${VAR_NAME}`
fn substitute_env_vars(contents: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("substitution regex is valid");

    let mut result = String::with_capacity(contents.len());
    let mut last_end = 0;

    for capture in re.captures_iter(contents) {
        let whole = capture.get(0).expect("capture 0 always exists");
        let name = &capture[1];

        let value = std::env::var(name).map_err(|_| {
            VeilError::Configuration(format!("Environment variable not set: {name}"))
        })?;

        result.push_str(&contents[last_end..whole.start()]);
        result.push_str(&value);
        last_end = whole.end();
    }
    result.push_str(&contents[last_end..]);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("VEIL_TEST_SUBST_LEVEL", "debug");
        let out = substitute_env_vars("level = \"${VEIL_TEST_SUBST_LEVEL}\"").unwrap();
        assert_eq!(out, "level = \"debug\"");
        std::env::remove_var("VEIL_TEST_SUBST_LEVEL");
    }

    #[test]
    fn test_substitute_missing_var_fails() {
        let result = substitute_env_vars("level = \"${VEIL_TEST_SUBST_MISSING}\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_no_substitution_needed() {
        let out = substitute_env_vars("mode = \"anonymize\"").unwrap();
        assert_eq!(out, "mode = \"anonymize\"");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/veil.toml");
        assert!(matches!(result, Err(VeilError::Configuration(_))));
    }
}
