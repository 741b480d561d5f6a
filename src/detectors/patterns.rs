//! Pattern library for entity detection
//!
//! Patterns are declared in TOML, keyed by name, each carrying a
//! category and one or more regular expressions. A built-in library
//! is embedded in the binary; callers can supply their own file.
//!
//! Expressions needing look-around set `fancy = true` and compile
//! with the `fancy-regex` engine instead of `regex`.

use crate::domain::EntityCategory;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this entity kind
    pub patterns: Vec<String>,
    /// Category label assigned to matches
    pub category: String,
    /// Compile with the backtracking engine (look-around support)
    #[serde(default)]
    pub fancy: bool,
}

/// A compiled expression from either regex engine
#[derive(Debug, Clone)]
pub enum CompiledRegex {
    /// Linear-time engine, used for everything without look-around
    Standard(regex::Regex),
    /// Backtracking engine for patterns with look-around
    Fancy(fancy_regex::Regex),
}

impl CompiledRegex {
    /// Returns the `(start, end)` byte ranges of every match.
    ///
    /// Backtracking-engine errors on a pathological input skip that
    /// match rather than failing the scan.
    pub fn match_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            Self::Standard(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            Self::Fancy(re) => re
                .find_iter(text)
                .filter_map(|m| m.ok())
                .map(|m| (m.start(), m.end()))
                .collect(),
        }
    }
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Name of the defining TOML entry
    pub name: String,
    /// Compiled expression
    pub regex: CompiledRegex,
    /// Category assigned to matches
    pub category: EntityCategory,
}

#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Registry of compiled detection patterns
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Loads a pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Builds a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns = Vec::new();
        for (name, def) in library.patterns {
            let category = EntityCategory::from(def.category.as_str());

            for pattern_str in &def.patterns {
                let regex = if def.fancy {
                    CompiledRegex::Fancy(fancy_regex::Regex::new(pattern_str).with_context(
                        || format!("Invalid regex in pattern '{name}': {pattern_str}"),
                    )?)
                } else {
                    CompiledRegex::Standard(regex::Regex::new(pattern_str).with_context(
                        || format!("Invalid regex in pattern '{name}': {pattern_str}"),
                    )?)
                };

                patterns.push(CompiledPattern {
                    name: name.clone(),
                    regex,
                    category: category.clone(),
                });
            }
        }

        // Stable scan order regardless of TOML map iteration order
        patterns.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { patterns })
    }

    /// Builds the registry of built-in patterns
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All compiled patterns in deterministic order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_patterns() {
        let registry = PatternRegistry::builtin().unwrap();
        assert!(!registry.all_patterns().is_empty());
    }

    #[test]
    fn test_builtin_email_pattern() {
        let registry = PatternRegistry::builtin().unwrap();
        let email = registry
            .all_patterns()
            .iter()
            .find(|p| p.category == EntityCategory::Email)
            .unwrap();

        assert_eq!(email.regex.match_ranges("reach me at jane@example.org!").len(), 1);
        assert!(email.regex.match_ranges("no address here").is_empty());
    }

    #[test]
    fn test_custom_toml() {
        let registry = PatternRegistry::from_toml(
            r#"
            [patterns.badge]
            category = "BADGE_NUMBER"
            patterns = ['\bB-\d{5}\b']
            "#,
        )
        .unwrap();

        let pattern = &registry.all_patterns()[0];
        assert_eq!(
            pattern.category,
            EntityCategory::Custom("BADGE_NUMBER".to_string())
        );
        assert_eq!(pattern.regex.match_ranges("id B-12345 ok"), vec![(3, 10)]);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let result = PatternRegistry::from_toml(
            r#"
            [patterns.broken]
            category = "MISC"
            patterns = ['(unclosed']
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fancy_pattern_lookahead() {
        let registry = PatternRegistry::from_toml(
            r#"
            [patterns.ten_digits]
            category = "MISC"
            fancy = true
            patterns = ['\b\d{10}\b(?!-)']
            "#,
        )
        .unwrap();

        let pattern = &registry.all_patterns()[0];
        assert_eq!(pattern.regex.match_ranges("id 1234567890 end").len(), 1);
        assert!(pattern.regex.match_ranges("id 1234567890-1 end").is_empty());
    }
}
