//! Regex-based pattern detector

use super::patterns::PatternRegistry;
use super::{validators, DetectedEntity, PatternDetector};
use crate::domain::{Result, VeilError};
use std::sync::Arc;

/// Pattern detector backed by a [`PatternRegistry`]
///
/// Matches every registry pattern against the text and runs the
/// category's checksum validator, if one exists, before reporting
/// a span.
pub struct RegexDetector {
    registry: Arc<PatternRegistry>,
}

impl RegexDetector {
    /// Creates a detector with the built-in pattern library
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::builtin()
            .map_err(|e| VeilError::PatternLibrary(format!("{e:#}")))?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Creates a detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl PatternDetector for RegexDetector {
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>> {
        let mut entities = Vec::new();

        for pattern in self.registry.all_patterns() {
            for (start, end) in pattern.regex.match_ranges(text) {
                let matched = &text[start..end];
                if !validators::validate(&pattern.category, matched) {
                    tracing::debug!(
                        pattern = %pattern.name,
                        "match rejected by checksum validator"
                    );
                    continue;
                }
                entities.push(DetectedEntity::new(
                    start,
                    end,
                    pattern.category.clone(),
                    matched,
                ));
            }
        }

        Ok(entities)
    }
}
