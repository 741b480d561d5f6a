//! Redaction result model

use crate::domain::EntityMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How detected entities are rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    /// Replace with generic `[CATEGORY]` labels; not reversible
    Anonymize,
    /// Replace with indexed `[CATEGORY_n]` labels and record a
    /// reversible entity map
    #[default]
    Pseudonymize,
}

/// Index assignment policy for pseudonymization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Spans with textually identical values in the same category
    /// share one index within a document
    #[default]
    ReuseByValue,
    /// Every resolved span gets a fresh index
    AlwaysNew,
}

/// Externally visible output of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionResult {
    /// Text with every resolved span replaced by its label
    pub redacted_text: String,
    /// Label-to-original mapping; present only in pseudonymize mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_map: Option<EntityMap>,
    /// Wall-clock pipeline duration in milliseconds
    pub processing_time_ms: u64,
    /// Mode the pipeline ran in
    pub mode: RedactionMode,
    /// Length of the input text in characters
    pub text_length: usize,
    /// SHA-256 hex digest of the input text, usable as a stable
    /// document identifier without retaining the original
    pub hashed_id: String,
    /// When the document was processed
    pub timestamp: DateTime<Utc>,
}

impl RedactionResult {
    /// True when at least one entity was replaced.
    ///
    /// Only meaningful in pseudonymize mode; anonymize mode discards
    /// the mapping that would answer this.
    pub fn has_entities(&self) -> bool {
        self.entity_map
            .as_ref()
            .map(|map| !map.is_empty())
            .unwrap_or(false)
    }
}
