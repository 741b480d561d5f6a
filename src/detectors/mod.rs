//! Entity detection surface
//!
//! Provides the trait seams for detector collaborators and the
//! built-in pattern-based implementation:
//! - [`EntityRecognizer`]: the statistical NER collaborator, supplied
//!   externally and consumed behind an async trait
//! - [`PatternDetector`]: deterministic pattern/format matchers,
//!   pluggable at engine construction time
//! - [`RegexDetector`]: the built-in pattern detector backed by a
//!   TOML-defined pattern registry with checksum validators

pub mod patterns;
pub mod regex;
pub mod validators;

pub use regex::RegexDetector;

use crate::domain::{EntityCategory, Result};
use async_trait::async_trait;

/// Default priority for pattern detectors. Pattern matches are
/// higher-precision for their narrow domain, so they outrank the
/// statistical recognizer for spans both claim.
pub const PATTERN_PRIORITY: u8 = 10;

/// Priority assigned to the statistical recognizer's candidates
pub const RECOGNIZER_PRIORITY: u8 = 0;

/// A raw span reported by a detector, before the collector
/// normalizes it into a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedEntity {
    /// Byte offset of the first character (inclusive)
    pub start: usize,
    /// Byte offset past the last character (exclusive)
    pub end: usize,
    /// Category claimed for this span
    pub category: EntityCategory,
    /// Matched text
    pub text: String,
}

impl DetectedEntity {
    /// Creates a detected entity
    pub fn new(
        start: usize,
        end: usize,
        category: EntityCategory,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            category,
            text: text.into(),
        }
    }
}

/// Statistical named-entity recognizer collaborator
///
/// Model inference may be long-running, so recognition is async. The
/// engine does not assume an implementation tolerates simultaneous
/// calls; it serializes access to a single instance. Callers needing
/// data parallelism can construct one engine per worker instead.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Returns every entity the model finds in `text`
    ///
    /// `language` is one of the codes reported by
    /// [`supported_languages`](Self::supported_languages).
    async fn recognize(&self, text: &str, language: &str) -> Result<Vec<DetectedEntity>>;

    /// Language codes this recognizer has resources for
    fn supported_languages(&self) -> Vec<String>;
}

/// Deterministic pattern/format detector
///
/// Implementations are pure functions over the input text and must be
/// safe to call concurrently.
pub trait PatternDetector: Send + Sync {
    /// Returns every pattern match in `text`
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>>;
}

/// A registered pattern detector with its priority
pub struct DetectorEntry {
    /// Detector name, used in logs when the detector fails
    pub name: String,
    /// Conflict-resolution priority of this detector's candidates
    pub priority: u8,
    /// The detector implementation
    pub detector: Box<dyn PatternDetector>,
}

impl DetectorEntry {
    /// Creates a registration entry
    pub fn new(name: impl Into<String>, priority: u8, detector: Box<dyn PatternDetector>) -> Self {
        Self {
            name: name.into(),
            priority,
            detector,
        }
    }
}
