//! Main redaction engine
//!
//! This module provides the core [`RedactionEngine`] that orchestrates
//! candidate collection, span resolution, label assignment and text
//! rewriting for one document at a time, plus ordered batch fan-out.
//!
//! # Architecture
//!
//! One call runs the pipeline collector → resolver → assigner →
//! rewriter against per-call state. The engine retains no counters or
//! entity maps between calls, so documents can never leak index
//! numbering or entity identity into each other.
//!
//! # Examples
//!
//! ```no_run
//! use async_trait::async_trait;
//! use veil::config::RedactionConfig;
//! use veil::detectors::{DetectedEntity, EntityRecognizer};
//! use veil::{RedactionEngineBuilder, Result};
//!
//! struct MyModel;
//!
//! #[async_trait]
//! impl EntityRecognizer for MyModel {
//!     async fn recognize(&self, _text: &str, _language: &str) -> Result<Vec<DetectedEntity>> {
//!         Ok(Vec::new())
//!     }
//!
//!     fn supported_languages(&self) -> Vec<String> {
//!         vec!["en".to_string()]
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let engine = RedactionEngineBuilder::new(RedactionConfig::default())
//!     .build(Box::new(MyModel))?;
//!
//! let (redacted, entity_map) = engine
//!     .pseudonymize("Mail jane@example.org today.", None)
//!     .await?;
//! assert_eq!(redacted, "Mail [EMAIL_0] today.");
//! assert_eq!(engine.deanonymize(&redacted, &entity_map), "Mail jane@example.org today.");
//! # Ok(())
//! # }
//! ```

use crate::config::RedactionConfig;
use crate::core::{self, DetectorOutput};
use crate::detectors::{
    patterns::PatternRegistry, DetectorEntry, EntityRecognizer, PatternDetector, RegexDetector,
    PATTERN_PRIORITY, RECOGNIZER_PRIORITY,
};
use crate::domain::{EntityMap, RedactionMode, RedactionResult, Result, VeilError};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::time::Instant;
use tokio::sync::Mutex;

/// Builder for [`RedactionEngine`]
///
/// Detectors are held in registration order; that order is the final
/// deterministic tie-break when two candidates are otherwise equal.
/// The statistical recognizer always registers last, after every
/// pattern detector.
pub struct RedactionEngineBuilder {
    config: RedactionConfig,
    detectors: Vec<DetectorEntry>,
    builtin_patterns: bool,
}

impl RedactionEngineBuilder {
    /// Creates a builder with the given configuration and the
    /// built-in pattern detector enabled
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            config,
            detectors: Vec::new(),
            builtin_patterns: true,
        }
    }

    /// Enables or disables the built-in pattern detector
    pub fn builtin_patterns(mut self, enabled: bool) -> Self {
        self.builtin_patterns = enabled;
        self
    }

    /// Registers a custom pattern detector
    pub fn detector(
        mut self,
        name: impl Into<String>,
        priority: u8,
        detector: Box<dyn PatternDetector>,
    ) -> Self {
        self.detectors.push(DetectorEntry::new(name, priority, detector));
        self
    }

    /// Builds the engine around a statistical recognizer collaborator
    ///
    /// # Errors
    ///
    /// Fails fast when configuration validation fails, the pattern
    /// library cannot be compiled, or the recognizer lacks resources
    /// for any configured language ([`VeilError::UnsupportedLanguage`]).
    pub fn build(self, recognizer: Box<dyn EntityRecognizer>) -> Result<RedactionEngine> {
        self.config.validate()?;

        let supported = recognizer.supported_languages();
        for language in &self.config.languages {
            if !supported.iter().any(|s| s == language) {
                return Err(VeilError::UnsupportedLanguage(language.clone()));
            }
        }

        let mut detectors = Vec::new();
        if self.builtin_patterns {
            let detector = match self.config.pattern_library {
                Some(ref path) => {
                    let registry = PatternRegistry::from_file(path)
                        .map_err(|e| VeilError::PatternLibrary(format!("{e:#}")))?;
                    RegexDetector::with_registry(registry)
                }
                None => RegexDetector::new()?,
            };
            detectors.push(DetectorEntry::new(
                "builtin_patterns",
                PATTERN_PRIORITY,
                Box::new(detector),
            ));
        }
        detectors.extend(self.detectors);

        tracing::info!(
            languages = ?self.config.languages,
            detectors = detectors.len(),
            "redaction engine initialized"
        );

        Ok(RedactionEngine {
            config: self.config,
            recognizer: Mutex::new(recognizer),
            detectors,
        })
    }
}

/// Entity resolution and redaction engine
///
/// # Thread safety
///
/// The engine can be shared across async tasks with `Arc`. Pattern
/// detectors are pure and called concurrently; the statistical
/// recognizer is not assumed to tolerate simultaneous calls, so
/// access to it is serialized through an async mutex. Callers who
/// need parallel model inference can build one engine per worker.
pub struct RedactionEngine {
    config: RedactionConfig,
    recognizer: Mutex<Box<dyn EntityRecognizer>>,
    detectors: Vec<DetectorEntry>,
}

impl RedactionEngine {
    /// Anonymizes a document: every resolved entity becomes a generic
    /// `[CATEGORY]` label and the mapping is discarded
    pub async fn redact(&self, text: &str, language: Option<&str>) -> Result<String> {
        let (redacted, _) = self
            .run_pipeline(text, language, RedactionMode::Anonymize)
            .await?;
        Ok(redacted)
    }

    /// Pseudonymizes a document: entities become indexed
    /// `[CATEGORY_n]` labels, returned with the reversible entity map
    pub async fn pseudonymize(
        &self,
        text: &str,
        language: Option<&str>,
    ) -> Result<(String, EntityMap)> {
        let (redacted, map) = self
            .run_pipeline(text, language, RedactionMode::Pseudonymize)
            .await?;
        Ok((redacted, map.unwrap_or_default()))
    }

    /// Restores original values into pseudonymized text.
    ///
    /// Labels absent from the map are left in place.
    pub fn deanonymize(&self, redacted: &str, entity_map: &EntityMap) -> String {
        core::restore(redacted, entity_map)
    }

    /// Runs the pipeline in the configured mode and returns the full
    /// result record with processing metadata
    pub async fn process(&self, text: &str, language: Option<&str>) -> Result<RedactionResult> {
        let start = Instant::now();
        let mode = self.config.mode;
        let text_length = text.chars().count();

        let (redacted_text, entity_map) = self.run_pipeline(text, language, mode).await?;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            text_length,
            processing_time_ms,
            entities = entity_map.as_ref().map(EntityMap::len).unwrap_or(0),
            "document processed"
        );

        Ok(RedactionResult {
            redacted_text,
            entity_map,
            processing_time_ms,
            mode,
            text_length,
            hashed_id: hash_text(text),
            timestamp: Utc::now(),
        })
    }

    /// Anonymizes a batch of documents, returning per-document
    /// results in input order
    pub async fn redact_batch(
        &self,
        texts: Vec<String>,
        language: Option<&str>,
    ) -> Vec<Result<String>> {
        core::batch::for_each_document(texts, self.config.batch_concurrency, |text| async move {
            self.redact(&text, language).await
        })
        .await
    }

    /// Pseudonymizes a batch of documents, returning per-document
    /// results in input order. Entity maps are document-scoped and
    /// never merged.
    pub async fn pseudonymize_batch(
        &self,
        texts: Vec<String>,
        language: Option<&str>,
    ) -> Vec<Result<(String, EntityMap)>> {
        core::batch::for_each_document(texts, self.config.batch_concurrency, |text| async move {
            self.pseudonymize(&text, language).await
        })
        .await
    }

    /// Processes a batch of documents in the configured mode,
    /// returning per-document results in input order. A failed
    /// document is reported as its own `Err` entry and never aborts
    /// the rest of the batch.
    pub async fn process_batch(
        &self,
        texts: Vec<String>,
        language: Option<&str>,
    ) -> Vec<Result<RedactionResult>> {
        core::batch::for_each_document(texts, self.config.batch_concurrency, |text| async move {
            self.process(&text, language).await
        })
        .await
    }

    /// The engine's configuration
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    async fn run_pipeline(
        &self,
        text: &str,
        language: Option<&str>,
        mode: RedactionMode,
    ) -> Result<(String, Option<EntityMap>)> {
        let language = self.resolve_language(language)?;
        self.check_length(text)?;

        let mut outputs = Vec::with_capacity(self.detectors.len() + 1);
        for (order, entry) in self.detectors.iter().enumerate() {
            outputs.push(DetectorOutput {
                name: entry.name.clone(),
                priority: entry.priority,
                source_order: order,
                outcome: entry.detector.detect(text),
            });
        }

        // Serialized: model collaborators are not assumed to tolerate
        // simultaneous calls.
        let recognizer_outcome = {
            let recognizer = self.recognizer.lock().await;
            recognizer.recognize(text, language).await
        };
        outputs.push(DetectorOutput {
            name: "recognizer".to_string(),
            priority: RECOGNIZER_PRIORITY,
            source_order: self.detectors.len(),
            outcome: recognizer_outcome,
        });

        let candidates = core::collect_candidates(text, outputs);
        let resolved = core::resolve(candidates);
        let assignments = core::assign_labels(resolved, mode, self.config.identity_policy);
        let build_map = mode == RedactionMode::Pseudonymize;

        Ok(core::rewrite(text, &assignments, build_map))
    }

    fn resolve_language<'a>(&'a self, language: Option<&'a str>) -> Result<&'a str> {
        match language {
            None => Ok(self.config.default_language()),
            Some(code) => {
                if self.config.languages.iter().any(|l| l == code) {
                    Ok(code)
                } else {
                    Err(VeilError::Configuration(format!(
                        "language '{code}' was not configured at engine construction"
                    )))
                }
            }
        }
    }

    fn check_length(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(VeilError::TextTooLong {
                length,
                max: self.config.max_text_length,
            });
        }
        Ok(())
    }
}

fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}
