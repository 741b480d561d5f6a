//! Veil - Entity resolution and redaction engine
//!
//! Veil detects personally identifiable information in free text by
//! combining a pluggable statistical recognizer with checksum-aware
//! regex pattern detectors, resolves overlapping detections into a
//! single non-overlapping winner set, and rewrites the text with
//! category labels.
//!
//! Two rewriting modes are supported:
//!
//! - **Anonymize**: irreversible, every entity becomes a generic
//!   `[CATEGORY]` label
//! - **Pseudonymize**: reversible, entities become indexed
//!   `[CATEGORY_n]` labels and a per-document entity map records the
//!   original values for later restoration
//!
//! # Modules
//!
//! - [`engine`] - The [`RedactionEngine`] public API and builder
//! - [`core`] - Pipeline stages: collection, resolution, label
//!   assignment, rewriting, restoration and batch fan-out
//! - [`detectors`] - Detector traits, the built-in pattern library
//!   and checksum validators
//! - [`domain`] - Entity categories, spans, entity maps, results and
//!   errors
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod core;
pub mod detectors;
pub mod domain;
pub mod engine;
pub mod logging;

pub use config::{load_config, LoggingConfig, RedactionConfig};
pub use domain::{
    EntityCategory, EntityMap, IdentityPolicy, RedactionMode, RedactionResult, Result, VeilError,
};
pub use engine::{RedactionEngine, RedactionEngineBuilder};
