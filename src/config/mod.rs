//! Configuration management
//!
//! TOML-based configuration with `${VAR}` environment substitution,
//! `VEIL_*` environment overrides and validation.
//!
//! # Example configuration
//!
//! ```toml
//! mode = "pseudonymize"
//! languages = ["en", "de"]
//! identity_policy = "reuse_by_value"
//! max_text_length = 75000
//! batch_concurrency = 8
//!
//! [logging]
//! level = "info"
//! json = true
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{LoggingConfig, RedactionConfig};
