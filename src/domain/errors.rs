//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Detector failures are recovered locally by the collector and only
//! reach callers when a detector implementation chooses to surface them.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum VeilError {
    /// No recognizer resources exist for a configured language.
    /// Raised at engine construction, never per call.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input text exceeds the configured maximum length
    #[error("Text length {length} exceeds maximum of {max} characters")]
    TextTooLong { length: usize, max: usize },

    /// A detector collaborator failed.
    /// The collector treats this as an empty contribution for the
    /// current document rather than aborting the pipeline.
    #[error("Detector '{name}' failed: {message}")]
    Detector { name: String, message: String },

    /// Pattern library loading or compilation errors
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl VeilError {
    /// Creates a detector failure error
    pub fn detector(name: impl Into<String>, message: impl Into<String>) -> Self {
        VeilError::Detector {
            name: name.into(),
            message: message.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VeilError::UnsupportedLanguage("xx".to_string());
        assert_eq!(err.to_string(), "Unsupported language: xx");

        let err = VeilError::TextTooLong {
            length: 100,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "Text length 100 exceeds maximum of 50 characters"
        );
    }

    #[test]
    fn test_detector_error_builder() {
        let err = VeilError::detector("phone", "matcher panicked");
        assert!(matches!(err, VeilError::Detector { .. }));
        assert_eq!(err.to_string(), "Detector 'phone' failed: matcher panicked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: VeilError = io_err.into();
        assert!(matches!(err, VeilError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: VeilError = toml_err.into();
        assert!(matches!(err, VeilError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = VeilError::Configuration("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
