//! Configuration loading and custom pattern library tests

mod common;

use common::StaticRecognizer;
use std::io::Write;
use veil::{load_config, EntityCategory, IdentityPolicy, RedactionEngineBuilder, RedactionMode};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
        mode = "anonymize"
        languages = ["en", "de"]
        identity_policy = "always_new"
        max_text_length = 10000
        batch_concurrency = 2

        [logging]
        level = "debug"
        json = true
        "#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.mode, RedactionMode::Anonymize);
    assert_eq!(config.languages, vec!["en", "de"]);
    assert_eq!(config.identity_policy, IdentityPolicy::AlwaysNew);
    assert_eq!(config.max_text_length, 10000);
    assert_eq!(config.batch_concurrency, 2);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_env_substitution_in_file() {
    std::env::set_var("VEIL_TEST_CFG_LEVEL", "warn");
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
        [logging]
        level = "${{VEIL_TEST_CFG_LEVEL}}"
        "#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.logging.level, "warn");
    std::env::remove_var("VEIL_TEST_CFG_LEVEL");
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    write!(file, "batch_concurrency = 0").unwrap();
    assert!(load_config(file.path()).is_err());
}

#[tokio::test]
async fn test_custom_pattern_library_replaces_builtin() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
        [patterns.badge]
        category = "BADGE_NUMBER"
        patterns = ['\bB-\d{{5}}\b']
        "#
    )
    .unwrap();

    let config = veil::RedactionConfig {
        pattern_library: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let engine = RedactionEngineBuilder::new(config)
        .build(Box::new(StaticRecognizer::empty()))
        .unwrap();

    // The custom set applies; the built-in email pattern does not.
    let redacted = engine
        .redact("Badge B-12345, mail jane@example.org", None)
        .await
        .unwrap();
    assert_eq!(redacted, "Badge [BADGE_NUMBER], mail jane@example.org");
}

#[tokio::test]
async fn test_custom_detector_alongside_builtin() {
    use veil::detectors::{DetectedEntity, PatternDetector};

    struct BadgeDetector;

    impl PatternDetector for BadgeDetector {
        fn detect(&self, text: &str) -> veil::Result<Vec<DetectedEntity>> {
            Ok(text
                .match_indices("B-12345")
                .map(|(start, matched)| {
                    DetectedEntity::new(
                        start,
                        start + matched.len(),
                        EntityCategory::Custom("BADGE_NUMBER".to_string()),
                        matched,
                    )
                })
                .collect())
        }
    }

    let engine = RedactionEngineBuilder::new(veil::RedactionConfig::default())
        .detector("badges", 10, Box::new(BadgeDetector))
        .build(Box::new(StaticRecognizer::empty()))
        .unwrap();

    let redacted = engine
        .redact("Badge B-12345, mail jane@example.org", None)
        .await
        .unwrap();
    assert_eq!(redacted, "Badge [BADGE_NUMBER], mail [EMAIL]");
}
