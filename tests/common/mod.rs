//! Shared test fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use veil::detectors::{DetectedEntity, EntityRecognizer};
use veil::{EntityCategory, Result};

/// Recognizer stub that locates a fixed entity list by substring
/// search, standing in for a statistical model
pub struct StaticRecognizer {
    entities: Vec<(String, EntityCategory)>,
    languages: Vec<String>,
}

impl StaticRecognizer {
    pub fn new(entities: &[(&str, EntityCategory)]) -> Self {
        Self {
            entities: entities
                .iter()
                .map(|(needle, category)| ((*needle).to_string(), category.clone()))
                .collect(),
            languages: vec!["en".to_string()],
        }
    }

    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| (*l).to_string()).collect();
        self
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

#[async_trait]
impl EntityRecognizer for StaticRecognizer {
    async fn recognize(&self, text: &str, _language: &str) -> Result<Vec<DetectedEntity>> {
        let mut found = Vec::new();
        for (needle, category) in &self.entities {
            for (start, matched) in text.match_indices(needle.as_str()) {
                found.push(DetectedEntity::new(
                    start,
                    start + matched.len(),
                    category.clone(),
                    matched,
                ));
            }
        }
        Ok(found)
    }

    fn supported_languages(&self) -> Vec<String> {
        self.languages.clone()
    }
}
