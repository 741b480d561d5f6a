//! Label assignment
//!
//! Converts the resolved span sequence into output labels. All
//! counters live in this function's locals, constructed fresh per
//! document; nothing is retained on the engine between calls.

use crate::domain::{EntityCategory, IdentityPolicy, RedactionMode, ResolvedSpan};
use std::collections::HashMap;

/// A resolved span paired with the label that will replace it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAssignment {
    /// The span being replaced
    pub span: ResolvedSpan,
    /// Replacement token, delimiters included
    pub label: String,
}

/// Formats a generic (anonymization) label
pub fn generic_label(category: &EntityCategory) -> String {
    format!("[{}]", category.as_str())
}

/// Formats an indexed (pseudonymization) label
pub fn indexed_label(category: &EntityCategory, index: usize) -> String {
    format!("[{}_{}]", category.as_str(), index)
}

/// Assigns labels to resolved spans.
///
/// Spans must arrive in resolved order (sorted by start); index
/// assignment is a deterministic function of first occurrence, which
/// pseudonymization reproducibility depends on. Categories never seen
/// before are labeled with their literal string.
pub fn assign_labels(
    spans: Vec<ResolvedSpan>,
    mode: RedactionMode,
    policy: IdentityPolicy,
) -> Vec<LabelAssignment> {
    match mode {
        RedactionMode::Anonymize => spans
            .into_iter()
            .map(|span| LabelAssignment {
                label: generic_label(&span.category),
                span,
            })
            .collect(),
        RedactionMode::Pseudonymize => {
            let mut counters: HashMap<EntityCategory, usize> = HashMap::new();
            let mut by_value: HashMap<(EntityCategory, String), usize> = HashMap::new();

            spans
                .into_iter()
                .map(|span| {
                    let index = match policy {
                        IdentityPolicy::ReuseByValue => {
                            let key = (span.category.clone(), span.text.clone());
                            if let Some(&existing) = by_value.get(&key) {
                                existing
                            } else {
                                let index = next_index(&mut counters, &span.category);
                                by_value.insert(key, index);
                                index
                            }
                        }
                        IdentityPolicy::AlwaysNew => next_index(&mut counters, &span.category),
                    };
                    LabelAssignment {
                        label: indexed_label(&span.category, index),
                        span,
                    }
                })
                .collect()
        }
    }
}

fn next_index(counters: &mut HashMap<EntityCategory, usize>, category: &EntityCategory) -> usize {
    let counter = counters.entry(category.clone()).or_insert(0);
    let index = *counter;
    *counter += 1;
    index
}
