//! De-anonymization
//!
//! Restores original values into pseudonymized text using an entity
//! map. Restoration fails open: labels missing from the map are left
//! in place, since partial maps (sharing only some categories) are a
//! legitimate use case.

use crate::domain::EntityMap;
use regex::Regex;
use std::sync::OnceLock;

/// Replaces every mapped label in `redacted` with its original value.
///
/// Labels are substituted longest-first so a label that is a textual
/// prefix of another (`[PERSON_1]` vs `[PERSON_10]`) can never corrupt
/// it. Reconstruction is not guaranteed byte-identical to the true
/// original when that original itself contained literal label-syntax
/// strings; that collision is documented rather than masked.
///
/// Indexed labels that survive restoration are counted and reported
/// through a warning log, never an error.
pub fn restore(redacted: &str, entity_map: &EntityMap) -> String {
    let mut entries: Vec<(&str, &str)> = entity_map.iter().collect();
    // Longest label first; lexicographic second for determinism
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut text = redacted.to_string();
    for (label, original) in entries {
        if text.contains(label) {
            text = text.replace(label, original);
        }
    }

    let unmatched = count_unmatched_labels(&text);
    if unmatched > 0 {
        tracing::warn!(
            count = unmatched,
            "indexed labels without entity map entries were left in place"
        );
    }

    text
}

fn count_unmatched_labels(text: &str) -> usize {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    let re = LABEL_RE
        .get_or_init(|| Regex::new(r"\[[A-Z][A-Z0-9_]*_\d+\]").expect("label regex is valid"));
    re.find_iter(text).count()
}
