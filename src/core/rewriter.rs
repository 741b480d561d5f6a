//! Text rewriting
//!
//! Substitutes labels into the original text. Output positions are
//! always computed from the original text's offsets; substitutions
//! change lengths, so intermediate redacted text is never indexed.

use super::assigner::LabelAssignment;
use crate::domain::EntityMap;

/// Rewrites the document, replacing each assigned span with its label.
///
/// Gaps between spans are copied verbatim, so every non-redacted
/// region of the output is byte-identical to the corresponding
/// original region. When `build_map` is set, the entity map records
/// each label's original text on its first assignment.
///
/// Assignments must be non-overlapping and ordered by start, as
/// produced by the resolver.
pub fn rewrite(
    text: &str,
    assignments: &[LabelAssignment],
    build_map: bool,
) -> (String, Option<EntityMap>) {
    let mut redacted = String::with_capacity(text.len());
    let mut map = build_map.then(EntityMap::new);
    let mut cursor = 0usize;

    for assignment in assignments {
        redacted.push_str(&text[cursor..assignment.span.start]);
        redacted.push_str(&assignment.label);
        if let Some(map) = map.as_mut() {
            map.insert_if_absent(&assignment.label, &assignment.span.text);
        }
        cursor = assignment.span.end;
    }
    redacted.push_str(&text[cursor..]);

    (redacted, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityCategory, ResolvedSpan};

    fn assignment(start: usize, text: &str, label: &str) -> LabelAssignment {
        LabelAssignment {
            span: ResolvedSpan {
                start,
                end: start + text.len(),
                category: EntityCategory::Person,
                text: text.to_string(),
            },
            label: label.to_string(),
        }
    }

    #[test]
    fn test_no_spans_returns_input() {
        let (redacted, map) = rewrite("untouched text", &[], false);
        assert_eq!(redacted, "untouched text");
        assert!(map.is_none());
    }

    #[test]
    fn test_substitution_preserves_gaps() {
        let text = "Alice met Bob.";
        let assignments = vec![
            assignment(0, "Alice", "[PERSON_0]"),
            assignment(10, "Bob", "[PERSON_1]"),
        ];
        let (redacted, _) = rewrite(text, &assignments, false);
        assert_eq!(redacted, "[PERSON_0] met [PERSON_1].");
    }

    #[test]
    fn test_map_populated_on_first_assignment_only() {
        let text = "Alice met Alice";
        let assignments = vec![
            assignment(0, "Alice", "[PERSON_0]"),
            assignment(10, "Alice", "[PERSON_0]"),
        ];
        let (redacted, map) = rewrite(text, &assignments, true);
        let map = map.unwrap();
        assert_eq!(redacted, "[PERSON_0] met [PERSON_0]");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("[PERSON_0]"), Some("Alice"));
    }

    #[test]
    fn test_newlines_and_unicode_gaps_preserved() {
        let text = "café visited\nby Alice\n";
        // "café" is five bytes; "Alice" starts at byte 17
        let assignments = vec![assignment(17, "Alice", "[PERSON_0]")];
        let (redacted, _) = rewrite(text, &assignments, false);
        assert_eq!(redacted, "café visited\nby [PERSON_0]\n");
    }

    #[test]
    fn test_span_at_document_end() {
        let text = "call Bob";
        let assignments = vec![assignment(5, "Bob", "[PERSON_0]")];
        let (redacted, _) = rewrite(text, &assignments, false);
        assert_eq!(redacted, "call [PERSON_0]");
    }
}
