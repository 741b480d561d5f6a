//! Candidate collection
//!
//! Normalizes per-detector outputs into a uniform candidate list.
//! Two failure classes are recovered here and never propagated:
//! a failed detector contributes nothing for the current document,
//! and malformed spans from an otherwise healthy detector are
//! dropped individually.

use crate::detectors::DetectedEntity;
use crate::domain::{CandidateSpan, Result};

/// One detector's contribution to a document, tagged with the
/// metadata the resolver needs for tie-breaking
pub struct DetectorOutput {
    /// Detector name for failure logs
    pub name: String,
    /// Conflict-resolution priority
    pub priority: u8,
    /// Registration index, the deterministic last-resort tie-break
    pub source_order: usize,
    /// The detector's result for this document
    pub outcome: Result<Vec<DetectedEntity>>,
}

/// Normalizes detector outputs into candidate spans.
///
/// The candidate's text is always taken from the document slice, not
/// the detector's claim, so the rewriter's reconstruction invariant
/// holds even against a detector that reports stale text.
pub fn collect_candidates(text: &str, outputs: Vec<DetectorOutput>) -> Vec<CandidateSpan> {
    let mut candidates = Vec::new();

    for output in outputs {
        let entities = match output.outcome {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(
                    detector = %output.name,
                    error = %e,
                    "detector failed, continuing without its candidates"
                );
                continue;
            }
        };

        for entity in entities {
            if !is_well_formed(text, &entity) {
                tracing::debug!(
                    detector = %output.name,
                    start = entity.start,
                    end = entity.end,
                    "dropping malformed candidate span"
                );
                continue;
            }
            candidates.push(CandidateSpan {
                start: entity.start,
                end: entity.end,
                category: entity.category,
                priority: output.priority,
                source_order: output.source_order,
                text: text[entity.start..entity.end].to_string(),
            });
        }
    }

    candidates
}

fn is_well_formed(text: &str, entity: &DetectedEntity) -> bool {
    entity.start < entity.end
        && entity.end <= text.len()
        && text.is_char_boundary(entity.start)
        && text.is_char_boundary(entity.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityCategory, VeilError};

    fn output(outcome: Result<Vec<DetectedEntity>>) -> DetectorOutput {
        DetectorOutput {
            name: "test".to_string(),
            priority: 1,
            source_order: 0,
            outcome,
        }
    }

    fn entity(start: usize, end: usize) -> DetectedEntity {
        DetectedEntity::new(start, end, EntityCategory::Misc, "")
    }

    #[test]
    fn test_collects_valid_candidates() {
        let text = "Alice met Bob";
        let candidates = collect_candidates(
            text,
            vec![output(Ok(vec![entity(0, 5), entity(10, 13)]))],
        );
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].text, "Alice");
        assert_eq!(candidates[1].text, "Bob");
    }

    #[test]
    fn test_drops_inverted_and_empty_spans() {
        let candidates = collect_candidates(
            "some text",
            vec![output(Ok(vec![entity(5, 5), entity(7, 3), entity(0, 4)]))],
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "some");
    }

    #[test]
    fn test_drops_out_of_bounds_spans() {
        let candidates = collect_candidates("short", vec![output(Ok(vec![entity(2, 50)]))]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_drops_non_char_boundary_spans() {
        // 'é' is two bytes; offset 1 splits it
        let candidates = collect_candidates("étude", vec![output(Ok(vec![entity(1, 3)]))]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_failed_detector_is_isolated() {
        let candidates = collect_candidates(
            "Alice met Bob",
            vec![
                output(Err(VeilError::detector("broken", "boom"))),
                DetectorOutput {
                    name: "healthy".to_string(),
                    priority: 2,
                    source_order: 1,
                    outcome: Ok(vec![entity(0, 5)]),
                },
            ],
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].source_order, 1);
    }

    #[test]
    fn test_candidate_text_comes_from_document() {
        let mut stale = entity(0, 5);
        stale.text = "WRONG".to_string();
        let candidates = collect_candidates("Alice met Bob", vec![output(Ok(vec![stale]))]);
        assert_eq!(candidates[0].text, "Alice");
    }
}
