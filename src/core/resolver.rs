//! Span conflict resolution
//!
//! Reconciles the full candidate list for one document into a
//! non-overlapping span sequence ordered by start offset.

use crate::domain::{CandidateSpan, ResolvedSpan};
use std::cmp::Ordering;

/// Resolves overlapping candidates into a non-overlapping sequence.
///
/// Candidates are sorted by start ascending, then priority descending,
/// then length descending (the longer, more specific match wins among
/// equals), then detector registration order. A left-to-right greedy
/// sweep keeps a candidate iff it starts at or after the rightmost
/// committed end. O(n log n) and deterministic for a fixed candidate
/// multiset, which keeps pseudonym indices reproducible across runs.
pub fn resolve(mut candidates: Vec<CandidateSpan>) -> Vec<ResolvedSpan> {
    candidates.sort_by(compare);

    let mut resolved: Vec<ResolvedSpan> = Vec::with_capacity(candidates.len());
    let mut committed_end = 0usize;

    for candidate in candidates {
        if resolved.is_empty() || candidate.start >= committed_end {
            committed_end = candidate.end;
            resolved.push(candidate.into());
        }
    }

    resolved
}

fn compare(a: &CandidateSpan, b: &CandidateSpan) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.source_order.cmp(&b.source_order))
}
