//! Candidate and resolved span models
//!
//! Spans use byte offsets into the original text with half-open
//! `[start, end)` semantics. Offsets must fall on `char` boundaries;
//! the collector drops anything that doesn't.

use crate::domain::EntityCategory;
use serde::{Deserialize, Serialize};

/// A span reported by one detector, before conflict resolution
///
/// Created once per detector invocation and owned by the collector
/// until handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpan {
    /// Byte offset of the first character (inclusive)
    pub start: usize,
    /// Byte offset past the last character (exclusive)
    pub end: usize,
    /// Entity category claimed by the detector
    pub category: EntityCategory,
    /// Detector priority; pattern detectors outrank the statistical
    /// recognizer for spans they both claim
    pub priority: u8,
    /// Registration index of the contributing detector, used as the
    /// final deterministic tie-break between otherwise equal candidates
    pub source_order: usize,
    /// The original text covered by this span
    pub text: String,
}

impl CandidateSpan {
    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no text
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two half-open ranges share any position
    pub fn overlaps(&self, other: &CandidateSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate selected as authoritative for its text region
///
/// The full set of resolved spans for one document is pairwise
/// non-overlapping and ordered by `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSpan {
    /// Byte offset of the first character (inclusive)
    pub start: usize,
    /// Byte offset past the last character (exclusive)
    pub end: usize,
    /// Entity category
    pub category: EntityCategory,
    /// The original text covered by this span
    pub text: String,
}

impl From<CandidateSpan> for ResolvedSpan {
    fn from(candidate: CandidateSpan) -> Self {
        Self {
            start: candidate.start,
            end: candidate.end,
            category: candidate.category,
            text: candidate.text,
        }
    }
}
