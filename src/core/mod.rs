//! Pipeline stages
//!
//! Data flows collector → resolver → assigner → rewriter, with
//! restore as the optional inverse and batch as the fan-out wrapper.
//! Every stage is a pure function over per-document state.

pub mod assigner;
pub mod batch;
pub mod collector;
pub mod resolver;
pub mod restore;
pub mod rewriter;

pub use assigner::{assign_labels, LabelAssignment};
pub use collector::{collect_candidates, DetectorOutput};
pub use resolver::resolve;
pub use restore::restore;
pub use rewriter::rewrite;
