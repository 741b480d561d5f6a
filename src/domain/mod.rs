//! Core domain types and models

pub mod category;
pub mod entity_map;
pub mod errors;
pub mod result;
pub mod span;

pub use category::EntityCategory;
pub use entity_map::EntityMap;
pub use errors::VeilError;
pub use result::{IdentityPolicy, RedactionMode, RedactionResult};
pub use span::{CandidateSpan, ResolvedSpan};

/// Convenience result type used throughout the library
pub type Result<T> = std::result::Result<T, VeilError>;
