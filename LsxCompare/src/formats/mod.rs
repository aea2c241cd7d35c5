//! Larian document formats understood by the comparison

pub mod common;
pub mod lsx;

// Re-export common types for convenience
pub use common::{TypeId, is_float_class, resolve_type_tag, type_name_to_id};

// Re-export main document types
pub use lsx::{LsxAttribute, LsxDocument, LsxNode, LsxRegion};
