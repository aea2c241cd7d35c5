//! Shared format utilities

pub mod types;

pub use types::{TypeId, is_float_class, resolve_type_tag, type_name_to_id};
