//! LSX (XML) format module

mod document;
mod reader;

pub use document::{LsxAttribute, LsxDocument, LsxNode, LsxRegion};
pub use reader::{parse_lsx, read_lsx};
