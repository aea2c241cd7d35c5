//! Semantic comparison of LSX documents
//!
//! Check that a regenerated LSX file carries the same content as the file it
//! was produced from, ignoring float formatting noise.
//!
//! # Comparing Files
//!
//! ```no_run
//! use lsxcompare::compare::{compare_files, CompareOptions};
//!
//! let result = compare_files("original/meta.lsx", "generated/meta.lsx", &CompareOptions::default())?;
//!
//! println!("{}", result.summary());
//! for difference in &result.differences {
//!     println!("  {difference}");
//! }
//! # Ok::<(), lsxcompare::Error>(())
//! ```
//!
//! # Comparing Documents Built in Code
//!
//! ```
//! use lsxcompare::compare::{compare_documents, CompareOptions};
//! use lsxcompare::formats::lsx::{LsxAttribute, LsxDocument, LsxNode, LsxRegion};
//!
//! let mut root = LsxNode::new("root");
//! root.attributes.push(LsxAttribute::new("Scale", "float", "1.0"));
//! let mut original = LsxDocument::default();
//! original.regions.push(LsxRegion::new("Config", root.clone()));
//!
//! root.attributes[0].value = "1.0000000001".to_string();
//! let mut generated = LsxDocument::default();
//! generated.regions.push(LsxRegion::new("Config", root));
//!
//! assert!(compare_documents(&original, &generated, &CompareOptions::default()).is_empty());
//! ```
//!

mod document;
mod node;
mod normalize;
mod report;
mod types;

pub use document::{compare_documents, compare_files};
pub use node::compare_nodes;
pub use normalize::normalize_value;
pub use report::{
    ReportFormat, ReportOptions, render, write_differences, write_header, write_report,
};
pub use types::{CompareOptions, Comparison, Difference, DifferenceKind, NodePath};
