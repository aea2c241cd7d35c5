//! # LsxCompare
//!
//! Semantic comparison of Larian LSX documents.
//!
//! Regenerating an LSX file (for example through an LSX -> LSF -> LSX round
//! trip) changes how floats are printed without changing what the file
//! means. `LsxCompare` walks two documents region by region and reports only
//! the differences that matter: missing or extra regions, attributes and
//! nodes, changed values, and changed ordering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lsxcompare::compare::{compare_files, CompareOptions};
//!
//! let result = compare_files("meta.lsx", "meta.regenerated.lsx", &CompareOptions::default())?;
//! if result.is_empty() {
//!     println!("No differences");
//! }
//! # Ok::<(), lsxcompare::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `compare-lsx` command-line binary

pub mod compare;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::compare::{
        CompareOptions, Comparison, Difference, DifferenceKind, NodePath, ReportFormat,
        ReportOptions, compare_documents, compare_files,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::common::{TypeId, resolve_type_tag, type_name_to_id};
    pub use crate::formats::lsx::{LsxAttribute, LsxDocument, LsxNode, LsxRegion, parse_lsx, read_lsx};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
