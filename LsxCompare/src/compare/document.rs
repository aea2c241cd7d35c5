//! LSX document comparison
//!

use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::formats::lsx::{self, LsxDocument, LsxRegion};

use super::node::compare_nodes;
use super::types::{CompareOptions, Comparison, Difference, NodePath};

/// Compare two LSX files
///
/// # Errors
/// Returns an error if either file cannot be read or parsed.
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    original: P,
    generated: Q,
    options: &CompareOptions,
) -> Result<Comparison> {
    let orig_doc = lsx::read_lsx(original)?;
    let gen_doc = lsx::read_lsx(generated)?;
    Ok(compare_documents(&orig_doc, &gen_doc, options))
}

/// Compare two LSX documents section by section
pub fn compare_documents(
    original: &LsxDocument,
    generated: &LsxDocument,
    options: &CompareOptions,
) -> Comparison {
    let orig_regions: IndexMap<&str, &LsxRegion> = original
        .regions
        .iter()
        .map(|r| (r.id.as_str(), r))
        .collect();
    let gen_regions: IndexMap<&str, &LsxRegion> = generated
        .regions
        .iter()
        .map(|r| (r.id.as_str(), r))
        .collect();

    let all_ids = orig_regions.keys().chain(
        gen_regions
            .keys()
            .filter(|id| !orig_regions.contains_key(*id)),
    );

    let mut result = Comparison::default();
    for id in all_ids {
        match (orig_regions.get(id), gen_regions.get(id)) {
            (Some(_), None) => result.differences.push(Difference::MissingSection {
                section: (*id).to_string(),
            }),
            (None, Some(_)) => result.differences.push(Difference::ExtraSection {
                section: (*id).to_string(),
            }),
            (Some(orig), Some(generated)) => {
                let diffs = compare_nodes(
                    orig.root.as_ref(),
                    generated.root.as_ref(),
                    &NodePath::new(id),
                    options,
                );
                tracing::debug!("Section {id}: {} difference(s)", diffs.len());
                result.differences.extend(diffs);
            }
            (None, None) => unreachable!(),
        }
    }

    result
}
