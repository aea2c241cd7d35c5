//! Core types for comparison results
//!

use std::fmt;

use serde::{Serialize, Serializer};

/// Options for comparisons
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Decimal places kept when normalizing float, vector and matrix values
    pub precision: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// Path to a node in the document tree
///
/// Built from the section id and the ids of the nodes walked from the
/// section's root; a segment carries an `[index]` when its node shares its
/// id with siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    /// Section (region) ID
    pub section: String,
    /// Path segments below the section
    pub segments: Vec<String>,
}

impl NodePath {
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            segments: Vec::new(),
        }
    }

    /// Path of a child whose id is unique among its siblings
    pub fn with_segment(&self, id: &str) -> Self {
        let mut new = self.clone();
        new.segments.push(id.to_string());
        new
    }

    /// Path of one member of a repeated child id
    pub fn with_indexed_segment(&self, id: &str, index: usize) -> Self {
        let mut new = self.clone();
        new.segments.push(format!("{id}[{index}]"));
        new
    }

    /// Path of a named item (attribute or node group) directly below this node
    pub fn join(&self, name: &str) -> String {
        format!("{self}/{name}")
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section[{}]", self.section)?;
        for seg in &self.segments {
            write!(f, "/{seg}")?;
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kind of a [`Difference`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifferenceKind {
    MissingSection,
    ExtraSection,
    MissingAttribute,
    ExtraAttribute,
    ValueMismatch,
    AttributeOrderMismatch,
    MissingNodeGroup,
    ExtraNodeGroup,
    NodeGroupCountMismatch,
    ChildOrderMismatch,
}

/// A single discrepancy between the original and the generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difference {
    /// Section present only in the original
    MissingSection { section: String },
    /// Section present only in the generated document
    ExtraSection { section: String },
    /// Attribute present only on the original node
    MissingAttribute {
        path: NodePath,
        attribute: String,
        expected: String,
    },
    /// Attribute present only on the generated node
    ExtraAttribute {
        path: NodePath,
        attribute: String,
        found: String,
    },
    /// Values differ after normalization; raw values are kept for display
    ValueMismatch {
        path: NodePath,
        attribute: String,
        original: String,
        generated: String,
    },
    /// First position where the attribute id sequences diverge
    AttributeOrderMismatch {
        path: NodePath,
        index: usize,
        original: String,
        generated: String,
    },
    /// Child id present only under the original node
    MissingNodeGroup {
        path: NodePath,
        node: String,
        count: usize,
    },
    /// Child id present only under the generated node
    ExtraNodeGroup {
        path: NodePath,
        node: String,
        count: usize,
    },
    /// Child id present on both sides with a different number of nodes
    NodeGroupCountMismatch {
        path: NodePath,
        node: String,
        original: usize,
        generated: usize,
    },
    /// First position where the child id sequences diverge
    ChildOrderMismatch {
        path: NodePath,
        index: usize,
        original: String,
        generated: String,
    },
}

impl Difference {
    pub fn kind(&self) -> DifferenceKind {
        match self {
            Self::MissingSection { .. } => DifferenceKind::MissingSection,
            Self::ExtraSection { .. } => DifferenceKind::ExtraSection,
            Self::MissingAttribute { .. } => DifferenceKind::MissingAttribute,
            Self::ExtraAttribute { .. } => DifferenceKind::ExtraAttribute,
            Self::ValueMismatch { .. } => DifferenceKind::ValueMismatch,
            Self::AttributeOrderMismatch { .. } => DifferenceKind::AttributeOrderMismatch,
            Self::MissingNodeGroup { .. } => DifferenceKind::MissingNodeGroup,
            Self::ExtraNodeGroup { .. } => DifferenceKind::ExtraNodeGroup,
            Self::NodeGroupCountMismatch { .. } => DifferenceKind::NodeGroupCountMismatch,
            Self::ChildOrderMismatch { .. } => DifferenceKind::ChildOrderMismatch,
        }
    }

    /// Where the difference was found, as a path string
    pub fn location(&self) -> String {
        match self {
            Self::MissingSection { section } | Self::ExtraSection { section } => {
                NodePath::new(section).to_string()
            }
            Self::MissingAttribute {
                path, attribute, ..
            }
            | Self::ExtraAttribute {
                path, attribute, ..
            }
            | Self::ValueMismatch {
                path, attribute, ..
            } => path.join(attribute),
            Self::MissingNodeGroup { path, node, .. }
            | Self::ExtraNodeGroup { path, node, .. }
            | Self::NodeGroupCountMismatch { path, node, .. } => path.join(node),
            Self::AttributeOrderMismatch { path, .. } | Self::ChildOrderMismatch { path, .. } => {
                path.to_string()
            }
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.location();
        match self {
            Self::MissingSection { section } => write!(f, "MISSING SECTION: {section}"),
            Self::ExtraSection { section } => write!(f, "EXTRA SECTION: {section}"),
            Self::MissingAttribute { expected, .. } => {
                write!(f, "MISSING ATTR: {loc} (Expected {expected})")
            }
            Self::ExtraAttribute { found, .. } => write!(f, "EXTRA ATTR: {loc} (Found {found})"),
            Self::ValueMismatch {
                original,
                generated,
                ..
            } => write!(
                f,
                "DIFF VALUE: {loc} | Original: {original} | Generated: {generated}"
            ),
            Self::AttributeOrderMismatch {
                index,
                original,
                generated,
                ..
            } => write!(
                f,
                "ATTR ORDER: {loc} attr {index} | Original: {original} | Generated: {generated}"
            ),
            Self::MissingNodeGroup { count, .. } => write!(f, "MISSING NODE: {loc} (x{count})"),
            Self::ExtraNodeGroup { count, .. } => write!(f, "EXTRA NODE: {loc} (x{count})"),
            Self::NodeGroupCountMismatch {
                original,
                generated,
                ..
            } => write!(
                f,
                "DIFF COUNT: {loc} | Original: {original} | Generated: {generated}"
            ),
            Self::ChildOrderMismatch {
                index,
                original,
                generated,
                ..
            } => write!(
                f,
                "ORDER ISSUE: {loc} child {index} | Original: {original} | Generated: {generated}"
            ),
        }
    }
}

/// Result of comparing two documents
#[derive(Debug, Clone, Default, Serialize)]
pub struct Comparison {
    /// All detected differences, in report order
    pub differences: Vec<Difference>,
}

impl Comparison {
    /// Check if there are no differences
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Count differences of one kind
    pub fn count_of(&self, kind: DifferenceKind) -> usize {
        self.differences.iter().filter(|d| d.kind() == kind).count()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "OK: No significant semantic differences found.".to_string()
        } else {
            format!("Found {} differences:", self.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let root = NodePath::new("Config");
        assert_eq!(root.to_string(), "section[Config]");

        let item = root.with_segment("root").with_indexed_segment("Item", 2);
        assert_eq!(item.to_string(), "section[Config]/root/Item[2]");
        assert_eq!(item.join("UUID"), "section[Config]/root/Item[2]/UUID");
    }

    #[test]
    fn test_difference_lines() {
        let path = NodePath::new("A");
        let value = Difference::ValueMismatch {
            path: path.clone(),
            attribute: "x".to_string(),
            original: "1.0".to_string(),
            generated: "2.0".to_string(),
        };
        assert_eq!(value.location(), "section[A]/x");
        assert_eq!(
            value.to_string(),
            "DIFF VALUE: section[A]/x | Original: 1.0 | Generated: 2.0"
        );

        let count = Difference::NodeGroupCountMismatch {
            path: path.clone(),
            node: "Item".to_string(),
            original: 2,
            generated: 3,
        };
        assert_eq!(
            count.to_string(),
            "DIFF COUNT: section[A]/Item | Original: 2 | Generated: 3"
        );

        let order = Difference::ChildOrderMismatch {
            path,
            index: 1,
            original: "b".to_string(),
            generated: "x".to_string(),
        };
        assert_eq!(
            order.to_string(),
            "ORDER ISSUE: section[A] child 1 | Original: b | Generated: x"
        );

        let missing = Difference::MissingSection {
            section: "B".to_string(),
        };
        assert_eq!(missing.to_string(), "MISSING SECTION: B");
        assert_eq!(missing.location(), "section[B]");
    }

    #[test]
    fn test_serialized_kind_tag() {
        let diff = Difference::ExtraNodeGroup {
            path: NodePath::new("A").with_segment("root"),
            node: "Item".to_string(),
            count: 4,
        };
        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["kind"], "EXTRA_NODE_GROUP");
        assert_eq!(json["path"], "section[A]/root");
        assert_eq!(json["count"], 4);
    }

    #[test]
    fn test_summary() {
        let mut result = Comparison::default();
        assert_eq!(
            result.summary(),
            "OK: No significant semantic differences found."
        );
        result.differences.push(Difference::ExtraSection {
            section: "X".to_string(),
        });
        assert_eq!(result.summary(), "Found 1 differences:");
        assert_eq!(result.count_of(DifferenceKind::ExtraSection), 1);
        assert_eq!(result.count_of(DifferenceKind::MissingSection), 0);
    }
}
