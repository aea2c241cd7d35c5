//! LSX document structures
//!
//! Plain owned values, independent of the XML reader, so the comparison
//! can be driven from documents built in code as well as from files.

/// An LSX (Larian Save XML) document.
#[derive(Debug, Clone, PartialEq)]
pub struct LsxDocument {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Revision number.
    pub revision: u32,
    /// Build number.
    pub build: u32,
    /// Document regions containing the data.
    pub regions: Vec<LsxRegion>,
}

/// A region in an LSX document.
#[derive(Debug, Clone, PartialEq)]
pub struct LsxRegion {
    /// Region identifier.
    pub id: String,
    /// The region's root node, if it has one.
    pub root: Option<LsxNode>,
}

/// A node in an LSX document.
#[derive(Debug, Clone, PartialEq)]
pub struct LsxNode {
    /// Node identifier/type.
    pub id: String,
    /// Attributes on this node.
    pub attributes: Vec<LsxAttribute>,
    /// Nodes listed under this node's `<children>` element.
    pub children: Vec<LsxNode>,
}

/// An attribute on an LSX node.
#[derive(Debug, Clone, PartialEq)]
pub struct LsxAttribute {
    /// Attribute identifier/name.
    pub id: String,
    /// Type tag as written (e.g., "`FixedString`", "`float`", "6").
    pub type_name: String,
    /// String representation of the value.
    pub value: String,
    /// Localization handle for translated strings.
    pub handle: Option<String>,
    /// Version number for translated strings.
    pub version: Option<u16>,
}

impl LsxDocument {
    /// Creates a new LSX document with the specified version.
    #[must_use]
    pub fn new(major: u32, minor: u32, revision: u32, build: u32) -> Self {
        LsxDocument {
            major,
            minor,
            revision,
            build,
            regions: Vec::new(),
        }
    }

    /// Get version as a string
    #[must_use]
    pub fn version_string(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major, self.minor, self.revision, self.build
        )
    }
}

impl Default for LsxDocument {
    fn default() -> Self {
        Self::new(4, 0, 0, 0)
    }
}

impl LsxRegion {
    /// Creates a region holding a single root node.
    #[must_use]
    pub fn new(id: impl Into<String>, root: LsxNode) -> Self {
        LsxRegion {
            id: id.into(),
            root: Some(root),
        }
    }
}

impl LsxNode {
    /// Creates a new LSX node with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        LsxNode {
            id: id.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl LsxAttribute {
    /// Creates a new LSX attribute with the given ID, type, and value.
    #[must_use]
    pub fn new(id: impl Into<String>, type_name: impl Into<String>, value: impl Into<String>) -> Self {
        LsxAttribute {
            id: id.into(),
            type_name: type_name.into(),
            value: value.into(),
            handle: None,
            version: None,
        }
    }

    /// The value as compared and reported.
    ///
    /// Translated strings written with only a handle show the handle (and
    /// version, when present) instead of an empty value.
    #[must_use]
    pub fn raw_value(&self) -> String {
        match (&self.handle, self.value.is_empty()) {
            (Some(handle), true) => match self.version {
                Some(version) => format!("{handle}:{version}"),
                None => handle.clone(),
            },
            _ => self.value.clone(),
        }
    }
}
