//! Error types for `LsxCompare`

use thiserror::Error;

/// The error type for `LsxCompare` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// The input ended before every open element was closed.
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// A second top-level element follows the document element.
    #[error("junk after document element at byte {position}")]
    TrailingContent {
        /// Byte offset of the extra element in the input.
        position: usize,
    },

    /// JSON serialization error (report output).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== Document Structure Errors ====================
    /// A region, node or attribute element carries no `id`.
    ///
    /// The comparison matches everything by id, so a document with an
    /// anonymous element cannot be compared at all.
    #[error("malformed document: <{element}> without an id at byte {position}")]
    MissingIdentity {
        /// The element name (`region`, `node` or `attribute`).
        element: &'static str,
        /// Byte offset of the element in the input.
        position: usize,
    },
}

impl Error {
    /// True for failures of the input to parse as XML at all.
    ///
    /// These are reported to the user and end the run quietly, while a
    /// structurally malformed document is a hard failure.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::XmlError(_)
                | Self::XmlAttrError(_)
                | Self::Utf8Error(_)
                | Self::UnexpectedEof
                | Self::TrailingContent { .. }
        )
    }
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `LsxCompare` operations.
pub type Result<T> = std::result::Result<T, Error>;
