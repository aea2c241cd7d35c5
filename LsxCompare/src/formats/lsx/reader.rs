//! LSX file reading
//!
//! Only the structure the comparison relies on is materialized: regions
//! directly under the document root, each with its first `<node>`, and for
//! every node its `<attribute>` elements and the nodes inside its first
//! `<children>` element.

use super::document::{LsxAttribute, LsxDocument, LsxNode, LsxRegion};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Read an LSX file from disk
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid XML, or
/// contains a region, node or attribute without an `id`.
pub fn read_lsx<P: AsRef<Path>>(path: P) -> Result<LsxDocument> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = std::str::from_utf8(&bytes)?;
    let doc = parse_lsx(content)?;
    tracing::debug!(
        "Loaded {} ({} regions, version {})",
        path.display(),
        doc.regions.len(),
        doc.version_string()
    );
    Ok(doc)
}

/// Parse LSX from XML string
///
/// # Errors
/// Returns an error if the XML is malformed or has an element without an `id`.
pub fn parse_lsx(content: &str) -> Result<LsxDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut builder = DocumentBuilder::default();
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let open = builder.open(&e, position)?;
                builder.stack.push(open);
            }
            Ok(Event::Empty(e)) => {
                let open = builder.open(&e, position)?;
                builder.close(open);
            }
            Ok(Event::End(_)) => {
                if let Some(open) = builder.stack.pop() {
                    builder.close(open);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

/// An element that has been opened but not yet closed.
enum Open {
    /// The document root (`<save>`).
    Root,
    Region(LsxRegion),
    Node {
        node: LsxNode,
        /// Set once the node's `<children>` element has been opened.
        has_children: bool,
    },
    /// A `<children>` element, collecting the nodes listed in it.
    Children(Vec<LsxNode>),
    /// Anything the comparison does not look at.
    Other,
}

#[derive(Default)]
struct DocumentBuilder {
    doc: LsxDocument,
    stack: Vec<Open>,
    seen_root: bool,
}

impl DocumentBuilder {
    /// Interpret a start (or empty) tag in the context of its parent.
    fn open(&mut self, e: &BytesStart<'_>, position: usize) -> Result<Open> {
        let Some(parent) = self.stack.last_mut() else {
            if self.seen_root {
                return Err(Error::TrailingContent { position });
            }
            self.seen_root = true;
            return Ok(Open::Root);
        };

        let open = match (e.name().as_ref(), parent) {
            (b"version", Open::Root) => {
                read_version(e, &mut self.doc)?;
                Open::Other
            }
            (b"region", Open::Root) => {
                let id = required_id(e, "region", position)?;
                Open::Region(LsxRegion { id, root: None })
            }
            (b"node", _) => {
                let id = required_id(e, "node", position)?;
                Open::Node {
                    node: LsxNode::new(id),
                    has_children: false,
                }
            }
            (b"children", Open::Node { node, has_children }) => {
                if *has_children {
                    tracing::debug!(
                        "Node '{}' has more than one <children> element, ignoring the extra one",
                        node.id
                    );
                    Open::Other
                } else {
                    *has_children = true;
                    Open::Children(Vec::new())
                }
            }
            (b"attribute", Open::Node { node, .. }) => {
                node.attributes.push(read_attribute(e, position)?);
                Open::Other
            }
            _ => Open::Other,
        };
        Ok(open)
    }

    /// Attach a finished element to whatever encloses it.
    fn close(&mut self, open: Open) {
        match (open, self.stack.last_mut()) {
            (Open::Node { node, .. }, Some(Open::Children(nodes))) => nodes.push(node),
            (Open::Node { node, .. }, Some(Open::Region(region))) => {
                if region.root.is_none() {
                    region.root = Some(node);
                } else {
                    tracing::debug!(
                        "Region {} has more than one root node, ignoring '{}'",
                        region.id,
                        node.id
                    );
                }
            }
            (Open::Node { node, .. }, Some(Open::Node { node: parent, .. })) => {
                tracing::warn!(
                    "Node '{}' inside '{}' is not under <children>, ignoring it",
                    node.id,
                    parent.id
                );
            }
            (Open::Children(nodes), Some(Open::Node { node: parent, .. })) => {
                parent.children = nodes;
            }
            (Open::Region(region), Some(Open::Root)) => self.doc.regions.push(region),
            _ => {}
        }
    }

    fn finish(self) -> Result<LsxDocument> {
        if !self.seen_root || !self.stack.is_empty() {
            return Err(Error::UnexpectedEof);
        }
        Ok(self.doc)
    }
}

fn read_version(e: &BytesStart<'_>, doc: &mut LsxDocument) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr?;
        let value_str = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"major" => doc.major = value_str.parse().unwrap_or(4),
            b"minor" => doc.minor = value_str.parse().unwrap_or(0),
            b"revision" => doc.revision = value_str.parse().unwrap_or(0),
            b"build" => doc.build = value_str.parse().unwrap_or(0),
            _ => {}
        }
    }
    Ok(())
}

fn read_attribute(e: &BytesStart<'_>, position: usize) -> Result<LsxAttribute> {
    let mut attr_id = None;
    let mut attr_type = String::new();
    let mut attr_value = String::new();
    let mut handle = None;
    let mut version = None;

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => attr_id = Some(value.into_owned()),
            b"type" => attr_type = value.into_owned(),
            b"value" => attr_value = value.into_owned(),
            b"handle" => handle = Some(value.into_owned()),
            b"version" => version = value.parse().ok(),
            _ => {}
        }
    }

    let id = attr_id.ok_or(Error::MissingIdentity {
        element: "attribute",
        position,
    })?;
    Ok(LsxAttribute {
        id,
        type_name: attr_type,
        value: attr_value,
        handle,
        version,
    })
}

fn required_id(e: &BytesStart<'_>, element: &'static str, position: usize) -> Result<String> {
    optional_attr(e, b"id")?.ok_or(Error::MissingIdentity { element, position })
}

fn optional_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
