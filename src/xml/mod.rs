//! A minimal, namespace-aware XML tree reader.
//!
//! This is just enough XML for the diagram generator to re-parse the
//! documents the [`DocumentBuilder`](crate::document::DocumentBuilder)
//! emits (and any well-formed document of the same flavor): elements,
//! attributes, text with the predefined and numeric entities, comments,
//! CDATA and processing instructions. It is not a general-purpose XML
//! library: no DTD validation, no streaming.

use crate::error::XmlError;
use ahash::AHashMap;

mod reader;

use reader::Reader;

/// One node in the parsed tree: an element or a run of character data.
///
/// Adjacent character runs are coalesced, so two `Text` nodes never sit
/// next to each other.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// A parsed element with its resolved namespace and children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// Tag name exactly as written, prefix included (e.g. `dmndi:DMNShape`).
    pub name: String,
    /// Local part of the tag name, after any prefix.
    pub local_name: String,
    /// Namespace URI in scope for this element, when one is declared.
    pub namespace: Option<String>,
    pub attributes: AHashMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Returns an attribute value by its literal (prefixed) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the character data immediately following the start tag,
    /// if the first child is a text run.
    pub fn text(&self) -> Option<&str> {
        match self.children.first() {
            Some(XmlNode::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Iterates over the direct child elements, skipping text runs.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Returns the first direct child element with the given namespace and
    /// local name.
    pub fn child(&self, namespace: &str, local_name: &str) -> Option<&XmlElement> {
        self.child_elements()
            .find(|element| element.is_named(namespace, local_name))
    }

    /// Returns the first descendant (document order, self excluded) with
    /// the given namespace and local name.
    pub fn find(&self, namespace: &str, local_name: &str) -> Option<&XmlElement> {
        for child in self.child_elements() {
            if child.is_named(namespace, local_name) {
                return Some(child);
            }
            if let Some(found) = child.find(namespace, local_name) {
                return Some(found);
            }
        }
        None
    }

    /// Collects every descendant (document order, self excluded) with the
    /// given namespace and local name.
    pub fn descendants(&self, namespace: &str, local_name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_descendants(namespace, local_name, &mut found);
        found
    }

    fn collect_descendants<'a>(
        &'a self,
        namespace: &str,
        local_name: &str,
        found: &mut Vec<&'a XmlElement>,
    ) {
        for child in self.child_elements() {
            if child.is_named(namespace, local_name) {
                found.push(child);
            }
            child.collect_descendants(namespace, local_name, found);
        }
    }

    fn is_named(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }
}

/// Parses a complete document and returns its root element.
pub fn parse(text: &str) -> Result<XmlElement, XmlError> {
    Reader::new(text).parse_document()
}
