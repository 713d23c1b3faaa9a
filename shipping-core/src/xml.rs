//! Minimal XML element tree
//!
//! Carrier-native SOAP objects render themselves into an [`Element`] tree
//! without namespace prefixes. Prefixes are applied afterwards by
//! [`Element::with_namespace_prefix`], which returns a new annotated tree, and
//! the tree is exported with [`Element::export`]. Responses are read back with
//! [`Element::parse`], which keeps local names only.

use crate::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Indentation width of exported documents
const INDENT_SIZE: usize = 4;

/// Carrier-native object that renders itself as an XML element
pub trait ToXml {
    /// Build the (unprefixed) element tree
    fn to_xml(&self) -> Element;
}

/// XML element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Namespace prefix
    pub prefix: Option<String>,
    /// Local name
    pub name: String,
    /// Attributes (qualified key, value)
    pub attributes: Vec<(String, String)>,
    /// Text content
    pub text: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a text-only element
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a text child; absent values are omitted
    pub fn with_text_child(mut self, name: &str, text: Option<&str>) -> Self {
        if let Some(text) = text {
            self.children.push(Element::text(name, text));
        }
        self
    }

    /// Set this element's prefix only
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Return a copy of the tree with `prefix` applied to this element and
    /// every descendant
    pub fn with_namespace_prefix(&self, prefix: &str) -> Element {
        Element {
            prefix: Some(prefix.to_string()),
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            text: self.text.clone(),
            children: self
                .children
                .iter()
                .map(|child| child.with_namespace_prefix(prefix))
                .collect(),
        }
    }

    /// Qualified name (`prefix:name`)
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.clone(),
        }
    }

    /// First direct child with the given local name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first direct child with the given local name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|child| child.text.as_deref())
    }

    /// All descendants with the given local name, in document order
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect(name, found);
        }
    }

    /// Export the tree as an indented document.
    ///
    /// `namespaces` are declared on the root element as `xmlns:<prefix>`.
    pub fn export(&self, namespaces: &[(&str, &str)]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);

        let mut root = self.clone();
        for (prefix, uri) in namespaces {
            root.attributes
                .push((format!("xmlns:{}", prefix), (*uri).to_string()));
        }
        Self::write_element(&mut writer, &root)?;

        let result = writer.into_inner().into_inner();
        String::from_utf8(result).map_err(|e| Error::Xml(e.to_string()))
    }

    fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<()> {
        let name = element.qualified_name();
        let mut start = BytesStart::new(name.as_str());
        for (key, value) in &element.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if element.text.is_none() && element.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Xml(e.to_string()))?;

        if let Some(ref text) = element.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }
        for child in &element.children {
            Self::write_element(writer, child)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(name.as_str())))
            .map_err(|e| Error::Xml(e.to_string()))?;

        Ok(())
    }

    /// Parse a document into a tree of local names (prefixes are dropped)
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        loop {
            match reader.read_event().map_err(|e| Error::Xml(e.to_string()))? {
                Event::Start(e) => stack.push(Self::from_start(&e)?),
                Event::Empty(e) => {
                    let element = Self::from_start(&e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Event::CData(e) => {
                    let text = std::str::from_utf8(&e).map_err(|e| Error::Xml(e.to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.get_or_insert_with(String::new).push_str(text);
                    }
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Xml("Unbalanced closing tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(Error::Xml("Unexpected end of document".to_string()));
                }
                _ => {}
            }
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let name = std::str::from_utf8(start.local_name().as_ref())
            .map_err(|e| Error::Xml(e.to_string()))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Xml(e.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            prefix: None,
            name,
            attributes,
            text: None,
            children: Vec::new(),
        })
    }
}
