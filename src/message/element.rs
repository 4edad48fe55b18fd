//! In-memory message tree and its XML rendering.
//!
//! Every builder returns a [`Message`]; turning it into a string is a separate
//! step through [`Message::to_xml`] or [`Message::to_xml_with`].

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use serde::{Deserialize, Serialize};

use crate::error::{MessageError, Result};

/// The update operation a message performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Commit,
    Optimize,
    Rollback,
    Delete,
}

impl Operation {
    /// The root element name of messages for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Commit => "commit",
            Operation::Optimize => "optimize",
            Operation::Rollback => "rollback",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering settings for [`Message::to_xml_with`].
///
/// The default is the compact form expected by the update handler: no XML
/// declaration and no whitespace between tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub declaration: bool,
    /// Indent nested elements by this many spaces.
    pub indent: Option<usize>,
}

impl RenderOptions {
    pub fn compact() -> Self {
        RenderOptions::default()
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

/// One XML element with textual attributes, optional text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute. An existing attribute with the same key keeps its
    /// position and takes the new value.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = Some(text.into());
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child elements with the given name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        check_name(&self.name)?;

        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            check_name(key)?;
            check_chars(value)?;
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape_attribute(value).into_bytes()),
            });
        }

        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            check_chars(text)?;
            writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// A complete update message: the operation and its root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    operation: Operation,
    root: Element,
}

impl Message {
    pub fn new(operation: Operation, root: Element) -> Self {
        Message { operation, root }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Render the message in compact form.
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&RenderOptions::compact())
    }

    /// Render the message with explicit rendering settings.
    pub fn to_xml_with(&self, options: &RenderOptions) -> Result<String> {
        let mut writer = match options.indent {
            Some(indent) => Writer::new_with_indent(Vec::new(), b' ', indent),
            None => Writer::new(Vec::new()),
        };

        if options.declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            if options.indent.is_none() {
                writer.get_mut().push(b'\n');
            }
        }
        self.root.write_to(&mut writer)?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

// Subset of the XML 1.0 `Name` production: enough to reject keys that would
// produce unparsable output.
fn check_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    let valid_rest = |c: char| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.');

    match chars.next() {
        Some(c) if valid_start(c) && chars.all(valid_rest) => Ok(()),
        _ => Err(MessageError::xml(format!("invalid XML name: {name:?}"))),
    }
}

// Parsers fold a literal CR into LF in character data, so it is written as a
// character reference.
fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

// Parsers turn literal tab, LF and CR in attribute values into spaces.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn check_chars(text: &str) -> Result<()> {
    let is_xml_char = |c: char| {
        matches!(c,
            '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}')
    };

    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(MessageError::xml(format!(
            "character U+{:04X} is not allowed in XML",
            c as u32
        ))),
        None => Ok(()),
    }
}
