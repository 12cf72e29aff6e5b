//! Netlist data model shared by the reader and the extractor.

use std::fmt;

/// A schematic-assigned component designator such as `C1` or `U3`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefDes(pub String);

impl RefDes {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefDes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RefDes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RefDes {
    fn from(s: &str) -> Self {
        RefDes(s.to_string())
    }
}

impl PartialEq<&str> for RefDes {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A user field attached to a component (`<field name="MPN">...</field>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Text content; `None` when the element is empty.
    pub value: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A field element with no text content
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// One placed component instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub reference: RefDes,
    pub fields: Vec<Field>,
}

impl Component {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: RefDes(reference.into()),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }
}

/// The components section of a netlist, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netlist {
    pub source: Option<String>,
    pub components: Vec<Component>,
}
