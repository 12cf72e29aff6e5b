//! KiCad XML netlist reader
//!
//! Reads the `components` section of an Eeschema XML export:
//!
//! ```xml
//! <export version="D">
//!   <design><source>board.kicad_sch</source></design>
//!   <components>
//!     <comp ref="C1">
//!       <value>100n</value>
//!       <fields>
//!         <field name="MPN">CL05B104KO5NNNC</field>
//!       </fields>
//!     </comp>
//!   </components>
//! </export>
//! ```
//!
//! Every element child of `components` is taken as a component, whatever its
//! tag. Nets, libparts and everything else in the export are ignored.

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::parser::schema::{Component, Field, Netlist, RefDes};

#[derive(Debug, thiserror::Error)]
pub enum NetlistParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("No <components> section found")]
    MissingComponents,
    #[error("Component #{0} has no ref attribute")]
    MissingRef(usize),
    #[error("Field #{index} of component {reference} has no name attribute")]
    MissingFieldName { reference: String, index: usize },
}

/// Parser for KiCad XML netlist exports
pub struct XmlNetlistParser;

impl XmlNetlistParser {
    /// Read and parse a netlist file
    pub fn parse_file(path: &Path) -> Result<Netlist, NetlistParseError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        Self::parse_str(&content)
    }

    /// Parse netlist XML held in memory
    pub fn parse_str(content: &str) -> Result<Netlist, NetlistParseError> {
        // Hand-edited or converted exports sometimes carry a DOCTYPE
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(content, options)?;
        let root = doc.root_element();

        let components =
            child_element(root, "components").ok_or(NetlistParseError::MissingComponents)?;

        let source = child_element(root, "design")
            .and_then(|design| child_element(design, "source"))
            .and_then(|source| source.text())
            .map(str::to_string);

        let components = components
            .children()
            .filter(Node::is_element)
            .enumerate()
            .map(|(index, node)| parse_component(node, index))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Parsed {} components", components.len());
        Ok(Netlist { source, components })
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn parse_component(node: Node<'_, '_>, index: usize) -> Result<Component, NetlistParseError> {
    let reference = node
        .attribute("ref")
        .ok_or(NetlistParseError::MissingRef(index))?;

    // A component without a fields container simply has no fields
    let fields = match child_element(node, "fields") {
        Some(fields) => fields
            .children()
            .filter(Node::is_element)
            .enumerate()
            .map(|(i, field)| -> Result<Field, NetlistParseError> {
                let name = field.attribute("name").ok_or_else(|| {
                    NetlistParseError::MissingFieldName {
                        reference: reference.to_string(),
                        index: i,
                    }
                })?;
                Ok(Field {
                    name: name.to_string(),
                    value: field.text().map(str::to_string),
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(Component {
        reference: RefDes(reference.to_string()),
        fields,
    })
}
