pub mod kicad_xml;
pub mod schema;

// Re-export for convenience
pub use kicad_xml::{NetlistParseError, XmlNetlistParser};
pub use schema::*;
