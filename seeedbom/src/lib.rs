//! SeeedBOM - KiCad netlist to Seeed Fusion PCBA bill of materials
//!
//! Reads a KiCad XML netlist export, resolves every component to a part from
//! its `SEED_SKU` or `MPN` field, and writes a BOM in the Seeed Studio Fusion
//! PCBA template: one row per part with its designators, quantity and link.
//!
//! # Quick Start
//!
//! ```no_run
//! use seeedbom::{BomOptions, SeeedBomCore};
//! use std::path::Path;
//!
//! let report = SeeedBomCore::convert(
//!     Path::new("board.xml"),
//!     "board-bom",
//!     BomOptions::default(),
//! ).unwrap();
//!
//! for row in report.rows() {
//!     println!("{} x{}: {}", row.part, row.quantity, row.designators);
//! }
//! if report.has_unresolved() {
//!     println!("missing SKU/MPN: {:?}", report.unresolved);
//! }
//! ```
//!
//! # Resolution
//!
//! - **`SEED_SKU`**: Open Parts Library SKU, linked as `seeed OPL`
//! - **`MPN`**: manufacturer part number, linked to `DK_DETAIL_PAGE`
//! - anything else is reported as unresolved and left out

pub mod bom;
pub mod core;
pub mod extract;
pub mod natural;
pub mod parser;

// Re-export main types
pub use crate::core::{output_path, BomOptions, BomReport, SeeedBomCore, SeeedBomError};
pub use bom::{Bom, BomRow, BomWriteError, BomWriter, PartGroup, HEADER};
pub use extract::{Extraction, Extractor, FieldTag, ResolvedPart, ResolvedParts, OPL_LINK};
pub use natural::{natural_cmp, natural_sort};
pub use parser::kicad_xml::{NetlistParseError, XmlNetlistParser};
pub use parser::schema::{Component, Field, Netlist, RefDes};

/// Parse a netlist file (convenience wrapper).
pub fn parse_netlist(path: &std::path::Path) -> Result<Netlist, SeeedBomError> {
    XmlNetlistParser::parse_file(path).map_err(SeeedBomError::from)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Bom, BomOptions, BomReport, BomRow, RefDes, SeeedBomCore, SeeedBomError,
    };
}
