//! Conversion pipeline shared by the CLI and library users.
//! Reads a netlist, resolves parts, groups them and writes the CSV.

use std::path::{Path, PathBuf};

use crate::bom::{Bom, BomRow, BomWriteError, BomWriter};
use crate::extract::{Extraction, Extractor, OPL_LINK};
use crate::parser::kicad_xml::{NetlistParseError, XmlNetlistParser};
use crate::parser::schema::{Netlist, RefDes};

#[derive(Debug, thiserror::Error)]
pub enum SeeedBomError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Write error: {0}")]
    Write(String),
}

impl From<NetlistParseError> for SeeedBomError {
    fn from(e: NetlistParseError) -> Self {
        match e {
            NetlistParseError::Io(e) => SeeedBomError::Io(e),
            e => SeeedBomError::Parse(e.to_string()),
        }
    }
}

impl From<BomWriteError> for SeeedBomError {
    fn from(e: BomWriteError) -> Self {
        match e {
            BomWriteError::Io(e) => SeeedBomError::Io(e),
            e => SeeedBomError::Write(e.to_string()),
        }
    }
}

/// Options for a conversion run
#[derive(Clone, Debug)]
pub struct BomOptions {
    /// Link written for `SEED_SKU` parts
    pub opl_link: String,
    pub delimiter: u8,
}

impl Default for BomOptions {
    fn default() -> Self {
        Self {
            opl_link: OPL_LINK.to_string(),
            delimiter: b',',
        }
    }
}

/// Outcome of a conversion
#[derive(Debug, Clone)]
pub struct BomReport {
    pub output: PathBuf,
    pub bom: Bom,
    /// Designators left out of the BOM, in document order
    pub unresolved: Vec<RefDes>,
}

impl BomReport {
    pub fn rows(&self) -> Vec<BomRow> {
        self.bom.rows()
    }

    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// Placements in the BOM plus unresolved designators
    pub fn total_components(&self) -> usize {
        self.bom.total_quantity() + self.unresolved.len()
    }
}

/// `<slug>.csv`. The extension is appended, never substituted, so a slug
/// like `board.v2` gives `board.v2.csv`.
pub fn output_path(slug: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", slug))
}

/// Core conversion API
pub struct SeeedBomCore;

impl SeeedBomCore {
    /// Resolve and group an already parsed netlist.
    pub fn build(netlist: &Netlist, options: &BomOptions) -> (Bom, Extraction) {
        let extraction = Extractor::new(options.opl_link.clone()).extract(netlist);
        let bom = Bom::from_resolved(&extraction.resolved);
        (bom, extraction)
    }

    /// Convert the netlist at `input` and write `<slug>.csv`, replacing any
    /// existing file.
    pub fn convert(
        input: &Path,
        slug: &str,
        options: BomOptions,
    ) -> Result<BomReport, SeeedBomError> {
        let netlist = XmlNetlistParser::parse_file(input)?;
        if let Some(source) = &netlist.source {
            tracing::info!("Netlist {} exported from {}", input.display(), source);
        }

        let (bom, extraction) = Self::build(&netlist, &options);
        for reference in &extraction.unresolved {
            tracing::debug!("{} has no SEED_SKU or MPN, left out of the BOM", reference);
        }

        let output = output_path(slug);
        BomWriter::new(options.delimiter).write_file(&bom, &output)?;

        Ok(BomReport {
            output,
            bom,
            unresolved: extraction.unresolved.into_iter().collect(),
        })
    }
}
