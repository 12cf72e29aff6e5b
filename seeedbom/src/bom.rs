//! BOM aggregation and Seeed Fusion PCBA CSV output
//!
//! Resolved components are grouped by part identity. Groups come out in
//! ordinal order of the part identity, designators inside a group in natural
//! order (`C1,C2,C10`). The output follows the Seeed Fusion PCBA BOM template:
//!
//! ```text
//! Part/Designator,Manufacture Part Number/Seeed SKU,Quantity,Link
//! "C1,C2,C3,C4,C5",RHA0J471MCN1GS,5,https://www.digikey.com/...
//! "A1,A4",318020010,2,seeed OPL
//! D1,CYBLE-014008-00,1,https://www.digikey.com/...
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::extract::ResolvedParts;
use crate::natural::natural_sort;
use crate::parser::schema::RefDes;

/// Column names of the Seeed Fusion PCBA template, in order
pub const HEADER: [&str; 4] = [
    "Part/Designator",
    "Manufacture Part Number/Seeed SKU",
    "Quantity",
    "Link",
];

#[derive(Debug, thiserror::Error)]
pub enum BomWriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// All designators that share one part identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartGroup {
    pub part: String,
    /// Link of the first designator seen for this part
    pub link: Option<String>,
    pub designators: Vec<RefDes>,
}

impl PartGroup {
    pub fn quantity(&self) -> usize {
        self.designators.len()
    }

    /// Designators joined with `,` and no spaces
    pub fn designator_list(&self) -> String {
        self.designators
            .iter()
            .map(RefDes::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn to_row(&self) -> BomRow {
        BomRow {
            designators: self.designator_list(),
            part: self.part.clone(),
            quantity: self.quantity(),
            link: self.link.clone(),
        }
    }
}

/// One line of the output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomRow {
    #[serde(rename = "Part/Designator")]
    pub designators: String,
    #[serde(rename = "Manufacture Part Number/Seeed SKU")]
    pub part: String,
    #[serde(rename = "Quantity")]
    pub quantity: usize,
    #[serde(rename = "Link")]
    pub link: Option<String>,
}

/// A bill of materials, one group per distinct part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bom {
    pub groups: Vec<PartGroup>,
}

impl Bom {
    /// Group resolved components by part.
    ///
    /// Designators are visited in insertion order and the first one seen for
    /// a part decides the link. A different link on a later designator is
    /// dropped.
    pub fn from_resolved(resolved: &ResolvedParts) -> Self {
        let mut groups: BTreeMap<&str, PartGroup> = BTreeMap::new();

        for (reference, part) in resolved.iter() {
            let group = groups
                .entry(part.part.as_str())
                .or_insert_with(|| PartGroup {
                    part: part.part.clone(),
                    link: part.link.clone(),
                    designators: Vec::new(),
                });
            if group.link != part.link {
                tracing::debug!(
                    "{}: link {:?} differs from {:?} already recorded for {}",
                    reference,
                    part.link,
                    group.link,
                    group.part
                );
            }
            group.designators.push(reference.clone());
        }

        let groups: Vec<PartGroup> = groups
            .into_values()
            .map(|mut group| {
                natural_sort(&mut group.designators);
                group
            })
            .collect();

        Bom { groups }
    }

    pub fn rows(&self) -> Vec<BomRow> {
        self.groups.iter().map(PartGroup::to_row).collect()
    }

    /// Sum of quantities over all rows
    pub fn total_quantity(&self) -> usize {
        self.groups.iter().map(PartGroup::quantity).sum()
    }
}

/// Writes a [`Bom`] as delimited text
#[derive(Debug, Clone)]
pub struct BomWriter {
    delimiter: u8,
}

impl Default for BomWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl BomWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Create or truncate `path` and write the BOM to it.
    pub fn write_file(&self, bom: &Bom, path: &Path) -> Result<(), BomWriteError> {
        let file = File::create(path)?;
        self.write_to(bom, file)?;
        tracing::info!(
            "Wrote {} parts ({} placements) to {}",
            bom.groups.len(),
            bom.total_quantity(),
            path.display()
        );
        Ok(())
    }

    /// Write the header and one record per part group. The header is written
    /// even when the BOM is empty.
    pub fn write_to<W: io::Write>(&self, bom: &Bom, writer: W) -> Result<(), BomWriteError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for group in &bom.groups {
            wtr.serialize(group.to_row())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the BOM to a string
    pub fn render(&self, bom: &Bom) -> Result<String, BomWriteError> {
        let mut buf = Vec::new();
        self.write_to(bom, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| BomWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
