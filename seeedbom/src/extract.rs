//! Part resolution
//!
//! Each component is resolved to a part identity from its user fields, first
//! match wins:
//!
//! 1. `SEED_SKU` - a Seeed Open Parts Library SKU. The link is the OPL sentinel.
//! 2. `MPN` - a manufacturer part number, linked to `DK_DETAIL_PAGE` if set.
//!
//! Field names are case-insensitive and empty values count as absent. When a
//! field name repeats, the last one wins. Components that resolve through
//! neither field are reported as unresolved and left out of the BOM.

use indexmap::{IndexMap, IndexSet};

use crate::parser::schema::{Component, Netlist, RefDes};

/// Link written for parts taken from the Seeed Open Parts Library
pub const OPL_LINK: &str = "seeed OPL";

/// The user fields that take part in resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    SeedSku,
    Mpn,
    DkDetailPage,
}

impl FieldTag {
    /// Case-insensitive lookup of a field name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "SEED_SKU" => Some(FieldTag::SeedSku),
            "MPN" => Some(FieldTag::Mpn),
            "DK_DETAIL_PAGE" => Some(FieldTag::DkDetailPage),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldTag::SeedSku => "SEED_SKU",
            FieldTag::Mpn => "MPN",
            FieldTag::DkDetailPage => "DK_DETAIL_PAGE",
        }
    }
}

/// Part identity and order link resolved for one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPart {
    pub part: String,
    pub link: Option<String>,
}

/// Resolved components keyed by designator, iterated in document order.
/// Re-inserting a designator keeps its first position.
pub type ResolvedParts = IndexMap<RefDes, ResolvedPart>;

/// Result of running the extractor over a netlist
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub resolved: ResolvedParts,
    /// Designators with no usable part, in the order they were found
    pub unresolved: IndexSet<RefDes>,
}

impl Extraction {
    /// Number of distinct designators seen
    pub fn total(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }
}

/// Resolves components to parts
#[derive(Debug, Clone)]
pub struct Extractor {
    opl_link: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(OPL_LINK)
    }
}

impl Extractor {
    pub fn new(opl_link: impl Into<String>) -> Self {
        Self {
            opl_link: opl_link.into(),
        }
    }

    /// Resolve every component of the netlist, in document order.
    pub fn extract(&self, netlist: &Netlist) -> Extraction {
        let mut extraction = Extraction::default();

        for component in &netlist.components {
            let reference = &component.reference;
            match self.resolve(component) {
                Some(part) => {
                    extraction.unresolved.shift_remove(reference);
                    if extraction.resolved.insert(reference.clone(), part).is_some() {
                        tracing::warn!("Duplicate designator {}, keeping the last one", reference);
                    }
                }
                None => {
                    if extraction.resolved.shift_remove(reference).is_some() {
                        tracing::warn!("Duplicate designator {}, keeping the last one", reference);
                    }
                    extraction.unresolved.insert(reference.clone());
                }
            }
        }

        tracing::debug!(
            "Resolved {} components, {} unresolved",
            extraction.resolved.len(),
            extraction.unresolved.len()
        );
        extraction
    }

    /// Resolve a single component, `None` when neither SKU nor MPN is usable.
    pub fn resolve(&self, component: &Component) -> Option<ResolvedPart> {
        let mut seed_sku = None;
        let mut mpn = None;
        let mut link = None;

        for field in &component.fields {
            let value = field.value.as_deref();
            match FieldTag::from_name(&field.name) {
                Some(FieldTag::SeedSku) => seed_sku = value,
                Some(FieldTag::Mpn) => mpn = value,
                Some(FieldTag::DkDetailPage) => link = value,
                None => {}
            }
        }

        if let Some(sku) = non_empty(seed_sku) {
            tracing::debug!("{}: OPL part {}", component.reference, sku);
            return Some(ResolvedPart {
                part: sku.to_string(),
                link: Some(self.opl_link.clone()),
            });
        }

        if let Some(mpn) = non_empty(mpn) {
            tracing::debug!("{}: MPN {}", component.reference, mpn);
            return Some(ResolvedPart {
                part: mpn.to_string(),
                link: non_empty(link).map(str::to_string),
            });
        }

        tracing::debug!(
            "{}: no {} or {}",
            component.reference,
            FieldTag::SeedSku.name(),
            FieldTag::Mpn.name()
        );
        None
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
