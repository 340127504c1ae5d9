//! Read-only catalog of construction-set identifiers.
//!
//! The built-in library mirrors a standards catalog: one generic set plus
//! one set per vintage, climate zone, and construction type. Searching never
//! mutates the catalog; it always yields a fresh, sorted list.

use anyhow::{ensure, Result};
use std::collections::HashSet;

use crate::search::filter_identifiers;

/// The construction set applied when nothing more specific is assigned.
pub const GENERIC_CONSTRUCTION_SET: &str = "Default Generic Construction Set";

const VINTAGES: [&str; 8] = [
    "2019", "2016", "2013", "2010", "2007", "2004", "1980_2004", "pre_1980",
];
const CONSTRUCTION_TYPES: [&str; 4] = ["SteelFramed", "WoodFramed", "Mass", "Metal Building"];

/// An ordered collection of unique construction-set identifiers.
#[derive(Debug, Clone)]
pub struct ConstructionSetCatalog {
    identifiers: Vec<String>,
}

impl ConstructionSetCatalog {
    /// Creates a catalog from an explicit identifier list.
    ///
    /// Order is preserved. Duplicate identifiers are rejected.
    pub fn new(identifiers: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for identifier in &identifiers {
            ensure!(
                seen.insert(identifier.as_str()),
                "duplicate construction set identifier: {identifier}"
            );
        }
        Ok(Self { identifiers })
    }

    /// The built-in standards library.
    ///
    /// Contains the generic set followed by `vintage::ClimateZoneN::type`
    /// entries for every vintage, climate zone 1-8, and construction type.
    pub fn builtin() -> Self {
        let mut identifiers = vec![GENERIC_CONSTRUCTION_SET.to_string()];
        for vintage in VINTAGES {
            for zone in 1..=8 {
                for construction_type in CONSTRUCTION_TYPES {
                    identifiers.push(format!(
                        "{vintage}::ClimateZone{zone}::{construction_type}"
                    ));
                }
            }
        }
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|id| id == identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Keyword search over the catalog.
    ///
    /// Delegates to [`filter_identifiers`]; empty keywords return the whole
    /// catalog sorted.
    pub fn search(&self, keywords: &[String], split_words: bool) -> Vec<String> {
        filter_identifiers(&self.identifiers, keywords, split_words)
    }
}

impl Default for ConstructionSetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
