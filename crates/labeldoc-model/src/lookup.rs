//! Characteristic-value lookup table.
//!
//! Maps a spreadsheet characteristic value to its canonical resolved value.
//! The table is consulted during serialization for SIZE, LEVEL, and the
//! free-text graphic columns. Its ordering invariant (strictly increasing
//! case-insensitively, no duplicate terms) is checked once at startup; a
//! violation is fatal before any conversion happens.

use std::cmp::Ordering;

use crate::error::{ModelError, Result};

/// Built-in table entries. Replaceable at run time from a tab-delimited
/// file; either source goes through [`LookupTable::new`] and its order check.
const BUILTIN: &[(&str, &str)] = &[
    ("BAG", "Bag"),
    ("BOX", "Box"),
    ("BULK", "Bulk"),
    ("CARTON", "Carton"),
    ("CASE", "Case"),
    ("CE", "CEMark"),
    ("CE0120", "CE0120Mark"),
    ("DISPENSER", "Dispenser"),
    ("EACH", "Each"),
    ("GS1-128", "GS1-128"),
    ("INNER PACK", "InnerPack"),
    ("KIT", "Kit"),
    ("LATEX", "Latex"),
    ("LATEX FREE", "Latex Free"),
    ("MASTER CARTON", "MasterCarton"),
    ("PALLET", "Pallet"),
    ("POUCH", "Pouch"),
    ("RX ONLY", "RX Only"),
    ("SHELF PACK", "ShelfPack"),
    ("SHIPPER", "Shipper"),
    ("STERILE EO", "SterileEO"),
    ("STERILE R", "SterileR"),
    ("TRAY", "Tray"),
    ("UNIT", "Unit"),
];

/// Immutable ordered set of (term, resolved value) pairs.
#[derive(Debug, Clone)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
}

impl LookupTable {
    /// Build a table after verifying the ordering invariant.
    pub fn new(entries: Vec<(String, String)>) -> Result<Self> {
        for (index, pair) in entries.windows(2).enumerate() {
            if caseless_cmp(&pair[0].0, &pair[1].0) != Ordering::Less {
                return Err(ModelError::LookupOrder {
                    index,
                    left: pair[0].0.clone(),
                    right: pair[1].0.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The entries compiled into the binary.
    pub fn builtin_entries() -> Vec<(String, String)> {
        BUILTIN
            .iter()
            .map(|(term, value)| (term.to_string(), value.to_string()))
            .collect()
    }

    /// Binary search by case-insensitive term comparison.
    pub fn resolve(&self, term: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(candidate, _)| caseless_cmp(candidate, term))
            .ok()
            .map(|index| self.entries[index].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Byte-wise ASCII-case-insensitive ordering.
fn caseless_cmp(left: &str, right: &str) -> Ordering {
    left.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(right.bytes().map(|b| b.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(t, v)| (t.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builtin_table_is_ordered() {
        let table = LookupTable::new(LookupTable::builtin_entries()).expect("builtin ordered");
        assert!(!table.is_empty());
    }

    #[test]
    fn rejects_out_of_order_entries() {
        let result = LookupTable::new(owned(&[("BOX", "Box"), ("BAG", "Bag")]));
        assert!(matches!(result, Err(ModelError::LookupOrder { index: 0, .. })));
    }

    #[test]
    fn rejects_duplicate_terms_case_insensitively() {
        let result = LookupTable::new(owned(&[("BAG", "Bag"), ("bag", "Other")]));
        assert!(result.is_err());
    }

    #[test]
    fn resolves_case_insensitively() {
        let table = LookupTable::new(LookupTable::builtin_entries()).expect("builtin ordered");
        assert_eq!(table.resolve("shelf pack"), Some("ShelfPack"));
        assert_eq!(table.resolve("SHELF PACK"), Some("ShelfPack"));
        assert_eq!(table.resolve("nonesuch"), None);
    }

    #[test]
    fn resolves_first_and_last_entries() {
        let table = LookupTable::new(LookupTable::builtin_entries()).expect("builtin ordered");
        assert_eq!(table.resolve("BAG"), Some("Bag"));
        assert_eq!(table.resolve("unit"), Some("Unit"));
    }
}
