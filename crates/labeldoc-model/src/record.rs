//! The per-row label record.

use crate::flags::TriState;

/// One label's complete attribute set, populated column-by-column from the
/// spreadsheet. Empty strings mean "absent"; flags default to
/// [`TriState::Unset`].
#[derive(Debug, Clone, Default)]
pub struct LabelRecord {
    /// Short label identifier. Required; must start with `LBL`.
    pub label: String,
    /// Material number. Consecutive records sharing a material emit only one
    /// material block.
    pub material: String,

    pub template: String,
    pub revision: String,
    pub release: String,
    pub size: String,
    pub level: String,
    pub quantity: String,
    pub barcodetext: String,
    pub gtin: String,
    pub ltnumber: String,
    pub ipn: String,
    pub bomlevel: String,

    /// Free-text block; may carry `##` continuation markers and
    /// doubled-double-quote escapes.
    pub tdline: String,

    pub address: String,
    pub barcode1: String,
    pub cautionstatement: String,
    pub cemark: String,
    pub coostate: String,
    pub distby: String,
    pub ecrepaddress: String,
    pub flgraphic: String,
    pub gs1: String,
    pub insertgraphic: String,
    pub labelgraph1: String,
    pub labelgraph2: String,
    pub latexstatement: String,
    pub logo1: String,
    pub logo2: String,
    pub logo3: String,
    pub logo4: String,
    pub logo5: String,
    pub manufacturedby: String,
    pub mdr1: String,
    pub mdr2: String,
    pub mdr3: String,
    pub mdr4: String,
    pub mdr5: String,
    pub patentstatement: String,
    pub sterilitystatement: String,
    pub sterilitytype: String,
    pub temprange: String,
    pub version: String,

    pub description: String,
    pub oldlabel: String,
    pub oldtemplate: String,
    pub prevlabel: String,
    pub prevtemplate: String,

    pub caution: TriState,
    pub consultifu: TriState,
    pub donotusedamaged: TriState,
    pub ecrep: TriState,
    pub electroifu: TriState,
    pub expdate: TriState,
    pub keepawayheat: TriState,
    pub keepdry: TriState,
    pub latex: TriState,
    pub latexfree: TriState,
    pub lotgraphic: TriState,
    pub maninbox: TriState,
    pub manufacturer: TriState,
    pub mfgdate: TriState,
    pub nonsterile: TriState,
    pub noresterilize: TriState,
    pub phtbbp: TriState,
    pub phtdehp: TriState,
    pub phtdinp: TriState,
    pub pvcfree: TriState,
    pub ref_mark: TriState,
    pub refnumber: TriState,
    pub reusable: TriState,
    pub rxonly: TriState,
    pub serial: TriState,
    pub singlepatientuse: TriState,
    pub singleuseonly: TriState,
    pub sizelogo: TriState,
    pub tfxlogo: TriState,
}

/// Order records by label identifier; this defines serialization order.
/// Stable, so equal labels keep their spreadsheet order.
pub fn sort_by_label(records: &mut [LabelRecord]) {
    records.sort_by(|a, b| a.label.cmp(&b.label));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_label(label: &str) -> LabelRecord {
        LabelRecord {
            label: label.to_string(),
            ..LabelRecord::default()
        }
    }

    #[test]
    fn sorts_lexically_by_label() {
        let mut records = vec![with_label("LBL300"), with_label("LBL001"), with_label("LBL120")];
        sort_by_label(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(order, ["LBL001", "LBL120", "LBL300"]);
    }

    #[test]
    fn sort_is_stable_for_equal_labels() {
        let mut first = with_label("LBL001");
        first.material = "MAT-A".to_string();
        let mut second = with_label("LBL001");
        second.material = "MAT-B".to_string();
        let mut records = vec![first, second];
        sort_by_label(&mut records);
        assert_eq!(records[0].material, "MAT-A");
        assert_eq!(records[1].material, "MAT-B");
    }
}
