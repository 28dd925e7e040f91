//! Declarative column registry.
//!
//! One entry per recognized column heading. Aliases and gating live here as
//! data; the dispatcher never branches on column names itself.

use labeldoc_model::{LabelRecord, TriState};

/// Setter for a scalar text attribute.
pub type TextSetter = fn(&mut LabelRecord, String);

/// Setter for a tri-state flag attribute.
pub type FlagSetter = fn(&mut LabelRecord, TriState);

/// What a resolved column writes into.
#[derive(Clone, Copy)]
pub enum ColumnTarget {
    /// Scalar text; an explicit textual no normalizes to absent.
    Text(TextSetter),
    /// Tri-state flag; the cell goes through the tri-state interpreter.
    Flag(FlagSetter),
}

/// One recognized column heading.
pub struct ColumnSpec {
    /// Primary heading, matched case-sensitively.
    pub name: &'static str,
    /// Alternate headings writing the same attribute.
    pub aliases: &'static [&'static str],
    pub target: ColumnTarget,
    /// Populated only when the non-standard-fields option is enabled.
    pub gated: bool,
}

impl ColumnSpec {
    /// True when `header` names this column directly or via an alias.
    pub fn matches(&self, header: &str) -> bool {
        self.name == header || self.aliases.contains(&header)
    }

    /// Display kind for the column listing.
    pub fn kind(&self) -> &'static str {
        match self.target {
            ColumnTarget::Text(_) => "text",
            ColumnTarget::Flag(_) => "flag",
        }
    }
}

const fn text(name: &'static str, setter: TextSetter) -> ColumnSpec {
    ColumnSpec {
        name,
        aliases: &[],
        target: ColumnTarget::Text(setter),
        gated: false,
    }
}

const fn flag(name: &'static str, setter: FlagSetter) -> ColumnSpec {
    ColumnSpec {
        name,
        aliases: &[],
        target: ColumnTarget::Flag(setter),
        gated: false,
    }
}

const fn gated(name: &'static str, setter: TextSetter) -> ColumnSpec {
    ColumnSpec {
        name,
        aliases: &[],
        target: ColumnTarget::Text(setter),
        gated: true,
    }
}

static COLUMNS: &[ColumnSpec] = &[
    text("LABEL", |r, v| r.label = v),
    ColumnSpec {
        name: "MATERIAL",
        aliases: &["PCODE"],
        target: ColumnTarget::Text(|r, v| r.material = v),
        gated: false,
    },
    text("TDLINE", |r, v| r.tdline = v),
    text("ADDRESS", |r, v| r.address = v),
    text("BARCODETEXT", |r, v| r.barcodetext = v),
    text("BARCODE1", |r, v| r.barcode1 = v),
    text("GS1", |r, v| r.gs1 = v),
    gated("GTIN", |r, v| r.gtin = v),
    text("BOMLEVEL", |r, v| r.bomlevel = v),
    flag("CAUTION", |r, v| r.caution = v),
    text("CAUTIONSTATE", |r, v| r.cautionstatement = v),
    ColumnSpec {
        name: "CE0120",
        aliases: &["CEMARK", "CE"],
        target: ColumnTarget::Text(|r, v| r.cemark = v),
        gated: false,
    },
    flag("CONSULTIFU", |r, v| r.consultifu = v),
    flag("CONTAINSLATEX", |r, v| r.latex = v),
    text("COOSTATE", |r, v| r.coostate = v),
    gated("DESCRIPTION", |r, v| r.description = v),
    text("DISTRIBUTEDBY", |r, v| r.distby = v),
    ColumnSpec {
        name: "DONOTUSEDAM",
        aliases: &["DONOTPAKDAM"],
        target: ColumnTarget::Flag(|r, v| r.donotusedamaged = v),
        gated: false,
    },
    flag("ECREP", |r, v| r.ecrep = v),
    text("ECREPADDRESS", |r, v| r.ecrepaddress = v),
    flag("ELECTROSURIFU", |r, v| r.electroifu = v),
    flag("EXPDATE", |r, v| r.expdate = v),
    text("FLGRAPHIC", |r, v| r.flgraphic = v),
    flag("KEEPAWAYHEAT", |r, v| r.keepawayheat = v),
    text("INSERTGRAPHIC", |r, v| r.insertgraphic = v),
    flag("KEEPDRY", |r, v| r.keepdry = v),
    text("LABELGRAPH1", |r, v| r.labelgraph1 = v),
    text("LABELGRAPH2", |r, v| r.labelgraph2 = v),
    flag("LATEXFREE", |r, v| r.latexfree = v),
    text("LATEXSTATEMENT", |r, v| r.latexstatement = v),
    text("LEVEL", |r, v| r.level = v),
    text("LOGO1", |r, v| r.logo1 = v),
    text("LOGO2", |r, v| r.logo2 = v),
    text("LOGO3", |r, v| r.logo3 = v),
    text("LOGO4", |r, v| r.logo4 = v),
    text("LOGO5", |r, v| r.logo5 = v),
    text("MDR1", |r, v| r.mdr1 = v),
    text("MDR2", |r, v| r.mdr2 = v),
    text("MDR3", |r, v| r.mdr3 = v),
    text("MDR4", |r, v| r.mdr4 = v),
    text("MDR5", |r, v| r.mdr5 = v),
    flag("LOTGRAPHIC", |r, v| r.lotgraphic = v),
    text("LTNUMBER", |r, v| r.ltnumber = v),
    gated("IPN", |r, v| r.ipn = v),
    flag("MANINBOX", |r, v| r.maninbox = v),
    text("MANUFACTUREDBY", |r, v| r.manufacturedby = v),
    flag("MANUFACTURER", |r, v| r.manufacturer = v),
    flag("MFGDATE", |r, v| r.mfgdate = v),
    flag("NORESTERILE", |r, v| r.noresterilize = v),
    flag("NONSTERILE", |r, v| r.nonsterile = v),
    gated("OLDLABEL", |r, v| r.oldlabel = v),
    gated("OLDTEMPLATE", |r, v| r.oldtemplate = v),
    gated("PREVLABEL", |r, v| r.prevlabel = v),
    gated("PREVTEMPLATE", |r, v| r.prevtemplate = v),
    text("PATENTSTA", |r, v| r.patentstatement = v),
    flag("PHTDEHP", |r, v| r.phtdehp = v),
    flag("PHTBBP", |r, v| r.phtbbp = v),
    flag("PHTDINP", |r, v| r.phtdinp = v),
    flag("PVCFREE", |r, v| r.pvcfree = v),
    text("QUANTITY", |r, v| r.quantity = v),
    flag("REF", |r, v| r.ref_mark = v),
    flag("REFNUMBER", |r, v| r.refnumber = v),
    flag("REUSABLE", |r, v| r.reusable = v),
    text("REVISION", |r, v| r.revision = v),
    text("LABEL_RELEASE_DATE", |r, v| r.release = v),
    flag("RXONLY", |r, v| r.rxonly = v),
    flag("SINGLEUSE", |r, v| r.singleuseonly = v),
    flag("SERIAL", |r, v| r.serial = v),
    flag("SINGLEPATIENTUSE", |r, v| r.singlepatientuse = v),
    text("SIZE", |r, v| r.size = v),
    flag("SIZELOGO", |r, v| r.sizelogo = v),
    text("STERILITYTYPE", |r, v| r.sterilitytype = v),
    text("STERILESTA", |r, v| r.sterilitystatement = v),
    text("TEMPRANGE", |r, v| r.temprange = v),
    ColumnSpec {
        name: "TEMPLATENUMBER",
        aliases: &["TEMPLATE"],
        target: ColumnTarget::Text(|r, v| r.template = v),
        gated: false,
    },
    flag("TFXLOGO", |r, v| r.tfxlogo = v),
    text("VERSION", |r, v| r.version = v),
];

/// Every recognized column, in registry order.
pub fn column_specs() -> &'static [ColumnSpec] {
    COLUMNS
}

/// Resolve a header (case-sensitively) against the registry.
pub fn find_spec(header: &str) -> Option<&'static ColumnSpec> {
    COLUMNS.iter().find(|spec| spec.matches(header))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_primary_names_and_aliases() {
        assert!(find_spec("LABEL").is_some());
        assert_eq!(find_spec("PCODE").map(|s| s.name), Some("MATERIAL"));
        assert_eq!(find_spec("CE").map(|s| s.name), Some("CE0120"));
        assert_eq!(find_spec("TEMPLATE").map(|s| s.name), Some("TEMPLATENUMBER"));
        assert!(find_spec("NOPE").is_none());
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(find_spec("label").is_none());
        assert!(find_spec("Material").is_none());
    }

    #[test]
    fn gated_columns_are_marked() {
        for name in ["GTIN", "IPN", "DESCRIPTION", "OLDLABEL", "OLDTEMPLATE", "PREVLABEL", "PREVTEMPLATE"] {
            let spec = find_spec(name).expect(name);
            assert!(spec.gated, "{name} should be gated");
        }
        assert!(!find_spec("LABEL").expect("LABEL").gated);
    }

    #[test]
    fn registry_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in column_specs() {
            assert!(seen.insert(spec.name), "duplicate registry name {}", spec.name);
            for alias in spec.aliases {
                assert!(seen.insert(alias), "duplicate registry alias {alias}");
            }
        }
    }
}
