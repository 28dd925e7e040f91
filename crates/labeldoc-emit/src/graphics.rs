//! Graphic references and the ordered emission batteries.

use labeldoc_model::{LabelRecord, TriState};

use crate::layout::{WIDE_WIDTH, spaces};

/// Graphic printed for an explicit negative.
pub const BLANK_GRAPHIC: &str = "blank-01.tif";

/// Directory + file name, right-padded to the 255-character wide field.
pub fn graphic_field(graphics_dir: &str, graphic: &str) -> String {
    let used = graphics_dir.len() + graphic.len();
    let padding = WIDE_WIDTH.saturating_sub(used);
    format!("{graphics_dir}{graphic}{}", spaces(padding))
}

/// Cell value printed for an affirmative flag state.
pub fn variant_value(state: TriState) -> &'static str {
    match state {
        TriState::YesF => "F_Y",
        TriState::YesIso => "ISO_Y",
        _ => "Y",
    }
}

/// Graphic file for an affirmative flag state; the yes-variants select the
/// prefixed assets.
pub fn variant_graphic(state: TriState, base: &str) -> String {
    match state {
        TriState::YesF => format!("F_{base}"),
        TriState::YesIso => format!("ISO_{base}"),
        _ => base.to_string(),
    }
}

/// One numbered graphic slot: flag accessor plus the graphic it selects.
pub struct GraphicSlot {
    pub flag: fn(&LabelRecord) -> TriState,
    pub graphic: &'static str,
}

/// The fourteen numbered slots, in declaration order. An affirmative flag
/// consumes the next slot number; skipped flags do not.
pub static GRAPHIC_SLOTS: &[GraphicSlot] = &[
    GraphicSlot { flag: |r| r.caution, graphic: "Caution.tif" },
    GraphicSlot { flag: |r| r.consultifu, graphic: "ConsultIFU.tif" },
    GraphicSlot { flag: |r| r.latex, graphic: "Latex.tif" },
    GraphicSlot { flag: |r| r.donotusedamaged, graphic: "DoNotUsePakDam.tif" },
    GraphicSlot { flag: |r| r.latexfree, graphic: "Latex Free.tif" },
    GraphicSlot { flag: |r| r.maninbox, graphic: "ManInBox.tif" },
    GraphicSlot { flag: |r| r.noresterilize, graphic: "DoNotRe-sterilize.tif" },
    GraphicSlot { flag: |r| r.nonsterile, graphic: "Non-sterile.tif" },
    GraphicSlot { flag: |r| r.pvcfree, graphic: "PVC_Free.tif" },
    GraphicSlot { flag: |r| r.reusable, graphic: "Reusable.tif" },
    GraphicSlot { flag: |r| r.singleuseonly, graphic: "SINGLEUSE.tif" },
    GraphicSlot { flag: |r| r.singlepatientuse, graphic: "SinglePatienUse.tif" },
    GraphicSlot { flag: |r| r.electroifu, graphic: "ElectroSurIFU.tif" },
    GraphicSlot { flag: |r| r.keepdry, graphic: "KeepDry.tif" },
];

/// One plain boolean field: emits Y/N with a fixed graphic whenever set.
pub struct BooleanField {
    pub name: &'static str,
    pub flag: fn(&LabelRecord) -> TriState,
    pub graphic: &'static str,
}

pub static BOOLEAN_FIELDS: &[BooleanField] = &[
    BooleanField { name: "ECREP", flag: |r| r.ecrep, graphic: "EC Rep.tif" },
    BooleanField { name: "EXPDATE", flag: |r| r.expdate, graphic: "Expiration Date.tif" },
    BooleanField { name: "KEEPAWAYHEAT", flag: |r| r.keepawayheat, graphic: "KeepAwayHeat.tif" },
    BooleanField { name: "LOTGRAPHIC", flag: |r| r.lotgraphic, graphic: "Lot.tif" },
    BooleanField { name: "MANUFACTURER", flag: |r| r.manufacturer, graphic: "Manufacturer.tif" },
    BooleanField { name: "MFGDATE", flag: |r| r.mfgdate, graphic: "DateofManufacture.tif" },
    BooleanField { name: "PHTDEHP", flag: |r| r.phtdehp, graphic: "PHT-DEHP.tif" },
    BooleanField { name: "PHTBBP", flag: |r| r.phtbbp, graphic: "PHT-BBP.tif" },
    BooleanField { name: "PHTDINP", flag: |r| r.phtdinp, graphic: "PHT-DINP.tif" },
    BooleanField { name: "REFNUMBER", flag: |r| r.refnumber, graphic: "REF.tif" },
    BooleanField { name: "REF", flag: |r| r.ref_mark, graphic: "REF.tif" },
    BooleanField { name: "RXONLY", flag: |r| r.rxonly, graphic: "RX Only.tif" },
    BooleanField { name: "SERIAL", flag: |r| r.serial, graphic: "Serial Number.tif" },
    BooleanField { name: "TFXLOGO", flag: |r| r.tfxlogo, graphic: "TeleflexMedical.tif" },
];

/// One free-text graphic column: the value itself picks the graphic, with
/// a fixed graphic for an explicit yes and a lookup-or-`.tif` fallback
/// otherwise.
pub struct GraphicColumn {
    pub name: &'static str,
    pub value: fn(&LabelRecord) -> &str,
    pub yes_graphic: &'static str,
}

pub static GRAPHIC_COLUMNS: &[GraphicColumn] = &[
    GraphicColumn { name: "ADDRESS", value: |r| &r.address, yes_graphic: "Nothing" },
    GraphicColumn { name: "CAUTIONSTATE", value: |r| &r.cautionstatement, yes_graphic: "Nothing" },
    GraphicColumn { name: "CE0120", value: |r| &r.cemark, yes_graphic: "Nothing" },
    GraphicColumn { name: "COOSTATE", value: |r| &r.coostate, yes_graphic: "Nothing" },
    GraphicColumn { name: "DISTRIBUTEDBY", value: |r| &r.distby, yes_graphic: "Nothing" },
    GraphicColumn { name: "ECREPADDRESS", value: |r| &r.ecrepaddress, yes_graphic: "Nothing" },
    GraphicColumn { name: "FLGRAPHIC", value: |r| &r.flgraphic, yes_graphic: "Nothing" },
    GraphicColumn { name: "LABELGRAPH1", value: |r| &r.labelgraph1, yes_graphic: "Nothing" },
    GraphicColumn { name: "LABELGRAPH2", value: |r| &r.labelgraph2, yes_graphic: "Nothing" },
    GraphicColumn { name: "LATEXSTATEMENT", value: |r| &r.latexstatement, yes_graphic: "Nothing" },
    GraphicColumn { name: "LOGO1", value: |r| &r.logo1, yes_graphic: "Nothing" },
    GraphicColumn { name: "LOGO2", value: |r| &r.logo2, yes_graphic: "Nothing" },
    GraphicColumn { name: "LOGO3", value: |r| &r.logo3, yes_graphic: "Nothing" },
    GraphicColumn { name: "LOGO4", value: |r| &r.logo4, yes_graphic: "Nothing" },
    GraphicColumn { name: "LOGO5", value: |r| &r.logo5, yes_graphic: "Nothing" },
    GraphicColumn { name: "MDR1", value: |r| &r.mdr1, yes_graphic: "Nothing" },
    GraphicColumn { name: "MDR2", value: |r| &r.mdr2, yes_graphic: "Nothing" },
    GraphicColumn { name: "MDR3", value: |r| &r.mdr3, yes_graphic: "Nothing" },
    GraphicColumn { name: "MDR4", value: |r| &r.mdr4, yes_graphic: "Nothing" },
    GraphicColumn { name: "MDR5", value: |r| &r.mdr5, yes_graphic: "Nothing" },
    GraphicColumn { name: "MANUFACTUREDBY", value: |r| &r.manufacturedby, yes_graphic: "Nothing" },
    GraphicColumn { name: "PATENTSTA", value: |r| &r.patentstatement, yes_graphic: "Nothing" },
    GraphicColumn { name: "STERILESTA", value: |r| &r.sterilitystatement, yes_graphic: "Nothing" },
    GraphicColumn { name: "STERILITYTYPE", value: |r| &r.sterilitytype, yes_graphic: "blank-01.txt" },
    GraphicColumn { name: "TEMPRANGE", value: |r| &r.temprange, yes_graphic: "Nothing" },
    GraphicColumn { name: "VERSION", value: |r| &r.version, yes_graphic: "Nothing" },
    GraphicColumn { name: "INSERTGRAPHIC", value: |r| &r.insertgraphic, yes_graphic: "yes" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphic_field_is_always_wide_width() {
        let field = graphic_field("T:\\GRAPHICS\\", "Caution.tif");
        assert_eq!(field.len(), WIDE_WIDTH);
        assert!(field.starts_with("T:\\GRAPHICS\\Caution.tif"));
        assert!(field.ends_with(' '));
    }

    #[test]
    fn empty_graphic_name_still_fills_the_field() {
        let field = graphic_field("T:\\GRAPHICS\\", "");
        assert_eq!(field.len(), WIDE_WIDTH);
    }

    #[test]
    fn variant_selection() {
        assert_eq!(variant_value(TriState::Yes), "Y");
        assert_eq!(variant_value(TriState::YesF), "F_Y");
        assert_eq!(variant_value(TriState::YesIso), "ISO_Y");
        assert_eq!(variant_graphic(TriState::Yes, "Caution.tif"), "Caution.tif");
        assert_eq!(variant_graphic(TriState::YesF, "Caution.tif"), "F_Caution.tif");
        assert_eq!(variant_graphic(TriState::YesIso, "Caution.tif"), "ISO_Caution.tif");
    }

    #[test]
    fn battery_sizes_are_fixed() {
        assert_eq!(GRAPHIC_SLOTS.len(), 14);
        assert_eq!(BOOLEAN_FIELDS.len(), 14);
        assert_eq!(GRAPHIC_COLUMNS.len(), 27);
    }
}
