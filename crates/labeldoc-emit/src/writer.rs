//! IDoc document writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use tracing::warn;

use labeldoc_model::{
    ConvertOptions, Issue, LabelRecord, LookupTable, cell_is_no, cell_is_yes,
};
use labeldoc_validate::{release_date_is_valid, revision_is_valid, validate_gtin};

use crate::error::{EmitError, Result};
use crate::graphics::{
    BLANK_GRAPHIC, BOOLEAN_FIELDS, GRAPHIC_COLUMNS, GRAPHIC_SLOTS, graphic_field,
    variant_graphic, variant_value,
};
use crate::layout::{
    CHARACTERISTIC_KIND, CHARACTERISTIC_TAG, CONTROL_TAG, IDENTIFIER_WIDTH, LABEL_KIND,
    LABEL_TAG, MATERIAL_KIND, MATERIAL_TAG, NAME_WIDTH, ROUTING_CODE, TAG_GAP, TEXT_HEADER,
    TEXT_INDENT, TEXT_KIND, TEXT_MARKER_PAD, TEXT_SEGMENT_WIDTH, TEXT_TAG, VALUE_WIDTH,
    WIDE_WIDTH, pad_right, seq6, spaces,
};
use crate::state::ControlState;

/// Line counters and collected diagnostics for one emitted document.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub records: usize,
    pub material_lines: usize,
    pub label_lines: usize,
    pub text_lines: usize,
    pub characteristic_lines: usize,
    pub issues: Vec<Issue>,
}

impl EmitReport {
    /// All emitted lines including the control record.
    pub fn total_lines(&self) -> usize {
        1 + self.material_lines + self.label_lines + self.text_lines + self.characteristic_lines
    }
}

/// Writes one IDoc document. Records must already be in label-sorted order.
pub struct IdocWriter<W: Write> {
    writer: BufWriter<W>,
    state: ControlState,
    lookup: LookupTable,
    options: ConvertOptions,
    timestamp: Option<NaiveDateTime>,
    report: EmitReport,
}

impl<W: Write> IdocWriter<W> {
    pub fn new(writer: W, lookup: LookupTable, options: ConvertOptions) -> Self {
        let state = ControlState::new(&options.control_number);
        Self {
            writer: BufWriter::new(writer),
            state,
            lookup,
            options,
            timestamp: None,
            report: EmitReport::default(),
        }
    }

    /// Pin the control-record timestamp instead of using the wall clock.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Emit the whole document and return the line counters and diagnostics.
    pub fn write_document(mut self, records: &[LabelRecord]) -> Result<EmitReport> {
        self.control_record()?;
        for (position, record) in records.iter().enumerate() {
            self.write_record(position + 1, record)?;
        }
        self.writer.flush()?;
        Ok(self.report)
    }

    fn control_record(&mut self) -> Result<()> {
        let stamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local())
            .format("%Y%m%d%H%M%S");
        writeln!(
            self.writer,
            "{CONTROL_TAG}  {ROUTING_CODE}{ctrl}740 3012  Z1BTDOC{g53}ZSC_BTEND{g40}\
             SAPMEP    LS  MEPCLNT500{g91}I041      US  BARTENDER{g92}{stamp}{g112}\
             Material_EN{g9}",
            ctrl = self.state.control_number(),
            g53 = spaces(53),
            g40 = spaces(40),
            g91 = spaces(91),
            g92 = spaces(92),
            g112 = spaces(112),
            g9 = spaces(9),
        )?;
        Ok(())
    }

    fn write_record(&mut self, position: usize, record: &LabelRecord) -> Result<()> {
        if self.state.material_is_new(&record.material) {
            let (own, parent) = self.state.material_line(&record.material);
            let prefix = self.line_prefix(MATERIAL_TAG, own, parent);
            writeln!(
                self.writer,
                "{prefix}{MATERIAL_KIND}{}",
                pad_right(&record.material, IDENTIFIER_WIDTH)
            )?;
            self.report.material_lines += 1;
        }

        if !record.label.starts_with("LBL") {
            return Err(EmitError::LabelPrefix {
                record: position,
                label: record.label.clone(),
            });
        }
        let (own, parent) = self.state.label_line();
        let prefix = self.line_prefix(LABEL_TAG, own, parent);
        writeln!(
            self.writer,
            "{prefix}{LABEL_KIND}{}",
            pad_right(&record.label, IDENTIFIER_WIDTH)
        )?;
        self.report.label_lines += 1;

        self.write_text_lines(record)?;
        self.write_characteristics(position, record)?;
        self.report.records += 1;
        Ok(())
    }

    /// Free-text continuation lines, one per `##`-delimited segment.
    fn write_text_lines(&mut self, record: &LabelRecord) -> Result<()> {
        let tdline = record.tdline.as_str();
        if tdline.is_empty() || tdline.eq_ignore_ascii_case("n/a") || cell_is_no(tdline) {
            return Ok(());
        }
        let text = collapse_double_quotes(strip_outer_quotes(tdline));
        let mut rest = text.as_str();
        let mut first = true;
        while !rest.is_empty() {
            let (own, parent) = self.state.text_line();
            let prefix = self.line_prefix(TEXT_TAG, own, parent);
            let body = match rest.find("##") {
                Some(pos) => {
                    let segment = &rest[..pos];
                    let pad = TEXT_MARKER_PAD.saturating_sub(segment.len());
                    rest = &rest[pos + 2..];
                    format!("{segment}##{}", spaces(pad))
                }
                None => {
                    let segment = rest;
                    rest = "";
                    pad_right(segment, TEXT_SEGMENT_WIDTH)
                }
            };
            let suffix = if first { '*' } else { '/' };
            first = false;
            writeln!(
                self.writer,
                "{prefix}{TEXT_KIND}{TEXT_HEADER}{label}{indent}{body}{suffix}",
                label = record.label,
                indent = spaces(TEXT_INDENT),
            )?;
            self.report.text_lines += 1;
        }
        Ok(())
    }

    /// The fixed characteristic battery, in emission order.
    fn write_characteristics(&mut self, position: usize, record: &LabelRecord) -> Result<()> {
        if record.template.is_empty() {
            return Err(EmitError::MissingTemplate { record: position });
        }
        self.info_line("TEMPLATENUMBER", &record.template)?;

        if !record.revision.is_empty() {
            if revision_is_valid(&record.revision) {
                self.info_line("REVISION", &record.revision)?;
            } else {
                self.issue(
                    Issue::warning(
                        "REV001",
                        format!(
                            "invalid revision value \"{}\"; REVISION record skipped",
                            record.revision
                        ),
                    )
                    .with_record(position)
                    .with_column("REVISION"),
                );
            }
        }

        if !record.release.is_empty() {
            if release_date_is_valid(&record.release) {
                self.info_line("LABEL_RELEASE_DATE", &record.release)?;
            } else {
                self.issue(
                    Issue::warning(
                        "REL001",
                        format!(
                            "invalid release date value \"{}\"; LABEL_RELEASE_DATE record skipped",
                            record.release
                        ),
                    )
                    .with_record(position)
                    .with_column("LABEL_RELEASE_DATE"),
                );
            }
        }

        if !record.size.is_empty() {
            let size = collapse_double_quotes(strip_outer_quotes(&record.size));
            let resolved = self.lookup.resolve(&size).map(str::to_string);
            match resolved {
                Some(resolved) => self.info_lookup_line("SIZE", &size, &resolved)?,
                None => self.info_line("SIZE", &size)?,
            }
        }

        if !record.level.is_empty() {
            let resolved = self.lookup.resolve(&record.level).map(str::to_string);
            if resolved.is_none() {
                self.issue(
                    Issue::warning(
                        "LVL001",
                        format!(
                            "level value \"{}\" is not a standard LEVEL value",
                            record.level
                        ),
                    )
                    .with_record(position)
                    .with_column("LEVEL"),
                );
            }
            let wide = resolved.unwrap_or_else(|| record.level.clone());
            self.info_lookup_line("LEVEL", &record.level, &wide)?;
        }

        self.info_line("QUANTITY", &record.quantity)?;

        if !record.barcodetext.is_empty() {
            let issues = validate_gtin("BARCODETEXT", &record.barcodetext, position, true);
            self.report.issues.extend(issues);
            self.info_line("BARCODETEXT", &record.barcodetext)?;
        }

        if self.options.non_standard_fields && !record.gtin.is_empty() {
            let issues = validate_gtin("GTIN", &record.gtin, position, true);
            self.report.issues.extend(issues);
            self.info_line("GTIN", &record.gtin)?;
        }

        self.info_line("LTNUMBER", &record.ltnumber)?;

        if self.options.non_standard_fields {
            self.info_line("IPN", &record.ipn)?;
        }

        let mut slot = 1;
        for entry in GRAPHIC_SLOTS {
            let flag = (entry.flag)(record);
            if flag.is_affirmative() {
                let name = format!("GRAPHIC0{slot}");
                slot += 1;
                let graphic = variant_graphic(flag, entry.graphic);
                self.graphic_line(&name, variant_value(flag), &graphic)?;
            }
        }

        if !record.barcode1.is_empty() {
            let issues = validate_gtin("BARCODE1", &record.barcode1, position, false);
            self.report.issues.extend(issues);
            self.graphic_column_line("BARCODE1", &record.barcode1, "Nothing")?;
        }

        if !record.gs1.is_empty() {
            let issues = validate_gtin("GS1", &record.gs1, position, false);
            self.report.issues.extend(issues);
            if record.gs1.contains(' ') {
                // a GS1 value with spaces gets the column but no graphic name
                self.graphic_line("GS1", &record.gs1, "")?;
            } else {
                self.graphic_column_line("GS1", &record.gs1, "GS1")?;
            }
        }

        for field in BOOLEAN_FIELDS {
            let flag = (field.flag)(record);
            if !flag.is_set() {
                continue;
            }
            if flag.is_affirmative() {
                let graphic = variant_graphic(flag, field.graphic);
                self.graphic_line(field.name, variant_value(flag), &graphic)?;
            } else {
                self.graphic_line(field.name, "N", BLANK_GRAPHIC)?;
            }
        }

        if record.sizelogo.is_affirmative() {
            self.graphic_line("SIZELOGO", "Y", "Yes")?;
        } else {
            self.graphic_line("SIZELOGO", "N", "No")?;
        }

        for column in GRAPHIC_COLUMNS {
            let value = (column.value)(record);
            if value.is_empty() {
                continue;
            }
            self.graphic_column_line(column.name, value, column.yes_graphic)?;
        }

        if self.options.non_standard_fields {
            self.info_line("OLDLABEL", &record.oldlabel)?;
            self.info_line("OLDTEMPLATE", &record.oldtemplate)?;
            self.info_line("PREVLABEL", &record.prevlabel)?;
            self.info_line("PREVTEMPLATE", &record.prevtemplate)?;
            self.info_line("BOMLEVEL", &record.bomlevel)?;
            if !record.description.is_empty() {
                let description = strip_outer_quotes(&record.description).to_string();
                self.info_line("DESCRIPTION", &description)?;
            }
        }

        Ok(())
    }

    fn line_prefix(&self, tag: &str, own: u32, parent: u32) -> String {
        format!(
            "{tag}{}{ROUTING_CODE}{}{}{}",
            spaces(TAG_GAP),
            self.state.control_number(),
            seq6(own),
            seq6(parent)
        )
    }

    /// Characteristic line carrying the value itself in the wide payload.
    fn info_line(&mut self, name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        let prefix = self.characteristic_prefix();
        writeln!(
            self.writer,
            "{prefix}{}{}{}",
            pad_right(name, NAME_WIDTH),
            pad_right(value, VALUE_WIDTH),
            pad_right(value, WIDE_WIDTH)
        )?;
        Ok(())
    }

    /// Characteristic line carrying a resolved value in the wide payload.
    fn info_lookup_line(&mut self, name: &str, value: &str, wide: &str) -> Result<()> {
        let prefix = self.characteristic_prefix();
        writeln!(
            self.writer,
            "{prefix}{}{}{}",
            pad_right(name, NAME_WIDTH),
            pad_right(value, VALUE_WIDTH),
            pad_right(wide, WIDE_WIDTH)
        )?;
        Ok(())
    }

    /// Characteristic line carrying a graphic path in the wide payload.
    fn graphic_line(&mut self, name: &str, value: &str, graphic: &str) -> Result<()> {
        let prefix = self.characteristic_prefix();
        writeln!(
            self.writer,
            "{prefix}{}{}{}",
            pad_right(name, NAME_WIDTH),
            pad_right(value, VALUE_WIDTH),
            graphic_field(&self.options.graphics_dir, graphic)
        )?;
        Ok(())
    }

    /// Free-text graphic column: the value selects the graphic, via the
    /// yes-default, the lookup table, or the raw value with a `.tif` suffix.
    fn graphic_column_line(&mut self, name: &str, value: &str, yes_graphic: &str) -> Result<()> {
        let graphic = if cell_is_yes(value) {
            yes_graphic.to_string()
        } else {
            match self.lookup.resolve(value) {
                Some(resolved) => format!("{resolved}.tif"),
                None => format!("{value}.tif"),
            }
        };
        self.graphic_line(name, value, &graphic)
    }

    fn characteristic_prefix(&mut self) -> String {
        let (own, parent) = self.state.characteristic_line();
        self.report.characteristic_lines += 1;
        format!(
            "{CHARACTERISTIC_TAG}{}{ROUTING_CODE}{}{}{}{CHARACTERISTIC_KIND}",
            spaces(TAG_GAP),
            self.state.control_number(),
            seq6(own),
            seq6(parent)
        )
    }

    fn issue(&mut self, issue: Issue) {
        warn!(code = %issue.code, "{}", issue.message);
        self.report.issues.push(issue);
    }
}

impl IdocWriter<File> {
    /// Create a writer targeting a new file.
    pub fn create(path: &Path, lookup: LookupTable, options: ConvertOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file, lookup, options))
    }
}

/// Strip one leading and one trailing double quote, if present.
fn strip_outer_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Collapse every doubled double-quote to a single one.
fn collapse_double_quotes(text: &str) -> String {
    text.replace("\"\"", "\"")
}
