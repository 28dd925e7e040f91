//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Lookup**: build the characteristic lookup table and verify ordering
//! 2. **Ingest**: tokenize the tab-delimited sheet into rows and cells
//! 3. **Map**: dispatch columns onto typed label records
//! 4. **Sort**: order records by label identifier
//! 5. **Emit**: write the IDoc document (and the optional label-data extract)
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; fatal errors abort immediately, diagnostics accumulate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use labeldoc_emit::IdocWriter;
use labeldoc_ingest::{read_lookup_file, read_sheet_file};
use labeldoc_map::{MapOutcome, map_table};
use labeldoc_model::{ConvertOptions, Issue, LabelRecord, LookupTable, sort_by_label};

/// Everything one conversion needs.
#[derive(Debug)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// Output override; defaults next to the input.
    pub output: Option<PathBuf>,
    /// Replacement lookup table file.
    pub lookup_file: Option<PathBuf>,
    pub options: ConvertOptions,
}

/// Result of a completed conversion.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub label_data: Option<PathBuf>,
    pub records: usize,
    pub material_lines: usize,
    pub label_lines: usize,
    pub text_lines: usize,
    pub characteristic_lines: usize,
    pub total_lines: usize,
    pub issues: Vec<Issue>,
}

/// Run the whole pipeline for one sheet.
pub fn run_convert(request: &ConvertRequest) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Stage 1: lookup table; ordering violations are fatal before any work
    let entries = match &request.lookup_file {
        Some(path) => read_lookup_file(path).context("load lookup file")?,
        None => LookupTable::builtin_entries(),
    };
    let lookup = LookupTable::new(entries).context("verify lookup table ordering")?;

    // Stage 2: ingest
    let table = read_sheet_file(&request.input).context("read sheet")?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "sheet ingested"
    );

    // Stage 3: map
    let MapOutcome {
        mut records,
        mut issues,
    } = map_table(&table.headers, &table.rows, &request.options).context("map columns")?;

    // Stage 4: sort
    sort_by_label(&mut records);

    // Stage 5: emit
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&request.input, "_idoc.txt"));
    info!(output = %output.display(), "writing document");
    let writer = IdocWriter::create(&output, lookup, request.options.clone())
        .with_context(|| format!("create {}", output.display()))?;
    let mut report = writer
        .write_document(&records)
        .context("write IDoc document")?;
    issues.append(&mut report.issues);

    let label_data = if request.options.label_data {
        let path = sibling_path(&request.input, "_labeldata.txt");
        write_label_data(&path, &records)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    info!(
        records = report.records,
        lines = report.total_lines(),
        issues = issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );

    Ok(ConvertResult {
        input: request.input.clone(),
        output,
        label_data,
        records: report.records,
        material_lines: report.material_lines,
        label_lines: report.label_lines,
        text_lines: report.text_lines,
        characteristic_lines: report.characteristic_lines,
        total_lines: report.total_lines(),
        issues,
    })
}

/// `<input stem><suffix>` next to the input file.
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("labels");
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Tab-delimited extract of the sorted records.
fn write_label_data(path: &Path, records: &[LabelRecord]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(
        writer,
        "LABEL\tMATERIAL\tTEMPLATENUMBER\tREVISION\tLABEL_RELEASE_DATE"
    )?;
    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            record.label, record.material, record.template, record.revision, record.release
        )?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_path_keeps_directory_and_stem() {
        let path = sibling_path(Path::new("/tmp/run/batch7.txt"), "_idoc.txt");
        assert_eq!(path, Path::new("/tmp/run/batch7_idoc.txt"));
    }

    #[test]
    fn sibling_path_without_extension() {
        let path = sibling_path(Path::new("labels"), "_labeldata.txt");
        assert_eq!(path, Path::new("labels_labeldata.txt"));
    }
}
