//! Tab-delimited sheet tokenization.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// The whole source table: the header row plus every data row, already
/// split into cells. Rows that were empty after delimiter removal are gone.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Cell at (row, column); a missing trailing cell reads as empty.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}

/// Read and tokenize a sheet from disk.
pub fn read_sheet_file(path: &Path) -> Result<SheetTable> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_sheet(&text);
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "sheet tokenized"
    );
    Ok(table)
}

/// Tokenize raw sheet text. The first surviving row is the header row.
pub fn parse_sheet(text: &str) -> SheetTable {
    let mut lines = split_rows(text).into_iter();
    let headers = lines.next().map(|row| split_cells(&row)).unwrap_or_default();
    let rows = lines.map(|row| split_cells(&row)).collect();
    SheetTable { headers, rows }
}

/// Split raw text into logical rows.
///
/// Rows end at a line feed (a preceding carriage return is stripped), except
/// when the accumulated row ends with the `##` continuation marker: that line
/// feed belongs to the free-text content's wrapping and is dropped without
/// closing the row. Rows containing only tabs are discarded. Trailing content
/// without a final line feed still forms a row.
fn split_rows(text: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut buffer = String::new();
    for ch in text.chars() {
        if ch != '\n' {
            buffer.push(ch);
            continue;
        }
        if buffer.ends_with('\r') {
            buffer.pop();
        }
        if buffer.ends_with("##") {
            continue;
        }
        close_row(&mut buffer, &mut rows);
    }
    if buffer.ends_with('\r') {
        buffer.pop();
    }
    close_row(&mut buffer, &mut rows);
    rows
}

fn close_row(buffer: &mut String, rows: &mut Vec<String>) {
    if buffer.chars().any(|c| c != '\t' && c != '\r') {
        rows.push(std::mem::take(buffer));
    } else {
        buffer.clear();
    }
}

fn split_cells(row: &str) -> Vec<String> {
    row.split('\t').map(str::to_string).collect()
}
