//! Replacement lookup table loading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Load (term, resolved value) pairs from a two-column tab-delimited file.
/// Ordering is not checked here; the table constructor enforces it.
pub fn read_lookup_file(path: &Path) -> Result<Vec<(String, String)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::LookupFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::LookupFile {
            path: path.to_path_buf(),
            source,
        })?;
        let term = record.get(0).unwrap_or("").trim();
        if term.is_empty() {
            continue;
        }
        let value = record.get(1).ok_or(IngestError::LookupShape {
            path: path.to_path_buf(),
            line: index + 1,
        })?;
        entries.push((term.to_string(), value.trim().to_string()));
    }
    debug!(path = %path.display(), entries = entries.len(), "lookup file loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_two_column_entries() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "BAG\tBag").expect("write");
        writeln!(file, "BOX\tBox").expect("write");
        writeln!(file).expect("write");
        let entries = read_lookup_file(file.path()).expect("load lookup");
        assert_eq!(
            entries,
            vec![
                ("BAG".to_string(), "Bag".to_string()),
                ("BOX".to_string(), "Box".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_rows_without_a_value_column() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "BAG").expect("write");
        let result = read_lookup_file(file.path());
        assert!(matches!(result, Err(IngestError::LookupShape { line: 1, .. })));
    }
}
