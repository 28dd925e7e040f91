//! The field dispatcher.

use std::collections::HashSet;

use tracing::{info, warn};

use labeldoc_model::{ConvertOptions, Issue, LabelRecord, TriState, cell_is_no};

use crate::error::{MapError, Result};
use crate::registry::{ColumnTarget, find_spec};

/// Result of dispatching the whole table.
#[derive(Debug, Default)]
pub struct MapOutcome {
    /// One record per data row, in spreadsheet order.
    pub records: Vec<LabelRecord>,
    /// Dispatch diagnostics (unknown columns, ignored gated columns,
    /// alias substitution notices).
    pub issues: Vec<Issue>,
}

/// Map every data row onto typed records, driven by the header row.
///
/// Duplicate headers and a MATERIAL/PCODE conflict are fatal; unknown and
/// gated-off columns are diagnostics.
pub fn map_table(
    headers: &[String],
    rows: &[Vec<String>],
    options: &ConvertOptions,
) -> Result<MapOutcome> {
    check_duplicate_headers(headers)?;
    if headers.iter().any(|h| h == "MATERIAL") && headers.iter().any(|h| h == "PCODE") {
        return Err(MapError::MaterialAliasConflict);
    }

    let mut records = vec![LabelRecord::default(); rows.len()];
    let mut issues = Vec::new();

    for (col_idx, header) in headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        let Some(spec) = find_spec(header) else {
            let message = if header == "CAUTIONSTATEMENT" {
                format!("change \"{header}\" to \"CAUTIONSTATE\"; ignoring column")
            } else {
                format!("ignoring unknown column \"{header}\"")
            };
            warn!(column = %header, "{message}");
            issues.push(Issue::warning("COL001", message).with_column(header.clone()));
            continue;
        };
        if spec.gated && !options.non_standard_fields {
            let message = format!("ignoring non-standard column \"{header}\"");
            info!(column = %header, "{message}");
            issues.push(Issue::info("COL002", message).with_column(header.clone()));
            continue;
        }
        if header == "PCODE" {
            let message = "column \"PCODE\" substituted for \"MATERIAL\"".to_string();
            info!("{message}");
            issues.push(Issue::info("COL003", message).with_column(header.clone()));
        }

        for (row_idx, record) in records.iter_mut().enumerate() {
            let raw = rows[row_idx].get(col_idx).map_or("", String::as_str);
            let cell = clean_cell(raw);
            match spec.target {
                ColumnTarget::Text(set) => {
                    if cell_is_no(cell) {
                        set(record, String::new());
                    } else {
                        set(record, cell.to_string());
                    }
                }
                ColumnTarget::Flag(set) => set(record, TriState::from_cell(cell)),
            }
        }
    }

    Ok(MapOutcome { records, issues })
}

fn check_duplicate_headers(headers: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for header in headers {
        if header.is_empty() {
            continue;
        }
        if !seen.insert(header.as_str()) {
            return Err(MapError::DuplicateColumn {
                name: header.clone(),
            });
        }
    }
    Ok(())
}

/// Drop a literal `.tif` suffix; graphic references are stored bare and the
/// serializer appends the extension.
fn clean_cell(cell: &str) -> &str {
    if cell.len() > 4 && cell.ends_with(".tif") {
        &cell[..cell.len() - 4]
    } else {
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeldoc_model::Severity;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn maps_basic_columns() {
        let outcome = map_table(
            &headers(&["LABEL", "MATERIAL", "TEMPLATE"]),
            &[row(&["LBL001", "MAT1", "TPL1"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].label, "LBL001");
        assert_eq!(outcome.records[0].material, "MAT1");
        assert_eq!(outcome.records[0].template, "TPL1");
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn duplicate_headers_are_fatal() {
        let result = map_table(
            &headers(&["LABEL", "SIZE", "SIZE"]),
            &[],
            &ConvertOptions::default(),
        );
        assert!(matches!(result, Err(MapError::DuplicateColumn { name }) if name == "SIZE"));
    }

    #[test]
    fn material_and_pcode_together_are_fatal() {
        let result = map_table(
            &headers(&["MATERIAL", "PCODE"]),
            &[],
            &ConvertOptions::default(),
        );
        assert!(matches!(result, Err(MapError::MaterialAliasConflict)));
    }

    #[test]
    fn pcode_substitutes_for_material_with_notice() {
        let outcome = map_table(
            &headers(&["LABEL", "PCODE"]),
            &[row(&["LBL001", "MAT9"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].material, "MAT9");
        assert!(
            outcome
                .issues
                .iter()
                .any(|i| i.code == "COL003" && i.severity == Severity::Info)
        );
    }

    #[test]
    fn unknown_column_is_reported_not_fatal() {
        let outcome = map_table(
            &headers(&["LABEL", "WIDGET"]),
            &[row(&["LBL001", "x"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert!(outcome.issues.iter().any(|i| i.code == "COL001"));
    }

    #[test]
    fn misspelled_caution_statement_gets_rename_hint() {
        let outcome = map_table(
            &headers(&["LABEL", "CAUTIONSTATEMENT"]),
            &[row(&["LBL001", "x"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        let issue = outcome
            .issues
            .iter()
            .find(|i| i.code == "COL001")
            .expect("issue");
        assert!(issue.message.contains("CAUTIONSTATE"));
    }

    #[test]
    fn gated_columns_ignored_without_option() {
        let outcome = map_table(
            &headers(&["LABEL", "GTIN", "IPN"]),
            &[row(&["LBL001", "00844588016814", "IPN42"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].gtin, "");
        assert_eq!(outcome.records[0].ipn, "");
        assert_eq!(
            outcome.issues.iter().filter(|i| i.code == "COL002").count(),
            2
        );
    }

    #[test]
    fn gated_columns_populate_with_option() {
        let options = ConvertOptions {
            non_standard_fields: true,
            ..ConvertOptions::default()
        };
        let outcome = map_table(
            &headers(&["LABEL", "GTIN"]),
            &[row(&["LBL001", "00844588016814"])],
            &options,
        )
        .expect("map");
        assert_eq!(outcome.records[0].gtin, "00844588016814");
    }

    #[test]
    fn textual_no_normalizes_to_absent_for_text_columns() {
        let outcome = map_table(
            &headers(&["LABEL", "QUANTITY", "SIZE"]),
            &[row(&["LBL001", "NO", "n"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].quantity, "");
        assert_eq!(outcome.records[0].size, "");
    }

    #[test]
    fn flag_columns_keep_explicit_no() {
        let outcome = map_table(
            &headers(&["LABEL", "ECREP", "CAUTION", "CONTAINSLATEX"]),
            &[row(&["LBL001", "N", "F_Y", "iso_yes"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].ecrep, TriState::No);
        assert_eq!(outcome.records[0].caution, TriState::YesF);
        assert_eq!(outcome.records[0].latex, TriState::YesIso);
    }

    #[test]
    fn tif_suffix_is_stripped_from_cells() {
        let outcome = map_table(
            &headers(&["LABEL", "LOGO1"]),
            &[row(&["LBL001", "Acme.tif"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].logo1, "Acme");
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let outcome = map_table(
            &headers(&["LABEL", "MATERIAL", "SIZE"]),
            &[row(&["LBL001"])],
            &ConvertOptions::default(),
        )
        .expect("map");
        assert_eq!(outcome.records[0].material, "");
        assert_eq!(outcome.records[0].size, "");
    }
}
