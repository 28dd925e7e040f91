use std::cmp::Ordering;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labeldoc_model::{Issue, Severity};

use labeldoc_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.label_data {
        println!("Label data: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Record kind"), header_cell("Lines")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Control"), Cell::new(1)]);
    table.add_row(vec![Cell::new("Material"), Cell::new(result.material_lines)]);
    table.add_row(vec![Cell::new("Label"), Cell::new(result.label_lines)]);
    table.add_row(vec![Cell::new("Free text"), Cell::new(result.text_lines)]);
    table.add_row(vec![
        Cell::new("Characteristic"),
        Cell::new(result.characteristic_lines),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_lines).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_issue_table(&result.issues);
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let mut ordered: Vec<&Issue> = issues.iter().collect();
    ordered.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        a.code.cmp(&b.code)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Record"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in ordered {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.code.clone()),
            match issue.record {
                Some(record) => Cell::new(record),
                None => dim_cell("-"),
            },
            match &issue.column {
                Some(column) => Cell::new(column.clone()),
                None => dim_cell("-"),
            },
            Cell::new(issue.message.clone()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Blue),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Warning => 2,
        Severity::Info => 1,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
