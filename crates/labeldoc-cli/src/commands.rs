use anyhow::Result;
use comfy_table::Table;

use labeldoc_map::column_specs;
use labeldoc_model::ConvertOptions;

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;
use labeldoc_cli::pipeline::{ConvertRequest, ConvertResult, run_convert as run_pipeline};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let mut options = ConvertOptions {
        non_standard_fields: args.non_standard_fields,
        label_data: args.label_data,
        control_number: args.control_number.clone(),
        ..ConvertOptions::default()
    };
    if let Some(dir) = &args.graphics_dir {
        options.graphics_dir = dir.clone();
    }
    let request = ConvertRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        lookup_file: args.lookup.clone(),
        options,
    };
    run_pipeline(&request)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind", "Aliases", "Non-standard"]);
    apply_table_style(&mut table);
    for spec in column_specs() {
        table.add_row(vec![
            spec.name.to_string(),
            spec.kind().to_string(),
            spec.aliases.join(", "),
            if spec.gated { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
