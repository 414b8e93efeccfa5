use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use usda_cli::pipeline::{ExportRequest, ExportResult, run_export};
use usda_model::{CURATED_NUTRIENTS, DenormalizeOptions, FoodGroupPolicy};

use crate::cli::ExportArgs;
use crate::summary::{align_column, apply_table_style};

pub fn run_nutrients() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Column", "Unit"]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in CURATED_NUTRIENTS {
        table.add_row(vec![
            Cell::new(entry.code),
            Cell::new(entry.field_name()),
            Cell::new(entry.unit),
        ]);
    }
    println!("{table}");
    println!("{} curated nutrients", CURATED_NUTRIENTS.len());
    Ok(())
}

pub fn run_export_command(args: &ExportArgs) -> Result<ExportResult> {
    let policy = if args.strict {
        FoodGroupPolicy::Strict
    } else {
        FoodGroupPolicy::Lenient
    };
    let options = DenormalizeOptions {
        warn_on_unit_mismatch: !args.no_unit_check,
        ..DenormalizeOptions::default()
    }
    .with_food_group_policy(policy);

    let request = ExportRequest {
        release: args.release,
        encoding: args.encoding.into(),
        options,
        ..ExportRequest::new(&args.input_dir, &args.output)
    };
    run_export(&request)
}
