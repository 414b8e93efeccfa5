use std::time::Duration;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use usda_cli::pipeline::ExportResult;
use usda_model::NutrientCode;

pub fn print_summary(result: &ExportResult) {
    println!("Input: {}", result.input_dir.display());
    println!("Output: {}", result.output.display());

    let mut tables = Table::new();
    tables.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_summary_table_style(&mut tables);
    align_column(&mut tables, 1, CellAlignment::Right);
    for (name, rows) in result.table_counts.entries() {
        tables.add_row(vec![Cell::new(name), count_cell(rows, None)]);
    }
    tables.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.table_counts.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{tables}");

    let report = &result.report;
    let mut flat = Table::new();
    flat.set_header(vec![header_cell("Denormalization"), header_cell("Count")]);
    apply_summary_table_style(&mut flat);
    align_column(&mut flat, 1, CellAlignment::Right);
    flat.add_row(vec![
        Cell::new("Rows written"),
        Cell::new(result.rows_written)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    flat.add_row(vec![
        Cell::new("Nutrient values"),
        Cell::new(report.populated_values()),
    ]);
    flat.add_row(vec![
        Cell::new("Empty nutrient columns"),
        count_cell(report.empty_columns(), Some(Color::Yellow)),
    ]);
    flat.add_row(vec![
        Cell::new("Malformed nutrient values"),
        count_cell(report.malformed_values, Some(Color::Yellow)),
    ]);
    flat.add_row(vec![
        Cell::new("Malformed factors"),
        count_cell(report.malformed_factors, Some(Color::Yellow)),
    ]);
    flat.add_row(vec![
        Cell::new("Unresolved food groups"),
        count_cell(report.unresolved_food_groups, Some(Color::Red)),
    ]);
    flat.add_row(vec![
        Cell::new("Undefined curated nutrients"),
        count_cell(report.undefined_curated.len(), Some(Color::Yellow)),
    ]);
    flat.add_row(vec![
        Cell::new("Unit mismatches"),
        count_cell(report.unit_mismatches.len(), Some(Color::Yellow)),
    ]);
    println!("{flat}");

    if !report.unit_mismatches.is_empty() {
        println!("Unit mismatches: {}", code_list(&report.unit_mismatches));
    }
    let timings = &result.timings;
    println!(
        "Load {} | Denormalize {} | Write {} | Total {}",
        format_duration(timings.load),
        format_duration(timings.denormalize),
        format_duration(timings.write),
        format_duration(timings.total()),
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, highlight: Option<Color>) -> Cell {
    match highlight {
        _ if count == 0 => Cell::new(count).add_attribute(Attribute::Dim),
        Some(color) => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        None => Cell::new(count),
    }
}

fn code_list(codes: &[NutrientCode]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis >= 1000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{millis}ms")
    }
}
