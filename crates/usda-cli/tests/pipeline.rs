//! End-to-end tests for the export pipeline.

use std::path::Path;

use tempfile::TempDir;
use usda_cli::pipeline::{ExportRequest, run_export};
use usda_model::{DenormalizeOptions, NutrientCode};

fn write_release(dir: &Path) {
    let files: [(&str, &str); 12] = [
        (
            "FOOD_DES.txt",
            "~01001~^~0100~^~Butter, salted~^~BUTTER,WITH SALT~^~~^~~^~Y~^~~^0^~~^6.38^4.27^8.79^3.87\r\n\
             ~02001~^~0200~^~Spices, allspice, ground~^~ALLSPICE,GROUND~^~~^~~^~Y~^~~^0^~Pimenta dioica~^6.25^^^\r\n\
             ~09999~^~2500~^~Unlisted group~^~UNLISTED~\r\n",
        ),
        (
            "NUT_DATA.txt",
            "~01001~^~203~^0.85^16^0.074^~1~^~~^~~^~~^^^^^^^~~^11/1976^\r\n\
             ~01001~^~208~^717^0^^~4~^~NC~^~~^~~^^^^^^^~~^08/2010^\r\n\
             ~02001~^~208~^abc^0^^~4~^~NC~^~~^~~^^^^^^^~~^^\r\n",
        ),
        ("WEIGHT.txt", ""),
        ("FOOTNOTE.txt", ""),
        (
            "FD_GROUP.txt",
            "~0100~^~Dairy and Egg Products~\r\n~0200~^~Spices and Herbs~\r\n",
        ),
        ("LANGUAL.txt", ""),
        ("LANGDESC.txt", ""),
        (
            "NUTR_DEF.txt",
            "~203~^~g~^~PROCNT~^~Protein~^~2~^~600~\r\n~208~^~kcal~^~ENERC_KCAL~^~Energy~^~0~^~300~\r\n",
        ),
        ("SRC_CD.txt", ""),
        ("DERIV_CD.txt", ""),
        ("DATA_SRC.txt", ""),
        ("DATSRCLN.txt", ""),
    ];
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).unwrap();
    }
}

#[test]
fn export_writes_one_row_per_food_item() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_release(input.path());
    let csv_path = output.path().join("sr26.csv");

    let result = run_export(&ExportRequest::new(input.path(), &csv_path)).unwrap();

    assert_eq!(result.rows_written, 3);
    assert_eq!(result.table_counts.food_items, 3);
    assert_eq!(result.table_counts.nutrient_values, 3);
    assert_eq!(result.report.unresolved_food_groups, 1);
    assert_eq!(result.report.malformed_values, 1);
    assert_eq!(result.report.populated_values(), 2);
    assert!(result.report.unit_mismatches.is_empty());

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("NutrientDatabankNumber,Name,ScientificName,"));
    assert!(lines[0].contains(",FoodGroupName,Protein_Grams,"));
    assert!(lines[1].starts_with("01001,\"Butter, salted\",,,,0,6.38,4.27,8.79,3.87,Dairy and Egg Products,0.85,"));
    assert!(lines[2].starts_with(
        "02001,\"Spices, allspice, ground\",Pimenta dioica,,,0,6.25,,,,Spices and Herbs,,"
    ));
    assert!(lines[3].starts_with("09999,Unlisted group,,,,,,,,,,"));
}

#[test]
fn strict_export_fails_without_output() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_release(input.path());
    let csv_path = output.path().join("sr26.csv");

    let request = ExportRequest {
        options: DenormalizeOptions::strict(),
        ..ExportRequest::new(input.path(), &csv_path)
    };
    let err = run_export(&request).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("denormalize food items"));
    assert!(message.contains("unknown food group 2500"));
    assert!(!csv_path.exists());
}

#[test]
fn unsupported_release_is_rejected() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_release(input.path());
    let csv_path = output.path().join("sr26.csv");

    let request = ExportRequest {
        release: 27,
        ..ExportRequest::new(input.path(), &csv_path)
    };
    let err = run_export(&request).unwrap_err();

    assert!(format!("{err:#}").contains("unsupported database release 27"));
    assert!(!csv_path.exists());
}

#[test]
fn missing_table_is_fatal() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_release(input.path());
    std::fs::remove_file(input.path().join("FD_GROUP.txt")).unwrap();
    let csv_path = output.path().join("sr26.csv");

    let err = run_export(&ExportRequest::new(input.path(), &csv_path)).unwrap_err();

    assert!(format!("{err:#}").contains("FD_GROUP table file not found"));
    assert!(!csv_path.exists());
}

#[test]
fn undefined_curated_nutrients_are_reported() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_release(input.path());
    let csv_path = output.path().join("sr26.csv");

    let result = run_export(&ExportRequest::new(input.path(), &csv_path)).unwrap();

    assert!(!result.report.undefined_curated.contains(&NutrientCode::new(203)));
    assert!(result.report.undefined_curated.contains(&NutrientCode::new(204)));
}
