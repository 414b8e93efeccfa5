//! Tests for the flat CSV export.

use std::str::FromStr;
use std::sync::Arc;

use tempfile::TempDir;
use usda_model::{
    CURATED_NUTRIENTS, DESCRIPTIVE_FIELDS, Decimal, DenormalizedItem, NdbNo, output_header,
};
use usda_output::{OutputError, write_denormalized, write_denormalized_csv};

fn butter() -> DenormalizedItem {
    let mut item = DenormalizedItem::new(NdbNo::new(1001), "Butter, salted");
    item.nitrogen_to_protein_factor = Some(Decimal::from_str("6.38").unwrap());
    item.food_group_name = Some(Arc::from("Dairy and Egg Products"));
    item.nutrients[0] = Some(Decimal::from_str("0.85").unwrap());
    item
}

fn allspice() -> DenormalizedItem {
    let mut item = DenormalizedItem::new(NdbNo::new(2001), "Spices, allspice, ground");
    item.scientific_name = Some("Pimenta dioica".to_string());
    item.food_group_name = Some(Arc::from("Spices and Herbs"));
    item
}

fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn writes_header_then_rows() {
    let mut buffer = Vec::new();
    let written = write_denormalized(&mut buffer, &[butter(), allspice()]).unwrap();
    assert_eq!(written, 2);

    let rows = read_rows(&buffer);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], output_header());
    assert_eq!(rows[0].len(), DESCRIPTIVE_FIELDS.len() + CURATED_NUTRIENTS.len());
    assert_eq!(rows[0][11], "Protein_Grams");

    assert_eq!(rows[1][0], "01001");
    assert_eq!(rows[1][1], "Butter, salted");
    assert_eq!(rows[1][6], "6.38");
    assert_eq!(rows[1][10], "Dairy and Egg Products");
    assert_eq!(rows[1][11], "0.85");
}

#[test]
fn absent_values_are_empty_cells() {
    let mut buffer = Vec::new();
    write_denormalized(&mut buffer, &[allspice()]).unwrap();

    let rows = read_rows(&buffer);
    let row = &rows[1];
    assert_eq!(row[2], "Pimenta dioica");
    assert_eq!(row[3], "");
    assert!(row[DESCRIPTIVE_FIELDS.len()..].iter().all(String::is_empty));
}

#[test]
fn empty_input_writes_header_only() {
    let mut buffer = Vec::new();
    assert_eq!(write_denormalized(&mut buffer, &[]).unwrap(), 0);
    assert_eq!(read_rows(&buffer).len(), 1);
}

#[test]
fn writes_file_and_leaves_no_temp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("sr26.csv");

    let written = write_denormalized_csv(&path, &[butter(), allspice()]).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read(&path).unwrap();
    assert_eq!(read_rows(&contents).len(), 3);
    assert!(!dir.path().join("out").join("sr26.csv.tmp").exists());
}

#[test]
fn failed_rename_removes_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sr26.csv");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep.txt"), "keep").unwrap();

    let err = write_denormalized_csv(&path, &[butter()]).unwrap_err();
    assert!(matches!(err, OutputError::AtomicWriteFailed { .. }));
    assert!(!dir.path().join("sr26.csv.tmp").exists());
    assert!(path.join("keep.txt").exists());
}

#[test]
fn unwritable_parent_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("sr26.csv");

    let err = write_denormalized_csv(&path, &[butter()]).unwrap_err();
    assert!(matches!(err, OutputError::Io { .. }));
    assert!(!path.exists());
}
