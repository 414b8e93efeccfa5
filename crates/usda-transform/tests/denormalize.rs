//! Tests for food item denormalization.

use std::str::FromStr;
use std::sync::Arc;

use usda_model::{
    CURATED_NUTRIENTS, Decimal, DenormalizeOptions, FoodGroup, FoodGroupCode, FoodItem, NdbNo,
    NutrientCode, NutrientDatabase, NutrientDefinition, NutrientValue,
};
use usda_transform::{DenormalizeError, curated_unit_mismatches, denormalize};

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn item(ndb_no: u32, group: u16, name: &str) -> FoodItem {
    FoodItem::new(NdbNo::new(ndb_no), FoodGroupCode::new(group), name)
}

fn value(ndb_no: u32, code: u16, raw: &str) -> NutrientValue {
    NutrientValue::new(NdbNo::new(ndb_no), NutrientCode::new(code), raw)
}

/// Definitions for every curated nutrient, with matching units.
fn curated_definitions() -> Vec<NutrientDefinition> {
    CURATED_NUTRIENTS
        .iter()
        .map(|entry| {
            let units = match entry.unit.suffix() {
                "Grams" => "g",
                "Mg" => "mg",
                "Ug" => "\u{b5}g",
                "Kcal" => "kcal",
                "KJ" => "kJ",
                "IU" => "IU",
                _ => "\u{b5}g_RAE",
            };
            NutrientDefinition::new(entry.code, units, entry.name)
        })
        .collect()
}

fn database() -> NutrientDatabase {
    let mut dairy = item(1001, 100, "Butter, salted");
    dairy.n_factor = Some("6.25".to_string());
    let mut cheese = item(1004, 100, "Cheese, blue");
    cheese.fat_factor = Some("8.79".to_string());

    NutrientDatabase {
        food_items: vec![
            dairy,
            item(2002, 200, "Spices, allspice, ground"),
            item(3003, 100, "Milk, whole"),
            cheese,
        ],
        food_groups: vec![
            FoodGroup::new(FoodGroupCode::new(100), "Dairy"),
            FoodGroup::new(FoodGroupCode::new(200), "Spices and Herbs"),
        ],
        nutrient_definitions: curated_definitions(),
        nutrient_values: vec![
            value(1001, 203, "3.5"),
            value(3003, 208, "abc"),
            value(3003, 203, "3.15"),
            value(1004, 208, "353"),
        ],
        ..NutrientDatabase::default()
    }
}

#[test]
fn resolves_group_factor_and_protein() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let butter = &result.items[0];

    assert_eq!(butter.ndb_no, NdbNo::new(1001));
    assert_eq!(butter.food_group_name(), Some("Dairy"));
    assert_eq!(butter.nitrogen_to_protein_factor, Some(dec("6.25")));
    assert_eq!(butter.nutrient(NutrientCode::new(203)), Some(dec("3.5")));
    assert_eq!(
        butter.nutrient_by_field("Protein_Grams").unwrap(),
        Some(dec("3.5"))
    );
    assert_eq!(butter.populated_nutrients(), 1);
    assert_eq!(butter.protein_to_calories_factor, None);
}

#[test]
fn item_without_values_still_gets_group_name() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let allspice = &result.items[1];

    assert_eq!(allspice.food_group_name(), Some("Spices and Herbs"));
    assert_eq!(allspice.populated_nutrients(), 0);
    assert!(allspice.nutrients.iter().all(Option::is_none));
}

#[test]
fn malformed_value_is_empty_and_isolated() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let milk = &result.items[2];

    assert_eq!(milk.nutrient_by_field("Energy_Kcal").unwrap(), None);
    assert_eq!(milk.nutrient(NutrientCode::new(203)), Some(dec("3.15")));
    assert_eq!(
        result.items[3].nutrient_by_field("Energy_Kcal").unwrap(),
        Some(dec("353"))
    );
    assert_eq!(result.report.malformed_values, 1);
}

#[test]
fn items_of_one_group_share_the_name() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let first = result.items[0].food_group_name.as_ref().unwrap();
    let second = result.items[2].food_group_name.as_ref().unwrap();

    assert!(Arc::ptr_eq(first, second));
}

#[test]
fn output_follows_food_item_order() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let order: Vec<u32> = result.items.iter().map(|item| item.ndb_no.get()).collect();
    assert_eq!(order, vec![1001, 2002, 3003, 1004]);
    assert_eq!(result.report.item_count, 4);
}

#[test]
fn repeated_runs_are_identical() {
    let database = database();
    let first = denormalize(&database, &DenormalizeOptions::default()).unwrap();
    let second = denormalize(&database, &DenormalizeOptions::default()).unwrap();

    assert_eq!(first.items, second.items);
    let first_cells: Vec<_> = first.items.iter().map(|item| item.cells()).collect();
    let second_cells: Vec<_> = second.items.iter().map(|item| item.cells()).collect();
    assert_eq!(first_cells, second_cells);
}

#[test]
fn empty_database_yields_no_items() {
    let result = denormalize(&NutrientDatabase::default(), &DenormalizeOptions::default()).unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.report.item_count, 0);
    assert_eq!(result.report.undefined_curated.len(), CURATED_NUTRIENTS.len());
}

#[test]
fn undefined_curated_nutrient_stays_empty() {
    let mut database = database();
    database
        .nutrient_definitions
        .retain(|definition| definition.code != NutrientCode::new(203));

    let result = denormalize(&database, &DenormalizeOptions::default()).unwrap();
    assert!(
        result
            .items
            .iter()
            .all(|item| item.nutrient(NutrientCode::new(203)).is_none())
    );
    assert_eq!(result.report.undefined_curated, vec![NutrientCode::new(203)]);
}

#[test]
fn unknown_group_is_empty_when_lenient() {
    let mut database = database();
    database.food_items.push(item(9999, 2500, "Mystery food"));

    let result = denormalize(&database, &DenormalizeOptions::default()).unwrap();
    let mystery = result.items.last().unwrap();
    assert_eq!(mystery.food_group_name(), None);
    assert_eq!(result.report.unresolved_food_groups, 1);
}

#[test]
fn unknown_group_fails_when_strict() {
    let mut database = database();
    database.food_items.push(item(9999, 2500, "Mystery food"));

    let err = denormalize(&database, &DenormalizeOptions::strict()).unwrap_err();
    match err {
        DenormalizeError::UnknownFoodGroup { ndb_no, food_group } => {
            assert_eq!(ndb_no, NdbNo::new(9999));
            assert_eq!(food_group, FoodGroupCode::new(2500));
        }
    }
}

#[test]
fn malformed_factor_is_counted() {
    let mut database = database();
    database.food_items[1].cho_factor = Some("n/a".to_string());
    database.food_items[1].pro_factor = Some("   ".to_string());

    let result = denormalize(&database, &DenormalizeOptions::default()).unwrap();
    assert_eq!(result.items[1].carbohydrates_to_calories_factor, None);
    assert_eq!(result.items[1].protein_to_calories_factor, None);
    assert_eq!(result.report.malformed_factors, 1);
}

#[test]
fn populated_counts_per_column() {
    let result = denormalize(&database(), &DenormalizeOptions::default()).unwrap();
    let protein = CURATED_NUTRIENTS
        .iter()
        .position(|entry| entry.field_name() == "Protein_Grams")
        .unwrap();

    assert_eq!(result.report.populated[protein], 2);
    assert_eq!(result.report.populated_values(), 3);
    assert_eq!(
        result.report.empty_columns(),
        CURATED_NUTRIENTS.len() - 2
    );
}

#[test]
fn unit_mismatch_is_reported() {
    let mut definitions = curated_definitions();
    for definition in &mut definitions {
        if definition.code == NutrientCode::new(203) {
            definition.units = "mg".to_string();
        }
    }
    assert_eq!(
        curated_unit_mismatches(&definitions),
        vec![NutrientCode::new(203)]
    );
    assert!(curated_unit_mismatches(&curated_definitions()).is_empty());
}

#[test]
fn descriptive_fields_are_copied() {
    let mut database = database();
    let source = &mut database.food_items[0];
    source.scientific_name = Some("Bos taurus".to_string());
    source.manufacturer_name = Some("Acme Dairy".to_string());
    source.refuse_description = Some("Wrapper".to_string());
    source.refuse = Some("2".to_string());

    let result = denormalize(&database, &DenormalizeOptions::default()).unwrap();
    let butter = &result.items[0];
    assert_eq!(butter.name, "Butter, salted");
    assert_eq!(butter.scientific_name.as_deref(), Some("Bos taurus"));
    assert_eq!(butter.company_name.as_deref(), Some("Acme Dairy"));
    assert_eq!(butter.refuse_description.as_deref(), Some("Wrapper"));
    assert_eq!(butter.refuse_percentage.as_deref(), Some("2"));
}
