//! Flattening of food items into one wide record each.
//!
//! The driver walks `FOOD_DES` in file order and, per item, copies the
//! descriptive columns, parses the conversion factors, resolves the group name
//! and fills every curated nutrient slot from the prebuilt [`NutrientIndex`].

use std::time::Instant;

use tracing::{debug, info, info_span, trace, warn};

use usda_model::{
    CURATED_NUTRIENT_COUNT, CURATED_NUTRIENTS, DenormalizeOptions, DenormalizedItem,
    FoodGroupPolicy, FoodItem, NutrientCode, NutrientDatabase, NutrientDefinition,
};

use crate::error::{DenormalizeError, Result};
use crate::index::{FoodGroupIndex, NutrientIndex, NutrientValues};
use crate::numeric::parse_decimal;

/// Flat records in `FOOD_DES` order plus what happened while building them.
#[derive(Debug, Clone)]
pub struct Denormalized {
    pub items: Vec<DenormalizedItem>,
    pub report: DenormalizeReport,
}

/// Counts gathered during one denormalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenormalizeReport {
    pub item_count: usize,
    /// Items whose group code has no `FD_GROUP` row (lenient policy only).
    pub unresolved_food_groups: usize,
    /// Non-blank nutrient values that did not parse as decimals.
    pub malformed_values: usize,
    /// Non-blank conversion factors that did not parse as decimals.
    pub malformed_factors: usize,
    /// Curated codes with no `NUTR_DEF` row; their columns stay empty.
    pub undefined_curated: Vec<NutrientCode>,
    /// Curated codes whose `NUTR_DEF` unit disagrees with the column unit.
    pub unit_mismatches: Vec<NutrientCode>,
    /// Items with a value, per curated column.
    pub populated: [usize; CURATED_NUTRIENT_COUNT],
}

impl Default for DenormalizeReport {
    fn default() -> Self {
        Self {
            item_count: 0,
            unresolved_food_groups: 0,
            malformed_values: 0,
            malformed_factors: 0,
            undefined_curated: Vec::new(),
            unit_mismatches: Vec::new(),
            populated: [0; CURATED_NUTRIENT_COUNT],
        }
    }
}

impl DenormalizeReport {
    /// Total number of curated values written.
    pub fn populated_values(&self) -> usize {
        self.populated.iter().sum()
    }

    /// Curated columns that no item has a value for.
    pub fn empty_columns(&self) -> usize {
        self.populated.iter().filter(|count| **count == 0).count()
    }
}

/// Builds both indexes and flattens every food item of the database.
pub fn denormalize(
    database: &NutrientDatabase,
    options: &DenormalizeOptions,
) -> Result<Denormalized> {
    let span = info_span!(
        "denormalize",
        food_items = database.food_items.len(),
        nutrient_values = database.nutrient_values.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let nutrient_index =
        NutrientIndex::build(&database.nutrient_definitions, &database.nutrient_values);
    let group_index = FoodGroupIndex::build(&database.food_groups);
    info!(
        nutrient_count = nutrient_index.nutrient_count(),
        food_group_count = group_index.len(),
        duration_ms = start.elapsed().as_millis(),
        "indexes built"
    );

    let mut result =
        denormalize_items(&database.food_items, &nutrient_index, &group_index, options)?;
    result.report.unit_mismatches = curated_unit_mismatches(&database.nutrient_definitions);
    if options.warn_on_unit_mismatch {
        for code in &result.report.unit_mismatches {
            warn!(nutrient = %code, "NUTR_DEF unit differs from the output column unit");
        }
    }

    info!(
        item_count = result.report.item_count,
        populated_values = result.report.populated_values(),
        malformed_values = result.report.malformed_values,
        unresolved_food_groups = result.report.unresolved_food_groups,
        duration_ms = start.elapsed().as_millis(),
        "denormalization complete"
    );
    Ok(result)
}

/// Flattens food items against already built indexes.
///
/// Output order matches `items`. With [`FoodGroupPolicy::Strict`] the first
/// unresolved group code aborts the whole run and no items are returned.
pub fn denormalize_items(
    items: &[FoodItem],
    nutrient_index: &NutrientIndex<'_>,
    group_index: &FoodGroupIndex,
    options: &DenormalizeOptions,
) -> Result<Denormalized> {
    let mut report = DenormalizeReport::default();

    let columns: Vec<Option<&NutrientValues<'_>>> = CURATED_NUTRIENTS
        .iter()
        .map(|entry| nutrient_index.nutrient(entry.code))
        .collect();
    for (entry, column) in CURATED_NUTRIENTS.iter().zip(&columns) {
        if column.is_none() {
            debug!(
                nutrient = %entry.code,
                field = %entry.field_name(),
                "curated nutrient not defined; column stays empty"
            );
            report.undefined_curated.push(entry.code);
        }
    }
    if !report.undefined_curated.is_empty() {
        warn!(
            undefined_count = report.undefined_curated.len(),
            "curated nutrients missing from NUTR_DEF"
        );
    }

    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        flat.push(flatten_item(
            item,
            &columns,
            group_index,
            options,
            &mut report,
        )?);
    }
    report.item_count = flat.len();

    Ok(Denormalized {
        items: flat,
        report,
    })
}

fn flatten_item(
    item: &FoodItem,
    columns: &[Option<&NutrientValues<'_>>],
    group_index: &FoodGroupIndex,
    options: &DenormalizeOptions,
    report: &mut DenormalizeReport,
) -> Result<DenormalizedItem> {
    let mut flat = DenormalizedItem::new(item.ndb_no, item.long_description.clone());
    flat.scientific_name = item.scientific_name.clone();
    flat.company_name = item.manufacturer_name.clone();
    flat.refuse_description = item.refuse_description.clone();
    flat.refuse_percentage = item.refuse.clone();

    flat.nitrogen_to_protein_factor = parse_tracked(item.n_factor.as_deref(), report);
    flat.protein_to_calories_factor = parse_tracked(item.pro_factor.as_deref(), report);
    flat.fat_to_calories_factor = parse_tracked(item.fat_factor.as_deref(), report);
    flat.carbohydrates_to_calories_factor = parse_tracked(item.cho_factor.as_deref(), report);

    flat.food_group_name = match group_index.get(item.food_group) {
        Some(name) => Some(name.clone()),
        None => match options.food_group_policy {
            FoodGroupPolicy::Strict => {
                return Err(DenormalizeError::UnknownFoodGroup {
                    ndb_no: item.ndb_no,
                    food_group: item.food_group,
                });
            }
            FoodGroupPolicy::Lenient => {
                warn!(
                    ndb_no = %item.ndb_no,
                    food_group = %item.food_group,
                    "unknown food group; leaving group name empty"
                );
                report.unresolved_food_groups += 1;
                None
            }
        },
    };

    for (idx, column) in columns.iter().enumerate() {
        let Some(raw) = column.and_then(|values| values.get(&item.ndb_no).copied().flatten())
        else {
            continue;
        };
        match parse_decimal(Some(raw)) {
            Some(value) => {
                flat.nutrients[idx] = Some(value);
                report.populated[idx] += 1;
            }
            None if raw.trim().is_empty() => {}
            None => {
                trace!(
                    ndb_no = %item.ndb_no,
                    nutrient = %CURATED_NUTRIENTS[idx].code,
                    raw,
                    "malformed nutrient value"
                );
                report.malformed_values += 1;
            }
        }
    }

    Ok(flat)
}

fn parse_tracked(
    value: Option<&str>,
    report: &mut DenormalizeReport,
) -> Option<rust_decimal::Decimal> {
    let parsed = parse_decimal(value);
    if parsed.is_none() && value.is_some_and(|raw| !raw.trim().is_empty()) {
        report.malformed_factors += 1;
    }
    parsed
}

/// Curated codes whose definition names a different unit than the column.
pub fn curated_unit_mismatches(definitions: &[NutrientDefinition]) -> Vec<NutrientCode> {
    CURATED_NUTRIENTS
        .iter()
        .filter(|entry| {
            definitions
                .iter()
                .rev()
                .find(|definition| definition.code == entry.code)
                .is_some_and(|definition| !entry.unit.matches_source_units(&definition.units))
        })
        .map(|entry| entry.code)
        .collect()
}
