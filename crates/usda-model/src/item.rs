//! The flat per-food record produced by denormalization.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::curated::{CURATED_NUTRIENT_COUNT, CURATED_NUTRIENTS, curated_by_field, curated_position};
use crate::error::{ModelError, Result};
use crate::ids::{NdbNo, NutrientCode};

/// Descriptive output columns, in order, ahead of the nutrient columns.
pub const DESCRIPTIVE_FIELDS: [&str; 11] = [
    "NutrientDatabankNumber",
    "Name",
    "ScientificName",
    "CompanyName",
    "RefuseDescription",
    "RefusePercentage",
    "NitrogenToProteinFactor",
    "ProteinToCaloriesFactor",
    "FatToCaloriesFactor",
    "CarbohydratesToCaloriesFactor",
    "FoodGroupName",
];

/// One food item with its group name and curated nutrient values resolved.
///
/// Names no longer follow the source documentation; they are descriptive and
/// carry units where appropriate. Every optional field is `None` when the
/// source has no usable value, which is never the same as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenormalizedItem {
    pub ndb_no: NdbNo,
    pub name: String,
    pub scientific_name: Option<String>,
    pub company_name: Option<String>,
    pub refuse_description: Option<String>,
    pub refuse_percentage: Option<String>,
    pub nitrogen_to_protein_factor: Option<Decimal>,
    pub protein_to_calories_factor: Option<Decimal>,
    pub fat_to_calories_factor: Option<Decimal>,
    pub carbohydrates_to_calories_factor: Option<Decimal>,
    /// Shared with every other item of the same group.
    pub food_group_name: Option<Arc<str>>,
    /// One slot per entry of [`CURATED_NUTRIENTS`], same order.
    pub nutrients: [Option<Decimal>; CURATED_NUTRIENT_COUNT],
}

impl DenormalizedItem {
    pub fn new(ndb_no: NdbNo, name: impl Into<String>) -> Self {
        Self {
            ndb_no,
            name: name.into(),
            scientific_name: None,
            company_name: None,
            refuse_description: None,
            refuse_percentage: None,
            nitrogen_to_protein_factor: None,
            protein_to_calories_factor: None,
            fat_to_calories_factor: None,
            carbohydrates_to_calories_factor: None,
            food_group_name: None,
            nutrients: [None; CURATED_NUTRIENT_COUNT],
        }
    }

    /// Value of a curated nutrient; `None` for codes outside the curated set too.
    pub fn nutrient(&self, code: NutrientCode) -> Option<Decimal> {
        curated_position(code).and_then(|idx| self.nutrients[idx])
    }

    /// Value of a curated nutrient addressed by its output column name.
    pub fn nutrient_by_field(&self, field: &str) -> Result<Option<Decimal>> {
        let (idx, _) = curated_by_field(field)
            .ok_or_else(|| ModelError::UnknownNutrientField(field.to_string()))?;
        Ok(self.nutrients[idx])
    }

    /// Number of curated nutrients with a value.
    pub fn populated_nutrients(&self) -> usize {
        self.nutrients.iter().filter(|value| value.is_some()).count()
    }

    pub fn food_group_name(&self) -> Option<&str> {
        self.food_group_name.as_deref()
    }

    /// Output cells in column order; `None` renders as an empty cell.
    pub fn cells(&self) -> Vec<Option<String>> {
        let mut cells = Vec::with_capacity(DESCRIPTIVE_FIELDS.len() + CURATED_NUTRIENTS.len());
        cells.push(Some(self.ndb_no.to_string()));
        cells.push(Some(self.name.clone()));
        cells.push(self.scientific_name.clone());
        cells.push(self.company_name.clone());
        cells.push(self.refuse_description.clone());
        cells.push(self.refuse_percentage.clone());
        for factor in [
            self.nitrogen_to_protein_factor,
            self.protein_to_calories_factor,
            self.fat_to_calories_factor,
            self.carbohydrates_to_calories_factor,
        ] {
            cells.push(factor.map(|value| value.to_string()));
        }
        cells.push(self.food_group_name.as_deref().map(str::to_string));
        cells.extend(
            self.nutrients
                .iter()
                .map(|value| value.map(|value| value.to_string())),
        );
        cells
    }
}

/// Header row matching [`DenormalizedItem::cells`].
pub fn output_header() -> Vec<String> {
    DESCRIPTIVE_FIELDS
        .iter()
        .map(|field| (*field).to_string())
        .chain(CURATED_NUTRIENTS.iter().map(|entry| entry.field_name()))
        .collect()
}
