//! Row types for the twelve SR26 source tables.
//!
//! Each struct lists its fields in file column order, so a headerless
//! `^`-delimited record deserializes positionally. Fields the source leaves
//! blank are `None`, and so are optional trailing fields a short row leaves
//! out. Numeric-looking text that the join does not need is kept as text.

use serde::{Deserialize, Serialize};

use crate::ids::{FoodGroupCode, NdbNo, NutrientCode};

// ============================================================================
// Principal tables
// ============================================================================

/// Food description (`FOOD_DES`): one row per food item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Databank number of the item.
    pub ndb_no: NdbNo,
    /// Food group the item belongs to.
    pub food_group: FoodGroupCode,
    /// 200-character description.
    pub long_description: String,
    /// 60-character abbreviated description.
    pub short_description: String,
    /// Other names commonly used for the food.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Company that manufactured the product.
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    /// `Y` when the item is part of the survey database (FNDDS).
    #[serde(default)]
    pub survey: Option<String>,
    /// Description of inedible parts (seeds, bone).
    #[serde(default)]
    pub refuse_description: Option<String>,
    /// Percentage of refuse.
    #[serde(default)]
    pub refuse: Option<String>,
    /// Scientific name of the least processed form.
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Factor for converting nitrogen to protein.
    #[serde(default)]
    pub n_factor: Option<String>,
    /// Factor for calculating calories from protein.
    #[serde(default)]
    pub pro_factor: Option<String>,
    /// Factor for calculating calories from fat.
    #[serde(default)]
    pub fat_factor: Option<String>,
    /// Factor for calculating calories from carbohydrate.
    #[serde(default)]
    pub cho_factor: Option<String>,
}

impl FoodItem {
    /// Builds an item with only the identifying columns set.
    pub fn new(
        ndb_no: NdbNo,
        food_group: FoodGroupCode,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            ndb_no,
            food_group,
            long_description: long_description.into(),
            short_description: String::new(),
            common_name: None,
            manufacturer_name: None,
            survey: None,
            refuse_description: None,
            refuse: None,
            scientific_name: None,
            n_factor: None,
            pro_factor: None,
            fat_factor: None,
            cho_factor: None,
        }
    }
}

/// Nutrient data (`NUT_DATA`): one measured or derived value per item and nutrient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientValue {
    pub ndb_no: NdbNo,
    pub nutrient: NutrientCode,
    /// Amount in 100 g edible portion, as written in the source.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data_points: Option<String>,
    #[serde(default)]
    pub std_error: Option<String>,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub derivation_code: Option<String>,
    #[serde(default)]
    pub reference_ndb_no: Option<String>,
    /// Marks a vitamin or mineral added for fortification.
    #[serde(default)]
    pub added_nutrient_mark: Option<String>,
    #[serde(default)]
    pub studies: Option<String>,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub degrees_of_freedom: Option<String>,
    #[serde(default)]
    pub lower_error_bound: Option<String>,
    #[serde(default)]
    pub upper_error_bound: Option<String>,
    #[serde(default)]
    pub statistical_comment: Option<String>,
    #[serde(default)]
    pub added_or_modified: Option<String>,
    #[serde(default)]
    pub confidence_code: Option<String>,
}

impl NutrientValue {
    /// Builds a row with only the join-relevant columns set.
    pub fn new(ndb_no: NdbNo, nutrient: NutrientCode, value: impl Into<String>) -> Self {
        Self {
            ndb_no,
            nutrient,
            value: Some(value.into()),
            data_points: None,
            std_error: None,
            source_code: None,
            derivation_code: None,
            reference_ndb_no: None,
            added_nutrient_mark: None,
            studies: None,
            min: None,
            max: None,
            degrees_of_freedom: None,
            lower_error_bound: None,
            upper_error_bound: None,
            statistical_comment: None,
            added_or_modified: None,
            confidence_code: None,
        }
    }
}

/// Gram weights of common household measures (`WEIGHT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub ndb_no: NdbNo,
    pub sequence: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub measure_description: Option<String>,
    #[serde(default)]
    pub gram_weight: Option<String>,
    #[serde(default)]
    pub data_points: Option<String>,
    #[serde(default)]
    pub std_deviation: Option<String>,
}

/// Footnotes attached to items, nutrients or weights (`FOOTNOTE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub ndb_no: NdbNo,
    #[serde(default)]
    pub footnote_no: Option<String>,
    /// `D` (description), `M` (measure) or `N` (nutrient).
    #[serde(default)]
    pub footnote_type: Option<String>,
    #[serde(default)]
    pub nutrient: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Support tables
// ============================================================================

/// Food group description (`FD_GROUP`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodGroup {
    pub code: FoodGroupCode,
    pub description: String,
}

impl FoodGroup {
    pub fn new(code: FoodGroupCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// LanguaL factor assigned to a food (`LANGUAL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangualFactor {
    pub ndb_no: NdbNo,
    pub factor_code: String,
}

/// LanguaL factor description (`LANGDESC`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangualFactorDescription {
    pub factor_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Nutrient definition (`NUTR_DEF`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientDefinition {
    pub code: NutrientCode,
    /// Unit of measure as written in the source (`g`, `mg`, `µg`, `kcal`, ...).
    pub units: String,
    /// INFOODS tag; neither unique nor always present.
    #[serde(default)]
    pub tagname: Option<String>,
    pub description: String,
    #[serde(default)]
    pub decimal_places: Option<String>,
    #[serde(default)]
    pub sr_order: Option<String>,
}

impl NutrientDefinition {
    pub fn new(
        code: NutrientCode,
        units: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code,
            units: units.into(),
            tagname: None,
            description: description.into(),
            decimal_places: None,
            sr_order: None,
        }
    }
}

/// Source code description (`SRC_CD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCode {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Data derivation code description (`DERIV_CD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDerivation {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Literature reference (`DATA_SRC`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOfData {
    pub id: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub volume_city: Option<String>,
    #[serde(default)]
    pub issue_state: Option<String>,
    #[serde(default)]
    pub start_page: Option<String>,
    #[serde(default)]
    pub end_page: Option<String>,
}

/// Link between a nutrient value and its literature reference (`DATSRCLN`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOfDataLink {
    pub ndb_no: NdbNo,
    pub nutrient: NutrientCode,
    pub source_id: String,
}
