pub mod curated;
pub mod database;
pub mod error;
pub mod ids;
pub mod item;
pub mod options;
pub mod tables;

pub use curated::{
    CURATED_NUTRIENT_COUNT, CURATED_NUTRIENTS, CuratedNutrient, NutrientUnit, curated_by_field,
    curated_position,
};
pub use database::{NutrientDatabase, TableCounts};
pub use error::{ModelError, Result};
pub use ids::{FoodGroupCode, NdbNo, NutrientCode};
pub use item::{DESCRIPTIVE_FIELDS, DenormalizedItem, output_header};
pub use options::{DenormalizeOptions, FoodGroupPolicy};
pub use tables::{
    DataDerivation, FoodGroup, FoodItem, Footnote, LangualFactor, LangualFactorDescription,
    NutrientDefinition, NutrientValue, SourceCode, SourceOfData, SourceOfDataLink, Weight,
};

/// Re-exported so downstream crates name one decimal type.
pub use rust_decimal::Decimal;
