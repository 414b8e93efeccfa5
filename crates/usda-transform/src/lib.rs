//! Joins the normalized SR26 tables into one flat record per food item.

pub mod denormalize;
pub mod error;
pub mod index;
pub mod numeric;

pub use denormalize::{
    DenormalizeReport, Denormalized, curated_unit_mismatches, denormalize, denormalize_items,
};
pub use error::{DenormalizeError, Result};
pub use index::{FoodGroupIndex, NutrientIndex, NutrientValues};
pub use numeric::{parse_decimal, parse_decimal_str};
