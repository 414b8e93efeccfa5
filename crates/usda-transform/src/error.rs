use thiserror::Error;

use usda_model::{FoodGroupCode, NdbNo};

/// Errors that abort denormalization.
#[derive(Debug, Error)]
pub enum DenormalizeError {
    /// A food item references a group code missing from `FD_GROUP`.
    #[error("food item {ndb_no} references unknown food group {food_group}")]
    UnknownFoodGroup {
        ndb_no: NdbNo,
        food_group: FoodGroupCode,
    },
}

pub type Result<T> = std::result::Result<T, DenormalizeError>;
