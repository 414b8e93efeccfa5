//! Configuration options for denormalization.

use serde::{Deserialize, Serialize};

/// What to do when a food item references a group code missing from `FD_GROUP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodGroupPolicy {
    /// Abort the run on the first unresolved group code.
    Strict,
    /// Leave the group name empty, log a warning and continue.
    #[default]
    Lenient,
}

/// Options controlling denormalization behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenormalizeOptions {
    /// Handling of unresolved food group codes.
    pub food_group_policy: FoodGroupPolicy,

    /// Log a warning when a curated nutrient's `NUTR_DEF` unit differs from the
    /// unit its output column claims.
    pub warn_on_unit_mismatch: bool,
}

impl Default for DenormalizeOptions {
    fn default() -> Self {
        Self {
            food_group_policy: FoodGroupPolicy::Lenient,
            warn_on_unit_mismatch: true,
        }
    }
}

impl DenormalizeOptions {
    /// Options that fail on any unresolved food group.
    pub fn strict() -> Self {
        Self {
            food_group_policy: FoodGroupPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_food_group_policy(mut self, policy: FoodGroupPolicy) -> Self {
        self.food_group_policy = policy;
        self
    }
}
