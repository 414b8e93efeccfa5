#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// 5-digit Nutrient Databank number identifying a food item.
///
/// The source pads it with leading zeros; the numeric value is what identifies
/// the item, so `"01001"` and `"1001"` are the same key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NdbNo(u32);

impl NdbNo {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NdbNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// 3-digit nutrient number from the nutrient definition table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NutrientCode(u16);

impl NutrientCode {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for NutrientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// 4-digit food group code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FoodGroupCode(u16);

impl FoodGroupCode {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FoodGroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_to_source_width() {
        assert_eq!(NdbNo::new(1001).to_string(), "01001");
        assert_eq!(NutrientCode::new(3).to_string(), "003");
        assert_eq!(FoodGroupCode::new(100).to_string(), "0100");
    }

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(NdbNo::new(1001) < NdbNo::new(10_001));
        assert!(NutrientCode::new(208) > NutrientCode::new(203));
    }
}
