//! Lookup structures built once over the normalized tables.
//!
//! Joining every food item against `NUT_DATA` directly costs a full table scan
//! per item and nutrient. Both indexes here are built once per run and only
//! read afterwards; they borrow from the loaded tables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, warn};

use usda_model::{FoodGroup, FoodGroupCode, NdbNo, NutrientCode, NutrientDefinition, NutrientValue};

/// Raw value per food item for one nutrient.
pub type NutrientValues<'a> = HashMap<NdbNo, Option<&'a str>>;

/// Raw nutrient values keyed by nutrient code, then by food item.
///
/// Every code in `NUTR_DEF` has an entry, even when no row in `NUT_DATA`
/// references it. Rows for codes missing from `NUTR_DEF` are not indexed.
/// When the same (item, nutrient) pair occurs twice the later row wins.
#[derive(Debug, Default)]
pub struct NutrientIndex<'a> {
    by_code: HashMap<NutrientCode, NutrientValues<'a>>,
    duplicates: usize,
    undefined_rows: usize,
}

impl<'a> NutrientIndex<'a> {
    pub fn build(definitions: &[NutrientDefinition], values: &'a [NutrientValue]) -> Self {
        let mut by_code: HashMap<NutrientCode, NutrientValues<'a>> = definitions
            .iter()
            .map(|definition| (definition.code, HashMap::new()))
            .collect();
        let mut duplicates = 0usize;
        let mut undefined_rows = 0usize;

        for row in values {
            let Some(per_item) = by_code.get_mut(&row.nutrient) else {
                undefined_rows += 1;
                continue;
            };
            if per_item.insert(row.ndb_no, row.value.as_deref()).is_some() {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(
                duplicate_rows = duplicates,
                "duplicate nutrient values; later rows replace earlier ones"
            );
        }
        if undefined_rows > 0 {
            debug!(
                undefined_rows,
                "nutrient values reference codes missing from NUTR_DEF"
            );
        }
        debug!(
            nutrient_count = by_code.len(),
            value_count = values.len(),
            "nutrient index built"
        );

        Self {
            by_code,
            duplicates,
            undefined_rows,
        }
    }

    /// Values for one nutrient; `None` only when the code is not defined.
    pub fn nutrient(&self, code: NutrientCode) -> Option<&NutrientValues<'a>> {
        self.by_code.get(&code)
    }

    /// Raw value of a nutrient for a food item.
    ///
    /// `None` when either the code or the pair is unknown, or the source row
    /// left the value blank.
    pub fn raw_value(&self, code: NutrientCode, ndb_no: NdbNo) -> Option<&'a str> {
        self.by_code
            .get(&code)
            .and_then(|per_item| per_item.get(&ndb_no).copied().flatten())
    }

    pub fn contains_nutrient(&self, code: NutrientCode) -> bool {
        self.by_code.contains_key(&code)
    }

    pub fn nutrient_count(&self) -> usize {
        self.by_code.len()
    }

    /// Rows that replaced an earlier row for the same (item, nutrient) pair.
    pub fn duplicate_rows(&self) -> usize {
        self.duplicates
    }

    /// Rows whose nutrient code has no definition.
    pub fn undefined_rows(&self) -> usize {
        self.undefined_rows
    }
}

/// Food group names keyed by group code.
///
/// Names are shared, so every item of a group points at the same string.
/// Duplicate codes keep the later description.
#[derive(Debug, Default)]
pub struct FoodGroupIndex {
    names: HashMap<FoodGroupCode, Arc<str>>,
}

impl FoodGroupIndex {
    pub fn build(groups: &[FoodGroup]) -> Self {
        let mut names = HashMap::with_capacity(groups.len());
        for group in groups {
            match names.entry(group.code) {
                Entry::Occupied(mut slot) => {
                    warn!(
                        food_group = %group.code,
                        "duplicate food group code; keeping the later description"
                    );
                    slot.insert(Arc::from(group.description.as_str()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::from(group.description.as_str()));
                }
            }
        }
        Self { names }
    }

    pub fn get(&self, code: FoodGroupCode) -> Option<&Arc<str>> {
        self.names.get(&code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
