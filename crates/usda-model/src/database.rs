//! The fully loaded SR26 snapshot.

use crate::tables::{
    DataDerivation, FoodGroup, FoodItem, Footnote, LangualFactor, LangualFactorDescription,
    NutrientDefinition, NutrientValue, SourceCode, SourceOfData, SourceOfDataLink, Weight,
};

/// All twelve tables of one database release, in file order.
///
/// Nothing here is validated or cross-referenced; the collections are exactly
/// what the data provider read.
#[derive(Debug, Clone, Default)]
pub struct NutrientDatabase {
    pub food_items: Vec<FoodItem>,
    pub nutrient_values: Vec<NutrientValue>,
    pub weights: Vec<Weight>,
    pub footnotes: Vec<Footnote>,
    pub food_groups: Vec<FoodGroup>,
    pub langual_factors: Vec<LangualFactor>,
    pub langual_descriptions: Vec<LangualFactorDescription>,
    pub nutrient_definitions: Vec<NutrientDefinition>,
    pub source_codes: Vec<SourceCode>,
    pub data_derivations: Vec<DataDerivation>,
    pub sources_of_data: Vec<SourceOfData>,
    pub source_links: Vec<SourceOfDataLink>,
}

/// Row counts per table, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub food_items: usize,
    pub nutrient_values: usize,
    pub weights: usize,
    pub footnotes: usize,
    pub food_groups: usize,
    pub langual_factors: usize,
    pub langual_descriptions: usize,
    pub nutrient_definitions: usize,
    pub source_codes: usize,
    pub data_derivations: usize,
    pub sources_of_data: usize,
    pub source_links: usize,
}

impl TableCounts {
    /// Pairs of (source file stem, row count) in file listing order.
    pub fn entries(&self) -> [(&'static str, usize); 12] {
        [
            ("FOOD_DES", self.food_items),
            ("NUT_DATA", self.nutrient_values),
            ("WEIGHT", self.weights),
            ("FOOTNOTE", self.footnotes),
            ("FD_GROUP", self.food_groups),
            ("LANGUAL", self.langual_factors),
            ("LANGDESC", self.langual_descriptions),
            ("NUTR_DEF", self.nutrient_definitions),
            ("SRC_CD", self.source_codes),
            ("DERIV_CD", self.data_derivations),
            ("DATA_SRC", self.sources_of_data),
            ("DATSRCLN", self.source_links),
        ]
    }

    pub fn total(&self) -> usize {
        self.entries().iter().map(|(_, count)| count).sum()
    }
}

impl NutrientDatabase {
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            food_items: self.food_items.len(),
            nutrient_values: self.nutrient_values.len(),
            weights: self.weights.len(),
            footnotes: self.footnotes.len(),
            food_groups: self.food_groups.len(),
            langual_factors: self.langual_factors.len(),
            langual_descriptions: self.langual_descriptions.len(),
            nutrient_definitions: self.nutrient_definitions.len(),
            source_codes: self.source_codes.len(),
            data_derivations: self.data_derivations.len(),
            sources_of_data: self.sources_of_data.len(),
            source_links: self.source_links.len(),
        }
    }
}
