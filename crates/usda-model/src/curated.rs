//! The fixed set of nutrients exposed as named columns of the flat table.
//!
//! Every entry pairs a nutrient code from `NUTR_DEF` with a descriptive name and
//! the unit its values are expressed in. The output column is
//! `<name>_<unit suffix>`, e.g. `Protein_Grams` or `VitaminC_Mg`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::NutrientCode;

/// Unit of a curated nutrient value (per 100 g edible portion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientUnit {
    Grams,
    Milligrams,
    Micrograms,
    Kilocalories,
    Kilojoules,
    InternationalUnits,
    RetinolActivityEquivalents,
}

impl NutrientUnit {
    /// Suffix appended to the output column name.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Grams => "Grams",
            Self::Milligrams => "Mg",
            Self::Micrograms => "Ug",
            Self::Kilocalories => "Kcal",
            Self::Kilojoules => "KJ",
            Self::InternationalUnits => "IU",
            Self::RetinolActivityEquivalents => "RAE",
        }
    }

    /// Whether a `NUTR_DEF` units string denotes this unit.
    pub fn matches_source_units(self, units: &str) -> bool {
        let units = units.trim();
        let accepted: &[&str] = match self {
            Self::Grams => &["g"],
            Self::Milligrams => &["mg"],
            Self::Micrograms => &["\u{b5}g", "\u{3bc}g", "ug", "mcg"],
            Self::Kilocalories => &["kcal"],
            Self::Kilojoules => &["kj"],
            Self::InternationalUnits => &["iu"],
            Self::RetinolActivityEquivalents => &["\u{b5}g_rae", "\u{3bc}g_rae", "ug_rae", "rae"],
        };
        accepted
            .iter()
            .any(|candidate| units.eq_ignore_ascii_case(candidate))
    }
}

impl fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// One row of the curated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedNutrient {
    pub code: NutrientCode,
    pub name: &'static str,
    pub unit: NutrientUnit,
}

impl CuratedNutrient {
    const fn new(code: u16, name: &'static str, unit: NutrientUnit) -> Self {
        Self {
            code: NutrientCode::new(code),
            name,
            unit,
        }
    }

    /// Output column name.
    pub fn field_name(&self) -> String {
        format!("{}_{}", self.name, self.unit.suffix())
    }
}

/// Position of a curated nutrient in [`CURATED_NUTRIENTS`].
pub fn curated_position(code: NutrientCode) -> Option<usize> {
    CURATED_NUTRIENTS.iter().position(|entry| entry.code == code)
}

/// Looks up a curated nutrient by its output column name.
pub fn curated_by_field(field: &str) -> Option<(usize, &'static CuratedNutrient)> {
    CURATED_NUTRIENTS
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.field_name() == field)
}

pub const CURATED_NUTRIENT_COUNT: usize = CURATED_NUTRIENTS.len();

use NutrientUnit::{
    Grams as G, InternationalUnits as IU, Kilocalories as KCAL, Kilojoules as KJ,
    Micrograms as UG, Milligrams as MG, RetinolActivityEquivalents as RAE,
};

/// Curated nutrients in output column order (ascending nutrient code).
pub const CURATED_NUTRIENTS: &[CuratedNutrient] = &[
    // Proximates
    CuratedNutrient::new(203, "Protein", G),
    CuratedNutrient::new(204, "Fat", G),
    CuratedNutrient::new(205, "Carbohydrate", G),
    CuratedNutrient::new(207, "Ash", G),
    CuratedNutrient::new(208, "Energy", KCAL),
    CuratedNutrient::new(209, "Starch", G),
    CuratedNutrient::new(210, "Sucrose", G),
    CuratedNutrient::new(211, "Glucose", G),
    CuratedNutrient::new(212, "Fructose", G),
    CuratedNutrient::new(213, "Lactose", G),
    CuratedNutrient::new(214, "Maltose", G),
    CuratedNutrient::new(221, "AlcoholEthyl", G),
    CuratedNutrient::new(255, "Water", G),
    CuratedNutrient::new(257, "AdjustedProtein", G),
    CuratedNutrient::new(262, "Caffeine", MG),
    CuratedNutrient::new(263, "Theobromine", MG),
    CuratedNutrient::new(268, "Energy", KJ),
    CuratedNutrient::new(269, "Sugar", G),
    CuratedNutrient::new(287, "Galactose", G),
    CuratedNutrient::new(291, "FiberTotalDietary", G),
    // Minerals
    CuratedNutrient::new(301, "Calcium", MG),
    CuratedNutrient::new(303, "Iron", MG),
    CuratedNutrient::new(304, "Magnesium", MG),
    CuratedNutrient::new(305, "Phosphorus", MG),
    CuratedNutrient::new(306, "Potassium", MG),
    CuratedNutrient::new(307, "Sodium", MG),
    CuratedNutrient::new(309, "Zinc", MG),
    CuratedNutrient::new(312, "Copper", MG),
    CuratedNutrient::new(313, "Fluoride", UG),
    CuratedNutrient::new(315, "Manganese", MG),
    CuratedNutrient::new(317, "Selenium", UG),
    // Vitamins
    CuratedNutrient::new(318, "VitaminA", IU),
    CuratedNutrient::new(319, "Retinol", UG),
    CuratedNutrient::new(320, "VitaminA", RAE),
    CuratedNutrient::new(321, "CaroteneBeta", UG),
    CuratedNutrient::new(322, "CaroteneAlpha", UG),
    CuratedNutrient::new(323, "VitaminE", MG),
    CuratedNutrient::new(324, "VitaminD", IU),
    CuratedNutrient::new(325, "VitaminD2", UG),
    CuratedNutrient::new(326, "VitaminD3", UG),
    CuratedNutrient::new(328, "VitaminD2D3Sum", UG),
    CuratedNutrient::new(334, "Cryptoxanthin", UG),
    CuratedNutrient::new(337, "Lycopene", UG),
    CuratedNutrient::new(338, "LuteinAndZeaxanthin", UG),
    CuratedNutrient::new(341, "TocopherolBeta", MG),
    CuratedNutrient::new(342, "TocopherolGamma", MG),
    CuratedNutrient::new(343, "TocopherolDelta", MG),
    CuratedNutrient::new(344, "TocotrienolAlpha", MG),
    CuratedNutrient::new(345, "TocotrienolBeta", MG),
    CuratedNutrient::new(346, "TocotrienolGamma", MG),
    CuratedNutrient::new(347, "TocotrienolDelta", MG),
    CuratedNutrient::new(401, "VitaminC", MG),
    CuratedNutrient::new(404, "Thiamin", MG),
    CuratedNutrient::new(405, "Riboflavin", MG),
    CuratedNutrient::new(406, "Niacin", MG),
    CuratedNutrient::new(410, "PantothenicAcid", MG),
    CuratedNutrient::new(415, "VitaminB6", MG),
    CuratedNutrient::new(417, "FolateTotal", UG),
    CuratedNutrient::new(418, "VitaminB12", UG),
    CuratedNutrient::new(421, "CholineTotal", MG),
    CuratedNutrient::new(428, "Menaquinone4", UG),
    CuratedNutrient::new(429, "Dihydrophylloquinone", UG),
    CuratedNutrient::new(430, "VitaminK", UG),
    CuratedNutrient::new(431, "FolicAcid", UG),
    CuratedNutrient::new(432, "FolateFood", UG),
    CuratedNutrient::new(435, "FolateDFE", UG),
    CuratedNutrient::new(454, "Betaine", MG),
    // Amino acids
    CuratedNutrient::new(501, "Tryptophan", G),
    CuratedNutrient::new(502, "Threonine", G),
    CuratedNutrient::new(503, "Isoleucine", G),
    CuratedNutrient::new(504, "Leucine", G),
    CuratedNutrient::new(505, "Lysine", G),
    CuratedNutrient::new(506, "Methionine", G),
    CuratedNutrient::new(507, "Cystine", G),
    CuratedNutrient::new(508, "Phenylalanine", G),
    CuratedNutrient::new(509, "Tyrosine", G),
    CuratedNutrient::new(510, "Valine", G),
    CuratedNutrient::new(511, "Arginine", G),
    CuratedNutrient::new(512, "Histidine", G),
    CuratedNutrient::new(513, "Alanine", G),
    CuratedNutrient::new(514, "AsparticAcid", G),
    CuratedNutrient::new(515, "GlutamicAcid", G),
    CuratedNutrient::new(516, "Glycine", G),
    CuratedNutrient::new(517, "Proline", G),
    CuratedNutrient::new(518, "Serine", G),
    CuratedNutrient::new(521, "Hydroxyproline", G),
    // Added vitamins
    CuratedNutrient::new(573, "VitaminEAdded", MG),
    CuratedNutrient::new(578, "VitaminB12Added", UG),
    // Lipids
    CuratedNutrient::new(601, "Cholesterol", MG),
    CuratedNutrient::new(605, "FattyAcidsTotalTrans", G),
    CuratedNutrient::new(606, "FattyAcidsTotalSaturated", G),
    CuratedNutrient::new(607, "F4D0", G),
    CuratedNutrient::new(608, "F6D0", G),
    CuratedNutrient::new(609, "F8D0", G),
    CuratedNutrient::new(610, "F10D0", G),
    CuratedNutrient::new(611, "F12D0", G),
    CuratedNutrient::new(612, "F14D0", G),
    CuratedNutrient::new(613, "F16D0", G),
    CuratedNutrient::new(614, "F18D0", G),
    CuratedNutrient::new(615, "F20D0", G),
    CuratedNutrient::new(617, "F18D1", G),
    CuratedNutrient::new(618, "F18D2", G),
    CuratedNutrient::new(619, "F18D3", G),
    CuratedNutrient::new(620, "F20D4", G),
    CuratedNutrient::new(621, "F22D6", G),
    CuratedNutrient::new(624, "F22D0", G),
    CuratedNutrient::new(625, "F14D1", G),
    CuratedNutrient::new(626, "F16D1", G),
    CuratedNutrient::new(627, "F18D4", G),
    CuratedNutrient::new(628, "F20D1", G),
    CuratedNutrient::new(629, "F20D5", G),
    CuratedNutrient::new(630, "F22D1", G),
    CuratedNutrient::new(631, "F22D5", G),
    CuratedNutrient::new(636, "Phytosterols", MG),
    CuratedNutrient::new(638, "Stigmasterol", MG),
    CuratedNutrient::new(639, "Campesterol", MG),
    CuratedNutrient::new(641, "BetaSitosterol", MG),
    CuratedNutrient::new(645, "FattyAcidsTotalMonounsaturated", G),
    CuratedNutrient::new(646, "FattyAcidsTotalPolyunsaturated", G),
    CuratedNutrient::new(652, "F15D0", G),
    CuratedNutrient::new(653, "F17D0", G),
    CuratedNutrient::new(654, "F24D0", G),
    CuratedNutrient::new(662, "F16D1T", G),
    CuratedNutrient::new(663, "F18D1T", G),
    CuratedNutrient::new(664, "F22D1T", G),
    CuratedNutrient::new(665, "F18D2TNotFurtherDefined", G),
    CuratedNutrient::new(666, "F18D2I", G),
    CuratedNutrient::new(669, "F18D2TT", G),
    CuratedNutrient::new(670, "F18D2CLA", G),
    CuratedNutrient::new(671, "F24D1C", G),
    CuratedNutrient::new(672, "F20D2CN6", G),
    CuratedNutrient::new(673, "F16D1C", G),
    CuratedNutrient::new(674, "F18D1C", G),
    CuratedNutrient::new(675, "F18D2CN6", G),
    CuratedNutrient::new(676, "F22D1C", G),
    CuratedNutrient::new(685, "F18D3CN6", G),
    CuratedNutrient::new(687, "F17D1", G),
    CuratedNutrient::new(689, "F20D3", G),
    CuratedNutrient::new(693, "FattyAcidsTotalTransMonoenoic", G),
    CuratedNutrient::new(695, "FattyAcidsTotalTransPolyenoic", G),
    CuratedNutrient::new(696, "F13D0", G),
    CuratedNutrient::new(697, "F15D1", G),
    CuratedNutrient::new(851, "F18D3CN3", G),
    CuratedNutrient::new(852, "F20D3N3", G),
    CuratedNutrient::new(853, "F20D3N6", G),
    CuratedNutrient::new(855, "F20D4N6", G),
    CuratedNutrient::new(856, "F18D3I", G),
    CuratedNutrient::new(857, "F21D5", G),
    CuratedNutrient::new(858, "F22D4", G),
    CuratedNutrient::new(859, "F18D1TN7", G),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn codes_are_unique_and_ascending() {
        let codes: Vec<u16> = CURATED_NUTRIENTS.iter().map(|n| n.code.get()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn field_names_are_unique() {
        let names: BTreeSet<String> = CURATED_NUTRIENTS
            .iter()
            .map(CuratedNutrient::field_name)
            .collect();
        assert_eq!(names.len(), CURATED_NUTRIENT_COUNT);
    }

    #[test]
    fn normalized_column_names() {
        let field = |code| {
            let idx = curated_position(NutrientCode::new(code)).unwrap();
            CURATED_NUTRIENTS[idx].field_name()
        };
        assert_eq!(field(263), "Theobromine_Mg");
        assert_eq!(field(313), "Fluoride_Ug");
        assert_eq!(field(418), "VitaminB12_Ug");
        assert_eq!(field(421), "CholineTotal_Mg");
        assert_eq!(field(665), "F18D2TNotFurtherDefined_Grams");
        assert_eq!(field(693), "FattyAcidsTotalTransMonoenoic_Grams");
        assert!(curated_by_field("Theoboromine_Mg").is_none());
    }

    #[test]
    fn energy_has_two_units() {
        assert_eq!(CURATED_NUTRIENTS[4].field_name(), "Energy_Kcal");
        let kj = curated_position(NutrientCode::new(268)).unwrap();
        assert_eq!(CURATED_NUTRIENTS[kj].field_name(), "Energy_KJ");
    }

    #[test]
    fn source_units_match() {
        assert!(NutrientUnit::Micrograms.matches_source_units("\u{b5}g"));
        assert!(NutrientUnit::Kilojoules.matches_source_units("kJ"));
        assert!(!NutrientUnit::Grams.matches_source_units("mg"));
    }
}
