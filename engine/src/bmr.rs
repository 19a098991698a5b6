//! Basal metabolic rate
//!
//! Two formulas on imperial inputs. Katch-McArdle is preferred whenever a
//! body-fat percentage is known because it works from lean mass directly;
//! otherwise Mifflin-St Jeor is used.

use crate::models::{Profile, Sex};
use crate::units;
use serde::{Deserialize, Serialize};

/// One BMR figure, tagged with the formula that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum BmrEstimate {
    MifflinStJeor { kcal: f64 },
    KatchMcArdle { kcal: f64, lean_mass_kg: f64 },
}

impl BmrEstimate {
    pub fn kcal(&self) -> f64 {
        match self {
            BmrEstimate::MifflinStJeor { kcal } => *kcal,
            BmrEstimate::KatchMcArdle { kcal, .. } => *kcal,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BmrEstimate::MifflinStJeor { .. } => "Mifflin-St Jeor",
            BmrEstimate::KatchMcArdle { .. } => "Katch-McArdle",
        }
    }
}

/// Both formula values, and the one that feeds the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrSelection {
    pub selected: BmrEstimate,
    pub mifflin_st_jeor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub katch_mcardle: Option<f64>,
}

/// Mifflin-St Jeor equation in imperial units
///
/// Men: BMR = 4.536 × weight(lbs) + 15.875 × height(in) - 5 × age + 5
/// Women: BMR = 4.536 × weight(lbs) + 15.875 × height(in) - 5 × age - 161
pub fn mifflin_st_jeor(weight_lbs: f64, height_inches: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 4.536 * weight_lbs + 15.875 * height_inches - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn lean_mass_kg(weight_lbs: f64, body_fat_percent: f64) -> f64 {
    units::lbs_to_kg(weight_lbs) * (1.0 - body_fat_percent / 100.0)
}

/// Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
pub fn katch_mcardle(lean_mass_kg: f64) -> f64 {
    370.0 + 21.6 * lean_mass_kg
}

/// Compute both formulas and pick the primary one
pub fn select_bmr(profile: &Profile) -> BmrSelection {
    let mifflin = mifflin_st_jeor(
        profile.weight_lbs,
        profile.height_inches,
        profile.age_years,
        profile.sex,
    );

    match profile.body_fat_percent {
        Some(body_fat) => {
            let lean = lean_mass_kg(profile.weight_lbs, body_fat);
            let katch = katch_mcardle(lean);
            BmrSelection {
                selected: BmrEstimate::KatchMcArdle {
                    kcal: katch,
                    lean_mass_kg: lean,
                },
                mifflin_st_jeor: mifflin,
                katch_mcardle: Some(katch),
            }
        }
        None => BmrSelection {
            selected: BmrEstimate::MifflinStJeor { kcal: mifflin },
            mifflin_st_jeor: mifflin,
            katch_mcardle: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(body_fat_percent: Option<f64>) -> Profile {
        Profile {
            sex: Sex::Male,
            age_years: 30,
            height_inches: 70.0,
            weight_lbs: 185.0,
            body_fat_percent,
        }
    }

    #[test]
    fn test_mifflin_male() {
        // 4.536*185 + 15.875*70 - 150 + 5
        let bmr = mifflin_st_jeor(185.0, 70.0, 30, Sex::Male);
        assert!((bmr - 1805.41).abs() < 0.01);
    }

    #[test]
    fn test_mifflin_female_offset() {
        let male = mifflin_st_jeor(150.0, 64.0, 40, Sex::Male);
        let female = mifflin_st_jeor(150.0, 64.0, 40, Sex::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle() {
        // 185 lbs at 15% -> 71.3286 kg lean
        let lean = lean_mass_kg(185.0, 15.0);
        assert!((lean - 71.3286).abs() < 1e-4);
        assert!((katch_mcardle(lean) - 1910.70).abs() < 0.01);
    }

    #[test]
    fn test_selection_without_body_fat() {
        let selection = select_bmr(&profile(None));
        assert!(matches!(selection.selected, BmrEstimate::MifflinStJeor { .. }));
        assert_eq!(selection.katch_mcardle, None);
        assert_eq!(selection.selected.kcal(), selection.mifflin_st_jeor);
    }

    #[test]
    fn test_selection_prefers_katch_with_body_fat() {
        let selection = select_bmr(&profile(Some(15.0)));
        assert!(matches!(selection.selected, BmrEstimate::KatchMcArdle { .. }));
        assert_eq!(Some(selection.selected.kcal()), selection.katch_mcardle);
        assert_eq!(selection.selected.name(), "Katch-McArdle");
    }

    #[test]
    fn test_estimate_serializes_with_formula_tag() {
        let json = serde_json::to_value(BmrEstimate::MifflinStJeor { kcal: 1800.0 }).unwrap();
        assert_eq!(json["formula"], "mifflin_st_jeor");
        assert_eq!(json["kcal"], 1800.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every in-range profile has a positive BMR under both formulas
        #[test]
        fn prop_bmr_positive(
            weight in 80.0f64..=500.0,
            height in 48.0f64..=96.0,
            age in 15u32..=100,
            body_fat in 1.0f64..99.0,
        ) {
            prop_assert!(mifflin_st_jeor(weight, height, age, Sex::Female) > 0.0);
            prop_assert!(katch_mcardle(lean_mass_kg(weight, body_fat)) > 0.0);
        }

        /// Heavier body, higher Mifflin-St Jeor BMR
        #[test]
        fn prop_mifflin_increases_with_weight(weight in 80.0f64..499.0) {
            let lighter = mifflin_st_jeor(weight, 70.0, 30, Sex::Male);
            let heavier = mifflin_st_jeor(weight + 1.0, 70.0, 30, Sex::Male);
            prop_assert!(heavier > lighter);
        }
    }
}
