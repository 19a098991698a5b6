//! Thermic effect of food

use crate::config::TefConfig;
use crate::models::DietInput;
use serde::{Deserialize, Serialize};

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TefBreakdown {
    pub protein_kcal: f64,
    pub carbs_kcal: f64,
    pub fat_kcal: f64,
    pub total: f64,
    /// TEF as a share of reported calories
    pub percent_of_intake: f64,
    /// No macros were reported and the flat rate on calories was used
    pub used_fallback: bool,
}

/// Calculate TEF from macro grams
///
/// TEF = 4 × protein × 25% + 4 × carbs × 7.5% + 9 × fat × 1.5%
///
/// With no macro grams at all, falls back to a flat share of calories.
pub fn thermic_effect(diet: &DietInput, config: &TefConfig) -> TefBreakdown {
    let no_macros = diet.protein_g == 0.0 && diet.carbs_g == 0.0 && diet.fat_g == 0.0;

    let (protein_kcal, carbs_kcal, fat_kcal, total) = if no_macros {
        (0.0, 0.0, 0.0, diet.calories * config.fallback_rate)
    } else {
        let protein = diet.protein_g * KCAL_PER_G_PROTEIN * config.protein_rate;
        let carbs = diet.carbs_g * KCAL_PER_G_CARBS * config.carbs_rate;
        let fat = diet.fat_g * KCAL_PER_G_FAT * config.fat_rate;
        (protein, carbs, fat, protein + carbs + fat)
    };

    let percent_of_intake = if diet.calories > 0.0 {
        total / diet.calories * 100.0
    } else {
        0.0
    };

    TefBreakdown {
        protein_kcal,
        carbs_kcal,
        fat_kcal,
        total,
        percent_of_intake,
        used_fallback: no_macros,
    }
}
