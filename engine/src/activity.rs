//! Non-exercise activity thermogenesis (NEAT)
//!
//! Two additive terms:
//!
//! - **Steps**: MET(pace) × weight(kg) × walking hours, where walking hours
//!   come from step count × stride (41.4% of height) ÷ pace speed.
//! - **Lifestyle**: whatever the job-type multiplier on base BMR implies
//!   beyond what the steps already explain, never negative.

use crate::config::{ActivityConfig, SedentaryBand};
use crate::models::{ActivityInput, Profile};
use serde::{Deserialize, Serialize};

const CM_PER_KM: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeatBreakdown {
    pub steps_kcal: f64,
    pub lifestyle_kcal: f64,
    /// Before any sleep adjustment
    pub total: f64,
    pub walking_hours: f64,
    pub distance_km: f64,
    /// Job multiplier after the sedentary-hours factor
    pub lifestyle_multiplier: f64,
}

/// Factor for the highest sedentary band whose threshold is exceeded
pub fn sedentary_factor(hours: f64, bands: &[SedentaryBand]) -> f64 {
    bands
        .iter()
        .filter(|band| hours > band.above_hours)
        .max_by(|a, b| a.above_hours.total_cmp(&b.above_hours))
        .map_or(1.0, |band| band.factor)
}

/// Walking distance in km for a step count at a given height
pub fn walking_distance_km(steps: u32, height_cm: f64, config: &ActivityConfig) -> f64 {
    let stride_cm = height_cm * config.stride_fraction_of_height;
    f64::from(steps) * stride_cm / CM_PER_KM
}

/// Calculate NEAT from steps, job type and sedentary time
///
/// `base_bmr` is the selected BMR before any sleep penalty.
pub fn non_exercise_activity(
    activity: &ActivityInput,
    profile: &Profile,
    base_bmr: f64,
    config: &ActivityConfig,
) -> NeatBreakdown {
    let pace = config.paces.get(activity.pace);
    let distance_km = walking_distance_km(activity.daily_steps, profile.height_cm(), config);
    let walking_hours = distance_km / pace.speed_kmh;
    let steps_kcal = pace.met * profile.weight_kg() * walking_hours;

    let lifestyle_multiplier = config.job_multipliers.get(activity.job_type)
        * sedentary_factor(activity.sedentary_hours, &config.sedentary_bands);
    let lifestyle_kcal = (base_bmr * (lifestyle_multiplier - 1.0) - steps_kcal).max(0.0);

    NeatBreakdown {
        steps_kcal,
        lifestyle_kcal,
        total: steps_kcal + lifestyle_kcal,
        walking_hours,
        distance_km,
        lifestyle_multiplier,
    }
}
