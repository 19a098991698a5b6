//! Input normalization
//!
//! Checks every numeric field against its physiological range and clips
//! sleep hours. Checks run profile → diet → activity → workout → sleep →
//! trend; the first failure is returned.

use crate::errors::{EngineWarning, ValidationError};
use crate::models::TdeeInput;

// ============================================================================
// Ranges
// ============================================================================

pub const AGE_RANGE: (f64, f64) = (15.0, 100.0);
pub const HEIGHT_INCHES_RANGE: (f64, f64) = (48.0, 96.0);
pub const WEIGHT_LBS_RANGE: (f64, f64) = (80.0, 500.0);
pub const MAX_DAILY_CALORIES: f64 = 10_000.0;
pub const PROTEIN_G_RANGE: (f64, f64) = (0.0, 500.0);
pub const CARBS_G_RANGE: (f64, f64) = (0.0, 1000.0);
pub const FAT_G_RANGE: (f64, f64) = (0.0, 300.0);
pub const MAX_DAILY_STEPS: u32 = 50_000;
pub const SEDENTARY_HOURS_RANGE: (f64, f64) = (0.0, 24.0);
pub const WORKOUTS_PER_WEEK_RANGE: (f64, f64) = (0.0, 14.0);
pub const DURATION_MINUTES_RANGE: (f64, f64) = (0.0, 300.0);
pub const SLEEP_HOURS_RANGE: (f64, f64) = (3.0, 12.0);

/// Input that passed every range check, plus any non-fatal adjustments made
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub input: TdeeInput,
    pub warnings: Vec<EngineWarning>,
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::not_finite(field))
    }
}

fn in_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    let value = finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, value, min, max));
    }
    Ok(())
}

/// Zero and negatives report as `not_positive` before the range check
fn positive_in_range(
    field: &'static str,
    value: f64,
    range: (f64, f64),
) -> Result<(), ValidationError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::not_positive(field, value));
    }
    in_range(field, value, range)
}

fn calories(field: &'static str, value: f64) -> Result<(), ValidationError> {
    positive_in_range(field, value, (0.0, MAX_DAILY_CALORIES))
}

/// Clip sleep hours into the supported window
///
/// Returns the used value and, when it differs from the reported one, a
/// warning recording both.
pub fn clip_sleep_hours(hours: f64) -> Result<(f64, Option<EngineWarning>), ValidationError> {
    if hours.is_nan() {
        return Err(ValidationError::not_finite("sleep.hours"));
    }
    let (min, max) = SLEEP_HOURS_RANGE;
    let used = hours.clamp(min, max);
    let warning = (used != hours).then_some(EngineWarning::SleepHoursClipped {
        reported: hours,
        used,
    });
    Ok((used, warning))
}

/// Validate and clip a raw input bundle
///
/// # Errors
///
/// Returns a `ValidationError` naming the first field that is non-finite or
/// outside its documented range. A missing body-fat percentage is not an
/// error.
pub fn normalize(input: &TdeeInput) -> Result<Normalized, ValidationError> {
    let mut warnings = Vec::new();

    let profile = &input.profile;
    if profile.age_years == 0 {
        return Err(ValidationError::not_positive("profile.age_years", 0.0));
    }
    in_range("profile.age_years", f64::from(profile.age_years), AGE_RANGE)?;
    positive_in_range("profile.height_inches", profile.height_inches, HEIGHT_INCHES_RANGE)?;
    positive_in_range("profile.weight_lbs", profile.weight_lbs, WEIGHT_LBS_RANGE)?;
    if let Some(body_fat) = profile.body_fat_percent {
        let body_fat = finite("profile.body_fat_percent", body_fat)?;
        if body_fat <= 0.0 || body_fat >= 100.0 {
            return Err(ValidationError::new(
                "profile.body_fat_percent",
                format!("must be greater than 0 and less than 100 (got {})", body_fat),
            ));
        }
    }

    let diet = &input.diet;
    calories("diet.calories", diet.calories)?;
    in_range("diet.protein_g", diet.protein_g, PROTEIN_G_RANGE)?;
    in_range("diet.carbs_g", diet.carbs_g, CARBS_G_RANGE)?;
    in_range("diet.fat_g", diet.fat_g, FAT_G_RANGE)?;

    let activity = &input.activity;
    if activity.daily_steps > MAX_DAILY_STEPS {
        return Err(ValidationError::out_of_range(
            "activity.daily_steps",
            f64::from(activity.daily_steps),
            0.0,
            f64::from(MAX_DAILY_STEPS),
        ));
    }
    in_range("activity.sedentary_hours", activity.sedentary_hours, SEDENTARY_HOURS_RANGE)?;

    let workout = &input.workout;
    in_range(
        "workout.workouts_per_week",
        workout.workouts_per_week,
        WORKOUTS_PER_WEEK_RANGE,
    )?;
    in_range("workout.duration_minutes", workout.duration_minutes, DURATION_MINUTES_RANGE)?;

    let (sleep_hours, clipped) = clip_sleep_hours(input.sleep.hours)?;
    warnings.extend(clipped);

    if let Some(trend) = &input.weight_trend {
        positive_in_range(
            "weight_trend.start_weight_lbs",
            trend.start_weight_lbs,
            WEIGHT_LBS_RANGE,
        )?;
        positive_in_range(
            "weight_trend.end_weight_lbs",
            trend.end_weight_lbs,
            WEIGHT_LBS_RANGE,
        )?;
        if trend.days == 0 {
            return Err(ValidationError::division_guard("weight_trend.days"));
        }
        calories(
            "weight_trend.average_daily_calories",
            trend.average_daily_calories,
        )?;
    }

    let mut input = input.clone();
    input.sleep.hours = sleep_hours;

    Ok(Normalized { input, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn valid_input() -> TdeeInput {
        TdeeInput {
            profile: Profile {
                sex: Sex::Male,
                age_years: 30,
                height_inches: 70.0,
                weight_lbs: 185.0,
                body_fat_percent: None,
            },
            diet: DietInput {
                calories: 2300.0,
                protein_g: 160.0,
                carbs_g: 250.0,
                fat_g: 70.0,
            },
            activity: ActivityInput {
                daily_steps: 10_000,
                pace: WalkingPace::Average,
                job_type: JobType::Desk,
                sedentary_hours: 8.0,
            },
            workout: WorkoutInput::default(),
            sleep: SleepInput {
                hours: 7.5,
                quality: SleepQuality::Good,
            },
            weight_trend: None,
            goal: Goal::Maintenance,
        }
    }

    #[test]
    fn test_valid_input_passes_unchanged() {
        let input = valid_input();
        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.input, input);
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_zero_age_is_not_positive() {
        let mut input = valid_input();
        input.profile.age_years = 0;
        let err = normalize(&input).unwrap_err();
        assert_eq!(err.field, "profile.age_years");
        assert!(err.message.contains("greater than 0"));
    }

    #[rstest]
    #[case::negative_weight(|i: &mut TdeeInput| i.profile.weight_lbs = -5.0, "profile.weight_lbs")]
    #[case::tiny_height(|i: &mut TdeeInput| i.profile.height_inches = 30.0, "profile.height_inches")]
    #[case::old_age(|i: &mut TdeeInput| i.profile.age_years = 120, "profile.age_years")]
    #[case::zero_calories(|i: &mut TdeeInput| i.diet.calories = 0.0, "diet.calories")]
    #[case::nan_protein(|i: &mut TdeeInput| i.diet.protein_g = f64::NAN, "diet.protein_g")]
    #[case::too_much_fat(|i: &mut TdeeInput| i.diet.fat_g = 301.0, "diet.fat_g")]
    #[case::too_many_steps(|i: &mut TdeeInput| i.activity.daily_steps = 60_000, "activity.daily_steps")]
    #[case::long_sedentary(|i: &mut TdeeInput| i.activity.sedentary_hours = 25.0, "activity.sedentary_hours")]
    #[case::daily_doubles(|i: &mut TdeeInput| i.workout.workouts_per_week = 15.0, "workout.workouts_per_week")]
    #[case::nan_sleep(|i: &mut TdeeInput| i.sleep.hours = f64::NAN, "sleep.hours")]
    #[case::full_body_fat(|i: &mut TdeeInput| i.profile.body_fat_percent = Some(100.0), "profile.body_fat_percent")]
    fn test_rejects_field(#[case] mutate: fn(&mut TdeeInput), #[case] field: &str) {
        let mut input = valid_input();
        mutate(&mut input);
        let err = normalize(&input).unwrap_err();
        assert_eq!(err.field, field);
    }

    #[test]
    fn test_first_failure_wins() {
        let mut input = valid_input();
        input.profile.weight_lbs = 0.0;
        input.diet.calories = -1.0;
        assert_eq!(normalize(&input).unwrap_err().field, "profile.weight_lbs");
    }

    #[test]
    fn test_trend_days_zero_is_division_guard() {
        let mut input = valid_input();
        input.weight_trend = Some(WeightTrendInput {
            start_weight_lbs: 187.0,
            end_weight_lbs: 185.0,
            days: 0,
            average_daily_calories: 2500.0,
        });
        let err = normalize(&input).unwrap_err();
        assert_eq!(err.field, "weight_trend.days");
        assert_eq!(err.message, "must be non-zero");
    }

    #[test]
    fn test_short_trend_is_not_an_error() {
        let mut input = valid_input();
        input.weight_trend = Some(WeightTrendInput {
            start_weight_lbs: 187.0,
            end_weight_lbs: 185.0,
            days: 3,
            average_daily_calories: 2500.0,
        });
        assert!(normalize(&input).is_ok());
    }

    #[rstest]
    #[case(1.5, 3.0)]
    #[case(14.0, 12.0)]
    #[case(f64::INFINITY, 12.0)]
    fn test_sleep_hours_clipped_with_warning(#[case] reported: f64, #[case] used: f64) {
        let mut input = valid_input();
        input.sleep.hours = reported;
        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.input.sleep.hours, used);
        assert_eq!(
            normalized.warnings,
            vec![EngineWarning::SleepHoursClipped { reported, used }]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Clipped sleep hours always land inside the supported window
        #[test]
        fn prop_sleep_hours_within_window(hours in -10.0f64..30.0) {
            let (used, _) = clip_sleep_hours(hours).unwrap();
            prop_assert!((SLEEP_HOURS_RANGE.0..=SLEEP_HOURS_RANGE.1).contains(&used));
        }

        /// In-range weights never fail validation
        #[test]
        fn prop_in_range_weight_accepted(weight in 80.0f64..=500.0) {
            let mut input = valid_input();
            input.profile.weight_lbs = weight;
            prop_assert!(normalize(&input).is_ok());
        }
    }
}
