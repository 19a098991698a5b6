//! Exercise activity thermogenesis (EAT) and post-exercise afterburn (EPOC)
//!
//! Both are computed per session and then amortized into a daily figure by
//! `workouts_per_week / 7`.

use crate::config::WorkoutConfig;
use crate::models::{Profile, WorkoutInput};
use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: f64 = 7.0;
const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExpenditure {
    pub eat_per_session: f64,
    pub epoc_per_session: f64,
    pub eat_daily: f64,
    pub epoc_daily: f64,
    pub sessions_per_week: f64,
}

/// Calculate daily-amortized EAT and EPOC
///
/// EAT/session = MET(type, intensity) × weight(kg) / 60 × minutes × rest factor
/// EPOC/session = rate(type, intensity) × hours × window × style factor
///
/// Workout types without coefficients, and zero frequency, yield zeros.
pub fn workout_expenditure(
    workout: &WorkoutInput,
    profile: &Profile,
    config: &WorkoutConfig,
) -> WorkoutExpenditure {
    let met = config
        .exercise_mets
        .get(workout.workout_type, workout.intensity);
    let epoc_rate = config.epoc_rates.get(workout.workout_type, workout.intensity);

    let (Some(met), Some(epoc_rate)) = (met, epoc_rate) else {
        return WorkoutExpenditure {
            sessions_per_week: workout.workouts_per_week,
            ..Default::default()
        };
    };
    if workout.workouts_per_week <= 0.0 {
        return WorkoutExpenditure::default();
    }

    let kcal_per_minute = met * profile.weight_kg() / MINUTES_PER_HOUR;
    let eat_per_session = kcal_per_minute
        * workout.duration_minutes
        * config.rest_length_factors.get(workout.rest_length);

    let session_hours = workout.duration_minutes / MINUTES_PER_HOUR;
    let epoc_per_session = epoc_rate
        * session_hours
        * config.epoc_window_hours
        * config.training_style_factors.get(workout.training_style);

    let frequency = workout.workouts_per_week / DAYS_PER_WEEK;

    WorkoutExpenditure {
        eat_per_session,
        epoc_per_session,
        eat_daily: eat_per_session * frequency,
        epoc_daily: epoc_per_session * frequency,
        sessions_per_week: workout.workouts_per_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        RestLength, Sex, TrainingStyle, WorkoutIntensity, WorkoutType,
    };
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile() -> Profile {
        Profile {
            sex: Sex::Male,
            age_years: 30,
            height_inches: 70.0,
            weight_lbs: 185.0,
            body_fat_percent: None,
        }
    }

    fn lifting(per_week: f64, minutes: f64) -> WorkoutInput {
        WorkoutInput {
            workouts_per_week: per_week,
            workout_type: WorkoutType::HeavyLifting,
            duration_minutes: minutes,
            intensity: WorkoutIntensity::High,
            rest_length: RestLength::Moderate,
            training_style: TrainingStyle::Traditional,
        }
    }

    #[test]
    fn test_heavy_lifting_four_times_a_week() {
        let result = workout_expenditure(&lifting(4.0, 75.0), &profile(), &WorkoutConfig::default());
        assert!((result.eat_per_session - 629.37).abs() < 1e-6);
        assert!((result.eat_daily - 359.64).abs() < 0.01);
        assert!((result.epoc_per_session - 105.0).abs() < 1e-9);
        assert!((result.epoc_daily - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_hour_lifting_epoc_reference() {
        // ~168 kcal over 14 hours for a two-hour heavy session
        let result = workout_expenditure(&lifting(7.0, 120.0), &profile(), &WorkoutConfig::default());
        assert!((result.epoc_per_session - 168.0).abs() < 1e-9);
    }

    #[rstest]
    #[case::other_type(WorkoutType::Other, 4.0)]
    #[case::zero_frequency(WorkoutType::Hiit, 0.0)]
    fn test_yields_zero(#[case] workout_type: WorkoutType, #[case] per_week: f64) {
        let workout = WorkoutInput {
            workout_type,
            ..lifting(per_week, 60.0)
        };
        let result = workout_expenditure(&workout, &profile(), &WorkoutConfig::default());
        assert_eq!(result.eat_daily, 0.0);
        assert_eq!(result.epoc_daily, 0.0);
    }

    #[rstest]
    #[case(RestLength::Short, 1.10)]
    #[case(RestLength::Moderate, 1.0)]
    #[case(RestLength::Long, 0.90)]
    fn test_rest_length_scales_eat_only(#[case] rest_length: RestLength, #[case] factor: f64) {
        let config = WorkoutConfig::default();
        let base = workout_expenditure(&lifting(3.0, 60.0), &profile(), &config);
        let workout = WorkoutInput {
            rest_length,
            ..lifting(3.0, 60.0)
        };
        let result = workout_expenditure(&workout, &profile(), &config);
        assert!((result.eat_per_session - base.eat_per_session * factor).abs() < 1e-9);
        assert_eq!(result.epoc_per_session, base.epoc_per_session);
    }

    #[test]
    fn test_metabolic_style_raises_epoc() {
        let config = WorkoutConfig::default();
        let workout = WorkoutInput {
            training_style: TrainingStyle::Metabolic,
            ..lifting(3.0, 60.0)
        };
        let result = workout_expenditure(&workout, &profile(), &config);
        assert!((result.epoc_per_session - 6.0 * 14.0 * 1.2).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_workout_kcal_non_negative(
            per_week in 0.0f64..=14.0,
            minutes in 0.0f64..=300.0,
        ) {
            let result = workout_expenditure(&lifting(per_week, minutes), &profile(), &WorkoutConfig::default());
            prop_assert!(result.eat_daily >= 0.0);
            prop_assert!(result.epoc_daily >= 0.0);
        }

        /// Daily figures are the per-session ones scaled by weekly frequency
        #[test]
        fn prop_daily_amortization(per_week in 0.5f64..=14.0) {
            let result = workout_expenditure(&lifting(per_week, 60.0), &profile(), &WorkoutConfig::default());
            prop_assert!((result.eat_daily - result.eat_per_session * per_week / 7.0).abs() < 1e-9);
        }
    }
}
