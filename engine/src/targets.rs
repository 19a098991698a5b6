//! Goal-specific calorie targets

use crate::config::GoalOffsets;
use crate::models::Goal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    pub goal: Goal,
    pub description: String,
    pub offset_kcal: f64,
    pub calories: f64,
    /// Expected body-weight change per week; negative for a loss
    pub weekly_change_lbs: f64,
}

/// target = TDEE + offset(goal)
pub fn calorie_target(tdee: f64, goal: Goal, offsets: &GoalOffsets, kcal_per_lb: f64) -> CalorieTarget {
    let offset_kcal = offsets.get(goal);
    CalorieTarget {
        goal,
        description: goal.description().to_string(),
        offset_kcal,
        calories: tdee + offset_kcal,
        weekly_change_lbs: offset_kcal * 7.0 / kcal_per_lb,
    }
}

/// Targets for every goal, cut to bulk
pub fn calorie_targets(tdee: f64, offsets: &GoalOffsets, kcal_per_lb: f64) -> Vec<CalorieTarget> {
    Goal::ALL
        .iter()
        .map(|goal| calorie_target(tdee, *goal, offsets, kcal_per_lb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Goal::AggressiveFatLoss, 2300.0, -1.5)]
    #[case(Goal::ModerateFatLoss, 2550.0, -1.0)]
    #[case(Goal::Maintenance, 3050.0, 0.0)]
    #[case(Goal::LeanBulk, 3300.0, 0.5)]
    #[case(Goal::StandardBulk, 3400.0, 0.7)]
    fn test_targets_from_3050(#[case] goal: Goal, #[case] calories: f64, #[case] weekly: f64) {
        let target = calorie_target(3050.0, goal, &GoalOffsets::default(), 3500.0);
        assert_eq!(target.calories, calories);
        assert!((target.weekly_change_lbs - weekly).abs() < 1e-9);
    }

    #[test]
    fn test_full_table_in_goal_order() {
        let table = calorie_targets(2500.0, &GoalOffsets::default(), 3500.0);
        let goals: Vec<Goal> = table.iter().map(|t| t.goal).collect();
        assert_eq!(goals, Goal::ALL.to_vec());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Targets are ordered from largest deficit to largest surplus
        #[test]
        fn prop_targets_ascend(tdee in 1000.0f64..6000.0) {
            let table = calorie_targets(tdee, &GoalOffsets::default(), 3500.0);
            for pair in table.windows(2) {
                prop_assert!(pair[0].calories < pair[1].calories);
            }
        }
    }
}
