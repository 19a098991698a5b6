//! The end-to-end TDEE pipeline
//!
//! normalize → BMR → TEF → NEAT → EAT/EPOC → sleep → aggregate → trend → targets
//!
//! Each stage receives only what the previous stages produced. The calculator
//! holds an immutable configuration and nothing else, so one instance can be
//! shared across threads.

use crate::activity::{non_exercise_activity, NeatBreakdown};
use crate::aggregate::{aggregate, ComponentPercentages, EnergyComponents};
use crate::bmr::{select_bmr, BmrSelection};
use crate::config::EngineConfig;
use crate::errors::{ConfigError, EngineWarning, ValidationError};
use crate::models::{Goal, TdeeInput};
use crate::sleep::{sleep_adjustment, SleepAdjustment};
use crate::targets::{calorie_target, calorie_targets, CalorieTarget};
use crate::tef::{thermic_effect, TefBreakdown};
use crate::trend::{validate_trend, TrendOutcome};
use crate::validation::normalize;
use crate::workout::{workout_expenditure, WorkoutExpenditure};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Which figure feeds the target generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TdeeSource {
    Formula,
    WeightTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeResult {
    /// Per-component kcal after the sleep adjustment
    pub components: EnergyComponents,
    pub formula_total: f64,
    pub breakdown_percent: ComponentPercentages,
    /// Present only when the weight trend covered enough days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_total: Option<f64>,
    pub adaptation_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptation_percent: Option<f64>,
    pub authoritative_tdee: f64,
    pub tdee_source: TdeeSource,
    pub goal: Goal,
    pub target_calories: f64,
    pub targets: Vec<CalorieTarget>,

    pub bmr_selection: BmrSelection,
    pub tef_breakdown: TefBreakdown,
    pub neat_breakdown: NeatBreakdown,
    pub workout: WorkoutExpenditure,
    pub sleep: SleepAdjustment,
    pub sleep_impact_kcal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendOutcome>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<EngineWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct TdeeCalculator {
    config: EngineConfig,
}

impl TdeeCalculator {
    /// Build a calculator over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in `config`
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline on one input bundle
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the first invalid field. A weight trend
    /// shorter than the minimum window is not an error; it is reported in
    /// `warnings` and the result stays formula-only.
    pub fn compute(&self, input: &TdeeInput) -> Result<TdeeResult, ValidationError> {
        let normalized = normalize(input)?;
        let mut warnings = normalized.warnings;
        let input = normalized.input;

        for warning in &warnings {
            debug!(%warning, "Input adjusted");
        }

        let bmr_selection = select_bmr(&input.profile);
        let base_bmr = bmr_selection.selected.kcal();
        debug!(
            formula = bmr_selection.selected.name(),
            bmr = base_bmr,
            "BMR selected"
        );

        let tef_breakdown = thermic_effect(&input.diet, &self.config.tef);
        debug!(tef = tef_breakdown.total, fallback = tef_breakdown.used_fallback, "TEF computed");

        let neat_breakdown =
            non_exercise_activity(&input.activity, &input.profile, base_bmr, &self.config.activity);
        debug!(
            steps_kcal = neat_breakdown.steps_kcal,
            lifestyle_kcal = neat_breakdown.lifestyle_kcal,
            "NEAT computed"
        );

        let workout = workout_expenditure(&input.workout, &input.profile, &self.config.workout);
        debug!(eat = workout.eat_daily, epoc = workout.epoc_daily, "Workout expenditure computed");

        let sleep = sleep_adjustment(&input.sleep, &self.config.sleep);
        debug!(
            band = ?sleep.band,
            bmr_multiplier = sleep.bmr_multiplier,
            neat_multiplier = sleep.neat_multiplier,
            "Sleep adjustment"
        );

        let totals = aggregate(
            base_bmr,
            tef_breakdown.total,
            neat_breakdown.total,
            workout.eat_daily,
            workout.epoc_daily,
            &sleep,
        );
        debug!(formula_total = totals.formula_total, "Components aggregated");

        let trend = match &input.weight_trend {
            Some(trend) => Some(validate_trend(trend, totals.formula_total, &self.config.trend)?),
            None => None,
        };

        let validation = trend.as_ref().and_then(TrendOutcome::validated);
        match (&trend, validation) {
            (Some(TrendOutcome::InsufficientData { days, required }), _) => {
                warn!(days, required, "Weight trend too short, using formula TDEE");
                warnings.push(EngineWarning::InsufficientTrendData {
                    days: *days,
                    required: *required,
                });
            }
            (_, Some(v)) if v.adaptation_detected => {
                info!(
                    actual_tdee = v.actual_tdee,
                    formula_tdee = v.formula_tdee,
                    difference_percent = v.difference_percent,
                    kind = ?v.adaptation_kind,
                    "Metabolic adaptation detected"
                );
            }
            _ => {}
        }

        let (authoritative_tdee, tdee_source) = match validation {
            Some(v) => (v.actual_tdee, TdeeSource::WeightTrend),
            None => (totals.formula_total, TdeeSource::Formula),
        };

        let kcal_per_lb = self.config.trend.kcal_per_lb;
        let selected = calorie_target(authoritative_tdee, input.goal, &self.config.targets, kcal_per_lb);
        let targets = calorie_targets(authoritative_tdee, &self.config.targets, kcal_per_lb);

        Ok(TdeeResult {
            components: totals.components,
            formula_total: totals.formula_total,
            breakdown_percent: totals.percentages,
            validated_total: validation.map(|v| v.actual_tdee),
            adaptation_detected: validation.is_some_and(|v| v.adaptation_detected),
            adaptation_percent: validation
                .filter(|v| v.adaptation_detected)
                .map(|v| v.difference_percent),
            authoritative_tdee,
            tdee_source,
            goal: input.goal,
            target_calories: selected.calories,
            targets,
            bmr_selection,
            tef_breakdown,
            neat_breakdown,
            workout,
            sleep,
            sleep_impact_kcal: totals.sleep_impact_kcal,
            trend,
            warnings,
        })
    }
}

/// Run the pipeline with the default configuration
///
/// # Errors
///
/// See [`TdeeCalculator::compute`]
pub fn compute(input: &TdeeInput) -> Result<TdeeResult, ValidationError> {
    TdeeCalculator::default().compute(input)
}
