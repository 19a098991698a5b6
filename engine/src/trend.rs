//! Weight-trend validation
//!
//! Observed weight change plus average intake gives an empirical TDEE:
//!
//! ```text
//! daily_balance = weight_change_lbs × 3500 / days
//! actual_tdee   = average_daily_calories − daily_balance
//! ```
//!
//! A loss makes the balance negative, so actual TDEE sits above intake.
//! When the empirical and formula figures disagree by more than the
//! configured threshold, metabolic adaptation is flagged.

use crate::config::TrendConfig;
use crate::errors::ValidationError;
use crate::models::WeightTrendInput;
use serde::{Deserialize, Serialize};

/// Shorter trends degrade to a formula-only result
pub const MIN_TREND_DAYS: u32 = 7;

/// Direction of the disagreement between empirical and formula TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationKind {
    /// Burning less than predicted while losing weight
    AdaptiveThermogenesis,
    LowerThanExpected,
    HigherThanExpected,
}

/// Accuracy band for the formula estimate against observed data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Within 5%
    HighlyAccurate,
    /// Within 10%
    ReasonablyAccurate,
    /// Within 15%
    ModerateDifference,
    /// Adaptation detected while losing weight
    SignificantAdaptation,
    LargeDiscrepancy,
}

impl Recommendation {
    pub fn from_difference(difference_percent: f64, adaptive_loss: bool) -> Self {
        let magnitude = difference_percent.abs();
        if magnitude < 5.0 {
            Recommendation::HighlyAccurate
        } else if magnitude < 10.0 {
            Recommendation::ReasonablyAccurate
        } else if magnitude < 15.0 {
            Recommendation::ModerateDifference
        } else if adaptive_loss {
            Recommendation::SignificantAdaptation
        } else {
            Recommendation::LargeDiscrepancy
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::HighlyAccurate => {
                "Formula estimate matches observed data; either figure works"
            }
            Recommendation::ReasonablyAccurate => {
                "Formula estimate is close; prefer the validated figure for planning"
            }
            Recommendation::ModerateDifference => {
                "Noticeable gap; use the validated figure and review activity inputs"
            }
            Recommendation::SignificantAdaptation => {
                "Metabolism appears adapted to the deficit; consider a diet break or refeed"
            }
            Recommendation::LargeDiscrepancy => {
                "Large gap; check intake logging and weigh-in consistency"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendValidation {
    pub weight_change_lbs: f64,
    pub days: u32,
    /// Negative in a deficit
    pub daily_balance_kcal: f64,
    pub actual_tdee: f64,
    pub formula_tdee: f64,
    /// (actual − formula) / formula × 100
    pub difference_percent: f64,
    pub adaptation_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptation_kind: Option<AdaptationKind>,
    pub recommendation: Recommendation,
    pub recommendation_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendOutcome {
    Validated(TrendValidation),
    /// Too few days; the result stays formula-only
    InsufficientData { days: u32, required: u32 },
}

impl TrendOutcome {
    pub fn validated(&self) -> Option<&TrendValidation> {
        match self {
            TrendOutcome::Validated(validation) => Some(validation),
            TrendOutcome::InsufficientData { .. } => None,
        }
    }
}

/// Reconcile a weight trend against the formula TDEE
///
/// # Errors
///
/// Zero days or a non-positive formula total would divide by zero and are
/// returned as a `ValidationError`.
pub fn validate_trend(
    trend: &WeightTrendInput,
    formula_tdee: f64,
    config: &TrendConfig,
) -> Result<TrendOutcome, ValidationError> {
    if trend.days == 0 {
        return Err(ValidationError::division_guard("weight_trend.days"));
    }
    if trend.days < MIN_TREND_DAYS {
        return Ok(TrendOutcome::InsufficientData {
            days: trend.days,
            required: MIN_TREND_DAYS,
        });
    }
    if formula_tdee <= 0.0 {
        return Err(ValidationError::division_guard("formula_total"));
    }

    let weight_change_lbs = trend.weight_change_lbs();
    let daily_balance_kcal = weight_change_lbs * config.kcal_per_lb / f64::from(trend.days);
    let actual_tdee = trend.average_daily_calories - daily_balance_kcal;

    let difference_percent = (actual_tdee - formula_tdee) / formula_tdee * 100.0;
    let adaptation_detected = difference_percent.abs() > config.adaptation_threshold_percent;
    let losing = weight_change_lbs < 0.0;

    let adaptation_kind = adaptation_detected.then(|| {
        if actual_tdee < formula_tdee && losing {
            AdaptationKind::AdaptiveThermogenesis
        } else if actual_tdee < formula_tdee {
            AdaptationKind::LowerThanExpected
        } else {
            AdaptationKind::HigherThanExpected
        }
    });
    let adaptive_loss = adaptation_kind == Some(AdaptationKind::AdaptiveThermogenesis);
    let recommendation = Recommendation::from_difference(difference_percent, adaptive_loss);

    Ok(TrendOutcome::Validated(TrendValidation {
        weight_change_lbs,
        days: trend.days,
        daily_balance_kcal,
        actual_tdee,
        formula_tdee,
        difference_percent,
        adaptation_detected,
        adaptation_kind,
        recommendation,
        recommendation_message: recommendation.message().to_string(),
    }))
}
