//! Error and warning types for the TDEE engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required input field is missing, non-finite, or outside its range.
///
/// The engine fails fast: a single call surfaces at most one of these,
/// naming the first offending field (e.g. `profile.weight_lbs`).
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Validation error on {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Value must be strictly greater than zero
    pub fn not_positive(field: &'static str, value: f64) -> Self {
        Self::new(field, format!("must be greater than 0 (got {})", value))
    }

    /// Value is NaN or infinite
    pub fn not_finite(field: &'static str) -> Self {
        Self::new(field, "must be a valid number")
    }

    /// Value falls outside the documented physiological range
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            field,
            format!("must be between {} and {} (got {})", min, max, value),
        )
    }

    /// A value would be used as a divisor while zero
    pub fn division_guard(field: &'static str) -> Self {
        Self::new(field, "must be non-zero")
    }
}

/// Engine configuration is internally inconsistent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} = {value} is out of range: {reason}")]
    ValueOutOfRange {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn out_of_range(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::ValueOutOfRange {
            name,
            value,
            reason,
        }
    }
}

/// Non-fatal conditions surfaced alongside a successful result
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineWarning {
    /// Trend window too short; the result is formula-only
    #[error("Weight trend covers {days} days, need at least {required} for validation")]
    InsufficientTrendData { days: u32, required: u32 },

    #[error("Sleep hours {reported} clipped to {used}")]
    SleepHoursClipped { reported: f64, used: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::not_positive("profile.age_years", 0.0);
        assert_eq!(err.field, "profile.age_years");
        assert!(err.to_string().contains("profile.age_years"));
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::out_of_range("diet.fat_g", 400.0, 0.0, 300.0);
        assert_eq!(err.message, "must be between 0 and 300 (got 400)");
    }

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let warning = EngineWarning::InsufficientTrendData {
            days: 5,
            required: 7,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "insufficient_trend_data");
        assert_eq!(json["days"], 5);
    }
}
