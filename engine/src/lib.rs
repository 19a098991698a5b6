//! TDEE Engine
//!
//! Estimates Total Daily Energy Expenditure from body, diet, activity,
//! workout and sleep inputs, and reconciles the estimate against observed
//! weight change when a trend is supplied.
//!
//! # Design Principles
//!
//! 1. **Stateless**: every call is a pure function of its input and an immutable config
//! 2. **Fail Fast**: the first invalid field is reported by name
//! 3. **Configurable**: research constants live in [`EngineConfig`]
//!
//! ```no_run
//! use tdee_engine::{compute, TdeeInput};
//!
//! # fn run(input: TdeeInput) -> Result<(), tdee_engine::ValidationError> {
//! let result = compute(&input)?;
//! println!("TDEE: {:.0} kcal", result.authoritative_tdee);
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod aggregate;
pub mod bmr;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod history;
pub mod models;
pub mod sleep;
pub mod targets;
pub mod tef;
pub mod trend;
pub mod units;
pub mod validation;
pub mod workout;

// Re-export commonly used items
pub use calculator::{compute, TdeeCalculator, TdeeResult, TdeeSource};
pub use config::EngineConfig;
pub use errors::*;
pub use history::{summarize_week, trend_from_entries, DailyEntry, WeeklySummary};
pub use models::*;
pub use targets::{calorie_target, calorie_targets, CalorieTarget};
pub use trend::{AdaptationKind, Recommendation, TrendOutcome, TrendValidation, MIN_TREND_DAYS};
