//! Input records for a TDEE calculation
//!
//! Every record is built fresh per call from caller-supplied values.
//! Units are imperial throughout: pounds, inches, kcal and grams.

use crate::units;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile
// ============================================================================

/// Biological sex, used only by the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Anthropometric profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    pub age_years: u32,
    pub height_inches: f64,
    pub weight_lbs: f64,
    /// Unknown when absent; narrows BMR selection to Mifflin-St Jeor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

impl Profile {
    pub fn weight_kg(&self) -> f64 {
        units::lbs_to_kg(self.weight_lbs)
    }

    pub fn height_cm(&self) -> f64 {
        units::inches_to_cm(self.height_inches)
    }
}

// ============================================================================
// Diet
// ============================================================================

/// Average daily intake. Macro grams are not reconciled against `calories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietInput {
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
}

// ============================================================================
// Activity
// ============================================================================

/// Walking pace; each pace maps to a MET value and a walking speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WalkingPace {
    Slow,
    #[default]
    Average,
    Brisk,
    VeryBrisk,
}

/// Occupational activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Minimal movement
    #[default]
    Desk,
    /// Teacher, retail
    LightActive,
    /// Nurse, waiter
    ModerateActive,
    /// Construction, warehouse
    VeryActive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub daily_steps: u32,
    #[serde(default)]
    pub pace: WalkingPace,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub sedentary_hours: f64,
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    HeavyLifting,
    Hiit,
    CircuitTraining,
    SteadyCardio,
    /// No structured training, or a type with no coefficients; yields zero EAT/EPOC
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
    Moderate,
    #[default]
    High,
}

/// Rest between sets; shorter rests pack more work into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestLength {
    Short,
    #[default]
    Moderate,
    Long,
}

/// Session structure; denser formats raise afterburn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStyle {
    #[default]
    Traditional,
    Supersets,
    Metabolic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInput {
    /// May be fractional (e.g. 3.5 sessions/week)
    pub workouts_per_week: f64,
    #[serde(default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub duration_minutes: f64,
    #[serde(default)]
    pub intensity: WorkoutIntensity,
    #[serde(default)]
    pub rest_length: RestLength,
    #[serde(default)]
    pub training_style: TrainingStyle,
}

impl Default for WorkoutInput {
    fn default() -> Self {
        Self {
            workouts_per_week: 0.0,
            workout_type: WorkoutType::Other,
            duration_minutes: 0.0,
            intensity: WorkoutIntensity::default(),
            rest_length: RestLength::default(),
            training_style: TrainingStyle::default(),
        }
    }
}

// ============================================================================
// Sleep
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    #[default]
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepInput {
    pub hours: f64,
    #[serde(default)]
    pub quality: SleepQuality,
}

// ============================================================================
// Weight trend
// ============================================================================

/// Observed weight change over a tracked period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrendInput {
    pub start_weight_lbs: f64,
    pub end_weight_lbs: f64,
    pub days: u32,
    pub average_daily_calories: f64,
}

impl WeightTrendInput {
    /// Signed change; negative for a loss
    pub fn weight_change_lbs(&self) -> f64 {
        self.end_weight_lbs - self.start_weight_lbs
    }
}

// ============================================================================
// Goals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    AggressiveFatLoss,
    ModerateFatLoss,
    #[default]
    Maintenance,
    LeanBulk,
    StandardBulk,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::AggressiveFatLoss,
        Goal::ModerateFatLoss,
        Goal::Maintenance,
        Goal::LeanBulk,
        Goal::StandardBulk,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Goal::AggressiveFatLoss => "Aggressive cut",
            Goal::ModerateFatLoss => "Moderate cut",
            Goal::Maintenance => "Maintenance",
            Goal::LeanBulk => "Lean bulk",
            Goal::StandardBulk => "Standard bulk",
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "aggressive_fat_loss" | "aggressive_cut" => Ok(Goal::AggressiveFatLoss),
            "moderate_fat_loss" | "moderate_cut" => Ok(Goal::ModerateFatLoss),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            "lean_bulk" => Ok(Goal::LeanBulk),
            "standard_bulk" | "bulk" => Ok(Goal::StandardBulk),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

// ============================================================================
// Request bundle
// ============================================================================

/// Everything one `compute` call consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeInput {
    pub profile: Profile,
    pub diet: DietInput,
    pub activity: ActivityInput,
    #[serde(default)]
    pub workout: WorkoutInput,
    pub sleep: SleepInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_trend: Option<WeightTrendInput>,
    #[serde(default)]
    pub goal: Goal,
}
