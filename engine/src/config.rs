//! Engine configuration
//!
//! Research constants live here rather than inline in the formulas so a
//! caller can override them. Every struct implements `Default` with the
//! documented values, and `EngineConfig::validate` rejects tables that would
//! break the result invariants (negative kcal, multipliers outside (0, 1]).
//!
//! # References
//!
//! - TEF rates: protein 20-30%, carbs 5-10%, fat 0-3% (midpoints used)
//! - Walking METs: Compendium of Physical Activities (2.0-4.5 mph walking)
//! - EPOC: heavy lifting at 80%+ 1RM, ~168 kcal over 14 hours post-exercise
//! - Energy balance: ~3500 kcal per pound of body mass

use crate::errors::ConfigError;
use crate::models::{
    Goal, JobType, RestLength, SleepQuality, TrainingStyle, WalkingPace, WorkoutIntensity,
    WorkoutType,
};
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tef: TefConfig,
    pub activity: ActivityConfig,
    pub workout: WorkoutConfig,
    pub sleep: SleepConfig,
    pub trend: TrendConfig,
    pub targets: GoalOffsets,
}

impl EngineConfig {
    /// Check every table for values that would break result invariants
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tef.validate()?;
        self.activity.validate()?;
        self.workout.validate()?;
        self.sleep.validate()?;
        self.trend.validate()?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::out_of_range(name, value, "must be finite and >= 0"));
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::out_of_range(name, value, "must be finite and > 0"));
    }
    Ok(())
}

fn fraction(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(ConfigError::out_of_range(name, value, "must be in [0, 1)"));
    }
    Ok(())
}

// ============================================================================
// TEF
// ============================================================================

/// Thermic-effect rates as a fraction of each macro's energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TefConfig {
    pub protein_rate: f64,
    pub carbs_rate: f64,
    pub fat_rate: f64,
    /// Applied to total calories when no macro grams are reported
    pub fallback_rate: f64,
}

impl Default for TefConfig {
    fn default() -> Self {
        Self {
            protein_rate: 0.25,
            carbs_rate: 0.075,
            fat_rate: 0.015,
            fallback_rate: 0.10,
        }
    }
}

impl TefConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        fraction("tef.protein_rate", self.protein_rate)?;
        fraction("tef.carbs_rate", self.carbs_rate)?;
        fraction("tef.fat_rate", self.fat_rate)?;
        fraction("tef.fallback_rate", self.fallback_rate)
    }
}

// ============================================================================
// Activity / NEAT
// ============================================================================

/// MET value and implied walking speed for one pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceConstants {
    pub met: f64,
    pub speed_kmh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceTable {
    /// ~2.0 mph
    pub slow: PaceConstants,
    /// ~3.0 mph
    pub average: PaceConstants,
    /// ~3.9 mph
    pub brisk: PaceConstants,
    /// ~4.5 mph
    pub very_brisk: PaceConstants,
}

impl Default for PaceTable {
    fn default() -> Self {
        Self {
            slow: PaceConstants { met: 2.8, speed_kmh: 3.2 },
            average: PaceConstants { met: 3.8, speed_kmh: 4.8 },
            brisk: PaceConstants { met: 4.8, speed_kmh: 6.3 },
            very_brisk: PaceConstants { met: 5.5, speed_kmh: 7.2 },
        }
    }
}

impl PaceTable {
    pub fn get(&self, pace: WalkingPace) -> PaceConstants {
        match pace {
            WalkingPace::Slow => self.slow,
            WalkingPace::Average => self.average,
            WalkingPace::Brisk => self.brisk,
            WalkingPace::VeryBrisk => self.very_brisk,
        }
    }
}

/// Lifestyle multipliers on base BMR by job type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMultipliers {
    pub desk: f64,
    pub light_active: f64,
    pub moderate_active: f64,
    pub very_active: f64,
}

impl Default for JobMultipliers {
    fn default() -> Self {
        Self {
            desk: 1.2,
            light_active: 1.3,
            moderate_active: 1.4,
            very_active: 1.5,
        }
    }
}

impl JobMultipliers {
    pub fn get(&self, job: JobType) -> f64 {
        match job {
            JobType::Desk => self.desk,
            JobType::LightActive => self.light_active,
            JobType::ModerateActive => self.moderate_active,
            JobType::VeryActive => self.very_active,
        }
    }
}

/// Applies `factor` when sedentary hours strictly exceed `above_hours`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SedentaryBand {
    pub above_hours: f64,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub paces: PaceTable,
    pub job_multipliers: JobMultipliers,
    pub sedentary_bands: Vec<SedentaryBand>,
    /// Stride length as a fraction of height
    pub stride_fraction_of_height: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            paces: PaceTable::default(),
            job_multipliers: JobMultipliers::default(),
            sedentary_bands: vec![
                SedentaryBand { above_hours: 8.0, factor: 0.97 },
                SedentaryBand { above_hours: 10.0, factor: 0.95 },
            ],
            stride_fraction_of_height: 0.414,
        }
    }
}

impl ActivityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for pace in [
            WalkingPace::Slow,
            WalkingPace::Average,
            WalkingPace::Brisk,
            WalkingPace::VeryBrisk,
        ] {
            let constants = self.paces.get(pace);
            non_negative("activity.paces.met", constants.met)?;
            positive("activity.paces.speed_kmh", constants.speed_kmh)?;
        }
        for job in [
            JobType::Desk,
            JobType::LightActive,
            JobType::ModerateActive,
            JobType::VeryActive,
        ] {
            positive("activity.job_multipliers", self.job_multipliers.get(job))?;
        }
        for band in &self.sedentary_bands {
            non_negative("activity.sedentary_bands.above_hours", band.above_hours)?;
            if !(band.factor > 0.0 && band.factor <= 1.0) {
                return Err(ConfigError::out_of_range(
                    "activity.sedentary_bands.factor",
                    band.factor,
                    "must be in (0, 1]",
                ));
            }
        }
        positive("activity.stride_fraction_of_height", self.stride_fraction_of_height)
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRates {
    pub high: f64,
    pub moderate: f64,
}

impl IntensityRates {
    pub fn get(&self, intensity: WorkoutIntensity) -> f64 {
        match intensity {
            WorkoutIntensity::High => self.high,
            WorkoutIntensity::Moderate => self.moderate,
        }
    }
}

/// Per workout type rates; `other` has no entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTable {
    pub heavy_lifting: IntensityRates,
    pub hiit: IntensityRates,
    pub circuit_training: IntensityRates,
    pub steady_cardio: IntensityRates,
}

impl WorkoutTable {
    /// `None` for workout types without coefficients
    pub fn get(&self, workout_type: WorkoutType, intensity: WorkoutIntensity) -> Option<f64> {
        let rates = match workout_type {
            WorkoutType::HeavyLifting => self.heavy_lifting,
            WorkoutType::Hiit => self.hiit,
            WorkoutType::CircuitTraining => self.circuit_training,
            WorkoutType::SteadyCardio => self.steady_cardio,
            WorkoutType::Other => return None,
        };
        Some(rates.get(intensity))
    }

    fn rows(&self) -> [IntensityRates; 4] {
        [
            self.heavy_lifting,
            self.hiit,
            self.circuit_training,
            self.steady_cardio,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestLengthFactors {
    pub short: f64,
    pub moderate: f64,
    pub long: f64,
}

impl Default for RestLengthFactors {
    fn default() -> Self {
        Self {
            short: 1.10,
            moderate: 1.0,
            long: 0.90,
        }
    }
}

impl RestLengthFactors {
    pub fn get(&self, rest: RestLength) -> f64 {
        match rest {
            RestLength::Short => self.short,
            RestLength::Moderate => self.moderate,
            RestLength::Long => self.long,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingStyleFactors {
    pub traditional: f64,
    pub supersets: f64,
    pub metabolic: f64,
}

impl Default for TrainingStyleFactors {
    fn default() -> Self {
        Self {
            traditional: 1.0,
            supersets: 1.10,
            metabolic: 1.20,
        }
    }
}

impl TrainingStyleFactors {
    pub fn get(&self, style: TrainingStyle) -> f64 {
        match style {
            TrainingStyle::Traditional => self.traditional,
            TrainingStyle::Supersets => self.supersets,
            TrainingStyle::Metabolic => self.metabolic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutConfig {
    /// MET values during the session
    pub exercise_mets: WorkoutTable,
    /// Afterburn kcal per workout hour per elevated hour
    pub epoc_rates: WorkoutTable,
    /// Hours metabolism stays elevated after a session
    pub epoc_window_hours: f64,
    /// Scales EAT by work density
    pub rest_length_factors: RestLengthFactors,
    /// Scales EPOC by session structure
    pub training_style_factors: TrainingStyleFactors,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            exercise_mets: WorkoutTable {
                heavy_lifting: IntensityRates { high: 6.0, moderate: 5.0 },
                hiit: IntensityRates { high: 12.0, moderate: 10.0 },
                circuit_training: IntensityRates { high: 8.0, moderate: 6.0 },
                steady_cardio: IntensityRates { high: 8.0, moderate: 5.0 },
            },
            epoc_rates: WorkoutTable {
                heavy_lifting: IntensityRates { high: 6.0, moderate: 4.0 },
                hiit: IntensityRates { high: 5.5, moderate: 4.0 },
                circuit_training: IntensityRates { high: 4.5, moderate: 3.0 },
                steady_cardio: IntensityRates { high: 2.0, moderate: 1.0 },
            },
            epoc_window_hours: 14.0,
            rest_length_factors: RestLengthFactors::default(),
            training_style_factors: TrainingStyleFactors::default(),
        }
    }
}

impl WorkoutConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for rates in self.exercise_mets.rows() {
            non_negative("workout.exercise_mets", rates.high)?;
            non_negative("workout.exercise_mets", rates.moderate)?;
        }
        for rates in self.epoc_rates.rows() {
            non_negative("workout.epoc_rates", rates.high)?;
            non_negative("workout.epoc_rates", rates.moderate)?;
        }
        non_negative("workout.epoc_window_hours", self.epoc_window_hours)?;
        for rest in [RestLength::Short, RestLength::Moderate, RestLength::Long] {
            non_negative("workout.rest_length_factors", self.rest_length_factors.get(rest))?;
        }
        for style in [
            TrainingStyle::Traditional,
            TrainingStyle::Supersets,
            TrainingStyle::Metabolic,
        ] {
            non_negative(
                "workout.training_style_factors",
                self.training_style_factors.get(style),
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Sleep
// ============================================================================

/// Fractional penalties for one sleep band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPenalty {
    pub bmr: f64,
    pub neat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepPenaltyTable {
    pub severe: BandPenalty,
    pub moderate: BandPenalty,
    pub mild: BandPenalty,
    pub optimal: BandPenalty,
    pub long: BandPenalty,
}

impl Default for SleepPenaltyTable {
    fn default() -> Self {
        Self {
            severe: BandPenalty { bmr: 0.08, neat: 0.20 },
            moderate: BandPenalty { bmr: 0.05, neat: 0.12 },
            mild: BandPenalty { bmr: 0.03, neat: 0.07 },
            optimal: BandPenalty { bmr: 0.0, neat: 0.0 },
            long: BandPenalty { bmr: 0.02, neat: 0.05 },
        }
    }
}

/// Penalty amplification by sleep quality; not pinned by research
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityAmplification {
    pub poor: f64,
    pub fair: f64,
    pub good: f64,
    pub excellent: f64,
}

impl Default for QualityAmplification {
    fn default() -> Self {
        Self {
            poor: 1.15,
            fair: 1.05,
            good: 1.0,
            excellent: 1.0,
        }
    }
}

impl QualityAmplification {
    pub fn get(&self, quality: SleepQuality) -> f64 {
        match quality {
            SleepQuality::Poor => self.poor,
            SleepQuality::Fair => self.fair,
            SleepQuality::Good => self.good,
            SleepQuality::Excellent => self.excellent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepConfig {
    pub penalties: SleepPenaltyTable,
    pub quality_amplification: QualityAmplification,
    /// Upper bound on any effective penalty, keeping multipliers above zero
    pub max_penalty: f64,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            penalties: SleepPenaltyTable::default(),
            quality_amplification: QualityAmplification::default(),
            max_penalty: 0.5,
        }
    }
}

impl SleepConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let table = &self.penalties;
        for penalty in [table.severe, table.moderate, table.mild, table.optimal, table.long] {
            fraction("sleep.penalties.bmr", penalty.bmr)?;
            fraction("sleep.penalties.neat", penalty.neat)?;
        }
        for quality in [
            SleepQuality::Poor,
            SleepQuality::Fair,
            SleepQuality::Good,
            SleepQuality::Excellent,
        ] {
            non_negative(
                "sleep.quality_amplification",
                self.quality_amplification.get(quality),
            )?;
        }
        fraction("sleep.max_penalty", self.max_penalty)
    }
}

// ============================================================================
// Weight trend
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Energy content of one pound of body-mass change
    pub kcal_per_lb: f64,
    /// Relative |actual - formula| above which adaptation is flagged
    pub adaptation_threshold_percent: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            kcal_per_lb: 3500.0,
            adaptation_threshold_percent: 10.0,
        }
    }
}

impl TrendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("trend.kcal_per_lb", self.kcal_per_lb)?;
        non_negative(
            "trend.adaptation_threshold_percent",
            self.adaptation_threshold_percent,
        )
    }
}

// ============================================================================
// Goal targets
// ============================================================================

/// Daily kcal offsets from TDEE for each goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalOffsets {
    pub aggressive_fat_loss: f64,
    pub moderate_fat_loss: f64,
    pub maintenance: f64,
    pub lean_bulk: f64,
    pub standard_bulk: f64,
}

impl Default for GoalOffsets {
    fn default() -> Self {
        Self {
            aggressive_fat_loss: -750.0,
            moderate_fat_loss: -500.0,
            maintenance: 0.0,
            lean_bulk: 250.0,
            standard_bulk: 350.0,
        }
    }
}

impl GoalOffsets {
    pub fn get(&self, goal: Goal) -> f64 {
        match goal {
            Goal::AggressiveFatLoss => self.aggressive_fat_loss,
            Goal::ModerateFatLoss => self.moderate_fat_loss,
            Goal::Maintenance => self.maintenance,
            Goal::LeanBulk => self.lean_bulk,
            Goal::StandardBulk => self.standard_bulk,
        }
    }
}
