//! Sleep modifier
//!
//! Short (and very long) sleep lowers resting metabolism and spontaneous
//! movement. Hours map to a band; each band carries independent BMR and NEAT
//! penalties, amplified by poor sleep quality. Only BMR and NEAT are scaled.

use crate::config::{BandPenalty, SleepConfig, SleepPenaltyTable};
use crate::models::{SleepInput, SleepQuality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepBand {
    Severe,
    Moderate,
    Mild,
    Optimal,
    Long,
}

/// Bands keyed by inclusive lower bound in hours, ascending
pub const SLEEP_BANDS: [(f64, SleepBand); 5] = [
    (0.0, SleepBand::Severe),
    (5.0, SleepBand::Moderate),
    (6.0, SleepBand::Mild),
    (7.0, SleepBand::Optimal),
    (9.0, SleepBand::Long),
];

impl SleepBand {
    pub fn from_hours(hours: f64) -> Self {
        SLEEP_BANDS
            .iter()
            .rev()
            .find(|(lower, _)| hours >= *lower)
            .map_or(SleepBand::Severe, |(_, band)| *band)
    }

    pub fn penalty(&self, table: &SleepPenaltyTable) -> BandPenalty {
        match self {
            SleepBand::Severe => table.severe,
            SleepBand::Moderate => table.moderate,
            SleepBand::Mild => table.mild,
            SleepBand::Optimal => table.optimal,
            SleepBand::Long => table.long,
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            SleepBand::Severe => {
                "Severe sleep deprivation: reduced resting metabolism and markedly less daily movement"
            }
            SleepBand::Moderate => "Moderate sleep debt: noticeable drop in daily movement",
            SleepBand::Mild => "Mild sleep debt: small reduction in energy expenditure",
            SleepBand::Optimal => "Optimal sleep: no metabolic penalty",
            SleepBand::Long => "Long sleep: slightly less time and drive for daily movement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepAdjustment {
    pub band: SleepBand,
    pub hours: f64,
    pub quality: SleepQuality,
    pub bmr_penalty: f64,
    pub neat_penalty: f64,
    /// In (0, 1]
    pub bmr_multiplier: f64,
    /// In (0, 1]
    pub neat_multiplier: f64,
    pub note: String,
}

impl SleepAdjustment {
    /// Kcal removed from the given BMR and NEAT, as a negative number
    pub fn impact_kcal(&self, bmr: f64, neat: f64) -> f64 {
        -(bmr * self.bmr_penalty + neat * self.neat_penalty)
    }
}

/// Look up the sleep band and effective penalties
///
/// `sleep.hours` is expected to be already clipped by the normalizer.
pub fn sleep_adjustment(sleep: &SleepInput, config: &SleepConfig) -> SleepAdjustment {
    let band = SleepBand::from_hours(sleep.hours);
    let base = band.penalty(&config.penalties);
    let amplification = config.quality_amplification.get(sleep.quality);

    let bmr_penalty = (base.bmr * amplification).min(config.max_penalty);
    let neat_penalty = (base.neat * amplification).min(config.max_penalty);

    SleepAdjustment {
        band,
        hours: sleep.hours,
        quality: sleep.quality,
        bmr_penalty,
        neat_penalty,
        bmr_multiplier: 1.0 - bmr_penalty,
        neat_multiplier: 1.0 - neat_penalty,
        note: band.note().to_string(),
    }
}
