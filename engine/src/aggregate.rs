//! Sum the energy components into a formula TDEE

use crate::sleep::SleepAdjustment;
use serde::{Deserialize, Serialize};

/// Daily kcal per component, after sleep adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyComponents {
    pub bmr: f64,
    pub tef: f64,
    pub neat: f64,
    pub eat: f64,
    pub epoc: f64,
}

impl EnergyComponents {
    pub fn total(&self) -> f64 {
        self.bmr + self.tef + self.neat + self.eat + self.epoc
    }
}

/// Share of the total each component contributes; display only
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPercentages {
    pub bmr: f64,
    pub tef: f64,
    pub neat: f64,
    pub eat: f64,
    pub epoc: f64,
}

impl ComponentPercentages {
    pub fn of(components: &EnergyComponents) -> Self {
        let total = components.total();
        if total <= 0.0 {
            return Self::default();
        }
        let pct = |kcal: f64| kcal / total * 100.0;
        Self {
            bmr: pct(components.bmr),
            tef: pct(components.tef),
            neat: pct(components.neat),
            eat: pct(components.eat),
            epoc: pct(components.epoc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub components: EnergyComponents,
    pub formula_total: f64,
    pub percentages: ComponentPercentages,
    /// Kcal lost to the sleep penalty, negative or zero
    pub sleep_impact_kcal: f64,
}

/// Apply sleep multipliers to BMR and NEAT and sum every component
///
/// TEF, EAT and EPOC pass through untouched.
pub fn aggregate(
    bmr: f64,
    tef: f64,
    neat: f64,
    eat: f64,
    epoc: f64,
    sleep: &SleepAdjustment,
) -> Aggregate {
    let components = EnergyComponents {
        bmr: bmr * sleep.bmr_multiplier,
        tef,
        neat: neat * sleep.neat_multiplier,
        eat,
        epoc,
    };

    Aggregate {
        formula_total: components.total(),
        percentages: ComponentPercentages::of(&components),
        sleep_impact_kcal: sleep.impact_kcal(bmr, neat),
        components,
    }
}
