//! Imperial unit conversions
//!
//! Engine inputs are imperial (lbs, inches). The walking MET model and the
//! Katch-McArdle lean-mass term are defined in SI, so they convert here at
//! the point of use rather than at the input boundary.

/// Kilograms per pound, as used by the imperial Mifflin-St Jeor coefficients
/// (4.536 = 10 × 0.4536).
pub const KG_PER_LB: f64 = 0.4536;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}
