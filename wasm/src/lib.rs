//! TDEE WASM Module
//!
//! WebAssembly bindings so a browser front end can run the engine locally.
//! Structured values cross the boundary as JSON strings.

use serde::Serialize;
use tdee_engine::{bmr, calorie_target as target_for_goal, Goal, Sex, TdeeInput};
use wasm_bindgen::prelude::*;

/// Error payload returned to JavaScript
#[derive(Serialize)]
struct JsError<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

fn error_json(code: &str, message: String, field: Option<&str>) -> String {
    serde_json::to_string(&JsError {
        code,
        message: message.clone(),
        field,
    })
    .unwrap_or(message)
}

/// Run the full pipeline on a JSON `TdeeInput`, returning a JSON `TdeeResult`
pub fn compute_json(input: &str) -> Result<String, String> {
    let input: TdeeInput = serde_json::from_str(input)
        .map_err(|e| error_json("BAD_REQUEST", e.to_string(), None))?;

    let result = tdee_engine::compute(&input)
        .map_err(|e| error_json("VALIDATION_ERROR", e.message.clone(), Some(e.field)))?;

    serde_json::to_string(&result).map_err(|e| error_json("INTERNAL_ERROR", e.to_string(), None))
}

/// Daily calories for a goal at the given TDEE, default offsets
pub fn target_calories(tdee: f64, goal: &str) -> Result<f64, String> {
    let goal: Goal = goal.parse()?;
    let defaults = tdee_engine::EngineConfig::default();
    Ok(target_for_goal(tdee, goal, &defaults.targets, defaults.trend.kcal_per_lb).calories)
}

/// Calculate TDEE from a JSON input; throws a JSON error string on failure
#[wasm_bindgen]
pub fn compute_tdee(input_json: &str) -> Result<String, JsValue> {
    compute_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Calorie target for a goal name such as `moderate_fat_loss`
#[wasm_bindgen]
pub fn calorie_target(tdee: f64, goal: &str) -> Result<f64, JsValue> {
    target_calories(tdee, goal).map_err(|e| JsValue::from_str(&e))
}

/// Mifflin-St Jeor BMR from imperial inputs
#[wasm_bindgen]
pub fn mifflin_st_jeor_bmr(weight_lbs: f64, height_inches: f64, age_years: u32, is_male: bool) -> f64 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    bmr::mifflin_st_jeor(weight_lbs, height_inches, age_years, sex)
}
