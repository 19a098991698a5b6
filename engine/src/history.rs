//! Daily log summaries
//!
//! Turns a caller-supplied series of daily entries into weekly averages and a
//! `WeightTrendInput` for trend validation. Storage stays with the caller.

use crate::errors::ValidationError;
use crate::models::WeightTrendInput;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEK_DAYS: i64 = 7;

/// One day of tracking; every measurement is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub workout_done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub avg_weight_lbs: Option<f64>,
    pub avg_calories: Option<f64>,
    pub avg_protein_g: Option<f64>,
    pub avg_carbs_g: Option<f64>,
    pub avg_fat_g: Option<f64>,
    pub avg_sleep_hours: Option<f64>,
    pub avg_steps: Option<f64>,
    pub total_workouts: usize,
    pub days_tracked: usize,
    /// Last minus first recorded weight in the window
    pub weight_change_lbs: Option<f64>,
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn field_mean<F>(entries: &[&DailyEntry], field: F) -> Option<f64>
where
    F: Fn(&DailyEntry) -> Option<f64>,
{
    let values: Vec<f64> = entries.iter().filter_map(|e| field(*e)).collect();
    mean(&values)
}

fn sorted_by_date(entries: &[DailyEntry]) -> Vec<&DailyEntry> {
    let mut sorted: Vec<&DailyEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Summarize the 7 days ending at `end_date`, inclusive
///
/// Returns `Ok(None)` when no entry falls inside the window.
///
/// # Errors
///
/// `end_date` too close to the start of the calendar for a full window.
pub fn summarize_week(
    entries: &[DailyEntry],
    end_date: NaiveDate,
) -> Result<Option<WeeklySummary>, ValidationError> {
    let start_date = end_date
        .checked_sub_signed(Duration::days(WEEK_DAYS - 1))
        .ok_or_else(|| ValidationError::new("end_date", "is too early for a 7-day window"))?;
    let week: Vec<&DailyEntry> = sorted_by_date(entries)
        .into_iter()
        .filter(|e| e.date >= start_date && e.date <= end_date)
        .collect();

    if week.is_empty() {
        return Ok(None);
    }

    let weights: Vec<f64> = week.iter().filter_map(|e| e.weight_lbs).collect();
    let weight_change_lbs = match weights.as_slice() {
        [first, .., last] => Some(last - first),
        _ => None,
    };

    Ok(Some(WeeklySummary {
        start_date,
        end_date,
        avg_weight_lbs: mean(&weights),
        avg_calories: field_mean(&week, |e| e.calories),
        avg_protein_g: field_mean(&week, |e| e.protein_g),
        avg_carbs_g: field_mean(&week, |e| e.carbs_g),
        avg_fat_g: field_mean(&week, |e| e.fat_g),
        avg_sleep_hours: field_mean(&week, |e| e.sleep_hours),
        avg_steps: field_mean(&week, |e| e.steps.map(f64::from)),
        total_workouts: week.iter().filter(|e| e.workout_done).count(),
        days_tracked: week.len(),
        weight_change_lbs,
    }))
}

/// Build a trend input from the first and last weighed entries
///
/// Returns `None` with fewer than two weighed entries on distinct dates, or
/// when no entry carries calories.
pub fn trend_from_entries(entries: &[DailyEntry]) -> Option<WeightTrendInput> {
    let sorted = sorted_by_date(entries);
    let mut weighed = sorted
        .iter()
        .filter_map(|e| e.weight_lbs.map(|w| (e.date, w)));
    let (first_date, start_weight_lbs) = weighed.next()?;
    let (last_date, end_weight_lbs) = weighed.last()?;

    let days = u32::try_from((last_date - first_date).num_days()).ok()?;
    if days == 0 {
        return None;
    }

    let average_daily_calories = field_mean(&sorted, |e| e.calories)?;

    Some(WeightTrendInput {
        start_weight_lbs,
        end_weight_lbs,
        days,
        average_daily_calories,
    })
}
