use chrono::NaiveDate;

use crate::error::{NutrackError, Result};
use crate::nutrition::food::FoodItem;
use crate::nutrition::journal::{collect_daily_log, ConsumptionEntry, DailyLog, MealType};
use crate::utils::fs::{append_to, open_if_exists, DataPaths};

/// Record `grams` of `food` in the user's journal.
///
/// The entry is appended as a self-contained DAILY_LOG block; nothing
/// already in the file is touched.
pub fn append_entry(
    paths: &DataPaths,
    username: &str,
    food: &FoodItem,
    grams: f64,
    meal_type: MealType,
    date: NaiveDate,
) -> Result<ConsumptionEntry> {
    if !(grams.is_finite() && grams > 0.0) {
        return Err(NutrackError::InvalidInput(
            "quantity must be greater than 0 g".to_string(),
        ));
    }
    if !(food.serving_size.is_finite() && food.serving_size > 0.0) {
        return Err(NutrackError::InvalidInput(format!(
            "{} has no usable serving size",
            food.name
        )));
    }

    let entry = ConsumptionEntry::new(food, grams, meal_type, date);
    let path = paths.user_data(username);
    append_to(&path, &entry.to_block())?;

    tracing::debug!(
        path = %path.display(),
        food = %entry.food_name,
        grams,
        calories = entry.nutrients.calories,
        "logged food"
    );
    Ok(entry)
}

/// Rebuild one day's log from the journal; no journal means an empty day
pub fn get_daily_log(paths: &DataPaths, username: &str, date: NaiveDate) -> Result<DailyLog> {
    let path = paths.user_data(username);
    let Some(reader) = open_if_exists(&path)? else {
        return Ok(DailyLog::empty(date));
    };
    let log = collect_daily_log(reader, date)?;
    tracing::debug!(entries = log.entries.len(), %date, "daily log loaded");
    Ok(log)
}
