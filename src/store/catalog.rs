use std::io::BufRead;
use std::path::Path;

use crate::error::{NutrackError, Result};
use crate::nutrition::food::{FoodItem, FIELD_SEPARATOR};
use crate::utils::fs::{append_to, open_if_exists, DataPaths};

/// Search the shared catalog, then the user's custom foods.
///
/// Matching is a case-insensitive substring test on the name, so an empty
/// query returns every record.
pub fn search(paths: &DataPaths, query: &str, username: &str) -> Result<Vec<FoodItem>> {
    let mut results = read_matching(paths.catalog(), query)?;
    results.extend(read_matching(&paths.custom_foods(username), query)?);
    tracing::debug!(query, found = results.len(), "food search");
    Ok(results)
}

/// Append a food to the user's custom catalog. Duplicate names are allowed.
pub fn add_custom_food(paths: &DataPaths, username: &str, item: &FoodItem) -> Result<()> {
    validate_food(item)?;
    let path = paths.custom_foods(username);
    append_to(&path, &item.to_catalog_line())?;
    tracing::debug!(path = %path.display(), name = %item.name, "custom food saved");
    Ok(())
}

/// Narrow a search down to the single food the user meant.
///
/// An exact (case-insensitive) name match wins, then a lone result, then an
/// explicit 1-based `pick` into the result list.
pub fn resolve_food(
    paths: &DataPaths,
    query: &str,
    username: &str,
    pick: Option<usize>,
) -> Result<FoodItem> {
    let mut results = search(paths, query, username)?;

    if let Some(index) = pick {
        if index == 0 || index > results.len() {
            return Err(NutrackError::InvalidInput(format!(
                "--pick must be between 1 and {}",
                results.len()
            )));
        }
        return Ok(results.swap_remove(index - 1));
    }

    if let Some(position) = results
        .iter()
        .position(|item| item.name.eq_ignore_ascii_case(query.trim()))
    {
        return Ok(results.swap_remove(position));
    }

    match results.len() {
        0 => Err(NutrackError::NoMatch(query.to_string())),
        1 => Ok(results.remove(0)),
        _ => Err(NutrackError::AmbiguousFood {
            query: query.to_string(),
            candidates: results
                .iter()
                .enumerate()
                .map(|(i, item)| format!("  {}. {}", i + 1, item.name))
                .collect::<Vec<_>>()
                .join("\n"),
        }),
    }
}

fn read_matching(path: &Path, query: &str) -> Result<Vec<FoodItem>> {
    let Some(reader) = open_if_exists(path)? else {
        tracing::debug!(path = %path.display(), "catalog not found, skipping");
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match FoodItem::parse_catalog_line(&line) {
            Ok(item) if item.matches(query) => items.push(item),
            Ok(_) => {}
            Err(e) => tracing::warn!(
                path = %path.display(),
                line = index + 1,
                error = %e,
                "skipping malformed catalog record"
            ),
        }
    }
    Ok(items)
}

fn validate_food(item: &FoodItem) -> Result<()> {
    let name = item.name.trim();
    if name.is_empty() {
        return Err(NutrackError::InvalidInput("food name cannot be empty".to_string()));
    }
    if name.contains(FIELD_SEPARATOR) || name.contains(['\n', '\r']) {
        return Err(NutrackError::InvalidInput(format!(
            "food name cannot contain '{}' or line breaks",
            FIELD_SEPARATOR
        )));
    }
    if !(item.serving_size.is_finite() && item.serving_size > 0.0) {
        return Err(NutrackError::InvalidInput(
            "serving size must be greater than 0".to_string(),
        ));
    }
    let n = &item.nutrients;
    if [n.calories, n.protein, n.carbs, n.fat]
        .iter()
        .any(|v| !v.is_finite() || *v < 0.0)
    {
        return Err(NutrackError::InvalidInput(
            "nutrient values cannot be negative".to_string(),
        ));
    }
    Ok(())
}
