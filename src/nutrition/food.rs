use std::ops::{AddAssign, Sub};

use thiserror::Error;

pub const FIELD_SEPARATOR: char = '|';
pub const DEFAULT_SERVING_G: f64 = 100.0;

/// Why a single catalog or journal line was dropped
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("field {field} is not a number: \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },

    #[error("empty food name")]
    EmptyName,

    #[error("serving size must be positive, got {0}")]
    NonPositiveServing(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrients {
    pub fn scaled(&self, ratio: f64) -> Nutrients {
        Nutrients {
            calories: self.calories * ratio,
            protein: self.protein * ratio,
            carbs: self.carbs * ratio,
            fat: self.fat * ratio,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, other: Nutrients) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }
}

impl Sub for Nutrients {
    type Output = Nutrients;

    fn sub(self, other: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories - other.calories,
            protein: self.protein - other.protein,
            carbs: self.carbs - other.carbs,
            fat: self.fat - other.fat,
        }
    }
}

/// A catalog food; nutrient values are per `serving_size` grams
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub nutrients: Nutrients,
    pub serving_size: f64,
}

impl FoodItem {
    /// Nutrients for `grams` of this food
    pub fn scaled_to(&self, grams: f64) -> Nutrients {
        self.nutrients.scaled(grams / self.serving_size)
    }

    /// Parse `name|calories|protein|carbs|fat|servingSize[unit]`
    pub fn parse_catalog_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() < 6 {
            return Err(RecordError::TooFewFields {
                expected: 6,
                found: fields.len(),
            });
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let nutrients = Nutrients {
            calories: parse_number("calories", fields[1])?,
            protein: parse_number("protein", fields[2])?,
            carbs: parse_number("carbs", fields[3])?,
            fat: parse_number("fat", fields[4])?,
        };

        // "182g" -> "182"
        let serving = fields[5].trim_end_matches(|c: char| c.is_alphabetic()).trim();
        let serving_size = parse_number("serving size", serving)?;
        if serving_size <= 0.0 {
            return Err(RecordError::NonPositiveServing(serving_size));
        }

        Ok(FoodItem {
            name: name.to_string(),
            nutrients,
            serving_size,
        })
    }

    /// Catalog record for this food, newline-terminated
    pub fn to_catalog_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}g\n",
            self.name,
            self.nutrients.calories,
            self.nutrients.protein,
            self.nutrients.carbs,
            self.nutrients.fat,
            self.serving_size
        )
    }

    /// Case-insensitive substring match on the name; an empty query matches everything
    pub fn matches(&self, query: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<f64, RecordError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
