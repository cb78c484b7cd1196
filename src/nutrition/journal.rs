//! Daily-log and weight-update blocks of the per-user journal.
//!
//! A journal is a sequence of blocks:
//!
//! ```text
//! DAILY_LOG
//! Date: 2025-6-12
//! Type: Lunch
//! Rice | 195 | 4.05 | 42 | 0.45 | 150
//! END_DAILY_LOG
//!
//! WEIGHT_UPDATE
//! Date: 2025-6-12
//! Weight: 71.5
//! ```
//!
//! Blocks are only ever appended, so the readers here rebuild every view
//! by scanning the whole file.

use std::fmt;
use std::io::{self, BufRead};

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::nutrition::food::{parse_number, FoodItem, Nutrients, RecordError, FIELD_SEPARATOR};
use crate::utils::date::{format_journal_date, parse_journal_date};

pub const DAILY_LOG_START: &str = "DAILY_LOG";
pub const DAILY_LOG_END: &str = "END_DAILY_LOG";
pub const WEIGHT_UPDATE_START: &str = "WEIGHT_UPDATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Custom,
}

impl MealType {
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Custom => "Custom",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        MealType::value_variants()
            .iter()
            .copied()
            .find(|meal| meal.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded act of eating; nutrients are absolute, already scaled to `grams`
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionEntry {
    pub food_name: String,
    pub nutrients: Nutrients,
    pub grams: f64,
    pub date: NaiveDate,
    pub meal_type: Option<MealType>,
}

impl ConsumptionEntry {
    pub fn new(food: &FoodItem, grams: f64, meal_type: MealType, date: NaiveDate) -> Self {
        ConsumptionEntry {
            food_name: food.name.clone(),
            nutrients: food.scaled_to(grams),
            grams,
            date,
            meal_type: Some(meal_type),
        }
    }

    /// The complete DAILY_LOG block holding this entry
    pub fn to_block(&self) -> String {
        let mut block = format!(
            "{}\nDate: {}\n",
            DAILY_LOG_START,
            format_journal_date(self.date)
        );
        if let Some(meal) = self.meal_type {
            block.push_str(&format!("Type: {}\n", meal));
        }
        block.push_str(&format!(
            "{} | {} | {} | {} | {} | {}\n",
            self.food_name,
            self.nutrients.calories,
            self.nutrients.protein,
            self.nutrients.carbs,
            self.nutrients.fat,
            self.grams
        ));
        block.push_str(DAILY_LOG_END);
        block.push_str("\n\n");
        block
    }

    /// Parse `name | cal | protein | carbs | fat | grams`
    fn parse_data_line(
        line: &str,
        date: NaiveDate,
        meal_type: Option<MealType>,
    ) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() < 6 {
            return Err(RecordError::TooFewFields {
                expected: 6,
                found: fields.len(),
            });
        }
        if fields[0].is_empty() {
            return Err(RecordError::EmptyName);
        }

        Ok(ConsumptionEntry {
            food_name: fields[0].to_string(),
            nutrients: Nutrients {
                calories: parse_number("calories", fields[1])?,
                protein: parse_number("protein", fields[2])?,
                carbs: parse_number("carbs", fields[3])?,
                fat: parse_number("fat", fields[4])?,
            },
            grams: parse_number("grams", fields[5])?,
            date,
            meal_type,
        })
    }
}

/// Everything eaten on one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub entries: Vec<ConsumptionEntry>,
    pub totals: Nutrients,
}

impl DailyLog {
    pub fn empty(date: NaiveDate) -> Self {
        DailyLog {
            date,
            entries: Vec::new(),
            totals: Nutrients::default(),
        }
    }

    fn push(&mut self, entry: ConsumptionEntry) {
        self.totals += entry.nutrients;
        self.entries.push(entry);
    }
}

/// Parser state while scanning for DAILY_LOG blocks
enum LogState {
    Outside,
    Inside {
        date: Option<NaiveDate>,
        meal_type: Option<MealType>,
        /// Held back until END_DAILY_LOG so a truncated block adds nothing
        pending: Vec<ConsumptionEntry>,
    },
}

/// Rebuild the log for `date` from a journal.
///
/// Only complete blocks count. Data lines that fail to parse are dropped
/// and logged; the scan always continues.
pub fn collect_daily_log<R: BufRead>(reader: R, date: NaiveDate) -> io::Result<DailyLog> {
    let mut log = DailyLog::empty(date);
    let mut state = LogState::Outside;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line == DAILY_LOG_START {
            if let LogState::Inside { pending, .. } = &state {
                if !pending.is_empty() {
                    tracing::warn!(line = index + 1, "unterminated daily log block discarded");
                }
            }
            state = LogState::Inside {
                date: None,
                meal_type: None,
                pending: Vec::new(),
            };
            continue;
        }

        if line == DAILY_LOG_END {
            if let LogState::Inside { pending, .. } = state {
                for entry in pending {
                    log.push(entry);
                }
            }
            state = LogState::Outside;
            continue;
        }

        let LogState::Inside {
            date: block_date,
            meal_type,
            pending,
        } = &mut state
        else {
            continue;
        };

        // Metadata lines never contain the separator; food names may look like metadata
        if line.contains(FIELD_SEPARATOR) {
            if *block_date == Some(date) {
                match ConsumptionEntry::parse_data_line(line, date, *meal_type) {
                    Ok(entry) => pending.push(entry),
                    Err(e) => {
                        tracing::warn!(line = index + 1, error = %e, "skipping malformed log line");
                    }
                }
            }
        } else if let Some(value) = line.strip_prefix("Date:") {
            *block_date = parse_journal_date(value);
            if block_date.is_none() {
                tracing::warn!(line = index + 1, value = value.trim(), "unreadable block date");
            }
        } else if let Some(value) = line.strip_prefix("Type:") {
            *meal_type = MealType::from_label(value);
        }
    }

    if let LogState::Inside { pending, .. } = state {
        if !pending.is_empty() {
            tracing::warn!("journal ends inside a daily log block; block discarded");
        }
    }

    Ok(log)
}

/// A recorded weight change
#[derive(Debug, Clone, PartialEq)]
pub struct WeightRecord {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

impl WeightRecord {
    pub fn to_block(&self) -> String {
        format!(
            "{}\nDate: {}\nWeight: {}\n\n",
            WEIGHT_UPDATE_START,
            format_journal_date(self.date),
            self.weight_kg
        )
    }
}

/// Every complete WEIGHT_UPDATE block, in file order
pub fn collect_weight_history<R: BufRead>(reader: R) -> io::Result<Vec<WeightRecord>> {
    let mut records = Vec::new();
    let mut inside = false;
    let mut date: Option<NaiveDate> = None;
    let mut weight: Option<f64> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line == WEIGHT_UPDATE_START {
            inside = true;
            date = None;
            weight = None;
            continue;
        }
        if !inside {
            continue;
        }

        if let Some(value) = line.strip_prefix("Date:") {
            date = parse_journal_date(value);
        } else if let Some(value) = line.strip_prefix("Weight:") {
            weight = parse_number("weight", value).ok().filter(|w| *w > 0.0);
        } else if line.is_empty() {
            match (date, weight) {
                (Some(date), Some(weight_kg)) => records.push(WeightRecord { date, weight_kg }),
                _ => tracing::warn!("skipping incomplete weight update block"),
            }
            inside = false;
        }
    }

    // The final block may lack its trailing blank line
    if inside {
        if let (Some(date), Some(weight_kg)) = (date, weight) {
            records.push(WeightRecord { date, weight_kg });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn rice() -> FoodItem {
        FoodItem {
            name: "Rice".to_string(),
            nutrients: Nutrients {
                calories: 130.0,
                protein: 2.7,
                carbs: 28.0,
                fat: 0.3,
            },
            serving_size: 100.0,
        }
    }

    fn read(journal: &str, date: NaiveDate) -> DailyLog {
        collect_daily_log(Cursor::new(journal), date).unwrap()
    }

    #[test]
    fn test_entry_block_format() {
        let entry = ConsumptionEntry::new(&rice(), 200.0, MealType::Lunch, day(12));
        assert_eq!(
            entry.to_block(),
            "DAILY_LOG\nDate: 2025-6-12\nType: Lunch\nRice | 260 | 5.4 | 56 | 0.6 | 200\nEND_DAILY_LOG\n\n"
        );
    }

    #[test]
    fn test_written_block_reads_back_once() {
        let entry = ConsumptionEntry::new(&rice(), 150.0, MealType::Dinner, day(12));
        let log = read(&entry.to_block(), day(12));

        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0], entry);
        assert_eq!(log.totals, entry.nutrients);
    }

    #[test]
    fn test_names_resembling_metadata_read_back() {
        for name in ["Type: Bar", "Date: Snack", "Date: 2025-6-11"] {
            let food = FoodItem {
                name: name.to_string(),
                ..rice()
            };
            let entry = ConsumptionEntry::new(&food, 100.0, MealType::Snack, day(12));
            let log = read(&entry.to_block(), day(12));

            assert_eq!(log.entries.len(), 1, "entry for {:?} lost", name);
            assert_eq!(log.entries[0].food_name, name);
            assert_eq!(log.entries[0].date, day(12));
            assert_eq!(log.entries[0].meal_type, Some(MealType::Snack));
            assert_eq!(log.totals.calories, 130.0);
        }
    }

    #[test]
    fn test_only_requested_date_counts() {
        let journal = format!(
            "{}{}{}",
            ConsumptionEntry::new(&rice(), 100.0, MealType::Lunch, day(11)).to_block(),
            ConsumptionEntry::new(&rice(), 100.0, MealType::Lunch, day(12)).to_block(),
            ConsumptionEntry::new(&rice(), 50.0, MealType::Snack, day(12)).to_block(),
        );

        let log = read(&journal, day(12));
        assert_eq!(log.entries.len(), 2);
        assert!((log.totals.calories - 195.0).abs() < 1e-9);
        assert_eq!(log.entries[1].meal_type, Some(MealType::Snack));
    }

    #[test]
    fn test_empty_day() {
        let journal = ConsumptionEntry::new(&rice(), 100.0, MealType::Lunch, day(11)).to_block();
        let log = read(&journal, day(12));
        assert!(log.entries.is_empty());
        assert_eq!(log.totals, Nutrients::default());
    }

    #[test]
    fn test_profile_lines_are_ignored() {
        let journal = "USER_PROFILE\nName: A | B\nAge: 30\n\nDAILY_LOG\nDate: 2025-6-12\nRice | 130 | 2.7 | 28 | 0.3 | 100\nEND_DAILY_LOG\n\n";
        let log = read(journal, day(12));
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].meal_type, None);
    }

    #[test]
    fn test_unterminated_trailing_block_is_discarded() {
        let complete = ConsumptionEntry::new(&rice(), 100.0, MealType::Lunch, day(12)).to_block();
        let journal = format!(
            "{}DAILY_LOG\nDate: 2025-6-12\nType: Dinner\nRice | 999 | 1 | 1 | 1 | 500\n",
            complete
        );

        let log = read(&journal, day(12));
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.totals.calories, 130.0);
    }

    #[test]
    fn test_block_interrupted_by_new_start_is_discarded() {
        let journal = "DAILY_LOG\nDate: 2025-6-12\nBroken | 500 | 1 | 1 | 1 | 100\nDAILY_LOG\nDate: 2025-6-12\nRice | 130 | 2.7 | 28 | 0.3 | 100\nEND_DAILY_LOG\n";
        let log = read(journal, day(12));
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].food_name, "Rice");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let journal = "DAILY_LOG\nDate: 2025-6-12\nShort | 1 | 2\nBad | x | 1 | 1 | 1 | 100\nRice | 130 | 2.7 | 28 | 0.3 | 100\nEND_DAILY_LOG\n";
        let log = read(journal, day(12));
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.totals.calories, 130.0);
    }

    #[test]
    fn test_data_outside_blocks_is_ignored() {
        let journal = "Rice | 130 | 2.7 | 28 | 0.3 | 100\nDAILY_LOG\nDate: 2025-6-12\nEND_DAILY_LOG\n";
        let log = read(journal, day(12));
        assert!(log.entries.is_empty());
    }

    #[test]
    fn test_padded_dates_match() {
        let journal = "DAILY_LOG\nDate: 2025-06-02\nRice | 130 | 2.7 | 28 | 0.3 | 100\nEND_DAILY_LOG\n";
        let log = read(journal, day(2));
        assert_eq!(log.entries.len(), 1);
    }

    #[test]
    fn test_meal_type_from_label() {
        assert_eq!(MealType::from_label("lunch"), Some(MealType::Lunch));
        assert_eq!(MealType::from_label(" Custom "), Some(MealType::Custom));
        assert_eq!(MealType::from_label("brunch"), None);
    }

    #[test]
    fn test_weight_history() {
        let journal = format!(
            "USER_PROFILE\nWeight: 70\n\n{}{}WEIGHT_UPDATE\nDate: 2025-6-13\n\nWEIGHT_UPDATE\nDate: 2025-6-14\nWeight: 69",
            WeightRecord {
                date: day(10),
                weight_kg: 71.5
            }
            .to_block(),
            ConsumptionEntry::new(&rice(), 100.0, MealType::Lunch, day(11)).to_block(),
        );

        let history = collect_weight_history(Cursor::new(journal)).unwrap();
        assert_eq!(
            history,
            vec![
                WeightRecord {
                    date: day(10),
                    weight_kg: 71.5
                },
                WeightRecord {
                    date: day(14),
                    weight_kg: 69.0
                },
            ]
        );
    }
}
