use chrono::NaiveDate;

use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::nutrition::journal::{ConsumptionEntry, MealType};
use crate::store::catalog::resolve_food;
use crate::store::log::append_entry;
use crate::utils::fs::DataPaths;

#[derive(Debug, Clone)]
pub struct AddOptions {
    pub query: String,
    pub grams: f64,
    pub meal: MealType,
    pub pick: Option<usize>,
}

pub fn run(paths: &DataPaths, login: &Login, options: AddOptions, date: NaiveDate) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let food = resolve_food(paths, &options.query, &profile.username, options.pick)?;
    println!("You selected: {}", food.name);

    let entry = append_entry(
        paths,
        &profile.username,
        &food,
        options.grams,
        options.meal,
        date,
    )?;
    print_logged(&entry, options.meal);
    Ok(())
}

pub(crate) fn print_logged(entry: &ConsumptionEntry, meal: MealType) {
    println!(
        "Added {}g of {} to {}: {:.1} kcal, P {:.1}g / C {:.1}g / F {:.1}g",
        entry.grams,
        entry.food_name,
        meal,
        entry.nutrients.calories,
        entry.nutrients.protein,
        entry.nutrients.carbs,
        entry.nutrients.fat
    );
}
