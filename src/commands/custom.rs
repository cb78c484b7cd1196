use chrono::NaiveDate;

use crate::commands::add::print_logged;
use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::nutrition::food::FoodItem;
use crate::nutrition::journal::MealType;
use crate::store::catalog::add_custom_food;
use crate::store::log::append_entry;
use crate::utils::fs::DataPaths;

#[derive(Debug, Clone)]
pub struct CustomOptions {
    pub food: FoodItem,
    /// Also log this many grams right away
    pub log_grams: Option<f64>,
    pub meal: MealType,
}

pub fn run(
    paths: &DataPaths,
    login: &Login,
    options: CustomOptions,
    date: NaiveDate,
) -> Result<()> {
    let profile = sign_in(paths, login)?;

    add_custom_food(paths, &profile.username, &options.food)?;
    println!("Custom food saved: {}", options.food.name);

    if let Some(grams) = options.log_grams {
        let entry = append_entry(
            paths,
            &profile.username,
            &options.food,
            grams,
            options.meal,
            date,
        )?;
        print_logged(&entry, options.meal);
    }
    Ok(())
}
