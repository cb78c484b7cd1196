use chrono::NaiveDate;

use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::nutrition::advice::remaining;
use crate::store::log::get_daily_log;
use crate::utils::date::format_journal_date;
use crate::utils::fs::DataPaths;

const RULE: &str = "----------------------------------------------------------------------------------";

pub fn run(paths: &DataPaths, login: &Login, date: NaiveDate) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let log = get_daily_log(paths, &profile.username, date)?;

    println!("Consumption for {}", format_journal_date(log.date));
    println!();

    if log.entries.is_empty() {
        println!("No meals logged for this day yet.");
        return Ok(());
    }

    println!("{}", RULE);
    println!(
        "{:<30} | {:<10} | {:<10} | {:<10} | {:<10}",
        "Food", "Calories", "Protein", "Carbs", "Fat"
    );
    println!("{}", RULE);
    for entry in &log.entries {
        let name: String = entry.food_name.chars().take(29).collect();
        println!(
            "{:<30} | {:<10.1} | {:<10.1} | {:<10.1} | {:<10.1}",
            name,
            entry.nutrients.calories,
            entry.nutrients.protein,
            entry.nutrients.carbs,
            entry.nutrients.fat
        );
    }
    println!("{}", RULE);
    println!(
        "{:<30} | {:<10.1} | {:<10.1} | {:<10.1} | {:<10.1}",
        "TOTALS", log.totals.calories, log.totals.protein, log.totals.carbs, log.totals.fat
    );
    println!("{}", RULE);

    let left = remaining(&profile.targets, &log.totals);
    println!();
    println!("Remaining targets:");
    println!("Calories: {:.1}", left.calories);
    println!("Protein:  {:.1}", left.protein);
    println!("Carbs:    {:.1}", left.carbs);
    println!("Fat:      {:.1}", left.fat);
    Ok(())
}
