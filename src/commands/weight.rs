use chrono::NaiveDate;

use crate::commands::{print_targets, sign_in, Login};
use crate::error::Result;
use crate::store::profile::update_weight;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths, login: &Login, new_weight: f64, date: NaiveDate) -> Result<()> {
    let previous = sign_in(paths, login)?;
    let profile = update_weight(paths, &previous.username, new_weight, date)?;

    println!(
        "Weight updated: {} kg -> {} kg",
        previous.weight_kg, profile.weight_kg
    );
    println!();
    println!("Daily Nutrition Targets");
    println!("───────────────────────");
    print_targets(&profile.targets);
    Ok(())
}
