use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::store::profile::weight_history;
use crate::utils::date::format_journal_date;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths, login: &Login) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let history = weight_history(paths, &profile.username)?;

    println!("Weight History");
    println!("──────────────");
    if history.is_empty() {
        println!("No weight updates recorded. Current weight: {} kg", profile.weight_kg);
        return Ok(());
    }
    for record in &history {
        println!("{:<12}{} kg", format_journal_date(record.date), record.weight_kg);
    }
    Ok(())
}
