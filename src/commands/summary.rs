use chrono::NaiveDate;

use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::nutrition::advice::{assess_day, DayVerdict};
use crate::store::log::get_daily_log;
use crate::utils::date::format_journal_date;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths, login: &Login, date: NaiveDate) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let log = get_daily_log(paths, &profile.username, date)?;
    let targets = &profile.targets;

    println!("Daily Summary");
    println!("─────────────");
    println!("Date: {}", format_journal_date(log.date));
    println!("Entries: {}", log.entries.len());
    println!();
    println!("Target / Consumed:");
    println!("Calories: {} / {:.1}", targets.calories, log.totals.calories);
    println!("Protein:  {} / {:.1}", targets.protein_g, log.totals.protein);
    println!("Carbs:    {} / {:.1}", targets.carbs_g, log.totals.carbs);
    println!("Fat:      {} / {:.1}", targets.fat_g, log.totals.fat);
    println!();

    let insight = match assess_day(targets.calories, log.totals.calories) {
        DayVerdict::Below => "Your intake was significantly below recommended levels.",
        DayVerdict::Above => "Your intake was higher than recommended.",
        DayVerdict::OnTarget => "Great job! You hit close to your calorie target.",
    };
    println!("Insight: {}", insight);
    Ok(())
}
