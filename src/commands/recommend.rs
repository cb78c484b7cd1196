use chrono::NaiveDate;

use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::nutrition::advice::{recommend, remaining, Recommendation, Tip};
use crate::store::log::get_daily_log;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths, login: &Login, date: NaiveDate) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let log = get_daily_log(paths, &profile.username, date)?;
    let left = remaining(&profile.targets, &log.totals);

    println!("Meal Recommendations");
    println!("────────────────────");
    println!(
        "Current totals: {:.1} kcal | {:.1}g P | {:.1}g C | {:.1}g F",
        log.totals.calories, log.totals.protein, log.totals.carbs, log.totals.fat
    );
    println!(
        "Remaining:      {:.1} kcal | {:.1}g P | {:.1}g C | {:.1}g F",
        left.calories, left.protein, left.carbs, left.fat
    );
    println!();

    match recommend(&profile.targets, &log.totals) {
        Recommendation::TargetMet => {
            println!("You have met or exceeded your calorie target for today!");
        }
        Recommendation::OnTrack => {
            println!("You are mostly on track! Just a small snack will do.");
        }
        Recommendation::Tips(tips) => {
            for tip in tips {
                print_tip(&tip);
            }
        }
    }
    Ok(())
}

fn print_tip(tip: &Tip) {
    match tip {
        Tip::Protein {
            shortfall_g,
            chicken_breast_g,
        } => {
            println!("[Protein] You need {:.1}g more protein.", shortfall_g);
            println!("  - Chicken breast: about {:.0}g", chicken_breast_g);
            println!("  - Greek yogurt makes a good snack.");
        }
        Tip::Carbs {
            shortfall_g,
            rice_g,
        } => {
            println!("[Carbs] You need {:.1}g more carbs.", shortfall_g);
            println!("  - Oats or rice are great sources.");
            println!("  - Rice: about {:.0}g", rice_g);
        }
        Tip::Fat { shortfall_g } => {
            println!("[Fat] You need {:.1}g more fat.", shortfall_g);
            println!("  - Almonds or peanut butter.");
        }
    }
}
