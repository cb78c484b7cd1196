use crate::commands::{print_targets, sign_in, Login};
use crate::error::Result;
use crate::utils::fs::DataPaths;

const LABEL_WIDTH: usize = 18;

pub fn run(paths: &DataPaths, login: &Login) -> Result<()> {
    let profile = sign_in(paths, login)?;

    println!("My Profile");
    println!("──────────");
    println!("{:<LABEL_WIDTH$}{}", "Username:", profile.username);
    println!("{:<LABEL_WIDTH$}{}", "Full Name:", profile.full_name);
    println!("{:<LABEL_WIDTH$}{} years", "Age:", profile.age);
    println!("{:<LABEL_WIDTH$}{}", "Gender:", profile.gender);
    println!("{:<LABEL_WIDTH$}{} cm", "Height:", profile.height_cm);
    println!("{:<LABEL_WIDTH$}{} kg", "Weight:", profile.weight_kg);
    println!("{:<LABEL_WIDTH$}{}", "Activity Level:", profile.activity_level);
    println!();
    println!("Daily Nutrition Targets");
    println!("───────────────────────");
    print_targets(&profile.targets);
    Ok(())
}
