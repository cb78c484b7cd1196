use crate::commands::{sign_in, Login};
use crate::error::Result;
use crate::store::catalog::search;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths, login: &Login, query: &str) -> Result<()> {
    let profile = sign_in(paths, login)?;
    let results = search(paths, query, &profile.username)?;

    if results.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("Results:");
    for (i, item) in results.iter().enumerate() {
        println!(
            "{:>3}. {} ({} kcal/{}g, P {} / C {} / F {})",
            i + 1,
            item.name,
            item.nutrients.calories,
            item.serving_size,
            item.nutrients.protein,
            item.nutrients.carbs,
            item.nutrients.fat
        );
    }
    Ok(())
}
