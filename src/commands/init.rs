use std::fs;

use crate::error::Result;
use crate::templates::FOODS_TEMPLATE;
use crate::utils::fs::DataPaths;

pub fn run(paths: &DataPaths) -> Result<()> {
    fs::create_dir_all(paths.root())?;

    let catalog = paths.catalog();
    if catalog.exists() {
        println!("Skipped: {} (already exists)", catalog.display());
    } else {
        if let Some(parent) = catalog.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(catalog, FOODS_TEMPLATE)?;
        println!("Created: {}", catalog.display());
    }

    println!("Initialized nutrack data directory {}", paths.root().display());
    println!("Next: nutrack register --username <name> ...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_init_seeds_catalog_once() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(&dir.path().join("data"), Path::new("foods.txt"));

        run(&paths).unwrap();
        assert_eq!(fs::read_to_string(paths.catalog()).unwrap(), FOODS_TEMPLATE);

        fs::write(paths.catalog(), "Mine|1|1|1|1|100g\n").unwrap();
        run(&paths).unwrap();
        assert_eq!(
            fs::read_to_string(paths.catalog()).unwrap(),
            "Mine|1|1|1|1|100g\n"
        );
    }
}
