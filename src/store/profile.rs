use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{NutrackError, Result};
use crate::nutrition::journal::{collect_weight_history, WeightRecord};
use crate::nutrition::profile::UserProfile;
use crate::nutrition::profile_block::{
    read_profile_block, replace_profile_block, write_profile_block, ProfileError,
};
use crate::utils::fs::{open_if_exists, replace_file, username_from_data_file, DataPaths};

/// Create the user's journal holding just the profile block
pub fn create_user_data_file(paths: &DataPaths, profile: &UserProfile) -> Result<()> {
    let path = paths.user_data(&profile.username);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(NutrackError::DataFileExists(path));
        }
        Err(e) => return Err(e.into()),
    };
    write_profile_block(&mut file, profile)?;
    file.flush()?;
    tracing::info!(path = %path.display(), "profile saved");
    Ok(())
}

/// Load a profile, recomputing its targets.
///
/// The username comes from the journal's file name when it follows the
/// `user_<name>_data.txt` convention, otherwise from `username`.
pub fn load_profile(paths: &DataPaths, username: &str) -> Result<UserProfile> {
    let path = paths.user_data(username);
    let reader =
        open_if_exists(&path)?.ok_or_else(|| NutrackError::MissingDataFile(username.to_string()))?;

    let owner = username_from_data_file(&path).unwrap_or_else(|| username.to_string());
    read_profile_block(reader)
        .and_then(|block| block.into_profile(&owner))
        .map_err(|source| profile_error(&path, source))
}

/// Set a new weight, rewrite the profile block and append a weight-history record.
///
/// The journal is rewritten as a whole through a temp file, so a profile
/// block whose length changed cannot clobber the blocks after it. The
/// caller must be the only process touching the file.
pub fn update_weight(
    paths: &DataPaths,
    username: &str,
    new_weight: f64,
    date: NaiveDate,
) -> Result<UserProfile> {
    if !(new_weight.is_finite() && new_weight > 0.0) {
        return Err(NutrackError::InvalidInput(
            "weight must be greater than 0 kg".to_string(),
        ));
    }

    let mut profile = load_profile(paths, username)?;
    profile.set_weight(new_weight);

    let path = paths.user_data(username);
    let content = fs::read_to_string(&path)?;
    let mut updated =
        replace_profile_block(&content, &profile).map_err(|source| profile_error(&path, source))?;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(
        &WeightRecord {
            date,
            weight_kg: new_weight,
        }
        .to_block(),
    );

    replace_file(&path, &updated)?;
    tracing::info!(
        path = %path.display(),
        weight_kg = new_weight,
        calories = profile.targets.calories,
        "weight updated"
    );
    Ok(profile)
}

/// Every recorded weight change, oldest first
pub fn weight_history(paths: &DataPaths, username: &str) -> Result<Vec<WeightRecord>> {
    let path = paths.user_data(username);
    match open_if_exists(&path)? {
        Some(reader) => Ok(collect_weight_history(reader)?),
        None => Ok(Vec::new()),
    }
}

fn profile_error(path: &Path, source: ProfileError) -> NutrackError {
    match source {
        ProfileError::Io(e) => NutrackError::Io(e),
        source => NutrackError::Profile {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::food::{FoodItem, Nutrients};
    use crate::nutrition::journal::MealType;
    use crate::nutrition::profile::{ActivityLevel, Gender};
    use crate::store::log::{append_entry, get_daily_log};
    use tempfile::tempdir;

    fn ada() -> UserProfile {
        UserProfile::new(
            "ada",
            "Ada Lovelace",
            25,
            Gender::Male,
            175.0,
            70.0,
            ActivityLevel::Sedentary,
        )
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn paths(dir: &Path) -> DataPaths {
        DataPaths::new(dir, Path::new("foods.txt"))
    }

    #[test]
    fn test_create_and_load() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());

        create_user_data_file(&paths, &ada()).unwrap();
        let loaded = load_profile(&paths, "ada").unwrap();

        assert_eq!(loaded, ada());
        assert_eq!(loaded.targets.calories, 2009.0);
    }

    #[test]
    fn test_create_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());

        create_user_data_file(&paths, &ada()).unwrap();
        let result = create_user_data_file(&paths, &ada());
        assert!(matches!(result, Err(NutrackError::DataFileExists(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_profile(&paths(dir.path()), "ghost");
        assert!(matches!(result, Err(NutrackError::MissingDataFile(_))));
    }

    #[test]
    fn test_load_corrupt_profile_is_surfaced() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());
        fs::write(
            paths.user_data("ada"),
            "USER_PROFILE\nName: Ada\nAge: 25\nGender: Male\nHeight: tall\nWeight: 70\nActivity_Level: Sedentary\n\n",
        )
        .unwrap();

        let err = load_profile(&paths, "ada").unwrap_err();
        assert!(matches!(
            err,
            NutrackError::Profile {
                source: ProfileError::InvalidValue { key: "Height", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_update_weight_preserves_logs_and_records_history() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());
        create_user_data_file(&paths, &ada()).unwrap();

        let rice = FoodItem {
            name: "Rice".to_string(),
            nutrients: Nutrients {
                calories: 130.0,
                protein: 2.7,
                carbs: 28.0,
                fat: 0.3,
            },
            serving_size: 100.0,
        };
        append_entry(&paths, "ada", &rice, 100.0, MealType::Lunch, day(12)).unwrap();

        // A longer weight string than before must not corrupt the following blocks
        let updated = update_weight(&paths, "ada", 102.375, day(12)).unwrap();
        assert_eq!(updated.weight_kg, 102.375);
        assert_eq!(updated.targets.protein_g, 205.0);

        let reloaded = load_profile(&paths, "ada").unwrap();
        assert_eq!(reloaded, updated);

        let log = get_daily_log(&paths, "ada", day(12)).unwrap();
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.totals.calories, 130.0);

        update_weight(&paths, "ada", 99.5, day(13)).unwrap();
        let history = weight_history(&paths, "ada").unwrap();
        assert_eq!(
            history,
            vec![
                WeightRecord {
                    date: day(12),
                    weight_kg: 102.375
                },
                WeightRecord {
                    date: day(13),
                    weight_kg: 99.5
                },
            ]
        );

        let content = fs::read_to_string(paths.user_data("ada")).unwrap();
        assert_eq!(content.matches("USER_PROFILE").count(), 1);
        assert!(content.starts_with("USER_PROFILE\nName: Ada Lovelace\nAge: 25\nGender: Male\nHeight: 175\nWeight: 99.5\n"));
    }

    #[test]
    fn test_update_weight_rejects_non_positive() {
        let dir = tempdir().unwrap();
        let paths = paths(dir.path());
        create_user_data_file(&paths, &ada()).unwrap();

        assert!(matches!(
            update_weight(&paths, "ada", 0.0, day(12)),
            Err(NutrackError::InvalidInput(_))
        ));
        assert!(weight_history(&paths, "ada").unwrap().is_empty());
    }
}
