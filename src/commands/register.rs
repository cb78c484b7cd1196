use std::fs;
use std::path::Path;

use crate::commands::print_targets;
use crate::error::{NutrackError, Result};
use crate::nutrition::profile::{ActivityLevel, Gender, UserProfile};
use crate::store::credentials::{validate_username, CredentialStore};
use crate::store::profile::create_user_data_file;
use crate::utils::fs::DataPaths;

const MIN_HEIGHT_CM: f64 = 50.0;
const MAX_HEIGHT_CM: f64 = 300.0;

#[derive(Debug, Clone)]
pub struct RegisterOptions {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
}

pub fn run(paths: &DataPaths, options: RegisterOptions) -> Result<()> {
    validate(&options)?;

    let credentials = CredentialStore::new(&paths.credentials());
    if credentials.exists(&options.username)? {
        return Err(NutrackError::UsernameTaken(options.username));
    }

    let profile = UserProfile::new(
        &options.username,
        options.full_name.trim(),
        options.age,
        options.gender,
        options.height_cm,
        options.weight_kg,
        options.activity,
    );

    fs::create_dir_all(paths.root())?;
    create_user_data_file(paths, &profile)?;
    if let Err(e) = credentials.register(&options.username, &options.password) {
        // Do not leave a journal behind for an account that does not exist
        remove_orphan_journal(&paths.user_data(&options.username));
        return Err(e);
    }

    println!("Profile created for {}", profile.username);
    println!();
    println!("Daily Nutrition Targets");
    println!("───────────────────────");
    print_targets(&profile.targets);
    Ok(())
}

/// Remove the journal of a registration that failed; returns whether it is gone
fn remove_orphan_journal(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not remove journal of failed registration; delete it before retrying"
            );
            false
        }
    }
}

fn validate(options: &RegisterOptions) -> Result<()> {
    validate_username(&options.username)?;
    if options.password.is_empty() {
        return Err(NutrackError::InvalidInput("password cannot be empty".to_string()));
    }

    let name = options.full_name.trim();
    if name.is_empty() || name.contains(['\n', '\r']) {
        return Err(NutrackError::InvalidInput(
            "full name must be a single non-empty line".to_string(),
        ));
    }
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&options.height_cm) {
        return Err(NutrackError::InvalidInput(format!(
            "height must be between {} and {} cm",
            MIN_HEIGHT_CM, MAX_HEIGHT_CM
        )));
    }
    if !(options.weight_kg.is_finite() && options.weight_kg > 0.0) {
        return Err(NutrackError::InvalidInput(
            "weight must be greater than 0 kg".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::profile::load_profile;
    use tempfile::tempdir;

    fn options() -> RegisterOptions {
        RegisterOptions {
            username: "ada".to_string(),
            password: "pw".to_string(),
            full_name: "Ada Lovelace".to_string(),
            age: 25,
            gender: Gender::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_register_creates_account_and_journal() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), Path::new("foods.txt"));

        run(&paths, options()).unwrap();

        let store = CredentialStore::new(&paths.credentials());
        assert!(store.verify("ada", "pw").unwrap());
        assert_eq!(load_profile(&paths, "ada").unwrap().targets.calories, 2009.0);
    }

    #[test]
    fn test_register_twice_fails() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), Path::new("foods.txt"));

        run(&paths, options()).unwrap();
        assert!(matches!(
            run(&paths, options()),
            Err(NutrackError::UsernameTaken(_))
        ));
    }

    #[test]
    fn test_out_of_range_input_rejected() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), Path::new("foods.txt"));

        let short = RegisterOptions {
            height_cm: 20.0,
            ..options()
        };
        assert!(matches!(run(&paths, short), Err(NutrackError::InvalidInput(_))));

        let weightless = RegisterOptions {
            weight_kg: 0.0,
            ..options()
        };
        assert!(run(&paths, weightless).is_err());

        let nameless = RegisterOptions {
            full_name: "  ".to_string(),
            ..options()
        };
        assert!(run(&paths, nameless).is_err());

        assert!(!paths.credentials().exists());
        assert!(!paths.user_data("ada").exists());
    }

    #[test]
    fn test_orphan_journal_cleanup_reports_failure() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), Path::new("foods.txt"));
        let journal = paths.user_data("ada");

        fs::write(&journal, "USER_PROFILE\n").unwrap();
        assert!(remove_orphan_journal(&journal));
        assert!(!journal.exists());

        // Already gone: the failure is reported, not swallowed
        assert!(!remove_orphan_journal(&journal));
    }
}
