pub mod add;
pub mod custom;
pub mod history;
pub mod init;
pub mod profile;
pub mod recommend;
pub mod register;
pub mod search;
pub mod summary;
pub mod today;
pub mod weight;

use crate::error::Result;
use crate::nutrition::profile::UserProfile;
use crate::nutrition::targets::Targets;
use crate::store::credentials::CredentialStore;
use crate::store::profile::load_profile;
use crate::utils::fs::DataPaths;

/// Account name and password given on the command line
#[derive(Debug, Clone)]
pub struct Login {
    pub user: String,
    pub password: String,
}

/// Check the credentials and load the user's profile
pub fn sign_in(paths: &DataPaths, login: &Login) -> Result<UserProfile> {
    CredentialStore::new(&paths.credentials()).authenticate(&login.user, &login.password)?;
    load_profile(paths, &login.user)
}

fn print_targets(targets: &Targets) {
    println!("{:<18}{:>6} kcal", "Calories:", targets.calories);
    println!("{:<18}{:>6} g", "Protein:", targets.protein_g);
    println!("{:<18}{:>6} g", "Carbohydrates:", targets.carbs_g);
    println!("{:<18}{:>6} g", "Fat:", targets.fat_g);
}
