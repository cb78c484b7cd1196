use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{NutrackError, Result};
use crate::nutrition::food::FIELD_SEPARATOR;
use crate::utils::fs::{append_to, data_file_name, open_if_exists};
use crate::utils::hash::password_digest;

/// `users.txt`: one `username|password-digest|data-file` record per line
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: &Path) -> Self {
        CredentialStore {
            path: path.to_path_buf(),
        }
    }

    pub fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.stored_digest(username)?.is_some())
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self
            .stored_digest(username)?
            .is_some_and(|digest| digest == password_digest(username, password)))
    }

    /// Add a new account; the username must be unused
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(NutrackError::InvalidInput("password cannot be empty".to_string()));
        }
        if self.exists(username)? {
            return Err(NutrackError::UsernameTaken(username.to_string()));
        }

        let record = format!(
            "{}{sep}{}{sep}{}\n",
            username,
            password_digest(username, password),
            data_file_name(username),
            sep = FIELD_SEPARATOR
        );
        append_to(&self.path, &record)?;
        tracing::info!(username, "account registered");
        Ok(())
    }

    /// Check a login, telling unknown accounts apart from wrong passwords
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if !self.exists(username)? {
            return Err(NutrackError::UnknownUser(username.to_string()));
        }
        if !self.verify(username, password)? {
            tracing::warn!(username, "failed login");
            return Err(NutrackError::BadCredentials);
        }
        Ok(())
    }

    fn stored_digest(&self, username: &str) -> Result<Option<String>> {
        let Some(reader) = open_if_exists(&self.path)? else {
            return Ok(None);
        };

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split(FIELD_SEPARATOR);
            let (Some(name), Some(digest)) = (fields.next(), fields.next()) else {
                continue;
            };
            if name == username {
                return Ok(Some(digest.to_string()));
            }
        }
        Ok(None)
    }
}

/// Usernames become part of file names, so keep them to a safe character set
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(NutrackError::InvalidInput("username cannot be empty".to_string()));
    }
    let valid = username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.');
    if !valid || username.starts_with('.') {
        return Err(NutrackError::InvalidInput(format!(
            "username \"{}\" may only contain letters, digits, '_', '-' and '.'",
            username
        )));
    }
    Ok(())
}
