use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::nutrition::profile_block::ProfileError;

/// Errors surfaced to the command layer
#[derive(Debug, Error)]
pub enum NutrackError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The profile block of a journal could not be loaded
    #[error("Corrupt profile in {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    #[error("No data file for user \"{0}\". Register first with `nutrack register`.")]
    MissingDataFile(String),

    #[error("Data file {} already exists", .0.display())]
    DataFileExists(PathBuf),

    #[error("Username \"{0}\" already exists. Try another!")]
    UsernameTaken(String),

    #[error("Username \"{0}\" not found. Register first with `nutrack register`.")]
    UnknownUser(String),

    #[error("Incorrect password")]
    BadCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No food matches \"{0}\"")]
    NoMatch(String),

    #[error("\"{query}\" matches several foods, choose one with --pick:\n{candidates}")]
    AmbiguousFood { query: String, candidates: String },
}

pub type Result<T> = std::result::Result<T, NutrackError>;
