use std::env;
use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::utils::fs::DataPaths;

const DEFAULT_CONFIG_FILE: &str = "nutrack.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding users.txt, the shared catalog and per-user files
    pub data_dir: PathBuf,
    /// Shared food catalog, relative to `data_dir` unless absolute
    pub catalog_file: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NUTRACK__DATA_DIR, etc.)
    /// 2. Config file given by path, NUTRACK_CONFIG, or ./nutrack.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("data_dir", ".")?
            .set_default("catalog_file", "foods.txt")?
            .set_default("log_level", default_log_level())?;

        match config_path {
            Some(path) => {
                // An explicitly named file must exist
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                let fallback = env::var("NUTRACK_CONFIG")
                    .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
                builder = builder.add_source(File::with_name(&fallback).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRACK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Apply the `--data-dir` override from the command line
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths::new(&self.data_dir, &self.catalog_file)
    }
}
