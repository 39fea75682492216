//! Process-wide configuration.
//!
//! Layers, lowest first: built-in defaults, optional config file, `EXAM_SCHEDULER_*`
//! environment variables, command-line overrides.

use crate::error::AppError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "EXAM_SCHEDULER";
const DEFAULT_CONFIG_NAME: &str = "exam-scheduler";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database file path or SQLite URI.
    pub database_path: String,
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Reject dates such as `2024-02-31` instead of storing them.
    pub strict_dates: bool,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("exam-scheduler")
}

pub fn default_database_path() -> PathBuf {
    app_data_dir().join("exams.db")
}

impl AppConfig {
    pub fn load(overrides: &CliOverrides) -> Result<Self, AppError> {
        let mut builder = Config::builder()
            .set_default(
                "database_path",
                default_database_path().to_string_lossy().into_owned(),
            )?
            .set_default("log_level", "info")?
            .set_default("strict_dates", false)?;

        builder = match &overrides.config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        if let Some(db) = &overrides.database_path {
            builder = builder.set_override("database_path", db.as_str())?;
        }
        if let Some(level) = &overrides.log_level {
            builder = builder.set_override("log_level", level.as_str())?;
        }

        let cfg: AppConfig = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.database_path.trim().is_empty() {
            return Err(AppError::Config("database_path cannot be empty".into()));
        }
        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("log_level cannot be empty".into()));
        }
        Ok(())
    }

    pub fn database_path(&self) -> &Path {
        Path::new(&self.database_path)
    }
}
