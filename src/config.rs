// File: ./src/config.rs
// Optional user configuration (TOML)
use crate::storage::DEFAULT_DATA_FILE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "SCHOOL_HELPER_CONFIG";
pub const DATA_ENV: &str = "SCHOOL_HELPER_DATA";

/// Who a parent may look up in the grade book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentVisibility {
    /// The student must have at least one grade in `parent_gate_subject`.
    #[default]
    RequireSubject,
    AnySubject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: PathBuf,
    pub reminder_days: i64,
    pub parent_visibility: ParentVisibility,
    pub parent_gate_subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            reminder_days: 3,
            parent_visibility: ParentVisibility::default(),
            parent_gate_subject: "Math".to_string(),
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("org", "school-helper", "school-helper")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Missing file means defaults. `SCHOOL_HELPER_DATA` wins over `data_file`.
    pub fn load() -> Result<Self> {
        let config = match Self::get_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("cannot read config {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            _ => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(data) = env::var(DATA_ENV)
            && !data.trim().is_empty()
        {
            self.data_file = PathBuf::from(data);
        }
        self
    }
}
