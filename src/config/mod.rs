mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Job, UserProfile};

/// Get the config directory path (~/.config/job-match/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("job-match"))
}

/// Get the default config file path (~/.config/job-match/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/job-match/config.yaml) and falls back to built-in defaults
///   when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => return Ok(Config::default()),
        },
    };

    read_yaml(&config_path, "config")
}

/// Load a candidate profile from a YAML file
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    read_yaml(path, "profile")
}

/// Load a list of job postings from a YAML file whose top level is a sequence
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    read_yaml(path, "jobs")
}

fn read_yaml<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file at {}", what, path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse {}: invalid YAML in {}", what, path.display()))
}
