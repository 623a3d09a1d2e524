// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only the control's *configuration* (star count and star size) is
//! persisted. The rating itself never is: restoring a previously stored
//! rating is the host's job, done through `State::set_rating` or the
//! `--rating` flag.
//!
//! # Examples
//!
//! ```no_run
//! use rating_stars::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.star_count = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "RatingStars";

/// Number of stars in the row when nothing else is configured.
pub const DEFAULT_STAR_COUNT: u32 = 5;

/// Per-star width and height in logical pixels when nothing else is
/// configured.
pub const DEFAULT_STAR_SIZE: f32 = 44.0;

/// Lower bound of the demo's star-count stepper.
pub const MIN_STAR_COUNT: u32 = 1;

/// Upper bound of the demo's star-count stepper.
pub const MAX_STAR_COUNT: u32 = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub star_count: Option<u32>,
    #[serde(default)]
    pub star_size: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: Some(DEFAULT_STAR_COUNT),
            star_size: Some(DEFAULT_STAR_SIZE),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            star_count: Some(7),
            star_size: Some(32.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.star_count, config.star_count);
        assert_eq!(loaded.star_size, config.star_size);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.star_count, Some(DEFAULT_STAR_COUNT));
        assert_eq!(loaded.star_size, Some(DEFAULT_STAR_SIZE));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            star_count: Some(3),
            star_size: Some(56.0),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_control_defaults() {
        let config = Config::default();
        assert_eq!(config.star_count, Some(5));
        assert_eq!(config.star_size, Some(44.0));
    }
}
