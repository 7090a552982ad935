//! This module handles the structuring, valid options, and parsing of user config
//! files. User config files must be `config.toml` and are parsed with [`serde`] and
//! respectively serde's [`toml`] crate.

pub mod errors;
mod appearance;
mod board;
pub use appearance::*;
pub use board::*;

use crate::configs::errors::{ConfigError, InvalidConfig};
use serde::Deserialize;
use std::{
    ops::Range,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tracing::info;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Represents the entire `config.toml` configuration file.
///
/// See [`Board`] and [`Appearance`]
#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub appearance: Appearance,
}

impl Config {
    /// Parses the contents of the config file at `path`, filling in unspecified
    /// fields with their defaults.
    ///
    /// # Errors
    /// A [`ConfigError::Invalid`] pointing at the offending part of `contents`,
    /// labelled with `path`.
    pub fn from_toml(contents: String, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(&contents).map_err(|e| {
            InvalidConfig::new(
                e.span().unwrap_or(Range { start: 0, end: 0 }),
                path.display().to_string(),
                contents.clone(),
                e.message(),
            )
            .into()
        })
    }

    fn apply_overrides(&mut self, overrides: ConfigOverride) {
        if let Some(rows) = overrides.rows {
            self.board.rows = rows;
        }
        if let Some(columns) = overrides.columns {
            self.board.columns = columns;
        }
        if let Some(empty) = overrides.empty {
            self.appearance.empty = empty;
        }
    }
}

/// This function constructs a `static CONFIG` for the rest of boardgrid to get a
/// reference to throughout the remainder of the program.
///
/// It checks for the user's config file and if it doesn't exist, it will use
/// [`Config::default()`]. If the user's config does exist but does not set values
/// for every field, the global `static CONFIG` will be initialized with the user's
/// values and fill in the unspecified fields with their default values.
///
/// # Errors
/// When the config file cannot be read or parsed, or when the config was
/// already initialized.
pub fn initialize_config(overrides: ConfigOverride) -> Result<(), ConfigError> {
    let mut config = if let Some(config_file) = get_config_file() {
        info!(path = %config_file.display(), "loading config");
        let contents =
            std::fs::read_to_string(&config_file).map_err(|source| ConfigError::Unreadable {
                path: config_file.clone(),
                source,
            })?;
        Config::from_toml(contents, &config_file)?
    } else {
        info!("no config file found, using defaults");
        Config::default()
    };

    config.apply_overrides(overrides);

    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(())
}

/// When called, `get_config()` returns a reference to the global `static CONFIG`
/// that was initialized at the start of the program.
///
/// See [`Config`].
///
/// # Panics
/// When [`initialize_config`] has not been called yet.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Values given on the command line, they take precedence over `config.toml`.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverride {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub empty: Option<String>,
}

fn get_conf_dir() -> Option<PathBuf> {
    let mut user_home_dir = std::env::home_dir()?;

    if cfg!(target_os = "windows") {
        user_home_dir.push(".config\\boardgrid");
    } else {
        user_home_dir.push(".config/boardgrid");
    }

    Some(user_home_dir)
}

fn get_config_file() -> Option<PathBuf> {
    let conf_file = get_conf_dir()?.join("config.toml");
    (conf_file.exists() && conf_file.is_file()).then_some(conf_file)
}
