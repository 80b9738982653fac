// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile, SchedulerSettings, SettingsOverrides};
use crate::config::validate::validate_settings;
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked version.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the settings for a run.
///
/// Layers, lowest priority first: built-in defaults, the optional config
/// file, then command-line overrides. The merged result is validated again
/// since overrides may reintroduce invalid values.
pub fn resolve_settings(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<SchedulerSettings> {
    let base = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading scheduler config");
            load_and_validate(path)?.settings()
        }
        None => SchedulerSettings::default(),
    };

    let settings = base.with_overrides(overrides);
    validate_settings(&settings)?;
    Ok(settings)
}
