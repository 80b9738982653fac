// src/config/mod.rs

//! Configuration loading and validation for stepdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk and merge CLI overrides (`loader.rs`).
//! - Validate settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_settings};
pub use model::{
    ConfigFile, DEFAULT_FLOOR, DEFAULT_MAX_TICKS, DEFAULT_WORKERS, RawConfigFile,
    SchedulerSection, SchedulerSettings, SettingsOverrides,
};
pub use validate::validate_settings;
