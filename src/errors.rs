// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::dag::sequencer::CycleDetected;

#[derive(Error, Debug)]
pub enum StepdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("path of input file is required")]
    MissingInput,

    #[error("no steps parsed from input")]
    NoSteps,

    #[error(transparent)]
    CycleDetected(#[from] CycleDetected),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StepdagError {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepdagError::CycleDetected(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, StepdagError>;
