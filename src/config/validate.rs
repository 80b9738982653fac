// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, SchedulerSettings};
use crate::errors::{Result, StepdagError};
use crate::sim::MAX_LETTER_OFFSET;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::StepdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_settings(&SchedulerSettings::from(&raw.scheduler))?;
        Ok(ConfigFile::new_unchecked(raw.scheduler))
    }
}

/// Check resolved settings, including any command-line overrides.
pub fn validate_settings(settings: &SchedulerSettings) -> Result<()> {
    if settings.workers == 0 {
        return Err(StepdagError::ConfigError(
            "[scheduler].workers must be >= 1 (got 0)".to_string(),
        ));
    }

    if settings.max_ticks == 0 {
        return Err(StepdagError::ConfigError(
            "[scheduler].max_ticks must be >= 1 (got 0)".to_string(),
        ));
    }

    // Task completion times are `start + floor + offset` with `start <= max_ticks`.
    let floor_limit = u64::MAX
        .saturating_sub(MAX_LETTER_OFFSET)
        .saturating_sub(settings.max_ticks);
    if settings.floor > floor_limit {
        return Err(StepdagError::ConfigError(format!(
            "[scheduler].floor must be <= {floor_limit} with max_ticks = {} (got {})",
            settings.max_ticks, settings.floor
        )));
    }

    Ok(())
}
