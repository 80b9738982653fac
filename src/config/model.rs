// src/config/model.rs

use serde::Deserialize;

use crate::sim::DurationPolicy;

/// Worker-pool size used when nothing else is configured.
pub const DEFAULT_WORKERS: usize = 5;
/// Duration floor used when nothing else is configured.
pub const DEFAULT_FLOOR: u64 = 60;
/// Tick guard used when nothing else is configured.
pub const DEFAULT_MAX_TICKS: u64 = 100_000;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [scheduler]
/// workers = 5
/// floor = 60
/// max_ticks = 100000
/// duration_policy = "leading-letter"
/// ```
///
/// All sections and keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerSection {
    /// Number of workers in the pool.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Base duration added to every step.
    #[serde(default = "default_floor")]
    pub floor: u64,

    /// Simulation stops once the clock reaches this many ticks.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// `"leading-letter"` (default) or `"flat"`.
    #[serde(default)]
    pub duration_policy: DurationPolicy,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_floor() -> u64 {
    DEFAULT_FLOOR
}

fn default_max_ticks() -> u64 {
    DEFAULT_MAX_TICKS
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            floor: default_floor(),
            max_ticks: default_max_ticks(),
            duration_policy: DurationPolicy::default(),
        }
    }
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub scheduler: SchedulerSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(scheduler: SchedulerSection) -> Self {
        Self { scheduler }
    }

    pub fn settings(&self) -> SchedulerSettings {
        SchedulerSettings::from(&self.scheduler)
    }
}

/// Fully resolved knobs for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSettings {
    pub workers: usize,
    pub floor: u64,
    pub max_ticks: u64,
    pub duration_policy: DurationPolicy,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self::from(&SchedulerSection::default())
    }
}

impl From<&SchedulerSection> for SchedulerSettings {
    fn from(section: &SchedulerSection) -> Self {
        Self {
            workers: section.workers,
            floor: section.floor,
            max_ticks: section.max_ticks,
            duration_policy: section.duration_policy,
        }
    }
}

/// Values supplied on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOverrides {
    pub workers: Option<usize>,
    pub floor: Option<u64>,
    pub max_ticks: Option<u64>,
    pub duration_policy: Option<DurationPolicy>,
}

impl SchedulerSettings {
    /// Layer `overrides` on top of these settings.
    pub fn with_overrides(self, overrides: &SettingsOverrides) -> Self {
        Self {
            workers: overrides.workers.unwrap_or(self.workers),
            floor: overrides.floor.unwrap_or(self.floor),
            max_ticks: overrides.max_ticks.unwrap_or(self.max_ticks),
            duration_policy: overrides.duration_policy.unwrap_or(self.duration_policy),
        }
    }
}
