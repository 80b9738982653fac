// src/sim/duration.rs

use std::str::FromStr;

use serde::Deserialize;

/// Largest offset any id can add on top of the floor (`Z`).
pub const MAX_LETTER_OFFSET: u64 = 26;

/// How a step id contributes to its duration on top of the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationPolicy {
    /// Offset is the alphabet position of the id's first character
    /// (A/a = 1 ... Z/z = 26). Ids starting with anything else get 0.
    #[default]
    LeadingLetter,
    /// Every step costs exactly the floor.
    Flat,
}

impl FromStr for DurationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leading-letter" | "leading_letter" | "letter" => Ok(DurationPolicy::LeadingLetter),
            "flat" => Ok(DurationPolicy::Flat),
            other => Err(format!(
                "invalid duration_policy: {other} (expected \"leading-letter\" or \"flat\")"
            )),
        }
    }
}

/// Pure mapping from step id to cost in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationModel {
    floor: u64,
    policy: DurationPolicy,
}

impl DurationModel {
    pub fn new(floor: u64, policy: DurationPolicy) -> Self {
        Self { floor, policy }
    }

    /// `floor + offset(id)`, saturating at `u64::MAX`.
    pub fn duration(&self, id: &str) -> u64 {
        self.floor.saturating_add(self.offset(id))
    }

    fn offset(&self, id: &str) -> u64 {
        match self.policy {
            DurationPolicy::Flat => 0,
            DurationPolicy::LeadingLetter => letter_offset(id),
        }
    }
}

impl Default for DurationModel {
    fn default() -> Self {
        Self::new(0, DurationPolicy::default())
    }
}

/// Alphabet position of the first character, 0 if it is not an ASCII letter.
fn letter_offset(id: &str) -> u64 {
    match id.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            u64::from(c.to_ascii_uppercase() as u8 - b'A') + 1
        }
        _ => 0,
    }
}
