//! Configuration document for the doctrine changer.
//!
//! Parsed once at construction time; everything downstream of a parsed
//! `DoctrineConfig` is infallible.

use serde::Deserialize;

use crate::doctrine::DoctrineCategory;
use crate::priority::PriorityDoctrine;

fn default_weight() -> f32 {
    1.0
}

/// One weighted entry in a category's doctrine pool.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorityGroup {
    /// Sampling weight; omitted or non-positive values count as 1.
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// The identifier lists this entry applies when picked.
    #[serde(flatten)]
    pub doctrine: PriorityDoctrine,
}

/// Top-level doctrine configuration: one entry list per category plus the
/// reselection cadence.
///
/// All four category arrays are required. An array may be empty; the pool
/// builder substitutes a single empty doctrine in that case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctrineConfig {
    /// Ticks between doctrine reselections. Values below 1 clamp to 1.
    pub doctrine_change_delay: i64,
    pub warships: Vec<PriorityGroup>,
    pub carriers: Vec<PriorityGroup>,
    pub phase_ships: Vec<PriorityGroup>,
    pub balanced: Vec<PriorityGroup>,
}

impl DoctrineConfig {
    /// Parse a configuration document from JSON.
    ///
    /// Missing category arrays or mistyped fields fail here, before any
    /// doctrine state is built.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reselection cadence in ticks, clamped to a minimum of 1.
    pub fn cadence(&self) -> u32 {
        self.doctrine_change_delay.max(1) as u32
    }

    /// Declared pool entries for one category, in configuration order.
    pub fn groups_for(&self, category: DoctrineCategory) -> &[PriorityGroup] {
        match category {
            DoctrineCategory::Warship => &self.warships,
            DoctrineCategory::Carrier => &self.carriers,
            DoctrineCategory::PhaseFocused => &self.phase_ships,
            DoctrineCategory::Balanced => &self.balanced,
        }
    }
}

/// Errors raised while building doctrine state from configuration.
///
/// Fatal to construction for the session; never retried at runtime.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "doctrine configuration parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
