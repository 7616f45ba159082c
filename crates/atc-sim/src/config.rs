//! Simulation configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use atc_core::constants::*;
use atc_core::enums::ZoneLayout;
use atc_core::error::{AtcError, Result};
use atc_core::types::Zone;

use crate::zones::ZoneTable;

/// Configuration for starting a new simulation.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for generated traffic. Same seed = same traffic.
    pub seed: u64,
    /// Interval between two ticks of one aircraft.
    pub tick_interval_ms: u64,
    /// Interval between two rendered frames.
    pub frame_interval_ms: u64,
    /// Size of the driver's worker pool.
    pub workers: usize,
    /// Built-in zone geometry, used when `zones` is absent.
    pub zone_layout: ZoneLayout,
    /// Full custom zone table, in priority order.
    pub zones: Option<Vec<Zone>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_interval_ms: TICK_INTERVAL_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            workers: DEFAULT_WORKER_COUNT,
            zone_layout: ZoneLayout::default(),
            zones: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(AtcError::InvalidConfig(
                "tick_interval_ms must be positive".into(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(AtcError::InvalidConfig(
                "frame_interval_ms must be positive".into(),
            ));
        }
        if self.workers == 0 {
            return Err(AtcError::InvalidConfig("workers must be at least 1".into()));
        }
        self.zone_table().map(|_| ())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// The zone table this configuration selects, validated.
    pub fn zone_table(&self) -> Result<ZoneTable> {
        match &self.zones {
            Some(zones) => ZoneTable::new(zones.clone()),
            None => Ok(ZoneTable::for_layout(self.zone_layout)),
        }
    }
}
