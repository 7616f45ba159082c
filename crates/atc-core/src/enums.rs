//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtcError;

/// Rotational sense of a commanded turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    #[default]
    Right,
}

/// Flight lifecycle. Transitions are one-way: Cruising → Landing → Docked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Following zone directives toward the runway.
    #[default]
    Cruising,
    /// On the runway, decelerating. Altitude is pinned to zero.
    Landing,
    /// Stopped at the gate. Terminal.
    Docked,
}

/// Where inbound traffic enters the airspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryPoint {
    South,
    NorthEast,
    NorthWest,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 3] = [
        EntryPoint::South,
        EntryPoint::NorthEast,
        EntryPoint::NorthWest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntryPoint::South => "South",
            EntryPoint::NorthEast => "NorthEast",
            EntryPoint::NorthWest => "NorthWest",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryPoint {
    type Err = AtcError;

    /// Accepts the canonical names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EntryPoint::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AtcError::UnknownEntryPoint(trimmed.to_string()))
    }
}

/// Controller-wide separation alert.
///
/// The conflict scan only ever raises the alert. Leaving `Raised` requires an
/// explicit acknowledge, and only an acknowledged alert can be cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertState {
    #[default]
    Clear,
    Raised,
    Acknowledged,
}

impl AlertState {
    /// Whether the global danger banner should be shown.
    pub fn is_active(self) -> bool {
        !matches!(self, AlertState::Clear)
    }
}

/// Which variant of the fixed zone geometry to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneLayout {
    #[default]
    Standard,
    /// Narrower final-turn zone and a shorter landing box.
    Alternate,
}

/// Built-in traffic scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Eleven aircraft spread along the three entry streams.
    Safe,
    /// `Safe` plus one aircraft injected too close behind another.
    Danger,
    /// Seeded random traffic.
    Random,
}
