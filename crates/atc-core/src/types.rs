//! Fundamental identifiers and zone geometry.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::TurnDirection;

/// Stable handle to a registered aircraft.
///
/// `index` is the registry slot; `generation` distinguishes successive
/// occupants of the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftId {
    pub index: u32,
    pub generation: u32,
}

impl AircraftId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}g{}", self.index, self.generation)
    }
}

/// Axis-aligned rectangle in plane units. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}

/// A scalar goal reached linearly over `distance` plane units of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub target: f64,
    pub distance: f64,
}

/// A heading goal with the rotational sense of the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingGoal {
    pub heading: i32,
    pub turn: TurnDirection,
}

/// What a zone tells an aircraft to do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Any combination of goal updates. Absent goals are left untouched.
    Goals {
        #[serde(default)]
        altitude: Option<Goal>,
        /// Speed target in display units (km/h-equivalent).
        #[serde(default)]
        speed: Option<Goal>,
        #[serde(default)]
        heading: Option<HeadingGoal>,
    },
    /// Touch down and roll out to the gate.
    Land,
}

/// One entry of the zone table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub bounds: Bounds,
    pub directive: Directive,
}
