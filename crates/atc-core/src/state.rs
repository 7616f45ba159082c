//! Airspace snapshot: the read-only view handed to renderers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertState, FlightPhase};
use crate::types::AircraftId;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirspaceSnapshot {
    /// Visible (non-docked) aircraft, ordered by registry slot.
    pub aircraft: Vec<AircraftView>,
    /// Drives the global danger banner.
    pub alert: AlertState,
    /// Aircraft that have reached the gate so far.
    pub docked: usize,
}

/// One visible aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub callsign: String,
    pub model: String,
    pub position: DVec2,
    pub altitude: f64,
    /// Display units (km/h-equivalent).
    pub speed: f64,
    /// Degrees, normalized into [0, 360).
    pub heading: i32,
    pub phase: FlightPhase,
    pub endangered: bool,
}

impl AirspaceSnapshot {
    pub fn endangered_count(&self) -> usize {
        self.aircraft.iter().filter(|a| a.endangered).count()
    }

    pub fn find(&self, callsign: &str) -> Option<&AircraftView> {
        self.aircraft.iter().find(|a| a.callsign == callsign)
    }
}
