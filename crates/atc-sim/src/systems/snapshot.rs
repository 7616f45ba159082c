//! Snapshot system: builds the renderer's read-only view.

use std::sync::Arc;

use atc_core::enums::AlertState;
use atc_core::state::{AircraftView, AirspaceSnapshot};
use atc_core::types::AircraftId;

use crate::aircraft::Aircraft;

/// Build an `AirspaceSnapshot` from registry entries. Docked aircraft are
/// left out.
pub fn build_snapshot(
    entries: &[(AircraftId, Arc<Aircraft>)],
    alert: AlertState,
    docked: usize,
) -> AirspaceSnapshot {
    let aircraft = entries
        .iter()
        .filter_map(|(id, aircraft)| {
            let flight = aircraft.observe();
            if flight.is_docked() {
                return None;
            }
            Some(AircraftView {
                id: *id,
                callsign: aircraft.callsign().to_string(),
                model: aircraft.model().to_string(),
                position: flight.position(),
                altitude: flight.altitude(),
                speed: flight.speed(),
                heading: flight.display_heading(),
                phase: flight.phase(),
                endangered: aircraft.is_endangered(),
            })
        })
        .collect();

    AirspaceSnapshot {
        aircraft,
        alert,
        docked,
    }
}
