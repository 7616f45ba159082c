//! Airspace controller: the shared hub every aircraft loop calls into.
//!
//! `AirspaceController` owns the registry of live aircraft, the zone table
//! and the global alert. It has no loop of its own: whoever ticks an aircraft
//! (a driver worker or the lockstep `step`) runs `tick_aircraft`, which
//! advances the aircraft and then calls back into zone dispatch and the
//! conflict scan. All methods take `&self` and are safe to call from any
//! thread.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use atc_core::enums::{AlertState, FlightPhase};
use atc_core::error::Result;
use atc_core::state::AirspaceSnapshot;
use atc_core::types::AircraftId;

use crate::aircraft::Aircraft;
use crate::config::SimConfig;
use crate::registry::Registry;
use crate::systems::conflict::{self, Conflict};
use crate::systems::{snapshot, zone_dispatch};
use crate::zones::ZoneTable;

pub struct AirspaceController {
    registry: Registry,
    zones: ZoneTable,
    alert: Mutex<AlertState>,
    docked: AtomicUsize,
}

impl AirspaceController {
    pub fn new(zones: ZoneTable) -> Self {
        Self {
            registry: Registry::new(),
            zones,
            alert: Mutex::new(AlertState::Clear),
            docked: AtomicUsize::new(0),
        }
    }

    /// Build a controller with the zone table the configuration selects.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        Ok(Self::new(config.zone_table()?))
    }

    // --- Registry ---

    pub fn register(&self, aircraft: Aircraft) -> AircraftId {
        let flight = aircraft.observe();
        let callsign = aircraft.callsign().to_string();
        let id = self.registry.insert(Arc::new(aircraft));
        tracing::info!(
            %id,
            callsign = %callsign,
            x = flight.position().x,
            y = flight.position().y,
            altitude = flight.altitude(),
            "Aircraft registered"
        );
        id
    }

    pub fn deregister(&self, id: AircraftId) -> Option<Arc<Aircraft>> {
        self.registry.remove(id)
    }

    pub fn get(&self, id: AircraftId) -> Option<Arc<Aircraft>> {
        self.registry.get(id)
    }

    /// Copy of all live aircraft, ordered by registry slot.
    pub fn aircraft(&self) -> Vec<(AircraftId, Arc<Aircraft>)> {
        self.registry.entries()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    /// Aircraft that have reached the gate and left the registry.
    pub fn docked_count(&self) -> usize {
        self.docked.load(Ordering::Acquire)
    }

    // --- Per-tick operations ---

    /// Apply the first matching zone directive to a cruising `aircraft`.
    /// Returns the matched zone index; always `None` once it is landing.
    pub fn apply_zone_directive(&self, aircraft: &Aircraft) -> Option<usize> {
        let (hit, cleared_to_land) = aircraft.with_flight(|flight| {
            let was_landing = flight.is_landing();
            let hit = zone_dispatch::apply(&self.zones, flight);
            (hit, !was_landing && flight.is_landing())
        });

        if let Some(index) = hit {
            tracing::debug!(
                callsign = aircraft.callsign(),
                zone = %self.zones.zones()[index].name,
                "Zone directive applied"
            );
        }
        if cleared_to_land {
            tracing::info!(callsign = aircraft.callsign(), "Touchdown");
        }
        hit
    }

    /// Check every ordered pair of live aircraft for a separation violation.
    /// Both aircraft of a violating pair are marked endangered and the alert
    /// is raised. Returns the violating pairs found by this scan.
    pub fn run_conflict_scan(&self) -> Vec<Conflict> {
        let entries = self.registry.entries();
        let observations: Vec<_> = entries
            .iter()
            .map(|(id, aircraft)| (*id, aircraft.observe()))
            .collect();

        let conflicts = conflict::find_conflicts(&observations);
        if conflicts.is_empty() {
            return conflicts;
        }

        let by_id: HashMap<AircraftId, &Aircraft> = entries
            .iter()
            .map(|(id, aircraft)| (*id, aircraft.as_ref()))
            .collect();
        let mut newly_endangered = false;
        for c in &conflicts {
            for id in [c.first, c.second] {
                let Some(aircraft) = by_id.get(&id) else {
                    continue;
                };
                if aircraft.mark_endangered() {
                    newly_endangered = true;
                    tracing::warn!(
                        callsign = aircraft.callsign(),
                        distance = c.distance,
                        buffer = c.buffer,
                        "Separation lost"
                    );
                }
            }
        }
        self.raise_alert(newly_endangered);
        conflicts
    }

    /// Run one tick of `aircraft`: kinematics, then either the gate check
    /// (landing) or zone dispatch and the conflict scan (cruising). A docked
    /// aircraft is removed from the registry. Returns the phase after the tick.
    pub fn tick_aircraft(&self, id: AircraftId, aircraft: &Aircraft) -> FlightPhase {
        let phase = aircraft.with_flight(|flight| {
            flight.advance();
            if flight.is_landing() {
                flight.has_reached_gate();
            }
            flight.phase()
        });

        match phase {
            FlightPhase::Cruising => {
                self.apply_zone_directive(aircraft);
                self.run_conflict_scan();
                // The runway zone may have just landed it.
                aircraft.observe().phase()
            }
            FlightPhase::Landing => phase,
            FlightPhase::Docked => {
                if self.registry.remove(id).is_some() {
                    let docked = self.docked.fetch_add(1, Ordering::AcqRel) + 1;
                    tracing::info!(callsign = aircraft.callsign(), docked, "Aircraft at gate");
                }
                phase
            }
        }
    }

    /// Tick every registered aircraft once, in registry order. Returns the
    /// number of aircraft ticked.
    pub fn step(&self) -> usize {
        let entries = self.registry.entries();
        for (id, aircraft) in &entries {
            self.tick_aircraft(*id, aircraft);
        }
        entries.len()
    }

    pub fn snapshot(&self) -> AirspaceSnapshot {
        snapshot::build_snapshot(
            &self.registry.entries(),
            self.alert_state(),
            self.docked_count(),
        )
    }

    // --- Alert ---

    pub fn alert_state(&self) -> AlertState {
        *self.alert.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// An acknowledged alert is raised again only when another aircraft
    /// becomes endangered.
    fn raise_alert(&self, newly_endangered: bool) {
        let mut alert = self.alert.lock().unwrap_or_else(PoisonError::into_inner);
        let raise = match *alert {
            AlertState::Clear => true,
            AlertState::Acknowledged => newly_endangered,
            AlertState::Raised => false,
        };
        if raise {
            *alert = AlertState::Raised;
            tracing::warn!("Separation alert raised");
        }
    }

    /// Raised → Acknowledged. Returns whether the transition happened.
    pub fn acknowledge_alert(&self) -> bool {
        let mut alert = self.alert.lock().unwrap_or_else(PoisonError::into_inner);
        if *alert != AlertState::Raised {
            return false;
        }
        *alert = AlertState::Acknowledged;
        tracing::info!("Separation alert acknowledged");
        true
    }

    /// Acknowledged → Clear. Returns whether the transition happened.
    pub fn clear_alert(&self) -> bool {
        let mut alert = self.alert.lock().unwrap_or_else(PoisonError::into_inner);
        if *alert != AlertState::Acknowledged {
            return false;
        }
        *alert = AlertState::Clear;
        tracing::info!("Separation alert cleared");
        true
    }
}

impl Default for AirspaceController {
    fn default() -> Self {
        Self::new(ZoneTable::standard())
    }
}
