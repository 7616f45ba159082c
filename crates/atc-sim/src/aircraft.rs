//! Shared handle to one registered aircraft.
//!
//! The kinematic state sits behind its own mutex. It is written by whichever
//! worker owns the aircraft and read by conflict scans and snapshots from any
//! thread; every lock is held for a single step or copy, and no thread ever
//! holds two aircraft locks at once. The `endangered` flag is the one field
//! other threads write, so it is an atomic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use atc_flight::FlightState;

pub struct Aircraft {
    callsign: String,
    model: String,
    flight: Mutex<FlightState>,
    endangered: AtomicBool,
}

impl Aircraft {
    pub fn new(callsign: impl Into<String>, model: impl Into<String>, flight: FlightState) -> Self {
        Self {
            callsign: callsign.into(),
            model: model.into(),
            flight: Mutex::new(flight),
            endangered: AtomicBool::new(false),
        }
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Copy of the current kinematic state.
    pub fn observe(&self) -> FlightState {
        *self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the kinematic state.
    pub fn with_flight<R>(&self, f: impl FnOnce(&mut FlightState) -> R) -> R {
        let mut flight = self.flight.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut flight)
    }

    pub fn is_endangered(&self) -> bool {
        self.endangered.load(Ordering::Acquire)
    }

    /// Set the sticky endangered flag. Returns true only for the call that
    /// actually set it.
    pub fn mark_endangered(&self) -> bool {
        !self.endangered.swap(true, Ordering::AcqRel)
    }
}

impl std::fmt::Debug for Aircraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aircraft")
            .field("callsign", &self.callsign)
            .field("model", &self.model)
            .field("flight", &self.observe())
            .field("endangered", &self.is_endangered())
            .finish()
    }
}
