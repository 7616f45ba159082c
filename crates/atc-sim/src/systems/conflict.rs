//! Pairwise separation check.
//!
//! Works on copied observations so no aircraft lock is held during the
//! O(n²) pass. Every ordered pair is evaluated: the horizontal buffer is
//! taken from the first aircraft's speed, so (a, b) and (b, a) can
//! disagree when speeds differ.

use atc_core::constants::*;
use atc_core::types::AircraftId;
use atc_flight::FlightState;

/// One ordered pair found inside the separation buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conflict {
    pub first: AircraftId,
    pub second: AircraftId,
    /// Planar distance between the two aircraft.
    pub distance: f64,
    /// Buffer derived from the first aircraft's display speed.
    pub buffer: f64,
}

/// Whether `a` considers `b` too close.
pub fn violates(a: &FlightState, b: &FlightState) -> Option<(f64, f64)> {
    let (speed_a, speed_b) = (a.speed(), b.speed());
    if speed_a < SEPARATION_MIN_SPEED_KMH || speed_b < SEPARATION_MIN_SPEED_KMH {
        return None;
    }
    if (a.altitude() - b.altitude()).abs() >= SEPARATION_VERTICAL {
        return None;
    }
    let distance = a.position().distance(b.position());
    let buffer = speed_a * SEPARATION_BUFFER_FACTOR;
    (distance <= buffer).then_some((distance, buffer))
}

/// All ordered conflicting pairs among `observations`.
pub fn find_conflicts(observations: &[(AircraftId, FlightState)]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (first, a) in observations {
        for (second, b) in observations {
            if first == second {
                continue;
            }
            if let Some((distance, buffer)) = violates(a, b) {
                conflicts.push(Conflict {
                    first: *first,
                    second: *second,
                    distance,
                    buffer,
                });
            }
        }
    }
    conflicts
}
