//! Entry-point spawn profiles.
//!
//! Each entry point has a fixed anchor on the airspace boundary, a direction
//! along which queued traffic is spread further out, and the altitude, heading
//! and speed every aircraft on that stream starts with.

use glam::DVec2;

use atc_core::constants::METERS_PER_PLANE_UNIT;
use atc_core::enums::EntryPoint;

use crate::kinematics::FlightState;

/// Spawn profile for an entry point.
#[derive(Debug, Clone, Copy)]
pub struct EntryProfile {
    /// Spawn position for an offset of zero.
    pub anchor: DVec2,
    /// Unit direction of increasing offset (away from the airspace).
    pub offset_direction: DVec2,
    /// Initial altitude.
    pub altitude: f64,
    /// Initial heading (degrees).
    pub heading: i32,
    /// Initial speed (display units).
    pub speed_kmh: f64,
}

/// Get the spawn profile for a given entry point.
pub fn get_profile(entry: EntryPoint) -> EntryProfile {
    match entry {
        EntryPoint::South => {
            let bearing = 20.0_f64.to_radians();
            EntryProfile {
                anchor: DVec2::new(790.0, 1000.0),
                offset_direction: DVec2::new(bearing.sin(), bearing.cos()),
                altitude: 28_000.0,
                heading: 250,
                speed_kmh: 36.0,
            }
        }
        EntryPoint::NorthEast => {
            let bearing = 70.0_f64.to_radians();
            EntryProfile {
                anchor: DVec2::new(950.0, 0.0),
                offset_direction: DVec2::new(bearing.cos(), -bearing.sin()),
                altitude: 22_000.0,
                heading: 110,
                speed_kmh: 32.0,
            }
        }
        EntryPoint::NorthWest => {
            let bearing = 25.0_f64.to_radians();
            EntryProfile {
                anchor: DVec2::new(200.0, 0.0),
                offset_direction: DVec2::new(-bearing.sin(), -bearing.cos()),
                altitude: 20_000.0,
                heading: 65,
                speed_kmh: 30.0,
            }
        }
    }
}

impl EntryProfile {
    /// Spawn position for an offset given in meters.
    pub fn spawn_position(&self, offset_m: f64) -> DVec2 {
        self.anchor + self.offset_direction * (offset_m / METERS_PER_PLANE_UNIT)
    }

    /// Initial flight state for an offset given in meters.
    pub fn spawn_state(&self, offset_m: f64) -> FlightState {
        self.state_at(self.spawn_position(offset_m))
    }

    /// Initial flight state at an explicit position on this stream.
    pub fn state_at(&self, position: DVec2) -> FlightState {
        FlightState::new(position, self.altitude, self.heading, self.speed_kmh)
    }
}
