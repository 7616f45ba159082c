//! Flight model for the approach-control simulation.
//!
//! Implements the per-aircraft kinematic state machine and the
//! entry-point spawn profiles.

pub mod kinematics;
pub mod profiles;

pub use atc_core as core;
pub use kinematics::FlightState;
