//! Airspace simulation for the approach-control simulator.
//!
//! Owns the registry of live aircraft, the zone table and the separation
//! check, and drives aircraft either from a worker pool or in lockstep.

pub mod aircraft;
pub mod config;
pub mod controller;
pub mod driver;
pub mod registry;
pub mod scenario;
pub mod systems;
pub mod zones;

pub use atc_core as core;
pub use aircraft::Aircraft;
pub use config::SimConfig;
pub use controller::AirspaceController;
pub use driver::SimulationDriver;
pub use zones::ZoneTable;
