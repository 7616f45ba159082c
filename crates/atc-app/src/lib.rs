//! Command-line front end for the approach-control simulator.
//!
//! Parses arguments, sets up logging, loads a scenario and runs it with a
//! renderer attached.

pub mod cli;
pub mod logging;
pub mod render;
pub mod runner;

pub use atc_core as core;
