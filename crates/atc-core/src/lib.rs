//! Core types and definitions for the approach-control simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! constants, enums, zone geometry, snapshot views, and the error type.
//! It has no dependency on threads or any runtime framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use error::{AtcError, Result};

#[cfg(test)]
mod tests;
