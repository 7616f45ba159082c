//! Error type shared by all crates.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtcError>;

#[derive(Error, Debug)]
pub enum AtcError {
    #[error("unknown entry point {0:?} (expected South, NorthEast or NorthWest)")]
    UnknownEntryPoint(String),

    #[error("invalid offset distance {0:?}: expected a non-negative number of meters")]
    InvalidDistance(String),

    #[error("callsign must not be empty")]
    EmptyCallsign,

    #[error("malformed aircraft spec {0:?}: expected CALLSIGN,MODEL,ENTRY,METERS")]
    InvalidAircraftSpec(String),

    #[error("invalid zone {index} ({name}): {reason}")]
    InvalidZone {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("invalid zone table: {0}")]
    InvalidZoneTable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to spawn worker {index}: {source}")]
    WorkerSpawn {
        index: usize,
        source: std::io::Error,
    },

    #[error("I/O error {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error {0}")]
    Json(#[from] serde_json::Error),
}
