//! Per-tick systems run by the controller.
//!
//! Systems are plain functions over flight states and observations.
//! They own no state; locking and registry access stay in the controller.

pub mod conflict;
pub mod snapshot;
pub mod zone_dispatch;
