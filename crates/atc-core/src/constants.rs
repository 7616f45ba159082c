//! Simulation constants and tuning parameters.

// --- Timing ---

/// Interval between two ticks of one aircraft (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 35;

/// Interval between two rendered frames (milliseconds, ~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 1000 / 60;

/// Default size of the driver's worker pool.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default RNG seed for generated traffic.
pub const DEFAULT_SEED: u64 = 42;

// --- Units ---

/// Display speed (km/h-equivalent) per internal speed unit.
pub const KMH_PER_UNIT: f64 = 3.6;

/// Scenario offsets are given in meters; one plane unit is ten meters.
pub const METERS_PER_PLANE_UNIT: f64 = 10.0;

// --- Kinematics ---

/// Maximum heading change per tick (degrees).
pub const HEADING_STEP_DEG: i32 = 5;

/// Altitude tolerance band around the altitude goal.
pub const ALTITUDE_TOLERANCE: f64 = 75.0;

/// Speed tolerance band around the speed goal (internal units).
pub const SPEED_TOLERANCE: f64 = 0.015;

// --- Landing ---

/// Distance over which a landing aircraft decelerates to a stop.
pub const LANDING_ROLL_DISTANCE: f64 = 95.0;

/// Internal speed at or below which a landing aircraft is at the gate.
pub const GATE_SPEED: f64 = 0.8;

// --- Separation ---

/// Aircraft slower than this (display units) are not checked for conflicts.
pub const SEPARATION_MIN_SPEED_KMH: f64 = 16.0;

/// Vertical separation below which two aircraft may conflict.
pub const SEPARATION_VERTICAL: f64 = 2500.0;

/// Separation buffer = display speed × this factor (plane units).
pub const SEPARATION_BUFFER_FACTOR: f64 = 4.9;
