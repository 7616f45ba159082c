//! Aircraft kinematic state machine.
//!
//! Pure data plus the stepping functions that move one aircraft toward its
//! commanded heading, altitude and speed. No locks, no registry: the
//! simulation crate decides when and from which thread these run.
//!
//! Speed is stored in internal units (plane units per tick) and exposed in
//! display units (km/h-equivalent, internal × 3.6). Altitude and speed goals
//! are reached linearly over a travel distance: the goal setter fixes a rate
//! once, and the per-tick steps apply it until the value is inside its
//! tolerance band.

use glam::DVec2;

use atc_core::constants::*;
use atc_core::enums::{FlightPhase, TurnDirection};

/// Kinematic state and goals of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    position: DVec2,
    /// Per-tick displacement, derived from speed and heading.
    velocity: DVec2,
    altitude: f64,
    /// Altitude change per tick.
    climb_rate: f64,
    /// Internal units.
    speed: f64,
    /// Speed change per tick (internal units).
    speed_rate: f64,
    /// Degrees. Leaves [0, 360) while a turn wraps around north.
    heading: i32,
    target_heading: i32,
    turn: TurnDirection,
    target_altitude: f64,
    /// Internal units.
    target_speed: f64,
    phase: FlightPhase,
}

impl FlightState {
    /// Create a cruising aircraft holding its current heading, altitude and speed.
    pub fn new(position: DVec2, altitude: f64, heading: i32, speed_kmh: f64) -> Self {
        let speed = (speed_kmh / KMH_PER_UNIT).max(0.0);
        let mut state = Self {
            position,
            velocity: DVec2::ZERO,
            altitude: altitude.max(0.0),
            climb_rate: 0.0,
            speed,
            speed_rate: 0.0,
            heading,
            target_heading: heading,
            turn: TurnDirection::Right,
            target_altitude: altitude,
            target_speed: speed,
            phase: FlightPhase::Cruising,
        };
        state.refresh_velocity();
        state
    }

    // --- Goals ---
    //
    // Only a cruising aircraft takes new goals. Once landing, the roll-out
    // set by `land` is the only goal left.

    /// Command a turn to `target` degrees in the given rotational sense.
    ///
    /// The stored target is shifted by whole turns so that it lies on the
    /// requested side of the current heading; stepping is then monotonic.
    pub fn set_heading_goal(&mut self, target: i32, turn: TurnDirection) {
        if self.phase != FlightPhase::Cruising {
            return;
        }
        self.turn = turn;
        self.target_heading = match turn {
            TurnDirection::Right => self.heading + (target - self.heading).rem_euclid(360),
            TurnDirection::Left => self.heading - (self.heading - target).rem_euclid(360),
        };
    }

    /// Command an altitude reached linearly over `distance` plane units.
    pub fn set_altitude_goal(&mut self, target: f64, distance: f64) {
        if self.phase != FlightPhase::Cruising {
            return;
        }
        self.target_altitude = target;
        match self.horizon_ticks(distance) {
            Some(ticks) => self.climb_rate = -(self.altitude - target) / ticks,
            None => {
                self.altitude = target.max(0.0);
                self.climb_rate = 0.0;
            }
        }
    }

    /// Command a speed (display units) reached linearly over `distance` plane units.
    pub fn set_speed_goal(&mut self, target_kmh: f64, distance: f64) {
        if self.phase != FlightPhase::Cruising {
            return;
        }
        self.target_speed = (target_kmh / KMH_PER_UNIT).max(0.0);
        match self.horizon_ticks(distance) {
            Some(ticks) => self.speed_rate = -(self.speed - self.target_speed) / ticks,
            None => {
                self.speed = self.target_speed;
                self.speed_rate = 0.0;
            }
        }
    }

    /// Ticks needed to cover `distance` at the current speed, if meaningful.
    fn horizon_ticks(&self, distance: f64) -> Option<f64> {
        let ticks = distance / self.speed;
        (ticks.is_finite() && ticks > 0.0).then_some(ticks)
    }

    // --- Per-tick steps ---

    /// Run one tick of kinematics: heading, altitude, speed, then position.
    /// A docked aircraft does not move.
    pub fn advance(&mut self) {
        if self.is_docked() {
            return;
        }
        self.advance_heading();
        self.advance_altitude();
        self.advance_speed();
        self.advance_position();
    }

    /// Turn at most `HEADING_STEP_DEG` toward the target heading, snapping onto
    /// it when closer than one step. Once on target, both values are folded
    /// back into [0, 360). Velocity is recomputed from the new heading.
    pub fn advance_heading(&mut self) {
        if self.target_heading != self.heading {
            self.heading = match self.turn {
                TurnDirection::Right => {
                    if self.target_heading < self.heading + HEADING_STEP_DEG {
                        self.target_heading
                    } else {
                        self.heading + HEADING_STEP_DEG
                    }
                }
                TurnDirection::Left => {
                    if self.target_heading > self.heading - HEADING_STEP_DEG {
                        self.target_heading
                    } else {
                        self.heading - HEADING_STEP_DEG
                    }
                }
            };
        } else {
            self.heading = self.heading.rem_euclid(360);
            self.target_heading = self.heading;
        }
        self.refresh_velocity();
    }

    /// Stop climbing or descending inside the tolerance band. A step that
    /// would cross the target is shortened to land on it.
    pub fn advance_altitude(&mut self) {
        let gap = self.target_altitude - self.altitude;
        if gap.abs() <= ALTITUDE_TOLERANCE {
            self.climb_rate = 0.0;
        } else if gap.abs() <= self.climb_rate.abs() {
            self.climb_rate = gap;
        }
    }

    /// Apply the speed rate unless already inside the tolerance band.
    pub fn advance_speed(&mut self) {
        let gap = self.target_speed - self.speed;
        if gap.abs() <= SPEED_TOLERANCE {
            self.speed_rate = 0.0;
            return;
        }
        if gap.abs() <= self.speed_rate.abs() {
            self.speed = self.target_speed;
            self.speed_rate = 0.0;
        } else {
            self.speed = (self.speed + self.speed_rate).max(0.0);
        }
    }

    /// Move by this tick's velocity and climb rate.
    pub fn advance_position(&mut self) {
        self.position += self.velocity;
        self.altitude = (self.altitude + self.climb_rate).max(0.0);
    }

    fn refresh_velocity(&mut self) {
        let radians = f64::from(self.heading).to_radians();
        self.velocity = DVec2::new(radians.cos(), radians.sin()) * self.speed;
    }

    // --- Landing ---

    /// Touch down: altitude snaps to zero and the aircraft decelerates to a
    /// stop over `LANDING_ROLL_DISTANCE`. Only a cruising aircraft can land;
    /// returns whether the transition happened.
    pub fn land(&mut self) -> bool {
        if self.phase != FlightPhase::Cruising {
            return false;
        }
        self.set_speed_goal(0.0, LANDING_ROLL_DISTANCE);
        self.climb_rate = 0.0;
        self.altitude = 0.0;
        self.target_altitude = 0.0;
        self.phase = FlightPhase::Landing;
        true
    }

    /// Whether a landing aircraft has slowed to the gate. On arrival speed is
    /// pinned to zero and the aircraft becomes docked.
    pub fn has_reached_gate(&mut self) -> bool {
        match self.phase {
            FlightPhase::Cruising => false,
            FlightPhase::Docked => true,
            FlightPhase::Landing => {
                if self.speed > GATE_SPEED {
                    return false;
                }
                self.speed = 0.0;
                self.speed_rate = 0.0;
                self.velocity = DVec2::ZERO;
                self.phase = FlightPhase::Docked;
                true
            }
        }
    }

    // --- Accessors ---

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn climb_rate(&self) -> f64 {
        self.climb_rate
    }

    pub fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    /// Speed in display units.
    pub fn speed(&self) -> f64 {
        self.speed * KMH_PER_UNIT
    }

    /// Speed in internal units (plane units per tick).
    pub fn internal_speed(&self) -> f64 {
        self.speed
    }

    /// Speed change per tick in internal units.
    pub fn speed_rate(&self) -> f64 {
        self.speed_rate
    }

    /// Speed goal in display units.
    pub fn target_speed(&self) -> f64 {
        self.target_speed * KMH_PER_UNIT
    }

    /// Raw heading; may be outside [0, 360) mid-turn.
    pub fn heading(&self) -> i32 {
        self.heading
    }

    /// Heading folded into [0, 360).
    pub fn display_heading(&self) -> i32 {
        self.heading.rem_euclid(360)
    }

    pub fn target_heading(&self) -> i32 {
        self.target_heading
    }

    pub fn turn(&self) -> TurnDirection {
        self.turn
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_landing(&self) -> bool {
        self.phase == FlightPhase::Landing
    }

    pub fn is_docked(&self) -> bool {
        self.phase == FlightPhase::Docked
    }
}
