//! Zone dispatch: turn an aircraft's raw position into goal updates.

use atc_core::enums::FlightPhase;
use atc_core::types::Directive;
use atc_flight::FlightState;

use crate::zones::ZoneTable;

/// Apply the directive of the first zone containing a cruising aircraft.
/// Landing and docked aircraft are not dispatched.
///
/// Goals are applied altitude, then speed, then heading: the altitude and
/// speed rates are both derived from the speed the aircraft had on entry.
/// Returns the index of the matched zone, if any.
pub fn apply(zones: &ZoneTable, flight: &mut FlightState) -> Option<usize> {
    if flight.phase() != FlightPhase::Cruising {
        return None;
    }
    let (index, zone) = zones.find(flight.position())?;
    match zone.directive {
        Directive::Goals {
            altitude,
            speed,
            heading,
        } => {
            if let Some(goal) = altitude {
                flight.set_altitude_goal(goal.target, goal.distance);
            }
            if let Some(goal) = speed {
                flight.set_speed_goal(goal.target, goal.distance);
            }
            if let Some(goal) = heading {
                flight.set_heading_goal(goal.heading, goal.turn);
            }
        }
        Directive::Land => {
            flight.land();
        }
    }
    Some(index)
}
