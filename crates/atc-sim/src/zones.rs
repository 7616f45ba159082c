//! Zone table: ordered trigger rectangles and their directives.
//!
//! The table is validated once when it is built; lookups afterwards cannot
//! fail. Zones are evaluated in table order and the first containing zone
//! wins.

use glam::DVec2;

use atc_core::enums::{TurnDirection, ZoneLayout};
use atc_core::error::{AtcError, Result};
use atc_core::types::{Bounds, Directive, Goal, HeadingGoal, Zone};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    /// Build a table from an ordered list of zones, rejecting unusable geometry
    /// or goals. A table without a landing zone is rejected too: nothing could
    /// ever dock.
    pub fn new(zones: Vec<Zone>) -> Result<Self> {
        if zones.is_empty() {
            return Err(AtcError::InvalidZoneTable("no zones".into()));
        }
        for (index, zone) in zones.iter().enumerate() {
            validate_zone(zone).map_err(|reason| AtcError::InvalidZone {
                index,
                name: zone.name.clone(),
                reason,
            })?;
        }
        if !zones.iter().any(|z| z.directive == Directive::Land) {
            return Err(AtcError::InvalidZoneTable("no landing zone".into()));
        }
        Ok(Self { zones })
    }

    pub fn for_layout(layout: ZoneLayout) -> Self {
        match layout {
            ZoneLayout::Standard => Self::standard(),
            ZoneLayout::Alternate => Self::alternate(),
        }
    }

    /// The standard approach geometry.
    pub fn standard() -> Self {
        Self {
            zones: build_zones(ZoneLayout::Standard),
        }
    }

    /// Standard geometry with a narrower final turn and a shorter runway box.
    pub fn alternate() -> Self {
        Self {
            zones: build_zones(ZoneLayout::Alternate),
        }
    }

    /// First zone containing `position`, with its index in the table.
    pub fn find(&self, position: DVec2) -> Option<(usize, &Zone)> {
        self.zones
            .iter()
            .enumerate()
            .find(|(_, zone)| zone.bounds.contains(position))
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_zone(zone: &Zone) -> std::result::Result<(), String> {
    let b = &zone.bounds;
    if ![b.x_min, b.x_max, b.y_min, b.y_max].iter().all(|v| v.is_finite()) {
        return Err("bounds must be finite".into());
    }
    if b.x_min > b.x_max || b.y_min > b.y_max {
        return Err("bounds are inverted".into());
    }
    if let Directive::Goals {
        altitude,
        speed,
        heading,
    } = &zone.directive
    {
        for (label, goal) in [("altitude", altitude), ("speed", speed)] {
            if let Some(goal) = goal {
                if !goal.target.is_finite() || goal.target < 0.0 {
                    return Err(format!("{label} target must be a non-negative number"));
                }
                if !goal.distance.is_finite() || goal.distance <= 0.0 {
                    return Err(format!("{label} distance must be positive"));
                }
            }
        }
        if altitude.is_none() && speed.is_none() && heading.is_none() {
            return Err("directive carries no goal".into());
        }
    }
    Ok(())
}

fn goals(
    altitude: Option<(f64, f64)>,
    speed: Option<(f64, f64)>,
    heading: Option<(i32, TurnDirection)>,
) -> Directive {
    Directive::Goals {
        altitude: altitude.map(|(target, distance)| Goal { target, distance }),
        speed: speed.map(|(target, distance)| Goal { target, distance }),
        heading: heading.map(|(heading, turn)| HeadingGoal { heading, turn }),
    }
}

fn zone(name: &str, bounds: Bounds, directive: Directive) -> Zone {
    Zone {
        name: name.to_string(),
        bounds,
        directive,
    }
}

fn build_zones(layout: ZoneLayout) -> Vec<Zone> {
    use TurnDirection::{Left, Right};

    let (final_turn, runway) = match layout {
        ZoneLayout::Standard => (
            Bounds::new(265.0, 295.0, 770.0, 790.0),
            Bounds::new(595.0, 605.0, 680.0, 695.0),
        ),
        ZoneLayout::Alternate => (
            Bounds::new(270.0, 290.0, 770.0, 790.0),
            Bounds::new(595.0, 605.0, 683.0, 692.0),
        ),
    };

    vec![
        zone(
            "south entry",
            Bounds::new(770.0, 810.0, 980.0, 1020.0),
            goals(Some((20_000.0, 970.0)), Some((30.0, 970.0)), None),
        ),
        zone(
            "northwest entry",
            Bounds::new(145.0, 175.0, -10.0, 15.0),
            goals(Some((18_000.0, 210.0)), Some((28.0, 210.0)), None),
        ),
        zone(
            "northeast entry",
            Bounds::new(915.0, 945.0, 35.0, 65.0),
            goals(
                Some((20_000.0, 498.0)),
                Some((30.0, 498.0)),
                Some((145, Right)),
            ),
        ),
        zone(
            "northeast turn",
            Bounds::new(635.0, 665.0, 260.0, 290.0),
            goals(None, None, Some((250, Right))),
        ),
        zone(
            "northwest turn",
            Bounds::new(425.0, 455.0, 55.0, 85.0),
            goals(
                Some((18_000.0, 195.0)),
                Some((28.0, 195.0)),
                Some((65, Left)),
            ),
        ),
        zone(
            "west descent",
            Bounds::new(275.0, 305.0, 150.0, 180.0),
            goals(Some((13_000.0, 235.0)), Some((25.0, 235.0)), None),
        ),
        zone(
            "downwind",
            Bounds::new(375.0, 405.0, 360.0, 390.0),
            goals(
                Some((11_625.0, 210.0)),
                Some((22.0, 210.0)),
                Some((130, Right)),
            ),
        ),
        zone(
            "base",
            Bounds::new(270.0, 290.0, 540.0, 560.0),
            goals(
                Some((10_250.0, 225.0)),
                Some((19.0, 225.0)),
                Some((90, Left)),
            ),
        ),
        zone(
            "final turn",
            final_turn,
            goals(
                Some((7_300.0, 333.0)),
                Some((16.0, 333.0)),
                Some((330, Left)),
            ),
        ),
        zone("runway", runway, Directive::Land),
    ]
}
