//! Scenario definitions: who is in the air when the simulation starts.
//!
//! Custom traffic is described per aircraft as callsign, model, entry point
//! and an offset in meters back along that entry stream. The built-in
//! scenarios are fixed tables; `Random` draws traffic from a seeded RNG.

use std::str::FromStr;

use glam::DVec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use atc_core::enums::{EntryPoint, ScenarioId};
use atc_core::error::{AtcError, Result};
use atc_core::types::AircraftId;
use atc_flight::profiles::get_profile;

use crate::aircraft::Aircraft;
use crate::controller::AirspaceController;

/// One validated aircraft of a custom scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneSpec {
    pub callsign: String,
    pub model: String,
    pub entry: EntryPoint,
    /// Meters back along the entry stream.
    pub offset_m: f64,
}

impl PlaneSpec {
    pub fn new(
        callsign: &str,
        model: &str,
        entry: EntryPoint,
        offset_m: f64,
    ) -> Result<Self> {
        let callsign = callsign.trim();
        if callsign.is_empty() {
            return Err(AtcError::EmptyCallsign);
        }
        if !offset_m.is_finite() || offset_m < 0.0 {
            return Err(AtcError::InvalidDistance(offset_m.to_string()));
        }
        Ok(Self {
            callsign: callsign.to_string(),
            model: model.trim().to_string(),
            entry,
            offset_m,
        })
    }

    /// Validate raw text fields as typed into a scenario form.
    pub fn parse(callsign: &str, model: &str, entry: &str, offset: &str) -> Result<Self> {
        let entry = entry.parse()?;
        let offset_m = parse_offset(offset)?;
        Self::new(callsign, model, entry, offset_m)
    }

    pub fn into_aircraft(self) -> Aircraft {
        let flight = get_profile(self.entry).spawn_state(self.offset_m);
        Aircraft::new(self.callsign, self.model, flight)
    }
}

impl FromStr for PlaneSpec {
    type Err = AtcError;

    /// Parses `CALLSIGN,MODEL,ENTRY,METERS`.
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').collect();
        let [callsign, model, entry, offset] = fields.as_slice() else {
            return Err(AtcError::InvalidAircraftSpec(s.to_string()));
        };
        Self::parse(callsign, model, entry, offset)
    }
}

fn parse_offset(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let offset: f64 = trimmed
        .parse()
        .map_err(|_| AtcError::InvalidDistance(trimmed.to_string()))?;
    if !offset.is_finite() || offset < 0.0 {
        return Err(AtcError::InvalidDistance(trimmed.to_string()));
    }
    Ok(offset)
}

/// Collects custom aircraft and registers them with a controller.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    planes: Vec<PlaneSpec>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and queue one aircraft from raw text fields.
    pub fn add(
        &mut self,
        callsign: &str,
        model: &str,
        entry: &str,
        offset: &str,
    ) -> Result<&mut Self> {
        let plane = PlaneSpec::parse(callsign, model, entry, offset)?;
        Ok(self.add_plane(plane))
    }

    pub fn add_plane(&mut self, plane: PlaneSpec) -> &mut Self {
        self.planes.push(plane);
        self
    }

    pub fn planes(&self) -> &[PlaneSpec] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Register every queued aircraft, in the order they were added.
    pub fn build(self, controller: &AirspaceController) -> Vec<AircraftId> {
        self.planes
            .into_iter()
            .map(|plane| controller.register(plane.into_aircraft()))
            .collect()
    }
}

// --- Built-in scenarios ---

/// (callsign, model, entry, x, y)
type FixedPlane = (&'static str, &'static str, EntryPoint, f64, f64);

/// Eleven aircraft queued on the three entry streams at safe spacing.
const SAFE_TRAFFIC: [FixedPlane; 11] = [
    ("SLI145", "E190", EntryPoint::NorthEast, 950.0, 0.0),
    ("IJ2240", "A320", EntryPoint::NorthEast, 1093.65, -394.67),
    ("AM2", "B789", EntryPoint::NorthEast, 1360.42, -1127.63),
    ("AM2463", "B738", EntryPoint::South, 790.0, 1000.0),
    ("AFR178", "A388", EntryPoint::South, 961.01, 1469.85),
    ("AM90", "B788", EntryPoint::South, 1268.83, 2315.57),
    ("VOI705", "A320", EntryPoint::South, 1371.43, 2597.48),
    ("VOI667", "A321", EntryPoint::NorthWest, 200.0, 0.0),
    ("ACA996", "A319", EntryPoint::NorthWest, 94.35, -226.58),
    ("VIV3307", "A320", EntryPoint::NorthWest, -32.44, -498.47),
    ("AM189", "B737", EntryPoint::NorthWest, -526.9, -1558.85),
];

/// Injected on the South stream 17 km out. Its approach converges with the
/// last northwest arrival.
const DANGEROUS_PLANE: FixedPlane = ("Dangerous", "C300", EntryPoint::South, 1080.72, 1798.74);

const AIRLINES: [&str; 8] = ["AM", "VOI", "VIV", "AFR", "ACA", "SLI", "IJ", "UAL"];
const MODELS: [&str; 8] = [
    "A319", "A320", "A321", "A388", "B737", "B738", "B788", "E190",
];

/// Furthest random offset back along an entry stream (meters).
const MAX_RANDOM_OFFSET_M: u32 = 35_000;

fn fixed_aircraft(plane: &FixedPlane) -> Aircraft {
    let (callsign, model, entry, x, y) = *plane;
    let flight = get_profile(entry).state_at(DVec2::new(x, y));
    Aircraft::new(callsign, model, flight)
}

/// Aircraft of a fixed built-in scenario, in registration order.
pub fn fixed_traffic(scenario: ScenarioId) -> Vec<Aircraft> {
    let mut aircraft: Vec<Aircraft> = SAFE_TRAFFIC.iter().map(fixed_aircraft).collect();
    if scenario == ScenarioId::Danger {
        aircraft.push(fixed_aircraft(&DANGEROUS_PLANE));
    }
    aircraft
}

/// `count` aircraft at random entry points and offsets.
///
/// Offsets are whole hundreds of meters. Callsigns are unique within the
/// generated set.
pub fn random_traffic(rng: &mut impl Rng, count: usize) -> Vec<PlaneSpec> {
    (0..count)
        .map(|i| {
            let airline = AIRLINES.choose(rng).copied().unwrap_or("AM");
            let model = MODELS.choose(rng).copied().unwrap_or("A320");
            let entry = EntryPoint::ALL[rng.gen_range(0..EntryPoint::ALL.len())];
            let offset_m = f64::from(rng.gen_range(0..=MAX_RANDOM_OFFSET_M / 100) * 100);
            PlaneSpec {
                callsign: format!("{airline}{}", 100 + i * 7 + rng.gen_range(0..7)),
                model: model.to_string(),
                entry,
                offset_m,
            }
        })
        .collect()
}

/// Register a built-in scenario with `controller`. `seed` and `count` are
/// only used by `Random`.
pub fn load(
    controller: &AirspaceController,
    scenario: ScenarioId,
    seed: u64,
    count: usize,
) -> Vec<AircraftId> {
    let ids: Vec<AircraftId> = match scenario {
        ScenarioId::Safe | ScenarioId::Danger => fixed_traffic(scenario)
            .into_iter()
            .map(|aircraft| controller.register(aircraft))
            .collect(),
        ScenarioId::Random => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            random_traffic(&mut rng, count)
                .into_iter()
                .map(|plane| controller.register(plane.into_aircraft()))
                .collect()
        }
    };
    tracing::info!(scenario = ?scenario, aircraft = ids.len(), "Scenario loaded");
    ids
}
