//! Command-line interface.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use atc_core::enums::ScenarioId;
use atc_sim::scenario::{PlaneSpec, ScenarioBuilder};
use atc_sim::SimConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// Eleven aircraft at safe spacing
    Safe,
    /// Safe traffic plus one aircraft on a converging path
    Danger,
    /// Seeded random traffic (see --count and --seed)
    Random,
    /// Aircraft given with --plane
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    /// One JSON snapshot per frame on stdout
    Json,
    /// Periodic human-readable summary in the log
    Summary,
}

#[derive(Parser, Debug)]
#[command(version, about = "terminal approach airspace simulator")]
pub struct Args {
    /// Traffic to simulate
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::Safe)]
    pub scenario: ScenarioArg,

    /// Custom aircraft as CALLSIGN,MODEL,ENTRY,METERS (repeatable)
    #[arg(short, long = "plane", value_name = "SPEC")]
    pub planes: Vec<PlaneSpec>,

    /// Number of aircraft for the random scenario
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// RNG seed for the random scenario (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads (overrides the config file)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Stop after this many seconds even if aircraft are still airborne
    #[arg(short, long)]
    pub duration_secs: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderArg::Summary)]
    pub render: RenderArg,

    /// Tick every aircraft in a single thread, as fast as possible
    #[arg(long)]
    pub lockstep: bool,
}

impl Args {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        config.validate()?;
        Ok(config)
    }

    /// Built-in scenario to load, or `None` for custom traffic.
    pub fn builtin_scenario(&self) -> Option<ScenarioId> {
        match self.scenario {
            ScenarioArg::Safe => Some(ScenarioId::Safe),
            ScenarioArg::Danger => Some(ScenarioId::Danger),
            ScenarioArg::Random => Some(ScenarioId::Random),
            ScenarioArg::Custom => None,
        }
    }

    /// Builder holding the `--plane` aircraft.
    pub fn custom_scenario(&self) -> Result<ScenarioBuilder> {
        if self.planes.is_empty() {
            bail!("the custom scenario needs at least one --plane");
        }
        let mut builder = ScenarioBuilder::new();
        for plane in &self.planes {
            builder.add_plane(plane.clone());
        }
        Ok(builder)
    }
}
