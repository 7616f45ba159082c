use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use atc_app::cli::{Args, RenderArg};
use atc_app::logging;
use atc_app::render::{JsonLinesRenderer, Renderer, SummaryRenderer};
use atc_app::runner::{self, RunMode};
use atc_sim::{scenario, AirspaceController};

/// Frames between two summary lines (about one second at 60 fps).
const SUMMARY_EVERY: u64 = 60;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let config = args.sim_config()?;
    let controller = Arc::new(AirspaceController::from_config(&config)?);

    match args.builtin_scenario() {
        Some(id) => {
            scenario::load(&controller, id, config.seed, args.count);
        }
        None => {
            args.custom_scenario()?.build(&controller);
        }
    }

    let mut renderer: Box<dyn Renderer> = match args.render {
        RenderArg::Json => Box::new(JsonLinesRenderer::new(io::stdout().lock())),
        RenderArg::Summary => Box::new(SummaryRenderer::new(SUMMARY_EVERY)),
    };
    let mode = if args.lockstep {
        RunMode::Lockstep
    } else {
        RunMode::Pool
    };
    let duration = args.duration_secs.map(Duration::from_secs);

    let report = runner::run(controller, &config, mode, duration, renderer.as_mut())?;

    tracing::info!(
        frames = report.frames,
        elapsed_ms = report.elapsed.as_millis() as u64,
        docked = report.docked,
        airborne = report.airborne,
        alert = ?report.alert,
        endangered = ?report.endangered,
        "Simulation finished"
    );
    Ok(())
}
