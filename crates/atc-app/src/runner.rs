//! Run loop: drives the simulation and feeds frames to a renderer.
//!
//! In pool mode the aircraft are ticked by the driver's worker threads and
//! this loop only samples snapshots at the frame interval. In lockstep mode
//! this loop ticks every aircraft itself, once per frame, as fast as the
//! renderer allows.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

use atc_core::enums::AlertState;
use atc_core::state::AirspaceSnapshot;
use atc_sim::{AirspaceController, SimConfig, SimulationDriver};

use crate::render::Renderer;

/// Upper bound on lockstep ticks when no duration is given.
pub const LOCKSTEP_TICK_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Pool,
    Lockstep,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub frames: u64,
    pub elapsed: Duration,
    pub docked: usize,
    pub airborne: usize,
    pub alert: AlertState,
    /// Every callsign seen endangered during the run.
    pub endangered: BTreeSet<String>,
}

impl RunReport {
    pub fn completed(&self) -> bool {
        self.airborne == 0
    }
}

struct Frames<'a> {
    renderer: &'a mut dyn Renderer,
    count: u64,
    endangered: BTreeSet<String>,
}

impl Frames<'_> {
    fn emit(&mut self, snapshot: &AirspaceSnapshot) {
        for view in snapshot.aircraft.iter().filter(|a| a.endangered) {
            self.endangered.insert(view.callsign.clone());
        }
        if let Err(e) = self.renderer.render(self.count, snapshot) {
            tracing::warn!(frame = self.count, error = %e, "Render failed");
        }
        self.count += 1;
    }
}

/// Run until every aircraft has docked or `duration` has elapsed.
///
/// In lockstep mode `duration` is simulated time (ticks × tick interval).
pub fn run(
    controller: Arc<AirspaceController>,
    config: &SimConfig,
    mode: RunMode,
    duration: Option<Duration>,
    renderer: &mut dyn Renderer,
) -> Result<RunReport> {
    let started = Instant::now();
    let mut frames = Frames {
        renderer,
        count: 0,
        endangered: BTreeSet::new(),
    };

    match mode {
        RunMode::Pool => run_pool(&controller, config, duration, &mut frames)?,
        RunMode::Lockstep => run_lockstep(&controller, config, duration, &mut frames),
    }

    let final_snapshot = controller.snapshot();
    frames.emit(&final_snapshot);

    Ok(RunReport {
        frames: frames.count,
        elapsed: started.elapsed(),
        docked: final_snapshot.docked,
        airborne: final_snapshot.aircraft.len(),
        alert: final_snapshot.alert,
        endangered: frames.endangered,
    })
}

fn run_pool(
    controller: &Arc<AirspaceController>,
    config: &SimConfig,
    duration: Option<Duration>,
    frames: &mut Frames<'_>,
) -> Result<()> {
    let driver = SimulationDriver::start(Arc::clone(controller), config)?;
    let frame_interval = config.frame_interval();
    let deadline = duration.map(|d| Instant::now() + d);
    let mut next_frame_time = Instant::now();

    while !controller.is_empty() {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            tracing::info!("Duration limit reached");
            break;
        }

        frames.emit(&controller.snapshot());

        next_frame_time += frame_interval;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_interval * 2 {
            next_frame_time = now;
        }
    }

    driver.stop();
    Ok(())
}

fn run_lockstep(
    controller: &AirspaceController,
    config: &SimConfig,
    duration: Option<Duration>,
    frames: &mut Frames<'_>,
) {
    let tick_limit = match duration {
        Some(d) => (d.as_millis() / u128::from(config.tick_interval_ms.max(1))) as u64,
        None => LOCKSTEP_TICK_LIMIT,
    };

    let mut ticks = 0;
    while !controller.is_empty() {
        if ticks >= tick_limit {
            tracing::info!(ticks, "Tick limit reached");
            break;
        }
        controller.step();
        ticks += 1;
        frames.emit(&controller.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use atc_core::enums::ScenarioId;
    use atc_core::error::{AtcError, Result as SimResult};
    use atc_sim::scenario;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, usize)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, frame: u64, snapshot: &AirspaceSnapshot) -> SimResult<()> {
            self.frames.push((frame, snapshot.aircraft.len()));
            Ok(())
        }
    }

    struct Failing;

    impl Renderer for Failing {
        fn render(&mut self, _frame: u64, _snapshot: &AirspaceSnapshot) -> SimResult<()> {
            Err(AtcError::Io(std::io::ErrorKind::BrokenPipe.into()))
        }
    }

    fn controller_with(scenario: ScenarioId) -> Arc<AirspaceController> {
        let controller = Arc::new(AirspaceController::default());
        scenario::load(&controller, scenario, 0, 0);
        controller
    }

    #[test]
    fn test_lockstep_danger_run_completes() {
        let controller = controller_with(ScenarioId::Danger);
        let mut recorder = Recorder::default();
        let report = run(
            controller,
            &SimConfig::default(),
            RunMode::Lockstep,
            None,
            &mut recorder,
        )
        .unwrap();

        assert!(report.completed());
        assert_eq!(report.docked, 12);
        assert_eq!(report.alert, AlertState::Raised);
        assert!(report.endangered.contains("Dangerous"));
        assert_eq!(recorder.frames.len() as u64, report.frames);
        assert_eq!(recorder.frames.last(), Some(&(report.frames - 1, 0)));
    }

    #[test]
    fn test_lockstep_duration_is_simulated_time() {
        let controller = controller_with(ScenarioId::Safe);
        let mut recorder = Recorder::default();
        // 350 ms at 35 ms per tick.
        let report = run(
            controller,
            &SimConfig::default(),
            RunMode::Lockstep,
            Some(Duration::from_millis(350)),
            &mut recorder,
        )
        .unwrap();

        assert!(!report.completed());
        assert_eq!(report.airborne, 11);
        // Ten ticks plus the closing frame.
        assert_eq!(report.frames, 11);
    }

    #[test]
    fn test_render_failure_does_not_stop_run() {
        let controller = controller_with(ScenarioId::Safe);
        let report = run(
            controller,
            &SimConfig::default(),
            RunMode::Lockstep,
            None,
            &mut Failing,
        )
        .unwrap();
        assert!(report.completed());
        assert_eq!(report.docked, 11);
    }

    #[test]
    fn test_pool_run_completes() {
        let controller = controller_with(ScenarioId::Safe);
        let config = SimConfig {
            tick_interval_ms: 1,
            frame_interval_ms: 5,
            workers: 2,
            ..Default::default()
        };
        let mut recorder = Recorder::default();
        let report = run(
            controller,
            &config,
            RunMode::Pool,
            Some(Duration::from_secs(30)),
            &mut recorder,
        )
        .unwrap();

        assert!(report.completed());
        assert_eq!(report.docked, 11);
        assert!(report.frames >= 1);
    }
}
