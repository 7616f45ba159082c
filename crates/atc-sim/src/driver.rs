//! Simulation driver: a fixed pool of worker threads ticking aircraft.
//!
//! Worker `i` of `n` owns every aircraft whose registry slot index is
//! `i mod n` and ticks each of them once per tick interval. Workers do not
//! synchronize with each other; all shared state is reached through the
//! controller. Each worker waits on its own command channel between ticks,
//! so a `Shutdown` command (or dropping the driver) interrupts the wait.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use atc_core::error::{AtcError, Result};

use crate::config::SimConfig;
use crate::controller::AirspaceController;

/// Commands sent from the owner of the driver to its workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Shutdown,
}

struct Worker {
    commands: mpsc::Sender<DriverCommand>,
    handle: Option<JoinHandle<()>>,
}

pub struct SimulationDriver {
    workers: Vec<Worker>,
}

impl SimulationDriver {
    /// Spawn `config.workers` worker threads over `controller`.
    ///
    /// If a thread cannot be spawned, the workers already running are
    /// stopped before the error is returned.
    pub fn start(controller: Arc<AirspaceController>, config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let worker_count = config.workers;
        let interval = config.tick_interval();
        let mut driver = Self {
            workers: Vec::with_capacity(worker_count),
        };

        for index in 0..worker_count {
            let (cmd_tx, cmd_rx) = mpsc::channel::<DriverCommand>();
            let controller = Arc::clone(&controller);
            let handle = std::thread::Builder::new()
                .name(format!("atc-worker-{index}"))
                .spawn(move || {
                    run_worker(index, worker_count, interval, &controller, cmd_rx);
                })
                .map_err(|source| AtcError::WorkerSpawn { index, source })?;
            driver.workers.push(Worker {
                commands: cmd_tx,
                handle: Some(handle),
            });
        }

        tracing::info!(
            workers = worker_count,
            interval_ms = config.tick_interval_ms,
            "Driver started"
        );
        Ok(driver)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Signal every worker to stop and wait for all of them to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        for worker in &self.workers {
            // A worker that already exited has dropped its receiver.
            let _ = worker.commands.send(DriverCommand::Shutdown);
        }
        let mut joined = 0;
        for (index, worker) in self.workers.iter_mut().enumerate() {
            if let Some(handle) = worker.handle.take() {
                if handle.join().is_err() {
                    tracing::error!(worker = index, "Worker panicked");
                }
                joined += 1;
            }
        }
        if joined > 0 {
            tracing::info!(workers = joined, "Driver stopped");
        }
    }
}

impl Drop for SimulationDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One worker loop. Runs until `Shutdown` or until the driver is gone.
fn run_worker(
    index: usize,
    worker_count: usize,
    interval: Duration,
    controller: &AirspaceController,
    cmd_rx: mpsc::Receiver<DriverCommand>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Tick the aircraft this worker owns
        for (id, aircraft) in controller.aircraft() {
            if id.index as usize % worker_count == index {
                controller.tick_aircraft(id, &aircraft);
            }
        }

        // 2. Wait for the next tick, watching for shutdown
        next_tick_time += interval;
        let now = Instant::now();
        let wait = if next_tick_time > now {
            next_tick_time - now
        } else {
            if now - next_tick_time > interval * 2 {
                // Too far behind, skip the missed ticks
                next_tick_time = now;
            }
            Duration::ZERO
        };

        match cmd_rx.recv_timeout(wait) {
            Ok(DriverCommand::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
    }

    tracing::debug!(worker = index, "Worker cancelled");
}
