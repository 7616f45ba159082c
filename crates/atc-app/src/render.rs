//! Renderers: consumers of the read-only airspace snapshot.

use std::io::Write;

use atc_core::enums::{AlertState, FlightPhase};
use atc_core::error::Result;
use atc_core::state::AirspaceSnapshot;

/// Receives one snapshot per frame.
pub trait Renderer {
    fn render(&mut self, frame: u64, snapshot: &AirspaceSnapshot) -> Result<()>;
}

/// Writes each snapshot as one line of JSON.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, _frame: u64, snapshot: &AirspaceSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Logs a one-line traffic summary every `every` frames, and immediately
/// whenever the alert changes.
pub struct SummaryRenderer {
    every: u64,
    last_alert: AlertState,
}

impl SummaryRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            last_alert: AlertState::Clear,
        }
    }
}

impl Renderer for SummaryRenderer {
    fn render(&mut self, frame: u64, snapshot: &AirspaceSnapshot) -> Result<()> {
        let alert_changed = snapshot.alert != self.last_alert;
        self.last_alert = snapshot.alert;
        if !alert_changed && frame % self.every != 0 {
            return Ok(());
        }

        let landing = snapshot
            .aircraft
            .iter()
            .filter(|a| a.phase == FlightPhase::Landing)
            .count();
        tracing::info!(
            frame,
            airborne = snapshot.aircraft.len(),
            landing,
            docked = snapshot.docked,
            endangered = snapshot.endangered_count(),
            alert = ?snapshot.alert,
            "Traffic"
        );
        for view in snapshot.aircraft.iter().filter(|a| a.endangered) {
            tracing::debug!(
                callsign = %view.callsign,
                x = view.position.x,
                y = view.position.y,
                altitude = view.altitude,
                "Endangered"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use atc_core::state::AircraftView;
    use atc_core::types::AircraftId;

    use super::*;

    fn snapshot() -> AirspaceSnapshot {
        AirspaceSnapshot {
            aircraft: vec![AircraftView {
                id: AircraftId::new(0, 0),
                callsign: "AM2463".into(),
                model: "B738".into(),
                position: DVec2::new(790.0, 1000.0),
                altitude: 28_000.0,
                speed: 36.0,
                heading: 250,
                phase: FlightPhase::Cruising,
                endangered: false,
            }],
            alert: AlertState::Clear,
            docked: 0,
        }
    }

    #[test]
    fn test_json_lines_one_object_per_frame() {
        let mut renderer = JsonLinesRenderer::new(Vec::new());
        renderer.render(0, &snapshot()).unwrap();
        renderer.render(1, &snapshot()).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["aircraft"][0]["callsign"], "AM2463");
        assert_eq!(value["alert"], "Clear");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_write_failure_is_an_error() {
        let mut renderer = JsonLinesRenderer::new(BrokenPipe);
        assert!(renderer.render(0, &snapshot()).is_err());
    }

    #[test]
    fn test_summary_never_fails() {
        let mut renderer = SummaryRenderer::new(0);
        let mut snap = snapshot();
        renderer.render(0, &snap).unwrap();
        snap.alert = AlertState::Raised;
        renderer.render(1, &snap).unwrap();
        assert_eq!(renderer.last_alert, AlertState::Raised);
    }
}
