#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::enums::*;
    use crate::error::AtcError;
    use crate::state::{AircraftView, AirspaceSnapshot};
    use crate::types::*;

    #[test]
    fn test_entry_point_parse_is_case_insensitive() {
        assert_eq!("South".parse::<EntryPoint>().unwrap(), EntryPoint::South);
        assert_eq!(
            "northeast".parse::<EntryPoint>().unwrap(),
            EntryPoint::NorthEast
        );
        assert_eq!(
            " NORTHWEST ".parse::<EntryPoint>().unwrap(),
            EntryPoint::NorthWest
        );
    }

    #[test]
    fn test_entry_point_unknown_name_is_rejected() {
        let err = "East".parse::<EntryPoint>().unwrap_err();
        assert!(matches!(err, AtcError::UnknownEntryPoint(ref name) if name == "East"));
    }

    #[test]
    fn test_entry_point_display_round_trips() {
        for entry in EntryPoint::ALL {
            assert_eq!(entry.to_string().parse::<EntryPoint>().unwrap(), entry);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::new(770.0, 810.0, 980.0, 1020.0);
        assert!(bounds.contains(DVec2::new(770.0, 980.0)));
        assert!(bounds.contains(DVec2::new(810.0, 1020.0)));
        assert!(bounds.contains(DVec2::new(790.0, 1000.0)));
        assert!(!bounds.contains(DVec2::new(769.99, 1000.0)));
        assert!(!bounds.contains(DVec2::new(790.0, 1020.01)));
        assert_eq!(bounds.center(), DVec2::new(790.0, 1000.0));
    }

    #[test]
    fn test_alert_state_banner() {
        assert!(!AlertState::Clear.is_active());
        assert!(AlertState::Raised.is_active());
        assert!(AlertState::Acknowledged.is_active());
        assert_eq!(AlertState::default(), AlertState::Clear);
    }

    #[test]
    fn test_aircraft_id_display() {
        assert_eq!(AircraftId::new(3, 1).to_string(), "A3g1");
    }

    #[test]
    fn test_directive_json_shape() {
        let json = r#"{"type":"Goals","heading":{"heading":250,"turn":"Right"}}"#;
        let directive: Directive = serde_json::from_str(json).unwrap();
        assert_eq!(
            directive,
            Directive::Goals {
                altitude: None,
                speed: None,
                heading: Some(HeadingGoal {
                    heading: 250,
                    turn: TurnDirection::Right
                }),
            }
        );

        let land: Directive = serde_json::from_str(r#"{"type":"Land"}"#).unwrap();
        assert_eq!(land, Directive::Land);
    }

    #[test]
    fn test_zone_layout_snake_case() {
        let layout: ZoneLayout = serde_json::from_str("\"alternate\"").unwrap();
        assert_eq!(layout, ZoneLayout::Alternate);
    }

    #[test]
    fn test_snapshot_helpers() {
        let view = |callsign: &str, endangered: bool| AircraftView {
            id: AircraftId::new(0, 0),
            callsign: callsign.into(),
            model: "A320".into(),
            position: DVec2::ZERO,
            altitude: 0.0,
            speed: 0.0,
            heading: 0,
            phase: FlightPhase::Cruising,
            endangered,
        };
        let snapshot = AirspaceSnapshot {
            aircraft: vec![view("AM2", true), view("VOI667", false)],
            alert: AlertState::Raised,
            docked: 0,
        };
        assert_eq!(snapshot.endangered_count(), 1);
        assert!(snapshot.find("VOI667").is_some());
        assert!(snapshot.find("XX1").is_none());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"alert\":\"Raised\""));
    }
}
