#[cfg(test)]
mod tests {
    use crate::commands::{ControlUpdate, PivotCommand};
    use crate::enums::*;
    use crate::error::ValidationError;
    use crate::state::PivotStatus;
    use crate::types::*;

    #[test]
    fn test_direction_serializes_as_sign() {
        assert_eq!(serde_json::to_string(&Direction::Clockwise).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Direction::CounterClockwise).unwrap(),
            "-1"
        );
        let back: Direction = serde_json::from_str("-1").unwrap();
        assert_eq!(back, Direction::CounterClockwise);
    }

    #[test]
    fn test_direction_rejects_other_values() {
        assert!(serde_json::from_str::<Direction>("0").is_err());
        assert!(serde_json::from_str::<Direction>("2").is_err());
        assert_eq!(Direction::try_from(3), Err(ValidationError::Direction(3)));
    }

    #[test]
    fn test_direction_sign_and_reverse() {
        assert_eq!(Direction::Clockwise.sign(), 1.0);
        assert_eq!(Direction::CounterClockwise.sign(), -1.0);
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
    }

    #[test]
    fn test_command_serde() {
        let commands = vec![
            PivotCommand::SetCenter {
                lat: 46.5,
                lon: 30.7,
            },
            PivotCommand::SetArmLength { meters: 400.0 },
            PivotCommand::SetDirection {
                direction: Direction::CounterClockwise,
            },
            PivotCommand::SetSpeed {
                meters_per_minute: 4.886,
            },
            PivotCommand::SetDutyCycle { percent: 50.0 },
            PivotCommand::SetTimeAcceleration { factor: 10.0 },
            PivotCommand::Control(ControlUpdate {
                speed: Some(3.0),
                running: Some(true),
                ..Default::default()
            }),
            PivotCommand::Start,
            PivotCommand::Stop,
            PivotCommand::Reset,
            PivotCommand::Clear,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PivotCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back, "command round trip via {json}");
        }
    }

    #[test]
    fn test_control_update_partial_json() {
        let json = r#"{"type":"Control","duty_cycle":25.0}"#;
        let cmd: PivotCommand = serde_json::from_str(json).unwrap();
        match cmd {
            PivotCommand::Control(update) => {
                assert_eq!(update.duty_cycle, Some(25.0));
                assert!(update.speed.is_none());
                assert!(!update.reset);
            }
            other => panic!("expected Control, got {other:?}"),
        }
    }

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(45.0, 10.0).is_ok());
        assert_eq!(
            GeoPoint::new(91.0, 0.0),
            Err(ValidationError::Latitude(91.0))
        );
        assert_eq!(
            GeoPoint::new(0.0, 360.0),
            Err(ValidationError::Longitude(360.0))
        );
        assert_eq!(
            GeoPoint::new(0.0, -180.5),
            Err(ValidationError::Longitude(-180.5))
        );
        assert_eq!(
            GeoPoint::new(f64::NAN, 0.0),
            Err(ValidationError::NonFinite("latitude"))
        );
    }

    #[test]
    fn test_geo_point_normalizes_longitude() {
        let p = GeoPoint::new(10.0, 270.0).unwrap();
        assert_eq!(p.lon, -90.0);
        let p = GeoPoint::new(10.0, 180.0).unwrap();
        assert_eq!(p.lon, -180.0);
        let p = GeoPoint::new(10.0, -180.0).unwrap();
        assert_eq!(p.lon, -180.0);
    }

    #[test]
    fn test_normalize_deg_range() {
        for angle in [-720.0, -360.0, -1e-17, 0.0, 359.999, 360.0, 725.0] {
            let n = normalize_deg(angle);
            assert!((0.0..360.0).contains(&n), "{angle} normalized to {n}");
        }
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(450.0), 90.0);
    }

    #[test]
    fn test_param_validation() {
        assert_eq!(
            PivotParams::validate_speed(-1.0),
            Err(ValidationError::Speed(-1.0))
        );
        assert_eq!(PivotParams::validate_speed(0.0), Ok(0.0));
        assert_eq!(
            PivotParams::validate_duty_cycle(100.5),
            Err(ValidationError::DutyCycle(100.5))
        );
        assert_eq!(PivotParams::validate_duty_cycle(0.0), Ok(0.0));
        assert_eq!(
            PivotParams::validate_time_acceleration(0.0),
            Err(ValidationError::TimeAcceleration(0.0))
        );
        assert_eq!(
            validate_arm_length(0.0),
            Err(ValidationError::ArmLength(0.0))
        );
        assert_eq!(
            validate_arm_length(f64::INFINITY),
            Err(ValidationError::NonFinite("arm length"))
        );
    }

    #[test]
    fn test_full_rotation_estimate() {
        let params = PivotParams {
            speed_m_per_min: 10.0,
            duty_cycle_percent: 50.0,
            ..Default::default()
        };
        let mins = params.full_rotation_minutes(600.0).unwrap();
        assert!((mins - 120.0).abs() < 1e-9);
        assert_eq!(format_hhmm(Some(mins)), "02:00");

        let stopped = PivotParams {
            duty_cycle_percent: 0.0,
            ..Default::default()
        };
        assert!(stopped.full_rotation_minutes(600.0).is_none());
        assert_eq!(format_hhmm(None), "00:00");
        assert_eq!(format_hhmm(Some(75.9)), "01:15");
    }

    #[test]
    fn test_geometry_completeness() {
        let mut geometry = PivotGeometry::default();
        assert!(geometry.complete().is_none());
        assert_eq!(geometry.circumference_m(), 0.0);
        geometry.center = Some(GeoPoint::default());
        assert!(geometry.complete().is_none());
        geometry.arm_length_m = Some(100.0);
        assert!(geometry.complete().is_some());
        assert!((geometry.circumference_m() - 628.318_530_7).abs() < 1e-6);
    }

    #[test]
    fn test_status_serde() {
        let status = PivotStatus {
            center: Some(GeoPoint::from_degrees(1.0, 2.0)),
            current_angle_deg: 42.0,
            azimuth_deg: 42.0,
            cycle_phase: CyclePhase::Pause,
            full_rotation_hhmm: "01:00".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&status).unwrap();
        let back: PivotStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}
