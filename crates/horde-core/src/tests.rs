#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    use crate::commands::SimCommand;
    use crate::components::{AgentBlueprint, AvoidanceProfile};
    use crate::config::SteeringConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::SwarmEvent;
    use crate::state::SwarmSnapshot;
    use crate::types::*;

    // ---- Math helpers ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert_abs_diff_eq!(time.elapsed_secs, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_safe_normalize_degenerate_uses_fallback() {
        let out = safe_normalize(Vec3::new(1e-5, 0.0, -1e-5), Vec3::X);
        assert_eq!(out, Vec3::X);
        let out = safe_normalize(Vec3::new(f32::NAN, 0.0, 1.0), Vec3::Z);
        assert_eq!(out, Vec3::Z);
    }

    #[test]
    fn test_safe_normalize_drops_height() {
        let out = safe_normalize(Vec3::new(3.0, 10.0, 4.0), Vec3::X);
        assert_abs_diff_eq!(out.x, 0.6, epsilon = 1e-6);
        assert_eq!(out.y, 0.0);
        assert_abs_diff_eq!(out.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_perpendicular_is_orthogonal_unit() {
        let dir = safe_normalize(Vec3::new(1.0, 0.0, 2.0), Vec3::Z);
        let perp = perpendicular(dir);
        assert_abs_diff_eq!(dir.dot(perp), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(perp.length(), 1.0, epsilon = 1e-6);
        // +90° about Y takes +Z to +X.
        assert_abs_diff_eq!(perpendicular(Vec3::Z).x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_round_trip() {
        for i in 0..8 {
            let angle = -3.0 + i as f32 * 0.75;
            let dir = direction_from_yaw(angle);
            assert_abs_diff_eq!(yaw_of(dir), angle, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_look_rotation_faces_forward() {
        let forward = Vec3::new(-1.0, 0.0, 1.0).normalize();
        let rotated = look_rotation(forward) * Vec3::Z;
        assert_abs_diff_eq!(rotated.x, forward.x, epsilon = 1e-5);
        assert_abs_diff_eq!(rotated.z, forward.z, epsilon = 1e-5);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        SteeringConfig::default().validate().unwrap();
        AvoidanceProfile::default().validate().unwrap();
        AgentBlueprint::default().validate().unwrap();
    }

    #[test]
    fn test_config_partial_json_takes_defaults() {
        let config = SteeringConfig::from_json_str(r#"{ "sector_count": 16, "turn_rate": 3.0 }"#)
            .unwrap();
        assert_eq!(config.sector_count, 16);
        assert_eq!(config.turn_rate, 3.0);
        assert_eq!(
            config.radius_tolerance,
            SteeringConfig::default().radius_tolerance
        );
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = SteeringConfig::from_json_str(r#"{ "sector_count": 2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooFewSectors { count: 2, .. }));

        let err = SteeringConfig::from_json_str(r#"{ "turn_rate": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "turn_rate",
                ..
            }
        ));

        let err = SteeringConfig::from_json_str(r#"{ "separation_blend": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));

        let err = SteeringConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_rejects_zero_orbit_weights() {
        let config = SteeringConfig {
            radial_weight: 0.0,
            tangential_weight: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroOrbitWeights)
        ));
    }

    #[test]
    fn test_profile_validation() {
        let zero_radius = AvoidanceProfile {
            entity_radius: 0.0,
            ..Default::default()
        };
        assert!(zero_radius.validate().is_err());

        let nan_strength = AvoidanceProfile {
            avoidance_strength: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_strength.validate(),
            Err(ConfigError::NotFinite { .. })
        ));

        let profile =
            AvoidanceProfile::from_json_str(r#"{ "detection_radius": 5.0 }"#).unwrap();
        assert_eq!(profile.detection_radius, 5.0);
        assert_eq!(profile.entity_radius, 0.5);
    }

    #[test]
    fn test_profile_ordering_is_reported_not_rejected() {
        assert!(AvoidanceProfile::default().ordering_violation().is_none());

        let inverted = AvoidanceProfile {
            player_separation_radius: 10.0,
            desired_distance_from_player: 4.0,
            ..Default::default()
        };
        inverted.validate().unwrap();
        let violation = inverted.ordering_violation().unwrap();
        assert_eq!(violation.player_separation_radius, 10.0);
        assert_eq!(violation.desired_distance_from_player, 4.0);
    }

    #[test]
    fn test_blueprint_validation() {
        let negative_speed = AgentBlueprint {
            move_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_speed.validate(),
            Err(ConfigError::Negative {
                field: "move_speed",
                ..
            })
        ));

        let dead = AgentBlueprint {
            health: 0,
            ..Default::default()
        };
        assert!(dead.validate().is_err());
    }

    // ---- Serde shapes ----

    #[test]
    fn test_sim_command_serde() {
        let commands = vec![
            SimCommand::SpawnPlayer {
                position: Vec3::new(1.0, 0.0, 2.0),
            },
            SimCommand::MovePlayer {
                position: Vec3::ZERO,
            },
            SimCommand::RemovePlayer,
            SimCommand::SpawnAgent {
                position: Vec3::new(5.0, 0.0, 0.0),
                blueprint: AgentBlueprint::default(),
            },
            SimCommand::SpawnRing {
                count: 8,
                radius: 12.0,
                blueprint: AgentBlueprint::default(),
            },
            SimCommand::DamageAgent {
                agent_id: 7,
                amount: 25,
            },
            SimCommand::SetSteeringConfig {
                config: SteeringConfig::default(),
            },
            SimCommand::Pause,
            SimCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SimCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_spawn_agent_blueprint_is_optional() {
        let cmd: SimCommand =
            serde_json::from_str(r#"{ "type": "SpawnAgent", "position": [1.0, 0.0, 1.0] }"#)
                .unwrap();
        match cmd {
            SimCommand::SpawnAgent { blueprint, .. } => {
                assert_eq!(blueprint, AgentBlueprint::default())
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_swarm_event_serde() {
        let events = vec![
            SwarmEvent::AttackIssued {
                agent_id: 3,
                kind: AttackKind::Ranged,
            },
            SwarmEvent::AgentDied { agent_id: 4 },
            SwarmEvent::AvoidanceSkipped {
                reason: SkipReason::NoTarget,
            },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: SwarmEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let json = serde_json::to_string(&SwarmSnapshot::default()).unwrap();
        assert!(json.contains("\"agents\":[]"));
        assert!(json.contains("\"player\":null"));
    }

    #[test]
    fn test_orbit_handedness_sign() {
        assert_eq!(OrbitHandedness::CounterClockwise.sign(), 1.0);
        assert_eq!(OrbitHandedness::Clockwise.sign(), -1.0);
    }
}
