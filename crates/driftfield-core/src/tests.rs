#[cfg(test)]
mod tests {
    use crate::config::PoolConfig;
    use crate::enums::{EndBehavior, SchedulerPhase};
    use crate::error::ConfigError;
    use crate::events::PoolEvent;
    use crate::state::PoolSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_scheduler_phase_serde() {
        let variants = vec![
            SchedulerPhase::AwaitingFirstSpawn,
            SchedulerPhase::Spawning,
            SchedulerPhase::Reclaiming,
            SchedulerPhase::Terminated,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SchedulerPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_end_behavior_serde() {
        let variants = vec![EndBehavior::Halt, EndBehavior::Reclaim];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EndBehavior = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PoolEvent round-trips through serde (tagged union).
    #[test]
    fn test_pool_event_serde() {
        let events = vec![
            PoolEvent::Spawned {
                slot: 3,
                position: Position::new(1.5, -2.0),
            },
            PoolEvent::KeptInPlay { slot: 0 },
            PoolEvent::Deactivated { slot: 7 },
            PoolEvent::StillInRange { slot: 2 },
            PoolEvent::SweepRestarted { pass: 4 },
            PoolEvent::PoolDrained { passes: 1 },
            PoolEvent::CursorReset { observed: 99 },
            PoolEvent::PhaseChanged {
                from: SchedulerPhase::Spawning,
                to: SchedulerPhase::Reclaiming,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: PoolEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify PoolConfig round-trips and its default passes validation.
    #[test]
    fn test_config_serde_and_default() {
        let config = PoolConfig::default();
        assert_eq!(config.validate(), Ok(()));

        let json = serde_json::to_string(&config).unwrap();
        let back: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_rejects_empty_pool() {
        let config = PoolConfig {
            pool_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPool));
    }

    #[test]
    fn test_config_rejects_radius_order() {
        let config = PoolConfig {
            inner_radius: 20.0,
            outer_radius: 12.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RadiusOrder {
                inner: 20.0,
                outer: 12.0
            })
        );

        // Equal radii leave no annulus to place into.
        let config = PoolConfig {
            inner_radius: 12.0,
            outer_radius: 12.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_non_positive_inner_radius() {
        let config = PoolConfig {
            inner_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveInnerRadius { inner: 0.0 })
        );
    }

    #[test]
    fn test_config_rejects_bad_intervals() {
        let config = PoolConfig {
            respawn_secs: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveInterval { .. })
        ));

        let config = PoolConfig {
            delay_secs: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeDelay { .. })
        ));

        let config = PoolConfig {
            spawn_duration_secs: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_config_size_range_checked_only_when_enabled() {
        // Inverted range is fine while random_size is off.
        let config = PoolConfig {
            size_range: (4.0, 1.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = PoolConfig {
            random_size: true,
            size_range: (4.0, 1.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SizeRange { min: 4.0, max: 1.0 })
        );
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let config = PoolConfig {
            spawn_duration_secs: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert!(a.distance_to(&a).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement with host-supplied deltas.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..5 {
            time.advance(0.2);
        }
        assert_eq!(time.tick, 5);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Verify PoolSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = PoolSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PoolSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
