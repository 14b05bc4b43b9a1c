#[cfg(test)]
mod tests {
    use crate::commands::WorldCommand;
    use crate::components::{ControlIntent, HullHealth};
    use crate::constants::SAFE_ZONES;
    use crate::enums::{Faction, FireSide};
    use crate::events::GameEvent;
    use crate::protocol::{ClientMessage, ServerMessage};
    use crate::replica::WorldReplica;
    use crate::state::{PickupView, ShipView, WorldSnapshot};
    use crate::types::*;

    // ---- Geometry ----

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 100.0, 4.0);
        assert!((a.planar_distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.planar_distance_sq_to(&b) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_includes_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(0.0, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_angle_to_matches_movement_convention() {
        let origin = Position::new(0.0, 0.0, 0.0);

        // Heading 0 moves along +z.
        let ahead = Position::new(0.0, 0.0, 10.0);
        assert!((origin.angle_to(&ahead) - 0.0).abs() < 1e-10);

        // +x is heading PI/2.
        let right = Position::new(10.0, 0.0, 0.0);
        assert!((origin.angle_to(&right) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_from_heading() {
        let v = Velocity::from_heading(0.0, 5.0);
        assert!((v.x - 0.0).abs() < 1e-10);
        assert!((v.z - 5.0).abs() < 1e-10);
        assert!((v.planar_speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_shortest_arc_wraps() {
        let tau = std::f64::consts::TAU;
        // 0.1 rad short of a full turn: shortest path is -0.2, not +tau-0.2.
        let diff = shortest_arc(0.1, tau - 0.1);
        assert!((diff + 0.2).abs() < 1e-10, "got {diff}");

        let diff = shortest_arc(tau - 0.1, 0.1);
        assert!((diff - 0.2).abs() < 1e-10, "got {diff}");
    }

    // ---- Safe zones ----

    #[test]
    fn test_zone_boundary_inclusive() {
        let zone = SafeZone {
            x: 0.0,
            z: 0.0,
            radius: 10.0,
        };
        assert!(zone.contains(&Position::new(10.0, 0.0, 0.0)));
        assert!(zone.contains(&Position::new(0.0, 50.0, 10.0)), "y ignored");
        assert!(!zone.contains(&Position::new(10.001, 0.0, 0.0)));
    }

    #[test]
    fn test_default_zones_cover_corners() {
        assert!(in_any_zone(&SAFE_ZONES, &Position::new(-120.0, 0.0, -120.0)));
        assert!(in_any_zone(&SAFE_ZONES, &Position::new(120.0, 0.0, 120.0)));
        assert!(!in_any_zone(&SAFE_ZONES, &Position::new(0.0, 0.0, 0.0)));
    }

    // ---- Hull health ----

    #[test]
    fn test_damage_floors_at_zero() {
        let mut health = HullHealth::full(250);
        assert_eq!(health.apply_damage(25), 225);
        assert_eq!(health.apply_damage(1000), 0);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut health = HullHealth { max: 250, current: 240 };
        assert_eq!(health.heal(25), 10);
        assert_eq!(health.current, 250);
        assert_eq!(health.heal(25), 0);
    }

    // ---- Wire protocol ----

    #[test]
    fn test_client_message_serde() {
        let messages = vec![
            ClientMessage::Join {
                name: "bluebeard".into(),
            },
            ClientMessage::Controls {
                intent: ControlIntent {
                    accelerate: true,
                    ..Default::default()
                },
            },
            ClientMessage::Move {
                position: Position::new(1.0, 0.0, 2.0),
                heading: 0.5,
                speed: 3.0,
            },
            ClientMessage::Fire {
                side: FireSide::Port,
            },
            ClientMessage::DamageReport { amount: 25 },
            ClientMessage::Collect {
                pickup_id: PickupId(3),
            },
        ];
        for msg in &messages {
            let json = serde_json::to_string(msg).unwrap();
            let back: ClientMessage = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_server_message_serde() {
        let messages = vec![
            ServerMessage::Welcome {
                ship_id: ShipId(42),
            },
            ServerMessage::Snapshot(WorldSnapshot::default()),
            ServerMessage::ProjectileList(Vec::new()),
            ServerMessage::Event(GameEvent::ShipLeft { id: ShipId(7) }),
        ];
        for msg in &messages {
            let json = serde_json::to_string(msg).unwrap();
            let back: ServerMessage = serde_json::from_str(&json).unwrap();
            assert_eq!(*msg, back);
        }
    }

    #[test]
    fn test_world_command_serde() {
        let cmd = WorldCommand::Fire {
            ship_id: ShipId(1),
            side: FireSide::Starboard,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: WorldCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    // ---- Replica ----

    fn test_ship(id: u64) -> ShipView {
        ShipView {
            id: ShipId(id),
            name: format!("ship-{id}"),
            faction: Faction::RemotePlayer,
            coins: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_replica_events_are_idempotent() {
        let mut replica = WorldReplica::new();
        replica.apply(&ServerMessage::Event(GameEvent::ShipJoined {
            ship: test_ship(1),
        }));
        assert_eq!(replica.world.ships.len(), 1);

        // Duplicate join replaces, never duplicates.
        replica.apply(&ServerMessage::Event(GameEvent::ShipJoined {
            ship: test_ship(1),
        }));
        assert_eq!(replica.world.ships.len(), 1);

        // Destroy twice: still one destroyed ship.
        let destroy = ServerMessage::Event(GameEvent::ShipDestroyed {
            id: ShipId(1),
            explosion: Position::default(),
        });
        replica.apply(&destroy);
        replica.apply(&destroy);
        assert!(replica.world.ships[0].destroyed);
        assert_eq!(replica.world.ships[0].health.current, 0);

        // Leave twice: gone, then no-op.
        let leave = ServerMessage::Event(GameEvent::ShipLeft { id: ShipId(1) });
        replica.apply(&leave);
        replica.apply(&leave);
        assert!(replica.world.ships.is_empty());
    }

    #[test]
    fn test_replica_event_for_unknown_entity_is_ignored() {
        let mut replica = WorldReplica::new();
        replica.apply(&ServerMessage::Event(GameEvent::HealthChanged {
            id: ShipId(99),
            health: HullHealth::full(250),
        }));
        assert!(replica.world.ships.is_empty());
    }

    #[test]
    fn test_replica_snapshot_wins_over_events() {
        let mut replica = WorldReplica::new();
        replica.apply(&ServerMessage::Event(GameEvent::ShipJoined {
            ship: test_ship(1),
        }));

        // An authoritative snapshot without that ship replaces the mirror.
        let snapshot = WorldSnapshot {
            ships: vec![test_ship(2)],
            pickups: vec![PickupView {
                id: PickupId(0),
                position: Position::default(),
            }],
            ..Default::default()
        };
        replica.apply(&ServerMessage::Snapshot(snapshot));
        assert_eq!(replica.world.ships.len(), 1);
        assert_eq!(replica.world.ships[0].id, ShipId(2));

        // A late duplicate of the pickup collection still resolves cleanly.
        let collected = ServerMessage::Event(GameEvent::PickupCollected {
            id: PickupId(0),
            by: ShipId(2),
            balance: 150,
        });
        replica.apply(&collected);
        replica.apply(&collected);
        assert!(replica.world.pickups.is_empty());
        assert_eq!(replica.world.ships[0].coins, 150);
    }
}
