//! Arena engine. Owns the hecs ECS world, processes queued commands,
//! runs all systems, and produces `WorldSnapshot`s.
//!
//! The engine is headless and driven by measured deltas: callers pass
//! wall-clock Δt and the integrator clamps it, so a stalled host catches
//! up without tunneling or speed spikes.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use broadside_core::commands::WorldCommand;
use broadside_core::components::{CoinPurse, Destroyed, HullHealth, Pickup, ShipKinematics};
use broadside_core::constants::{COIN_VALUE, MAX_DT, SAFE_ZONES};
use broadside_core::events::GameEvent;
use broadside_core::state::WorldSnapshot;
use broadside_core::types::{in_any_zone, PickupId, Position, ShipId, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new arena.
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed and same inputs reproduce the
    /// same simulation.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The authoritative arena. Owns the ECS world and all sim state.
pub struct ArenaEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    next_projectile_id: u64,
    command_queue: VecDeque<WorldCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl ArenaEngine {
    /// Create a new arena: AI fleet spawned, coin field scattered.
    pub fn new(config: ArenaConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_arena(&mut world, &mut rng);

        Self {
            world,
            time: SimTime::default(),
            rng,
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: WorldCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = WorldCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. The delta is clamped to the integrator's maximum.
    pub fn tick(&mut self, dt: f64) -> WorldSnapshot {
        let dt = dt.clamp(0.0, MAX_DT);

        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether a ship with this id currently exists.
    pub fn has_ship(&self, id: ShipId) -> bool {
        self.find_ship(id).is_some()
    }

    fn find_ship(&self, id: ShipId) -> Option<hecs::Entity> {
        self.world
            .query::<&ShipId>()
            .iter()
            .find(|(_, ship_id)| **ship_id == id)
            .map(|(entity, _)| entity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands referencing entities that no
    /// longer exist are silently dropped.
    fn handle_command(&mut self, command: WorldCommand) {
        match command {
            WorldCommand::Join { ship_id, name } => {
                if self.find_ship(ship_id).is_some() {
                    return;
                }
                let entity = world_setup::spawn_participant_ship(
                    &mut self.world,
                    &mut self.rng,
                    ship_id,
                    name,
                );
                if let Some(ship) = systems::snapshot::ship_view(&self.world, entity) {
                    self.events.push(GameEvent::ShipJoined { ship });
                }
            }
            WorldCommand::Leave { ship_id } => {
                if let Some(entity) = self.find_ship(ship_id) {
                    let _ = self.world.despawn(entity);
                    self.events.push(GameEvent::ShipLeft { id: ship_id });
                }
            }
            WorldCommand::SetControls { ship_id, intent } => {
                if let Some(entity) = self.find_ship(ship_id) {
                    let _ = self.world.insert_one(entity, intent);
                }
            }
            WorldCommand::MoveReport {
                ship_id,
                position,
                heading,
                speed,
            } => {
                let Some(entity) = self.find_ship(ship_id) else {
                    return;
                };
                if self.world.get::<&Destroyed>(entity).is_ok() {
                    return;
                }
                if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                    *pos = position;
                }
                if let Ok(mut kin) = self.world.get::<&mut ShipKinematics>(entity) {
                    kin.heading = heading;
                    kin.speed = speed;
                }
            }
            WorldCommand::Fire { ship_id, side } => {
                let Some(entity) = self.find_ship(ship_id) else {
                    return;
                };
                if self.world.get::<&Destroyed>(entity).is_ok() {
                    return;
                }
                let parts = {
                    let mut query = self
                        .world
                        .query_one::<(
                            &Position,
                            &ShipKinematics,
                            &broadside_core::enums::Faction,
                        )>(entity)
                        .ok();
                    query
                        .as_mut()
                        .and_then(|q| q.get())
                        .map(|(pos, kin, faction)| (*pos, kin.heading, *faction))
                };
                if let Some((position, heading, faction)) = parts {
                    let id = broadside_core::types::ProjectileId(self.next_projectile_id);
                    self.next_projectile_id += 1;
                    systems::firing::spawn_broadside(
                        &mut self.world,
                        &mut self.rng,
                        id,
                        self.time.elapsed_secs,
                        ship_id,
                        faction,
                        &position,
                        heading,
                        side,
                    );
                }
            }
            WorldCommand::DamageReport { ship_id, amount } => {
                self.apply_reported_damage(ship_id, amount);
            }
            WorldCommand::Collect { ship_id, pickup_id } => {
                self.collect_pickup(ship_id, pickup_id);
            }
        }
    }

    /// Apply self-reported damage to a participant's own hull. Safe-zone
    /// immunity and the destroyed state both make the report a no-op.
    fn apply_reported_damage(&mut self, ship_id: ShipId, amount: i32) {
        let Some(entity) = self.find_ship(ship_id) else {
            return;
        };
        if self.world.get::<&Destroyed>(entity).is_ok() {
            return;
        }
        let position = match self.world.get::<&Position>(entity) {
            Ok(pos) => *pos,
            Err(_) => return,
        };
        if in_any_zone(&SAFE_ZONES, &position) {
            return;
        }

        let health = match self.world.get::<&mut HullHealth>(entity) {
            Ok(mut hull) => {
                hull.apply_damage(amount.max(0));
                *hull
            }
            Err(_) => return,
        };
        if health.current > 0 {
            self.events.push(GameEvent::HealthChanged {
                id: ship_id,
                health,
            });
            return;
        }

        let _ = self.world.insert_one(
            entity,
            Destroyed {
                at_secs: self.time.elapsed_secs,
            },
        );
        self.events.push(GameEvent::ShipDestroyed {
            id: ship_id,
            explosion: Position::new(position.x, position.y + 2.0, position.z),
        });
    }

    /// Consume a pickup and credit the claimant. First accepted claim
    /// wins; the entity is gone before any later claim is processed.
    fn collect_pickup(&mut self, ship_id: ShipId, pickup_id: PickupId) {
        let Some(ship) = self.find_ship(ship_id) else {
            return;
        };
        let pickup = self
            .world
            .query::<&Pickup>()
            .iter()
            .find(|(_, p)| p.id == pickup_id)
            .map(|(entity, _)| entity);
        let Some(pickup) = pickup else {
            return;
        };

        let _ = self.world.despawn(pickup);
        let balance = match self.world.get::<&mut CoinPurse>(ship) {
            Ok(mut purse) => {
                purse.0 += COIN_VALUE;
                purse.0
            }
            Err(_) => return,
        };
        self.events.push(GameEvent::PickupCollected {
            id: pickup_id,
            by: ship_id,
            balance,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. AI decisions (steering, targeting, broadsides)
        systems::ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_projectile_id,
            now,
            dt,
        );
        // 2. Ship handling and integration
        systems::movement::run(&mut self.world, dt);
        // 3. Projectile ballistics and purge
        systems::projectiles::run(
            &mut self.world,
            now,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Hit resolution and damage
        systems::collision::run(&mut self.world, now, &mut self.events);
        // 5. Safe-zone regeneration
        systems::regen::run(&mut self.world, now, &mut self.events);
        // 6. Cleanup of destroyed hulls
        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer, &mut self.events);
    }
}
