//! AI system: drives computer-controlled ships each tick.
//!
//! Calls the decision engine from broadside-ai for target selection,
//! maneuvering, and fire control, then applies the results to ECS
//! components. Decisions are staged in a buffer and processed in
//! ascending ship id order so RNG draws for aim spread stay
//! deterministic.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use broadside_core::components::{AiController, Destroyed, ShipKinematics};
use broadside_core::constants::SAFE_ZONES;
use broadside_core::enums::{Faction, FireSide};
use broadside_core::types::{in_any_zone, Position, ProjectileId, ShipId};

use broadside_ai::fire_control::{fire_solution, FireContext};
use broadside_ai::maneuver::{select_maneuver, steer};
use broadside_ai::targeting::{select_target, TargetCandidate, TargetContext};

use crate::systems::firing;

struct ShipState {
    id: ShipId,
    position: Position,
    heading: f64,
    speed: f64,
    destroyed: bool,
    in_safe_zone: bool,
}

struct Decision {
    entity: Entity,
    id: ShipId,
    controller: AiController,
    heading: f64,
    speed: f64,
    fire: Option<(FireSide, Position)>,
}

/// Run the AI system for every live computer-controlled ship.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u64,
    now_secs: f64,
    dt: f64,
) {
    let mut roster: Vec<ShipState> = world
        .query::<(
            &ShipId,
            &Position,
            &ShipKinematics,
            Option<&Destroyed>,
        )>()
        .iter()
        .map(|(_, (id, pos, kin, destroyed))| ShipState {
            id: *id,
            position: *pos,
            heading: kin.heading,
            speed: kin.speed,
            destroyed: destroyed.is_some(),
            in_safe_zone: in_any_zone(&SAFE_ZONES, pos),
        })
        .collect();
    roster.sort_by_key(|s| s.id);

    // Every hull is a candidate, participant or AI alike; self-exclusion
    // happens in selection. Same-faction shots still deal no damage.
    let candidates: Vec<TargetCandidate> = roster
        .iter()
        .map(|s| TargetCandidate {
            id: s.id,
            position: s.position,
            destroyed: s.destroyed,
            in_safe_zone: s.in_safe_zone,
        })
        .collect();

    let mut decisions: Vec<Decision> = Vec::new();
    {
        let mut query = world.query::<(
            &ShipId,
            &Position,
            &ShipKinematics,
            &AiController,
            Option<&Destroyed>,
        )>();
        for (entity, (id, pos, kin, controller, destroyed)) in query.iter() {
            if destroyed.is_some() {
                continue;
            }

            let mut controller = *controller;
            let picked = select_target(&TargetContext {
                self_id: *id,
                self_position: *pos,
                current_target: controller.target,
                last_target_change_secs: controller.last_target_change_secs,
                now_secs,
                candidates: &candidates,
            });
            if picked.reselected {
                controller.last_target_change_secs = now_secs;
            }
            controller.target = picked.target;

            let mut heading = kin.heading;
            let mut speed = 0.0;
            let mut fire = None;

            if let Some(target) = picked.target.and_then(|t| roster.iter().find(|s| s.id == t))
            {
                let steering = select_maneuver(pos, &target.position, now_secs);
                heading = steer(kin.heading, steering.desired_heading, dt);
                speed = steering.cruise_speed;

                let solution = fire_solution(&FireContext {
                    now_secs,
                    last_fire_secs: controller.last_fire_secs,
                    cooldown_secs: controller.cooldown_secs,
                    firing_range: controller.firing_range,
                    self_position: *pos,
                    self_heading: heading,
                    target_position: target.position,
                    target_heading: target.heading,
                    target_speed: target.speed,
                });
                if let Some(side) = solution {
                    controller.last_fire_secs = now_secs;
                    fire = Some((side, *pos));
                }
            }

            decisions.push(Decision {
                entity,
                id: *id,
                controller,
                heading,
                speed,
                fire,
            });
        }
    }
    // Apply in ship id order so aim spread draws happen in a stable
    // order.
    decisions.sort_by_key(|d| d.id);

    for decision in decisions {
        if let Ok(mut controller) = world.get::<&mut AiController>(decision.entity) {
            *controller = decision.controller;
        }
        if let Ok(mut kin) = world.get::<&mut ShipKinematics>(decision.entity) {
            kin.heading = decision.heading;
            kin.speed = decision.speed;
        }

        if let Some((side, position)) = decision.fire {
            let id = ProjectileId(*next_projectile_id);
            *next_projectile_id += 1;
            firing::spawn_broadside(
                world,
                rng,
                id,
                now_secs,
                decision.id,
                Faction::Ai,
                &position,
                decision.heading,
                side,
            );
        }
    }
}
