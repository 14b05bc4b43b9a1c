//! Ship handling and kinematic integration.
//!
//! Ships carrying a `ControlIntent` get input physics first: turn inputs
//! rotate the heading, thrust inputs drive signed speed within the
//! forward and astern caps, and idle throttle decays speed toward zero.
//! Every live ship then advances along its heading, which doubles as
//! dead reckoning for remote ships between position reports.

use hecs::World;

use broadside_core::components::{ControlIntent, Destroyed, ShipKinematics};
use broadside_core::constants::{ACCELERATION, DECELERATION, MAX_SPEED, TURN_RATE};
use broadside_core::types::{Position, Velocity};

/// Apply one ship's control inputs and advance its position. Pure over
/// its arguments so handling properties test without a world.
pub fn integrate_ship(
    kin: &mut ShipKinematics,
    intent: &ControlIntent,
    pos: &mut Position,
    dt: f64,
) {
    // Opposite inputs cancel.
    let turn = (intent.turn_right as i8 - intent.turn_left as i8) as f64;
    kin.heading += turn * TURN_RATE * dt;

    if intent.accelerate && !intent.decelerate {
        kin.speed = (kin.speed + ACCELERATION * dt).min(MAX_SPEED);
    } else if intent.decelerate && !intent.accelerate {
        // Through zero and into astern, capped at full reverse.
        kin.speed = (kin.speed - ACCELERATION * dt).max(-MAX_SPEED);
    } else if kin.speed != 0.0 {
        // Decays toward rest and snaps to exactly zero on crossing.
        let decayed = kin.speed - kin.speed.signum() * DECELERATION * dt;
        kin.speed = if decayed * kin.speed <= 0.0 { 0.0 } else { decayed };
    }

    advance(pos, kin, dt);
}

fn advance(pos: &mut Position, kin: &ShipKinematics, dt: f64) {
    let vel = Velocity::from_heading(kin.heading, kin.speed);
    pos.x += vel.x * dt;
    pos.z += vel.z * dt;
}

/// Run ship handling and integration for all live ships.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, kin, intent, destroyed)) in world.query_mut::<(
        &mut Position,
        &mut ShipKinematics,
        &ControlIntent,
        Option<&Destroyed>,
    )>() {
        if destroyed.is_some() {
            continue;
        }
        integrate_ship(kin, intent, pos, dt);
    }

    // Ships without a control signal (AI, freshly reported remotes)
    // still advance along their heading.
    for (_entity, (pos, kin, intent, destroyed)) in world.query_mut::<(
        &mut Position,
        &ShipKinematics,
        Option<&ControlIntent>,
        Option<&Destroyed>,
    )>() {
        if destroyed.is_some() || intent.is_some() {
            continue;
        }
        advance(pos, kin, dt);
    }
}
