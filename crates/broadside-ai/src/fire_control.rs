//! Fire control: range/cooldown gating, lead aim, and battery selection.

use broadside_core::enums::FireSide;
use broadside_core::types::{Position, Velocity};

use broadside_core::constants::AI_LEAD_TIME_SECS;

/// Input to one fire-control evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FireContext {
    pub now_secs: f64,
    pub last_fire_secs: f64,
    pub cooldown_secs: f64,
    pub firing_range: f64,
    pub self_position: Position,
    pub self_heading: f64,
    pub target_position: Position,
    pub target_heading: f64,
    pub target_speed: f64,
}

/// Decide whether to fire this tick, and from which battery.
///
/// The aim point is the target's position extrapolated along its own
/// heading/speed for a fixed lead time; the battery is chosen from which
/// lateral half-plane the lead point falls into relative to the shooter's
/// heading.
pub fn fire_solution(ctx: &FireContext) -> Option<FireSide> {
    let distance = ctx.self_position.planar_distance_to(&ctx.target_position);
    if distance > ctx.firing_range {
        return None;
    }
    if ctx.now_secs - ctx.last_fire_secs < ctx.cooldown_secs {
        return None;
    }

    let target_velocity = Velocity::from_heading(ctx.target_heading, ctx.target_speed);
    let lead_point = Position::new(
        ctx.target_position.x + target_velocity.x * AI_LEAD_TIME_SECS,
        0.0,
        ctx.target_position.z + target_velocity.z * AI_LEAD_TIME_SECS,
    );

    let aim_angle = ctx.self_position.angle_to(&lead_point);
    let relative = (aim_angle - ctx.self_heading).rem_euclid(std::f64::consts::TAU);
    if relative > std::f64::consts::PI {
        Some(FireSide::Port)
    } else {
        Some(FireSide::Starboard)
    }
}
