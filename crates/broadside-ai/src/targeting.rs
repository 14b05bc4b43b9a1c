//! Target acquisition with hysteresis.
//!
//! The closest eligible ship is always computed, but the current target is
//! only replaced when retention breaks: the hold interval elapsed, the
//! target was destroyed, or the target slipped into a safe zone. This
//! keeps AI ships from thrashing between two near-equidistant targets.

use broadside_core::constants::AI_TARGET_CHANGE_INTERVAL_SECS;
use broadside_core::types::{Position, ShipId};

/// One potential target as seen at decision time.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate {
    pub id: ShipId,
    pub position: Position,
    pub destroyed: bool,
    pub in_safe_zone: bool,
}

impl TargetCandidate {
    fn eligible(&self) -> bool {
        !self.destroyed && !self.in_safe_zone
    }
}

/// Input to one target-selection pass.
#[derive(Debug, Clone, Copy)]
pub struct TargetContext<'a> {
    pub self_id: ShipId,
    pub self_position: Position,
    pub current_target: Option<ShipId>,
    /// Simulation time of the last target change.
    pub last_target_change_secs: f64,
    pub now_secs: f64,
    /// Every other ship in the arena, including ineligible ones (needed to
    /// detect that the current target was destroyed or zoned).
    pub candidates: &'a [TargetCandidate],
}

/// Result of one target-selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetDecision {
    pub target: Option<ShipId>,
    /// Whether retention broke this pass. The hold clock restarts even
    /// when re-selection lands on the same ship.
    pub reselected: bool,
}

/// Pick the target for this tick.
pub fn select_target(ctx: &TargetContext<'_>) -> TargetDecision {
    let closest = ctx
        .candidates
        .iter()
        .filter(|c| c.id != ctx.self_id && c.eligible())
        .min_by(|a, b| {
            let da = ctx.self_position.planar_distance_sq_to(&a.position);
            let db = ctx.self_position.planar_distance_sq_to(&b.position);
            da.total_cmp(&db)
        })
        .map(|c| c.id);

    let retained = match ctx.current_target {
        Some(current) => {
            let stale =
                ctx.now_secs - ctx.last_target_change_secs > AI_TARGET_CHANGE_INTERVAL_SECS;
            let lost = ctx
                .candidates
                .iter()
                .find(|c| c.id == current)
                .map_or(true, |c| !c.eligible());
            !stale && !lost
        }
        None => false,
    };

    if retained {
        TargetDecision {
            target: ctx.current_target,
            reselected: false,
        }
    } else {
        TargetDecision {
            target: closest,
            reselected: true,
        }
    }
}
