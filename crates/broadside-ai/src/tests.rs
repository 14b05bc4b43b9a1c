#[cfg(test)]
mod tests {
    use broadside_core::constants::*;
    use broadside_core::enums::FireSide;
    use broadside_core::types::{Position, ShipId};

    use crate::fire_control::{fire_solution, FireContext};
    use crate::maneuver::{select_maneuver, steer, Maneuver};
    use crate::targeting::{select_target, TargetCandidate, TargetContext};

    fn candidate(id: u64, x: f64, z: f64) -> TargetCandidate {
        TargetCandidate {
            id: ShipId(id),
            position: Position::new(x, 0.0, z),
            destroyed: false,
            in_safe_zone: false,
        }
    }

    fn make_target_ctx<'a>(
        current: Option<u64>,
        last_change: f64,
        now: f64,
        candidates: &'a [TargetCandidate],
    ) -> TargetContext<'a> {
        TargetContext {
            self_id: ShipId(0),
            self_position: Position::new(0.0, 0.0, 0.0),
            current_target: current.map(ShipId),
            last_target_change_secs: last_change,
            now_secs: now,
            candidates,
        }
    }

    // ---- Targeting ----

    #[test]
    fn test_acquires_closest_candidate_when_untargeted() {
        let candidates = [candidate(1, 50.0, 0.0), candidate(2, 10.0, 0.0)];
        let decision = select_target(&make_target_ctx(None, 0.0, 0.0, &candidates));
        assert_eq!(decision.target, Some(ShipId(2)));
        assert!(decision.reselected);
    }

    #[test]
    fn test_retains_target_even_if_not_closest() {
        // Ship 1 is current but ship 2 is closer; within the hold window
        // the current target is retained.
        let candidates = [candidate(1, 50.0, 0.0), candidate(2, 10.0, 0.0)];
        let decision = select_target(&make_target_ctx(Some(1), 0.0, 5.0, &candidates));
        assert_eq!(decision.target, Some(ShipId(1)));
        assert!(!decision.reselected);
    }

    #[test]
    fn test_retarget_after_hold_interval() {
        let candidates = [candidate(1, 50.0, 0.0), candidate(2, 10.0, 0.0)];
        let now = AI_TARGET_CHANGE_INTERVAL_SECS + 0.1;
        let decision = select_target(&make_target_ctx(Some(1), 0.0, now, &candidates));
        assert_eq!(decision.target, Some(ShipId(2)));
        assert!(decision.reselected);
    }

    #[test]
    fn test_hold_clock_restarts_even_when_closest_is_current() {
        // The hold elapsed but the current target is still the closest:
        // the pick is unchanged, yet the clock restarts so the next
        // re-evaluation is a full window away.
        let candidates = [candidate(1, 10.0, 0.0), candidate(2, 50.0, 0.0)];
        let now = AI_TARGET_CHANGE_INTERVAL_SECS + 0.1;
        let decision = select_target(&make_target_ctx(Some(1), 0.0, now, &candidates));
        assert_eq!(decision.target, Some(ShipId(1)));
        assert!(decision.reselected);
    }

    #[test]
    fn test_retarget_when_target_destroyed() {
        let mut candidates = [candidate(1, 50.0, 0.0), candidate(2, 10.0, 0.0)];
        candidates[0].destroyed = true;
        let decision = select_target(&make_target_ctx(Some(1), 0.0, 1.0, &candidates));
        assert_eq!(decision.target, Some(ShipId(2)));
        assert!(decision.reselected);
    }

    #[test]
    fn test_retarget_when_target_enters_safe_zone() {
        let mut candidates = [candidate(1, 50.0, 0.0), candidate(2, 10.0, 0.0)];
        candidates[0].in_safe_zone = true;
        let decision = select_target(&make_target_ctx(Some(1), 0.0, 1.0, &candidates));
        assert_eq!(decision.target, Some(ShipId(2)));
    }

    #[test]
    fn test_zoned_candidates_never_acquired() {
        let mut candidates = [candidate(1, 10.0, 0.0)];
        candidates[0].in_safe_zone = true;
        let decision = select_target(&make_target_ctx(None, 0.0, 0.0, &candidates));
        assert_eq!(decision.target, None);
    }

    #[test]
    fn test_self_is_never_a_candidate() {
        let candidates = [candidate(0, 1.0, 0.0), candidate(1, 50.0, 0.0)];
        let decision = select_target(&make_target_ctx(None, 0.0, 0.0, &candidates));
        assert_eq!(decision.target, Some(ShipId(1)));
    }

    // ---- Maneuver ----

    #[test]
    fn test_approach_beyond_hold_band() {
        // At distance 50 with optimal 35 the ship closes at cruise
        // speed until the range enters the hold band.
        let me = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 0.0, 50.0);
        let steering = select_maneuver(&me, &target, 0.0);
        assert_eq!(steering.maneuver, Maneuver::Approach);
        assert!((steering.desired_heading - 0.0).abs() < 1e-10);
        assert!((steering.cruise_speed - AI_CRUISE_SPEED).abs() < 1e-10);
    }

    #[test]
    fn test_retreat_inside_hold_band() {
        let me = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 0.0, 20.0);
        let steering = select_maneuver(&me, &target, 0.0);
        assert_eq!(steering.maneuver, Maneuver::Retreat);
        assert!((steering.desired_heading - std::f64::consts::PI).abs() < 1e-10);
        assert!((steering.cruise_speed - AI_CRUISE_SPEED).abs() < 1e-10);
    }

    #[test]
    fn test_circle_within_hold_band() {
        let me = Position::new(0.0, 0.0, 0.0);
        for d in [
            AI_OPTIMAL_RANGE - AI_RANGE_DEADBAND,
            AI_OPTIMAL_RANGE,
            AI_OPTIMAL_RANGE + AI_RANGE_DEADBAND,
        ] {
            let target = Position::new(0.0, 0.0, d);
            let steering = select_maneuver(&me, &target, 0.0);
            assert_eq!(steering.maneuver, Maneuver::Circle, "at distance {d}");
            assert!((steering.cruise_speed - AI_CIRCLE_SPEED).abs() < 1e-10);
        }
    }

    #[test]
    fn test_circle_offset_oscillates() {
        let me = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 0.0, AI_OPTIMAL_RANGE);
        let early = select_maneuver(&me, &target, std::f64::consts::FRAC_PI_2);
        let late = select_maneuver(&me, &target, 3.0 * std::f64::consts::FRAC_PI_2);
        // sin flips sign between the two instants, so the orbit reverses.
        assert!(early.desired_heading > 0.0);
        assert!(late.desired_heading < 0.0);
    }

    #[test]
    fn test_steer_takes_shortest_path() {
        let tau = std::f64::consts::TAU;
        // From just past zero to just before a full turn: step negative.
        let next = steer(0.1, tau - 0.1, 1.0 / 60.0);
        assert!(next < 0.1);

        // Proportional step, never a snap.
        let next = steer(0.0, 1.0, 1.0 / 60.0);
        let expected = AI_TURN_FACTOR / 60.0;
        assert!((next - expected).abs() < 1e-10);
    }

    // ---- Fire control ----

    fn make_fire_ctx(distance: f64, now: f64, last_fire: f64) -> FireContext {
        FireContext {
            now_secs: now,
            last_fire_secs: last_fire,
            cooldown_secs: AI_FIRE_COOLDOWN_SECS,
            firing_range: AI_FIRING_RANGE,
            self_position: Position::new(0.0, 0.0, 0.0),
            self_heading: 0.0,
            target_position: Position::new(0.0, 0.0, distance),
            target_heading: 0.0,
            target_speed: 0.0,
        }
    }

    #[test]
    fn test_holds_fire_out_of_range() {
        let ctx = make_fire_ctx(AI_FIRING_RANGE + 1.0, 100.0, 0.0);
        assert_eq!(fire_solution(&ctx), None);
    }

    #[test]
    fn test_holds_fire_during_cooldown() {
        let ctx = make_fire_ctx(30.0, 3.0, 0.0);
        assert_eq!(fire_solution(&ctx), None);

        let ctx = make_fire_ctx(30.0, AI_FIRE_COOLDOWN_SECS, 0.0);
        assert!(fire_solution(&ctx).is_some());
    }

    #[test]
    fn test_battery_matches_target_half_plane() {
        // Shooter heading 0 (+z). Target dead ahead to starboard-right
        // (+x): relative angle < PI, starboard battery.
        let mut ctx = make_fire_ctx(30.0, 100.0, 0.0);
        ctx.target_position = Position::new(30.0, 0.0, 0.0);
        assert_eq!(fire_solution(&ctx), Some(FireSide::Starboard));

        // Target to port (-x): relative angle > PI.
        ctx.target_position = Position::new(-30.0, 0.0, 0.0);
        assert_eq!(fire_solution(&ctx), Some(FireSide::Port));
    }

    #[test]
    fn test_lead_aim_shifts_battery_choice() {
        // Target dead ahead but steaming hard to port; after two seconds
        // of lead it sits in the port half-plane.
        let mut ctx = make_fire_ctx(30.0, 100.0, 0.0);
        ctx.target_position = Position::new(0.0, 0.0, 30.0);
        ctx.target_heading = -std::f64::consts::FRAC_PI_2;
        ctx.target_speed = 15.0;
        assert_eq!(fire_solution(&ctx), Some(FireSide::Port));
    }
}
