#[cfg(test)]
mod tests {
    use skirmish_core::commands::CommandBatch;
    use skirmish_core::constants::*;
    use skirmish_core::enums::ScanMode;
    use skirmish_core::events::EnemySnapshot;
    use skirmish_core::state::{DirectionState, SelfState};
    use skirmish_core::types::{absolute_bearing, normalize_relative};

    use crate::agent::Agent;
    use crate::{celebration, gunnery, movement, radar};

    fn own_state(tick: u64, velocity: f64) -> SelfState {
        SelfState {
            tick,
            velocity,
            ..Default::default()
        }
    }

    fn contact(bearing_deg: f64, distance: f64, heading_deg: f64, velocity: f64) -> EnemySnapshot {
        EnemySnapshot {
            bearing_deg,
            distance,
            heading_deg,
            velocity,
        }
    }

    // ---- Radar policy ----

    #[test]
    fn test_radar_overshoot_alternates() {
        let own = own_state(1, 8.0);
        let snapshot = contact(45.0, 150.0, 0.0, 0.0);
        let mut dirs = DirectionState::default();

        // Same bearing every call: overshoot term must alternate +30 / -30
        let first = radar::tracking_sweep(&own, &snapshot, &mut dirs);
        let second = radar::tracking_sweep(&own, &snapshot, &mut dirs);
        let third = radar::tracking_sweep(&own, &snapshot, &mut dirs);

        assert_eq!(first, 45.0 + RADAR_OVERSHOOT_DEG);
        assert_eq!(second, 45.0 - RADAR_OVERSHOOT_DEG);
        assert_eq!(third, first);
    }

    #[test]
    fn test_radar_direction_strictly_alternates() {
        let own = own_state(1, 8.0);
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);
        let mut dirs = DirectionState::default();

        let mut expected = 1.0;
        for _ in 0..8 {
            assert_eq!(dirs.scan_direction, expected);
            radar::tracking_sweep(&own, &snapshot, &mut dirs);
            expected = -expected;
        }
        // Movement flag must be untouched by the radar policy
        assert_eq!(dirs.move_direction, 1.0);
    }

    #[test]
    fn test_radar_snaps_onto_absolute_bearing() {
        // Radar already rotated 40 degrees away from the body heading:
        // the sweep must fold that back out before adding the overshoot
        let own = SelfState {
            heading_deg: 10.0,
            radar_heading_deg: 50.0,
            ..Default::default()
        };
        let snapshot = contact(-5.0, 120.0, 0.0, 0.0);
        let mut dirs = DirectionState::default();

        let turn = radar::tracking_sweep(&own, &snapshot, &mut dirs);
        assert_eq!(turn, 10.0 - 50.0 - 5.0 + RADAR_OVERSHOOT_DEG);
    }

    #[test]
    fn test_searching_sweep_full_rotation() {
        assert_eq!(radar::searching_sweep(), 360.0);
    }

    // ---- Movement policy ----

    #[test]
    fn test_move_issued_iff_reversal_tick_or_stall() {
        let snapshot = contact(0.0, 200.0, 0.0, 0.0);

        for tick in 1..100 {
            let mut dirs = DirectionState::default();
            let own = own_state(tick, 8.0);
            let decision = movement::strafe(&own, &snapshot, &mut dirs);
            assert_eq!(
                decision.advance.is_some(),
                tick % STRAFE_REVERSAL_INTERVAL_TICKS == 0,
                "unexpected advance at tick {tick}"
            );
        }

        // Stalled against an obstacle: reversal regardless of the tick count
        let mut dirs = DirectionState::default();
        let own = own_state(7, 0.0);
        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert!(decision.advance.is_some(), "stall must force a reversal");
    }

    #[test]
    fn test_move_reversal_flips_direction_and_distance() {
        let snapshot = contact(0.0, 200.0, 0.0, 0.0);
        let mut dirs = DirectionState::default();
        let own = own_state(STRAFE_REVERSAL_INTERVAL_TICKS, 8.0);

        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert_eq!(dirs.move_direction, -1.0);
        assert_eq!(decision.advance, Some(-STRAFE_LEG_DISTANCE));

        // Next reversal goes back the other way
        let own = own_state(2 * STRAFE_REVERSAL_INTERVAL_TICKS, 8.0);
        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert_eq!(dirs.move_direction, 1.0);
        assert_eq!(decision.advance, Some(STRAFE_LEG_DISTANCE));
    }

    #[test]
    fn test_orbit_turn_biased_perpendicular() {
        let snapshot = contact(0.0, 200.0, 0.0, 0.0);

        // Strafing one way: 15 degrees inside true perpendicular
        let mut dirs = DirectionState::default();
        let own = own_state(3, 8.0);
        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert_eq!(decision.body_turn_deg, 90.0 - ORBIT_BIAS_DEG);

        // Strafing the other way: 15 degrees outside
        dirs.flip_move();
        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert_eq!(decision.body_turn_deg, 90.0 + ORBIT_BIAS_DEG);
    }

    #[test]
    fn test_orbit_turn_normalized() {
        // A rear bearing must fold into (-180, 180] rather than turning long
        let snapshot = contact(150.0, 200.0, 0.0, 0.0);
        let mut dirs = DirectionState::default();
        let own = own_state(3, 8.0);
        let decision = movement::strafe(&own, &snapshot, &mut dirs);
        assert_eq!(decision.body_turn_deg, normalize_relative(150.0 + 75.0));
        assert!(decision.body_turn_deg <= 180.0 && decision.body_turn_deg > -180.0);
    }

    // ---- Gunnery ----

    #[test]
    fn test_solution_stationary_dead_ahead() {
        // Enemy directly ahead, not moving, gun already aligned:
        // zero turn, full power
        let own = own_state(1, 8.0);
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);

        let solution = gunnery::solve(&own, &snapshot);
        assert!(
            solution.gun_turn_deg.abs() < 1e-10,
            "gun turn should be zero, got {}",
            solution.gun_turn_deg
        );
        assert_eq!(solution.fire, Some(3.0));
    }

    #[test]
    fn test_solution_leads_moving_target() {
        // Enemy at bearing 45, distance 150, crossing east at 8 units/tick.
        // Flight time is 150/20 = 7.5 ticks, so the solver must aim at the
        // point 60 units east of the enemy's current position.
        let own = own_state(1, 8.0);
        let snapshot = contact(45.0, 150.0, 90.0, 8.0);

        let solution = gunnery::solve(&own, &snapshot);

        // Predicted point: current position displaced along heading 90
        let expected_lead = 8.0 * 150.0 / 20.0;
        let current = 150.0 * skirmish_core::types::bearing_unit(45.0);
        assert!((solution.predicted.x - (current.x + expected_lead)).abs() < 1e-9);
        assert!((solution.predicted.y - current.y).abs() < 1e-9);

        // The turn must be toward the predicted point, not the current one
        let to_predicted = normalize_relative(absolute_bearing(own.position, solution.predicted));
        assert!(solution.gun_turn_deg > 45.0 && solution.gun_turn_deg < 90.0);
        assert!((solution.gun_turn_deg - to_predicted).abs() < 1e-9);
        assert_eq!(
            solution.gun_turn_deg.signum(),
            to_predicted.signum(),
            "turn sign must match the direction to the projected position"
        );
    }

    #[test]
    fn test_unsettled_gun_leads_further() {
        // More remaining gun turn -> slower credited projectile -> more lead
        let snapshot = contact(0.0, 150.0, 90.0, 8.0);

        let settled = gunnery::solve(&own_state(1, 8.0), &snapshot);
        let unsettled = gunnery::solve(
            &SelfState {
                gun_turn_remaining_deg: 2.0,
                gun_heat: 0.0,
                tick: 1,
                ..Default::default()
            },
            &snapshot,
        );
        assert!(unsettled.predicted.x > settled.predicted.x);
    }

    #[test]
    fn test_no_fire_while_hot() {
        let own = SelfState {
            gun_heat: 0.4,
            ..Default::default()
        };
        // Perfectly aligned, but the gun is still cooling
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);
        let solution = gunnery::solve(&own, &snapshot);
        assert_eq!(solution.fire, None);
    }

    #[test]
    fn test_no_fire_while_unsettled() {
        let own = SelfState {
            gun_turn_remaining_deg: GUN_SETTLE_MARGIN_DEG,
            ..Default::default()
        };
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);
        let solution = gunnery::solve(&own, &snapshot);
        assert_eq!(solution.fire, None, "margin is exclusive");

        let own = SelfState {
            gun_turn_remaining_deg: GUN_SETTLE_MARGIN_DEG - 0.1,
            ..Default::default()
        };
        let solution = gunnery::solve(&own, &snapshot);
        assert!(solution.fire.is_some());
    }

    // ---- Controller ----

    #[test]
    fn test_detection_tick_issues_all_three_turns() {
        let mut agent = Agent::new();
        let own = own_state(1, 8.0);
        let snapshot = contact(45.0, 150.0, 90.0, 8.0);

        let batch = agent.tick(&own, Some(&snapshot));
        assert!(batch.radar_turn_deg.is_some());
        assert!(batch.body_turn_deg.is_some());
        assert!(batch.gun_turn_deg.is_some());
        assert_eq!(agent.scan_mode(), ScanMode::Tracking);
    }

    #[test]
    fn test_searching_until_first_detection() {
        let mut agent = Agent::new();
        assert_eq!(agent.scan_mode(), ScanMode::Searching);

        let own = own_state(1, 0.0);
        let batch = agent.tick(&own, None);
        assert_eq!(batch.radar_turn_deg, Some(SEARCH_SWEEP_DEG));
        assert_eq!(batch.body_turn_deg, None);
        assert_eq!(batch.gun_turn_deg, None);
        assert_eq!(batch.advance, None);
        assert_eq!(batch.fire, None);
    }

    #[test]
    fn test_target_loss_reverts_to_searching() {
        let mut agent = Agent::new();
        let own = own_state(1, 8.0);
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);

        agent.tick(&own, Some(&snapshot));
        assert_eq!(agent.scan_mode(), ScanMode::Tracking);

        // While the last oscillation is still playing out, stay quiet
        for _ in 0..TARGET_LOSS_TICKS - 1 {
            let batch = agent.tick(&own, None);
            assert_eq!(batch, CommandBatch::default());
            assert_eq!(agent.scan_mode(), ScanMode::Tracking);
        }

        // One more quiet tick: give up and resume the full rotation
        let batch = agent.tick(&own, None);
        assert_eq!(agent.scan_mode(), ScanMode::Searching);
        assert_eq!(batch.radar_turn_deg, Some(SEARCH_SWEEP_DEG));
    }

    #[test]
    fn test_detection_resets_quiet_counter() {
        let mut agent = Agent::new();
        let own = own_state(1, 8.0);
        let snapshot = contact(0.0, 100.0, 0.0, 0.0);

        agent.tick(&own, Some(&snapshot));
        for _ in 0..TARGET_LOSS_TICKS - 1 {
            agent.tick(&own, None);
        }
        // A detection just before the deadline starts the window over
        agent.tick(&own, Some(&snapshot));
        for _ in 0..TARGET_LOSS_TICKS - 1 {
            agent.tick(&own, None);
        }
        assert_eq!(agent.scan_mode(), ScanMode::Tracking);
    }

    #[test]
    fn test_setup_defaults() {
        let agent = Agent::new();
        let setup = agent.setup();
        assert!(setup.adjust_radar_for_gun_turn);
        assert!(setup.adjust_gun_for_body_turn);
    }

    // ---- Celebration ----

    #[test]
    fn test_victory_lap_shape() {
        let steps = celebration::victory_lap();
        assert_eq!(
            steps.len(),
            VICTORY_BODY_TURNS * (2 + VICTORY_SWING_REPEATS * 4)
        );

        // Opens with a full circle each way
        assert_eq!(steps[0], CommandBatch::body_turn(360.0));
        assert_eq!(steps[1], CommandBatch::body_turn(-360.0));

        // Every step is a single turn command, never a move or a shot
        for step in &steps {
            let turns = [step.body_turn_deg, step.gun_turn_deg, step.radar_turn_deg]
                .iter()
                .filter(|t| t.is_some())
                .count();
            assert_eq!(turns, 1);
            assert_eq!(step.advance, None);
            assert_eq!(step.fire, None);
        }

        // The lap ends where it started: all channels sum to zero
        let net: f64 = steps
            .iter()
            .flat_map(|s| [s.body_turn_deg, s.gun_turn_deg, s.radar_turn_deg])
            .flatten()
            .sum();
        assert_eq!(net, 0.0);
    }
}
