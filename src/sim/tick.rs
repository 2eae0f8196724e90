//! Per-frame simulation update
//!
//! One `tick` runs per animation frame with the wall-clock delta since the
//! previous frame. No fixed timestep; the driver clamps pathological deltas.

use super::collision::{ball_overlaps_paddle, hit_side_wall, out_bottom, out_top};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Movement intent for a single frame.
///
/// Input handlers toggle these flags; the next tick consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the game state by `dt` seconds.
///
/// Inert while the run gate is closed. Returns the scoring events the driver
/// must report to the score display.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    // Player movement from intent flags, then clamp
    if input.move_left {
        state.player.x -= state.tuning.player_speed * dt;
    }
    if input.move_right {
        state.player.x += state.tuning.player_speed * dt;
    }
    state.player.clamp_to(state.surface.width);

    // Bot tracks the ball's current x only. No prediction, no deadband, so
    // it oscillates when the ball sits exactly at paddle center.
    let bot_center = state.bot.center_x();
    if state.ball.pos.x < bot_center {
        state.bot.x -= state.tuning.bot_speed * dt;
    }
    if state.ball.pos.x > bot_center {
        state.bot.x += state.tuning.bot_speed * dt;
    }
    state.bot.clamp_to(state.surface.width);

    // Integrate ball position
    state.ball.pos += state.ball.vel * dt;

    // Grow the rally accumulator, capped
    state.ball_speed = (state.ball_speed + state.tuning.speed_growth_rate * dt).min(MAX_BALL_SPEED);

    // Rescale velocity: the accumulator feeds the *current* magnitude each
    // frame, so speed compounds toward the cap rather than snapping to it.
    // Skipped at zero magnitude to avoid normalizing a zero vector.
    let magnitude = state.ball.vel.length();
    if magnitude > 0.0 {
        let next = (magnitude + state.ball_speed * dt).min(MAX_BALL_SPEED);
        state.ball.vel = state.ball.vel / magnitude * next;
    }

    // Side walls mirror the horizontal axis; no positional correction
    if hit_side_wall(&state.ball, state.surface.width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Goal lines. The bot defends the top, so a ball out the top is a
    // player point.
    if out_top(&state.ball) {
        state.scores.player += 1;
        events.push(GameEvent::PlayerScored);
        state.reset_ball();
    }
    if out_bottom(&state.ball, state.surface.height) {
        state.scores.bot += 1;
        events.push(GameEvent::BotScored);
        state.reset_ball();
    }

    // Paddle bounces only deflect a ball moving toward the paddle; a ball
    // already moving away keeps its direction (no sticking).
    if ball_overlaps_paddle(&state.ball, &state.player) && state.ball.vel.y > 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if ball_overlaps_paddle(&state.ball, &state.bot) && state.ball.vel.y < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{DeviceTier, Tuning};
    use glam::Vec2;
    use proptest::prelude::*;

    fn desktop_state() -> GameState {
        GameState::new(800.0, 600.0, Tuning::for_tier(DeviceTier::Desktop), 7)
    }

    fn running_state() -> GameState {
        let mut state = desktop_state();
        state.start();
        state
    }

    #[test]
    fn frozen_state_ignores_updates() {
        let mut state = desktop_state();
        let reference = state.clone();
        for _ in 0..100 {
            let events = tick(&mut state, &TickInput::default(), 0.5);
            assert!(events.is_empty());
        }
        assert_eq!(state.ball, reference.ball);
        assert_eq!(state.player, reference.player);
        assert_eq!(state.bot, reference.bot);
        assert_eq!(state.scores, reference.scores);
    }

    #[test]
    fn holding_right_for_a_second_clamps_at_the_wall() {
        let mut state = running_state();
        assert_eq!(state.player.x, 330.0);

        let input = TickInput {
            move_right: true,
            ..TickInput::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input, 0.01);
        }
        // 330 + 600 px would be 930; clamp stops at 800 - 140
        assert_eq!(state.player.x, 660.0);
    }

    #[test]
    fn bot_steps_toward_the_ball() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(100.0, 300.0);
        state.ball.vel = Vec2::new(0.0, 300.0);

        let before = state.bot.x;
        tick(&mut state, &TickInput::default(), 0.01);
        assert!(state.bot.x < before);

        state.ball.pos = Vec2::new(700.0, 300.0);
        let before = state.bot.x;
        tick(&mut state, &TickInput::default(), 0.01);
        assert!(state.bot.x > before);
    }

    #[test]
    fn side_wall_mirrors_horizontal_axis_only() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(state.ball.radius - 1.0, 300.0);
        state.ball.vel = Vec2::new(300.0, 300.0);

        tick(&mut state, &TickInput::default(), 0.0001);

        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn ball_out_the_top_scores_for_the_player() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, state.ball.radius - 1.0);
        state.ball.vel = Vec2::new(0.0, -300.0);

        let events = tick(&mut state, &TickInput::default(), 0.001);

        assert_eq!(events, vec![GameEvent::PlayerScored]);
        assert_eq!(state.scores.player, 1);
        assert_eq!(state.scores.bot, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball_speed, state.tuning.base_ball_speed);
    }

    #[test]
    fn ball_out_the_bottom_scores_for_the_bot() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 600.0 - state.ball.radius + 1.0);
        state.ball.vel = Vec2::new(0.0, 300.0);

        let events = tick(&mut state, &TickInput::default(), 0.001);

        assert_eq!(events, vec![GameEvent::BotScored]);
        assert_eq!(state.scores.bot, 1);
        assert_eq!(state.scores.player, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn rally_without_goals_never_scores() {
        let mut state = running_state();
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), 0.005);
            if state.scores.player > 0 || state.scores.bot > 0 {
                return; // A goal legitimately happened; nothing more to check
            }
            assert_eq!(state.scores, Default::default());
        }
    }

    #[test]
    fn player_paddle_deflects_a_descending_ball() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 555.0);
        state.ball.vel = Vec2::new(0.0, 300.0);

        tick(&mut state, &TickInput::default(), 0.001);

        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn player_paddle_ignores_a_ball_moving_away() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 555.0);
        state.ball.vel = Vec2::new(0.0, -300.0);

        tick(&mut state, &TickInput::default(), 0.001);

        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn bot_paddle_deflects_an_ascending_ball() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(state.bot.center_x(), 35.0);
        state.ball.vel = Vec2::new(0.0, -300.0);

        tick(&mut state, &TickInput::default(), 0.001);

        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn rally_speed_is_monotonic_and_capped() {
        let mut state = running_state();
        // Park the ball so no goal interrupts the rally
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(300.0, 0.0);

        let mut last = state.ball.vel.length();
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), 0.016);
            let speed = state.ball.vel.length();
            assert!(speed >= last - 1e-3);
            assert!(speed <= MAX_BALL_SPEED + 1e-3);
            last = speed;
        }
        // Half a minute into a rally the cap is long since reached
        assert!((last - MAX_BALL_SPEED).abs() < 1.0);
    }

    #[test]
    fn speed_growth_compounds_per_frame() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(300.0, 0.0);
        let dt = 0.016;

        tick(&mut state, &TickInput::default(), dt);

        // accumulator: 50 + 50*dt; magnitude: 300 + accumulator*dt
        let expected_accumulator = 50.0 + 50.0 * dt;
        let expected_speed = 300.0 + expected_accumulator * dt;
        assert!((state.ball_speed - expected_accumulator).abs() < 1e-3);
        assert!((state.ball.vel.length() - expected_speed).abs() < 1e-3);
    }

    #[test]
    fn zero_velocity_ball_is_left_alone() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default(), 0.016);

        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn resize_leaves_positions_until_next_tick() {
        let mut state = running_state();
        let input = TickInput {
            move_right: true,
            ..TickInput::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input, 0.01);
        }
        assert_eq!(state.player.x, 660.0);

        // Shrink the surface; the paddle is momentarily out of bounds
        state.resize(400.0, 600.0);
        assert!(state.player.x > state.surface.width - state.player.width);

        tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.player.x, 260.0);
    }

    proptest! {
        #[test]
        fn paddles_stay_in_bounds_under_any_input(
            steps in prop::collection::vec(
                (any::<bool>(), any::<bool>(), 0.0f32..0.1),
                1..200,
            )
        ) {
            let mut state = running_state();
            for (move_left, move_right, dt) in steps {
                let input = TickInput { move_left, move_right };
                tick(&mut state, &input, dt);

                prop_assert!(state.player.x >= 0.0);
                prop_assert!(state.player.x <= state.surface.width - state.player.width);
                prop_assert!(state.bot.x >= 0.0);
                prop_assert!(state.bot.x <= state.surface.width - state.bot.width);
                prop_assert!(state.ball.vel.length() <= MAX_BALL_SPEED + 1e-2);
            }
        }

        #[test]
        fn score_only_moves_forward(dts in prop::collection::vec(0.0f32..0.05, 1..300)) {
            let mut state = running_state();
            let mut last = state.scores;
            for dt in dts {
                tick(&mut state, &TickInput::default(), dt);
                prop_assert!(state.scores.player >= last.player);
                prop_assert!(state.scores.bot >= last.bot);
                last = state.scores;
            }
        }
    }
}
