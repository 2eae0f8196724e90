//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Gate between the pre-game (frozen) layout and active simulation.
///
/// One-way: there is no pause or stop transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotRunning,
    Running,
}

/// Something the driver must report to its collaborators after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball exited the top edge (the bot's goal line)
    PlayerScored,
    /// Ball exited the bottom edge (the player's goal line)
    BotScored,
}

/// Drawing surface dimensions, mirrored from the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Dimensions are floored at 1x1 so initial geometry never divides by zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// An axis-aligned paddle, constrained to horizontal movement at a fixed y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Keep the paddle inside `[0, surface_width - width]`
    pub fn clamp_to(&mut self, surface_width: f32) {
        self.x = self.x.min(surface_width - self.width).max(0.0);
    }
}

/// The ball: the only entity whose velocity direction changes via collisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Session score counters; never decremented, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub player: u32,
    pub bot: u32,
}

/// Complete game state, owned by the loop driver
#[derive(Debug, Clone)]
pub struct GameState {
    pub surface: SurfaceSize,
    pub player: Paddle,
    pub bot: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub run_state: RunState,
    /// Monotonically growing rally speed accumulator (capped)
    pub ball_speed: f32,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create the initial layout for the given surface dimensions.
    ///
    /// The bot paddle is centered using the player width, even when the bot
    /// paddle itself is narrower.
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        let surface = SurfaceSize::new(width, height);

        let player = Paddle {
            x: surface.width / 2.0 - tuning.paddle_width / 2.0,
            y: surface.height - PADDLE_HEIGHT - PADDLE_MARGIN,
            width: tuning.paddle_width,
            height: PADDLE_HEIGHT,
        };
        let bot = Paddle {
            x: surface.width / 2.0 - tuning.paddle_width / 2.0,
            y: PADDLE_MARGIN,
            width: tuning.bot_paddle_width(),
            height: PADDLE_HEIGHT,
        };
        let ball = Ball {
            pos: Vec2::new(surface.width / 2.0, surface.height / 2.0),
            vel: Vec2::splat(SERVE_AXIS_SPEED),
            radius: BALL_RADIUS,
        };

        Self {
            surface,
            player,
            bot,
            ball,
            scores: Scores::default(),
            run_state: RunState::default(),
            ball_speed: tuning.base_ball_speed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Flip the run gate; idempotent once Running
    pub fn start(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Recenter the ball and serve it in a random diagonal direction.
    ///
    /// Resets the speed accumulator to the tier base so each rally starts
    /// slow and escalates again.
    pub fn reset_ball(&mut self) {
        self.ball.pos = Vec2::new(self.surface.width / 2.0, self.surface.height / 2.0);
        self.ball_speed = self.tuning.base_ball_speed;

        let dir_x = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(SERVE_AXIS_SPEED * dir_x, SERVE_AXIS_SPEED * dir_y);
    }

    /// Adopt new surface dimensions after a viewport resize.
    ///
    /// Paddle and ball positions are left as-is; the next tick's clamp pulls
    /// paddles back in bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = SurfaceSize::new(width, height);
    }
}
