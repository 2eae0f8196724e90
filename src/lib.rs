//! Canvas Pong - a top-vs-bottom paddle game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: 2D canvas drawing layer
//! - `tuning`: Device-tier constants resolved once at startup

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{DeviceTier, Tuning};

/// Game configuration constants (tier-independent)
pub mod consts {
    /// Paddle thickness in pixels
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between a paddle and its wall
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Per-axis velocity magnitude right after a serve/reset
    pub const SERVE_AXIS_SPEED: f32 = 300.0;
    /// Cap for both the speed accumulator and the velocity magnitude
    pub const MAX_BALL_SPEED: f32 = 900.0;

    /// Clamp for a single frame's delta time (tab switches, first frame)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
