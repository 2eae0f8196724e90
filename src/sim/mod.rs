//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - One `tick` per animation frame, driven by wall-clock delta time

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_overlaps_paddle, hit_side_wall, out_bottom, out_top};
pub use state::{Ball, GameEvent, GameState, Paddle, RunState, Scores, SurfaceSize};
pub use tick::{TickInput, tick};
