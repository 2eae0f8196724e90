//! Collision and boundary predicates
//!
//! All tests are axis-aligned bounding checks: the ball center must sit
//! within a paddle's x-span while its vertical edges cross the paddle's
//! y-span. Good enough at these paddle sizes; the direction guard in the
//! tick prevents double bounces.

use super::state::{Ball, Paddle};

/// Bounding overlap between the ball and a paddle.
///
/// Strict inequalities on purpose: a ball exactly on a paddle edge does not
/// count as a hit.
pub fn ball_overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x > paddle.x
        && ball.pos.x < paddle.x + paddle.width
        && ball.pos.y + ball.radius > paddle.y
        && ball.pos.y - ball.radius < paddle.y + paddle.height
}

/// Ball edge crossed the left or right surface boundary
pub fn hit_side_wall(ball: &Ball, surface_width: f32) -> bool {
    ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > surface_width
}

/// Ball edge crossed above the top boundary (the bot's goal line)
pub fn out_top(ball: &Ball) -> bool {
    ball.pos.y - ball.radius < 0.0
}

/// Ball edge crossed below the bottom boundary (the player's goal line)
pub fn out_bottom(ball: &Ball, surface_height: f32) -> bool {
    ball.pos.y + ball.radius > surface_height
}
