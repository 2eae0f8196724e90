//! 2D canvas drawing layer
//!
//! The sim never draws; `draw_frame` is a pure read of the game state onto
//! anything implementing `Surface`. The browser build backs the trait with a
//! `CanvasRenderingContext2d`; tests back it with a recorder.

use crate::sim::GameState;

/// Palette
pub mod colors {
    pub const PLAYER: &str = "blue";
    pub const BOT: &str = "red";
    pub const BALL: &str = "green";
    pub const OUTLINE: &str = "black";
}

/// Stroke width for paddle and ball outlines
pub const OUTLINE_WIDTH: f32 = 5.0;

/// Drawing primitives the rendering backend must provide
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str, line: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: &str, line: f32);
}

/// Draw one frame: clear, player paddle, bot paddle, ball.
///
/// Runs every animation frame regardless of the run gate, so the frozen
/// pre-game layout is still visible.
pub fn draw_frame(surface: &mut impl Surface, state: &GameState) {
    surface.clear(state.surface.width, state.surface.height);

    let p = &state.player;
    surface.fill_rect(p.x, p.y, p.width, p.height, colors::PLAYER);
    surface.stroke_rect(p.x, p.y, p.width, p.height, colors::OUTLINE, OUTLINE_WIDTH);

    let b = &state.bot;
    surface.fill_rect(b.x, b.y, b.width, b.height, colors::BOT);
    surface.stroke_rect(b.x, b.y, b.width, b.height, colors::OUTLINE, OUTLINE_WIDTH);

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, colors::BALL);
    surface.stroke_circle(
        ball.pos.x,
        ball.pos.y,
        ball.radius,
        colors::OUTLINE,
        OUTLINE_WIDTH,
    );
}

#[cfg(target_arch = "wasm32")]
pub mod canvas {
    //! `Surface` backed by a 2D canvas context

    use std::f64::consts::TAU;
    use web_sys::CanvasRenderingContext2d;

    use super::Surface;

    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        pub fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self { ctx }
        }
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }

        fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str, line: f32) {
            self.ctx.set_stroke_style_str(color);
            self.ctx.set_line_width(line as f64);
            self.ctx
                .stroke_rect(x as f64, y as f64, width as f64, height as f64);
        }

        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }

        fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: &str, line: f32) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
            self.ctx.set_stroke_style_str(color);
            self.ctx.set_line_width(line as f64);
            self.ctx.stroke();
        }
    }
}
