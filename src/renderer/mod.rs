//! 2D rendering module
//!
//! Draws a `GameState` through a small set of canvas primitives. The browser
//! backend lives in `canvas2d`; anything implementing `Canvas` can render.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

use glam::Vec2;

use crate::aim_direction;
use crate::sim::{GameState, Phase};

pub const GOAL_COLOR: &str = "#00FF00";
pub const ARROW_COLOR: &str = "#FF0000";
pub const SCORE_COLOR: &str = "white";
pub const SCORE_FONT: &str = "18px Arial";
/// Baseline position of the score text
pub const SCORE_POS: Vec2 = Vec2::new(20.0, 30.0);

/// Drawing surface primitives (origin top-left, Y down)
pub trait Canvas {
    /// Opaque drawable handle (the ball sprite)
    type Image;

    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    /// Draw an image scaled into a rect; unloaded images draw nothing
    fn draw_image(&mut self, image: &Self::Image, pos: Vec2, size: Vec2);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Text of the score readout
pub fn score_text(score: u32) -> String {
    format!("Player: {}", score)
}

/// Render one frame
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState, ball_image: Option<&C::Image>) {
    let config = &state.config;
    canvas.clear(config.width, config.height);

    // Goal
    canvas.fill_rect(
        Vec2::new(config.goal_x(), 0.0),
        Vec2::new(config.goal_width, config.goal_height),
        GOAL_COLOR,
    );

    // Ball sprite, centered on the ball position
    if let Some(image) = ball_image {
        let size = Vec2::splat(config.ball_size);
        canvas.draw_image(image, state.ball.pos - size / 2.0, size);
    }

    // Aim indicator only while waiting to launch
    if state.phase() == Phase::Idle {
        let tip = state.ball.pos + aim_direction(state.aim.angle) * config.arrow_length;
        canvas.draw_line(state.ball.pos, tip, ARROW_COLOR);
    }

    canvas.fill_text(&score_text(state.score), SCORE_POS, SCORE_FONT, SCORE_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(f32, f32),
        Rect(Vec2, Vec2, String),
        Image(Vec2, Vec2),
        Line(Vec2, Vec2, String),
        Text(String, Vec2),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        type Image = ();

        fn clear(&mut self, width: f32, height: f32) {
            self.ops.push(Op::Clear(width, height));
        }
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.ops.push(Op::Rect(pos, size, color.to_string()));
        }
        fn draw_image(&mut self, _image: &(), pos: Vec2, size: Vec2) {
            self.ops.push(Op::Image(pos, size));
        }
        fn draw_line(&mut self, from: Vec2, to: Vec2, color: &str) {
            self.ops.push(Op::Line(from, to, color.to_string()));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, _font: &str, _color: &str) {
            self.ops.push(Op::Text(text.to_string(), pos));
        }
    }

    #[test]
    fn test_idle_frame_layout() {
        let state = GameState::default();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, Some(&()));

        assert_eq!(canvas.ops.len(), 5);
        assert_eq!(canvas.ops[0], Op::Clear(400.0, 600.0));
        assert_eq!(
            canvas.ops[1],
            Op::Rect(Vec2::new(157.5, 0.0), Vec2::new(85.0, 5.0), GOAL_COLOR.to_string())
        );
        assert_eq!(
            canvas.ops[2],
            Op::Image(Vec2::new(192.5, 577.5), Vec2::splat(15.0))
        );
        match &canvas.ops[3] {
            Op::Line(from, to, color) => {
                assert_eq!(*from, state.ball.pos);
                assert!((from.distance(*to) - 32.0).abs() < 1e-3);
                // Points up and to the right at the start angle
                assert!(to.x > from.x && to.y < from.y);
                assert_eq!(color, ARROW_COLOR);
            }
            other => panic!("expected arrow line, got {:?}", other),
        }
        assert_eq!(canvas.ops[4], Op::Text("Player: 0".to_string(), SCORE_POS));
    }

    #[test]
    fn test_flight_frame_hides_arrow() {
        let mut state = GameState::default();
        sim::launch(&mut state);
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, Some(&()));
        assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Line(..))));
    }

    #[test]
    fn test_missing_image_draws_nothing_for_ball() {
        let state = GameState::default();
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, None);
        assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Image(..))));
        assert_eq!(canvas.ops.len(), 4);
    }
}
