//! Ball physics for a flight tick
//!
//! Euler integration with one unit of game time per tick, side wall
//! reflection, and classification of top/floor exits. Turn and score
//! bookkeeping happens in `tick`; this module only moves the ball.

use super::state::Ball;
use crate::config::GameConfig;

/// How a flight tick ended for the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Still inside the arena vertically
    None,
    /// Crossed the top edge; `in_goal` if the center was within the goal span
    Top { in_goal: bool },
    /// Crossed the bottom edge
    Floor,
}

/// Result of a single physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Horizontal velocity was negated this tick
    pub wall_bounce: bool,
    pub crossing: Crossing,
}

/// Advance a moving ball by one tick
///
/// No position correction is applied after a wall hit: the ball may sit past
/// the wall for a tick before the reflected velocity brings it back.
pub fn step(ball: &mut Ball, config: &GameConfig) -> StepResult {
    let half = config.ball_size / 2.0;

    ball.pos += ball.vel;

    let wall_bounce = ball.pos.x + half > config.width || ball.pos.x - half < 0.0;
    if wall_bounce {
        ball.vel.x = -ball.vel.x;
    }

    let crossing = if ball.pos.y - half < 0.0 {
        Crossing::Top {
            in_goal: config.in_goal_span(ball.pos.x),
        }
    } else if ball.pos.y + half > config.height {
        Crossing::Floor
    } else {
        Crossing::None
    };

    StepResult {
        wall_bounce,
        crossing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
        }
    }

    #[test]
    fn test_step_integrates_velocity() {
        let config = GameConfig::default();
        let mut b = ball(200.0, 300.0, 2.0, -1.5);
        let result = step(&mut b, &config);
        assert_eq!(b.pos, Vec2::new(202.0, 298.5));
        assert_eq!(result.crossing, Crossing::None);
        assert!(!result.wall_bounce);
    }

    #[test]
    fn test_right_wall_reflects_without_clamping() {
        let config = GameConfig::default();
        let mut b = ball(config.width - 8.0, 300.0, 2.0, -1.0);
        let result = step(&mut b, &config);
        assert!(result.wall_bounce);
        assert_eq!(b.vel, Vec2::new(-2.0, -1.0));
        // Overlap past the wall is left in place
        assert_eq!(b.pos.x, config.width - 6.0);
        assert!(b.pos.x + config.ball_size / 2.0 > config.width);
    }

    #[test]
    fn test_left_wall_reflects() {
        let config = GameConfig::default();
        let mut b = ball(8.0, 300.0, -2.0, -1.0);
        assert!(step(&mut b, &config).wall_bounce);
        assert_eq!(b.vel.x, 2.0);
    }

    #[test]
    fn test_top_crossing_inside_goal() {
        let config = GameConfig::default();
        let mut b = ball(config.width / 2.0, 8.0, 0.0, -1.5);
        let result = step(&mut b, &config);
        assert_eq!(result.crossing, Crossing::Top { in_goal: true });
    }

    #[test]
    fn test_top_crossing_outside_goal() {
        let config = GameConfig::default();
        let mut b = ball(20.0, 8.0, 0.0, -1.5);
        let result = step(&mut b, &config);
        assert_eq!(result.crossing, Crossing::Top { in_goal: false });
    }

    #[test]
    fn test_floor_crossing() {
        let config = GameConfig::default();
        let mut b = ball(100.0, config.height - 8.0, 0.0, 1.5);
        assert_eq!(step(&mut b, &config).crossing, Crossing::Floor);
    }

    #[test]
    fn test_corner_bounce_and_top_in_same_tick() {
        let config = GameConfig::default();
        let mut b = ball(6.0, 8.0, -2.0, -2.0);
        let result = step(&mut b, &config);
        assert!(result.wall_bounce);
        assert_eq!(result.crossing, Crossing::Top { in_goal: false });
    }
}
