//! Arc Ball - A single-screen aim-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim sweep, ball physics, game state machine)
//! - `renderer`: 2D canvas drawing of a game state
//! - `platform`: Input mapping and frame scheduling for the browser host
//! - `config`: Arena dimensions and tuning, loadable from JSON
//! - `audio`: Procedural sound effects for game events

pub mod audio;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

use glam::Vec2;

/// Game configuration constants (reference values at 60 ticks per second)
pub mod consts {
    use std::f32::consts::PI;

    /// Reference tick rate the per-tick speeds are tuned for
    pub const REFERENCE_TICK_RATE_HZ: u32 = 60;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default arena dimensions (overridden by the canvas size in the browser)
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball sprite edge length
    pub const BALL_SIZE: f32 = 15.0;
    /// Launch speed (units per tick)
    pub const BALL_SPEED: f32 = 3.0;

    /// Aim indicator length
    pub const ARROW_LENGTH: f32 = 32.0;
    /// Aim sweep speed (radians per tick)
    pub const ARROW_SPEED: f32 = 0.007;
    /// Aim angle after every turn reset
    pub const ARROW_START_ANGLE: f32 = PI / 6.0;
    /// Lowest aim angle (20 degrees)
    pub const ARROW_MIN_ANGLE: f32 = PI / 9.0;
    /// Highest aim angle (160 degrees)
    pub const ARROW_MAX_ANGLE: f32 = 16.0 * PI / 18.0;

    /// Goal zone, centered on the top edge
    pub const GOAL_WIDTH: f32 = 85.0;
    pub const GOAL_HEIGHT: f32 = 5.0;

    /// Score that ends the round
    pub const WIN_SCORE: u32 = 5;
}

/// Unit vector for an aim angle in screen space (Y grows downward)
#[inline]
pub fn aim_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_aim_direction_points_up_screen() {
        let up = aim_direction(FRAC_PI_2);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_aim_bounds_ordered() {
        use crate::consts::*;
        assert!(ARROW_MIN_ANGLE < ARROW_START_ANGLE);
        assert!(ARROW_START_ANGLE < ARROW_MAX_ANGLE);
    }
}
