//! Arena dimensions and gameplay tuning
//!
//! Supplied as JSON by the host page (canvas `data-config` attribute).
//! Every field is optional; missing fields take the reference values.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading a configuration
#[derive(Debug)]
pub enum ConfigError {
    /// JSON was malformed or had the wrong shape
    Parse(serde_json::Error),
    /// JSON parsed but describes an unplayable arena
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Game configuration
///
/// Physics constants are fixed for the lifetime of a game; a full reset
/// restores state, never tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    /// Play surface width
    pub width: f32,
    /// Play surface height
    pub height: f32,
    /// Goal zone width (centered on the top edge)
    pub goal_width: f32,
    /// Goal zone height (drawn only)
    pub goal_height: f32,

    // === Ball / aim ===
    pub ball_size: f32,
    pub arrow_length: f32,
    /// Aim sweep speed (radians per tick)
    pub arrow_speed: f32,
    /// Launch speed (units per tick)
    pub ball_speed: f32,

    // === Rules ===
    pub win_score: u32,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,

    // === Controls ===
    /// `KeyboardEvent.key` values that launch the ball
    pub fire_keys: Vec<String>,
    /// `KeyboardEvent.key` values that toggle pause
    pub pause_keys: Vec<String>,
    /// `KeyboardEvent.key` that toggles demo mode
    pub demo_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,

            ball_size: BALL_SIZE,
            arrow_length: ARROW_LENGTH,
            arrow_speed: ARROW_SPEED,
            ball_speed: BALL_SPEED,

            win_score: WIN_SCORE,
            tick_rate_hz: REFERENCE_TICK_RATE_HZ,

            fire_keys: vec!["ArrowUp".to_string()],
            pause_keys: vec!["Escape".to_string()],
            demo_key: "i".to_string(),
        }
    }
}

impl GameConfig {
    /// Default tuning on an arena of the given size
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid(format!("arena must be positive, got {}x{}", self.width, self.height));
        }
        if !(self.ball_size > 0.0) || self.ball_size * 2.0 > self.height || self.ball_size > self.width {
            return invalid(format!("ball size {} does not fit the arena", self.ball_size));
        }
        if !(self.goal_width > 0.0) || self.goal_width > self.width {
            return invalid(format!(
                "goal width {} must be within (0, {}]",
                self.goal_width, self.width
            ));
        }
        for (name, value) in [
            ("goal height", self.goal_height),
            ("arrow length", self.arrow_length),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{} must be finite and non-negative, got {}", name, value));
            }
        }
        if !(self.ball_speed > 0.0) || !(self.arrow_speed > 0.0) {
            return invalid("speeds must be positive".to_string());
        }
        if self.win_score == 0 {
            return invalid("win score must be at least 1".to_string());
        }
        if self.tick_rate_hz == 0 {
            return invalid("tick rate must be at least 1".to_string());
        }
        Ok(())
    }

    /// Left edge of the goal zone
    #[inline]
    pub fn goal_x(&self) -> f32 {
        (self.width - self.goal_width) / 2.0
    }

    /// Whether a horizontal position lies within the goal span
    #[inline]
    pub fn in_goal_span(&self, x: f32) -> bool {
        let left = self.goal_x();
        x >= left && x <= left + self.goal_width
    }

    /// Ball rest position: horizontally centered, just above the bottom edge
    #[inline]
    pub fn launch_origin(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.ball_size)
    }

    /// Fixed simulation timestep in seconds
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}
