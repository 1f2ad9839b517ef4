//! Game state and core simulation types
//!
//! A single `GameState` owns everything that changes during play. The
//! simulation functions in `tick` are the only code that mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::ARROW_START_ANGLE;

/// Derived phase of a running turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball at rest, aim indicator sweeping
    Idle,
    /// Ball moving, physics stepping
    Flight,
}

/// Notifications for the presentation layer (sound, DOM overlays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the launch origin
    Launched,
    /// Ball reflected off a side wall
    WallBounce,
    /// Ball crossed the top edge inside the goal span
    Goal { score: u32 },
    /// Ball crossed the top edge outside the goal span, or the floor
    Miss,
    /// Win threshold reached
    GameOver { score: u32 },
    /// Show the terminal summary overlay
    ShowSummary { score: u32 },
    /// Hide the terminal summary overlay
    HideSummary,
}

/// The projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center, canvas coordinates (origin top-left, Y down)
    pub pos: Vec2,
    /// Units per tick; zero means idle
    pub vel: Vec2,
}

impl Ball {
    /// Ball resting at the launch origin
    pub fn at_rest(config: &GameConfig) -> Self {
        Self {
            pos: config.launch_origin(),
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// The sweeping aim indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Radians, counter-clockwise from +X (screen up is positive)
    pub angle: f32,
    /// Sweep direction, +1.0 or -1.0
    pub direction: f32,
}

impl Default for Aim {
    fn default() -> Self {
        Self {
            angle: ARROW_START_ANGLE,
            direction: 1.0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena and tuning (never changed by a reset)
    pub config: GameConfig,
    pub aim: Aim,
    pub ball: Ball,
    /// Goals scored this round
    pub score: u32,
    /// Loop suspended without losing state
    pub paused: bool,
    /// Win threshold reached; only a full reset leaves this state
    pub game_over: bool,
    /// Driver run flag; cleared by game over
    pub loop_active: bool,
    /// Simulation ticks since the last full reset
    pub time_ticks: u64,
    /// Pending presentation events (drained by the host each frame)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game, running and idle
    pub fn new(config: GameConfig) -> Self {
        let ball = Ball::at_rest(&config);
        Self {
            config,
            aim: Aim::default(),
            ball,
            score: 0,
            paused: false,
            game_over: false,
            loop_active: true,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Idle or flight, derived from the ball velocity
    #[inline]
    pub fn phase(&self) -> Phase {
        if self.ball.is_idle() {
            Phase::Idle
        } else {
            Phase::Flight
        }
    }

    /// Whether the loop driver should keep ticking
    #[inline]
    pub fn is_running(&self) -> bool {
        self.loop_active && !self.paused && !self.game_over
    }

    /// Queue an event for the host
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
