//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - Seeded RNG only (demo autopilot)
//! - No rendering or platform dependencies

pub mod aim;
pub mod autopilot;
pub mod physics;
pub mod state;
pub mod tick;

pub use aim::sweep;
pub use autopilot::{Autopilot, ShotOutcome, predict_shot};
pub use physics::{Crossing, StepResult, step};
pub use state::{Aim, Ball, GameEvent, GameState, Phase};
pub use tick::{
    Command, LaunchResult, LoopControl, apply, control, enter_game_over, launch, pause,
    reached_win, reset_game, tick, toggle_pause, turn_reset,
};
