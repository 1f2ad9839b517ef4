//! Loop driver and game commands
//!
//! `tick` advances the game by one fixed step. The host calls it once per
//! scheduled frame and stops scheduling when it returns `LoopControl::Stop`.
//! Commands (`launch`, `toggle_pause`, `reset_game`) run synchronously from
//! input handlers between ticks and report whether the loop must be re-armed.

use super::aim;
use super::physics::{self, Crossing};
use super::state::{Ball, GameEvent, GameState, Phase};
use crate::aim_direction;

/// Whether the host should keep a frame scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Commands produced by the input mapper and UI buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire the ball at the current aim angle
    Launch,
    /// Flip the pause flag
    TogglePause,
    /// Pause if running (tab hidden, window blur)
    Pause,
    /// Full game reset
    Reset,
}

/// Outcome of a launch command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchResult {
    Launched,
    /// Rejected: a shot is already in flight
    InFlight,
    /// Rejected: game is paused
    Paused,
    /// Rejected: round is over
    GameOver,
}

/// Loop control implied by the current state
#[inline]
pub fn control(state: &GameState) -> LoopControl {
    if state.is_running() {
        LoopControl::Continue
    } else {
        LoopControl::Stop
    }
}

/// Apply a command and report whether the loop must be running afterwards
pub fn apply(state: &mut GameState, command: Command) -> LoopControl {
    match command {
        Command::Launch => {
            let result = launch(state);
            if result != LaunchResult::Launched {
                log::debug!("Launch ignored: {:?}", result);
            }
        }
        Command::TogglePause => toggle_pause(state),
        Command::Pause => pause(state),
        Command::Reset => reset_game(state),
    }
    control(state)
}

/// Advance the game by one step
pub fn tick(state: &mut GameState) -> LoopControl {
    if !state.is_running() {
        return LoopControl::Stop;
    }

    state.time_ticks += 1;

    match state.phase() {
        Phase::Idle => {
            aim::sweep(&mut state.aim, state.config.arrow_speed);
        }
        Phase::Flight => step_flight(state),
    }

    control(state)
}

/// Physics step plus goal/floor bookkeeping
fn step_flight(state: &mut GameState) {
    let result = physics::step(&mut state.ball, &state.config);

    if result.wall_bounce {
        state.emit(GameEvent::WallBounce);
    }

    match result.crossing {
        Crossing::None => {}
        Crossing::Top { in_goal: true } => {
            state.score += 1;
            let score = state.score;
            log::debug!("Goal! score {}", score);
            state.emit(GameEvent::Goal { score });
            turn_reset(state);
            if reached_win(state.score, state.config.win_score) {
                enter_game_over(state);
            }
        }
        Crossing::Top { in_goal: false } | Crossing::Floor => {
            log::debug!("Miss ({:?})", result.crossing);
            state.emit(GameEvent::Miss);
            turn_reset(state);
        }
    }
}

/// Fire the ball along the current aim angle
///
/// Only accepted while the ball is idle and the game is running. A launch
/// never alters a shot already in flight.
pub fn launch(state: &mut GameState) -> LaunchResult {
    if state.game_over {
        return LaunchResult::GameOver;
    }
    if state.paused {
        return LaunchResult::Paused;
    }
    if !state.ball.is_idle() {
        return LaunchResult::InFlight;
    }

    state.ball.vel = aim_direction(state.aim.angle) * state.config.ball_speed;
    state.loop_active = true;
    state.emit(GameEvent::Launched);
    LaunchResult::Launched
}

/// Return the ball and aim to their starting values (score untouched)
pub fn turn_reset(state: &mut GameState) {
    state.ball = Ball::at_rest(&state.config);
    state.aim = Default::default();
}

/// Whether a score ends the round
#[inline]
pub fn reached_win(score: u32, win_score: u32) -> bool {
    score >= win_score
}

/// End the round and halt the driver (fires once per round)
pub fn enter_game_over(state: &mut GameState) {
    if state.game_over {
        return;
    }
    state.game_over = true;
    state.loop_active = false;
    let score = state.score;
    log::info!("Game over with score {}", score);
    state.emit(GameEvent::GameOver { score });
    state.emit(GameEvent::ShowSummary { score });
}

/// Full reset: clear score and flags, restart the loop
///
/// Tuning in `state.config` is kept as-is.
pub fn reset_game(state: &mut GameState) {
    state.score = 0;
    state.game_over = false;
    state.paused = false;
    state.time_ticks = 0;
    turn_reset(state);
    state.emit(GameEvent::HideSummary);

    state.loop_active = true;
    log::info!("Game reset");
}

/// Flip the pause flag; unpausing requires the host to re-arm the loop
pub fn toggle_pause(state: &mut GameState) {
    state.paused = !state.paused;
    log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
}

/// Pause if currently running
pub fn pause(state: &mut GameState) {
    if state.is_running() {
        state.paused = true;
        log::info!("Auto-paused");
    }
}
