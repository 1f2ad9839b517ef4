//! Demo mode autopilot
//!
//! Plays the game unattended: each idle tick it predicts where a shot at
//! the current aim angle would end up and decides whether to fire. Decisions
//! use a seeded RNG so a demo run is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::physics::{self, Crossing};
use super::state::{Ball, GameState, Phase};
use crate::aim_direction;
use crate::config::GameConfig;

/// Upper bound on simulated ticks for one prediction
const MAX_PREDICT_TICKS: u32 = 4096;
/// Chance per tick to fire while a scoring window is open
const FIRE_CHANCE: f64 = 0.15;
/// Chance per tick to fire regardless (keeps the demo imperfect)
const WILD_SHOT_CHANCE: f64 = 0.002;

/// Where a shot would end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Goal,
    Miss,
    /// Never left the arena within the prediction horizon
    Undecided,
}

/// Simulate a shot from the launch origin at `angle` on a scratch ball
pub fn predict_shot(config: &GameConfig, angle: f32) -> ShotOutcome {
    let mut ball = Ball {
        pos: config.launch_origin(),
        vel: aim_direction(angle) * config.ball_speed,
    };

    for _ in 0..MAX_PREDICT_TICKS {
        match physics::step(&mut ball, config).crossing {
            Crossing::None => {}
            Crossing::Top { in_goal: true } => return ShotOutcome::Goal,
            Crossing::Top { in_goal: false } | Crossing::Floor => return ShotOutcome::Miss,
        }
    }
    ShotOutcome::Undecided
}

/// Seeded auto-player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Whether to launch on this tick
    pub fn should_launch(&mut self, state: &GameState) -> bool {
        if !state.is_running() || state.phase() != Phase::Idle {
            return false;
        }

        if self.rng.random_bool(WILD_SHOT_CHANCE) {
            return true;
        }

        predict_shot(&state.config, state.aim.angle) == ShotOutcome::Goal
            && self.rng.random_bool(FIRE_CHANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::tick::{self, LaunchResult};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_straight_up_scores() {
        let config = GameConfig::default();
        assert_eq!(predict_shot(&config, FRAC_PI_2), ShotOutcome::Goal);
    }

    #[test]
    fn test_start_angle_prediction_matches_simulation() {
        let config = GameConfig::default();
        let predicted = predict_shot(&config, ARROW_START_ANGLE);

        let mut state = GameState::new(config);
        assert_eq!(tick::launch(&mut state), LaunchResult::Launched);
        while !state.ball.is_idle() {
            tick::tick(&mut state);
        }
        let scored = state.score == 1;
        assert_eq!(predicted == ShotOutcome::Goal, scored);
    }

    #[test]
    fn test_never_fires_in_flight_or_paused() {
        let mut pilot = Autopilot::new(7);
        let mut state = GameState::default();
        tick::launch(&mut state);
        for _ in 0..500 {
            assert!(!pilot.should_launch(&state));
        }

        let mut state = GameState::default();
        tick::toggle_pause(&mut state);
        for _ in 0..500 {
            assert!(!pilot.should_launch(&state));
        }
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let state = GameState::default();
        let mut a = Autopilot::new(42);
        let mut b = Autopilot::new(42);
        for _ in 0..1000 {
            assert_eq!(a.should_launch(&state), b.should_launch(&state));
        }
    }

    #[test]
    fn test_demo_reaches_game_over() {
        let mut pilot = Autopilot::new(12345);
        let mut state = GameState::default();
        for _ in 0..500_000 {
            if pilot.should_launch(&state) {
                tick::launch(&mut state);
            }
            if tick::tick(&mut state) == tick::LoopControl::Stop {
                break;
            }
        }
        assert!(state.game_over);
        assert_eq!(state.score, WIN_SCORE);
    }
}
