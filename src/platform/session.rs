//! A running game as seen by the host
//!
//! Owns the `GameState` plus the host-side timing and demo autopilot. The
//! browser glue and the native headless runner both drive the game through
//! this type.

use super::input::Action;
use super::scheduler::FixedStep;
use crate::config::GameConfig;
use crate::sim::{self, Autopilot, GameState, LoopControl};

pub struct Session {
    pub state: GameState,
    autopilot: Option<Autopilot>,
    stepper: FixedStep,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let stepper = FixedStep::new(config.tick_dt());
        Self {
            state: GameState::new(config),
            autopilot: None,
            stepper,
        }
    }

    /// Apply an input action. `demo_seed` seeds the autopilot if demo mode
    /// gets switched on.
    pub fn handle(&mut self, action: Action, demo_seed: u64) -> LoopControl {
        match action {
            Action::Game(command) => sim::apply(&mut self.state, command),
            Action::ToggleDemo => {
                let enable = self.autopilot.is_none();
                self.set_demo(enable.then_some(demo_seed));
                sim::control(&self.state)
            }
        }
    }

    /// Enable demo mode with a seed, or disable it with `None`
    pub fn set_demo(&mut self, seed: Option<u64>) {
        self.autopilot = seed.map(Autopilot::new);
        match seed {
            Some(seed) => log::info!("Demo mode on (seed {})", seed),
            None => log::info!("Demo mode off"),
        }
    }

    pub fn demo_enabled(&self) -> bool {
        self.autopilot.is_some()
    }

    /// Run the ticks owed for a frame at `time_ms`
    pub fn frame(&mut self, time_ms: f64) -> LoopControl {
        let ticks = self.stepper.advance(time_ms);
        for _ in 0..ticks {
            self.run_tick();
        }

        let control = sim::control(&self.state);
        if control == LoopControl::Stop {
            self.stepper.stop();
        }
        control
    }

    /// One simulation tick, letting the autopilot fire first
    pub fn run_tick(&mut self) -> LoopControl {
        if let Some(pilot) = self.autopilot.as_mut() {
            if pilot.should_launch(&self.state) {
                sim::launch(&mut self.state);
            }
        }
        sim::tick(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Command, GameEvent};

    #[test]
    fn test_frame_stops_when_paused() {
        let mut session = Session::new(GameConfig::default());
        assert_eq!(session.frame(0.0), LoopControl::Continue);
        assert_eq!(session.state.time_ticks, 1);

        assert_eq!(
            session.handle(Action::Game(Command::TogglePause), 0),
            LoopControl::Stop
        );
        assert_eq!(session.frame(16.7), LoopControl::Stop);
        assert_eq!(session.state.time_ticks, 1);
    }

    #[test]
    fn test_resume_after_long_pause_runs_one_tick() {
        let mut session = Session::new(GameConfig::default());
        session.frame(0.0);
        session.handle(Action::Game(Command::TogglePause), 0);
        session.frame(16.7);

        assert_eq!(
            session.handle(Action::Game(Command::TogglePause), 0),
            LoopControl::Continue
        );
        session.frame(90_000.0);
        assert_eq!(session.state.time_ticks, 2);
    }

    #[test]
    fn test_high_refresh_flight_moves_every_other_frame() {
        let mut session = Session::new(GameConfig::default());
        session.handle(Action::Game(Command::Launch), 0);
        assert_eq!(session.frame(0.0), LoopControl::Continue);
        assert_eq!(session.state.time_ticks, 1);

        let frame_ms = 1000.0 / 120.0;
        let mut moving_frames = 0;
        let mut still_frames = 0;
        for i in 1..=20 {
            let ticks_before = session.state.time_ticks;
            let pos_before = session.state.ball.pos;
            assert_eq!(session.frame(i as f64 * frame_ms), LoopControl::Continue);

            let ran = session.state.time_ticks - ticks_before;
            assert!(ran <= 1, "frame {} ran {} ticks", i, ran);
            if ran == 1 {
                assert_eq!(session.state.ball.pos, pos_before + session.state.ball.vel);
                moving_frames += 1;
            } else {
                assert_eq!(session.state.ball.pos, pos_before);
                still_frames += 1;
            }
        }
        assert!((9..=11).contains(&moving_frames), "moved on {} frames", moving_frames);
        assert!(still_frames >= 9);
        assert!(!session.state.ball.is_idle());
    }

    #[test]
    fn test_slow_frame_runs_several_ticks() {
        let mut session = Session::new(GameConfig::default());
        session.handle(Action::Game(Command::Launch), 0);
        session.frame(0.0);
        let start = session.state.ball.pos;
        let vel = session.state.ball.vel;

        // 40 ms at 60 ticks per second owes two ticks
        session.frame(40.0);
        assert_eq!(session.state.time_ticks, 3);
        assert!(session.state.ball.pos.distance(start + vel * 2.0) < 1e-4);
    }

    #[test]
    fn test_tick_rate_from_config() {
        let config = GameConfig {
            tick_rate_hz: 30,
            ..Default::default()
        };
        let mut session = Session::new(config);
        session.frame(0.0);
        // Two 60 Hz frames make one 30 Hz tick
        session.frame(16.7);
        assert_eq!(session.state.time_ticks, 1);
        session.frame(33.4);
        assert_eq!(session.state.time_ticks, 2);
    }

    #[test]
    fn test_toggle_demo() {
        let mut session = Session::new(GameConfig::default());
        assert!(!session.demo_enabled());
        session.handle(Action::ToggleDemo, 99);
        assert!(session.demo_enabled());
        session.handle(Action::ToggleDemo, 99);
        assert!(!session.demo_enabled());
    }

    #[test]
    fn test_demo_session_plays_to_game_over() {
        let mut session = Session::new(GameConfig::default());
        session.set_demo(Some(2024));
        let mut launched = 0;
        for _ in 0..500_000 {
            let control = session.run_tick();
            launched += session
                .state
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::Launched)
                .count();
            if control == LoopControl::Stop {
                break;
            }
        }
        assert!(session.state.game_over);
        assert!(launched >= 5);
    }
}
