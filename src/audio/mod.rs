//! Procedurally generated sound effects - no external files needed!
//!
//! Each effect is a short sequence of oscillator tones. The Web Audio
//! player lives in `web`; the effect tables here are platform independent.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball launched
    Launch,
    /// Ball hits a side wall
    WallHit,
    /// Ball lands in the goal
    Goal,
    /// Ball leaves the arena without scoring
    Miss,
    /// Win threshold reached
    GameOver,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Triangle,
    Square,
}

/// A single enveloped tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Wave,
    /// Start frequency (Hz)
    pub freq: f32,
    /// Frequency at the end of the sweep, if it sweeps
    pub sweep_to: Option<f32>,
    /// Offset from the trigger time (s)
    pub delay: f64,
    /// Decay time to silence (s)
    pub decay: f64,
    /// Peak gain before volume scaling
    pub gain: f32,
}

impl Tone {
    const fn new(wave: Wave, freq: f32, decay: f64, gain: f32) -> Self {
        Self {
            wave,
            freq,
            sweep_to: None,
            delay: 0.0,
            decay,
            gain,
        }
    }

    const fn sweep(mut self, to: f32) -> Self {
        self.sweep_to = Some(to);
        self
    }

    const fn at(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

const LAUNCH: [Tone; 1] = [Tone::new(Wave::Triangle, 200.0, 0.2, 0.3).sweep(600.0)];
const WALL_HIT: [Tone; 1] = [Tone::new(Wave::Sine, 400.0, 0.08, 0.3)];
const GOAL: [Tone; 3] = [
    Tone::new(Wave::Triangle, 500.0, 0.2, 0.3),
    Tone::new(Wave::Triangle, 630.0, 0.2, 0.3).at(0.08),
    Tone::new(Wave::Triangle, 750.0, 0.3, 0.3).at(0.16),
];
const MISS: [Tone; 1] = [Tone::new(Wave::Square, 220.0, 0.3, 0.15).sweep(90.0)];
const GAME_OVER: [Tone; 4] = [
    Tone::new(Wave::Triangle, 400.0, 0.4, 0.3),
    Tone::new(Wave::Triangle, 500.0, 0.4, 0.3).at(0.1),
    Tone::new(Wave::Triangle, 600.0, 0.4, 0.3).at(0.2),
    Tone::new(Wave::Triangle, 800.0, 0.6, 0.3).at(0.3),
];

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Launched => Some(SoundEffect::Launch),
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::Goal { .. } => Some(SoundEffect::Goal),
            GameEvent::Miss => Some(SoundEffect::Miss),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::ShowSummary { .. } | GameEvent::HideSummary => None,
        }
    }

    /// Tones making up this effect
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::Launch => &LAUNCH,
            SoundEffect::WallHit => &WALL_HIT,
            SoundEffect::Goal => &GOAL,
            SoundEffect::Miss => &MISS,
            SoundEffect::GameOver => &GAME_OVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_events_are_silent() {
        assert_eq!(SoundEffect::for_event(&GameEvent::HideSummary), None);
        assert_eq!(
            SoundEffect::for_event(&GameEvent::ShowSummary { score: 5 }),
            None
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Goal { score: 1 }),
            Some(SoundEffect::Goal)
        );
    }

    #[test]
    fn test_tones_are_audible() {
        for effect in [
            SoundEffect::Launch,
            SoundEffect::WallHit,
            SoundEffect::Goal,
            SoundEffect::Miss,
            SoundEffect::GameOver,
        ] {
            let tones = effect.tones();
            assert!(!tones.is_empty());
            for tone in tones {
                assert!(tone.freq > 20.0 && tone.decay > 0.0 && tone.gain > 0.0);
            }
        }
    }
}
