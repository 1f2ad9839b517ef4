//! Web Audio player

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::{SoundEffect, Tone, Wave};

/// Output volume applied to every effect
const VOLUME: f32 = 0.8;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        for tone in effect.tones() {
            self.play_tone(ctx, tone);
        }
    }

    fn play_tone(&self, ctx: &AudioContext, tone: &Tone) {
        let Some((osc, gain)) = create_osc(ctx, tone.freq, tone.wave) else {
            return;
        };
        let t = ctx.current_time() + tone.delay;
        let end = t + tone.decay;

        gain.gain().set_value_at_time(VOLUME * tone.gain, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();
        if let Some(to) = tone.sweep_to {
            osc.frequency().set_value_at_time(tone.freq, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(to, end).ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(end + 0.05).ok();
    }
}

/// Create an oscillator routed through a gain node to the output
fn create_osc(ctx: &AudioContext, freq: f32, wave: Wave) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(match wave {
        Wave::Sine => OscillatorType::Sine,
        Wave::Triangle => OscillatorType::Triangle,
        Wave::Square => OscillatorType::Square,
    });
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
