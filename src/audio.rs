//! Audio system using Web Audio API
//!
//! Tones are synthesized on the fly - no external files needed. Every
//! failure is swallowed: a game without sound is still a game.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::feedback::Tone;

/// Peak gain of a tone at full volume
const PEAK_GAIN: f32 = 0.08;
/// Inaudible floor for the exponential envelope (must be > 0)
const FLOOR_GAIN: f32 = 0.0001;
/// Attack time (s)
const ATTACK: f64 = 0.01;
/// Extra time after the envelope before the oscillator is stopped (s)
const RELEASE_PAD: f64 = 0.02;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        // Try to create audio context (may fail in restricted contexts)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a tone, fire-and-forget
    pub fn play(&self, tone: Tone) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        if self.beep(ctx, tone).is_none() {
            log::debug!("Dropped {:?} tone", tone);
        }
    }

    /// Sine beep with a short exponential attack and decay
    fn beep(&self, ctx: &AudioContext, tone: Tone) -> Option<()> {
        let (osc, gain) = self.create_osc(ctx, tone.frequency(), OscillatorType::Sine)?;
        let t = ctx.current_time();
        let length = tone.duration_ms() as f64 / 1000.0;

        gain.gain().set_value_at_time(FLOOR_GAIN, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(PEAK_GAIN * self.volume, t + ATTACK)
            .ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(FLOOR_GAIN, t + length)
            .ok()?;

        osc.start().ok()?;
        osc.stop_with_when(t + length + RELEASE_PAD).ok()?;
        Some(())
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
