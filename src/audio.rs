use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::animation::Cue;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio is not available: {0}")]
    Unavailable(String),
    #[error("could not schedule {cue}: {reason}")]
    Schedule { cue: &'static str, reason: String },
}

/// Something that can voice a cue.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// A sound output that has to be opened before use.
pub trait AudioBackend: Sized {
    fn open() -> Result<Self, AudioError>;
    fn play(&self, cue: Cue) -> Result<(), AudioError>;
}

/// Shape of a synthesized cue: a pitch sweep under a short gain envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voice {
    pub wave: OscillatorType,
    pub start_hz: f32,
    pub end_hz: f32,
    pub peak_gain: f32,
    pub attack: f64,
    pub duration: f64,
}

impl Voice {
    pub fn for_cue(cue: Cue) -> Self {
        match cue {
            Cue::Crack => Voice {
                wave: OscillatorType::Square,
                start_hz: 190.0,
                end_hz: 55.0,
                peak_gain: 0.18,
                attack: 0.004,
                duration: 0.12,
            },
            Cue::Drop => Voice {
                wave: OscillatorType::Sine,
                start_hz: 420.0,
                end_hz: 140.0,
                peak_gain: 0.25,
                attack: 0.01,
                duration: 0.28,
            },
        }
    }
}

/// Web Audio output. Sounds are fire-and-forget on the context clock.
pub struct WebAudio {
    ctx: AudioContext,
}

impl WebAudio {
    fn schedule(&self, voice: Voice) -> Result<(), JsValue> {
        let now = self.ctx.current_time();
        let end = now + voice.duration;

        let osc = self.ctx.create_oscillator()?;
        osc.set_type(voice.wave);
        osc.frequency().set_value_at_time(voice.start_hz, now)?;
        osc.frequency().exponential_ramp_to_value_at_time(voice.end_hz, end)?;

        let gain = self.ctx.create_gain()?;
        gain.gain().set_value_at_time(0.0, now)?;
        gain.gain().linear_ramp_to_value_at_time(voice.peak_gain, now + voice.attack)?;
        gain.gain().exponential_ramp_to_value_at_time(0.0001, end)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;
        osc.start_with_when(now)?;
        osc.stop_with_when(end + 0.02)?;
        Ok(())
    }
}

impl AudioBackend for WebAudio {
    fn open() -> Result<Self, AudioError> {
        let ctx = AudioContext::new().map_err(|e| AudioError::Unavailable(format!("{:?}", e)))?;
        // Contexts created outside a gesture start suspended on some browsers.
        let _ = ctx.resume();
        Ok(Self { ctx })
    }

    fn play(&self, cue: Cue) -> Result<(), AudioError> {
        self.schedule(Voice::for_cue(cue)).map_err(|e| AudioError::Schedule {
            cue: cue.name(),
            reason: format!("{:?}", e),
        })
    }
}

/// Cue output gated behind an explicit user opt-in.
pub struct SoundBoard<B = WebAudio> {
    enabled: bool,
    backend: Option<B>,
}

impl<B> Default for SoundBoard<B> {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: None,
        }
    }
}

impl<B: AudioBackend> SoundBoard<B> {
    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Must run inside a user gesture. The backend is opened on first use.
    pub fn enable(&mut self) {
        self.enabled = true;
        if self.backend.is_none() {
            match B::open() {
                Ok(backend) => self.backend = Some(backend),
                Err(e) => log::info!("sound stays off: {}", e),
            }
        }
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flips the opt-in and returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
        self.enabled
    }
}

impl<B: AudioBackend> CuePlayer for SoundBoard<B> {
    fn play(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        if let Some(backend) = &self.backend {
            if let Err(e) = backend.play(cue) {
                log::debug!("{}", e);
            }
        }
    }
}
