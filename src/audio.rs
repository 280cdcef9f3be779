//! Web Audio cues for session events
//!
//! Every cue is a short list of oscillator tones, synthesized on demand.

use web_sys::{AudioContext, OscillatorType};

use crate::notifier::Notifier;
use crate::settings::AudioSettings;
use crate::sim::TerminalCause;

/// Cue played for a session event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Apple eaten
    Gulp,
    /// Tick rate went up
    SpeedUp,
    /// Session ended
    GameOver,
}

/// One oscillator note inside a cue
#[derive(Debug, Clone, Copy)]
struct Tone {
    wave: OscillatorType,
    /// Start and end frequency (Hz); equal for a flat note
    freq: (f32, f32),
    /// Offset from the cue start (s)
    at: f64,
    /// Time until the gain has decayed (s)
    decay: f64,
    /// Peak gain relative to the effective volume
    level: f32,
}

const GULP: &[Tone] = &[Tone {
    wave: OscillatorType::Sine,
    freq: (520.0, 180.0),
    at: 0.0,
    decay: 0.12,
    level: 0.5,
}];

const SPEED_UP: &[Tone] = &[
    Tone {
        wave: OscillatorType::Triangle,
        freq: (600.0, 600.0),
        at: 0.0,
        decay: 0.15,
        level: 0.25,
    },
    Tone {
        wave: OscillatorType::Triangle,
        freq: (900.0, 900.0),
        at: 0.08,
        decay: 0.15,
        level: 0.25,
    },
];

const GAME_OVER: &[Tone] = &[
    Tone {
        wave: OscillatorType::Sine,
        freq: (400.0, 400.0),
        at: 0.0,
        decay: 0.3,
        level: 0.3,
    },
    Tone {
        wave: OscillatorType::Sine,
        freq: (350.0, 350.0),
        at: 0.2,
        decay: 0.3,
        level: 0.3,
    },
    Tone {
        wave: OscillatorType::Sine,
        freq: (300.0, 300.0),
        at: 0.4,
        decay: 0.3,
        level: 0.3,
    },
    Tone {
        wave: OscillatorType::Sine,
        freq: (200.0, 200.0),
        at: 0.6,
        decay: 0.3,
        level: 0.3,
    },
];

impl SoundEffect {
    fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::Gulp => GULP,
            SoundEffect::SpeedUp => SPEED_UP,
            SoundEffect::GameOver => GAME_OVER,
        }
    }
}

/// Plays event cues through a lazily unlocked `AudioContext`
pub struct AudioManager {
    /// `None` when the browser refused to create a context
    ctx: Option<AudioContext>,
    settings: AudioSettings,
}

impl AudioManager {
    pub fn new(settings: AudioSettings) -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("No AudioContext available, sound cues disabled");
        }
        Self { ctx, settings }
    }

    /// Unlock playback; browsers only allow this from a user gesture
    pub fn resume(&self) {
        if let Some(ctx) = self.ctx.as_ref() {
            let _ = ctx.resume();
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    pub fn play(&self, effect: SoundEffect) {
        let volume = self.settings.effective_volume();
        let Some(ctx) = self.ctx.as_ref().filter(|_| volume > 0.0) else {
            return;
        };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let now = ctx.current_time();
        for tone in effect.tones() {
            if Self::schedule(ctx, tone, now, volume).is_none() {
                log::debug!("Dropped tone for {:?}", effect);
            }
        }
    }

    /// Wire oscillator -> gain -> speakers and queue start/stop
    fn schedule(ctx: &AudioContext, tone: &Tone, now: f64, volume: f32) -> Option<()> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.set_type(tone.wave);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        let start = now + tone.at;
        let end = start + tone.decay;

        let (from, to) = tone.freq;
        osc.frequency().set_value_at_time(from, start).ok()?;
        if to != from {
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, end)
                .ok()?;
        }

        gain.gain().set_value_at_time(0.0, now).ok()?;
        gain.gain()
            .set_value_at_time(volume * tone.level, start)
            .ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, end)
            .ok()?;

        osc.start_with_when(start).ok()?;
        osc.stop_with_when(end + 0.05).ok()
    }
}

impl Notifier for AudioManager {
    fn on_acquisition(&mut self, _score: u64) {
        self.play(SoundEffect::Gulp);
    }

    fn on_speed_change(&mut self, _interval_ms: u32) {
        self.play(SoundEffect::SpeedUp);
    }

    fn on_game_over(&mut self, _cause: TerminalCause, _score: u64) {
        self.play(SoundEffect::GameOver);
    }
}
