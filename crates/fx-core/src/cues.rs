//! Envelope descriptions for the UI audio cues.
//!
//! Playback lives in the web frontend; this module only says what each cue
//! sounds like so the shapes can be checked without an audio device.

/// Basic oscillator shape used by the cue synths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
}

/// A one-shot: frequency and gain both ramp exponentially over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueShape {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Hover / focus.
    Tick,
    /// Press.
    Click,
}

impl Cue {
    pub const fn shape(self) -> CueShape {
        match self {
            Cue::Tick => CueShape {
                waveform: Waveform::Sine,
                start_hz: 800.0,
                end_hz: 100.0,
                start_gain: 0.02,
                end_gain: 0.001,
                duration_sec: 0.05,
            },
            Cue::Click => CueShape {
                waveform: Waveform::Square,
                start_hz: 1200.0,
                end_hz: 200.0,
                start_gain: 0.01,
                end_gain: 0.001,
                duration_sec: 0.1,
            },
        }
    }
}

/// Continuous low drone started once the audio context exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HumShape {
    pub carrier_hz: f32,
    pub lfo_hz: f32,
    pub lfo_depth_hz: f32,
    pub gain: f32,
}

pub const AMBIENT_HUM: HumShape = HumShape {
    carrier_hz: 40.0,
    lfo_hz: 0.5,
    lfo_depth_hz: 5.0,
    gain: 0.005,
};

/// Anything that can play a cue. Playback is best effort and never fails.
pub trait CueSink {
    fn play(&self, cue: Cue);
}
