use fx_core::cues::{Cue, CueShape, CueSink, HumShape, Waveform, AMBIENT_HUM};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_oscillator(
    audio_ctx: &web::AudioContext,
    waveform: Waveform,
    label: &str,
) -> Result<web::OscillatorNode, ()> {
    match web::OscillatorNode::new(audio_ctx) {
        Ok(osc) => {
            match waveform {
                Waveform::Sine => osc.set_type(web::OscillatorType::Sine),
                Waveform::Square => osc.set_type(web::OscillatorType::Square),
            }
            Ok(osc)
        }
        Err(e) => {
            log::error!("{} OscillatorNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Lazily-created UI sound layer. Cues are silent until [`AudioCues::activate`]
/// has run inside a user gesture.
#[derive(Clone, Default)]
pub struct AudioCues {
    ctx: Rc<RefCell<Option<web::AudioContext>>>,
}

impl AudioCues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the context (and start the hum) on first call; resume it if the
    /// browser suspended it.
    pub fn activate(&self) {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match web::AudioContext::new() {
                Ok(audio_ctx) => {
                    if start_hum(&audio_ctx, &AMBIENT_HUM).is_err() {
                        log::warn!("[audio] ambient hum unavailable");
                    }
                    log::info!("[audio] context created");
                    *slot = Some(audio_ctx);
                }
                Err(e) => {
                    log::error!("[audio] AudioContext error: {:?}", e);
                    return;
                }
            }
        }
        if let Some(audio_ctx) = slot.as_ref() {
            if audio_ctx.state() == web::AudioContextState::Suspended {
                _ = audio_ctx.resume();
            }
        }
    }

}

impl CueSink for AudioCues {
    fn play(&self, cue: Cue) {
        if let Some(audio_ctx) = self.ctx.borrow().as_ref() {
            _ = trigger_one_shot(audio_ctx, &cue.shape());
        }
    }
}

fn start_hum(audio_ctx: &web::AudioContext, hum: &HumShape) -> Result<(), ()> {
    let now = audio_ctx.current_time();
    let osc = create_oscillator(audio_ctx, Waveform::Sine, "hum")?;
    let lfo = create_oscillator(audio_ctx, Waveform::Sine, "hum lfo")?;
    _ = osc.frequency().set_value_at_time(hum.carrier_hz, now);
    _ = lfo.frequency().set_value_at_time(hum.lfo_hz, now);
    let lfo_gain = create_gain(audio_ctx, hum.lfo_depth_hz, "hum lfo depth")?;
    let gain = create_gain(audio_ctx, hum.gain, "hum")?;

    // lfo -> depth -> carrier frequency; carrier -> gain -> destination
    _ = lfo.connect_with_audio_node(&lfo_gain);
    _ = lfo_gain.connect_with_audio_param(&osc.frequency());
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    _ = osc.start();
    _ = lfo.start();
    Ok(())
}

// Fire a single exponential sweep straight to the destination
fn trigger_one_shot(audio_ctx: &web::AudioContext, shape: &CueShape) -> Result<(), ()> {
    let osc = create_oscillator(audio_ctx, shape.waveform, "cue")?;
    let gain = create_gain(audio_ctx, shape.start_gain, "cue")?;
    let now = audio_ctx.current_time();
    let end = now + shape.duration_sec;
    _ = osc.frequency().set_value_at_time(shape.start_hz, now);
    _ = osc
        .frequency()
        .exponential_ramp_to_value_at_time(shape.end_hz, end);
    _ = gain.gain().set_value_at_time(shape.start_gain, now);
    _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(shape.end_gain, end);
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    _ = osc.start();
    _ = osc.stop_with_when(end);
    Ok(())
}
