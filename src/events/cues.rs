use crate::audio::AudioCues;
use crate::constants::{AUDIO_ACTIVATION_EVENTS, CUE_SELECTOR, SECURE_INPUT_SELECTOR};
use crate::dom;
use fx_core::constants::INPUT_TICK_DEBOUNCE_MS;
use fx_core::cues::{Cue, CueSink};
use fx_core::debounce::Debounce;
use std::rc::Rc;
use web_sys as web;

/// Browsers only allow audio after a gesture: create the context on the first
/// press, touch or scroll. Each listener fires once.
pub fn wire_audio_activation(cues: &AudioCues) {
    let Some(window) = web::window() else {
        return;
    };
    for event in AUDIO_ACTIVATION_EVENTS {
        let cues = cues.clone();
        dom::add_once_listener(&window, event, move || cues.activate());
    }
}

/// Hover ticks and press clicks on the interactive elements.
pub fn wire_cue_targets(document: &web::Document, cues: &AudioCues) {
    let targets = dom::query_all(document, CUE_SELECTOR);
    log::debug!("[audio] {} cue targets", targets.len());
    for el in targets {
        let hover = cues.clone();
        dom::add_listener(&el, "mouseenter", move |_: web::MouseEvent| {
            hover.play(Cue::Tick)
        });
        let press = cues.clone();
        dom::add_listener(&el, "click", move |_: web::MouseEvent| press.play(Cue::Click));
    }
}

/// Form fields tick on focus, and once more when typing pauses.
pub fn wire_secure_inputs(document: &web::Document, cues: &AudioCues) {
    let inputs = dom::query_all(document, SECURE_INPUT_SELECTOR);
    log::debug!("[audio] {} secure inputs", inputs.len());
    for el in inputs {
        let focus = cues.clone();
        dom::add_listener(&el, "focus", move |_: web::Event| focus.play(Cue::Tick));

        let typing = cues.clone();
        let gate = Rc::new(Debounce::new());
        dom::add_listener(&el, "input", move |_: web::Event| {
            let ticket = gate.arm();
            let (gate, cues) = (gate.clone(), typing.clone());
            dom::set_timeout(INPUT_TICK_DEBOUNCE_MS, move || {
                if gate.fire(ticket) {
                    cues.play(Cue::Tick);
                }
            });
        });
    }
}
