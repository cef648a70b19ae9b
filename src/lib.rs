#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use fx_core::{FieldConfig, ParticleField, SharedContext, Ticker};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod notify;
pub mod render;
pub mod text;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Each effect is wired independently: a missing element or a failed setup
// disables that effect only, and the page content is never touched.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = Rc::new(SharedContext::new(dom::viewport()));
    let ticker = Ticker::new();

    let surface = render::CanvasSurface::find(&document, CANVAS_ID);
    let field = ParticleField::launch(
        &ticker,
        surface,
        FieldConfig::default(),
        ctx.clone(),
        rand::random(),
    );
    events::pointer::wire_input_handlers(ctx.clone(), field);

    if let Err(e) = events::scramble::wire_scramble_headings(&document, &ticker) {
        log::warn!("[scramble] disabled: {:?}", e);
    }
    if let Err(e) = cursor::mount(&document, &ticker, ctx) {
        log::warn!("[cursor] disabled: {:?}", e);
    }
    if let Err(e) = events::hover::wire_hover_effects(&document) {
        log::warn!("[hover] disabled: {:?}", e);
    }
    if let Err(e) = notify::install_styles(&document) {
        log::warn!("[notify] keyframes missing: {:?}", e);
    }

    let cues = audio::AudioCues::new();
    events::cues::wire_audio_activation(&cues);
    events::cues::wire_cue_targets(&document, &cues);
    events::cues::wire_secure_inputs(&document, &cues);
    events::uplink::wire_contact_form(&document, &ticker, &cues);

    // Scheduler loop driven by requestAnimationFrame
    frame::start_loop(ticker);
    Ok(())
}
