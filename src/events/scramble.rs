use crate::constants::{SCRAMBLE_KEY_ATTR, SCRAMBLE_SELECTOR};
use crate::dom;
use crate::text::ElementText;
use fx_core::constants::{REVEAL_DELAY_MS, REVEAL_VISIBILITY_THRESHOLD};
use fx_core::reveal::RevealGate;
use fx_core::{Hooks, ScrambleConfig, ScrambleEngine, Ticker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type HeadingEngine = Rc<RefCell<ScrambleEngine<ElementText>>>;

/// One engine per heading: hover replays the scramble, and the first time a
/// heading is half visible it gets a delayed initial reveal.
pub fn wire_scramble_headings(
    document: &web::Document,
    ticker: &Ticker,
) -> anyhow::Result<usize> {
    let headings = dom::query_all(document, SCRAMBLE_SELECTOR);
    let mut engines: Vec<HeadingEngine> = Vec::with_capacity(headings.len());
    for (i, el) in headings.iter().enumerate() {
        let engine = ScrambleEngine::new(
            ElementText::new(el.clone()),
            ScrambleConfig::default(),
            ticker.clone(),
            rand::random(),
        )?;
        let engine = Rc::new(RefCell::new(engine));
        el.set_attribute(SCRAMBLE_KEY_ATTR, &i.to_string())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let hover = engine.clone();
        dom::add_listener(el, "mouseenter", move |_: web::MouseEvent| {
            hover.borrow_mut().on_activate();
        });
        engines.push(engine);
    }
    log::info!("[scramble] {} headings wired", engines.len());

    // Hover keeps working even where IntersectionObserver is missing.
    if let Err(e) = observe_first_reveal(&headings, Rc::new(engines)) {
        log::warn!("[scramble] initial reveal disabled: {:?}", e);
    }
    Ok(headings.len())
}

fn observe_first_reveal(
    headings: &[web::HtmlElement],
    engines: Rc<Vec<HeadingEngine>>,
) -> anyhow::Result<()> {
    let gate = Rc::new(RefCell::new(RevealGate::new()));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(key) = target
                    .get_attribute(SCRAMBLE_KEY_ATTR)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    continue;
                };
                if !gate.borrow_mut().admit(key) {
                    continue;
                }
                if let Some(engine) = engines.get(key as usize).cloned() {
                    dom::set_timeout(REVEAL_DELAY_MS, move || {
                        let _ = engine.borrow_mut().replay();
                    });
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in headings {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
