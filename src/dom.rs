use fx_core::completion::{self, Completion, Delay};
use fx_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current inner size of the window in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener removed by the browser after its first call.
pub fn add_once_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// [`Delay`] on the browser's timer queue. Without a window the timer can
/// never fire and the completion settles as superseded.
#[derive(Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn delay(&self, ms: i32) -> Completion {
        let (resolver, completion) = completion::channel();
        set_timeout(ms, move || resolver.complete());
        completion
    }
}
