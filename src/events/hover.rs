use crate::constants::HOVER_SELECTOR;
use crate::dom;
use fx_core::hover::{HoverFrame, HoverKind, HoverResponder};
use fx_core::HoverConfig;
use glam::Vec2;
use std::rc::Rc;
use web_sys as web;

/// Shine, tilt and magnetic pull for cards and buttons. The width check runs
/// per event so the effect follows the viewport across resizes.
pub fn wire_hover_effects(document: &web::Document) -> anyhow::Result<usize> {
    let responder = Rc::new(HoverResponder::new(HoverConfig::default())?);
    let targets = dom::query_all(document, HOVER_SELECTOR);
    for el in &targets {
        let classes = el.class_list();
        let kind = HoverKind::classify(|c| classes.contains(c), responder.config());

        let (target, r) = (el.clone(), responder.clone());
        dom::add_listener(el, "mousemove", move |ev: web::MouseEvent| {
            if !r.enabled_for(dom::viewport()) {
                return;
            }
            let rect = target.get_bounding_client_rect();
            let local = Vec2::new(
                (ev.client_x() as f64 - rect.left()) as f32,
                (ev.client_y() as f64 - rect.top()) as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            apply(&target, &r.respond(kind, local, size), &r);
        });

        let (target, r) = (el.clone(), responder.clone());
        dom::add_listener(el, "mouseleave", move |_: web::MouseEvent| {
            apply(&target, &HoverFrame::resting(), &r);
        });
    }
    log::info!("[hover] {} elements wired", targets.len());
    Ok(targets.len())
}

fn apply(el: &web::HtmlElement, frame: &HoverFrame, responder: &HoverResponder) {
    let style = el.style();
    _ = style.set_property("--mouse-x", &format!("{}%", frame.shine.x));
    _ = style.set_property("--mouse-y", &format!("{}%", frame.shine.y));
    _ = style.set_property("transform", &frame.transform.to_css(responder.config()));
    if let Some(angle) = frame.rotation_deg {
        _ = style.set_property("--rotation", &format!("{}deg", angle));
    }
}
