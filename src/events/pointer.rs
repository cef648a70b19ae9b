use crate::dom;
use crate::render::CanvasSurface;
use fx_core::{FieldHandle, Hooks, SharedContext};
use std::rc::Rc;
use web_sys as web;

/// Pointer moves and viewport resizes feed the shared context and, when the
/// backdrop is running, the particle field's hooks.
pub fn wire_input_handlers(ctx: Rc<SharedContext>, field: Option<FieldHandle<CanvasSurface>>) {
    let Some(window) = web::window() else {
        return;
    };
    wire_pointermove(&window, ctx.clone(), field.clone());
    wire_resize(&window, ctx, field);
}

fn wire_pointermove(
    window: &web::Window,
    ctx: Rc<SharedContext>,
    mut field: Option<FieldHandle<CanvasSurface>>,
) {
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        match field.as_mut() {
            // the field writes the shared pointer itself
            Some(f) => f.on_pointer_move(x, y),
            None => ctx.set_pointer(x, y),
        }
    });
}

fn wire_resize(
    window: &web::Window,
    ctx: Rc<SharedContext>,
    mut field: Option<FieldHandle<CanvasSurface>>,
) {
    dom::add_listener(window, "resize", move |_: web::Event| {
        let viewport = dom::viewport();
        ctx.set_viewport(viewport);
        if let Some(f) = field.as_mut() {
            f.on_resize(viewport);
        }
    });
}
