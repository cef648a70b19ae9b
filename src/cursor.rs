use crate::constants::{ACTIVE_CLASS, CURSOR_GLOW_CLASS, CURSOR_WRAPPER_CLASS};
use crate::dom;
use fx_core::cursor::CursorFollower;
use fx_core::{CursorConfig, FrameSignal, FrameTask, FxError, FxResult, SharedContext, Ticker};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorGlowTask {
    follower: CursorFollower,
    ctx: Rc<SharedContext>,
    wrapper: web::HtmlElement,
}

impl FrameTask for CursorGlowTask {
    fn step(&mut self) -> FxResult<FrameSignal> {
        if let Some(step) = self.follower.step(self.ctx.pointer()) {
            if step.activated {
                self.wrapper
                    .class_list()
                    .add_1(ACTIVE_CLASS)
                    .map_err(|e| FxError::surface("classList.add", format!("{:?}", e)))?;
            }
            self.wrapper
                .style()
                .set_property("transform", &step.transform())
                .map_err(|e| FxError::surface("style.transform", format!("{:?}", e)))?;
        }
        Ok(FrameSignal::Continue)
    }
}

/// Append the glow elements to `<body>` and schedule the follower.
/// Narrow viewports get nothing.
pub fn mount(
    document: &web::Document,
    ticker: &Ticker,
    ctx: Rc<SharedContext>,
) -> anyhow::Result<()> {
    let follower = CursorFollower::new(CursorConfig::default())?;
    if !follower.enabled_for(dom::viewport()) {
        log::info!("[cursor] viewport too narrow, glow disabled");
        return Ok(());
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let wrapper = create_div(document, CURSOR_WRAPPER_CLASS)?;
    let glow = create_div(document, CURSOR_GLOW_CLASS)?;
    wrapper
        .append_child(&glow)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    body.append_child(&wrapper)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ticker.spawn(
        "cursor-glow",
        CursorGlowTask {
            follower,
            ctx,
            wrapper,
        },
    );
    Ok(())
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    el.set_class_name(class);
    Ok(el)
}
