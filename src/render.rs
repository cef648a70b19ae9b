use fx_core::{DrawSurface, FxError, FxResult, Rgba};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `DrawSurface` over a full-viewport canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    /// Look the canvas up by id. Absent or unusable canvases disable the
    /// backdrop rather than the page.
    pub fn find(document: &web::Document, id: &str) -> Option<Self> {
        let el = document.get_element_by_id(id)?;
        let canvas = el.dyn_into::<web::HtmlCanvasElement>().ok()?;
        match Self::new(canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[canvas] #{} unusable: {:?}", id, e);
                None
            }
        }
    }
}

fn js_err(op: &'static str) -> impl Fn(JsValue) -> FxError {
    move |e| FxError::surface(op, format!("{:?}", e))
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) -> FxResult<()> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> FxResult<()> {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(js_err("arc"))?;
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) -> FxResult<()> {
        self.ctx.begin_path();
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }
}
