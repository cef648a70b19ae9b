// Recording fakes for the browser-facing traits, shared by the host tests.

#![allow(dead_code)]
use fx_core::{DrawSurface, FxError, FxResult, Rgba, TextTarget};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
    pub fail_clear: bool,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line {
                    from,
                    to,
                    color,
                    width,
                } => Some((*from, *to, *color, *width)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) -> FxResult<()> {
        if self.fail_clear {
            return Err(FxError::surface("clear", "context lost"));
        }
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> FxResult<()> {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) -> FxResult<()> {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }
}

/// Text element stand-in. Clones share the same markup so a test can keep a
/// handle after moving one into an engine.
#[derive(Clone, Default)]
pub struct FakeText {
    pub markup: Rc<RefCell<String>>,
    pub writes: Rc<Cell<usize>>,
}

impl FakeText {
    pub fn with_text(text: &str) -> Self {
        let t = Self::default();
        *t.markup.borrow_mut() = text.to_string();
        t
    }

    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }
}

impl TextTarget for FakeText {
    fn text(&self) -> String {
        visible_text(&self.markup.borrow())
    }

    fn set_markup(&mut self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}

/// One rendered position: the glyph shown and whether it sits in an active span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub glyph: char,
    pub active: bool,
}

/// Split scramble markup into per-glyph segments, decoding entities.
pub fn segments(markup: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut rest = markup;
    let mut active = false;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("<span") {
            let close = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            rest = &rest[close..];
            active = true;
        } else if rest.starts_with("</span>") {
            rest = &rest["</span>".len()..];
            active = false;
        } else if c == '&' {
            let end = rest.find(';').map(|i| i + 1).unwrap_or(rest.len());
            let glyph = match &rest[..end] {
                "&amp;" => '&',
                "&lt;" => '<',
                "&gt;" => '>',
                "&quot;" => '"',
                "&#39;" => '\'',
                other => panic!("unexpected entity {other}"),
            };
            out.push(Segment { glyph, active });
            rest = &rest[end..];
        } else {
            out.push(Segment { glyph: c, active });
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

pub fn visible_text(markup: &str) -> String {
    segments(markup).into_iter().map(|s| s.glyph).collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
