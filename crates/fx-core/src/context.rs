//! State shared between the input handlers and the engines.
//!
//! One writer (the page's input/resize glue) and many readers (engines, inside
//! their own frame step). Everything runs on one thread, so plain `Cell`s are
//! enough: a read never overlaps a write.

use glam::Vec2;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

#[derive(Debug, Default)]
pub struct SharedContext {
    pointer: Cell<Option<Vec2>>,
    viewport: Cell<Viewport>,
}

impl SharedContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: Cell::new(None),
            viewport: Cell::new(viewport),
        }
    }

    /// Last reported pointer position; `None` until the pointer has moved once.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.get()
    }

    #[inline]
    pub fn set_pointer(&self, x: f32, y: f32) {
        self.pointer.set(Some(Vec2::new(x, y)));
    }

    pub fn clear_pointer(&self) {
        self.pointer.set(None);
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }
}

/// Event hooks an engine exposes to the page glue. Defaults are no-ops so each
/// engine only implements what it reacts to.
pub trait Hooks {
    fn on_resize(&mut self, _viewport: Viewport) {}
    fn on_pointer_move(&mut self, _x: f32, _y: f32) {}
    fn on_activate(&mut self) {}
}
