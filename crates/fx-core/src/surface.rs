//! Raster surface abstraction consumed by the particle field.
//!
//! The web frontend implements [`DrawSurface`] over a 2D canvas context;
//! tests implement it with a recorder. Coordinates are viewport pixels.

use crate::error::FxResult;
use glam::Vec2;

/// Straight (non-premultiplied) colour with a float alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(168, 85, 247, 0.4)`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Set both backing dimensions. Implementations must apply both even when
    /// only one changed; a canvas left untouched keeps its default size.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self) -> FxResult<()>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> FxResult<()>;
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) -> FxResult<()>;
}
