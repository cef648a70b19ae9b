//! Pointer response for hoverable cards and buttons.
//!
//! Every element gets a shine highlight that tracks the pointer. Buttons and
//! social icons are pulled toward it; everything else tilts in 3D, and glass
//! panels additionally turn their border gradient to face the pointer.

use crate::config::HoverConfig;
use crate::context::Viewport;
use crate::error::FxResult;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverKind {
    Tilt { glass: bool },
    Magnetic { strength: f32 },
}

impl HoverKind {
    /// Pick the response from the element's classes.
    pub fn classify(has_class: impl Fn(&str) -> bool, config: &HoverConfig) -> Self {
        if has_class("social-icon") {
            HoverKind::Magnetic {
                strength: config.icon_strength,
            }
        } else if has_class("btn") {
            HoverKind::Magnetic {
                strength: config.button_strength,
            }
        } else {
            HoverKind::Tilt {
                glass: has_class("glass-panel"),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverTransform {
    /// Back to the stylesheet's transform.
    Rest,
    Tilt { rotate_x: f32, rotate_y: f32 },
    Pull { offset: Vec2 },
}

impl HoverTransform {
    pub fn to_css(&self, config: &HoverConfig) -> String {
        match *self {
            HoverTransform::Rest => String::new(),
            HoverTransform::Tilt { rotate_x, rotate_y } => format!(
                "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
                config.perspective_px, rotate_x, rotate_y, config.lift_px
            ),
            HoverTransform::Pull { offset } => format!(
                "translate3d({}px, {}px, 0) scale({})",
                offset.x, offset.y, config.magnet_scale
            ),
        }
    }
}

/// Style values to apply for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverFrame {
    /// Highlight centre as percentages of the element box.
    pub shine: Vec2,
    pub transform: HoverTransform,
    /// Border gradient angle in degrees, glass panels only.
    pub rotation_deg: Option<f32>,
}

impl HoverFrame {
    /// What `mouseleave` restores. The border angle is left where it was.
    pub fn resting() -> Self {
        Self {
            shine: Vec2::splat(50.0),
            transform: HoverTransform::Rest,
            rotation_deg: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HoverResponder {
    config: HoverConfig,
}

impl HoverResponder {
    pub fn new(config: HoverConfig) -> FxResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    pub fn enabled_for(&self, viewport: Viewport) -> bool {
        viewport.width > self.config.min_viewport_width
    }

    /// `local` is the pointer relative to the element's top-left corner and
    /// `size` the element's box.
    pub fn respond(&self, kind: HoverKind, local: Vec2, size: Vec2) -> HoverFrame {
        let c = &self.config;
        let centre = size * 0.5;
        let offset = local - centre;
        let shine = Vec2::new(percent(local.x, size.x), percent(local.y, size.y));

        match kind {
            HoverKind::Magnetic { strength } => HoverFrame {
                shine,
                transform: HoverTransform::Pull {
                    offset: offset * strength,
                },
                rotation_deg: None,
            },
            HoverKind::Tilt { glass } => HoverFrame {
                shine,
                transform: HoverTransform::Tilt {
                    rotate_x: offset.y / c.tilt_divisor,
                    rotate_y: -offset.x / c.tilt_divisor,
                },
                rotation_deg: glass.then(|| offset.y.atan2(offset.x).to_degrees() + 90.0),
            },
        }
    }
}

// a collapsed box keeps the highlight centred
#[inline]
fn percent(v: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        v / extent * 100.0
    } else {
        50.0
    }
}
