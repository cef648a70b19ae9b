//! Eased follower for the decorative cursor glow.

use crate::config::CursorConfig;
use crate::context::Viewport;
use crate::error::FxResult;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStep {
    pub position: Vec2,
    /// True only on the frame the follower first saw the pointer.
    pub activated: bool,
}

impl CursorStep {
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0)",
            self.position.x, self.position.y
        )
    }
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    config: CursorConfig,
    position: Vec2,
    active: bool,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> FxResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            position: Vec2::ZERO,
            active: false,
        })
    }

    /// The glow is a pointer-device nicety; narrow viewports skip it.
    pub fn enabled_for(&self, viewport: Viewport) -> bool {
        viewport.width > self.config.min_viewport_width
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Advance one frame toward `pointer`. Snaps on the first sighting and
    /// returns `None` until the pointer has been seen at all.
    pub fn step(&mut self, pointer: Option<Vec2>) -> Option<CursorStep> {
        let target = pointer?;
        if !self.active {
            self.active = true;
            self.position = target;
            return Some(CursorStep {
                position: target,
                activated: true,
            });
        }
        self.position += (target - self.position) * self.config.follow;
        Some(CursorStep {
            position: self.position,
            activated: false,
        })
    }
}
