//! Tunable parameters for each engine.
//!
//! Defaults come from [`crate::constants`]; none of the values are normative,
//! they only need to keep the relative look (pointer edges stronger than node
//! edges, glitch glyphs flickering rather than strobing).

use crate::constants::*;
use crate::error::{FxError, FxResult};
use crate::surface::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub density: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub speed_max: f32,
    pub pulse_step: f32,
    pub pulse_amplitude: f32,
    pub connect_radius: f32,
    pub edge_max_opacity: f32,
    pub edge_line_width: f32,
    pub edge_color: Rgba,
    pub pointer_radius: f32,
    pub pointer_edge_max_opacity: f32,
    pub pointer_edge_line_width: f32,
    pub pointer_edge_color: Rgba,
    /// The two categorical node tints, picked 50/50 per particle.
    pub tints: [Rgba; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: DENSITY_AREA_PER_PARTICLE,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            speed_max: PARTICLE_SPEED_MAX,
            pulse_step: PULSE_STEP_PER_FRAME,
            pulse_amplitude: PULSE_AMPLITUDE,
            connect_radius: CONNECT_RADIUS,
            edge_max_opacity: EDGE_MAX_OPACITY,
            edge_line_width: EDGE_LINE_WIDTH,
            edge_color: VIOLET,
            pointer_radius: POINTER_RADIUS,
            pointer_edge_max_opacity: POINTER_EDGE_MAX_OPACITY,
            pointer_edge_line_width: POINTER_EDGE_LINE_WIDTH,
            pointer_edge_color: GREEN,
            tints: [
                VIOLET.with_alpha(VIOLET_NODE_ALPHA),
                GREEN.with_alpha(GREEN_NODE_ALPHA),
            ],
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> FxResult<()> {
        positive("density", self.density)?;
        positive("radius_min", self.radius_min)?;
        if self.radius_max <= self.radius_min {
            return Err(FxError::config(
                "radius_max",
                format!("{} is not above radius_min {}", self.radius_max, self.radius_min),
            ));
        }
        positive("speed_max", self.speed_max)?;
        positive("connect_radius", self.connect_radius)?;
        positive("pointer_radius", self.pointer_radius)?;
        if self.pointer_radius <= self.connect_radius {
            return Err(FxError::config(
                "pointer_radius",
                format!(
                    "{} does not reach past connect_radius {}",
                    self.pointer_radius, self.connect_radius
                ),
            ));
        }
        unit("edge_max_opacity", self.edge_max_opacity)?;
        unit("pointer_edge_max_opacity", self.pointer_edge_max_opacity)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleConfig {
    /// Start frame and window length are each uniform in `[0, window_frames)`.
    pub window_frames: u32,
    pub reroll_probability: f64,
    pub glyphs: Vec<char>,
    pub active_class: String,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            window_frames: SCRAMBLE_WINDOW_FRAMES,
            reroll_probability: SCRAMBLE_REROLL_PROBABILITY,
            glyphs: SCRAMBLE_GLYPHS.chars().collect(),
            active_class: SCRAMBLE_ACTIVE_CLASS.to_string(),
        }
    }
}

impl ScrambleConfig {
    /// Frames after which every unit of a transition is guaranteed resolved.
    pub fn frames_to_settle(&self) -> u32 {
        2 * self.window_frames.saturating_sub(1) + 1
    }

    pub fn validate(&self) -> FxResult<()> {
        if self.window_frames == 0 {
            return Err(FxError::config("window_frames", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.reroll_probability) {
            return Err(FxError::config(
                "reroll_probability",
                format!("{} is outside [0, 1]", self.reroll_probability),
            ));
        }
        if self.glyphs.is_empty() {
            return Err(FxError::config("glyphs", "alphabet is empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub follow: f32,
    pub min_viewport_width: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow: CURSOR_FOLLOW_FACTOR,
            min_viewport_width: CURSOR_MIN_VIEWPORT_WIDTH,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> FxResult<()> {
        if !(self.follow > 0.0 && self.follow <= 1.0) {
            return Err(FxError::config(
                "follow",
                format!("{} is outside (0, 1]", self.follow),
            ));
        }
        Ok(())
    }
}

/// Card hover response: shine, tilt and magnetic pull.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverConfig {
    pub tilt_divisor: f32,
    pub perspective_px: f32,
    pub lift_px: f32,
    pub button_strength: f32,
    pub icon_strength: f32,
    pub magnet_scale: f32,
    pub min_viewport_width: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            tilt_divisor: HOVER_TILT_DIVISOR,
            perspective_px: HOVER_TILT_PERSPECTIVE_PX,
            lift_px: HOVER_TILT_LIFT_PX,
            button_strength: HOVER_BUTTON_STRENGTH,
            icon_strength: HOVER_ICON_STRENGTH,
            magnet_scale: HOVER_MAGNET_SCALE,
            min_viewport_width: HOVER_MIN_VIEWPORT_WIDTH,
        }
    }
}

impl HoverConfig {
    pub fn validate(&self) -> FxResult<()> {
        positive("tilt_divisor", self.tilt_divisor)?;
        positive("perspective_px", self.perspective_px)?;
        positive("magnet_scale", self.magnet_scale)?;
        unit("button_strength", self.button_strength)?;
        unit("icon_strength", self.icon_strength)?;
        Ok(())
    }
}

fn positive(field: &'static str, v: f32) -> FxResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(FxError::config(field, format!("{} is not a positive number", v)))
    }
}

fn unit(field: &'static str, v: f32) -> FxResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(FxError::config(field, format!("{} is outside [0, 1]", v)))
    }
}
