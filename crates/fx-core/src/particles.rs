use crate::config::FieldConfig;
use crate::context::{Hooks, SharedContext, Viewport};
use crate::error::{FxError, FxResult};
use crate::surface::DrawSurface;
use crate::ticker::{FrameSignal, FrameTask, TaskHandle, Ticker};
use glam::Vec2;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Which of the two configured node tints a particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Primary,
    Secondary,
}

impl Tint {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Tint::Primary => 0,
            Tint::Secondary => 1,
        }
    }
}

/// One node of the background field. Identity is its index in the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_radius: f32,
    pub phase: f32,
    pub tint: Tint,
}

impl Particle {
    /// Integrate one frame, then reflect any axis that left `[0, bound]`.
    /// The position itself is never clamped.
    #[inline]
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        if self.pos.x > width || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > height || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    #[inline]
    pub fn rendered_radius(&self, amplitude: f32) -> f32 {
        (self.base_radius + amplitude * self.phase.sin()).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Node,
    Pointer,
}

/// A connector drawn for one frame only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
    pub kind: EdgeKind,
}

/// Linear fade from `max_opacity` at distance 0 to nothing at `radius`.
#[inline]
pub fn edge_opacity(distance: f32, radius: f32, max_opacity: f32) -> Option<f32> {
    (distance < radius).then(|| (1.0 - distance / radius) * max_opacity)
}

pub fn proximity_edge(
    from: Vec2,
    to: Vec2,
    kind: EdgeKind,
    config: &FieldConfig,
) -> Option<ProximityEdge> {
    let (radius, max_opacity) = match kind {
        EdgeKind::Node => (config.connect_radius, config.edge_max_opacity),
        EdgeKind::Pointer => (config.pointer_radius, config.pointer_edge_max_opacity),
    };
    edge_opacity(from.distance(to), radius, max_opacity).map(|opacity| ProximityEdge {
        from,
        to,
        opacity,
        kind,
    })
}

/// `floor(area / density)`; zero for an empty viewport.
#[inline]
pub fn particle_count(width: u32, height: u32, density: f32) -> usize {
    let area = width as f64 * height as f64;
    if area <= 0.0 || density <= 0.0 {
        return 0;
    }
    (area / density as f64).floor() as usize
}

/// Animated node-and-edge backdrop.
///
/// Owns its drawing surface and particle population. Every frame it advances
/// each particle, draws it, then strokes edges to later particles and to the
/// shared pointer. The population is rebuilt from scratch on every resize.
pub struct ParticleField<S: DrawSurface> {
    config: FieldConfig,
    ctx: Rc<SharedContext>,
    surface: S,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl<S: DrawSurface> ParticleField<S> {
    /// Validate the config and populate for the context's current viewport.
    pub fn new(
        config: FieldConfig,
        ctx: Rc<SharedContext>,
        surface: S,
        seed: u64,
    ) -> FxResult<Self> {
        config.validate()?;
        let mut field = Self {
            config,
            ctx,
            surface,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        let viewport = field.ctx.viewport();
        field.resize(viewport);
        Ok(field)
    }

    /// Build a field on `surface` and schedule it on `ticker`. Missing surface
    /// or invalid config leaves the page untouched and returns `None`.
    pub fn launch(
        ticker: &Ticker,
        surface: Option<S>,
        config: FieldConfig,
        ctx: Rc<SharedContext>,
        seed: u64,
    ) -> Option<FieldHandle<S>>
    where
        S: 'static,
    {
        let Some(surface) = surface else {
            log::warn!("[field] {}", FxError::SurfaceUnavailable("no canvas".into()));
            return None;
        };
        match Self::new(config, ctx, surface, seed) {
            Ok(field) => Some(field.start(ticker)),
            Err(e) => {
                log::warn!("[field] disabled: {}", e);
                None
            }
        }
    }

    pub fn start(self, ticker: &Ticker) -> FieldHandle<S>
    where
        S: 'static,
    {
        let field = Rc::new(RefCell::new(self));
        let task = ticker.spawn("particle-field", field.clone());
        FieldHandle { field, task }
    }

    /// Resize the backing surface and reseed the whole population.
    pub fn resize(&mut self, viewport: Viewport) {
        let w = viewport.width.max(0.0).floor() as u32;
        let h = viewport.height.max(0.0).floor() as u32;
        self.surface.set_size(w, h);
        self.populate();
    }

    fn populate(&mut self) {
        let w = self.surface.width();
        let h = self.surface.height();
        let count = particle_count(w, h, self.config.density);
        let c = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.gen_range(0.0..w as f32),
                    rng.gen_range(0.0..h as f32),
                ),
                vel: Vec2::new(
                    rng.gen_range(-c.speed_max..c.speed_max),
                    rng.gen_range(-c.speed_max..c.speed_max),
                ),
                base_radius: rng.gen_range(c.radius_min..c.radius_max),
                phase: rng.gen_range(0.0..crate::constants::PULSE_PHASE_INIT_MAX),
                tint: if rng.gen_bool(0.5) {
                    Tint::Primary
                } else {
                    Tint::Secondary
                },
            })
            .collect();
        log::info!("[field] {}x{} -> {} particles", w, h, count);
    }

    /// One update-and-draw pass.
    pub fn render_frame(&mut self) -> FxResult<()> {
        let w = self.surface.width() as f32;
        let h = self.surface.height() as f32;
        let pointer = self.ctx.pointer();
        let c = &self.config;

        self.surface.clear()?;
        let n = self.particles.len();
        for i in 0..n {
            let p = {
                let p = &mut self.particles[i];
                p.advance(w, h);
                p.phase += c.pulse_step;
                *p
            };
            let radius = p.rendered_radius(c.pulse_amplitude);
            self.surface
                .fill_circle(p.pos, radius, c.tints[p.tint.index()])?;

            for other in &self.particles[i + 1..] {
                if let Some(e) = proximity_edge(p.pos, other.pos, EdgeKind::Node, c) {
                    self.surface.stroke_line(
                        e.from,
                        e.to,
                        c.edge_color.with_alpha(e.opacity),
                        c.edge_line_width,
                    )?;
                }
            }

            if let Some(e) = pointer.and_then(|m| proximity_edge(p.pos, m, EdgeKind::Pointer, c)) {
                self.surface.stroke_line(
                    e.from,
                    e.to,
                    c.pointer_edge_color.with_alpha(e.opacity),
                    c.pointer_edge_line_width,
                )?;
            }
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

impl<S: DrawSurface> FrameTask for ParticleField<S> {
    fn step(&mut self) -> FxResult<FrameSignal> {
        self.render_frame()?;
        Ok(FrameSignal::Continue)
    }
}

impl<S: DrawSurface> Hooks for ParticleField<S> {
    fn on_resize(&mut self, viewport: Viewport) {
        self.resize(viewport);
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.ctx.set_pointer(x, y);
    }
}

/// A running field: shared with the ticker, driven through [`Hooks`].
pub struct FieldHandle<S: DrawSurface> {
    field: Rc<RefCell<ParticleField<S>>>,
    task: TaskHandle,
}

impl<S: DrawSurface> FieldHandle<S> {
    pub fn field(&self) -> &Rc<RefCell<ParticleField<S>>> {
        &self.field
    }

    pub fn task(&self) -> TaskHandle {
        self.task
    }
}

impl<S: DrawSurface> Clone for FieldHandle<S> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            task: self.task,
        }
    }
}

impl<S: DrawSurface> Hooks for FieldHandle<S> {
    fn on_resize(&mut self, viewport: Viewport) {
        self.field.borrow_mut().on_resize(viewport);
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.field.borrow_mut().on_pointer_move(x, y);
    }
}
