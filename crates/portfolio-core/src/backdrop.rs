//! Full-viewport procedural background: scrolling grid, rising particle field
//! and a radial vignette.

use crate::constants::*;
use crate::math::{clamp01, wrap};
use crate::schedule::Animation;
use crate::surface::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Violet,
    Blue,
}

impl Tint {
    pub fn rgb(self) -> Rgb {
        match self {
            Tint::Violet => PURPLE,
            Tint::Blue => BLUE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per frame; always negative (upward).
    pub vertical_speed: f32,
    pub tint: Tint,
    pub alpha: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: PARTICLE_MIN_SIZE,
            vertical_speed: -PARTICLE_MIN_RISE,
            tint: Tint::Violet,
            alpha: PARTICLE_MIN_ALPHA,
        }
    }
}

fn roll_appearance<R: Rng>(p: &mut Particle, rng: &mut R) {
    p.size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_MIN_SIZE;
    p.vertical_speed = -(rng.gen::<f32>() * PARTICLE_RISE_SPAN + PARTICLE_MIN_RISE);
    p.tint = if rng.gen_bool(0.5) { Tint::Violet } else { Tint::Blue };
    p.alpha = rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_MIN_ALPHA;
}

pub fn spawn_particle<R: Rng>(p: &mut Particle, viewport: Vec2, rng: &mut R) {
    p.pos = Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y);
    roll_appearance(p, rng);
}

/// Re-enter a particle from the bottom band of the viewport.
pub fn recycle_particle<R: Rng>(p: &mut Particle, viewport: Vec2, rng: &mut R) {
    let band = viewport.y.max(0.0) * RECYCLE_BAND_FRACTION;
    p.pos = Vec2::new(
        rng.gen::<f32>() * viewport.x,
        viewport.y.max(0.0) - rng.gen::<f32>() * band,
    );
    roll_appearance(p, rng);
}

/// Advance every particle one frame, recycling those that left through the
/// top edge. Returns how many were recycled.
pub fn step_particles<R: Rng>(pool: &mut [Particle], viewport: Vec2, rng: &mut R) -> usize {
    let mut recycled = 0;
    for p in pool.iter_mut() {
        p.pos.y += p.vertical_speed;
        if p.pos.y < 0.0 {
            recycle_particle(p, viewport, rng);
            recycled += 1;
        }
    }
    recycled
}

pub fn draw_particles<S: Surface>(pool: &[Particle], surface: &mut S) {
    for p in pool {
        let color = p.tint.rgb().with_alpha(clamp01(p.alpha));
        surface.fill_rect(
            Rect {
                origin: p.pos,
                size: Vec2::splat(p.size),
            },
            &Paint::Solid(color),
        );
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPhase {
    pub offset: f32,
}

impl GridPhase {
    pub fn advance(&mut self, step: f32, cell: f32) {
        self.offset = wrap(self.offset + step, cell);
    }
}

#[derive(Clone, Debug)]
pub struct BackdropConfig {
    pub particle_count: usize,
    pub grid_cell: f32,
    /// Grid scroll per frame in pixels.
    pub grid_step: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            grid_cell: 40.0,
            grid_step: 0.5,
        }
    }
}

pub struct Backdrop<R> {
    viewport: Vec2,
    grid: GridPhase,
    particles: Vec<Particle>,
    rng: R,
    config: BackdropConfig,
}

impl<R: Rng> Backdrop<R> {
    pub fn new(viewport: Vec2, mut rng: R, config: BackdropConfig) -> Self {
        let mut particles = vec![Particle::default(); config.particle_count];
        for p in particles.iter_mut() {
            spawn_particle(p, viewport, &mut rng);
        }
        log::debug!(
            "[backdrop] pool of {} particles over {}x{}",
            particles.len(),
            viewport.x,
            viewport.y
        );
        Self {
            viewport,
            grid: GridPhase::default(),
            particles,
            rng,
            config,
        }
    }

    /// Adopt a new viewport size. Particles keep their positions and settle
    /// into the new bounds as they recycle.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn grid(&self) -> GridPhase {
        self.grid
    }

    pub fn step(&mut self) -> usize {
        self.grid.advance(self.config.grid_step, self.config.grid_cell);
        step_particles(&mut self.particles, self.viewport, &mut self.rng)
    }
}

impl<S: Surface, R: Rng> Animation<S> for Backdrop<R> {
    fn frame(&mut self, surface: &mut S, _now_ms: f64) {
        self.step();

        let full = Rect::from_size(self.viewport);
        surface.clear();
        surface.fill_rect(full, &Paint::Solid(NIGHT.opaque()));

        surface.save();
        surface.set_alpha(BACKDROP_GRID_ALPHA);
        surface.stroke_lines(
            grid_segments(
                self.viewport,
                self.config.grid_cell,
                self.grid.offset,
                GridBounds::Inclusive,
            ),
            PURPLE.opaque(),
            GRID_LINE_WIDTH,
        );
        surface.restore();

        draw_particles(&self.particles, surface);

        let center = self.viewport * 0.5;
        let vignette = RadialGradient::concentric(
            center,
            self.viewport.y / 2.0,
            self.viewport.y,
            Rgba::TRANSPARENT,
            NIGHT.opaque(),
        );
        surface.fill_rect(full, &Paint::Radial(vignette));
    }
}
