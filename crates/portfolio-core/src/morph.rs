//! Hover-driven portrait card: rounded card, cyberpunk grid overlay and a
//! cross-fade between a pixel-art avatar and a volumetric one.

use crate::constants::*;
use crate::math::{clamp01, lerp, wrap};
use crate::schedule::Animation;
use crate::surface::*;
use glam::Vec2;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Written by pointer listeners, sampled once per frame.
#[derive(Clone, Debug, Default)]
pub struct HoverInput(Rc<Cell<bool>>);

impl HoverInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, hovered: bool) {
        self.0.set(hovered);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    /// 0 = pixel-art at rest, 1 = volumetric / hovered.
    pub progress: f32,
    /// Phase of the idle float; grows without bound, only read through `sin`.
    pub float_angle: f32,
}

#[derive(Clone, Debug)]
pub struct MorphConfig {
    /// Fraction of the remaining distance covered each frame.
    pub lerp_factor: f32,
    /// Float phase advance per frame (radians).
    pub float_step: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            float_step: 0.05,
        }
    }
}

const RESTING_SHADOW: Shadow = Shadow {
    color: Rgba {
        rgb: Rgb::new(0, 0, 0),
        a: 0.5,
    },
    blur: 10.0,
    offset_y: 5.0,
};

const HOVERED_SHADOW: Shadow = Shadow {
    color: Rgba { rgb: PURPLE, a: 0.6 },
    blur: 30.0,
    offset_y: 15.0,
};

/// Avatars are skipped until both images report loaded.
pub struct MorphCard<I, R> {
    pixel: I,
    volumetric: I,
    hover: HoverInput,
    rng: R,
    config: MorphConfig,
    state: RenderState,
}

impl<I: ImageAsset, R: Rng> MorphCard<I, R> {
    pub fn new(pixel: I, volumetric: I, hover: HoverInput, rng: R, config: MorphConfig) -> Self {
        Self {
            pixel,
            volumetric,
            hover,
            rng,
            config,
            state: RenderState::default(),
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn avatars_ready(&self) -> bool {
        self.pixel.is_loaded() && self.volumetric.is_loaded()
    }

    pub fn step(&mut self) -> RenderState {
        let target = if self.hover.get() { 1.0 } else { 0.0 };
        let next = lerp(self.state.progress, target, self.config.lerp_factor);
        self.state.progress = clamp01(next);
        self.state.float_angle += self.config.float_step;
        self.state
    }

    fn draw_card<S: Surface<Image = I>>(&self, surface: &mut S, card: Rect, hovered: bool) {
        let p = self.state.progress;
        let fill = card_color(p).opaque();
        surface.set_shadow(Some(if hovered { HOVERED_SHADOW } else { RESTING_SHADOW }));
        surface.fill_rounded_rect(card, card.fit_radius(CARD_CORNER_RADIUS), &Paint::Solid(fill));
        surface.set_shadow(None);
    }

    fn draw_grid<S: Surface<Image = I>>(&self, surface: &mut S, card: Rect, size: Vec2, now_ms: f64) {
        // reduce in f64 first; epoch-sized timestamps would lose the fraction in f32
        let scrolled = (now_ms / CARD_GRID_MS_PER_PX).rem_euclid(CARD_GRID_CELL as f64);
        let offset = wrap(scrolled as f32, CARD_GRID_CELL);
        surface.save();
        surface.set_alpha(clamp01(self.state.progress * CARD_GRID_MAX_ALPHA));
        surface.clip_rounded_rect(card, card.fit_radius(CARD_CORNER_RADIUS));
        surface.stroke_lines(
            grid_segments(size, CARD_GRID_CELL, offset, GridBounds::Exclusive),
            PURPLE.opaque(),
            GRID_LINE_WIDTH,
        );
        surface.restore();
    }

    fn draw_pixel_avatar<S: Surface<Image = I>>(&mut self, surface: &mut S, anchor: Vec2) {
        let p = self.state.progress;
        let side = PIXEL_AVATAR_SIZE * (1.0 - p * 0.5);
        surface.save();
        surface.set_alpha(clamp01(1.0 - p));
        surface.set_smoothing(false);
        surface.translate(anchor + Vec2::new(0.0, p * AVATAR_TRAVEL));
        if p > JITTER_ABOVE && p < PIXEL_VISIBLE_BELOW {
            let jitter = (self.rng.gen::<f32>() - 0.5) * JITTER_MAX_RADIANS;
            surface.rotate(jitter);
        }
        surface.draw_image(&self.pixel, Rect::centered(Vec2::ZERO, Vec2::splat(side)));
        surface.restore();
    }

    fn draw_volumetric_avatar<S: Surface<Image = I>>(&self, surface: &mut S, anchor: Vec2) {
        let p = self.state.progress;
        let side = VOLUMETRIC_AVATAR_SIZE * (0.5 + p * 0.5);
        surface.save();
        surface.set_alpha(clamp01(p));
        surface.translate(anchor + Vec2::new(0.0, (1.0 - p) * AVATAR_TRAVEL));
        surface.draw_image(&self.volumetric, Rect::centered(Vec2::ZERO, Vec2::splat(side)));
        if p > GLOW_ABOVE {
            surface.set_blend(BlendMode::Screen);
            let glow = RadialGradient::concentric(
                Vec2::ZERO,
                GLOW_INNER_RADIUS,
                GLOW_OUTER_RADIUS,
                PURPLE.with_alpha(GLOW_ALPHA),
                Rgba::TRANSPARENT,
            );
            surface.fill_circle(Vec2::ZERO, GLOW_OUTER_RADIUS, &Paint::Radial(glow));
        }
        surface.restore();
    }
}

impl<S, R> Animation<S> for MorphCard<S::Image, R>
where
    S: Surface,
    R: Rng,
{
    fn frame(&mut self, surface: &mut S, now_ms: f64) {
        let hovered = self.hover.get();
        self.step();

        let size = surface.size();
        let card = Rect::from_size(size).inset(CARD_INSET);
        surface.clear();
        self.draw_card(surface, card, hovered);
        self.draw_grid(surface, card, size, now_ms);

        if !self.avatars_ready() {
            return;
        }
        let float_y = self.state.float_angle.sin() * FLOAT_AMPLITUDE;
        let anchor = Vec2::new(size.x / 2.0, size.y / CARD_CENTER_Y_DIVISOR + float_y);
        let p = self.state.progress;
        if p < PIXEL_VISIBLE_BELOW {
            self.draw_pixel_avatar(surface, anchor);
        }
        if p > VOLUMETRIC_VISIBLE_ABOVE {
            self.draw_volumetric_avatar(surface, anchor);
        }
    }
}

/// Card background at `progress`, channels floored like the canvas does.
pub fn card_color(progress: f32) -> Rgb {
    let t = clamp01(progress);
    let channel = |a: u8, b: u8| lerp(a as f32, b as f32, t).floor().clamp(0.0, 255.0) as u8;
    Rgb::new(
        channel(CARD_REST_RGB.r, CARD_HOVER_RGB.r),
        channel(CARD_REST_RGB.g, CARD_HOVER_RGB.g),
        channel(CARD_REST_RGB.b, CARD_HOVER_RGB.b),
    )
}
