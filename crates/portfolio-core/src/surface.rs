use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: crate::math::clamp01(a),
        }
    }

    pub fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::new(0, 0, 0),
        a: 0.0,
    };
}

impl fmt::Display for Rgba {
    /// CSS `rgba()` notation, accepted by canvas fill/stroke/shadow styles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            size,
        }
    }

    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    /// Shrink by `inset` on every side; never goes negative.
    pub fn inset(self, inset: f32) -> Self {
        Self {
            origin: self.origin + Vec2::splat(inset),
            size: (self.size - Vec2::splat(2.0 * inset)).max(Vec2::ZERO),
        }
    }

    /// Corner radius limited to half the shorter side.
    pub fn fit_radius(&self, radius: f32) -> f32 {
        radius.min(self.size.x / 2.0).min(self.size.y / 2.0).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    SourceOver,
    /// Lighten-style composite used for glows.
    Screen,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

impl RadialGradient {
    pub fn concentric(center: Vec2, inner_radius: f32, outer_radius: f32, inner: Rgba, outer: Rgba) -> Self {
        Self {
            inner_center: center,
            inner_radius,
            outer_center: center,
            outer_radius,
            inner,
            outer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

pub trait ImageAsset {
    fn is_loaded(&self) -> bool;
}

// State setters persist until the matching `restore`.
pub trait Surface {
    type Image: ImageAsset;

    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_alpha(&mut self, alpha: f32);
    fn set_blend(&mut self, mode: BlendMode);
    fn set_shadow(&mut self, shadow: Option<Shadow>);
    fn set_smoothing(&mut self, enabled: bool);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn clip_rounded_rect(&mut self, rect: Rect, radius: f32);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_lines<I>(&mut self, lines: I, color: Rgba, width: f32)
    where
        I: IntoIterator<Item = Segment>;
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
}

/// Whether a grid line sitting exactly on the far edge is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridBounds {
    Inclusive,
    Exclusive,
}

impl GridBounds {
    fn count(self, span: f32, cell: f32) -> usize {
        match self {
            GridBounds::Inclusive if span >= 0.0 => (span / cell).floor() as usize + 1,
            GridBounds::Exclusive if span > 0.0 => (span / cell).ceil() as usize,
            _ => 0,
        }
    }
}

/// Lines of a rectangular grid covering `extent`: verticals every `cell` from
/// x = 0, horizontals every `cell` starting at `offset_y`.
pub fn grid_segments(
    extent: Vec2,
    cell: f32,
    offset_y: f32,
    bounds: GridBounds,
) -> impl Iterator<Item = Segment> {
    let cell = cell.max(1.0);
    let cols = bounds.count(extent.x, cell);
    let rows = bounds.count(extent.y - offset_y, cell);
    let verticals = (0..cols).map(move |i| {
        let x = i as f32 * cell;
        Segment {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, extent.y),
        }
    });
    let horizontals = (0..rows).map(move |j| {
        let y = offset_y + j as f32 * cell;
        Segment {
            from: Vec2::new(0.0, y),
            to: Vec2::new(extent.x, y),
        }
    });
    verticals.chain(horizontals)
}
