use crate::surface::Rgb;

// Shared palette (Tailwind-style names kept in comments for cross-reference)
pub const PURPLE: Rgb = Rgb::new(168, 85, 247); // purple-500 (#a855f7)
pub const BLUE: Rgb = Rgb::new(59, 130, 246); // blue-500 (#3b82f6)
pub const NIGHT: Rgb = Rgb::new(3, 7, 18); // gray-950 (#030712)

// Morph card background endpoints (rest -> hovered)
pub const CARD_REST_RGB: Rgb = Rgb::new(31, 41, 55);
pub const CARD_HOVER_RGB: Rgb = Rgb::new(45, 20, 60);

// Morph card layout
pub const CARD_INSET: f32 = 20.0;
pub const CARD_CORNER_RADIUS: f32 = 20.0;
pub const CARD_CENTER_Y_DIVISOR: f32 = 2.5; // avatars sit slightly above centre
pub const CARD_GRID_CELL: f32 = 30.0;
pub const CARD_GRID_MAX_ALPHA: f32 = 0.3;
pub const CARD_GRID_MS_PER_PX: f64 = 50.0; // wall-clock scroll speed

// Avatars
pub const FLOAT_AMPLITUDE: f32 = 5.0;
pub const PIXEL_AVATAR_SIZE: f32 = 180.0;
pub const VOLUMETRIC_AVATAR_SIZE: f32 = 200.0;
pub const AVATAR_TRAVEL: f32 = 50.0; // vertical slide during the cross-fade
pub const PIXEL_VISIBLE_BELOW: f32 = 0.95;
pub const VOLUMETRIC_VISIBLE_ABOVE: f32 = 0.05;
pub const JITTER_ABOVE: f32 = 0.1;
pub const JITTER_MAX_RADIANS: f32 = 0.1;
pub const GLOW_ABOVE: f32 = 0.8;
pub const GLOW_INNER_RADIUS: f32 = 50.0;
pub const GLOW_OUTER_RADIUS: f32 = 120.0;
pub const GLOW_ALPHA: f32 = 0.5;

// Backdrop
pub const BACKDROP_GRID_ALPHA: f32 = 0.15;
pub const PARTICLE_MIN_SIZE: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;
pub const PARTICLE_MIN_RISE: f32 = 0.5; // px per frame, upward
pub const PARTICLE_RISE_SPAN: f32 = 1.0;
pub const PARTICLE_MIN_ALPHA: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const RECYCLE_BAND_FRACTION: f32 = 0.1; // recycled motes re-enter from the bottom tenth

// Stroke width shared by both grids
pub const GRID_LINE_WIDTH: f32 = 1.0;
