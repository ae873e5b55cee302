// Element ids auto-mounted on start
pub const PORTRAIT_CARD_ID: &str = "portrait-card";
pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";
pub const GLITCH_TITLE_ID: &str = "glitch-title";

// Optional per-element overrides
pub const ATTR_PIXEL_SRC: &str = "data-pixel-src";
pub const ATTR_VOLUMETRIC_SRC: &str = "data-volumetric-src";
pub const ATTR_PARTICLES: &str = "data-particles";
pub const ATTR_TEXT: &str = "data-text";

// Avatar sources (16-bit look and the shaded "3D" look)
pub const PIXEL_AVATAR_URL: &str =
    "https://api.dicebear.com/9.x/pixel-art/png?seed=Gamer&backgroundColor=transparent";
pub const VOLUMETRIC_AVATAR_URL: &str =
    "https://api.dicebear.com/9.x/fun-emoji/png?seed=Gamer&backgroundColor=transparent";

// Portrait card backing size when the canvas has no explicit width/height
pub const CARD_WIDTH_PX: u32 = 320;
pub const CARD_HEIGHT_PX: u32 = 450;

// Upper bound for `data-particles`, keeps a typo from stalling the page
pub const MAX_PARTICLES: usize = 2_000;
