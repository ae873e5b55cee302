// Host-side tests for the web frontend constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [PORTRAIT_CARD_ID, BACKDROP_CANVAS_ID, GLITCH_TITLE_ID];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.contains(' '), "{id} must be a valid element id");
    }
    assert_ne!(PORTRAIT_CARD_ID, BACKDROP_CANVAS_ID);
    assert_ne!(BACKDROP_CANVAS_ID, GLITCH_TITLE_ID);
    assert_ne!(PORTRAIT_CARD_ID, GLITCH_TITLE_ID);
}

#[test]
fn override_attributes_are_data_attributes() {
    for attr in [ATTR_PIXEL_SRC, ATTR_VOLUMETRIC_SRC, ATTR_PARTICLES, ATTR_TEXT] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
fn avatar_urls_are_https() {
    assert!(PIXEL_AVATAR_URL.starts_with("https://"));
    assert!(VOLUMETRIC_AVATAR_URL.starts_with("https://"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_canvas_fits_inset_card_and_avatars() {
    // 20px inset on each side must still leave room for the largest avatar
    assert!(CARD_WIDTH_PX as f32 - 40.0 >= 200.0);
    assert!(CARD_HEIGHT_PX > CARD_WIDTH_PX);
    assert!(MAX_PARTICLES >= 50);
}
