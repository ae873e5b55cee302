// Host-side tests for engine tuning constants and their relationships.

use portfolio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn visibility_thresholds_overlap_for_cross_fade() {
    // both avatars must be on screen somewhere in the middle of the morph
    assert!(VOLUMETRIC_VISIBLE_ABOVE < PIXEL_VISIBLE_BELOW);
    assert!(JITTER_ABOVE > VOLUMETRIC_VISIBLE_ABOVE);
    assert!(GLOW_ABOVE < 1.0 && GLOW_ABOVE > JITTER_ABOVE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_in_unit_range() {
    for a in [CARD_GRID_MAX_ALPHA, GLOW_ALPHA, BACKDROP_GRID_ALPHA] {
        assert!((0.0..=1.0).contains(&a));
    }
    assert!(PARTICLE_MIN_ALPHA + PARTICLE_ALPHA_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_always_rise() {
    assert!(PARTICLE_MIN_RISE > 0.0);
    assert!(PARTICLE_RISE_SPAN >= 0.0);
    assert!(RECYCLE_BAND_FRACTION > 0.0 && RECYCLE_BAND_FRACTION <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_ring_is_larger_than_its_core() {
    assert!(GLOW_OUTER_RADIUS > GLOW_INNER_RADIUS);
    assert!(VOLUMETRIC_AVATAR_SIZE > PIXEL_AVATAR_SIZE);
}
