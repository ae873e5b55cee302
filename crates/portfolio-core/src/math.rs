#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// NaN maps to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Euclidean remainder for positive `m`, always in `[0, m)`.
#[inline]
pub fn wrap(v: f32, m: f32) -> f32 {
    if m <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(m);
    // rem_euclid can round up to exactly `m` for tiny negative inputs
    if r >= m {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
        assert!((lerp(2.0, 8.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn clamp01_handles_nan_and_overshoot() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn wrap_stays_in_range() {
        assert_eq!(wrap(45.0, 40.0), 5.0);
        assert_eq!(wrap(40.0, 40.0), 0.0);
        let w = wrap(-1e-9, 40.0);
        assert!((0.0..40.0).contains(&w));
        assert_eq!(wrap(3.0, 0.0), 0.0);
    }
}
