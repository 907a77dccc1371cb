//! Interpolation and clamping helpers.
//!
//! Every per-frame rate in the pipeline is expressed as `rate × dt` and fed
//! through [`lerp`], which caps the step at the target. A long frame can
//! therefore reach the target but never overshoot it.

/// Linear interpolation with `t` clamped to 0.0–1.0.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    a + (b - a) * t
}

/// Unclamped linear interpolation, used to shape presets from a unit input.
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp into 0.0–1.0; NaN maps to 0.0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Sanitize a frame delta: non-finite or negative deltas become 0.0.
pub fn sanitize_delta(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_caps_step() {
        assert_eq!(lerp(0.0, 1.0, 0.25), 0.25);
        assert_eq!(lerp(0.0, 1.0, 3.0), 1.0);
        assert_eq!(lerp(0.5, 1.0, -1.0), 0.5);
        assert_eq!(lerp(0.5, 1.0, f64::NAN), 0.5);
    }

    #[test]
    fn test_mix_extrapolates() {
        assert_eq!(mix(5.0, 20.0, 0.0), 5.0);
        assert_eq!(mix(5.0, 20.0, 1.0), 20.0);
        assert_eq!(mix(-2.0, -8.0, 0.5), -5.0);
    }

    #[test]
    fn test_sanitize_delta() {
        assert_eq!(sanitize_delta(0.016), 0.016);
        assert_eq!(sanitize_delta(-1.0), 0.0);
        assert_eq!(sanitize_delta(f64::NAN), 0.0);
        assert_eq!(sanitize_delta(f64::INFINITY), 0.0);
    }
}
