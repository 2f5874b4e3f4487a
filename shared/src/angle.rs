use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;

/// Reduces any angle (radians) to the equivalent value in `[0, 2π)`.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Decelerating curve used for spin progress: `1 - (1 - t)^3`.
///
/// `t` is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Angular width of one slice when the wheel holds `count` entries.
pub fn arc_size(count: usize) -> f64 {
    TWO_PI / count as f64
}

/// Angle of the bisector of slice `index`, relative to the wheel's own zero.
pub fn slice_center(index: usize, count: usize) -> f64 {
    let arc = arc_size(count);
    index as f64 * arc + arc / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_range_and_idempotence() {
        let samples = [0.0, 1.0, -1.0, TWO_PI, -TWO_PI, 7.5 * PI, -123.456, 1e6, -1e-18];
        for x in samples {
            let n = normalize(x);
            assert!((0.0..TWO_PI).contains(&n), "normalize({x}) = {n}");
            assert!((normalize(n) - n).abs() < EPS);
        }
    }

    #[test]
    fn test_normalize_ignores_full_turns() {
        let x = 0.75;
        for k in -4..=4 {
            let shifted = x + TWO_PI * k as f64;
            assert!((normalize(shifted) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_ease_out_cubic_monotonic() {
        let mut previous = ease_out_cubic(0.0);
        for step in 1..=1000 {
            let value = ease_out_cubic(step as f64 / 1000.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_ease_out_cubic_clamps() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn test_slice_center() {
        assert!((slice_center(0, 4) - PI / 4.0).abs() < EPS);
        assert!((slice_center(1, 3) - PI).abs() < EPS);
    }
}
