//! Easing functions for counter animations

/// Easing curve selector
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBounce,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutBounce => ease_out_bounce(t),
        }
    }
}

/// Piecewise quadratic bounce with four segments.
///
/// The coefficients are the widely used reference constants; they define the
/// behavioral contract and must not be re-derived.
fn ease_out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutBounce,
    ];

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_cubic_is_continuous_at_midpoint() {
        let eps = 1e-9;
        let left = Easing::EaseInOutCubic.apply(0.5 - eps);
        let right = Easing::EaseInOutCubic.apply(0.5 + eps);
        assert!((left - right).abs() < 1e-7);
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn bounce_is_continuous_at_segment_breakpoints() {
        let eps = 1e-9;
        for breakpoint in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let left = ease_out_bounce(breakpoint - eps);
            let right = ease_out_bounce(breakpoint + eps);
            assert!(
                (left - right).abs() < 1e-6,
                "discontinuity at {breakpoint}: {left} vs {right}"
            );
        }
    }

    #[test]
    fn bounce_stays_within_unit_interval() {
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let v = ease_out_bounce(t);
            assert!((0.0..=1.0).contains(&v), "bounce({t}) = {v}");
        }
    }

    #[test]
    fn linear_and_out_cubic_are_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            let mut prev = easing.apply(0.0);
            for i in 1..=1000 {
                let v = easing.apply(i as f64 / 1000.0);
                assert!(v >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_cubic_decelerates_toward_one() {
        // Second half of the curve covers less ground than the first half.
        let first = Easing::EaseOutCubic.apply(0.5) - Easing::EaseOutCubic.apply(0.0);
        let second = Easing::EaseOutCubic.apply(1.0) - Easing::EaseOutCubic.apply(0.5);
        assert!(first > second);
    }
}
