//! Easing curves for tree tweens.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    /// Default: quadratic, fast start and soft landing.
    #[default]
    EaseOut,
    EaseInOut,
}

/// Apply `easing` to `t`, clamped to [0, 1].
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(ease(0.0, easing), 0.0, "{easing:?}");
            assert!((ease(1.0, easing) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn default_is_quadratic_ease_out() {
        assert_eq!(Easing::default(), Easing::EaseOut);
        assert_eq!(ease(0.5, Easing::default()), 0.75);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = ease(i as f32 / 100.0, easing);
                assert!(v >= prev - 1e-6, "{easing:?} dips at step {i}");
                prev = v;
            }
        }
    }
}
