/// Easing curves used by the page. Names follow the GSAP power family,
/// where `power1` is quadratic and `power3` is quartic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    #[cfg(test)]
    Linear,
    Power1InOut,
    Power3Out,
}

impl Ease {
    /// Map linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_are_anchored() {
        for ease in [Ease::Linear, Ease::Power1InOut, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn power1_in_out_is_symmetric() {
        let a = Ease::Power1InOut.apply(0.25);
        let b = Ease::Power1InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn power3_out_front_loads_progress() {
        assert!(Ease::Power3Out.apply(0.25) > 0.6);
        assert!(Ease::Power3Out.apply(2.0) == 1.0);
    }
}
