#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::OutCubic] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in [Ease::Linear, Ease::OutCubic] {
            assert_eq!(ease.apply(-0.5), 0.0);
            assert_eq!(ease.apply(1.5), 1.0);
        }
    }

    #[test]
    fn out_cubic_stays_monotonic_and_decelerates() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Ease::OutCubic.apply(i as f64 / 100.0);
            assert!(v > prev);
            prev = v;
        }
        // More ground covered in the first half than the second.
        let early = Ease::OutCubic.apply(0.5);
        assert!(early > 1.0 - early);
        assert_eq!(early, 0.875);
    }
}
