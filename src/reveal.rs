use crate::{ease::Ease, scroll::Viewport};

/// Fraction of the viewport height at which a reveal begins (element top
/// entering from below).
pub const REVEAL_START_VH: f64 = 0.92;

/// Fraction of the viewport height at which a reveal completes.
pub const REVEAL_END_VH: f64 = 0.45;

/// Downward offset in pixels of a fully hidden element.
pub const REVEAL_TRANSLATE_PX: f64 = 60.0;

/// Scale of a fully hidden element; settles to 1.0.
pub const REVEAL_SCALE_MIN: f64 = 0.95;

/// Blur radius in pixels of a fully hidden element.
pub const REVEAL_BLUR_PX: f64 = 6.0;

/// Style tuple the host applies to a reveal-tracked element each frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub blur_radius: f64,
}

impl RevealStyle {
    fn from_eased(eased: f64) -> Self {
        Self {
            opacity: eased,
            translate_y: (1.0 - eased) * REVEAL_TRANSLATE_PX,
            scale: REVEAL_SCALE_MIN + eased * (1.0 - REVEAL_SCALE_MIN),
            blur_radius: (1.0 - eased) * REVEAL_BLUR_PX,
        }
    }

    /// The settled style of a fully revealed element.
    pub fn revealed() -> Self {
        Self::from_eased(1.0)
    }
}

/// One-shot reveal progress for a single tracked element.
///
/// Progress follows the measured element position every frame until it reaches
/// 1, at which point the tracker latches and the style is frozen at fully
/// revealed. Scrolling back up never re-hides a triggered element.
#[derive(Clone, Copy, Debug)]
pub struct RevealTracker {
    ease: Ease,
    eased: f64,
    triggered: bool,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::with_ease(Ease::OutCubic)
    }

    /// Track with a specific curve; [`RevealTracker::new`] uses cubic
    /// ease-out.
    pub fn with_ease(ease: Ease) -> Self {
        Self {
            ease,
            eased: 0.0,
            triggered: false,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.eased
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Recompute progress from the element's top edge and derive its style.
    ///
    /// Once triggered this is a constant-time return of the frozen style; the
    /// caller may stop measuring the element entirely.
    pub fn update(&mut self, element_top: f64, viewport: Viewport) -> RevealStyle {
        if self.triggered {
            return RevealStyle::revealed();
        }

        let start = REVEAL_START_VH * viewport.height;
        let end = REVEAL_END_VH * viewport.height;
        let raw = ((start - element_top) / (start - end)).clamp(0.0, 1.0);
        self.eased = self.ease.apply(raw);

        if self.eased >= 1.0 {
            self.eased = 1.0;
            self.triggered = true;
        }
        RevealStyle::from_eased(self.eased)
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(1000.0).unwrap()
    }

    #[test]
    fn hidden_above_start_boundary() {
        let mut t = RevealTracker::new();
        let style = t.update(920.0, vp());
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, REVEAL_TRANSLATE_PX);
        assert_eq!(style.scale, REVEAL_SCALE_MIN);
        assert_eq!(style.blur_radius, REVEAL_BLUR_PX);

        // Below the fold entirely.
        let style = t.update(1500.0, vp());
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn revealed_at_end_boundary() {
        let mut t = RevealTracker::new();
        let style = t.update(450.0, vp());
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.blur_radius, 0.0);
        assert!(t.triggered());

        // Far past the end is still exactly 1, never above.
        let mut t = RevealTracker::new();
        let style = t.update(-300.0, vp());
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn progress_is_monotonic_on_scroll_down() {
        let mut t = RevealTracker::new();
        let mut prev = 0.0;
        // Element top descending through the viewport, 10 px per frame.
        let mut top = 950.0;
        while top > 400.0 {
            let style = t.update(top, vp());
            assert!(style.opacity >= prev);
            assert!((0.0..=1.0).contains(&style.opacity));
            prev = style.opacity;
            top -= 10.0;
        }
        assert!(t.triggered());
    }

    #[test]
    fn triggered_element_stays_revealed_on_scroll_up() {
        let mut t = RevealTracker::new();
        t.update(440.0, vp());
        assert!(t.triggered());

        // Simulated scroll-up pushes the element back down the viewport.
        for top in [700.0, 900.0, 1400.0] {
            let style = t.update(top, vp());
            assert_eq!(style, RevealStyle::revealed());
            assert_eq!(t.progress(), 1.0);
        }
    }

    #[test]
    fn midpoint_is_eased_not_linear() {
        let mut t = RevealTracker::new();
        // Halfway between start (920) and end (450).
        let style = t.update(685.0, vp());
        // Cubic ease-out at t=0.5 is 0.875.
        assert!((style.opacity - 0.875).abs() < 1e-9);
    }

    #[test]
    fn linear_tracker_is_unshaped() {
        let mut t = RevealTracker::with_ease(Ease::Linear);
        let style = t.update(685.0, vp());
        assert_eq!(style.opacity, 0.5);

        // The latch is independent of the curve.
        t.update(400.0, vp());
        assert!(t.triggered());
    }
}
