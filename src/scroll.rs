use crate::{
    error::{SerenataError, SerenataResult},
    smooth::Damped,
};

/// Damping factor for the primary scroll smoother.
pub const SCROLL_DAMPING: f64 = 0.08;

/// Viewport geometry supplied by the host each frame.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible height in pixels.
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> SerenataResult<Self> {
        if !(height > 0.0) {
            return Err(SerenataError::validation("viewport height must be > 0"));
        }
        Ok(Self { height })
    }

    /// Vertical midpoint of the visible window.
    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }
}

/// Exposes the raw scroll offset as a smoothed value.
///
/// Scroll events call [`ScrollSampler::record`] unconditionally; the frame
/// loop calls [`ScrollSampler::tick`]. The two sides share only the damped
/// pair, so teardown is simply dropping the sampler with its owning session.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSampler {
    value: Damped,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self {
            value: Damped::from_parts(0.0, SCROLL_DAMPING),
        }
    }

    /// Record a raw scroll offset. Every event updates the target; there is no
    /// debouncing.
    pub fn record(&mut self, raw_offset: f64) {
        self.value.set_target(raw_offset);
    }

    /// Advance the smoothed offset one frame. `Some` only on visually
    /// significant change.
    pub fn tick(&mut self) -> Option<f64> {
        self.value.tick()
    }

    pub fn offset(&self) -> f64 {
        self.value.current()
    }

    pub fn settled(&self) -> bool {
        self.value.settled()
    }
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rejects_non_positive_height() {
        assert!(Viewport::new(0.0).is_err());
        assert!(Viewport::new(-10.0).is_err());
        assert!(Viewport::new(900.0).is_ok());
    }

    #[test]
    fn record_is_decoupled_from_tick() {
        let mut s = ScrollSampler::new();
        s.record(400.0);
        // No frame has run yet; the published offset is untouched.
        assert_eq!(s.offset(), 0.0);
        s.tick();
        assert!(s.offset() > 0.0);
        assert!(s.offset() < 400.0);
    }

    #[test]
    fn latest_event_wins() {
        let mut s = ScrollSampler::new();
        s.record(400.0);
        s.record(120.0);
        for _ in 0..10_000 {
            s.tick();
            if s.settled() {
                break;
            }
        }
        assert_eq!(s.offset(), 120.0);
    }
}
