use crate::{
    error::{SerenataError, SerenataResult},
    scroll::Viewport,
    smooth::Damped,
};

/// Damping factor for parallax offsets. Slower than the scroll smoother for a
/// softer trailing feel.
pub const PARALLAX_DAMPING: f64 = 0.06;

/// Pixel offset of a layer whose center sits one full viewport height from
/// the viewport center, at speed 1.0.
pub const PARALLAX_MAGNITUDE: f64 = 40.0;

/// Per-layer parallax configuration.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxConfig {
    /// Relative speed; larger values travel farther per scroll distance.
    pub speed: f64,
}

impl ParallaxConfig {
    pub fn new(speed: f64) -> SerenataResult<Self> {
        if !speed.is_finite() {
            return Err(SerenataError::validation("parallax speed must be finite"));
        }
        Ok(Self { speed })
    }
}

/// Damped vertical offset for one parallax layer.
///
/// The offset is presentational only; it never affects layout flow. Scroll
/// events retarget, the frame loop ticks.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxLayer {
    config: ParallaxConfig,
    offset: Damped,
}

impl ParallaxLayer {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config,
            offset: Damped::from_parts(0.0, PARALLAX_DAMPING),
        }
    }

    /// Recompute the target offset from the element's measured center.
    pub fn retarget(&mut self, element_center_y: f64, viewport: Viewport) {
        let distance = (element_center_y - viewport.center_y()) / viewport.height;
        self.offset
            .set_target(distance * PARALLAX_MAGNITUDE * self.config.speed);
    }

    /// Advance one frame and return the translate-Y the host should apply.
    pub fn tick(&mut self) -> f64 {
        self.offset.tick();
        self.offset.current()
    }

    pub fn offset(&self) -> f64 {
        self.offset.current()
    }

    pub fn target_offset(&self) -> f64 {
        self.offset.target()
    }
}
