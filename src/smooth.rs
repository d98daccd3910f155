use crate::error::{SerenataError, SerenataResult};

/// Linear interpolation between `start` and `end` by `t`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Distance below which a damped value snaps to its target exactly.
///
/// Without the snap the value approaches the target asymptotically and keeps
/// publishing sub-pixel changes forever.
pub const SNAP_THRESHOLD: f64 = 0.5;

/// A damped current/target pair advanced once per frame.
///
/// Event handlers write the target with [`Damped::set_target`]; the frame loop
/// calls [`Damped::tick`], which steps the current value toward the target by
/// a fixed factor. Each step is a weighted average, so the value converges
/// without overshoot.
#[derive(Clone, Copy, Debug)]
pub struct Damped {
    current: f64,
    target: f64,
    factor: f64,
}

impl Damped {
    /// Create a damped value at `initial` with per-tick factor `factor`.
    ///
    /// `factor` must lie strictly inside `(0, 1)`.
    pub fn new(initial: f64, factor: f64) -> SerenataResult<Self> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(SerenataError::validation(
                "damping factor must be in (0, 1)",
            ));
        }
        Ok(Self {
            current: initial,
            target: initial,
            factor,
        })
    }

    /// Internal constructor for call sites with compile-time-constant factors
    /// already known to be valid.
    pub(crate) const fn from_parts(initial: f64, factor: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            factor,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Record a new target. Called from the event side; never touches
    /// `current`.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// True once `current` has snapped to `target`.
    pub fn settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame. Returns the new current value only when it moved by
    /// a visually significant amount (or snapped); `None` means observers need
    /// not re-render.
    pub fn tick(&mut self) -> Option<f64> {
        if self.settled() {
            return None;
        }

        let next = lerp(self.current, self.target, self.factor);
        if (self.target - next).abs() < SNAP_THRESHOLD {
            self.current = self.target;
            return Some(self.current);
        }

        let moved = (next - self.current).abs() > SNAP_THRESHOLD;
        self.current = next;
        if moved { Some(self.current) } else { None }
    }
}
