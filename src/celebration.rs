use crate::particles::{BurstHeart, heart_burst};

/// Number of hearts in the celebration explosion.
pub const BURST_HEART_COUNT: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CelebrationState {
    Hidden,
    Visible,
}

/// The celebration overlay flow: `Hidden -> Visible` on accept, back to
/// `Hidden` on dismiss. Transitions are immediate and unguarded, and nothing
/// is persisted — a reload starts over at `Hidden`.
///
/// The burst layout is regenerated on every accept from the same seed, so
/// repeated open/close cycles produce bit-identical layouts.
#[derive(Clone, Debug)]
pub struct Celebration {
    seed: u64,
    state: CelebrationState,
    layout: Option<Vec<BurstHeart>>,
}

impl Celebration {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: CelebrationState::Hidden,
            layout: None,
        }
    }

    pub fn state(&self) -> CelebrationState {
        self.state
    }

    /// The explosion layout while visible; `None` when hidden.
    pub fn layout(&self) -> Option<&[BurstHeart]> {
        match self.state {
            CelebrationState::Visible => self.layout.as_deref(),
            CelebrationState::Hidden => None,
        }
    }

    /// The accept action. Mounts the overlay and generates exactly one layout.
    pub fn accept(&mut self) {
        tracing::debug!(seed = self.seed, "celebration opened");
        self.layout = Some(heart_burst(self.seed, BURST_HEART_COUNT));
        self.state = CelebrationState::Visible;
    }

    /// The close action. Unmounts the overlay; the stale layout is dropped.
    pub fn dismiss(&mut self) {
        tracing::debug!("celebration closed");
        self.state = CelebrationState::Hidden;
        self.layout = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_with_no_layout() {
        let c = Celebration::new(11);
        assert_eq!(c.state(), CelebrationState::Hidden);
        assert!(c.layout().is_none());
    }

    #[test]
    fn accept_mounts_one_layout() {
        let mut c = Celebration::new(11);
        c.accept();
        assert_eq!(c.state(), CelebrationState::Visible);
        let layout = c.layout().unwrap();
        assert_eq!(layout.len(), BURST_HEART_COUNT);
    }

    #[test]
    fn dismiss_returns_to_hidden() {
        let mut c = Celebration::new(11);
        c.accept();
        c.dismiss();
        assert_eq!(c.state(), CelebrationState::Hidden);
        assert!(c.layout().is_none());
    }

    #[test]
    fn repeated_cycles_are_identical() {
        let mut c = Celebration::new(11);
        c.accept();
        let first = c.layout().unwrap().to_vec();
        c.dismiss();
        c.accept();
        assert_eq!(c.layout().unwrap(), first.as_slice());
    }
}
