use crate::error::SerenataResult;

/// The host's handle to the actual playback resource (a media element, a
/// decoder, a test double). `play` may fail — hosts commonly block autoplay
/// until the user has interacted with the page.
pub trait PlaybackSink {
    fn play(&mut self) -> SerenataResult<()>;
    fn pause(&mut self);
}

/// Owned state cell for the background-music toggle.
///
/// A blocked `play` arms a one-shot retry: the next user interaction attempts
/// playback once more, then the retry is disarmed whether or not it worked.
/// Each blocked attempt arms at most one retry.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicControl {
    playing: bool,
    retry_armed: bool,
}

impl MusicControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    #[cfg(test)]
    fn retry_armed(&self) -> bool {
        self.retry_armed
    }

    /// Flip the toggle. Pausing cannot fail; a failed play leaves the toggle
    /// off and defers to the next interaction.
    pub fn toggle(&mut self, sink: &mut dyn PlaybackSink) {
        if self.playing {
            sink.pause();
            self.playing = false;
            self.retry_armed = false;
            return;
        }

        match sink.play() {
            Ok(()) => {
                self.playing = true;
                self.retry_armed = false;
            }
            Err(err) => {
                tracing::debug!(%err, "playback blocked, deferring to next interaction");
                self.retry_armed = true;
            }
        }
    }

    /// Called on any user interaction. Runs the deferred play attempt if one
    /// is armed; a second failure does not re-arm.
    pub fn notify_interaction(&mut self, sink: &mut dyn PlaybackSink) {
        if !self.retry_armed {
            return;
        }
        self.retry_armed = false;
        if sink.play().is_ok() {
            self.playing = true;
        }
    }
}
