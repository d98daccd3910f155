use std::collections::BTreeMap;

use crate::{
    audio::{MusicControl, PlaybackSink},
    celebration::{Celebration, CelebrationState},
    error::SerenataResult,
    page::Page,
    parallax::{ParallaxConfig, ParallaxLayer},
    particles::{Particle, particle_field},
    reveal::{RevealStyle, RevealTracker},
    scroll::{ScrollSampler, Viewport},
};

/// Size of the ambient floating-particle field behind the finale.
pub const FIELD_PARTICLE_COUNT: usize = 18;

/// A measured element rectangle in viewport coordinates, supplied by the host.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn center_y(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Everything the engine needs from the host for one frame: the raw scroll
/// offset and the current measurements of tracked elements. Elements missing
/// from `rects` (unmounted mid-loop) are skipped for the cycle, never fatal.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    pub scroll: f64,
    pub viewport: Viewport,
    pub rects: BTreeMap<String, ElementRect>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RevealEntry {
    pub id: String,
    pub triggered: bool,
    pub style: RevealStyle,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ParallaxEntry {
    pub id: String,
    pub translate_y: f64,
}

/// Per-frame output graph: the style every mounted animated element should
/// wear this frame, in stable id order. This is the engine's entire contract
/// with the rendering surface.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameStyles {
    pub frame: u64,
    pub scroll: f64,
    /// False when the smoothed scroll moved less than the publish threshold;
    /// hosts may skip repainting scroll-bound decor.
    pub scroll_changed: bool,
    pub reveals: Vec<RevealEntry>,
    pub parallax: Vec<ParallaxEntry>,
    pub celebration: CelebrationState,
}

/// One mounted greeting page: the scroll smoother, a reveal tracker per
/// section, a parallax layer per chapter, the celebration flow and the music
/// toggle. All state is ephemeral; dropping the session is teardown.
pub struct PageSession {
    scroll: ScrollSampler,
    reveals: BTreeMap<String, RevealTracker>,
    parallax: BTreeMap<String, ParallaxLayer>,
    celebration: Celebration,
    music: MusicControl,
    field: Vec<Particle>,
    frame: u64,
}

impl PageSession {
    /// Validate the page and mount trackers for its sections.
    pub fn new(page: &Page) -> SerenataResult<Self> {
        page.validate()?;

        let mut reveals = BTreeMap::new();
        let mut parallax = BTreeMap::new();
        for chapter in &page.chapters {
            reveals.insert(chapter.id.clone(), RevealTracker::new());
            parallax.insert(
                chapter.id.clone(),
                ParallaxLayer::new(ParallaxConfig::new(chapter.parallax_speed)?),
            );
        }
        reveals.insert(page.finale.id.clone(), RevealTracker::new());

        Ok(Self {
            scroll: ScrollSampler::new(),
            reveals,
            parallax,
            celebration: Celebration::new(page.seed),
            music: MusicControl::new(),
            field: particle_field(page.seed, FIELD_PARTICLE_COUNT),
            frame: 0,
        })
    }

    /// The ambient particle field, generated once at mount.
    pub fn field(&self) -> &[Particle] {
        &self.field
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn music(&self) -> &MusicControl {
        &self.music
    }

    /// Smoothed scroll offset as of the last frame.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Advance one animation frame.
    ///
    /// Records the raw scroll offset, ticks the smoother, then re-derives the
    /// style of every tracked element from its measurement. Already-triggered
    /// reveals are emitted frozen without consulting the measurements at all.
    #[tracing::instrument(skip(self, input), fields(frame = self.frame))]
    pub fn advance(&mut self, input: &FrameInput) -> FrameStyles {
        self.scroll.record(input.scroll);
        let scroll_changed = self.scroll.tick().is_some();

        let mut reveals = Vec::with_capacity(self.reveals.len());
        for (id, tracker) in &mut self.reveals {
            let style = if tracker.triggered() {
                RevealStyle::revealed()
            } else {
                match input.rects.get(id) {
                    Some(rect) => tracker.update(rect.top, input.viewport),
                    // Unmounted mid-loop: skip this cycle.
                    None => continue,
                }
            };
            reveals.push(RevealEntry {
                id: id.clone(),
                triggered: tracker.triggered(),
                style,
            });
        }

        let mut parallax = Vec::with_capacity(self.parallax.len());
        for (id, layer) in &mut self.parallax {
            let Some(rect) = input.rects.get(id) else {
                continue;
            };
            layer.retarget(rect.center_y(), input.viewport);
            parallax.push(ParallaxEntry {
                id: id.clone(),
                translate_y: layer.tick(),
            });
        }

        let styles = FrameStyles {
            frame: self.frame,
            scroll: self.scroll.offset(),
            scroll_changed,
            reveals,
            parallax,
            celebration: self.celebration.state(),
        };
        self.frame += 1;
        styles
    }

    /// The accept action: open the celebration overlay.
    pub fn accept(&mut self) {
        self.celebration.accept();
    }

    /// The close action: dismiss the celebration overlay.
    pub fn dismiss(&mut self) {
        self.celebration.dismiss();
    }

    /// Flip the music toggle against the host's playback resource.
    pub fn toggle_music(&mut self, sink: &mut dyn PlaybackSink) {
        self.music.toggle(sink);
    }

    /// Report a user interaction so a blocked play attempt can retry.
    pub fn user_interaction(&mut self, sink: &mut dyn PlaybackSink) {
        self.music.notify_interaction(sink);
    }
}
