//! Serenata is a headless animation engine for a single-page scrolling
//! greeting: damped scroll smoothing, one-shot reveal styling, per-layer
//! parallax offsets, seeded decorative layouts, and the celebration flow.
//!
//! The engine derives a style tuple per tracked element each frame; the host
//! rendering surface applies them as transforms and never shares state with
//! the engine beyond [`session::FrameInput`].
#![forbid(unsafe_code)]

pub mod audio;
pub mod celebration;
pub mod ease;
pub mod error;
pub mod page;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod session;
pub mod smooth;

pub use audio::{MusicControl, PlaybackSink};
pub use celebration::{Celebration, CelebrationState};
pub use ease::Ease;
pub use error::{SerenataError, SerenataResult};
pub use page::Page;
pub use parallax::{ParallaxConfig, ParallaxLayer};
pub use particles::{BurstHeart, Particle, heart_burst, particle_field, seeded_unit};
pub use reveal::{RevealStyle, RevealTracker};
pub use scroll::{ScrollSampler, Viewport};
pub use session::{ElementRect, FrameInput, FrameStyles, PageSession};
pub use smooth::{Damped, lerp};
