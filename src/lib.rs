//! Scrollscape is the motion core of a scroll-driven landing page.
//!
//! It owns the state that a browser page would otherwise keep in effect hooks and hands back
//! plain values for whatever layer draws them (DOM, WebGL, a native window, a video renderer).
//!
//! # Components
//!
//! - **Particle field** ([`ParticleField`]): a fixed pool of particles integrated under wind and
//!   gravity, bounced off an axis-aligned box and recycled at end of life. Each frame produces
//!   [`ParticleBuffers`] (positions, faded colors and sizes as `f32`).
//! - **Path morph** ([`MorphTrack`]): maps scroll progress to a keyframe segment and blends SVG
//!   path data ([`ShapeDescriptor`]) command by command.
//! - **Reveals** ([`RevealSequence`]): staggered element entrances sharing one play-head,
//!   restarted by a [`TriggerRegion`].
//! - **Scroll helpers**: [`Parallax`] offsets, [`SmoothScroller`] eased follow, [`ScrollRange`].
//! - **Stage** ([`Stage`], [`StageHandle`]): builds all of the above from a JSON
//!   [`StageConfig`] and drives them frame by frame until stopped.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every random draw comes from a seeded per-particle stream, so a field
//!   steps identically with or without the rayon pool.
//! - **Errors at construction only**: per-frame calls never fail; bad input is rejected when
//!   configs, tracks and paths are built.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod morph;
mod particles;
mod reveal;
mod scroll;
mod stage;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::tween::Tween;
pub use foundation::core::{AxisRange, BezPath, Bounds3, DVec3, Rgb, TargetId};
pub use foundation::error::{ScrollscapeError, ScrollscapeResult};
pub use foundation::math::{DISTANCE_EPSILON, Rng64, clamp01, finite_or};
pub use morph::path::{CommandKind, PathCommand, ShapeDescriptor};
pub use morph::track::{MorphKeyframe, MorphTrack, ProgressSample, create_morph_steps};
pub use particles::buffers::ParticleBuffers;
pub use particles::config::{ParticleConfig, ParticleOverrides, Threading};
pub use particles::field::{FieldStats, ParticleField};
pub use particles::particle::Particle;
pub use reveal::entry::{RevealEntry, RevealPreset};
pub use reveal::sequence::{LeaveAction, RevealHost, RevealSequence, SequenceEvent};
pub use reveal::state::{RevealPatch, RevealState};
pub use scroll::parallax::{Parallax, ParallaxLayer};
pub use scroll::smooth::{ScrollFrame, SmoothScrollOptions, SmoothScroller};
pub use scroll::trigger::{ScrollDirection, ScrollRange, TriggerEvent, TriggerRegion};
pub use stage::config::{
    ParallaxConfig, RevealElementConfig, RevealSequenceConfig, StageConfig,
};
pub use stage::handle::{FrameOutput, Stage, StageHandle};
