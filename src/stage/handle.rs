use crate::foundation::core::{DVec3, Rgb, TargetId};
use crate::foundation::error::ScrollscapeResult;
use crate::foundation::math::clamp01;
use crate::morph::track::MorphTrack;
use crate::particles::buffers::ParticleBuffers;
use crate::particles::field::{FieldStats, ParticleField};
use crate::reveal::sequence::{RevealHost, RevealSequence, SequenceEvent};
use crate::reveal::state::RevealState;
use crate::scroll::parallax::Parallax;
use crate::scroll::trigger::ScrollDirection;
use crate::stage::config::StageConfig;

/// Entry point that turns a [`StageConfig`] into a running [`StageHandle`].
pub struct Stage;

impl Stage {
    /// Build every component described by `config`.
    #[tracing::instrument(skip_all, fields(reveals = config.reveals.len()))]
    pub fn start(config: &StageConfig) -> ScrollscapeResult<StageHandle> {
        config.validate()?;
        let field = ParticleField::new(&config.particle_config()?)?;
        let runtime = StageRuntime {
            field,
            morph: config.morph.clone(),
            reveals: config.reveals.iter().map(|r| r.build()).collect(),
            parallax: config.parallax.as_ref().map(|p| p.build()),
            progress: None,
        };
        tracing::debug!(
            particles = runtime.field.particles().len(),
            morph = runtime.morph.is_some(),
            "stage started"
        );
        Ok(StageHandle {
            runtime: Some(runtime),
        })
    }

    /// Like [`Stage::start`], but an invalid configuration yields an inert handle whose frames
    /// are empty, leaving the host with its static presentation.
    pub fn start_or_static(config: &StageConfig) -> StageHandle {
        Self::start(config).unwrap_or_else(|err| {
            tracing::warn!(%err, "stage failed to start; falling back to static presentation");
            StageHandle { runtime: None }
        })
    }
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Last scroll progress fed to the stage.
    pub progress: f64,
    /// Particle vertex attributes.
    pub particles: ParticleBuffers,
    /// Morphed SVG path data, when a morph track is configured.
    pub morph_path: Option<String>,
    /// Step index reported to progress observers, when a morph track is configured.
    pub morph_step: Option<usize>,
    /// State of every reveal target, sequence by sequence.
    pub reveals: Vec<(TargetId, RevealState)>,
    /// Parallax offset in percent per layer.
    pub parallax: Vec<(TargetId, f64)>,
    /// Reveal lifecycle events raised during this frame, tagged with the sequence index.
    pub events: Vec<(usize, SequenceEvent)>,
}

struct StageRuntime {
    field: ParticleField,
    morph: Option<MorphTrack>,
    reveals: Vec<RevealSequence>,
    parallax: Option<Parallax>,
    progress: Option<f64>,
}

/// Owner of a running stage. Dropping the handle stops it.
pub struct StageHandle {
    runtime: Option<StageRuntime>,
}

impl StageHandle {
    /// Return `true` until [`StageHandle::stop`] runs; inert handles are never running.
    pub fn is_running(&self) -> bool {
        self.runtime.is_some()
    }

    /// Advance time by `dt` seconds and collect the frame's outputs.
    pub fn frame(&mut self, dt: f64) -> FrameOutput {
        let Some(rt) = self.runtime.as_mut() else {
            return FrameOutput::default();
        };
        rt.field.step(dt);
        let mut events = Vec::new();
        for (i, seq) in rt.reveals.iter_mut().enumerate() {
            events.extend(seq.advance(dt).into_iter().map(|e| (i, e)));
        }
        if let Some(parallax) = rt.parallax.as_mut() {
            parallax.advance(dt);
        }
        rt.output(events)
    }

    /// Feed a new scroll progress in `[0, 1]`; NaN is ignored.
    pub fn scroll(&mut self, p: f64) {
        let Some(rt) = self.runtime.as_mut() else {
            return;
        };
        if p.is_nan() {
            return;
        }
        let p = clamp01(p);
        let direction = rt
            .progress
            .and_then(|prev| ScrollDirection::between(prev, p))
            .unwrap_or_default();
        rt.progress = Some(p);
        for seq in &mut rt.reveals {
            seq.on_scroll_progress(p, direction);
        }
        if let Some(parallax) = rt.parallax.as_mut() {
            parallax.set_progress(p);
        }
    }

    /// Push nearby particles away from `origin`.
    pub fn impulse(&mut self, origin: DVec3, strength: f64) {
        if let Some(rt) = self.runtime.as_mut() {
            rt.field.apply_impulse(origin, strength);
        }
    }

    /// Recolor the particle field.
    pub fn set_tint(&mut self, color: Rgb) {
        if let Some(rt) = self.runtime.as_mut() {
            rt.field.set_tint(color);
        }
    }

    /// One-shot horizontal gust on every particle.
    pub fn push_wind(&mut self, wind_x: f64, wind_z: f64) {
        if let Some(rt) = self.runtime.as_mut() {
            rt.field.push_wind(wind_x, wind_z);
        }
    }

    /// Particle field counters; `None` once stopped.
    pub fn stats(&self) -> Option<FieldStats> {
        self.runtime.as_ref().map(|rt| rt.field.stats())
    }

    /// Reveal sequences in configuration order; empty once stopped.
    pub fn reveals_mut(&mut self) -> &mut [RevealSequence] {
        match self.runtime.as_mut() {
            Some(rt) => rt.reveals.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Write every reveal state to `host`, returning how many targets were updated.
    pub fn apply_reveals(&self, host: &mut dyn RevealHost) -> usize {
        self.runtime
            .as_ref()
            .map_or(0, |rt| rt.reveals.iter().map(|seq| seq.apply(&mut *host)).sum())
    }

    /// Release the particle pool, tracks and sequences. Returns `false` when already stopped.
    pub fn stop(&mut self) -> bool {
        match self.runtime.take() {
            Some(rt) => {
                tracing::debug!(stats = ?rt.field.stats(), "stage stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for StageHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl StageRuntime {
    fn output(&self, events: Vec<(usize, SequenceEvent)>) -> FrameOutput {
        let progress = self.progress.unwrap_or(0.0);
        FrameOutput {
            progress,
            particles: self.field.buffers().clone(),
            morph_path: self.morph.as_ref().map(|m| m.path_at(progress)),
            morph_step: self.morph.as_ref().map(|m| m.current_step(progress)),
            reveals: self.reveals.iter().flat_map(RevealSequence::states).collect(),
            parallax: self
                .parallax
                .as_ref()
                .map(Parallax::offsets)
                .unwrap_or_default(),
            events,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/handle.rs"]
mod tests;
