use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{AxisRange, TargetId};
use crate::foundation::error::{ScrollscapeError, ScrollscapeResult};
use crate::morph::track::MorphTrack;
use crate::particles::config::{ParticleConfig, ParticleOverrides};
use crate::reveal::entry::{RevealEntry, RevealPreset};
use crate::reveal::sequence::{LeaveAction, RevealSequence};
use crate::reveal::state::RevealPatch;
use crate::scroll::parallax::{Parallax, ParallaxLayer};
use crate::scroll::trigger::TriggerRegion;

/// JSON document describing everything a [`crate::Stage`] drives.
///
/// Every section is optional; an empty object yields a default particle field and nothing else.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    /// Particle options layered over [`ParticleConfig::default`].
    pub particles: ParticleOverrides,
    /// Scroll-driven path morph.
    pub morph: Option<MorphTrack>,
    /// Independent reveal sequences, each with its own trigger region.
    pub reveals: Vec<RevealSequenceConfig>,
    /// Parallax layers.
    pub parallax: Option<ParallaxConfig>,
}

impl StageConfig {
    /// Parse and validate a stage document.
    pub fn from_json_str(s: &str) -> ScrollscapeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a stage document from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollscapeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a stage document from disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ScrollscapeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollscapeError::config(format!("open stage JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolved particle configuration.
    pub fn particle_config(&self) -> ScrollscapeResult<ParticleConfig> {
        ParticleConfig::from_overrides(&self.particles).validated()
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> ScrollscapeResult<()> {
        self.particle_config()?;
        for (i, seq) in self.reveals.iter().enumerate() {
            seq.validate()
                .map_err(|e| ScrollscapeError::config(format!("reveals[{i}]: {e}")))?;
        }
        if let Some(parallax) = &self.parallax {
            parallax.validate()?;
        }
        Ok(())
    }
}

/// One element of a reveal sequence, as written in a stage document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealElementConfig {
    /// Element to animate.
    pub target: TargetId,
    /// Extra seconds added to the element's staggered offset.
    #[serde(default)]
    pub delay: f64,
    /// Animation length; defaults to [`RevealEntry::DEFAULT_DURATION`].
    #[serde(default)]
    pub duration: Option<f64>,
    /// Named entrance style applied before `from`/`to`.
    #[serde(default)]
    pub preset: Option<RevealPreset>,
    /// Fields overriding the starting state.
    #[serde(default)]
    pub from: RevealPatch,
    /// Fields overriding the final state.
    #[serde(default)]
    pub to: RevealPatch,
    /// Easing; defaults to the preset's, or `power2.out`.
    #[serde(default)]
    pub ease: Option<Ease>,
}

impl RevealElementConfig {
    /// Resolve into an entry whose start offset is `delay` alone.
    pub fn to_entry(&self) -> RevealEntry {
        let mut entry = RevealEntry::new(self.target.clone());
        if let Some(preset) = self.preset {
            entry = entry.with_preset(preset);
        }
        entry.from = self.from.over(entry.from);
        entry.to = self.to.over(entry.to);
        if let Some(ease) = self.ease {
            entry.ease = ease;
        }
        let duration = self.duration.unwrap_or(RevealEntry::DEFAULT_DURATION);
        entry.at(self.delay).lasting(duration)
    }
}

fn default_stagger() -> f64 {
    0.1
}

fn default_trigger() -> AxisRange {
    AxisRange::new(0.0, 1.0)
}

/// A staggered reveal sequence and the scroll region that starts it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealSequenceConfig {
    /// Elements in stagger order.
    pub elements: Vec<RevealElementConfig>,
    /// Seconds between consecutive elements.
    #[serde(default = "default_stagger")]
    pub stagger: f64,
    /// Seconds before the first element.
    #[serde(default)]
    pub global_delay: f64,
    /// Progress band `[start, end]` that starts the sequence.
    #[serde(default = "default_trigger")]
    pub trigger: AxisRange,
    /// Behavior when scrolling forward past the end.
    #[serde(default)]
    pub on_leave: LeaveAction,
    /// Behavior when scrolling backward past the start.
    #[serde(default)]
    pub on_leave_back: LeaveAction,
}

impl RevealSequenceConfig {
    /// Reject negative or non-finite timing and ill-formed trigger bands.
    pub fn validate(&self) -> ScrollscapeResult<()> {
        let secs = |name: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ScrollscapeError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )))
            }
        };
        secs("stagger", self.stagger)?;
        secs("global_delay", self.global_delay)?;
        for el in &self.elements {
            secs("delay", el.delay)?;
            if let Some(d) = el.duration {
                secs("duration", d)?;
            }
        }
        let AxisRange { min, max } = self.trigger;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ScrollscapeError::validation(format!(
                "trigger must be a finite [start, end] band (got [{min}, {max}])"
            )));
        }
        Ok(())
    }

    /// Build the runtime sequence.
    pub fn build(&self) -> RevealSequence {
        let entries = self.elements.iter().map(RevealElementConfig::to_entry).collect();
        RevealSequence::staggered(
            entries,
            self.stagger,
            self.global_delay,
            TriggerRegion::new(self.trigger.min, self.trigger.max),
        )
        .with_leave_actions(self.on_leave, self.on_leave_back)
    }
}

/// Parallax layers and their shared smoothing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParallaxConfig {
    /// Layers in declaration order.
    pub layers: Vec<ParallaxLayer>,
    /// Smoothing time constant in seconds; absent follows scroll immediately.
    #[serde(default)]
    pub scrub: Option<f64>,
}

impl ParallaxConfig {
    /// Reject non-finite speeds and scrub values.
    pub fn validate(&self) -> ScrollscapeResult<()> {
        if let Some(layer) = self.layers.iter().find(|l| !l.speed.is_finite()) {
            return Err(ScrollscapeError::config(format!(
                "parallax layer '{}' has a non-finite speed",
                layer.target
            )));
        }
        if let Some(scrub) = self.scrub
            && !(scrub.is_finite() && scrub >= 0.0)
        {
            return Err(ScrollscapeError::config(format!(
                "parallax scrub must be finite and >= 0 (got {scrub})"
            )));
        }
        Ok(())
    }

    /// Build the runtime parallax set.
    pub fn build(&self) -> Parallax {
        Parallax::new(self.layers.clone(), self.scrub)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/config.rs"]
mod tests;
