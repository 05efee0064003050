use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::animation::tween::Tween;
use crate::foundation::error::{ScrollscapeError, ScrollscapeResult};
use crate::foundation::math::clamp01;
use crate::morph::path::ShapeDescriptor;

/// Shape pinned to a scroll progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphKeyframe {
    /// Scroll progress in `[0, 1]`.
    pub progress: f64,
    /// Shape at `progress`.
    #[serde(alias = "path")]
    pub shape: ShapeDescriptor,
    /// Easing of the segment that arrives at this keyframe; unused on the first keyframe.
    #[serde(default)]
    pub ease: Ease,
}

impl MorphKeyframe {
    /// Linear keyframe.
    pub fn new(progress: f64, shape: ShapeDescriptor) -> Self {
        Self {
            progress,
            shape,
            ease: Ease::Linear,
        }
    }
}

/// Keyframe position for a progress value: blend from `index` toward `index + 1` by `local_t`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ProgressSample {
    /// Index of the keyframe the segment starts at, in `[0, n - 2]`.
    pub index: usize,
    /// Linear position inside the segment, in `[0, 1]`.
    pub local_t: f64,
}

/// Immutable, validated list of morph keyframes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<MorphKeyframe>", into = "Vec<MorphKeyframe>")]
pub struct MorphTrack {
    keys: Vec<MorphKeyframe>,
}

impl MorphTrack {
    /// Validate and wrap `keys`.
    ///
    /// Requires at least two keys with finite progress in `[0, 1]`, strictly increasing.
    #[tracing::instrument(skip(keys), fields(keys = keys.len()))]
    pub fn new(keys: Vec<MorphKeyframe>) -> ScrollscapeResult<Self> {
        if keys.len() < 2 {
            return Err(ScrollscapeError::validation(
                "morph track needs at least 2 keyframes",
            ));
        }
        if keys
            .iter()
            .any(|k| !k.progress.is_finite() || !(0.0..=1.0).contains(&k.progress))
        {
            return Err(ScrollscapeError::validation(
                "keyframe progress must be within [0, 1]",
            ));
        }
        if !keys.windows(2).all(|w| w[0].progress < w[1].progress) {
            return Err(ScrollscapeError::validation(
                "keyframe progress must be strictly increasing",
            ));
        }
        let mismatched = keys
            .windows(2)
            .filter(|w| !w[0].shape.is_compatible(&w[1].shape))
            .count();
        if mismatched > 0 {
            tracing::debug!(mismatched, "morph segments fall back to a hard switch");
        }
        Ok(Self { keys })
    }

    /// Keyframes in progress order.
    pub fn keys(&self) -> &[MorphKeyframe] {
        &self.keys
    }

    /// Locate `p` among the keyframes.
    ///
    /// Monotonic in `p`; `map_progress(0) == (0, 0)` and `map_progress(1) == (n - 2, 1)` when the
    /// track spans `[0, 1]`. Out-of-range and NaN inputs are clamped.
    pub fn map_progress(&self, p: f64) -> ProgressSample {
        let p = clamp01(p);
        let last_segment = self.keys.len() - 2;
        let index = self
            .keys
            .partition_point(|k| k.progress <= p)
            .saturating_sub(1)
            .min(last_segment);

        let a = self.keys[index].progress;
        let b = self.keys[index + 1].progress;
        ProgressSample {
            index,
            local_t: clamp01((p - a) / (b - a)),
        }
    }

    /// Shape at progress `p`.
    pub fn shape_at(&self, p: f64) -> ShapeDescriptor {
        let s = self.map_progress(p);
        let from = &self.keys[s.index];
        let to = &self.keys[s.index + 1];
        ShapeDescriptor::lerp(&from.shape, &to.shape, to.ease.apply(s.local_t))
    }

    /// SVG path data at progress `p`.
    pub fn path_at(&self, p: f64) -> String {
        self.shape_at(p).to_string()
    }

    /// Step index reported to progress observers: `min(floor(p * (n - 1)), n - 2)`.
    pub fn current_step(&self, p: f64) -> usize {
        let segments = self.keys.len() - 1;
        let step = (clamp01(p) * segments as f64).floor() as usize;
        step.min(segments - 1)
    }

    /// Tween from the shape at `p` to an arbitrary `target`, starting immediately.
    pub fn morph_to(
        &self,
        p: f64,
        target: ShapeDescriptor,
        duration: f64,
        ease: Ease,
    ) -> Tween<ShapeDescriptor> {
        Tween {
            from: self.shape_at(p),
            to: target,
            delay: 0.0,
            duration,
            ease,
        }
    }

    /// Tween from the shape at `p` to keyframe `index`; `None` when the index is out of range.
    pub fn morph_to_step(
        &self,
        p: f64,
        index: usize,
        duration: f64,
    ) -> Option<Tween<ShapeDescriptor>> {
        let target = self.keys.get(index)?.shape.clone();
        Some(self.morph_to(p, target, duration, Ease::InOutCubic))
    }
}

impl TryFrom<Vec<MorphKeyframe>> for MorphTrack {
    type Error = ScrollscapeError;

    fn try_from(keys: Vec<MorphKeyframe>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<MorphTrack> for Vec<MorphKeyframe> {
    fn from(track: MorphTrack) -> Self {
        track.keys
    }
}

/// Evenly spaced track of `steps + 1` keyframes interpolated from `start` to `end`.
pub fn create_morph_steps(
    start: &ShapeDescriptor,
    end: &ShapeDescriptor,
    steps: usize,
) -> ScrollscapeResult<MorphTrack> {
    if steps == 0 {
        return Err(ScrollscapeError::validation("morph steps must be >= 1"));
    }
    let keys = (0..=steps)
        .map(|i| {
            let progress = i as f64 / steps as f64;
            MorphKeyframe {
                progress,
                shape: ShapeDescriptor::lerp(start, end, progress),
                ease: Ease::InOutCubic,
            }
        })
        .collect();
    MorphTrack::new(keys)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/track.rs"]
mod tests;
