use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::core::TargetId;
use crate::reveal::state::{RevealPatch, RevealState};

/// One element's part in a reveal sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealEntry {
    /// Element to animate.
    pub target: TargetId,
    /// Seconds after the sequence starts at which this element begins (`>= 0`).
    pub start_offset: f64,
    /// State before the element starts.
    pub from: RevealState,
    /// State once the element completes.
    pub to: RevealState,
    /// Length of the element's animation in seconds.
    pub duration: f64,
    /// Easing of the element's animation.
    pub ease: Ease,
}

impl RevealEntry {
    /// Duration used when none is given.
    pub const DEFAULT_DURATION: f64 = 0.8;

    /// Entry with the default hidden/shown states, duration and ease, starting at `0`.
    pub fn new(target: impl Into<TargetId>) -> Self {
        Self {
            target: target.into(),
            start_offset: 0.0,
            from: RevealState::HIDDEN,
            to: RevealState::SHOWN,
            duration: Self::DEFAULT_DURATION,
            ease: Ease::OutCubic,
        }
    }

    /// Apply a preset's states and ease.
    pub fn with_preset(mut self, preset: RevealPreset) -> Self {
        let (from, to) = preset.patches();
        self.from = from.over(RevealState::HIDDEN);
        self.to = to.over(RevealState::SHOWN);
        self.ease = preset.ease();
        self
    }

    /// Set the start offset; negative and non-finite values become `0`.
    pub fn at(mut self, start_offset: f64) -> Self {
        self.start_offset = sanitize_secs(start_offset);
        self
    }

    /// Set the duration; negative and non-finite values become `0`.
    pub fn lasting(mut self, duration: f64) -> Self {
        self.duration = sanitize_secs(duration);
        self
    }

    /// Offset at which the element reaches `to`.
    pub fn end_offset(&self) -> f64 {
        self.start_offset + self.duration
    }

    /// The element's animation on the sequence play-head.
    pub fn tween(&self) -> Tween<RevealState> {
        Tween {
            from: self.from,
            to: self.to,
            delay: self.start_offset,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

pub(crate) fn sanitize_secs(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Named entrance styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealPreset {
    /// Rise 50px while fading in.
    FadeUp,
    /// Drop 50px while fading in.
    FadeDown,
    /// Slide in from the right while fading in.
    FadeLeft,
    /// Slide in from the left while fading in.
    FadeRight,
    /// Grow from nothing with an overshoot.
    ScaleIn,
    /// Spin half a turn while growing, with an overshoot.
    RotateIn,
    /// Rise 100px from below while fading in, with a quartic ease-out.
    SlideUp,
}

impl RevealPreset {
    /// `(from, to)` patches layered over the hidden and shown defaults.
    pub fn patches(self) -> (RevealPatch, RevealPatch) {
        let none = RevealPatch::default();
        let from = match self {
            Self::FadeUp => RevealPatch {
                opacity: Some(0.0),
                y: Some(50.0),
                ..none
            },
            Self::FadeDown => RevealPatch {
                opacity: Some(0.0),
                y: Some(-50.0),
                ..none
            },
            Self::FadeLeft => RevealPatch {
                opacity: Some(0.0),
                x: Some(50.0),
                ..none
            },
            Self::FadeRight => RevealPatch {
                opacity: Some(0.0),
                x: Some(-50.0),
                ..none
            },
            Self::ScaleIn => RevealPatch {
                opacity: Some(0.0),
                scale: Some(0.0),
                ..none
            },
            Self::RotateIn => RevealPatch {
                opacity: Some(0.0),
                rotation: Some(180.0),
                scale: Some(0.5),
                ..none
            },
            Self::SlideUp => RevealPatch {
                opacity: Some(0.0),
                y: Some(100.0),
                ..none
            },
        };
        let to = match self {
            Self::FadeUp | Self::FadeDown | Self::SlideUp => RevealPatch {
                opacity: Some(1.0),
                y: Some(0.0),
                ..none
            },
            Self::FadeLeft | Self::FadeRight => RevealPatch {
                opacity: Some(1.0),
                x: Some(0.0),
                ..none
            },
            Self::ScaleIn => RevealPatch {
                opacity: Some(1.0),
                scale: Some(1.0),
                ..none
            },
            Self::RotateIn => RevealPatch {
                opacity: Some(1.0),
                rotation: Some(0.0),
                scale: Some(1.0),
                ..none
            },
        };
        (from, to)
    }

    /// Ease paired with the preset.
    pub fn ease(self) -> Ease {
        match self {
            Self::ScaleIn | Self::RotateIn => Ease::OutBack(1.7),
            Self::SlideUp => Ease::OutQuart,
            _ => Ease::OutCubic,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/entry.rs"]
mod tests;
