use crate::animation::ease::Ease;
use crate::foundation::core::TargetId;
use crate::foundation::math::clamp01;

/// Element that drifts proportionally to scroll progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    /// Element to move.
    pub target: TargetId,
    /// Vertical offset, in percent of the element height, reached at progress `1`.
    ///
    /// Negative values drift up.
    pub speed: f64,
    /// Easing over progress.
    #[serde(default)]
    pub ease: Ease,
}

impl ParallaxLayer {
    /// Offset in percent at progress `p`.
    pub fn offset_percent(&self, p: f64) -> f64 {
        self.speed * self.ease.apply(p)
    }
}

/// Set of layers sharing one scroll progress, with optional lag ("scrub") smoothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
    scrub: Option<f64>,
    target: f64,
    current: f64,
}

impl Parallax {
    /// Build from layers. `scrub` is the smoothing time constant in seconds; `None` or a
    /// non-positive value follows scroll immediately.
    pub fn new(layers: Vec<ParallaxLayer>, scrub: Option<f64>) -> Self {
        Self {
            layers,
            scrub: scrub.filter(|s| *s > 0.0 && s.is_finite()),
            target: 0.0,
            current: 0.0,
        }
    }

    /// Layers in declaration order.
    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Feed the latest scroll progress.
    pub fn set_progress(&mut self, p: f64) {
        self.target = clamp01(p);
        if self.scrub.is_none() {
            self.current = self.target;
        }
    }

    /// Move the smoothed progress toward the target by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let Some(scrub) = self.scrub else {
            return;
        };
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        let k = 1.0 - (-dt / scrub).exp();
        self.current += (self.target - self.current) * k;
        if (self.target - self.current).abs() < 1e-6 {
            self.current = self.target;
        }
    }

    /// Smoothed progress used for offsets.
    pub fn progress(&self) -> f64 {
        self.current
    }

    /// Offset of every layer at the smoothed progress.
    pub fn offsets(&self) -> Vec<(TargetId, f64)> {
        self.layers
            .iter()
            .map(|l| (l.target.clone(), l.offset_percent(self.current)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/parallax.rs"]
mod tests;
