use crate::animation::lerp::Lerp;

/// CSS-like visual state of a revealed element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealState {
    /// Opacity in `[0, 1]`; `0` also hides the element from hit-testing.
    pub opacity: f64,
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl RevealState {
    /// Default state before a reveal: transparent, 30px low, slightly shrunk.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        x: 0.0,
        y: 30.0,
        scale: 0.9,
        rotation: 0.0,
    };

    /// Default state after a reveal: identity transform, fully opaque.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Return `false` when the element should not be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotation
        )
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::SHOWN
    }
}

impl Lerp for RevealState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let l = |x: f64, y: f64| x + (y - x) * t;
        Self {
            opacity: l(a.opacity, b.opacity),
            x: l(a.x, b.x),
            y: l(a.y, b.y),
            scale: l(a.scale, b.scale),
            rotation: l(a.rotation, b.rotation),
        }
    }
}

/// Partial [`RevealState`]; unset fields fall back to a base state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealPatch {
    /// See [`RevealState::opacity`].
    pub opacity: Option<f64>,
    /// See [`RevealState::x`].
    pub x: Option<f64>,
    /// See [`RevealState::y`].
    pub y: Option<f64>,
    /// See [`RevealState::scale`].
    pub scale: Option<f64>,
    /// See [`RevealState::rotation`].
    pub rotation: Option<f64>,
}

impl RevealPatch {
    /// `base` with every set field replaced.
    pub fn over(&self, base: RevealState) -> RevealState {
        RevealState {
            opacity: self.opacity.unwrap_or(base.opacity),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            scale: self.scale.unwrap_or(base.scale),
            rotation: self.rotation.unwrap_or(base.rotation),
        }
    }

    /// Field-wise merge; fields set in `top` win.
    pub fn merged(&self, top: &Self) -> Self {
        Self {
            opacity: top.opacity.or(self.opacity),
            x: top.x.or(self.x),
            y: top.y.or(self.y),
            scale: top.scale.or(self.scale),
            rotation: top.rotation.or(self.rotation),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;
