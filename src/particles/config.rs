use crate::foundation::core::{AxisRange, Bounds3, Rgb};
use crate::foundation::error::{ScrollscapeError, ScrollscapeResult};

/// Per-field parallelism controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Threading {
    /// Integrate particles on the rayon pool.
    pub parallel: bool,
    /// Pools smaller than this stay on the calling thread.
    pub min_parallel_count: usize,
}

impl Default for Threading {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_count: 4096,
        }
    }
}

/// Fully resolved particle field configuration.
///
/// Every option has an explicit default; partial configs go through [`ParticleOverrides`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleConfig {
    /// Pool size. The pool never grows or shrinks.
    pub count: usize,
    /// Base point size.
    pub size: f64,
    /// Relative per-particle size jitter.
    pub size_variation: f64,
    /// Shared tint.
    pub color: Rgb,
    /// Relative per-particle brightness jitter.
    pub color_variation: f64,
    /// Material opacity handed to the renderer.
    pub opacity: f64,
    /// Width of the uniform spawn velocity distribution on each axis.
    pub speed: f64,
    /// Amplitude of the horizontal wind signals.
    pub wind_force: f64,
    /// Constant vertical acceleration.
    pub gravity: f64,
    /// Fraction of velocity kept (sign flipped) after hitting a wall.
    pub bounce: f64,
    /// Confining box.
    pub bounds: Bounds3,
    /// Lifetime range in seconds, sampled per spawn.
    pub lifetime: AxisRange,
    /// Radius affected by [`crate::ParticleField::apply_impulse`].
    pub impulse_radius: f64,
    /// Seed for every random draw in the field.
    pub seed: u64,
    /// Parallelism controls.
    pub threading: Threading,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            size: 1.0,
            size_variation: 0.5,
            color: Rgb::WHITE,
            color_variation: 0.2,
            opacity: 0.8,
            speed: 1.0,
            wind_force: 0.1,
            gravity: -0.01,
            bounce: 0.3,
            bounds: Bounds3::default(),
            lifetime: AxisRange::new(1.0, 3.0),
            impulse_radius: 5.0,
            seed: 0,
            threading: Threading::default(),
        }
    }
}

impl ParticleConfig {
    /// Largest accepted bounce coefficient; `1.0` itself would never lose energy.
    pub const MAX_BOUNCE: f64 = 1.0 - 1e-6;

    /// Defaults with `overrides` applied on top.
    pub fn from_overrides(overrides: &ParticleOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    /// Apply every `Some` field of `overrides`, including explicit zeros.
    pub fn with_overrides(mut self, o: &ParticleOverrides) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = o.$field { self.$field = v; })*
            };
        }
        take!(
            count,
            size,
            size_variation,
            color,
            color_variation,
            opacity,
            speed,
            wind_force,
            gravity,
            bounce,
            bounds,
            lifetime,
            impulse_radius,
            seed,
            threading,
        );
        self
    }

    /// Check static invariants and return a copy with `bounce` clamped into `[0, 1)`.
    pub fn validated(&self) -> ScrollscapeResult<Self> {
        self.bounds.validate()?;
        self.lifetime.validate("lifetime")?;
        if self.lifetime.min <= 0.0 {
            return Err(ScrollscapeError::validation("lifetime min must be > 0"));
        }
        let finite = [
            ("size", self.size),
            ("size_variation", self.size_variation),
            ("color_variation", self.color_variation),
            ("opacity", self.opacity),
            ("speed", self.speed),
            ("wind_force", self.wind_force),
            ("gravity", self.gravity),
            ("bounce", self.bounce),
            ("impulse_radius", self.impulse_radius),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScrollscapeError::validation(format!(
                "particle {name} must be finite"
            )));
        }

        let mut out = self.clone();
        out.bounce = out.bounce.clamp(0.0, Self::MAX_BOUNCE);
        out.impulse_radius = out.impulse_radius.max(0.0);
        out.opacity = crate::foundation::math::clamp01(out.opacity);
        Ok(out)
    }
}

/// Partial particle configuration, as written in stage documents.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleOverrides {
    /// See [`ParticleConfig::count`].
    pub count: Option<usize>,
    /// See [`ParticleConfig::size`].
    pub size: Option<f64>,
    /// See [`ParticleConfig::size_variation`].
    pub size_variation: Option<f64>,
    /// See [`ParticleConfig::color`].
    pub color: Option<Rgb>,
    /// See [`ParticleConfig::color_variation`].
    pub color_variation: Option<f64>,
    /// See [`ParticleConfig::opacity`].
    pub opacity: Option<f64>,
    /// See [`ParticleConfig::speed`].
    pub speed: Option<f64>,
    /// See [`ParticleConfig::wind_force`].
    pub wind_force: Option<f64>,
    /// See [`ParticleConfig::gravity`].
    pub gravity: Option<f64>,
    /// See [`ParticleConfig::bounce`].
    pub bounce: Option<f64>,
    /// See [`ParticleConfig::bounds`].
    pub bounds: Option<Bounds3>,
    /// See [`ParticleConfig::lifetime`].
    pub lifetime: Option<AxisRange>,
    /// See [`ParticleConfig::impulse_radius`].
    pub impulse_radius: Option<f64>,
    /// See [`ParticleConfig::seed`].
    pub seed: Option<u64>,
    /// See [`ParticleConfig::threading`].
    pub threading: Option<Threading>,
}

#[cfg(test)]
#[path = "../../tests/unit/particles/config.rs"]
mod tests;
