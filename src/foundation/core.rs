use crate::foundation::error::{ScrollscapeError, ScrollscapeResult};
use crate::foundation::math::Rng64;

pub use glam::DVec3;
pub use kurbo::BezPath;

/// Host-side identifier of an animated element (a DOM id, node name, layer key).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Closed interval `[min, max]` along one axis.
///
/// Serialized as a two-element array `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a range; no ordering check is performed (see [`AxisRange::validate`]).
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reject non-finite or inverted ranges.
    pub fn validate(self, axis: &str) -> ScrollscapeResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ScrollscapeError::validation(format!(
                "bounds.{axis} must be finite"
            )));
        }
        if self.min > self.max {
            return Err(ScrollscapeError::validation(format!(
                "bounds.{axis} min must be <= max"
            )));
        }
        Ok(())
    }

    /// Width of the interval.
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Return `true` when `v` lies inside the closed interval.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Clamp `v` into the interval.
    pub fn clamp(self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// Uniform sample in `[min, max)`.
    pub fn sample(self, rng: &mut Rng64) -> f64 {
        self.min + rng.next_f64_01() * self.span()
    }
}

impl From<[f64; 2]> for AxisRange {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<AxisRange> for [f64; 2] {
    fn from(r: AxisRange) -> Self {
        [r.min, r.max]
    }
}

/// Axis-aligned box that confines a particle field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds3 {
    /// Horizontal extent.
    pub x: AxisRange,
    /// Vertical extent; `y.max` is the respawn plane.
    pub y: AxisRange,
    /// Depth extent.
    pub z: AxisRange,
}

impl Bounds3 {
    /// Cube `[-half, half]` on every axis.
    pub fn symmetric(half: f64) -> Self {
        let r = AxisRange::new(-half, half);
        Self { x: r, y: r, z: r }
    }

    /// Validate every axis.
    pub fn validate(&self) -> ScrollscapeResult<()> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")
    }

    /// Return `true` when `p` lies inside the box (inclusive).
    pub fn contains(&self, p: DVec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Uniform sample inside the box.
    pub fn sample(&self, rng: &mut Rng64) -> DVec3 {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        let z = self.z.sample(rng);
        DVec3::new(x, y, z)
    }

    /// Uniform sample on the top plane (`y = y.max`).
    pub fn sample_top(&self, rng: &mut Rng64) -> DVec3 {
        let x = self.x.sample(rng);
        let z = self.z.sample(rng);
        DVec3::new(x, self.y.max, z)
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

/// Linear RGB color with channels in `[0, 1]`.
///
/// Deserializes from `"#rrggbb"`, a packed integer (`0x4ade80`), `[r, g, b]` or
/// `{ "r": .., "g": .., "b": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Build a color from channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_u32(hex: u32) -> Self {
        let r = (hex >> 16) & 0xff;
        let g = (hex >> 8) & 0xff;
        let b = hex & 0xff;
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Multiply every channel by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Channels as `f32` for vertex buffers.
    pub fn to_f32_array(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::str::FromStr for Rgb {
    type Err = ScrollscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map_err(ScrollscapeError::validation)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Packed(u32),
            Obj { r: f64, g: f64, b: f64 },
            Arr([f64; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Packed(v) => {
                if v > 0x00ff_ffff {
                    return Err(serde::de::Error::custom(
                        "packed color must fit in 0xRRGGBB",
                    ));
                }
                Ok(Self::from_u32(v))
            }
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let v = u32::from_str_radix(s, 16).map_err(|_| format!("invalid hex color \"{s}\""))?;
    Ok(Rgb::from_u32(v))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
