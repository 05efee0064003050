use crate::foundation::error::ScrollscapeError;

/// Easing functions used to map normalized animation progress.
///
/// Besides the variant names, [`Ease`] parses the timeline-library spellings used in
/// hand-written configs (`"none"`, `"power2.out"`, `"back.out(1.7)"`): `power1` is quadratic,
/// `power2` cubic and `power3` quartic.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Ease-out that overshoots the target by `overshoot` before settling.
    OutBack(f64),
}

impl Ease {
    /// Overshoot used by `back.out` when no parameter is given.
    pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::OutBack(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = ScrollscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("back.out") {
            let overshoot = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                Some(arg) => arg.trim().parse::<f64>().map_err(|_| {
                    ScrollscapeError::validation(format!("invalid back.out overshoot in \"{s}\""))
                })?,
                None if rest.is_empty() => Self::DEFAULT_OVERSHOOT,
                None => {
                    return Err(ScrollscapeError::validation(format!("unknown ease \"{s}\"")));
                }
            };
            return Ok(Self::OutBack(overshoot));
        }

        let ease = match s {
            "none" | "linear" | "Linear" => Self::Linear,
            "power1.in" | "InQuad" => Self::InQuad,
            "power1.out" | "power1" | "OutQuad" => Self::OutQuad,
            "power1.inOut" | "InOutQuad" => Self::InOutQuad,
            "power2.in" | "InCubic" => Self::InCubic,
            "power2.out" | "power2" | "OutCubic" => Self::OutCubic,
            "power2.inOut" | "InOutCubic" => Self::InOutCubic,
            "power3.in" | "InQuart" => Self::InQuart,
            "power3.out" | "power3" | "OutQuart" => Self::OutQuart,
            "power3.inOut" | "InOutQuart" => Self::InOutQuart,
            _ => return Err(ScrollscapeError::validation(format!("unknown ease \"{s}\""))),
        };
        Ok(ease)
    }
}

/// Accepts every spelling [`FromStr`](std::str::FromStr) does, plus the `{ "OutBack": s }` form
/// that serialization produces.
impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Back {
                #[serde(rename = "OutBack")]
                overshoot: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Back { overshoot } => Ok(Self::OutBack(overshoot)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
