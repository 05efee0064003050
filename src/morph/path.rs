use std::fmt;

use smallvec::SmallVec;

use crate::animation::lerp::Lerp;
use crate::foundation::core::BezPath;
use crate::foundation::error::{ScrollscapeError, ScrollscapeResult};

/// SVG path command family, independent of absolute/relative form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M` / `m`
    MoveTo,
    /// `L` / `l`
    LineTo,
    /// `H` / `h`
    HorizontalTo,
    /// `V` / `v`
    VerticalTo,
    /// `C` / `c`
    CurveTo,
    /// `S` / `s`
    SmoothCurveTo,
    /// `Q` / `q`
    QuadTo,
    /// `T` / `t`
    SmoothQuadTo,
    /// `A` / `a`
    ArcTo,
    /// `Z` / `z`
    Close,
}

impl CommandKind {
    fn from_letter(c: char) -> Option<(Self, bool)> {
        let kind = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalTo,
            'V' => Self::VerticalTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadTo,
            'T' => Self::SmoothQuadTo,
            'A' => Self::ArcTo,
            'Z' => Self::Close,
            _ => return None,
        };
        Some((kind, c.is_ascii_lowercase()))
    }

    fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalTo => 'H',
            Self::VerticalTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadTo => 'Q',
            Self::SmoothQuadTo => 'T',
            Self::ArcTo => 'A',
            Self::Close => 'Z',
        }
    }

    /// Number of values consumed per repetition of the command.
    pub fn arity(self) -> usize {
        match self {
            Self::Close => 0,
            Self::HorizontalTo | Self::VerticalTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuadTo => 2,
            Self::SmoothCurveTo | Self::QuadTo => 4,
            Self::CurveTo => 6,
            Self::ArcTo => 7,
        }
    }
}

/// One command letter with its numeric arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    /// Command family.
    pub kind: CommandKind,
    /// Lowercase (relative) form.
    pub relative: bool,
    /// Arguments in source order; implicit repetitions stay in one command.
    pub values: SmallVec<[f64; 7]>,
}

impl PathCommand {
    /// Return `true` when both commands have the same letter and argument count.
    pub fn same_structure(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.relative == other.relative
            && self.values.len() == other.values.len()
    }

    /// Command letter as written.
    pub fn letter(&self) -> char {
        let c = self.kind.letter();
        if self.relative { c.to_ascii_lowercase() } else { c }
    }
}

/// Parsed SVG path data, the shape attached to a morph keyframe.
///
/// Formats as `"M5,5 L10,0"`: letter, comma-separated values, one space between commands.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeDescriptor {
    commands: Vec<PathCommand>,
}

impl ShapeDescriptor {
    /// Parse SVG path data.
    pub fn parse(input: &str) -> ScrollscapeResult<Self> {
        parse_commands(input).map(|commands| Self { commands })
    }

    /// Build from already-parsed commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Return `true` when per-value interpolation between `self` and `other` is meaningful.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(&other.commands)
                .all(|(a, b)| a.same_structure(b))
    }

    /// Convert to a kurbo path for hosts that draw with kurbo.
    pub fn to_bez_path(&self) -> ScrollscapeResult<BezPath> {
        BezPath::from_svg(&self.to_string()).map_err(|e| ScrollscapeError::path(0, e.to_string()))
    }
}

impl Lerp for ShapeDescriptor {
    /// Per-value blend for compatible shapes, otherwise a hard switch at `t = 0.5`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if !a.is_compatible(b) {
            return if t < 0.5 { a.clone() } else { b.clone() };
        }
        let commands = a
            .commands
            .iter()
            .zip(&b.commands)
            .map(|(ca, cb)| PathCommand {
                kind: ca.kind,
                relative: ca.relative,
                values: blend_values(ca, cb, t),
            })
            .collect();
        Self { commands }
    }
}

fn blend_values(a: &PathCommand, b: &PathCommand, t: f64) -> SmallVec<[f64; 7]> {
    let arity = a.kind.arity();
    a.values
        .iter()
        .zip(&b.values)
        .enumerate()
        .map(|(i, (va, vb))| {
            // Arc flags switch, never blend.
            let is_flag = a.kind == CommandKind::ArcTo && matches!(i % arity, 3 | 4);
            if is_flag {
                if t < 0.5 { *va } else { *vb }
            } else {
                <f64 as Lerp>::lerp(va, vb, t)
            }
        })
        .collect()
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd.letter())?;
            for (j, v) in cmd.values.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                // Avoid "-0" in output.
                let v = if *v == 0.0 { 0.0 } else { *v };
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for ShapeDescriptor {
    type Err = ScrollscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeDescriptor {
    type Error = ScrollscapeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ShapeDescriptor> for String {
    fn from(shape: ShapeDescriptor) -> Self {
        shape.to_string()
    }
}

fn parse_commands(input: &str) -> ScrollscapeResult<Vec<PathCommand>> {
    let bytes = input.as_bytes();
    let mut out: Vec<PathCommand> = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() || c == ',' {
            i += 1;
            continue;
        }

        if let Some((kind, relative)) = CommandKind::from_letter(c) {
            if let Some(prev) = out.last() {
                check_arity(prev, i)?;
            }
            out.push(PathCommand {
                kind,
                relative,
                values: SmallVec::new(),
            });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') {
            let start = i;
            let (v, end) = lex_number(input, i)?;
            i = end;
            match out.last_mut() {
                Some(cmd) if cmd.kind != CommandKind::Close => cmd.values.push(v),
                Some(_) => {
                    return Err(ScrollscapeError::path(start, "close command takes no values"));
                }
                None => {
                    return Err(ScrollscapeError::path(start, "path must start with a command"));
                }
            }
            continue;
        }

        return Err(ScrollscapeError::path(i, format!("unexpected character '{c}'")));
    }

    if let Some(last) = out.last() {
        check_arity(last, input.len())?;
    }
    Ok(out)
}

fn check_arity(cmd: &PathCommand, offset: usize) -> ScrollscapeResult<()> {
    let arity = cmd.kind.arity();
    let n = cmd.values.len();
    let ok = if arity == 0 {
        n == 0
    } else {
        n > 0 && n.is_multiple_of(arity)
    };
    if ok {
        Ok(())
    } else {
        Err(ScrollscapeError::path(
            offset,
            format!(
                "command '{}' expects a multiple of {arity} values, got {n}",
                cmd.letter()
            ),
        ))
    }
}

// Number: [+-]?([0-9]+(.[0-9]*)?|.[0-9]+)([eE][+-]?[0-9]+)?
fn lex_number(input: &str, start: usize) -> ScrollscapeResult<(f64, usize)> {
    let bytes = input.as_bytes();
    let mut i = start;
    if matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return Err(ScrollscapeError::path(start, "expected a number"));
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let e_pos = i;
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if exp_start == i {
            return Err(ScrollscapeError::path(
                e_pos,
                "invalid number exponent (expected digits)",
            ));
        }
    }

    let v: f64 = input[start..i]
        .parse()
        .map_err(|_| ScrollscapeError::path(start, "invalid number"))?;
    if !v.is_finite() {
        return Err(ScrollscapeError::path(start, "number out of range"));
    }
    Ok((v, i))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/path.rs"]
mod tests;
