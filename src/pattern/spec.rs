//! The pattern specification language.
//!
//! A pattern string is either the sentinel `"solid"` or `;`-separated parts,
//! each `path,offset,interval,kind`. Offsets and intervals are pixels or
//! percentages of a ring's total length (`"40"`, `"12.5%"`); the kind token
//! `T` traces the base line in addition to stamping, anything else stamps
//! only. Omitted fields take defaults: offset `0`, interval `100%`, kind
//! fill-only.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LinemarkError, LinemarkResult};
use crate::path::model::SvgPath;
use crate::path::parse::canonical;

/// Unit tag for [`PixelOrPercent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Px,
    Percent,
}

/// A length that is either absolute pixels or a percentage of a ring's
/// total length, resolved at stamping time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelOrPercent {
    pub value: f64,
    pub unit: Unit,
}

impl PixelOrPercent {
    pub const ZERO_PX: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };
    pub const FULL_LENGTH: Self = Self {
        value: 100.0,
        unit: Unit::Percent,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Resolve to pixels against a total ring length. Percent values floor.
    pub fn resolve(self, total: f64) -> f64 {
        match self.unit {
            Unit::Px => self.value,
            Unit::Percent => (self.value / 100.0 * total).floor(),
        }
    }

    fn parse(text: &str, default: Self) -> LinemarkResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(default);
        }
        if let Some(number) = text.strip_suffix('%') {
            let value = number
                .trim()
                .parse::<f64>()
                .map_err(|_| LinemarkError::invalid_number(text))?;
            return Ok(Self::percent(value));
        }
        let value = text
            .parse::<f64>()
            .map_err(|_| LinemarkError::invalid_number(text))?;
        Ok(Self::px(value))
    }
}

impl fmt::Display for PixelOrPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}", canonical(self.value)),
            Unit::Percent => write!(f, "{}%", canonical(self.value)),
        }
    }
}

/// Whether a part also draws the base line or only stamps its marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    Trace,
    FillOnly,
}

impl DrawKind {
    /// The token `T` is Trace; any other value, including empty, is
    /// FillOnly.
    fn parse(text: &str) -> Self {
        if text == "T" { Self::Trace } else { Self::FillOnly }
    }

    pub fn token(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::FillOnly => 'F',
        }
    }
}

/// One repeating motif: a path stamped every `interval` along the host
/// geometry, starting `offset` from each ring's first vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternPart {
    pub path: SvgPath,
    pub offset: PixelOrPercent,
    pub interval: PixelOrPercent,
    pub kind: DrawKind,
}

/// A parsed pattern specification.
///
/// `Parts` is never empty: splitting on `;` always yields at least one
/// part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// Draw the line or fill with no stamped motifs.
    Solid,
    Parts(Vec<PatternPart>),
}

impl Pattern {
    /// Parse a pattern specification string.
    pub fn parse(text: &str) -> LinemarkResult<Self> {
        if text == "solid" {
            return Ok(Self::Solid);
        }
        let parts = text
            .split(';')
            .map(parse_part)
            .collect::<LinemarkResult<Vec<_>>>()?;
        Ok(Self::Parts(parts))
    }

    /// Whether any part traces the base line.
    pub fn has_trace(&self) -> bool {
        match self {
            Self::Solid => false,
            Self::Parts(parts) => parts.iter().any(|p| p.kind == DrawKind::Trace),
        }
    }
}

fn parse_part(text: &str) -> LinemarkResult<PatternPart> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() > 4 {
        return Err(LinemarkError::invalid_pattern_part(format!(
            "expected at most 4 comma-separated fields, got {}: {text}",
            fields.len()
        )));
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or("");
    Ok(PatternPart {
        path: SvgPath::parse(field(0))?,
        offset: PixelOrPercent::parse(field(1), PixelOrPercent::ZERO_PX)?,
        interval: PixelOrPercent::parse(field(2), PixelOrPercent::FULL_LENGTH)?,
        kind: DrawKind::parse(field(3)),
    })
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => f.write_str("solid"),
            Self::Parts(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_char(';')?;
                    }
                    write!(
                        f,
                        "{},{},{},{}",
                        part.path,
                        part.offset,
                        part.interval,
                        part.kind.token()
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/spec.rs"]
mod tests;
