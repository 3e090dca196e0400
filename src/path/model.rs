//! The structured form of the path mini-language.
//!
//! A path is an ordered command sequence; order defines the pen trajectory.
//! Only the ten operators below are supported — this is deliberately a small
//! subset of SVG path data, just enough to author repeating marks.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LinemarkError, LinemarkResult};

/// One of the ten supported drawing operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Move,
    Line,
    Horizontal,
    Vertical,
    Cubic,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
    Close,
}

impl Operator {
    /// Look up an operator by its command letter, either case.
    pub fn from_letter(letter: char) -> LinemarkResult<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Ok(Self::Move),
            'L' => Ok(Self::Line),
            'H' => Ok(Self::Horizontal),
            'V' => Ok(Self::Vertical),
            'C' => Ok(Self::Cubic),
            'S' => Ok(Self::SmoothCubic),
            'Q' => Ok(Self::Quadratic),
            'T' => Ok(Self::SmoothQuadratic),
            'A' => Ok(Self::Arc),
            'Z' => Ok(Self::Close),
            _ => Err(LinemarkError::InvalidOperator(letter)),
        }
    }

    /// The uppercase command letter.
    pub fn letter(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
            Self::Cubic => 'C',
            Self::SmoothCubic => 'S',
            Self::Quadratic => 'Q',
            Self::SmoothQuadratic => 'T',
            Self::Arc => 'A',
            Self::Close => 'Z',
        }
    }

    /// Parameters consumed per repetition of this operator.
    pub fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line | Self::SmoothQuadratic => 2,
            Self::Horizontal | Self::Vertical => 1,
            Self::Cubic => 6,
            Self::SmoothCubic | Self::Quadratic => 4,
            Self::Arc => 7,
            Self::Close => 0,
        }
    }

    /// Whether `count` parameters form valid repetitions of this operator.
    ///
    /// Close takes none; Horizontal/Vertical take any positive count, each
    /// value advancing the pen independently; everything else takes a
    /// positive multiple of its arity.
    pub fn accepts_parameter_count(self, count: usize) -> bool {
        match self.arity() {
            0 => count == 0,
            1 => count >= 1,
            arity => count > 0 && count % arity == 0,
        }
    }

    pub(crate) fn is_letter(c: char) -> bool {
        matches!(
            c.to_ascii_uppercase(),
            'M' | 'L' | 'H' | 'V' | 'C' | 'S' | 'Q' | 'T' | 'A' | 'Z'
        )
    }
}

/// One drawing instruction.
///
/// `parameters` holds one or more arity-groups; more than one group is the
/// standard shorthand for repeating the operator. Lowercase source letters
/// set `absolute` to false, making the parameters deltas from the current
/// pen position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    pub absolute: bool,
    pub operator: Operator,
    pub parameters: Vec<f64>,
}

impl PathCommand {
    /// Build a command, validating the parameter count against the operator.
    pub fn new(absolute: bool, operator: Operator, parameters: Vec<f64>) -> LinemarkResult<Self> {
        if !operator.accepts_parameter_count(parameters.len()) {
            return Err(LinemarkError::InvalidParameterCount {
                operator: operator.letter(),
                arity: operator.arity(),
                got: parameters.len(),
            });
        }
        Ok(Self {
            absolute,
            operator,
            parameters,
        })
    }
}

/// An ordered sequence of [`PathCommand`]s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgPath(pub Vec<PathCommand>);

impl SvgPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }
}

impl Default for SvgPath {
    /// A single absolute move to the origin.
    ///
    /// Parsing empty input yields this, so downstream consumers never
    /// receive an empty command list.
    fn default() -> Self {
        Self(vec![PathCommand {
            absolute: true,
            operator: Operator::Move,
            parameters: vec![0.0, 0.0],
        }])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
