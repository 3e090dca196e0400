//! Parsing and serialization of path mini-language text.
//!
//! The serialization is normalizing, not identity-preserving: excess
//! whitespace and commas, trailing zeros, and negative zero all canonicalize
//! (`"M 0, 0 L 1, 2"` round-trips to `"M0 0L1 2"`).

use std::fmt::{self, Write as _};

use crate::foundation::error::{LinemarkError, LinemarkResult};

use super::model::{Operator, PathCommand, SvgPath};

fn is_allowed(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_digit() || matches!(c, '.' | ',' | '-') || Operator::is_letter(c)
}

impl SvgPath {
    /// Parse path mini-language text.
    ///
    /// Empty or all-whitespace input yields the default single-move path.
    pub fn parse(text: &str) -> LinemarkResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }

        if let Some(found) = text.chars().find(|&c| !is_allowed(c)) {
            return Err(LinemarkError::InvalidCharacter {
                found,
                text: text.to_string(),
            });
        }

        // Every operator letter starts a command; everything up to the next
        // letter is that command's parameter text.
        let starts: Vec<(usize, char)> = text
            .char_indices()
            .filter(|&(_, c)| Operator::is_letter(c))
            .collect();
        if !matches!(starts.first(), Some(&(0, _))) {
            return Err(LinemarkError::InvalidOperator(
                text.chars().next().unwrap_or_default(),
            ));
        }

        let mut commands = Vec::with_capacity(starts.len());
        for (i, &(start, letter)) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
            // operator letters are ASCII, so the body starts one byte in
            commands.push(parse_command(letter, &text[start + 1..end])?);
        }
        Ok(Self(commands))
    }
}

fn parse_command(letter: char, body: &str) -> LinemarkResult<PathCommand> {
    let operator = Operator::from_letter(letter)?;
    let parameters = body
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| LinemarkError::invalid_number(token))
        })
        .collect::<LinemarkResult<Vec<f64>>>()?;
    PathCommand::new(letter.is_ascii_uppercase(), operator, parameters)
}

/// Normalize a coordinate for serialization: `-0.0` prints as `0`, every
/// other value uses `f64`'s shortest round-trip form.
pub(crate) fn canonical(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.0 {
            let letter = if command.absolute {
                command.operator.letter()
            } else {
                command.operator.letter().to_ascii_lowercase()
            };
            f.write_char(letter)?;
            for (i, &p) in command.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{}", canonical(p))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
