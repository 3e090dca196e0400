//! Depth-preserving geometry transforms over a parsed path.
//!
//! All operations return a new path; none mutate their input. `rotate` is
//! the only fallible one: it needs a running pen position for relative and
//! H/V commands, so it normalizes first and treats any survivor as an
//! internal invariant violation rather than guessing.

use kurbo::Point;

use crate::foundation::cartesian::rotate_around_origin;
use crate::foundation::error::{LinemarkError, LinemarkResult};

use super::model::{Operator, PathCommand, SvgPath};

/// Round every numeric parameter of every command to `places` decimal
/// digits.
///
/// Applies uniformly, including to Arc's rotation and flag parameters.
pub fn round(path: &SvgPath, places: u32) -> SvgPath {
    let factor = 10f64.powi(places as i32);
    let commands = path
        .0
        .iter()
        .map(|c| PathCommand {
            parameters: c
                .parameters
                .iter()
                .map(|p| (p * factor).round() / factor)
                .collect(),
            ..c.clone()
        })
        .collect();
    SvgPath(commands)
}

/// Translate a path by `dx` horizontally and `dy` vertically.
///
/// Relative commands are deltas and pass through untouched, with one
/// exception: a relative Move at the head of the path anchors the initial
/// pen position, which is absolute regardless of the letter's case, so its
/// first coordinate pair is translated.
pub fn translate(path: &SvgPath, dx: f64, dy: f64) -> SvgPath {
    if dx == 0.0 && dy == 0.0 {
        return path.clone();
    }
    let commands = path
        .0
        .iter()
        .enumerate()
        .map(|(index, c)| {
            if c.absolute {
                let parameters = match c.operator {
                    Operator::Move
                    | Operator::Line
                    | Operator::Cubic
                    | Operator::SmoothCubic
                    | Operator::Quadratic
                    | Operator::SmoothQuadratic => c
                        .parameters
                        .iter()
                        .enumerate()
                        .map(|(i, v)| if i % 2 == 0 { v + dx } else { v + dy })
                        .collect(),
                    Operator::Horizontal => c.parameters.iter().map(|x| x + dx).collect(),
                    Operator::Vertical => c.parameters.iter().map(|y| y + dy).collect(),
                    Operator::Close => c.parameters.clone(),
                    // only the end point of each arc group moves
                    Operator::Arc => c
                        .parameters
                        .iter()
                        .enumerate()
                        .map(|(i, v)| {
                            v + match i % 7 {
                                5 => dx,
                                6 => dy,
                                _ => 0.0,
                            }
                        })
                        .collect(),
                };
                PathCommand {
                    parameters,
                    ..c.clone()
                }
            } else if index == 0 && c.operator == Operator::Move && c.parameters.len() >= 2 {
                let mut parameters = c.parameters.clone();
                parameters[0] += dx;
                parameters[1] += dy;
                PathCommand {
                    parameters,
                    ..c.clone()
                }
            } else {
                c.clone()
            }
        })
        .collect();
    SvgPath(commands)
}

/// Scale every coordinate-bearing parameter by `factor`.
///
/// Arc's rotation angle and flags (cyclic positions 2-4 of each group) are
/// not lengths and are exempt; the radii and end point scale.
pub fn scale(path: &SvgPath, factor: f64) -> SvgPath {
    if factor == 1.0 {
        return path.clone();
    }
    let commands = path
        .0
        .iter()
        .map(|c| {
            let parameters = match c.operator {
                Operator::Arc => c
                    .parameters
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        if (2..=4).contains(&(i % 7)) {
                            v
                        } else {
                            v * factor
                        }
                    })
                    .collect(),
                _ => c.parameters.iter().map(|v| v * factor).collect(),
            };
            PathCommand {
                parameters,
                ..c.clone()
            }
        })
        .collect();
    SvgPath(commands)
}

/// Rotate a path by `theta` radians about the origin.
///
/// The path is first normalized to an all-absolute, H/V-free form. For Arc
/// commands only the end point rotates; the arc keeps its radii, flags, and
/// own rotation parameter, which is an approximation for arcs with a
/// nonzero rotation.
pub fn rotate(path: &SvgPath, theta: f64) -> LinemarkResult<SvgPath> {
    if theta == 0.0 {
        return Ok(path.clone());
    }

    let needs_normalization = path.0.iter().any(|c| {
        !c.absolute || matches!(c.operator, Operator::Horizontal | Operator::Vertical)
    });
    let normalized;
    let source = if needs_normalization {
        normalized = to_absolute_without_hv(path);
        &normalized
    } else {
        path
    };

    let mut commands = Vec::with_capacity(source.0.len());
    for c in &source.0 {
        if !c.absolute {
            return Err(LinemarkError::invalid_rotation_input(format!(
                "relative {} command survived normalization",
                c.operator.letter().to_ascii_lowercase()
            )));
        }
        let parameters = match c.operator {
            Operator::Move
            | Operator::Line
            | Operator::Cubic
            | Operator::SmoothCubic
            | Operator::Quadratic
            | Operator::SmoothQuadratic => {
                let mut parameters = Vec::with_capacity(c.parameters.len());
                for pair in c.parameters.chunks_exact(2) {
                    let p = rotate_around_origin(Point::new(pair[0], pair[1]), theta);
                    parameters.push(p.x);
                    parameters.push(p.y);
                }
                parameters
            }
            Operator::Horizontal | Operator::Vertical => {
                return Err(LinemarkError::invalid_rotation_input(format!(
                    "{} command survived normalization",
                    c.operator.letter()
                )));
            }
            Operator::Close => c.parameters.clone(),
            Operator::Arc => {
                let mut parameters = Vec::with_capacity(c.parameters.len());
                for group in c.parameters.chunks_exact(7) {
                    parameters.extend_from_slice(&group[..5]);
                    let end = rotate_around_origin(Point::new(group[5], group[6]), theta);
                    parameters.push(end.x);
                    parameters.push(end.y);
                }
                parameters
            }
        };
        commands.push(PathCommand {
            parameters,
            ..c.clone()
        });
    }
    Ok(SvgPath(commands))
}

/// Rewrite a path so every command is absolute and no H/V commands remain.
///
/// Walks the commands with a running pen position and the current subpath
/// start. Relative deltas become absolute coordinates group by group, H/V
/// become absolute Lines using the pen's other axis, and Close resets the
/// pen to the subpath start.
fn to_absolute_without_hv(path: &SvgPath) -> SvgPath {
    let mut marker = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;
    let mut commands: Vec<PathCommand> = Vec::with_capacity(path.0.len());

    for c in &path.0 {
        if c.absolute {
            match c.operator {
                Operator::Move => {
                    if let [x, y, ..] = c.parameters[..] {
                        subpath_start = Point::new(x, y);
                        let n = c.parameters.len();
                        marker = Point::new(c.parameters[n - 2], c.parameters[n - 1]);
                    }
                    commands.push(c.clone());
                }
                Operator::Line
                | Operator::Cubic
                | Operator::SmoothCubic
                | Operator::Quadratic
                | Operator::SmoothQuadratic
                | Operator::Arc => {
                    let n = c.parameters.len();
                    if n >= 2 {
                        marker = Point::new(c.parameters[n - 2], c.parameters[n - 1]);
                    }
                    commands.push(c.clone());
                }
                Operator::Horizontal => {
                    let mut parameters = Vec::with_capacity(c.parameters.len() * 2);
                    for &x in &c.parameters {
                        parameters.push(x);
                        parameters.push(marker.y);
                        marker.x = x;
                    }
                    commands.push(PathCommand {
                        absolute: true,
                        operator: Operator::Line,
                        parameters,
                    });
                }
                Operator::Vertical => {
                    let mut parameters = Vec::with_capacity(c.parameters.len() * 2);
                    for &y in &c.parameters {
                        parameters.push(marker.x);
                        parameters.push(y);
                        marker.y = y;
                    }
                    commands.push(PathCommand {
                        absolute: true,
                        operator: Operator::Line,
                        parameters,
                    });
                }
                Operator::Close => {
                    marker = subpath_start;
                    commands.push(c.clone());
                }
            }
        } else {
            match c.operator {
                Operator::Move => {
                    // the first pair opens the subpath, the rest are
                    // shorthand line segments
                    for (i, pair) in c.parameters.chunks_exact(2).enumerate() {
                        marker = Point::new(marker.x + pair[0], marker.y + pair[1]);
                        if i == 0 {
                            subpath_start = marker;
                        }
                        commands.push(PathCommand {
                            absolute: true,
                            operator: if i == 0 { Operator::Move } else { Operator::Line },
                            parameters: vec![marker.x, marker.y],
                        });
                    }
                }
                Operator::Line | Operator::SmoothQuadratic => {
                    for pair in c.parameters.chunks_exact(2) {
                        marker = Point::new(marker.x + pair[0], marker.y + pair[1]);
                        commands.push(PathCommand {
                            absolute: true,
                            operator: c.operator,
                            parameters: vec![marker.x, marker.y],
                        });
                    }
                }
                Operator::Horizontal => {
                    for &dx in &c.parameters {
                        marker.x += dx;
                        commands.push(PathCommand {
                            absolute: true,
                            operator: Operator::Line,
                            parameters: vec![marker.x, marker.y],
                        });
                    }
                }
                Operator::Vertical => {
                    for &dy in &c.parameters {
                        marker.y += dy;
                        commands.push(PathCommand {
                            absolute: true,
                            operator: Operator::Line,
                            parameters: vec![marker.x, marker.y],
                        });
                    }
                }
                Operator::Cubic => {
                    for group in c.parameters.chunks_exact(6) {
                        let parameters = vec![
                            marker.x + group[0],
                            marker.y + group[1],
                            marker.x + group[2],
                            marker.y + group[3],
                            marker.x + group[4],
                            marker.y + group[5],
                        ];
                        marker = Point::new(parameters[4], parameters[5]);
                        commands.push(PathCommand {
                            absolute: true,
                            operator: Operator::Cubic,
                            parameters,
                        });
                    }
                }
                Operator::SmoothCubic | Operator::Quadratic => {
                    for group in c.parameters.chunks_exact(4) {
                        let parameters = vec![
                            marker.x + group[0],
                            marker.y + group[1],
                            marker.x + group[2],
                            marker.y + group[3],
                        ];
                        marker = Point::new(parameters[2], parameters[3]);
                        commands.push(PathCommand {
                            absolute: true,
                            operator: c.operator,
                            parameters,
                        });
                    }
                }
                Operator::Arc => {
                    for group in c.parameters.chunks_exact(7) {
                        marker = Point::new(marker.x + group[5], marker.y + group[6]);
                        let mut parameters = group[..5].to_vec();
                        parameters.push(marker.x);
                        parameters.push(marker.y);
                        commands.push(PathCommand {
                            absolute: true,
                            operator: Operator::Arc,
                            parameters,
                        });
                    }
                }
                Operator::Close => {
                    marker = subpath_start;
                    commands.push(PathCommand {
                        absolute: true,
                        operator: Operator::Close,
                        parameters: Vec::new(),
                    });
                }
            }
        }
    }

    SvgPath(commands)
}

#[cfg(test)]
#[path = "../../tests/unit/path/transform.rs"]
mod tests;
