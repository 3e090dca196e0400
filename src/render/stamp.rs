//! The stamping walk: rings of screen-space vertices plus a pattern in, one
//! SVG path-data string out.

use std::f64::consts::FRAC_PI_2;
use std::fmt::Write as _;

use kurbo::Point;

use crate::foundation::cartesian::{bearing, dist, move_along_bearing};
use crate::foundation::error::LinemarkResult;
use crate::path::parse::canonical;
use crate::path::transform::{rotate, translate};
use crate::pattern::spec::Pattern;

/// Entry point for host renderers.
///
/// A pattern string that fails to parse is logged and downgraded to
/// [`Pattern::Solid`], so a bad pattern never aborts the geometry's
/// rendering.
#[tracing::instrument(skip(rings), fields(rings = rings.len()))]
pub fn points_to_pattern_path(
    rings: &[Vec<Point>],
    closed: bool,
    pattern_text: &str,
) -> LinemarkResult<String> {
    let pattern = match Pattern::parse(pattern_text) {
        Ok(pattern) => pattern,
        Err(error) => {
            tracing::warn!(%error, pattern = pattern_text, "invalid pattern, falling back to solid");
            Pattern::Solid
        }
    };
    stamp(rings, closed, &pattern)
}

/// Stamp a parsed pattern along the given rings.
///
/// Percent offsets and intervals resolve against each ring's own total
/// length, not against any clipped portion of it. Phase carries across
/// segment boundaries within a ring and resets between rings.
pub fn stamp(rings: &[Vec<Point>], closed: bool, pattern: &Pattern) -> LinemarkResult<String> {
    let mut out = String::new();

    // A closed ring, a solid pattern, or a single Trace part anywhere all
    // force the full base outline of every ring. Open geometry with only
    // fill-only parts is the one case that suppresses it.
    if closed || matches!(pattern, Pattern::Solid) || pattern.has_trace() {
        for points in rings {
            if points.is_empty() {
                continue;
            }
            for (i, p) in points.iter().enumerate() {
                let prefix = if i == 0 { 'M' } else { 'L' };
                let _ = write!(out, "{prefix}{} {}", canonical(p.x), canonical(p.y));
            }
            if closed {
                out.push('z');
            }
        }
    }

    if let Pattern::Parts(parts) = pattern {
        for points in rings {
            let ring_length = points
                .windows(2)
                .map(|w| dist(w[0], w[1]))
                .sum::<f64>()
                .floor();
            let mut leftover: Vec<f64> = parts
                .iter()
                .map(|part| part.offset.resolve(ring_length))
                .collect();

            for segment in points.windows(2) {
                let (from, to) = (segment[0], segment[1]);
                let segment_bearing = bearing(from, to);
                let segment_length = dist(from, to);

                for (part, leftover) in parts.iter().zip(leftover.iter_mut()) {
                    let interval = part.interval.resolve(ring_length);
                    // a zero interval stamps once per ring instead of
                    // looping forever
                    let step = if interval != 0.0 { interval } else { ring_length };
                    // parts are authored with negative y as the direction of
                    // travel; bearings put positive x there, so add 90
                    // degrees before the segment's own bearing
                    let oriented = rotate(&part.path, segment_bearing + FRAC_PI_2)?;

                    let mut k = *leftover;
                    while k <= segment_length {
                        let at = move_along_bearing(from, k, segment_bearing);
                        let _ = write!(out, "M{} {}", canonical(at.x), canonical(at.y));
                        let _ = write!(out, "{}", translate(&oriented, at.x, at.y));
                        if step > 0.0 {
                            k += step;
                        } else {
                            // degenerate zero-length ring; one stamp, done
                            k = f64::INFINITY;
                        }
                    }
                    *leftover = k - segment_length;
                }
            }
        }
    }

    // empty path strings are invalid to downstream renderers
    if out.is_empty() {
        out.push_str("M0 0");
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/stamp.rs"]
mod tests;
