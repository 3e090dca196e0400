//! Linemark stamps repeating decorative marks (ticks, arrows, icons) along
//! polylines and polygon boundaries, driven by a compact textual pattern
//! specification.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: a pattern string (`"M-5 5L0 -5,40,80,T"`) becomes a
//!    [`Pattern`] — one or more repeating parts, each carrying an SVG-style
//!    micro-path, an offset, an interval, and a draw kind.
//! 2. **Walk**: [`points_to_pattern_path`] walks each ring of screen-space
//!    vertices, accumulating arc length segment by segment.
//! 3. **Stamp**: at every interval boundary a copy of the part's path is
//!    rotated to the segment bearing, translated to the stamp point, and
//!    serialized into the output.
//!
//! The result is a single SVG path-data string the host renderer can hand
//! directly to its drawing primitive. Linemark never rasterizes anything and
//! never touches geographic coordinates; both ends of the contract are plain
//! strings and screen-space points.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure functions**: parsing, transforming, and stamping construct fresh
//!   values and share no mutable state, so concurrent use needs no
//!   synchronization.
//! - **Always some output**: a malformed pattern string degrades to a solid
//!   line (with a warning), and degenerate geometry yields the single-point
//!   marker `"M0 0"` rather than an empty path.
#![forbid(unsafe_code)]

mod foundation;
mod path;
mod pattern;
mod render;

pub use foundation::cartesian::{
    Point, bearing, dist, move_along_bearing, rotate_around_origin, rotate_around_point,
};
pub use foundation::error::{LinemarkError, LinemarkResult};
pub use path::model::{Operator, PathCommand, SvgPath};
pub use path::transform::{round, rotate, scale, translate};
pub use pattern::spec::{DrawKind, Pattern, PatternPart, PixelOrPercent, Unit};
pub use render::stamp::{points_to_pattern_path, stamp};
