//! 2D primitives for walking segments and orienting stamped marks.
//!
//! Coordinates live in a planar screen/pixel space; angles are radians with
//! positive x at 0 and positive y at pi/2 (SVG's y-down convention makes
//! that clockwise on screen).

pub use kurbo::Point;

/// Euclidean distance between two points.
pub fn dist(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Bearing in radians from `p1` to `p2`, in `(-pi, pi]`.
///
/// The bearing between equal points is defined as `0`.
pub fn bearing(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// The point reached by moving `distance` from `p` along `bearing_rad`.
pub fn move_along_bearing(p: Point, distance: f64, bearing_rad: f64) -> Point {
    Point::new(
        p.x + distance * bearing_rad.cos(),
        p.y + distance * bearing_rad.sin(),
    )
}

/// Rotate `p` by `rotation_rad` around `axis`, preserving its distance to
/// the axis.
///
/// Implemented by polar decomposition: magnitude plus bearing, then back to
/// cartesian at the rotated angle.
pub fn rotate_around_point(p: Point, rotation_rad: f64, axis: Point) -> Point {
    let magnitude = dist(axis, p);
    let angle = bearing(axis, p) + rotation_rad;
    Point::new(
        axis.x + magnitude * angle.cos(),
        axis.y + magnitude * angle.sin(),
    )
}

/// [`rotate_around_point`] with the origin as the axis.
pub fn rotate_around_origin(p: Point, rotation_rad: f64) -> Point {
    rotate_around_point(p, rotation_rad, Point::ORIGIN)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/cartesian.rs"]
mod tests;
