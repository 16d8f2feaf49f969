//! Geometry primitives for footprint outlines.
//!
//! Axis convention: x grows east and y grows south in plan view, matching
//! the presentation surface's screen coordinates; a footprint's `position`
//! is its minimum-x/minimum-y corner. Because rotation is quantized to
//! quarter turns, every outline handled here is axis-aligned, and the tests
//! are exact for axis-aligned rectangles and the four canonical
//! right-triangle orientations. Arbitrary-angle polygons are out of scope.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::footprint::{Footprint, FootprintKind, Rotation};

/// Footprint outline: three or four vertices, stack-allocated.
pub type Outline = SmallVec<[Point; 4]>;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Rotates `p` about `anchor` by a quantized quarter turn. Quarter turns
/// permute coordinates, so no trigonometric rounding enters the result.
pub fn rotate_quarter(p: Point, anchor: Point, rotation: Rotation) -> Point {
    let dx = p.x - anchor.x;
    let dy = p.y - anchor.y;
    match rotation {
        Rotation::Deg0 => p,
        Rotation::Deg90 => Point::new(anchor.x - dy, anchor.y + dx),
        Rotation::Deg180 => Point::new(anchor.x - dx, anchor.y - dy),
        Rotation::Deg270 => Point::new(anchor.x + dy, anchor.y - dx),
    }
}

/// The four corners of a rectangular footprint in world space, clockwise
/// from the top-left. Quarter-turn rotation re-aligns a rectangle to the
/// axes, so rotation only swaps the effective extents; corners never leave
/// axis alignment.
pub fn rectangle_vertices(footprint: &Footprint) -> [Point; 4] {
    let (min_x, min_y, max_x, max_y) = footprint.bounding_box();
    [
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ]
}

/// The three corners of the occupied half of a triangular footprint's
/// bounding box. Each rotation state places the right angle in a different
/// corner, producing the four possible right-triangle orientations:
///
/// ```text
///   Deg0      Deg90     Deg180    Deg270
///   ##        ##            #     #
///   #          #           ##     ##
/// ```
pub fn triangle_vertices(footprint: &Footprint) -> [Point; 3] {
    let (min_x, min_y, max_x, max_y) = footprint.bounding_box();
    let tl = Point::new(min_x, min_y);
    let tr = Point::new(max_x, min_y);
    let br = Point::new(max_x, max_y);
    let bl = Point::new(min_x, max_y);
    match footprint.rotation {
        Rotation::Deg0 => [tl, tr, bl],
        Rotation::Deg90 => [tl, tr, br],
        Rotation::Deg180 => [tr, br, bl],
        Rotation::Deg270 => [br, bl, tl],
    }
}

/// World-space outline of a footprint: 4 vertices for rectangles, 3 for
/// triangles.
pub fn footprint_outline(footprint: &Footprint) -> Outline {
    match footprint.kind {
        FootprintKind::Rectangular => SmallVec::from_slice(&rectangle_vertices(footprint)),
        FootprintKind::Triangular => {
            let [a, b, c] = triangle_vertices(footprint);
            smallvec![a, b, c]
        }
    }
}

/// Signed area of the triangle `(a, b, c)`, doubled. The sign encodes the
/// turn direction; zero means collinear.
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Sign-based containment test, inclusive of the triangle boundary.
pub fn point_in_triangle(p: Point, v1: Point, v2: Point, v3: Point) -> bool {
    let d1 = orient(p, v1, v2);
    let d2 = orient(p, v2, v3);
    let d3 = orient(p, v3, v1);

    let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
    let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);

    !(has_neg && has_pos)
}

/// Bounds test against an axis-aligned box, inclusive of the boundary.
pub fn point_in_rectangle(p: Point, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> bool {
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Orientation-based proper intersection test: true only when the segments
/// cross at an interior point of both. Touching endpoints and collinear
/// overlap do not count.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// True if any edge of polygon A properly crosses any edge of polygon B.
pub fn edges_intersect(poly_a: &[Point], poly_b: &[Point]) -> bool {
    for i in 0..poly_a.len() {
        let a1 = poly_a[i];
        let a2 = poly_a[(i + 1) % poly_a.len()];
        for j in 0..poly_b.len() {
            let b1 = poly_b[j];
            let b2 = poly_b[(j + 1) % poly_b.len()];
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}
