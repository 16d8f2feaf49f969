//! Footprint overlap detection.
//!
//! Two-stage test: an epsilon-shrunk axis-aligned bounding-box broad phase
//! rejects separated and merely edge-adjacent footprints, then an exact
//! narrow phase resolves the triangle cases by vertex containment and
//! proper edge crossing. Complementary triangles (the two halves of one
//! bounding rectangle) are defined as non-overlapping and short-circuit
//! everything else.

use std::collections::{HashMap, HashSet};

use floorkit_core::types::{FootprintId, Level};

use crate::footprint::{Footprint, FootprintKind, Rotation};
use crate::geometry::{
    edges_intersect, point_in_rectangle, point_in_triangle, rectangle_vertices, triangle_vertices,
};

/// True when `a` and `b` are the two halves of the same bounding rectangle:
/// both triangular, same position and size (within `epsilon`), rotations
/// 180 degrees apart. They legitimately share one footprint.
fn complementary_triangles(a: &Footprint, b: &Footprint, epsilon: f64) -> bool {
    if a.kind != FootprintKind::Triangular || b.kind != FootprintKind::Triangular {
        return false;
    }
    if a.rotation.offset_to(b.rotation) != Rotation::Deg180 {
        return false;
    }
    let (ax1, ay1, ax2, ay2) = a.bounding_box();
    let (bx1, by1, bx2, by2) = b.bounding_box();
    (ax1 - bx1).abs() <= epsilon
        && (ay1 - by1).abs() <= epsilon
        && (ax2 - bx2).abs() <= epsilon
        && (ay2 - by2).abs() <= epsilon
}

/// Broad phase: overlap of the two bounding boxes after shrinking each
/// inward by `epsilon`. The shrink keeps grid-adjacent placements (edges
/// touching exactly) from registering as collisions.
fn boxes_overlap(a: &Footprint, b: &Footprint, epsilon: f64) -> bool {
    let (ax1, ay1, ax2, ay2) = a.bounding_box();
    let (bx1, by1, bx2, by2) = b.bounding_box();
    ax1 + epsilon < bx2 - epsilon
        && bx1 + epsilon < ax2 - epsilon
        && ay1 + epsilon < by2 - epsilon
        && by1 + epsilon < ay2 - epsilon
}

/// Narrow phase for a pair whose shrunk boxes overlap. True if any vertex
/// of one lies inside the other, or any pair of edges properly crosses.
fn narrow_phase(a: &Footprint, b: &Footprint) -> bool {
    match (a.kind, b.kind) {
        (FootprintKind::Rectangular, FootprintKind::Rectangular) => true,
        (FootprintKind::Triangular, FootprintKind::Triangular) => {
            let ta = triangle_vertices(a);
            let tb = triangle_vertices(b);
            ta.iter()
                .any(|&p| point_in_triangle(p, tb[0], tb[1], tb[2]))
                || tb.iter()
                    .any(|&p| point_in_triangle(p, ta[0], ta[1], ta[2]))
                || edges_intersect(&ta, &tb)
        }
        _ => {
            let (tri, rect) = if a.kind == FootprintKind::Triangular {
                (a, b)
            } else {
                (b, a)
            };
            let tv = triangle_vertices(tri);
            let (rx1, ry1, rx2, ry2) = rect.bounding_box();
            let rv = rectangle_vertices(rect);
            tv.iter()
                .any(|&p| point_in_rectangle(p, rx1, ry1, rx2, ry2))
                || rv.iter().any(|&p| point_in_triangle(p, tv[0], tv[1], tv[2]))
                || edges_intersect(&tv, &rv)
        }
    }
}

/// Pairwise overlap test between two footprints.
///
/// Symmetric in its arguments. Level is ignored here; callers that care
/// about level separation filter before calling (see [`find_colliding`]).
pub fn overlaps(a: &Footprint, b: &Footprint, epsilon: f64) -> bool {
    if complementary_triangles(a, b, epsilon) {
        return false;
    }
    if !boxes_overlap(a, b, epsilon) {
        return false;
    }
    narrow_phase(a, b)
}

/// Finds every footprint involved in at least one overlapping pair.
///
/// Footprints are grouped by level first: a basement object never collides
/// with a ground-floor object. `level` restricts the scan to one level;
/// `None` scans them all. The per-level scan is intentionally quadratic;
/// levels hold at most low hundreds of footprints, which keeps this
/// tractable without a spatial index.
pub fn find_colliding(
    footprints: &[Footprint],
    level: Option<Level>,
    epsilon: f64,
) -> HashSet<FootprintId> {
    let mut by_level: HashMap<Level, Vec<&Footprint>> = HashMap::new();
    for fp in footprints {
        if level.is_some_and(|l| l != fp.level) {
            continue;
        }
        by_level.entry(fp.level).or_default().push(fp);
    }

    let mut colliding = HashSet::new();
    for group in by_level.values() {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                if overlaps(a, b, epsilon) {
                    colliding.insert(a.id);
                    colliding.insert(b.id);
                }
            }
        }
    }
    colliding
}
