use floorkit_designer::collision::{find_colliding, overlaps};
use floorkit_designer::footprint::{Footprint, Rotation};

const EPSILON: f64 = 0.05;

#[test]
fn test_separated_rectangles_do_not_overlap() {
    let a = Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::rectangular(2, 20.0, 0.0, 6.0, 6.0);
    assert!(!overlaps(&a, &b, EPSILON));
}

#[test]
fn test_adjacent_rectangles_do_not_overlap() {
    // Edge-to-edge with zero gap: the epsilon shrink keeps this clean.
    let a = Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::rectangular(2, 6.0, 0.0, 6.0, 6.0);
    assert!(!overlaps(&a, &b, EPSILON));

    let below = Footprint::rectangular(3, 0.0, 6.0, 6.0, 6.0);
    assert!(!overlaps(&a, &below, EPSILON));
}

#[test]
fn test_corner_touching_rectangles_do_not_overlap() {
    let a = Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::rectangular(2, 6.0, 6.0, 6.0, 6.0);
    assert!(!overlaps(&a, &b, EPSILON));
}

#[test]
fn test_overlapping_rectangles_collide() {
    let a = Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::rectangular(2, 3.0, 0.0, 6.0, 6.0);
    assert!(overlaps(&a, &b, EPSILON));
}

#[test]
fn test_overlap_is_symmetric() {
    let a = Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::rectangular(2, 3.0, 2.0, 6.0, 6.0);
    let c = Footprint::triangular(3, 4.0, 4.0, 6.0, 6.0);
    assert_eq!(overlaps(&a, &b, EPSILON), overlaps(&b, &a, EPSILON));
    assert_eq!(overlaps(&a, &c, EPSILON), overlaps(&c, &a, EPSILON));
    assert_eq!(overlaps(&b, &c, EPSILON), overlaps(&c, &b, EPSILON));
}

#[test]
fn test_rotated_rectangle_uses_effective_extents() {
    // A 12x3 strip rotated 90 degrees occupies a 3x12 box and no longer
    // reaches a neighbor sitting to its east.
    let strip = Footprint::rectangular(1, 0.0, 0.0, 12.0, 3.0);
    let neighbor = Footprint::rectangular(2, 9.0, 0.0, 6.0, 6.0);
    assert!(overlaps(&strip, &neighbor, EPSILON));
    let turned = strip.with_rotation(Rotation::Deg90);
    assert!(!overlaps(&turned, &neighbor, EPSILON));
}

#[test]
fn test_complementary_triangles_share_a_box() {
    let a = Footprint::triangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::triangular(2, 0.0, 0.0, 6.0, 6.0).with_rotation(Rotation::Deg180);
    assert!(!overlaps(&a, &b, EPSILON));

    let c = Footprint::triangular(3, 0.0, 0.0, 6.0, 6.0).with_rotation(Rotation::Deg90);
    let d = Footprint::triangular(4, 0.0, 0.0, 6.0, 6.0).with_rotation(Rotation::Deg270);
    assert!(!overlaps(&c, &d, EPSILON));
}

#[test]
fn test_quarter_offset_triangles_collide() {
    // Deg0 and Deg90 share the region near the top edge of the box.
    let a = Footprint::triangular(1, 0.0, 0.0, 6.0, 6.0);
    for rotation in [Rotation::Deg90, Rotation::Deg270] {
        let b = Footprint::triangular(2, 0.0, 0.0, 6.0, 6.0).with_rotation(rotation);
        assert!(overlaps(&a, &b, EPSILON), "rotation {:?}", rotation);
    }
}

#[test]
fn test_complementary_exception_requires_same_size() {
    // A 4x4 triangle at 180 degrees sits across the 6x6 one's hypotenuse;
    // the sizes differ, so the exception does not apply and the overlap is
    // real.
    let a = Footprint::triangular(1, 0.0, 0.0, 6.0, 6.0);
    let b = Footprint::triangular(2, 0.0, 0.0, 4.0, 4.0).with_rotation(Rotation::Deg180);
    assert!(overlaps(&a, &b, EPSILON));
}

#[test]
fn test_triangle_clear_of_complement_corner() {
    // A small rectangle tucked into the empty half of a triangle's
    // bounding box: boxes overlap, but the shapes do not.
    let tri = Footprint::triangular(1, 0.0, 0.0, 12.0, 12.0);
    let rect = Footprint::rectangular(2, 8.0, 8.0, 3.0, 3.0);
    assert!(!overlaps(&tri, &rect, EPSILON));
}

#[test]
fn test_triangle_rectangle_overlap() {
    let tri = Footprint::triangular(1, 0.0, 0.0, 12.0, 12.0);
    let rect = Footprint::rectangular(2, 1.0, 1.0, 3.0, 3.0);
    assert!(overlaps(&tri, &rect, EPSILON));
}

#[test]
fn test_rectangle_spanning_triangle_hypotenuse() {
    // Neither shape's vertices sit inside the other; only the edge
    // crossing test catches this.
    let tri = Footprint::triangular(1, 0.0, 0.0, 12.0, 12.0);
    let rect = Footprint::rectangular(2, -1.0, 4.0, 20.0, 3.0);
    assert!(overlaps(&tri, &rect, EPSILON));
}

#[test]
fn test_find_colliding_reports_both_members() {
    let plan = vec![
        Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0),
        Footprint::rectangular(2, 3.0, 0.0, 6.0, 6.0),
        Footprint::rectangular(3, 30.0, 0.0, 6.0, 6.0),
    ];
    let colliding = find_colliding(&plan, None, EPSILON);
    assert!(colliding.contains(&1));
    assert!(colliding.contains(&2));
    assert!(!colliding.contains(&3));
}

#[test]
fn test_find_colliding_groups_by_level() {
    // Same plan position, different levels: a basement object never
    // collides with a ground-floor object.
    let plan = vec![
        Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0).with_level(-1),
        Footprint::rectangular(2, 0.0, 0.0, 6.0, 6.0),
    ];
    assert!(find_colliding(&plan, None, EPSILON).is_empty());
}

#[test]
fn test_find_colliding_level_filter() {
    let plan = vec![
        Footprint::rectangular(1, 0.0, 0.0, 6.0, 6.0),
        Footprint::rectangular(2, 3.0, 0.0, 6.0, 6.0),
        Footprint::rectangular(3, 0.0, 0.0, 6.0, 6.0).with_level(1),
        Footprint::rectangular(4, 3.0, 0.0, 6.0, 6.0).with_level(1),
    ];
    let upstairs = find_colliding(&plan, Some(1), EPSILON);
    assert_eq!(upstairs.len(), 2);
    assert!(upstairs.contains(&3));
    assert!(upstairs.contains(&4));
}
