use floorkit_designer::footprint::{Footprint, FootprintKind, Rotation};
use floorkit_designer::geometry::Point;
use floorkit_designer::plan::{FootprintCatalog, PlanStore};
use floorkit_designer::session::{CommitInstruction, Placement};

#[test]
fn test_place_and_get() {
    let mut plan = PlanStore::new();
    let rect_id = plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);
    let tri_id = plan.place_triangle(10.0, 0.0, 4.0, 4.0, 1);

    assert_ne!(rect_id, tri_id);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.get(rect_id).unwrap().kind, FootprintKind::Rectangular);
    let tri = plan.get(tri_id).unwrap();
    assert_eq!(tri.kind, FootprintKind::Triangular);
    assert_eq!(tri.level, 1);
}

#[test]
fn test_remove_keeps_order_and_index() {
    let mut plan = PlanStore::new();
    let a = plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);
    let b = plan.place_rectangle(10.0, 0.0, 6.0, 6.0, 0);
    let c = plan.place_rectangle(20.0, 0.0, 6.0, 6.0, 0);

    let removed = plan.remove(b).unwrap();
    assert_eq!(removed.id, b);
    assert!(!plan.contains(b));
    assert_eq!(plan.get(c).unwrap().position.x, 20.0);

    let order: Vec<_> = plan.iter().map(|fp| fp.id).collect();
    assert_eq!(order, vec![a, c]);
}

#[test]
fn test_insert_with_caller_id_advances_generator() {
    let mut plan = PlanStore::new();
    plan.insert(Footprint::rectangular(41, 0.0, 0.0, 6.0, 6.0));
    let next = plan.place_rectangle(10.0, 0.0, 6.0, 6.0, 0);
    assert!(next > 41);
}

#[test]
fn test_insert_replaces_same_id() {
    let mut plan = PlanStore::new();
    plan.insert(Footprint::rectangular(7, 0.0, 0.0, 6.0, 6.0));
    plan.insert(Footprint::rectangular(7, 3.0, 3.0, 4.0, 4.0));
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.get(7).unwrap().position, Point::new(3.0, 3.0));
}

#[test]
fn test_catalog_resolves_canonical_dimensions() {
    let mut plan = PlanStore::new();
    let id = plan.place_triangle(0.0, 0.0, 6.0, 4.0, 0);
    plan.get_mut(id).unwrap().rotation = Rotation::Deg90;

    // Effective extents swap at 90 degrees, canonical ones do not.
    let canonical = plan.canonical(id).unwrap();
    assert_eq!((canonical.width, canonical.height), (6.0, 4.0));
    assert_eq!(plan.get(id).unwrap().effective_size(), (4.0, 6.0));

    assert!(plan.canonical(999).is_none());
}

#[test]
fn test_apply_commit_moves_members_and_skips_missing() {
    let mut plan = PlanStore::new();
    let id = plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);

    let commit = CommitInstruction {
        members: vec![
            Placement {
                id,
                position: Point::new(1.5, 0.0),
                rotation: Rotation::Deg90,
                level: 1,
            },
            Placement {
                id: 999,
                position: Point::new(0.0, 0.0),
                rotation: Rotation::Deg0,
                level: 0,
            },
        ],
    };
    plan.apply_commit(&commit);

    let moved = plan.get(id).unwrap();
    assert_eq!(moved.position, Point::new(1.5, 0.0));
    assert_eq!(moved.rotation, Rotation::Deg90);
    assert_eq!(moved.level, 1);
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_clear_empties_store() {
    let mut plan = PlanStore::new();
    plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);
    plan.clear();
    assert!(plan.is_empty());
}
