use floorkit_designer::plan::PlanStore;
use floorkit_designer::selection::SelectionManager;

fn plan_with_three() -> (PlanStore, [u64; 3]) {
    let mut plan = PlanStore::new();
    let a = plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);
    let b = plan.place_rectangle(10.0, 0.0, 6.0, 6.0, 0);
    let c = plan.place_rectangle(20.0, 0.0, 6.0, 6.0, 0);
    (plan, [a, b, c])
}

#[test]
fn test_single_select_replaces_selection() {
    let (plan, [a, b, _]) = plan_with_three();
    let mut selection = SelectionManager::new();

    selection.select_id(&plan, a, false);
    selection.select_id(&plan, b, false);

    assert_eq!(selection.selected_ids(), &[b]);
    assert_eq!(selection.primary(), Some(b));
}

#[test]
fn test_multi_select_preserves_order_and_toggles() {
    let (plan, [a, b, c]) = plan_with_three();
    let mut selection = SelectionManager::new();

    selection.select_id(&plan, a, false);
    selection.select_id(&plan, b, true);
    selection.select_id(&plan, c, true);
    assert_eq!(selection.selected_ids(), &[a, b, c]);

    // Shift+click on a selected member removes it; the primary falls back
    // to the most recent remaining member.
    selection.select_id(&plan, c, true);
    assert_eq!(selection.selected_ids(), &[a, b]);
    assert_eq!(selection.primary(), Some(b));
}

#[test]
fn test_unknown_id_is_ignored() {
    let (plan, [a, _, _]) = plan_with_three();
    let mut selection = SelectionManager::new();

    selection.select_id(&plan, a, false);
    selection.select_id(&plan, 999, true);
    assert_eq!(selection.selected_ids(), &[a]);

    // Without multi, clicking nothing clears the selection.
    selection.select_id(&plan, 999, false);
    assert!(selection.is_empty());
    assert_eq!(selection.primary(), None);
}

#[test]
fn test_select_all_and_deselect_all() {
    let (plan, [_, _, c]) = plan_with_three();
    let mut selection = SelectionManager::new();

    selection.select_all(&plan);
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.primary(), Some(c));

    selection.deselect_all();
    assert!(selection.is_empty());
}

#[test]
fn test_retain_existing_drops_deleted_members() {
    let (mut plan, [a, b, c]) = plan_with_three();
    let mut selection = SelectionManager::new();
    selection.select_all(&plan);

    plan.remove(c);
    selection.retain_existing(&plan);

    assert_eq!(selection.selected_ids(), &[a, b]);
    assert_eq!(selection.primary(), Some(b));
}
