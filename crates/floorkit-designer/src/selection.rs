//! Manages footprint selection state.
//!
//! The selection is an ordered set of footprint ids participating in one
//! transform gesture. One member is the "primary" selection (the one whose
//! properties a UI would show); the rest follow it through group
//! transforms.

use floorkit_core::types::FootprintId;

use crate::plan::PlanStore;

/// Tracks the ordered set of selected footprints and the primary id.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    members: Vec<FootprintId>,
    primary: Option<FootprintId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of the primary selected footprint.
    pub fn primary(&self) -> Option<FootprintId> {
        self.primary
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[FootprintId] {
        &self.members
    }

    pub fn is_selected(&self, id: FootprintId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Selects a footprint by ID. Unknown ids are ignored.
    ///
    /// If `multi` is `false`, replaces the selection. If `multi` is `true`,
    /// toggles the footprint without affecting the others (Shift+click
    /// behavior).
    ///
    /// Returns the primary selection after the operation.
    pub fn select_id(
        &mut self,
        plan: &PlanStore,
        id: FootprintId,
        multi: bool,
    ) -> Option<FootprintId> {
        if !plan.contains(id) {
            if !multi {
                self.deselect_all();
            }
            return self.primary;
        }

        if !multi {
            self.members.clear();
            self.members.push(id);
            self.primary = Some(id);
            return self.primary;
        }

        if let Some(slot) = self.members.iter().position(|&m| m == id) {
            self.members.remove(slot);
            if self.primary == Some(id) {
                self.primary = self.members.last().copied();
            }
        } else {
            self.members.push(id);
            self.primary = Some(id);
        }
        self.primary
    }

    /// Selects every footprint in the plan, in placement order. The last
    /// placed footprint becomes primary.
    pub fn select_all(&mut self, plan: &PlanStore) {
        self.members = plan.iter().map(|fp| fp.id).collect();
        self.primary = self.members.last().copied();
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.members.clear();
        self.primary = None;
    }

    /// Drops members that no longer exist in the plan (deleted mid-session
    /// by another part of the application).
    pub fn retain_existing(&mut self, plan: &PlanStore) {
        self.members.retain(|&id| plan.contains(id));
        if self.primary.is_some_and(|id| !plan.contains(id)) {
            self.primary = self.members.last().copied();
        }
    }
}
