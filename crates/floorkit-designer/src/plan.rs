//! Plan storage: the placed footprints of one design, in placement order.
//!
//! The store is the caller-side owner of footprint records. The transform
//! session never mutates it directly; it reads a snapshot at gesture start
//! and proposes final values back through a commit instruction, which the
//! caller applies with [`PlanStore::apply_commit`] as one logical edit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use floorkit_core::types::{FootprintId, Level};

use crate::footprint::{Footprint, FootprintKind};
use crate::session::CommitInstruction;

/// Canonical (unrotated) dimensions and kind of a footprint, as resolved
/// through a [`FootprintCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalFootprint {
    pub width: f64,
    pub height: f64,
    pub kind: FootprintKind,
}

/// Resolves a footprint id to its canonical base dimensions.
///
/// Placed records carry rotation-applied state, but triangle vertex
/// selection needs the canonical base size. A lookup miss excludes that
/// footprint from the current cycle; it is never defaulted to a phantom
/// unit shape.
pub trait FootprintCatalog {
    fn canonical(&self, id: FootprintId) -> Option<CanonicalFootprint>;
}

/// Insertion-ordered footprint storage with id generation.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    items: Vec<Footprint>,
    index: HashMap<FootprintId, usize>,
    next_id: FootprintId,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> FootprintId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next ID to be generated.
    pub fn set_next_id(&mut self, id: FootprintId) {
        self.next_id = id;
    }

    /// Places a rectangular footprint and returns its id.
    pub fn place_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        level: Level,
    ) -> FootprintId {
        let id = self.generate_id();
        self.insert(Footprint::rectangular(id, x, y, width, height).with_level(level));
        id
    }

    /// Places a triangular footprint and returns its id.
    pub fn place_triangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        level: Level,
    ) -> FootprintId {
        let id = self.generate_id();
        self.insert(Footprint::triangular(id, x, y, width, height).with_level(level));
        id
    }

    /// Inserts a footprint with a caller-assigned id, replacing any record
    /// with the same id.
    pub fn insert(&mut self, footprint: Footprint) {
        if footprint.id >= self.next_id {
            self.next_id = footprint.id + 1;
        }
        match self.index.get(&footprint.id) {
            Some(&slot) => self.items[slot] = footprint,
            None => {
                self.index.insert(footprint.id, self.items.len());
                self.items.push(footprint);
            }
        }
    }

    /// Gets a reference to a footprint by ID.
    pub fn get(&self, id: FootprintId) -> Option<&Footprint> {
        self.index.get(&id).map(|&slot| &self.items[slot])
    }

    /// Gets a mutable reference to a footprint by ID.
    pub fn get_mut(&mut self, id: FootprintId) -> Option<&mut Footprint> {
        self.index.get(&id).map(|&slot| &mut self.items[slot])
    }

    /// Removes a footprint and returns it.
    pub fn remove(&mut self, id: FootprintId) -> Option<Footprint> {
        let slot = self.index.remove(&id)?;
        let removed = self.items.remove(slot);
        for moved in self.index.values_mut() {
            if *moved > slot {
                *moved -= 1;
            }
        }
        Some(removed)
    }

    pub fn contains(&self, id: FootprintId) -> bool {
        self.index.contains_key(&id)
    }

    /// Footprints in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Footprint> {
        self.items.iter()
    }

    /// Mutable iteration in placement order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Footprint> {
        self.items.iter_mut()
    }

    /// The footprints as a slice, suitable for the collision scan.
    pub fn footprints(&self) -> &[Footprint] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all footprints.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Applies a commit instruction from a completed transform session as
    /// one logical edit. Members that no longer exist are skipped. The
    /// caller records the edit in its own history; this store keeps none.
    pub fn apply_commit(&mut self, commit: &CommitInstruction) {
        for placement in &commit.members {
            match self.get_mut(placement.id) {
                Some(fp) => {
                    fp.position = placement.position;
                    fp.rotation = placement.rotation;
                    fp.level = placement.level;
                }
                None => {
                    warn!(id = placement.id, "commit target vanished, skipping");
                }
            }
        }
        debug!(members = commit.members.len(), "applied commit instruction");
    }
}

impl FootprintCatalog for PlanStore {
    fn canonical(&self, id: FootprintId) -> Option<CanonicalFootprint> {
        self.get(id).map(|fp| CanonicalFootprint {
            width: fp.width,
            height: fp.height,
            kind: fp.kind,
        })
    }
}
