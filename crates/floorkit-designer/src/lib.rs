//! # FloorKit Designer
//!
//! This crate is the layout engine behind FloorKit's plan editor. It places
//! rectangular and right-triangular footprints on a bounded, multi-level
//! grid, detects geometric overlap between them under quantized rotation,
//! and drives live re-validation while the user drags or rotates a
//! selection as a single rigid transform.
//!
//! ## Core Components
//!
//! - **Footprints**: rectangles and right-triangle halves with quarter-turn
//!   rotation on discrete levels
//! - **Geometry**: exact vertex generation and intersection tests for
//!   axis-aligned outlines
//! - **Collision**: epsilon-shrunk broad phase plus exact narrow phase,
//!   with the complementary-triangle exception
//! - **Snapping**: grid, quarter-turn, and level-band constraints
//! - **Plan / Selection**: caller-side footprint storage and the ordered
//!   selection participating in a gesture
//! - **Session**: the begin/update/end-or-cancel transform state machine
//!
//! ## Architecture
//!
//! The engine is a library with no standalone surface; the surrounding
//! application owns footprint storage and the input stream:
//!
//! ```text
//! Plan (footprint records, caller-owned)
//!   ├── Selection (ordered member ids)
//!   └── TransformSession (one gesture)
//!         ├── Snapping (grid / rotation / height band)
//!         └── Collision (throttled scan during the gesture)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_designer::plan::PlanStore;
//! use floorkit_designer::session::{GestureDelta, TransformMode, TransformSession};
//! use floorkit_designer::snapping::SnapConfig;
//!
//! let mut plan = PlanStore::new();
//! let id = plan.place_rectangle(0.0, 0.0, 6.0, 6.0, 0);
//!
//! let mut session = TransformSession::new(SnapConfig::default());
//! session.begin(&plan, &plan, &[id], TransformMode::Translate).unwrap();
//! let feedback = session.update(
//!     &plan,
//!     GestureDelta::Translate { dx: 1.4, dy: 0.2, elevation: 40.0 },
//! );
//! assert!(feedback.colliding.is_empty());
//! let commit = session.end(&plan);
//! plan.apply_commit(&commit);
//! ```

pub mod collision;
pub mod footprint;
pub mod geometry;
pub mod plan;
pub mod selection;
pub mod session;
pub mod snapping;

pub use collision::{find_colliding, overlaps};
pub use footprint::{Footprint, FootprintKind, Rotation};
pub use geometry::{
    edges_intersect, footprint_outline, point_in_rectangle, point_in_triangle,
    rectangle_vertices, rotate_quarter, segments_intersect, triangle_vertices, Outline, Point,
};
pub use plan::{CanonicalFootprint, FootprintCatalog, PlanStore};
pub use selection::SelectionManager;
pub use session::{
    Clock, CommitInstruction, GestureDelta, ManualClock, Placement, SystemClock, TransformMode,
    TransformSession, UpdateFeedback,
};
pub use snapping::{
    clamp_height, snap_point_to_grid, snap_rotation, snap_to_grid, LevelPolicy, SnapConfig,
};
