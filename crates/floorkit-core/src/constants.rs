//! Engine-wide configuration defaults.
//!
//! All lengths are in world units (inches). Callers override these through
//! the layout engine's configuration types; the constants only seed the
//! defaults.

/// Default grid cell size for position snapping.
pub const DEFAULT_GRID_CELL: f64 = 1.5;

/// Default inward shrink applied to bounding boxes before the broad-phase
/// overlap test. Roughly 1% of the smallest supported footprint dimension,
/// so edge-to-edge adjacency never reads as a collision.
pub const DEFAULT_COLLISION_EPSILON: f64 = 0.05;

/// Minimum interval between collision recomputations during a gesture, in
/// milliseconds. Pointer streams can exceed hundreds of events per second
/// and the scan is quadratic per level.
pub const COLLISION_THROTTLE_MS: u64 = 50;

/// Default story height used to derive per-level elevation bands.
pub const DEFAULT_STORY_HEIGHT: f64 = 108.0;
