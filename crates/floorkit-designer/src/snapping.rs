//! Grid, rotation, and elevation snapping.
//!
//! The snap layer quantizes tentative gesture values before they reach the
//! collision engine: positions to the grid cell, rotation deltas to quarter
//! turns, and the interactive cursor elevation into the active level's
//! height band. Elevation clamping is display-only; committing a footprint
//! to a different level is a separate, explicit decision carried by
//! [`LevelPolicy`].

use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use floorkit_core::constants::{
    COLLISION_THROTTLE_MS, DEFAULT_COLLISION_EPSILON, DEFAULT_GRID_CELL,
};
use floorkit_core::types::{Level, LevelBand, LevelBands};

use crate::footprint::Rotation;
use crate::geometry::Point;

/// Snaps a scalar to the nearest grid line. A non-positive cell size
/// disables snapping.
pub fn snap_to_grid(value: f64, cell_size: f64) -> f64 {
    if cell_size <= 0.0 {
        return value;
    }
    (value / cell_size).round() * cell_size
}

/// Snaps a point to the grid, each axis independently.
pub fn snap_point_to_grid(p: Point, cell_size: f64) -> Point {
    Point::new(snap_to_grid(p.x, cell_size), snap_to_grid(p.y, cell_size))
}

/// Snaps a raw rotation delta (radians) to the nearest quarter turn.
pub fn snap_rotation(delta_radians: f64) -> Rotation {
    Rotation::from_quarter_turns((delta_radians / FRAC_PI_2).round() as i32)
}

/// Clamps a cursor elevation into a level's height band.
pub fn clamp_height(elevation: f64, band: &LevelBand) -> f64 {
    band.clamp(elevation)
}

/// What level a cross-level drag commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelPolicy {
    /// Every member keeps the level it started the gesture on.
    #[default]
    PreserveLevel,
    /// Every member commits to the session's active level.
    AdoptActive,
}

/// Caller-supplied snapping and constraint configuration for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Grid cell size for position snapping, world units.
    pub grid_cell: f64,
    /// Inward bounding-box shrink for the collision broad phase.
    pub collision_epsilon: f64,
    /// Minimum interval between collision recomputations during a gesture.
    pub collision_throttle: Duration,
    /// Per-level elevation bands.
    pub bands: LevelBands,
    /// The level currently being edited; its band clamps the cursor.
    pub active_level: Level,
    /// Commit policy for cross-level drags.
    pub level_policy: LevelPolicy,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_cell: DEFAULT_GRID_CELL,
            collision_epsilon: DEFAULT_COLLISION_EPSILON,
            collision_throttle: Duration::from_millis(COLLISION_THROTTLE_MS),
            bands: LevelBands::default(),
            active_level: 0,
            level_policy: LevelPolicy::default(),
        }
    }
}

impl SnapConfig {
    /// The height band of the active level.
    pub fn active_band(&self) -> LevelBand {
        self.bands.band(self.active_level)
    }
}
