//! Footprint model: quantized rotation and the two footprint kinds.
//!
//! A footprint is the occupied outline of one placed object: a rectangle,
//! or the right-triangle half of a rectangle. Rotation is always a multiple
//! of 90 degrees, so every outline stays axis-aligned; rotating a rectangle
//! only swaps its effective extents, and rotating a triangle selects which
//! half of the bounding box it occupies.

use serde::{Deserialize, Serialize};

use floorkit_core::error::PlanError;
use floorkit_core::types::{FootprintId, Level};

use crate::geometry::Point;

/// Quantized rotation state. Arithmetic is mod 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Number of quarter turns from zero (0..=3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotation from a (possibly negative) quarter-turn count.
    pub fn from_quarter_turns(turns: i32) -> Self {
        Self::ALL[turns.rem_euclid(4) as usize]
    }

    /// Rotation from degrees, rounded to the nearest quarter turn.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_quarter_turns((degrees / 90.0).round() as i32)
    }

    /// Composes two rotations (mod 360).
    pub fn compose(self, delta: Rotation) -> Self {
        Self::from_quarter_turns(i32::from(self.quarter_turns()) + i32::from(delta.quarter_turns()))
    }

    /// The rotation that takes `self` to `other` (mod 360).
    pub fn offset_to(self, other: Rotation) -> Rotation {
        Self::from_quarter_turns(
            i32::from(other.quarter_turns()) - i32::from(self.quarter_turns()),
        )
    }

    /// Whether this rotation swaps a footprint's effective width and height.
    pub fn swaps_extents(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// The two footprint outline kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintKind {
    /// The full bounding rectangle.
    Rectangular,
    /// The right-triangle half of the bounding rectangle; rotation selects
    /// which half.
    Triangular,
}

/// A placed footprint on the plan grid.
///
/// `position` is the minimum-x/minimum-y corner of the effective bounding
/// box (the top-left corner in plan view: x grows east, y grows south).
/// `width` and `height` are the extents before rotation; the effective
/// extents swap when the rotation is 90 or 270 degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub id: FootprintId,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    pub kind: FootprintKind,
    pub level: Level,
}

impl Footprint {
    /// Creates a rectangular footprint at rotation zero on the given level.
    pub fn rectangular(id: FootprintId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
            width,
            height,
            rotation: Rotation::Deg0,
            kind: FootprintKind::Rectangular,
            level: 0,
        }
    }

    /// Creates a triangular footprint at rotation zero on the given level.
    pub fn triangular(id: FootprintId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind: FootprintKind::Triangular,
            ..Self::rectangular(id, x, y, width, height)
        }
    }

    /// Builder-style rotation override.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style level override.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn is_triangular(&self) -> bool {
        self.kind == FootprintKind::Triangular
    }

    /// Extents with the rotation applied: swapped at 90/270.
    pub fn effective_size(&self) -> (f64, f64) {
        if self.rotation.swaps_extents() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let (w, h) = self.effective_size();
        (
            self.position.x,
            self.position.y,
            self.position.x + w,
            self.position.y + h,
        )
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        let (w, h) = self.effective_size();
        Point::new(self.position.x + w / 2.0, self.position.y + h / 2.0)
    }

    /// Rejects out-of-domain geometry: non-finite coordinates or extents,
    /// and zero or negative extents. Checked once when a gesture begins.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.position.x.is_finite()
            || !self.position.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(PlanError::NonFiniteGeometry { id: self.id });
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlanError::InvalidDimensions {
                id: self.id,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
