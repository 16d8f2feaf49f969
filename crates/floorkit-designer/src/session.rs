//! Transform session: one begin/update*/end-or-cancel gesture lifecycle.
//!
//! A session owns a drag or rotate gesture over one or many selected
//! footprints. It captures each member's starting state once, derives every
//! tentative placement from that stable baseline as raw deltas stream in,
//! runs the collision scan on a throttled cadence for live feedback, and on
//! completion emits a commit instruction for the caller to apply. It never
//! mutates caller-owned footprint storage.
//!
//! State machine:
//!
//! ```text
//! Idle --begin--> Active --end-----> Idle (commit instruction returned)
//!                   |
//!                   +----cancel----> Idle (nothing returned)
//! ```
//!
//! `begin` while active and `update`/`end` while idle are tolerated: the
//! former fails without side effects, the latter return neutral results, so
//! a stray input event after teardown cannot corrupt anything.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use floorkit_core::error::{Result, SessionError};
use floorkit_core::types::{FootprintId, Level};

use crate::collision::find_colliding;
use crate::footprint::{Footprint, FootprintKind, Rotation};
use crate::geometry::{rotate_quarter, Point};
use crate::plan::{FootprintCatalog, PlanStore};
use crate::snapping::{
    clamp_height, snap_point_to_grid, snap_rotation, snap_to_grid, LevelPolicy, SnapConfig,
};

/// Time source for the collision-scan throttle. Injectable so tests can
/// simulate time without real delays.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock. Clones share the same time, so a caller can keep a
/// handle and advance it after handing the clock to a session.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Which rigid transform a session performs. Modes are mutually exclusive;
/// switching requires ending or cancelling the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformMode {
    Translate,
    Rotate,
}

/// One raw input tick from the pointer or gizmo, as a delta from the
/// gesture's start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureDelta {
    /// Plan-plane drag delta plus the raw cursor elevation.
    Translate { dx: f64, dy: f64, elevation: f64 },
    /// Accumulated rotation of the gizmo handle, in radians.
    Rotate { radians: f64 },
}

impl GestureDelta {
    fn is_finite(&self) -> bool {
        match *self {
            GestureDelta::Translate { dx, dy, elevation } => {
                dx.is_finite() && dy.is_finite() && elevation.is_finite()
            }
            GestureDelta::Rotate { radians } => radians.is_finite(),
        }
    }

    fn matches(&self, mode: TransformMode) -> bool {
        matches!(
            (self, mode),
            (GestureDelta::Translate { .. }, TransformMode::Translate)
                | (GestureDelta::Rotate { .. }, TransformMode::Rotate)
        )
    }
}

/// Tentative or final pose of one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: FootprintId,
    pub position: Point,
    pub rotation: Rotation,
    pub level: Level,
}

/// Live feedback returned from every `update`: the members' tentative
/// placements, the footprints currently overlapping something, and the
/// band-clamped cursor elevation for translate gestures.
#[derive(Debug, Clone, Default)]
pub struct UpdateFeedback {
    pub placements: Vec<Placement>,
    pub colliding: HashSet<FootprintId>,
    pub display_height: Option<f64>,
}

/// Final placements from a completed gesture. The caller applies these to
/// its own storage as a single logical edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitInstruction {
    pub members: Vec<Placement>,
}

impl CommitInstruction {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Per-member state captured at gesture start. Deltas are always applied to
/// these values, never to values mutated mid-gesture.
#[derive(Debug, Clone)]
struct MemberSnapshot {
    id: FootprintId,
    position: Point,
    center: Point,
    rotation: Rotation,
    level: Level,
    /// Canonical base extents from the catalog lookup.
    width: f64,
    height: f64,
    kind: FootprintKind,
}

impl MemberSnapshot {
    fn effective_size(&self, rotation: Rotation) -> (f64, f64) {
        if rotation.swaps_extents() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

#[derive(Debug)]
struct ActiveGesture {
    gesture_id: Uuid,
    mode: TransformMode,
    /// Group centroid for 2+ members, the member's own center otherwise.
    anchor: Point,
    members: Vec<MemberSnapshot>,
    last_delta: Option<GestureDelta>,
    colliding: HashSet<FootprintId>,
    last_scan: Option<Instant>,
}

/// The transform-session state machine.
///
/// Single-threaded and purely reactive: all computation happens
/// synchronously inside `begin`/`update`/`end`/`cancel` calls driven by the
/// caller's input stream. The only timing-sensitive behavior is the
/// collision-scan throttle, a wall-clock gate on the injected [`Clock`].
pub struct TransformSession<C: Clock = SystemClock> {
    config: SnapConfig,
    clock: C,
    gesture: Option<ActiveGesture>,
}

impl TransformSession<SystemClock> {
    /// Creates an idle session on the wall clock.
    pub fn new(config: SnapConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TransformSession<C> {
    /// Creates an idle session with an injected time source.
    pub fn with_clock(config: SnapConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            gesture: None,
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SnapConfig {
        &mut self.config
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The active gesture's mode, if any.
    pub fn mode(&self) -> Option<TransformMode> {
        self.gesture.as_ref().map(|g| g.mode)
    }

    /// The active gesture's id for log correlation, if any.
    pub fn gesture_id(&self) -> Option<Uuid> {
        self.gesture.as_ref().map(|g| g.gesture_id)
    }

    /// The most recently computed overlap set. Empty when idle.
    pub fn colliding_ids(&self) -> HashSet<FootprintId> {
        self.gesture
            .as_ref()
            .map(|g| g.colliding.clone())
            .unwrap_or_default()
    }

    /// Starts a gesture over `selection`.
    ///
    /// Captures every member's position, rotation, level, and canonical
    /// extents, plus the group anchor. Selected ids missing from the plan
    /// snapshot or the catalog are skipped; invalid footprint geometry
    /// (NaN, non-positive extents) is rejected here rather than deep inside
    /// geometry code. Fails without side effects if a session is already
    /// active or no members survive the capture.
    pub fn begin(
        &mut self,
        plan: &PlanStore,
        catalog: &dyn FootprintCatalog,
        selection: &[FootprintId],
        mode: TransformMode,
    ) -> Result<()> {
        if self.gesture.is_some() {
            return Err(SessionError::AlreadyActive.into());
        }
        if selection.is_empty() {
            return Err(SessionError::EmptySelection.into());
        }

        let mut members = Vec::with_capacity(selection.len());
        for &id in selection {
            let Some(record) = plan.get(id) else {
                warn!(id, "selected footprint missing from plan snapshot, skipping");
                continue;
            };
            record.validate()?;
            let Some(canonical) = catalog.canonical(id) else {
                warn!(id, "no canonical dimensions for footprint, skipping");
                continue;
            };
            members.push(MemberSnapshot {
                id,
                position: record.position,
                center: record.center(),
                rotation: record.rotation,
                level: record.level,
                width: canonical.width,
                height: canonical.height,
                kind: canonical.kind,
            });
        }
        if members.is_empty() {
            return Err(SessionError::EmptySelection.into());
        }

        let anchor = if members.len() == 1 {
            members[0].center
        } else {
            let n = members.len() as f64;
            let (sx, sy) = members
                .iter()
                .fold((0.0, 0.0), |(sx, sy), m| (sx + m.center.x, sy + m.center.y));
            Point::new(sx / n, sy / n)
        };

        let gesture_id = Uuid::new_v4();
        debug!(
            %gesture_id,
            ?mode,
            members = members.len(),
            "transform session started"
        );
        self.gesture = Some(ActiveGesture {
            gesture_id,
            mode,
            anchor,
            members,
            last_delta: None,
            colliding: HashSet::new(),
            last_scan: None,
        });
        Ok(())
    }

    /// Feeds one raw input tick into the active gesture.
    ///
    /// Snaps the delta, derives every member's tentative placement from its
    /// captured baseline, and refreshes the overlap set if the throttle
    /// interval has elapsed since the last scan. Returns a neutral result
    /// when no session is active. Non-finite or wrong-mode deltas are
    /// ignored; the gesture continues from its previous delta.
    pub fn update(&mut self, plan: &PlanStore, raw: GestureDelta) -> UpdateFeedback {
        let now = self.clock.now();
        let Some(gesture) = self.gesture.as_mut() else {
            trace!("update ignored, no active session");
            return UpdateFeedback::default();
        };

        if !raw.is_finite() {
            warn!(gesture = %gesture.gesture_id, "ignoring non-finite gesture delta");
        } else if !raw.matches(gesture.mode) {
            warn!(
                gesture = %gesture.gesture_id,
                mode = ?gesture.mode,
                "gesture delta does not match session mode, ignoring"
            );
        } else {
            gesture.last_delta = Some(raw);
        }

        let placements = compute_placements(&self.config, gesture, plan);

        let scan_due = gesture
            .last_scan
            .is_none_or(|at| now.duration_since(at) >= self.config.collision_throttle);
        if scan_due {
            let colliding = scan_collisions(&self.config, gesture, plan, &placements);
            trace!(
                gesture = %gesture.gesture_id,
                colliding = colliding.len(),
                "collision scan"
            );
            gesture.colliding = colliding;
            gesture.last_scan = Some(now);
        }

        let display_height = match gesture.last_delta {
            Some(GestureDelta::Translate { elevation, .. }) => {
                Some(clamp_height(elevation, &self.config.active_band()))
            }
            _ => None,
        };

        UpdateFeedback {
            placements,
            colliding: gesture.colliding.clone(),
            display_height,
        }
    }

    /// Completes the gesture, returning the final placements exactly as the
    /// last `update` computed them. The session returns to idle and the
    /// overlap set is cleared; applying the placements (and recording them
    /// as one reversible edit) is the caller's responsibility. Returns an
    /// empty instruction when no session is active.
    pub fn end(&mut self, plan: &PlanStore) -> CommitInstruction {
        let Some(gesture) = self.gesture.take() else {
            trace!("end ignored, no active session");
            return CommitInstruction::default();
        };
        let members = compute_placements(&self.config, &gesture, plan);
        debug!(
            gesture = %gesture.gesture_id,
            members = members.len(),
            "transform session committed"
        );
        CommitInstruction { members }
    }

    /// Discards the gesture without producing a commit instruction. Called
    /// on loss of focus or external interruption; no tentative state leaks
    /// back to the caller.
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            debug!(gesture = %gesture.gesture_id, "transform session cancelled");
        }
    }
}

fn committed_level(config: &SnapConfig, member: &MemberSnapshot) -> Level {
    match config.level_policy {
        LevelPolicy::PreserveLevel => member.level,
        LevelPolicy::AdoptActive => config.active_level,
    }
}

/// Derives every surviving member's tentative placement from its captured
/// baseline and the gesture's last snapped delta. Members deleted from the
/// plan mid-gesture are skipped; the rest of the group proceeds.
fn compute_placements(
    config: &SnapConfig,
    gesture: &ActiveGesture,
    plan: &PlanStore,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(gesture.members.len());
    for member in &gesture.members {
        if !plan.contains(member.id) {
            continue;
        }
        let placement = match gesture.last_delta {
            Some(GestureDelta::Translate { dx, dy, .. }) => {
                let sdx = snap_to_grid(dx, config.grid_cell);
                let sdy = snap_to_grid(dy, config.grid_cell);
                Placement {
                    id: member.id,
                    position: Point::new(member.position.x + sdx, member.position.y + sdy),
                    rotation: member.rotation,
                    level: committed_level(config, member),
                }
            }
            Some(GestureDelta::Rotate { radians }) => {
                let delta = snap_rotation(radians);
                let rotation = member.rotation.compose(delta);
                let position = if gesture.members.len() == 1 {
                    // Single-member rotation spins in place.
                    member.position
                } else {
                    let center = rotate_quarter(member.center, gesture.anchor, delta);
                    let (w, h) = member.effective_size(rotation);
                    snap_point_to_grid(
                        Point::new(center.x - w / 2.0, center.y - h / 2.0),
                        config.grid_cell,
                    )
                };
                Placement {
                    id: member.id,
                    position,
                    rotation,
                    level: committed_level(config, member),
                }
            }
            None => Placement {
                id: member.id,
                position: member.position,
                rotation: member.rotation,
                level: committed_level(config, member),
            },
        };
        placements.push(placement);
    }
    placements
}

/// Runs the overlap scan over the full scene with the members' tentative
/// placements substituted for their stored records.
fn scan_collisions(
    config: &SnapConfig,
    gesture: &ActiveGesture,
    plan: &PlanStore,
    placements: &[Placement],
) -> HashSet<FootprintId> {
    let tentative: HashMap<FootprintId, &Placement> =
        placements.iter().map(|p| (p.id, p)).collect();

    let mut scene: Vec<Footprint> = Vec::with_capacity(plan.len());
    for fp in plan.iter() {
        match tentative.get(&fp.id) {
            Some(placement) => {
                // Rebuild the member from its snapshot so externally
                // mutated records cannot skew the scan mid-gesture.
                let Some(member) = gesture.members.iter().find(|m| m.id == fp.id) else {
                    continue;
                };
                scene.push(Footprint {
                    id: member.id,
                    position: placement.position,
                    width: member.width,
                    height: member.height,
                    rotation: placement.rotation,
                    kind: member.kind,
                    level: placement.level,
                });
            }
            None => scene.push(fp.clone()),
        }
    }
    find_colliding(&scene, None, config.collision_epsilon)
}
