//! PathTracker: data ownership and the per-frame driver.
//!
//! Owns the corridor, the polyline buffer, the marker pool, and all
//! throttle state. `tick` runs once per render frame; a triggered refresh
//! schedules exactly one deferred reconciliation pass that runs at the next
//! frame boundary (the start of the following `tick`), reading a snapshot
//! taken before the corridor was overwritten. This keeps the shared
//! corridor's read-before-write ordering explicit even though everything
//! runs on one thread.

use log::{debug, warn};

use crate::config::TrackerConfig;
use crate::corridor::{Corridor, CorridorStatus};
use crate::host::{Host, MarkerBackend};
use crate::ids::TargetRef;
use crate::markers::MarkerPool;
use crate::math::Vec3;
use crate::polyline::Polyline;

/// Alert shown while an active navigation session holds an unreachable route.
pub const UNREACHABLE_ALERT: &str = "No reachable route to the destination.";

#[derive(Debug)]
pub struct PathTracker {
    cfg: TrackerConfig,

    start: Option<TargetRef>,
    end: Option<TargetRef>,

    corridor: Corridor,

    // Throttle state
    elapsed: f32,
    force_recalc: bool,

    // One-element deferred-pass queue: `pending_pass` is the token,
    // `snapshot` the vertex data captured ahead of the overwrite.
    // Scheduling while a pass is outstanding replaces it.
    pending_pass: bool,
    snapshot: Vec<Vec3>,

    polyline: Polyline,
    pool: MarkerPool,
    corners_visible: bool,
    visibility_dirty: bool,
}

impl PathTracker {
    pub fn new(cfg: TrackerConfig) -> Self {
        let corners_visible = cfg.corners_visible;
        Self {
            cfg,
            start: None,
            end: None,
            corridor: Corridor::new(),
            elapsed: 0.0,
            force_recalc: false,
            pending_pass: false,
            snapshot: Vec::new(),
            polyline: Polyline::new(),
            pool: MarkerPool::new(),
            corners_visible,
            visibility_dirty: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.cfg
    }

    #[inline]
    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    #[inline]
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    #[inline]
    pub fn markers(&self) -> &MarkerPool {
        &self.pool
    }

    #[inline]
    pub fn corners_visible(&self) -> bool {
        self.corners_visible
    }

    #[inline]
    pub fn endpoints(&self) -> (Option<TargetRef>, Option<TargetRef>) {
        (self.start, self.end)
    }

    /// Set endpoint A. Always forces a recomputation on the next tick.
    pub fn set_start(&mut self, start: Option<TargetRef>) {
        self.start = start;
        self.force_recalc = true;
    }

    /// Set endpoint B. A fresh destination gets one synchronous corridor
    /// query immediately so it has a valid corridor before the next
    /// scheduled refresh.
    pub fn set_end(&mut self, end: Option<TargetRef>, host: &mut Host<'_>) {
        self.end = end;
        if let Some(end) = end {
            self.force_recalc = true;
            if let Some(start) = self.start {
                self.recompute(start, end, host);
            }
        }
    }

    /// Cancel any pending reconciliation pass, clear both endpoints, and
    /// collapse the polyline to a single degenerate position.
    pub fn reset(&mut self) {
        self.pending_pass = false;
        self.snapshot.clear();
        self.start = None;
        self.end = None;
        self.elapsed = 0.0;
        self.force_recalc = false;
        self.polyline.collapse();
    }

    /// Toggle corner visualization. The effect is applied at the next
    /// reconciliation pass, once per transition.
    pub fn set_corners_visible(&mut self, visible: bool) {
        if visible != self.corners_visible {
            self.corners_visible = visible;
            self.visibility_dirty = true;
        }
    }

    /// Per-frame driver.
    pub fn tick(&mut self, dt: f32, host: &mut Host<'_>) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            self.polyline.set_enabled(false);
            self.force_corners_off(host.markers);
            return;
        };
        self.polyline.set_enabled(true);

        // Frame boundary: the pass scheduled last tick consumes its
        // snapshot before anything touches the corridor this tick.
        if self.pending_pass {
            self.pending_pass = false;
            self.run_pass(host.markers);
        }

        self.elapsed += dt;
        if self.elapsed > self.cfg.update_period || self.force_recalc {
            // Snapshot-and-schedule first; the recompute below overwrites
            // the corridor in place.
            self.snapshot.clear();
            self.snapshot.extend_from_slice(&self.corridor.points);
            self.pending_pass = true;

            host.estimation.update_estimation(&self.corridor.points);

            self.elapsed = 0.0;
            self.force_recalc = false;
            self.recompute(start, end, host);
        }

        // Level-triggered failure watch: re-fires every tick while the
        // route stays unreachable and a session is active.
        if host.session.is_active() && self.corridor.status != CorridorStatus::Complete {
            warn!(
                "route unreachable (status {:?}), requesting session stop",
                self.corridor.status
            );
            host.alerts.show_alert(UNREACHABLE_ALERT);
            host.session.stop();
        }
    }

    fn recompute(&mut self, start: TargetRef, end: TargetRef, host: &mut Host<'_>) {
        let (Some(from), Some(to)) = (
            host.transforms.position(start),
            host.transforms.position(end),
        ) else {
            // A stale endpoint leaves nothing to route between.
            self.corridor.invalidate();
            return;
        };
        host.query
            .compute_corridor(from, to, self.cfg.area_mask, &mut self.corridor);
        debug!(
            "corridor recomputed: {} corners, status {:?}",
            self.corridor.len(),
            self.corridor.status
        );
    }

    /// Deferred reconciliation pass (phase 2 of the refresh cycle).
    fn run_pass(&mut self, markers: &mut dyn MarkerBackend) {
        // A visibility transition applies to the pool's current handles,
        // so consume the dirty flag ahead of the degenerate early-out.
        if self.visibility_dirty {
            self.visibility_dirty = false;
            self.pool.set_visible(self.corners_visible, markers);
        }

        // Fewer than two corners: nothing to draw, nothing to reconcile.
        if self.snapshot.len() < 2 {
            return;
        }

        self.polyline
            .write_raised(&self.snapshot, self.cfg.ground_offset);

        if self.corners_visible {
            self.pool.update_all(&self.snapshot, markers);
        }
    }

    /// Null-endpoint quiescence: hide corners, applying the off transition
    /// at most once.
    fn force_corners_off(&mut self, markers: &mut dyn MarkerBackend) {
        if self.corners_visible {
            self.corners_visible = false;
            self.visibility_dirty = true;
        }
        if self.visibility_dirty {
            self.visibility_dirty = false;
            self.pool.set_visible(false, markers);
        }
    }
}
