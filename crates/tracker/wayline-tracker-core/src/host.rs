//! Collaborator seams between the core and its host.
//!
//! The core never owns engine objects. Pathfinding, endpoint transforms,
//! marker instantiation, travel-time estimation, alerts, and the
//! navigation session are all reached through the narrow traits below.
//! [`Host`] bundles them so callers thread one value through the tracker's
//! entry points instead of a global instance.

use crate::corridor::Corridor;
use crate::ids::{MarkerHandle, TargetRef};
use crate::math::Vec3;

/// Current positions of host-owned movable transforms.
pub trait TransformSource {
    /// `None` when the reference has gone stale (despawned endpoint).
    fn position(&self, target: TargetRef) -> Option<Vec3>;
}

/// Shortest-corridor computation over the navigable surface.
pub trait CorridorQuery {
    /// Overwrite `out` in place with the corridor from `from` to `to`,
    /// restricted to the given area mask.
    fn compute_corridor(&mut self, from: Vec3, to: Vec3, area_mask: u32, out: &mut Corridor);
}

/// Receives the corridor vertices ahead of each recomputation, e.g. for
/// travel-time or distance estimates.
pub trait EstimationService {
    fn update_estimation(&mut self, points: &[Vec3]);
}

/// The host's navigation session, if any.
pub trait NavigationSession {
    fn is_active(&self) -> bool;
    /// May be requested repeatedly while a route stays unreachable;
    /// implementations must tolerate redundant calls.
    fn stop(&mut self);
}

/// User-facing alert surface.
pub trait AlertService {
    fn show_alert(&mut self, message: &str);
}

/// Lifecycle of corner-marker instances. Handles are host-assigned and
/// opaque to the core.
pub trait MarkerBackend {
    fn spawn(&mut self, position: Vec3) -> MarkerHandle;
    fn despawn(&mut self, handle: MarkerHandle);
    fn set_active(&mut self, handle: MarkerHandle, active: bool);
    fn set_position(&mut self, handle: MarkerHandle, position: Vec3);
}

/// Everything the tracker needs from its host for one call, injected
/// explicitly rather than reached through a singleton.
pub struct Host<'a> {
    pub transforms: &'a dyn TransformSource,
    pub query: &'a mut dyn CorridorQuery,
    pub estimation: &'a mut dyn EstimationService,
    pub session: &'a mut dyn NavigationSession,
    pub alerts: &'a mut dyn AlertService,
    pub markers: &'a mut dyn MarkerBackend,
}
