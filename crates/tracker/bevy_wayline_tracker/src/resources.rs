use bevy::prelude::*;

use wayline_tracker_core::{CorridorQuery, EstimationService, PathTracker};

/// The core tracker. Exposed so hosts can call `reset`,
/// `set_corners_visible`, or read the corridor and polyline state.
#[derive(Resource)]
pub struct TrackerResource(pub PathTracker);

/// Host-supplied pathfinding over the navigable surface. The tracker idles
/// until this resource exists.
#[derive(Resource)]
pub struct CorridorBackend(pub Box<dyn CorridorQuery + Send + Sync>);

/// Optional host-supplied travel-estimation sink.
#[derive(Resource)]
pub struct EstimationBackend(pub Box<dyn EstimationService + Send + Sync>);

/// Session state shared with the host game. `active` is set by the host;
/// `stop_requested` is level-set by the tracker while a route stays
/// unreachable, so repeated requests are harmless.
#[derive(Resource, Default)]
pub struct NavigationState {
    pub active: bool,
    pub stop_requested: bool,
}
