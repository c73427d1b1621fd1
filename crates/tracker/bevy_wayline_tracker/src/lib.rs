//! Bevy plugin wrapping `wayline-tracker-core`.
//!
//! The host game supplies a [`CorridorBackend`] resource (its pathfinding),
//! tags one entity with [`TrackerStart`] and one with [`TrackerEnd`], and
//! flips [`NavigationState::active`] when guidance begins. The plugin
//! drives the core tracker every `Update`, spawns [`CornerMarker`] entities
//! for corridor corners, draws the corridor polyline with gizmos, and
//! surfaces unreachable routes as [`RouteUnreachable`] events plus a
//! [`NavigationState::stop_requested`] level flag.

use bevy::prelude::*;

use wayline_tracker_core::{PathTracker, TargetRef, TrackerConfig};

mod components;
mod resources;
mod systems;

pub use components::{CornerMarker, TrackerEnd, TrackerStart};
pub use resources::{CorridorBackend, EstimationBackend, NavigationState, TrackerResource};
pub use systems::{draw_corridor, drive_tracker};

/// Fired each tick an active navigation session holds an unreachable route.
#[derive(Event, Debug, Clone)]
pub struct RouteUnreachable {
    pub message: String,
}

/// Stable reference to an endpoint entity for the core tracker.
pub fn target_ref(entity: Entity) -> TargetRef {
    TargetRef(entity.to_bits())
}

#[derive(Default)]
pub struct WaylineTrackerPlugin {
    pub config: TrackerConfig,
}

impl Plugin for WaylineTrackerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TrackerResource(PathTracker::new(self.config.clone())))
            .init_resource::<NavigationState>()
            .add_event::<RouteUnreachable>()
            .add_systems(
                Update,
                (
                    drive_tracker,
                    // Gizmos are unavailable in headless apps.
                    draw_corridor.run_if(resource_exists::<GizmoConfigStore>),
                )
                    .chain(),
            );
    }
}
