use bevy::prelude::*;

/// Marker component for the moving start endpoint (usually the player).
#[derive(Component)]
pub struct TrackerStart;

/// Marker component for the destination endpoint. Retagging a different
/// entity forces an immediate corridor recomputation.
#[derive(Component)]
pub struct TrackerEnd;

/// Spawned by the plugin on every corridor-corner marker entity. Hosts can
/// query for it to attach meshes or effects.
#[derive(Component)]
pub struct CornerMarker;
