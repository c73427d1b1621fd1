use bevy::prelude::*;
use std::collections::HashMap;

use crate::components::{CornerMarker, TrackerEnd, TrackerStart};
use crate::resources::{CorridorBackend, EstimationBackend, NavigationState, TrackerResource};
use crate::{target_ref, RouteUnreachable};
use wayline_tracker_core::{
    AlertService, EstimationService, Host, MarkerBackend, MarkerHandle, NavigationSession,
    TargetRef, TransformSource,
};

#[inline]
fn to_core(v: Vec3) -> wayline_tracker_core::Vec3 {
    wayline_tracker_core::Vec3::new(v.x, v.y, v.z)
}

#[inline]
fn to_bevy(v: wayline_tracker_core::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Endpoint positions sampled once at the top of the frame.
struct SampledTransforms {
    map: HashMap<TargetRef, wayline_tracker_core::Vec3>,
}

impl TransformSource for SampledTransforms {
    fn position(&self, target: TargetRef) -> Option<wayline_tracker_core::Vec3> {
        self.map.get(&target).copied()
    }
}

struct SessionProbe {
    active: bool,
    stop_requested: bool,
}

impl NavigationSession for SessionProbe {
    fn is_active(&self) -> bool {
        self.active
    }
    fn stop(&mut self) {
        self.stop_requested = true;
    }
}

#[derive(Default)]
struct AlertBuffer {
    messages: Vec<String>,
}

impl AlertService for AlertBuffer {
    fn show_alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

struct NoopEstimation;

impl EstimationService for NoopEstimation {
    fn update_estimation(&mut self, _points: &[wayline_tracker_core::Vec3]) {}
}

/// Spawns, moves, and toggles corner-marker entities directly in the world.
struct WorldMarkers<'w> {
    world: &'w mut World,
}

impl MarkerBackend for WorldMarkers<'_> {
    fn spawn(&mut self, position: wayline_tracker_core::Vec3) -> MarkerHandle {
        let entity = self
            .world
            .spawn((
                CornerMarker,
                SpatialBundle {
                    transform: Transform::from_translation(to_bevy(position)),
                    ..Default::default()
                },
            ))
            .id();
        MarkerHandle(entity.to_bits())
    }

    fn despawn(&mut self, handle: MarkerHandle) {
        self.world.despawn(Entity::from_bits(handle.0));
    }

    fn set_active(&mut self, handle: MarkerHandle, active: bool) {
        if let Some(mut vis) = self
            .world
            .get_mut::<Visibility>(Entity::from_bits(handle.0))
        {
            *vis = if active {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }

    fn set_position(&mut self, handle: MarkerHandle, position: wayline_tracker_core::Vec3) {
        if let Some(mut tf) = self.world.get_mut::<Transform>(Entity::from_bits(handle.0)) {
            tf.translation = to_bevy(position);
        }
    }
}

/// Per-frame driver: samples the tagged endpoint entities, syncs them into
/// the core tracker, then ticks it with host adapters built over the world.
/// Exclusive so marker spawn/despawn lands this frame.
pub fn drive_tracker(world: &mut World) {
    let dt = world.resource::<Time>().delta_seconds();

    let mut sampled = SampledTransforms {
        map: HashMap::new(),
    };
    let mut start = None;
    {
        let mut q = world.query_filtered::<(Entity, &GlobalTransform), With<TrackerStart>>();
        if let Some((entity, tf)) = q.iter(world).next() {
            let r = target_ref(entity);
            sampled.map.insert(r, to_core(tf.translation()));
            start = Some(r);
        }
    }
    let mut end = None;
    {
        let mut q = world.query_filtered::<(Entity, &GlobalTransform), With<TrackerEnd>>();
        if let Some((entity, tf)) = q.iter(world).next() {
            let r = target_ref(entity);
            sampled.map.insert(r, to_core(tf.translation()));
            end = Some(r);
        }
    }

    // Trait-object resources are taken out for the duration of the tick and
    // reinserted below.
    let Some(mut backend) = world.remove_resource::<CorridorBackend>() else {
        return;
    };
    let mut estimation = world.remove_resource::<EstimationBackend>();
    let Some(mut tracker) = world.remove_resource::<TrackerResource>() else {
        world.insert_resource(backend);
        if let Some(est) = estimation {
            world.insert_resource(est);
        }
        return;
    };

    let mut session = SessionProbe {
        active: world.resource::<NavigationState>().active,
        stop_requested: false,
    };
    let mut alerts = AlertBuffer::default();
    let mut noop = NoopEstimation;

    {
        let est: &mut dyn EstimationService = match estimation.as_mut() {
            Some(est) => est.0.as_mut(),
            None => &mut noop,
        };
        let mut markers = WorldMarkers {
            world: &mut *world,
        };
        let mut host = Host {
            transforms: &sampled,
            query: backend.0.as_mut(),
            estimation: est,
            session: &mut session,
            alerts: &mut alerts,
            markers: &mut markers,
        };

        // Retagging an endpoint entity forces an immediate recomputation.
        let (cur_start, cur_end) = tracker.0.endpoints();
        if cur_start != start {
            tracker.0.set_start(start);
        }
        if cur_end != end {
            tracker.0.set_end(end, &mut host);
        }

        tracker.0.tick(dt, &mut host);
    }

    world.insert_resource(tracker);
    world.insert_resource(backend);
    if let Some(est) = estimation {
        world.insert_resource(est);
    }

    if session.stop_requested {
        world.resource_mut::<NavigationState>().stop_requested = true;
    }
    for message in alerts.messages {
        world.send_event(RouteUnreachable { message });
    }
}

/// Draws the corridor polyline. The buffer already carries the ground
/// offset, so this is a straight segment walk.
pub fn draw_corridor(tracker: Res<TrackerResource>, mut gizmos: Gizmos) {
    let line = tracker.0.polyline();
    if !line.enabled() || line.vertex_count() < 2 {
        return;
    }
    let color = Color::srgb(0.25, 0.85, 1.0);
    for pair in line.positions().windows(2) {
        gizmos.line(to_bevy(pair[0]), to_bevy(pair[1]), color);
    }
}
