//! Wayline Tracker Core (engine-agnostic)
//!
//! Periodic path-corridor tracking: recompute a shortest corridor between
//! two movable endpoints at a bounded rate, mirror it into a polyline
//! buffer raised above the walking surface, and reconcile a pool of
//! corner-marker handles against the corridor's vertex count.
//!
//! The crate owns no engine objects. Pathfinding, rendering, marker
//! instantiation, alerts, and the navigation session all sit behind the
//! traits in [`host`]; adapters (Bevy, tests) implement them.

pub mod config;
pub mod corridor;
pub mod error;
pub mod host;
pub mod ids;
pub mod markers;
pub mod math;
pub mod polyline;
pub mod tracker;

// Re-exports for consumers (adapters)
pub use config::TrackerConfig;
pub use corridor::{Corridor, CorridorStatus};
pub use error::TrackerError;
pub use host::{
    AlertService, CorridorQuery, EstimationService, Host, MarkerBackend, NavigationSession,
    TransformSource,
};
pub use ids::{MarkerHandle, TargetRef};
pub use markers::MarkerPool;
pub use math::Vec3;
pub use polyline::Polyline;
pub use tracker::PathTracker;
