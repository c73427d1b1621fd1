//! Identifiers for host-owned objects.
//!
//! Both referents live on the host side (a scene transform, a marker
//! instance), so the host assigns the ids; the core only stores and
//! hands them back. IDs are opaque externally.

use serde::{Deserialize, Serialize};

/// Reference to a movable position-in-space owned by the host (an endpoint).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetRef(pub u64);

/// Handle to a corner-marker instance owned by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);
