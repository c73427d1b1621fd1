//! Core configuration for wayline-tracker-core.

use serde::{Deserialize, Serialize};

/// Tracker tuning. Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Seconds between corridor recomputations (the throttle period).
    pub update_period: f32,
    /// Vertical distance the rendered line is raised above the surface.
    pub ground_offset: f32,
    /// Whether corner markers start out shown.
    pub corners_visible: bool,
    /// Area mask forwarded verbatim to the corridor query.
    pub area_mask: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            update_period: 0.5,
            ground_offset: 0.1,
            corners_visible: false,
            area_mask: u32::MAX,
        }
    }
}
