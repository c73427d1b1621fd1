//! The corridor buffer: an ordered vertex sequence plus reachability status.
//!
//! The tracker owns exactly one `Corridor` and overwrites it in place on
//! every recomputation (clear + extend, never a fresh allocation per cycle).
//! Readers that must see the pre-overwrite vertices snapshot them first;
//! see the pending-pass contract in [`crate::tracker`].

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Reachability of the last computed corridor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum CorridorStatus {
    /// The corridor reaches the destination.
    Complete,
    /// The corridor ends short of the destination.
    Partial,
    /// No corridor exists (or none has been computed yet).
    #[default]
    Invalid,
}

/// Ordered vertex sequence from start to end. Order is significant and is
/// never reordered by the core.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Corridor {
    pub points: Vec<Vec3>,
    pub status: CorridorStatus,
}

impl Corridor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Overwrite this corridor in place, reusing the existing allocation.
    pub fn overwrite(&mut self, points: &[Vec3], status: CorridorStatus) {
        self.points.clear();
        self.points.extend_from_slice(points);
        self.status = status;
    }

    /// Empty the corridor and mark it invalid.
    pub fn invalidate(&mut self) {
        self.points.clear();
        self.status = CorridorStatus::Invalid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid_and_empty() {
        let c = Corridor::new();
        assert!(c.is_empty());
        assert_eq!(c.status, CorridorStatus::Invalid);
    }

    #[test]
    fn overwrite_replaces_contents() {
        let mut c = Corridor::new();
        c.overwrite(
            &[Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0)],
            CorridorStatus::Complete,
        );
        c.overwrite(&[Vec3::new(5.0, 0.0, 5.0)], CorridorStatus::Partial);
        assert_eq!(c.len(), 1);
        assert_eq!(c.status, CorridorStatus::Partial);
    }
}
