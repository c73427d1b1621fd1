//! Polyline state consumed by the rendering backend.
//!
//! The core owns the buffer; an adapter reads `positions()` each frame and
//! feeds whatever line primitive the engine provides. After a full
//! reconciliation pass the buffer holds one position per corridor vertex,
//! each raised by the ground offset on the vertical axis only.

use crate::error::TrackerError;
use crate::math::Vec3;

#[derive(Clone, Debug)]
pub struct Polyline {
    enabled: bool,
    positions: Vec<Vec3>,
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Polyline {
    pub fn new() -> Self {
        Self {
            enabled: false,
            positions: vec![Vec3::ZERO],
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Resize the buffer; newly exposed slots are `Vec3::ZERO` until written.
    pub fn set_vertex_count(&mut self, count: usize) {
        self.positions.resize(count, Vec3::ZERO);
    }

    pub fn set_vertex(&mut self, index: usize, position: Vec3) -> Result<(), TrackerError> {
        let len = self.positions.len();
        match self.positions.get_mut(index) {
            Some(slot) => {
                *slot = position;
                Ok(())
            }
            None => Err(TrackerError::SlotOutOfRange { index, len }),
        }
    }

    /// Collapse to a single degenerate position at the origin.
    pub fn collapse(&mut self) {
        self.positions.clear();
        self.positions.push(Vec3::ZERO);
    }

    /// Bulk rewrite: one slot per point, each raised by `dy`.
    pub(crate) fn write_raised(&mut self, points: &[Vec3], dy: f32) {
        self.positions.clear();
        self.positions.extend(points.iter().map(|p| p.raised(dy)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_degenerate_and_disabled() {
        let line = Polyline::new();
        assert!(!line.enabled());
        assert_eq!(line.vertex_count(), 1);
    }

    #[test]
    fn set_vertex_rejects_out_of_range() {
        let mut line = Polyline::new();
        line.set_vertex_count(2);
        assert!(line.set_vertex(1, Vec3::new(1.0, 0.0, 0.0)).is_ok());
        assert_eq!(
            line.set_vertex(2, Vec3::ZERO),
            Err(TrackerError::SlotOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn write_raised_lifts_vertical_axis_only() {
        let mut line = Polyline::new();
        line.write_raised(
            &[
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(2.0, 0.0, 2.0),
            ],
            0.1,
        );
        assert_eq!(
            line.positions(),
            &[
                Vec3::new(0.0, 0.1, 0.0),
                Vec3::new(1.0, 0.1, 1.0),
                Vec3::new(2.0, 0.1, 2.0),
            ]
        );
    }

    #[test]
    fn collapse_leaves_single_origin_position() {
        let mut line = Polyline::new();
        line.set_vertex_count(5);
        line.collapse();
        assert_eq!(line.positions(), &[Vec3::ZERO]);
    }
}
