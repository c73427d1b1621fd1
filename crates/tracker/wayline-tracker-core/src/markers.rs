//! Corner-marker pool.
//!
//! One optional handle per corridor vertex, index-aligned: slot `i`
//! visualizes corner `i`. Reconciliation keeps the pool length equal to the
//! corridor's vertex count; handles below `min(old, new)` survive resizes
//! and are moved in place rather than respawned.

use log::trace;

use crate::error::TrackerError;
use crate::host::MarkerBackend;
use crate::ids::MarkerHandle;
use crate::math::Vec3;

#[derive(Debug, Default)]
pub struct MarkerPool {
    slots: Vec<Option<MarkerHandle>>,
}

impl MarkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn handle(&self, index: usize) -> Option<MarkerHandle> {
        self.slots.get(index).copied().flatten()
    }

    /// Grow or shrink to `target` slots. Growth appends empty slots; shrink
    /// despawns the trailing handles exactly once each. No-op when the pool
    /// already has `target` slots.
    pub fn reconcile(&mut self, target: usize, backend: &mut dyn MarkerBackend) {
        if target == self.slots.len() {
            return;
        }
        if target < self.slots.len() {
            for handle in self.slots.drain(target..).flatten() {
                trace!("despawning corner marker {handle:?}");
                backend.despawn(handle);
            }
        } else {
            self.slots.resize(target, None);
        }
    }

    /// Spawn into an empty slot, or move the handle already there.
    pub fn update_slot(
        &mut self,
        index: usize,
        position: Vec3,
        backend: &mut dyn MarkerBackend,
    ) -> Result<(), TrackerError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TrackerError::SlotOutOfRange { index, len })?;
        match slot {
            Some(handle) => backend.set_position(*handle, position),
            None => *slot = Some(backend.spawn(position)),
        }
        Ok(())
    }

    /// Apply the visibility flag to every held handle. The caller drives
    /// this once per visibility transition via its dirty flag.
    pub fn set_visible(&mut self, visible: bool, backend: &mut dyn MarkerBackend) {
        for handle in self.slots.iter().copied().flatten() {
            backend.set_active(handle, visible);
        }
    }

    /// Bulk path used by the tracker: resize to the point count, then
    /// spawn-or-move every slot. Indices stay aligned by construction.
    pub(crate) fn update_all(&mut self, points: &[Vec3], backend: &mut dyn MarkerBackend) {
        self.reconcile(points.len(), backend);
        for (slot, point) in self.slots.iter_mut().zip(points) {
            match slot {
                Some(handle) => backend.set_position(*handle, *point),
                None => *slot = Some(backend.spawn(*point)),
            }
        }
    }
}
