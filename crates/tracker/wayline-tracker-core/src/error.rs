//! Error types for the public pool/polyline APIs.
//!
//! Nothing on the tick path returns an error; every runtime condition
//! (missing endpoints, unreachable routes, degenerate corridors) is handled
//! locally by [`crate::tracker::PathTracker`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("slot index {index} out of range for length {len}")]
    SlotOutOfRange { index: usize, len: usize },
}
