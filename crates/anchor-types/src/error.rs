//! Error types for anchor-types crate.

use thiserror::Error;

/// Errors that can occur in anchor-types operations.
#[derive(Debug, Error)]
pub enum AnchorTypesError {
    /// Invalid grid resolution.
    #[error("invalid grid resolution {resolution}: must be in [1, {max}]")]
    InvalidResolution {
        /// The invalid resolution value.
        resolution: u32,
        /// Maximum supported resolution (inclusive).
        max: u32,
    },

    /// Box and class-id arrays have different lengths.
    #[error("label count mismatch: {boxes} boxes but {labels} class ids")]
    LabelCountMismatch {
        /// Number of ground-truth boxes.
        boxes: usize,
        /// Number of class ids.
        labels: usize,
    },

    /// Invalid class ID.
    #[error("invalid class ID {id}: expected < {max}")]
    InvalidClassId {
        /// The invalid class ID.
        id: u32,
        /// Maximum valid class ID (exclusive).
        max: u32,
    },
}

/// Result type for anchor-types operations.
pub type Result<T> = std::result::Result<T, AnchorTypesError>;
