//! Geometric and label types for anchor-based object detection.
//!
//! This crate provides the value types consumed by the matching core:
//!
//! # Box Types
//!
//! - [`BoundingBox`] - Corner-form box in normalized coordinates
//! - [`CenterBox`] - Center+size form, used for anchor generation
//!
//! # Anchor and Label Types
//!
//! - [`AnchorGrid`] - Fixed grid of anchor boxes tiling the unit square
//! - [`GroundTruth`] - Per-image labeled boxes with class ids
//!
//! # Layer 0 Crate
//!
//! This crate has no dependencies beyond serde and thiserror. It can be
//! shared read-only across data-loading workers: an [`AnchorGrid`] is
//! built once and never mutated afterward.
//!
//! # Example
//!
//! ```
//! use anchor_types::{AnchorGrid, BoundingBox};
//!
//! let grid = AnchorGrid::new(4)?;
//! assert_eq!(grid.len(), 16);
//!
//! let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
//! let b = BoundingBox::new(0.5, 0.5, 1.5, 1.5);
//! assert!((a.iou(&b) - 0.25 / 1.75).abs() < 1e-6);
//! # Ok::<(), anchor_types::AnchorTypesError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bbox;
mod center;
mod error;
mod grid;
mod label;

// Re-export box types
pub use bbox::BoundingBox;
pub use center::CenterBox;

// Re-export anchor and label types
pub use grid::AnchorGrid;
pub use label::GroundTruth;

// Re-export error types
pub use error::{AnchorTypesError, Result};
