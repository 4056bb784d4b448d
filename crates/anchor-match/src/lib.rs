//! Anchor matching core for SSD-style detection training.
//!
//! This crate turns a per-image set of ground-truth boxes and a fixed
//! anchor grid into training targets:
//!
//! # Overlap Computation
//!
//! - [`OverlapMatrix`] - Dense M x N matrix of pairwise `IoU` values
//!
//! # Matching
//!
//! - [`match_anchors`] - Two-pass greedy matcher with override
//! - [`MatchResult`] - Per-anchor assignment and overlap score
//!
//! # Target Construction
//!
//! - [`build_targets`] - Per-anchor class ids and regression boxes
//! - [`MatchConfig`] - Threshold, override score, class count
//!
//! # Purity
//!
//! Everything here is a pure, synchronous transform over small arrays.
//! There is no shared mutable state: an [`AnchorGrid`](anchor_types::AnchorGrid)
//! is read-only and per-image data is local to each call, so the crate
//! can be invoked freely from parallel data-loading workers.
//!
//! # Example
//!
//! ```
//! use anchor_match::{build_targets, MatchConfig};
//! use anchor_types::{AnchorGrid, BoundingBox, GroundTruth};
//!
//! let grid = AnchorGrid::new(4)?;
//! let gt = GroundTruth::new(
//!     vec![BoundingBox::new(0.1, 0.1, 0.6, 0.7)],
//!     vec![12],
//! )?;
//!
//! let targets = build_targets(&grid, &gt, &MatchConfig::new(20))?;
//! assert_eq!(targets.len(), grid.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod matcher;
mod overlap;
mod targets;

// Re-export configuration
pub use config::MatchConfig;

// Re-export overlap computation
pub use overlap::OverlapMatrix;

// Re-export matching
pub use matcher::{match_anchors, MatchResult};

// Re-export target construction
pub use targets::{build_targets, TrainingTargets};

// Re-export error types
pub use error::{MatchError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        build_targets, match_anchors, MatchConfig, MatchError, MatchResult, OverlapMatrix,
        TrainingTargets,
    };
    pub use anchor_types::{AnchorGrid, BoundingBox, CenterBox, GroundTruth};
}
