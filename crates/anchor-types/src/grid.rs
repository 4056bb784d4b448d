//! Anchor grid generation.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::center::CenterBox;
use crate::error::{AnchorTypesError, Result};

/// A fixed grid of anchor boxes tiling the unit square.
///
/// An `r x r` grid places one anchor per cell: the cell center with the
/// cell extent as its size. Anchors are stored in corner form, ordered
/// row-major from the top-left cell (columns fastest). The set is built
/// once and immutable afterward; it can be shared read-only across
/// data-loading workers.
///
/// # Example
///
/// ```
/// use anchor_types::AnchorGrid;
///
/// let grid = AnchorGrid::new(4)?;
/// assert_eq!(grid.len(), 16);
///
/// // First anchor covers the top-left cell.
/// let first = grid.anchors()[0];
/// assert!((first.x0 - 0.0).abs() < 1e-6);
/// assert!((first.x1 - 0.25).abs() < 1e-6);
/// # Ok::<(), anchor_types::AnchorTypesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorGrid {
    resolution: u32,
    anchors: Vec<BoundingBox>,
}

impl AnchorGrid {
    /// Maximum supported resolution (cells per side).
    ///
    /// Keeps the anchor count (`resolution` squared) within sane
    /// bounds; detection grids are tens of cells per side.
    pub const MAX_RESOLUTION: u32 = 1024;

    /// Creates an `r x r` anchor grid.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorTypesError::InvalidResolution`] if `resolution`
    /// is zero or exceeds [`Self::MAX_RESOLUTION`].
    #[allow(clippy::cast_precision_loss)]
    pub fn new(resolution: u32) -> Result<Self> {
        if resolution == 0 || resolution > Self::MAX_RESOLUTION {
            return Err(AnchorTypesError::InvalidResolution {
                resolution,
                max: Self::MAX_RESOLUTION,
            });
        }

        let cell = 1.0 / resolution as f32;
        let mut anchors = Vec::with_capacity((resolution as usize).pow(2));
        for row in 0..resolution {
            for col in 0..resolution {
                let cx = (col as f32 + 0.5) * cell;
                let cy = (row as f32 + 0.5) * cell;
                anchors.push(CenterBox::new(cx, cy, cell, cell).into());
            }
        }

        Ok(Self {
            resolution,
            anchors,
        })
    }

    /// Returns the grid resolution (cells per side).
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the number of anchors (`resolution` squared).
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if the grid holds no anchors.
    ///
    /// Never true for a constructed grid; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Returns the anchors in corner form, row-major order.
    #[must_use]
    pub fn anchors(&self) -> &[BoundingBox] {
        &self.anchors
    }

    /// Returns the anchor at the given (row, col) cell.
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Option<&BoundingBox> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }
        self.anchors.get((row * self.resolution + col) as usize)
    }

    /// Returns the normalized side length of one cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell_size(&self) -> f32 {
        1.0 / self.resolution as f32
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn grid_zero_resolution_rejected() {
        let err = AnchorGrid::new(0);
        assert!(matches!(
            err,
            Err(AnchorTypesError::InvalidResolution { resolution: 0, .. })
        ));
    }

    #[test]
    fn grid_oversized_resolution_rejected() {
        // Rejected up front, before any anchor allocation; unbounded
        // resolutions would overflow the u32 anchor count.
        let err = AnchorGrid::new(AnchorGrid::MAX_RESOLUTION + 1);
        assert!(matches!(
            err,
            Err(AnchorTypesError::InvalidResolution { resolution: 1025, .. })
        ));

        let err = AnchorGrid::new(u32::MAX);
        assert!(err.is_err());
    }

    #[test]
    fn grid_4x4_layout() {
        let grid = AnchorGrid::new(4).unwrap();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.resolution(), 4);
        assert!((grid.cell_size() - 0.25).abs() < 1e-6);

        // Row-major: first anchor is the top-left cell.
        let first = grid.anchors()[0];
        assert!((first.x0 - 0.0).abs() < 1e-6);
        assert!((first.y0 - 0.0).abs() < 1e-6);
        assert!((first.x1 - 0.25).abs() < 1e-6);
        assert!((first.y1 - 0.25).abs() < 1e-6);

        // Second anchor is one column to the right, same row.
        let second = grid.anchors()[1];
        assert!((second.x0 - 0.25).abs() < 1e-6);
        assert!((second.y0 - 0.0).abs() < 1e-6);

        // Anchor at index r starts the second row.
        let fifth = grid.anchors()[4];
        assert!((fifth.x0 - 0.0).abs() < 1e-6);
        assert!((fifth.y0 - 0.25).abs() < 1e-6);
    }

    #[test]
    fn grid_anchors_are_valid() {
        let grid = AnchorGrid::new(7).unwrap();
        for anchor in grid.anchors() {
            assert!(anchor.is_valid());
            assert!(!anchor.is_degenerate());
        }
    }

    #[test]
    fn grid_cell_lookup() {
        let grid = AnchorGrid::new(4).unwrap();
        let anchor = grid.cell(1, 2).unwrap();
        assert!((anchor.x0 - 0.5).abs() < 1e-6);
        assert!((anchor.y0 - 0.25).abs() < 1e-6);

        assert!(grid.cell(4, 0).is_none());
        assert!(grid.cell(0, 4).is_none());
    }

    #[test]
    fn grid_deterministic() {
        let a = AnchorGrid::new(4).unwrap();
        let b = AnchorGrid::new(4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn grid_serialization() {
        let grid = AnchorGrid::new(2).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let parsed: AnchorGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);
    }
}
