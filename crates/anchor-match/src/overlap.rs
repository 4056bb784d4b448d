//! Pairwise IoU overlap matrix.

use anchor_types::BoundingBox;

use crate::error::{MatchError, Result};

/// Dense M x N matrix of `IoU` values between ground-truth boxes and
/// anchors.
///
/// Row `i` holds the overlaps of ground-truth box `i` with every
/// anchor. Values are stored row-major. An image with no objects
/// yields a zero-row matrix, which is a valid input to the matcher.
///
/// # Example
///
/// ```
/// use anchor_match::OverlapMatrix;
/// use anchor_types::BoundingBox;
///
/// let gt = [BoundingBox::new(0.0, 0.0, 0.5, 0.5)];
/// let anchors = [
///     BoundingBox::new(0.0, 0.0, 0.5, 0.5),
///     BoundingBox::new(0.5, 0.5, 1.0, 1.0),
/// ];
///
/// let overlaps = OverlapMatrix::compute(&gt, &anchors);
/// assert!((overlaps.get(0, 0) - 1.0).abs() < 1e-6);
/// assert!(overlaps.get(0, 1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapMatrix {
    values: Vec<f32>,
    num_ground_truth: usize,
    num_anchors: usize,
}

impl OverlapMatrix {
    /// Computes the pairwise `IoU` matrix for the given boxes.
    ///
    /// Degenerate (zero-area) boxes yield zero overlap everywhere; a
    /// pair of degenerate boxes has union area zero and is defined to
    /// overlap by 0 rather than dividing by zero.
    #[must_use]
    pub fn compute(ground_truth: &[BoundingBox], anchors: &[BoundingBox]) -> Self {
        let mut values = Vec::with_capacity(ground_truth.len() * anchors.len());
        for gt in ground_truth {
            for anchor in anchors {
                values.push(gt.iou(anchor));
            }
        }
        Self {
            values,
            num_ground_truth: ground_truth.len(),
            num_anchors: anchors.len(),
        }
    }

    /// Builds a matrix from precomputed row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ShapeMismatch`] if the value count does
    /// not equal `num_ground_truth * num_anchors`.
    pub fn from_values(
        values: Vec<f32>,
        num_ground_truth: usize,
        num_anchors: usize,
    ) -> Result<Self> {
        let expected = num_ground_truth * num_anchors;
        if values.len() != expected {
            return Err(MatchError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            num_ground_truth,
            num_anchors,
        })
    }

    /// Returns the overlap of ground-truth box `gt` with anchor `anchor`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, gt: usize, anchor: usize) -> f32 {
        assert!(gt < self.num_ground_truth, "ground-truth index {gt} out of range");
        assert!(anchor < self.num_anchors, "anchor index {anchor} out of range");
        self.values[gt * self.num_anchors + anchor]
    }

    /// Returns the overlaps of one ground-truth box with every anchor.
    ///
    /// # Panics
    ///
    /// Panics if `gt` is out of range.
    #[must_use]
    pub fn row(&self, gt: usize) -> &[f32] {
        let start = gt * self.num_anchors;
        &self.values[start..start + self.num_anchors]
    }

    /// Returns the number of ground-truth boxes (rows).
    #[must_use]
    pub const fn num_ground_truth(&self) -> usize {
        self.num_ground_truth
    }

    /// Returns the number of anchors (columns).
    #[must_use]
    pub const fn num_anchors(&self) -> usize {
        self.num_anchors
    }

    /// Returns true if the matrix has no rows (no objects in the image).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_ground_truth == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use anchor_types::AnchorGrid;

    #[test]
    fn compute_dimensions() {
        let grid = AnchorGrid::new(4).unwrap();
        let gt = [
            BoundingBox::new(0.0, 0.0, 0.3, 0.3),
            BoundingBox::new(0.5, 0.5, 0.9, 0.9),
        ];

        let overlaps = OverlapMatrix::compute(&gt, grid.anchors());
        assert_eq!(overlaps.num_ground_truth(), 2);
        assert_eq!(overlaps.num_anchors(), 16);
        assert!(!overlaps.is_empty());
    }

    #[test]
    fn compute_matches_pairwise_iou() {
        let grid = AnchorGrid::new(2).unwrap();
        let gt = [BoundingBox::new(0.1, 0.1, 0.6, 0.6)];

        let overlaps = OverlapMatrix::compute(&gt, grid.anchors());
        for (j, anchor) in grid.anchors().iter().enumerate() {
            assert_eq!(overlaps.get(0, j), gt[0].iou(anchor));
        }
    }

    #[test]
    fn compute_empty_ground_truth() {
        let grid = AnchorGrid::new(4).unwrap();
        let overlaps = OverlapMatrix::compute(&[], grid.anchors());
        assert!(overlaps.is_empty());
        assert_eq!(overlaps.num_ground_truth(), 0);
        assert_eq!(overlaps.num_anchors(), 16);
    }

    #[test]
    fn compute_degenerate_box_row_is_zero() {
        let grid = AnchorGrid::new(2).unwrap();
        let gt = [BoundingBox::new(0.25, 0.25, 0.25, 0.25)];

        let overlaps = OverlapMatrix::compute(&gt, grid.anchors());
        for j in 0..overlaps.num_anchors() {
            assert!(overlaps.get(0, j).abs() < 1e-6);
        }
    }

    #[test]
    fn row_accessor() {
        let gt = [
            BoundingBox::new(0.0, 0.0, 0.5, 0.5),
            BoundingBox::new(0.5, 0.5, 1.0, 1.0),
        ];
        let anchors = [
            BoundingBox::new(0.0, 0.0, 0.5, 0.5),
            BoundingBox::new(0.5, 0.5, 1.0, 1.0),
        ];

        let overlaps = OverlapMatrix::compute(&gt, &anchors);
        assert_eq!(overlaps.row(0), &[overlaps.get(0, 0), overlaps.get(0, 1)]);
        assert!((overlaps.get(0, 0) - 1.0).abs() < 1e-6);
        assert!((overlaps.get(1, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_values_shape_check() {
        let ok = OverlapMatrix::from_values(vec![0.0; 6], 2, 3);
        assert!(ok.is_ok());

        let err = OverlapMatrix::from_values(vec![0.0; 5], 2, 3);
        assert!(matches!(
            err,
            Err(MatchError::ShapeMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn compute_deterministic() {
        let grid = AnchorGrid::new(4).unwrap();
        let gt = [BoundingBox::new(0.12, 0.34, 0.56, 0.78)];
        let a = OverlapMatrix::compute(&gt, grid.anchors());
        let b = OverlapMatrix::compute(&gt, grid.anchors());
        assert_eq!(a, b);
    }
}
