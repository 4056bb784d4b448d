//! Greedy anchor-to-ground-truth matching.

use tracing::debug;

use crate::overlap::OverlapMatrix;

/// Per-anchor assignment produced by [`match_anchors`].
///
/// Holds, for each anchor, the assigned ground-truth index (0-based)
/// and the overlap score. Anchors forced by the override carry the
/// configured override score instead of their raw `IoU`; downstream
/// strict-`>` thresholding therefore always keeps them positive.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    overlaps: Vec<f32>,
    gt_indices: Vec<usize>,
    num_ground_truth: usize,
}

impl MatchResult {
    /// Returns the per-anchor overlap scores.
    #[must_use]
    pub fn overlaps(&self) -> &[f32] {
        &self.overlaps
    }

    /// Returns the per-anchor assigned ground-truth indices.
    ///
    /// Only meaningful for anchors whose overlap clears the threshold;
    /// with no ground truth in the image the indices are unused.
    #[must_use]
    pub fn gt_indices(&self) -> &[usize] {
        &self.gt_indices
    }

    /// Returns the number of anchors.
    #[must_use]
    pub fn num_anchors(&self) -> usize {
        self.overlaps.len()
    }

    /// Returns the number of ground-truth boxes that were matched.
    #[must_use]
    pub const fn num_ground_truth(&self) -> usize {
        self.num_ground_truth
    }

    /// Returns the assignment for one anchor, or `None` if the image
    /// had no ground truth.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is out of range.
    #[must_use]
    pub fn assignment(&self, anchor: usize) -> Option<(usize, f32)> {
        if self.num_ground_truth == 0 {
            return None;
        }
        Some((self.gt_indices[anchor], self.overlaps[anchor]))
    }

    /// Returns true if the anchor's overlap strictly exceeds the
    /// threshold.
    ///
    /// An overlap exactly equal to the threshold is not positive.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is out of range and the image had ground
    /// truth.
    #[must_use]
    pub fn is_positive(&self, anchor: usize, threshold: f32) -> bool {
        self.num_ground_truth > 0 && self.overlaps[anchor] > threshold
    }
}

/// Matches every anchor to a ground-truth box.
///
/// Applies the two criteria in order:
///
/// 1. Per ground truth, find its best anchor (argmax over the row,
///    lowest anchor index on ties).
/// 2. Per anchor, find its best ground truth (argmax over the column,
///    lowest ground-truth index on ties).
///
/// Each ground truth then forces its criterion-1 anchor to itself with
/// `override_score`, regardless of what criterion 2 chose for that
/// anchor. When two ground truths share the same criterion-1 anchor,
/// the later one in iteration order overwrites the earlier — the
/// earlier object loses its anchor. This is a known limitation of the
/// one-anchor-per-cell design and is preserved deliberately.
///
/// With a zero-row matrix (no objects) every anchor keeps zero overlap
/// and [`MatchResult::assignment`] reports `None`.
#[must_use]
pub fn match_anchors(overlaps: &OverlapMatrix, override_score: f32) -> MatchResult {
    let num_anchors = overlaps.num_anchors();
    let num_ground_truth = overlaps.num_ground_truth();

    if num_anchors == 0 {
        return MatchResult {
            overlaps: Vec::new(),
            gt_indices: Vec::new(),
            num_ground_truth,
        };
    }

    let mut best_overlap = vec![0.0_f32; num_anchors];
    let mut best_gt = vec![0_usize; num_anchors];

    // Criterion 2: per-anchor best ground truth, first occurrence wins ties.
    for anchor in 0..num_anchors {
        for gt in 0..num_ground_truth {
            let value = overlaps.get(gt, anchor);
            if value > best_overlap[anchor] || gt == 0 {
                best_overlap[anchor] = value;
                best_gt[anchor] = gt;
            }
        }
    }

    // Criterion 1 + override: each ground truth claims its best anchor.
    // Ascending order, so a later ground truth overwrites an earlier one
    // that claimed the same anchor.
    for gt in 0..num_ground_truth {
        let anchor = argmax(overlaps.row(gt));
        best_gt[anchor] = gt;
        best_overlap[anchor] = override_score;
    }

    debug!(num_ground_truth, num_anchors, "matched anchors");

    MatchResult {
        overlaps: best_overlap,
        gt_indices: best_gt,
        num_ground_truth,
    }
}

/// Index of the maximum value, lowest index on ties.
///
/// Callers guarantee a non-empty slice.
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    best
}
