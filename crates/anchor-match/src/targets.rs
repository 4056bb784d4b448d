//! Training-target construction from match results.

use anchor_types::{AnchorGrid, BoundingBox, GroundTruth};
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::{MatchError, Result};
use crate::matcher::{match_anchors, MatchResult};
use crate::overlap::OverlapMatrix;

/// Per-anchor classification and regression targets for one image.
///
/// Both arrays have one entry per anchor. Background anchors carry the
/// reserved background class id and a zeroed regression box.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingTargets {
    class_ids: Vec<u32>,
    boxes: Vec<BoundingBox>,
}

impl TrainingTargets {
    /// Returns the per-anchor class ids.
    #[must_use]
    pub fn class_ids(&self) -> &[u32] {
        &self.class_ids
    }

    /// Returns the per-anchor regression boxes in corner form.
    #[must_use]
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Returns the number of anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.class_ids.len()
    }

    /// Returns true if there are no anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty()
    }
}

/// Builds classification and regression targets for one image.
///
/// Computes the overlap matrix, runs the greedy matcher, and
/// thresholds the result: an anchor is positive iff its overlap
/// strictly exceeds `config.iou_threshold`. Positive anchors receive
/// the class id and box of their assigned ground truth; everything
/// else becomes background with a zeroed box. An image with no objects
/// yields all-background targets.
///
/// # Errors
///
/// Returns [`MatchError::InvalidConfig`] if the configuration fails
/// validation, or a [`MatchError::GroundTruth`] if a class id is out
/// of range for `config.num_classes`.
///
/// # Example
///
/// ```
/// use anchor_match::{build_targets, MatchConfig};
/// use anchor_types::{AnchorGrid, BoundingBox, GroundTruth};
///
/// let grid = AnchorGrid::new(4)?;
/// let gt = GroundTruth::new(
///     vec![BoundingBox::new(0.0, 0.0, 0.25, 0.25)],
///     vec![3],
/// )?;
///
/// let targets = build_targets(&grid, &gt, &MatchConfig::new(20))?;
/// assert_eq!(targets.len(), 16);
/// // The top-left anchor coincides with the object.
/// assert_eq!(targets.class_ids()[0], 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_targets(
    grid: &AnchorGrid,
    ground_truth: &GroundTruth,
    config: &MatchConfig,
) -> Result<TrainingTargets> {
    if !config.is_valid() {
        return Err(MatchError::invalid_config(format!(
            "threshold {} / override {} / classes {}",
            config.iou_threshold, config.override_score, config.num_classes
        )));
    }
    ground_truth.validate_class_range(config.num_classes)?;

    let overlaps = OverlapMatrix::compute(ground_truth.boxes(), grid.anchors());
    let matches = match_anchors(&overlaps, config.override_score);

    Ok(targets_from_matches(&matches, ground_truth, config))
}

/// Thresholds a match result into per-anchor targets.
fn targets_from_matches(
    matches: &MatchResult,
    ground_truth: &GroundTruth,
    config: &MatchConfig,
) -> TrainingTargets {
    let num_anchors = matches.num_anchors();
    let background = config.background_class();

    let mut class_ids = vec![background; num_anchors];
    let mut boxes = vec![BoundingBox::default(); num_anchors];

    let mut positives = 0_usize;
    for anchor in 0..num_anchors {
        if matches.is_positive(anchor, config.iou_threshold) {
            let gt = matches.gt_indices()[anchor];
            class_ids[anchor] = ground_truth.class_ids()[gt];
            boxes[anchor] = ground_truth.boxes()[gt];
            positives += 1;
        }
    }

    debug!(
        positives,
        num_anchors,
        objects = ground_truth.len(),
        "built training targets"
    );

    TrainingTargets { class_ids, boxes }
}
