//! Ground-truth labels for one image.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{AnchorTypesError, Result};

/// The labeled objects present in one training image.
///
/// Boxes and class ids are parallel arrays of the same length; an image
/// may contain zero objects. Class ids index into the foreground class
/// set and are validated against it before target construction.
///
/// # Example
///
/// ```
/// use anchor_types::{BoundingBox, GroundTruth};
///
/// let gt = GroundTruth::new(
///     vec![BoundingBox::new(0.1, 0.1, 0.4, 0.4)],
///     vec![7],
/// )?;
/// assert_eq!(gt.len(), 1);
/// # Ok::<(), anchor_types::AnchorTypesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    boxes: Vec<BoundingBox>,
    class_ids: Vec<u32>,
}

impl GroundTruth {
    /// Creates a ground-truth set from parallel box and class arrays.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorTypesError::LabelCountMismatch`] if the arrays
    /// have different lengths.
    pub fn new(boxes: Vec<BoundingBox>, class_ids: Vec<u32>) -> Result<Self> {
        if boxes.len() != class_ids.len() {
            return Err(AnchorTypesError::LabelCountMismatch {
                boxes: boxes.len(),
                labels: class_ids.len(),
            });
        }
        Ok(Self { boxes, class_ids })
    }

    /// Creates an empty ground-truth set (image with no objects).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            boxes: Vec::new(),
            class_ids: Vec::new(),
        }
    }

    /// Returns the number of labeled objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the image contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns the ground-truth boxes in corner form.
    #[must_use]
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Returns the parallel class-id array.
    #[must_use]
    pub fn class_ids(&self) -> &[u32] {
        &self.class_ids
    }

    /// Checks every class id against the foreground class count.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorTypesError::InvalidClassId`] for the first id
    /// not in `[0, num_classes)`.
    pub fn validate_class_range(&self, num_classes: u32) -> Result<()> {
        for &id in &self.class_ids {
            if id >= num_classes {
                return Err(AnchorTypesError::InvalidClassId {
                    id,
                    max: num_classes,
                });
            }
        }
        Ok(())
    }
}
