//! Center+size bounding box representation.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// A box represented by its center point and size.
///
/// This is the natural form for anchor generation: a grid cell's anchor
/// is its center plus the cell extent. Conversion to and from the
/// corner-form [`BoundingBox`] is lossless.
///
/// # Example
///
/// ```
/// use anchor_types::{BoundingBox, CenterBox};
///
/// let center = CenterBox::new(0.5, 0.5, 0.25, 0.25);
/// let corner: BoundingBox = center.into();
///
/// assert!((corner.x0 - 0.375).abs() < 1e-6);
/// assert!((corner.x1 - 0.625).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterBox {
    /// Center x coordinate, normalized to `[0, 1]`.
    pub cx: f32,
    /// Center y coordinate, normalized to `[0, 1]`.
    pub cy: f32,
    /// Box width (normalized).
    pub w: f32,
    /// Box height (normalized).
    pub h: f32,
}

impl CenterBox {
    /// Creates a new center-form box.
    #[must_use]
    pub const fn new(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { cx, cy, w, h }
    }

    /// Returns the box as an array `[cx, cy, w, h]`.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.cx, self.cy, self.w, self.h]
    }

    /// Returns the box area (normalized).
    #[must_use]
    pub fn area(&self) -> f32 {
        self.w.max(0.0) * self.h.max(0.0)
    }
}

impl From<CenterBox> for BoundingBox {
    fn from(center: CenterBox) -> Self {
        let half_w = center.w / 2.0;
        let half_h = center.h / 2.0;
        Self::new(
            center.cx - half_w,
            center.cy - half_h,
            center.cx + half_w,
            center.cy + half_h,
        )
    }
}

impl From<BoundingBox> for CenterBox {
    fn from(corner: BoundingBox) -> Self {
        let (cx, cy) = corner.center();
        Self::new(cx, cy, corner.x1 - corner.x0, corner.y1 - corner.y0)
    }
}
