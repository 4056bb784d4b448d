//! Corner-form bounding box type.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in normalized image coordinates.
///
/// Coordinates are normalized to `[0, 1]` range relative to image
/// dimensions. Format is `[x0, y0, x1, y1]` (top-left to bottom-right).
/// Zero-area boxes are legal and overlap nothing.
///
/// # Example
///
/// ```
/// use anchor_types::BoundingBox;
///
/// let bbox = BoundingBox::new(0.1, 0.2, 0.5, 0.6);
///
/// assert!((bbox.width() - 0.4).abs() < 1e-6);
/// assert!((bbox.height() - 0.4).abs() < 1e-6);
/// assert!((bbox.area() - 0.16).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (x0), normalized to `[0, 1]`.
    pub x0: f32,
    /// Top edge (y0), normalized to `[0, 1]`.
    pub y0: f32,
    /// Right edge (x1), normalized to `[0, 1]`.
    pub x1: f32,
    /// Bottom edge (y1), normalized to `[0, 1]`.
    pub y1: f32,
}

impl BoundingBox {
    /// Creates a new bounding box from corner coordinates.
    #[must_use]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a bounding box from an array `[x0, y0, x1, y1]`.
    #[must_use]
    pub const fn from_array(coords: [f32; 4]) -> Self {
        Self {
            x0: coords[0],
            y0: coords[1],
            x1: coords[2],
            y1: coords[3],
        }
    }

    /// Returns the box as an array `[x0, y0, x1, y1]`.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    /// Returns the box width (normalized, clamped non-negative).
    #[must_use]
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).max(0.0)
    }

    /// Returns the box height (normalized, clamped non-negative).
    #[must_use]
    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    /// Returns the box area (normalized).
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns the center point `(cx, cy)`.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn center(&self) -> (f32, f32) {
        (
            f32::midpoint(self.x0, self.x1),
            f32::midpoint(self.y0, self.y1),
        )
    }

    /// Checks if the box coordinates are valid.
    ///
    /// Valid means: in range `[0, 1]`, `x0 <= x1`, `y0 <= y1`, no NaN.
    /// Degenerate (zero-area) boxes are valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x0 >= 0.0
            && self.x0 <= 1.0
            && self.y0 >= 0.0
            && self.y0 <= 1.0
            && self.x1 >= 0.0
            && self.x1 <= 1.0
            && self.y1 >= 0.0
            && self.y1 <= 1.0
            && self.x0 <= self.x1
            && self.y0 <= self.y1
            && !self.x0.is_nan()
            && !self.y0.is_nan()
            && !self.x1.is_nan()
            && !self.y1.is_nan()
    }

    /// Checks if the box has zero area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }

    /// Computes the intersection-over-union (`IoU`) with another box.
    ///
    /// Returns a value in `[0, 1]` where 1 means perfect overlap.
    /// If both boxes are degenerate (union area zero), returns 0
    /// rather than dividing by zero.
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn iou(&self, other: &Self) -> f32 {
        let inter_x0 = self.x0.max(other.x0);
        let inter_y0 = self.y0.max(other.y0);
        let inter_x1 = self.x1.min(other.x1);
        let inter_y1 = self.y1.min(other.y1);

        let inter_w = (inter_x1 - inter_x0).max(0.0);
        let inter_h = (inter_y1 - inter_y0).max(0.0);
        let inter_area = inter_w * inter_h;

        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }

    /// Clamps coordinates to valid range `[0, 1]`.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn clamped(&self) -> Self {
        Self {
            x0: self.x0.clamp(0.0, 1.0),
            y0: self.y0.clamp(0.0, 1.0),
            x1: self.x1.clamp(0.0, 1.0),
            y1: self.y1.clamp(0.0, 1.0),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn bbox_dimensions() {
        let bbox = BoundingBox::new(0.1, 0.2, 0.5, 0.6);
        assert!((bbox.width() - 0.4).abs() < 1e-6);
        assert!((bbox.height() - 0.4).abs() < 1e-6);
        assert!((bbox.area() - 0.16).abs() < 1e-6);
    }

    #[test]
    fn bbox_center() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let (cx, cy) = bbox.center();
        assert!((cx - 0.5).abs() < 1e-6);
        assert!((cy - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bbox_array_round_trip() {
        let bbox = BoundingBox::from_array([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(bbox.as_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn bbox_validity() {
        let valid = BoundingBox::new(0.1, 0.2, 0.5, 0.6);
        assert!(valid.is_valid());

        let degenerate = BoundingBox::new(0.5, 0.5, 0.5, 0.5);
        assert!(degenerate.is_valid());
        assert!(degenerate.is_degenerate());

        let invalid_order = BoundingBox::new(0.5, 0.6, 0.1, 0.2);
        assert!(!invalid_order.is_valid());

        let out_of_range = BoundingBox::new(-0.1, 0.0, 0.5, 1.5);
        assert!(!out_of_range.is_valid());

        let has_nan = BoundingBox::new(f32::NAN, 0.0, 0.5, 0.5);
        assert!(!has_nan.is_valid());
    }

    #[test]
    fn iou_corner_overlap() {
        // Unit squares overlapping by a 0.5 x 0.5 corner:
        // IoU = 0.25 / (1 + 1 - 0.25) = 0.142857...
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(0.5, 0.5, 1.5, 1.5);
        assert!((a.iou(&b) - 0.142_857).abs() < 1e-5);
        assert!((b.iou(&a) - 0.142_857).abs() < 1e-5);
    }

    #[test]
    fn iou_disjoint() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(2.0, 2.0, 3.0, 3.0);
        assert!(a.iou(&b).abs() < 1e-6);
    }

    #[test]
    fn iou_identical() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iou_zero_area_box() {
        let degenerate = BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        let b = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(degenerate.iou(&b).abs() < 1e-6);
        assert!(b.iou(&degenerate).abs() < 1e-6);

        // Both degenerate: union area is zero, IoU defined as 0.
        assert!(degenerate.iou(&degenerate).abs() < 1e-6);
    }

    #[test]
    fn bbox_clamped() {
        let out_of_range = BoundingBox::new(-0.1, -0.2, 1.5, 1.3);
        let clamped = out_of_range.clamped();
        assert!((clamped.x0 - 0.0).abs() < 1e-6);
        assert!((clamped.y0 - 0.0).abs() < 1e-6);
        assert!((clamped.x1 - 1.0).abs() < 1e-6);
        assert!((clamped.y1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bbox_serialization() {
        let bbox = BoundingBox::new(0.1, 0.2, 0.3, 0.4);
        let json = serde_json::to_string(&bbox);
        assert!(json.is_ok());

        let parsed: Result<BoundingBox, _> = serde_json::from_str(&json.unwrap_or_default());
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap_or_default(), bbox);
    }
}
