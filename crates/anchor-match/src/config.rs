//! Matching configuration.

use serde::{Deserialize, Serialize};

/// Configuration for anchor matching and target construction.
///
/// There is deliberately no `Default`: the background class id is
/// derived from the foreground class count, and a silently defaulted
/// count would mislabel every background anchor.
///
/// # Example
///
/// ```
/// use anchor_match::MatchConfig;
///
/// let config = MatchConfig::new(20);
/// assert!((config.iou_threshold - 0.4).abs() < 1e-6);
/// assert!((config.override_score - 1.99).abs() < 1e-6);
/// assert_eq!(config.background_class(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum `IoU` for an anchor to be positive (strict comparison).
    pub iou_threshold: f32,

    /// Score forced onto each ground truth's best anchor. Must be
    /// strictly greater than 1.0 so thresholding always keeps it.
    pub override_score: f32,

    /// Number of foreground classes. The background class id equals
    /// this value.
    pub num_classes: u32,
}

impl MatchConfig {
    /// Creates a configuration with the standard threshold (0.4) and
    /// override score (1.99) for the given foreground class count.
    #[must_use]
    pub const fn new(num_classes: u32) -> Self {
        Self {
            iou_threshold: 0.4,
            override_score: 1.99,
            num_classes,
        }
    }

    /// Sets the `IoU` threshold.
    #[must_use]
    pub const fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    /// Sets the override score.
    #[must_use]
    pub const fn with_override_score(mut self, override_score: f32) -> Self {
        self.override_score = override_score;
        self
    }

    /// Returns the reserved background class id.
    #[must_use]
    pub const fn background_class(&self) -> u32 {
        self.num_classes
    }

    /// Validates the configuration.
    ///
    /// Valid means: threshold in `[0, 1]`, override score above 1.0
    /// (so it survives any valid threshold), at least one foreground
    /// class.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.iou_threshold)
            && self.override_score > 1.0
            && self.num_classes > 0
    }
}
