//! Bounds a layout pass is computed against.
//!
//! The space tracker turns the last reported container size into these,
//! according to the height mode.

/// Maximum extent available to a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraints {
    pub max_width: f32,
    pub max_height: f32,
}

impl LayoutConstraints {
    /// Create loose constraints with maximum bounds.
    #[inline]
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self { max_width, max_height }
    }

    /// Constrained width, unbounded height.
    #[inline]
    pub fn with_max_width(max_width: f32) -> Self {
        Self {
            max_width,
            max_height: f32::INFINITY,
        }
    }

    /// Clamp a height to the vertical bound.
    #[inline]
    pub fn constrain_height(&self, height: f32) -> f32 {
        debug_assert!(!height.is_nan(), "NaN height in layout");
        height.min(self.max_height)
    }
}
