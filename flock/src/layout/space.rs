//! Container space tracker.

use crate::config::HeightMode;
use crate::primitives::Size;

use super::constraints::LayoutConstraints;

/// Last-known available size of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceTracker {
    mode: HeightMode,
    space: Option<Size>,
}

impl SpaceTracker {
    pub fn new(mode: HeightMode) -> Self {
        Self { mode, space: None }
    }

    /// Store the latest available size.
    pub fn report(&mut self, space: Size) {
        self.space = Some(space);
    }

    /// The raw last report, if any.
    pub fn last(&self) -> Option<Size> {
        self.space
    }

    /// Bounds for a layout pass, or `None` while the space is unknown or unusable.
    ///
    /// Width must be finite and positive. In fit mode the height must be
    /// positive too; expand mode discards it and lays out unbounded.
    pub fn constraints(&self) -> Option<LayoutConstraints> {
        let space = self.space?;
        if !(space.width.is_finite() && space.width > 0.0) {
            return None;
        }
        match self.mode {
            HeightMode::Fit => {
                (space.height > 0.0).then(|| LayoutConstraints::loose(space.width, space.height))
            }
            HeightMode::Expand => Some(LayoutConstraints::with_max_width(space.width)),
        }
    }

    pub fn clear(&mut self) {
        self.space = None;
    }
}
