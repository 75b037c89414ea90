//! Item size store.
//!
//! One slot per item, indexed by position. Reports only ever grow a slot.

use crate::error::{FlockError, Result};
use crate::primitives::Size;

/// Last-measured size of every item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSizeStore {
    sizes: Vec<Size>,
}

impl ItemSizeStore {
    /// Create a store for `count` unmeasured items.
    pub fn new(count: usize) -> Self {
        Self {
            sizes: vec![Size::ZERO; count],
        }
    }

    /// Record a measurement, keeping the component-wise maximum.
    pub fn report(&mut self, index: usize, size: Size) -> Result<()> {
        let count = self.sizes.len();
        let slot = self
            .sizes
            .get_mut(index)
            .ok_or(FlockError::IndexOutOfRange { index, count })?;
        *slot = slot.max(size);
        Ok(())
    }

    /// True once every item has a non-zero-area size.
    pub fn all_measured(&self) -> bool {
        self.sizes.iter().all(|size| !size.is_empty())
    }

    /// Number of items that still lack a usable size.
    pub fn pending(&self) -> usize {
        self.sizes.iter().filter(|size| size.is_empty()).count()
    }

    /// Reinitialize to `count` zero sizes.
    pub fn reset(&mut self, count: usize) {
        self.sizes.clear();
        self.sizes.resize(count, Size::ZERO);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Size> {
        self.sizes.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Size] {
        &self.sizes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
