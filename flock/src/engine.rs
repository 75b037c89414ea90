//! Layout facade.
//!
//! `Flock` collects item measurements and container space as they arrive
//! from a render pass, and recomputes the whole layout once both are
//! complete. Until then the previous result (or an empty one) stays
//! published, so a caller never sees a layout built from partial sizes.

use crate::config::FlockConfig;
use crate::error::Result;
use crate::layout::{self, ItemSizeStore, LayoutResult, SpaceTracker};
use crate::primitives::{Rect, Size};

/// Where the engine is in its measure -> layout cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlockState {
    /// Item count is set; nothing has been reported yet.
    Uninitialized,
    /// Some sizes or space are known, but not enough to lay out.
    AwaitingInputs,
    /// A full layout has been published.
    LaidOut,
}

/// A flow layout engine for a fixed item count and configuration.
#[derive(Debug, Clone)]
pub struct Flock {
    config: FlockConfig,
    sizes: ItemSizeStore,
    space: SpaceTracker,
    state: FlockState,
    result: LayoutResult,
}

impl Flock {
    /// Create an engine for `count` items.
    pub fn new(count: usize, config: FlockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sizes: ItemSizeStore::new(count),
            space: SpaceTracker::new(config.height_mode),
            state: FlockState::Uninitialized,
            result: LayoutResult::default(),
        })
    }

    /// Record the rendered size of item `index` and re-run layout if ready.
    pub fn report_size(&mut self, index: usize, size: Size) -> Result<()> {
        self.sizes.report(index, size)?;
        self.relayout();
        Ok(())
    }

    /// Record the available container space and re-run layout if ready.
    pub fn report_space(&mut self, space: Size) {
        self.space.report(space);
        self.relayout();
    }

    /// Drop every measurement and result and start over with `count` items.
    pub fn reset(&mut self, count: usize) {
        tracing::debug!(count, "resetting flow layout");
        self.sizes.reset(count);
        self.space.clear();
        self.result = LayoutResult::default();
        self.state = FlockState::Uninitialized;
    }

    fn relayout(&mut self) {
        if !self.sizes.all_measured() {
            tracing::trace!(pending = self.sizes.pending(), "waiting for item sizes");
            self.await_inputs();
            return;
        }
        let Some(constraints) = self.space.constraints() else {
            tracing::trace!(space = ?self.space.last(), "waiting for usable container space");
            self.await_inputs();
            return;
        };

        self.result = layout::compute(self.sizes.as_slice(), constraints, &self.config);
        self.state = FlockState::LaidOut;
    }

    /// A published layout stays published; only `reset` moves back.
    fn await_inputs(&mut self) {
        if self.state != FlockState::LaidOut {
            self.state = FlockState::AwaitingInputs;
        }
    }

    pub fn state(&self) -> FlockState {
        self.state
    }

    pub fn result(&self) -> &LayoutResult {
        &self.result
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.sizes.len()
    }

    /// Measured sizes so far, by index.
    pub fn sizes(&self) -> &[Size] {
        self.sizes.as_slice()
    }

    /// Last reported container space.
    pub fn space(&self) -> Option<Size> {
        self.space.last()
    }

    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.result.frame(index)
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.result.is_hidden(index)
    }

    pub fn visible_frames(&self) -> &[Rect] {
        self.result.visible_frames()
    }
}
