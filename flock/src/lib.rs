//! Flock: a flow layout engine for tag and chip clouds.
//!
//! Items of varying size are wrapped into lines like words in a paragraph,
//! then aligned per line and clipped to an optional line limit.
//!
//! # Architecture
//!
//! ```text
//! report_size / report_space -> Flock (gate) -> layout::compute -> LayoutResult
//! ```
//!
//! The host render pass reports each item's measured size and the available
//! container space. Once every item has a size and the space is usable, the
//! engine recomputes the full layout synchronously.
//!
//! # Usage
//!
//! ```
//! use flock::{Flock, FlockConfig, Size};
//!
//! let mut flock = Flock::new(2, FlockConfig::new().spacing(8.0, 4.0)).unwrap();
//! flock.report_space(Size::new(120.0, 200.0));
//! flock.report_size(0, Size::new(60.0, 20.0)).unwrap();
//! flock.report_size(1, Size::new(60.0, 20.0)).unwrap();
//!
//! assert_eq!(flock.result().lines.len(), 2);
//! ```

// Core primitives
pub mod config;
pub mod error;
pub mod primitives;

// Layout pipeline (planner, alignment, clipper)
pub mod layout;

// Stateful facade
pub mod engine;

// Re-export core types
pub use config::{
    Alignment, FlockConfig, HeightMode, HorizontalAlignment, LineLimit, VerticalAlignment,
};
pub use engine::{Flock, FlockState};
pub use error::{FlockError, Result, SpacingAxis};
pub use layout::{LayoutConstraints, LayoutResult, Line, compute};
pub use primitives::{Point, Rect, Size};
