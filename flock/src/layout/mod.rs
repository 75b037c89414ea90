//! Flow layout pipeline.
//!
//! ```text
//! item sizes + space -> plan (lines, raw frames) -> align -> clip -> LayoutResult
//! ```
//!
//! `compute` is a pure function of its inputs; the stateful gate lives in
//! [`crate::engine::Flock`].

pub mod align;
pub mod clip;
pub mod constraints;
pub mod planner;
pub mod result;
pub mod sizes;
pub mod space;

pub use constraints::LayoutConstraints;
pub use planner::{Line, Plan};
pub use result::LayoutResult;
pub use sizes::ItemSizeStore;
pub use space::SpaceTracker;

use crate::config::{FlockConfig, HeightMode};
use crate::primitives::Size;

/// Run the full pipeline over `sizes` within `constraints`.
pub fn compute(
    sizes: &[Size],
    constraints: LayoutConstraints,
    config: &FlockConfig,
) -> LayoutResult {
    let width = constraints.max_width;
    let Plan { lines, mut frames } = planner::plan(
        sizes,
        width,
        config.horizontal_spacing,
        config.vertical_spacing,
    );
    align::align(&mut frames, &lines, width, config.alignment);
    let visibility = clip::clip(&lines, &frames, config.line_limit, config.vertical_spacing);

    let natural = visibility.content_size;
    let content = if visibility.visible_lines == 0 {
        Size::ZERO
    } else {
        match config.height_mode {
            HeightMode::Fit => {
                Size::new(natural.width, constraints.constrain_height(natural.height))
            }
            HeightMode::Expand => Size::new(width, natural.height),
        }
    };

    tracing::debug!(
        items = sizes.len(),
        lines = lines.len(),
        visible = visibility.visible_lines,
        width,
        "flow layout computed"
    );

    LayoutResult {
        lines,
        frames,
        content_width: content.width,
        content_height: content.height,
        min_width: visibility.min_size.width,
        min_height: visibility.min_size.height,
        last_visible_index: visibility.last_visible_index,
    }
}
