//! Line-wrap planner.
//!
//! Greedy single pass over the items: pack left to right, break to a new line
//! when the next item would cross the container width. Frames come out
//! top-left anchored; alignment happens afterwards.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::primitives::{Rect, Size};

/// A contiguous run of items placed on one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    /// First item index (inclusive).
    pub start: usize,
    /// Last item index (inclusive).
    pub end: usize,
    /// X-extent consumed by the line, spacing included.
    pub width: f32,
    /// Tallest item on the line.
    pub height: f32,
}

impl Line {
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Planner output: line partition plus unaligned frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub lines: Vec<Line>,
    pub frames: Vec<Rect>,
}

/// Open line state while walking the items.
struct Cursor {
    x: f32,
    y: f32,
    line_start: usize,
    line_height: f32,
    /// Right edge of the last item placed on the open line.
    line_right: f32,
}

impl Cursor {
    fn close(
        &mut self,
        lines: &mut Vec<Line>,
        end: usize,
        width: f32,
        height: f32,
        line_spacing: f32,
    ) {
        tracing::trace!(start = self.line_start, end, width, height, "closing line");
        lines.push(Line {
            start: self.line_start,
            end,
            width,
            height,
        });
        self.x = 0.0;
        self.y += height + line_spacing;
        self.line_start = end + 1;
        self.line_height = 0.0;
        self.line_right = 0.0;
    }
}

/// Partition `sizes` into lines no wider than `max_width`.
///
/// An item that alone exceeds `max_width` gets a line of its own with its
/// frame width forced to `max_width`. Every item lands on exactly one line.
pub fn plan(sizes: &[Size], max_width: f32, spacing: f32, line_spacing: f32) -> Plan {
    let mut lines = Vec::new();
    let mut frames = Vec::with_capacity(sizes.len());
    let mut cursor = Cursor {
        x: 0.0,
        y: 0.0,
        line_start: 0,
        line_height: 0.0,
        line_right: 0.0,
    };

    for (index, &size) in sizes.iter().enumerate() {
        // At most two rounds: closing a line makes `index` the first item of
        // the next one, and a first item always resolves.
        loop {
            let first_on_line = index == cursor.line_start;
            // Written so a NaN width counts as not fitting.
            let fits_alone = size.width <= max_width;

            if first_on_line && !fits_alone {
                frames.push(Rect::new(0.0, cursor.y, max_width, size.height));
                cursor.close(&mut lines, index, max_width, size.height, line_spacing);
                break;
            }

            let right = cursor.x + size.width;
            if right <= max_width {
                frames.push(Rect::new(cursor.x, cursor.y, size.width, size.height));
                cursor.line_height = cursor.line_height.max(size.height);
                cursor.line_right = right;
                cursor.x = right + spacing;
                break;
            }

            let (width, height) = (cursor.line_right, cursor.line_height);
            cursor.close(&mut lines, index - 1, width, height, line_spacing);
        }
    }

    if cursor.line_start < sizes.len() {
        let (width, height) = (cursor.line_right, cursor.line_height);
        cursor.close(&mut lines, sizes.len() - 1, width, height, line_spacing);
    }

    Plan { lines, frames }
}
