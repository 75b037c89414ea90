//! Visibility clipper.
//!
//! Applies the line limit. Hidden items keep their frames; only visible lines
//! count toward the reported sizes.

use crate::config::LineLimit;
use crate::primitives::{Rect, Size};

use super::planner::Line;

/// What survives the line limit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Visibility {
    pub visible_lines: usize,
    /// End index of the last visible line.
    pub last_visible_index: Option<usize>,
    pub content_size: Size,
    pub min_size: Size,
}

pub fn clip(lines: &[Line], frames: &[Rect], limit: LineLimit, line_spacing: f32) -> Visibility {
    let visible_lines = limit.visible_lines(lines.len());
    let visible = &lines[..visible_lines];

    let Some(first) = visible.first() else {
        return Visibility::default();
    };

    let mut content_width = 0.0f32;
    let mut content_height = 0.0f32;
    let mut min_width = 0.0f32;
    for line in visible {
        content_width = content_width.max(frames[line.end].right());
        content_height += line.height;
        for frame in &frames[line.range()] {
            min_width = min_width.max(frame.width);
        }
    }
    content_height += (visible_lines - 1) as f32 * line_spacing;

    Visibility {
        visible_lines,
        last_visible_index: visible.last().map(|line| line.end),
        content_size: Size::new(content_width, content_height),
        min_size: Size::new(min_width, first.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::planner::plan;

    fn three_lines() -> (Vec<Line>, Vec<Rect>) {
        // Widths force one item per line; heights differ per line.
        let sizes = [
            Size::new(50.0, 20.0),
            Size::new(60.0, 30.0),
            Size::new(40.0, 10.0),
        ];
        let planned = plan(&sizes, 100.0, 10.0, 10.0);
        (planned.lines, planned.frames)
    }

    #[test]
    fn test_unlimited() {
        let (lines, frames) = three_lines();
        let v = clip(&lines, &frames, LineLimit::Unlimited, 10.0);
        assert_eq!(v.visible_lines, 3);
        assert_eq!(v.last_visible_index, Some(2));
        assert_eq!(v.content_size, Size::new(60.0, 80.0));
        assert_eq!(v.min_size, Size::new(60.0, 20.0));
    }

    #[test]
    fn test_one_line() {
        let (lines, frames) = three_lines();
        let v = clip(&lines, &frames, LineLimit::One, 10.0);
        assert_eq!(v.visible_lines, 1);
        assert_eq!(v.last_visible_index, Some(0));
        assert_eq!(v.content_size, Size::new(50.0, 20.0));
        assert_eq!(v.min_size, Size::new(50.0, 20.0));
    }

    #[test]
    fn test_some_lines() {
        let (lines, frames) = three_lines();
        let v = clip(&lines, &frames, LineLimit::Lines(2), 10.0);
        assert_eq!(v.last_visible_index, Some(1));
        assert_eq!(v.content_size.height, 60.0);

        let v = clip(&lines, &frames, LineLimit::Lines(10), 10.0);
        assert_eq!(v.visible_lines, 3);
        assert_eq!(v.last_visible_index, Some(2));
    }

    #[test]
    fn test_no_lines() {
        let v = clip(&[], &[], LineLimit::Unlimited, 10.0);
        assert_eq!(v, Visibility::default());
        assert_eq!(v.last_visible_index, None);
    }
}
