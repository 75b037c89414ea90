//! Alignment pass.
//!
//! Translates planned frames inside their lines. Line membership and line
//! metrics are never touched.

use crate::config::{Alignment, HorizontalAlignment, VerticalAlignment};
use crate::primitives::{Point, Rect};

use super::planner::Line;

/// Horizontal shift applied to every item of a line.
#[inline]
pub fn line_offset(alignment: HorizontalAlignment, container_width: f32, line: &Line) -> f32 {
    match alignment {
        HorizontalAlignment::Leading => 0.0,
        HorizontalAlignment::Center => (container_width - line.width) / 2.0,
        HorizontalAlignment::Trailing => container_width - line.width,
    }
}

/// Vertical shift of one item within its line.
#[inline]
pub fn item_offset(alignment: VerticalAlignment, line: &Line, item_height: f32) -> f32 {
    match alignment {
        VerticalAlignment::Top => 0.0,
        VerticalAlignment::Center => (line.height - item_height) / 2.0,
        VerticalAlignment::Bottom => line.height - item_height,
    }
}

/// Apply `alignment` to `frames` in place.
pub fn align(frames: &mut [Rect], lines: &[Line], container_width: f32, alignment: Alignment) {
    if alignment == Alignment::TOP_LEADING {
        return;
    }

    for line in lines {
        let dx = line_offset(alignment.horizontal, container_width, line);
        for frame in &mut frames[line.range()] {
            let dy = item_offset(alignment.vertical, line, frame.height);
            *frame = frame.translate(Point::new(dx, dy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::planner::plan;
    use crate::primitives::Size;

    #[test]
    fn test_leading_top_is_identity() {
        let sizes = [Size::new(30.0, 10.0), Size::new(30.0, 20.0)];
        let planned = plan(&sizes, 100.0, 10.0, 0.0);
        let mut frames = planned.frames.clone();
        align(&mut frames, &planned.lines, 100.0, Alignment::TOP_LEADING);
        assert_eq!(frames, planned.frames);
    }

    #[test]
    fn test_trailing_bottom() {
        // One line of width 60: 20 + 10 + 30.
        let sizes = [Size::new(20.0, 10.0), Size::new(30.0, 24.0)];
        let planned = plan(&sizes, 100.0, 10.0, 0.0);
        assert_eq!(planned.lines[0].width, 60.0);

        let mut frames = planned.frames.clone();
        align(&mut frames, &planned.lines, 100.0, Alignment::BOTTOM_TRAILING);
        assert_eq!(frames[0], Rect::new(40.0, 14.0, 20.0, 10.0));
        assert_eq!(frames[1], Rect::new(70.0, 0.0, 30.0, 24.0));
    }

    #[test]
    fn test_center() {
        let sizes = [Size::new(40.0, 10.0), Size::new(20.0, 30.0)];
        let planned = plan(&sizes, 100.0, 0.0, 0.0);
        let mut frames = planned.frames.clone();
        align(&mut frames, &planned.lines, 100.0, Alignment::CENTER);
        assert_eq!(frames[0], Rect::new(20.0, 10.0, 40.0, 10.0));
        assert_eq!(frames[1], Rect::new(60.0, 0.0, 20.0, 30.0));
    }

    #[test]
    fn test_offsets_are_per_line() {
        let sizes = [Size::new(60.0, 10.0), Size::new(80.0, 10.0)];
        let planned = plan(&sizes, 100.0, 10.0, 5.0);
        assert_eq!(planned.lines.len(), 2);

        let mut frames = planned.frames.clone();
        let alignment = Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
        align(&mut frames, &planned.lines, 100.0, alignment);
        assert_eq!(frames[0].x, 40.0);
        assert_eq!(frames[1].x, 20.0);
        assert_eq!(frames[1].y, 15.0);
    }
}
