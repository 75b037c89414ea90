//! Published layout state.

use serde::Serialize;

use crate::primitives::{Rect, Size};

use super::planner::Line;

/// Output of one full layout pass.
///
/// Replaced wholesale on every recompute. Items past `last_visible_index`
/// keep their frames but should be hidden by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    pub lines: Vec<Line>,
    pub frames: Vec<Rect>,
    pub content_width: f32,
    pub content_height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub last_visible_index: Option<usize>,
}

impl LayoutResult {
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Whether the caller should hide item `index`.
    ///
    /// Everything is hidden until a layout has produced a visible line.
    pub fn is_hidden(&self, index: usize) -> bool {
        match self.last_visible_index {
            Some(last) => index > last,
            None => true,
        }
    }

    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    /// Frames of the items that are not hidden.
    pub fn visible_frames(&self) -> &[Rect] {
        match self.last_visible_index {
            Some(last) => &self.frames[..=last],
            None => &[],
        }
    }

    /// Lines that survive the line limit.
    pub fn visible_lines(&self) -> &[Line] {
        let count = match self.last_visible_index {
            Some(last) => self.lines.partition_point(|line| line.end <= last),
            None => 0,
        };
        &self.lines[..count]
    }

    /// Index of the line holding item `index`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        let line = self.lines.partition_point(|line| line.end < index);
        self.lines
            .get(line)
            .filter(|candidate| candidate.contains(index))
            .map(|_| line)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LayoutResult {
        LayoutResult {
            lines: vec![
                Line { start: 0, end: 1, width: 50.0, height: 10.0 },
                Line { start: 2, end: 2, width: 40.0, height: 10.0 },
            ],
            frames: vec![
                Rect::new(0.0, 0.0, 20.0, 10.0),
                Rect::new(30.0, 0.0, 20.0, 10.0),
                Rect::new(0.0, 15.0, 40.0, 10.0),
            ],
            content_width: 50.0,
            content_height: 10.0,
            min_width: 20.0,
            min_height: 10.0,
            last_visible_index: Some(1),
        }
    }

    #[test]
    fn test_hidden_items() {
        let result = sample();
        assert!(!result.is_hidden(0));
        assert!(!result.is_hidden(1));
        assert!(result.is_hidden(2));
        assert_eq!(result.visible_frames().len(), 2);
        assert_eq!(result.visible_lines().len(), 1);
        // Hidden items keep their frames.
        assert_eq!(result.frame(2), Some(Rect::new(0.0, 15.0, 40.0, 10.0)));
    }

    #[test]
    fn test_line_of() {
        let result = sample();
        assert_eq!(result.line_of(0), Some(0));
        assert_eq!(result.line_of(1), Some(0));
        assert_eq!(result.line_of(2), Some(1));
        assert_eq!(result.line_of(3), None);
    }

    #[test]
    fn test_empty_result() {
        let result = LayoutResult::default();
        assert!(result.is_empty());
        assert!(result.is_hidden(0));
        assert!(result.visible_frames().is_empty());
        assert!(result.visible_lines().is_empty());
        assert_eq!(result.content_size(), Size::ZERO);
    }
}
