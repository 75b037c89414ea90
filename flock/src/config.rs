//! Engine configuration.
//!
//! A `FlockConfig` is fixed for the lifetime of one engine instance. It can be
//! built with chained setters or parsed from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{FlockError, Result, SpacingAxis};

/// How the engine sizes itself on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightMode {
    /// Report the minimal bounding size; the caller shrinks or grows to it.
    #[default]
    Fit,
    /// Fill the container width; height is unbounded and reported as laid out.
    Expand,
}

/// Placement of a line inside the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Placement of an item inside its line's height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Combined horizontal and vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self { horizontal, vertical }
    }
}

/// Maximum number of visible lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLimit {
    /// Only the first line is visible.
    One,
    /// At most `n` lines are visible (`n >= 1`).
    Lines(usize),
    #[default]
    Unlimited,
}

impl LineLimit {
    /// Number of visible lines out of `line_count` laid-out lines.
    pub fn visible_lines(&self, line_count: usize) -> usize {
        match self {
            LineLimit::One => line_count.min(1),
            LineLimit::Lines(n) => line_count.min(*n),
            LineLimit::Unlimited => line_count,
        }
    }
}

/// Configuration for a flow layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    pub height_mode: HeightMode,
    pub alignment: Alignment,
    /// Horizontal spacing between items on a line.
    pub horizontal_spacing: f32,
    /// Vertical spacing between lines.
    pub vertical_spacing: f32,
    pub line_limit: LineLimit,
}

impl FlockConfig {
    /// Default configuration: fit, top/leading, no spacing, unlimited lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FlockConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the height mode.
    pub fn height_mode(mut self, mode: HeightMode) -> Self {
        self.height_mode = mode;
        self
    }

    /// Set the alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set horizontal spacing between items.
    pub fn horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set vertical spacing between wrapped lines.
    pub fn vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set both spacings at once.
    pub fn spacing(self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_spacing(horizontal).vertical_spacing(vertical)
    }

    /// Set the line limit.
    pub fn line_limit(mut self, limit: LineLimit) -> Self {
        self.line_limit = limit;
        self
    }

    /// Check spacing and line limit.
    pub fn validate(&self) -> Result<()> {
        check_spacing(SpacingAxis::Horizontal, self.horizontal_spacing)?;
        check_spacing(SpacingAxis::Vertical, self.vertical_spacing)?;
        if self.line_limit == LineLimit::Lines(0) {
            return Err(FlockError::InvalidLineLimit);
        }
        Ok(())
    }
}

fn check_spacing(axis: SpacingAxis, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlockError::InvalidSpacing { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlockConfig::new();
        assert_eq!(config.height_mode, HeightMode::Fit);
        assert_eq!(config.alignment, Alignment::TOP_LEADING);
        assert_eq!(config.line_limit, LineLimit::Unlimited);
        assert_eq!(config.horizontal_spacing, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let err = FlockConfig::new().horizontal_spacing(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            FlockError::InvalidSpacing { axis: SpacingAxis::Horizontal, .. }
        ));

        let err = FlockConfig::new().vertical_spacing(f32::NAN).validate().unwrap_err();
        assert!(matches!(
            err,
            FlockError::InvalidSpacing { axis: SpacingAxis::Vertical, .. }
        ));
    }

    #[test]
    fn test_rejects_zero_line_limit() {
        let err = FlockConfig::new().line_limit(LineLimit::Lines(0)).validate().unwrap_err();
        assert!(matches!(err, FlockError::InvalidLineLimit));
    }

    #[test]
    fn test_visible_lines() {
        assert_eq!(LineLimit::One.visible_lines(3), 1);
        assert_eq!(LineLimit::One.visible_lines(0), 0);
        assert_eq!(LineLimit::Lines(2).visible_lines(3), 2);
        assert_eq!(LineLimit::Lines(5).visible_lines(3), 3);
        assert_eq!(LineLimit::Unlimited.visible_lines(3), 3);
    }

    #[test]
    fn test_from_json() {
        let config = FlockConfig::from_json(
            r#"{
                "height_mode": "expand",
                "alignment": { "horizontal": "center" },
                "horizontal_spacing": 8.0,
                "line_limit": { "lines": 2 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.height_mode, HeightMode::Expand);
        assert_eq!(config.alignment.horizontal, HorizontalAlignment::Center);
        assert_eq!(config.alignment.vertical, VerticalAlignment::Top);
        assert_eq!(config.horizontal_spacing, 8.0);
        assert_eq!(config.vertical_spacing, 0.0);
        assert_eq!(config.line_limit, LineLimit::Lines(2));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            FlockConfig::from_json("{ not json"),
            Err(FlockError::Config(_))
        ));
        assert!(matches!(
            FlockConfig::from_json(r#"{ "line_limit": { "lines": 0 } }"#),
            Err(FlockError::InvalidLineLimit)
        ));
    }
}
