//! Flock error types.

use thiserror::Error;

/// Which spacing value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingAxis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for SpacingAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpacingAxis::Horizontal => f.write_str("horizontal"),
            SpacingAxis::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("item index {index} out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("invalid {axis} spacing: {value}")]
    InvalidSpacing { axis: SpacingAxis, value: f32 },

    #[error("line limit must allow at least one line")]
    InvalidLineLimit,

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlockError>;
