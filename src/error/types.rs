use thiserror::Error;

/// Unified result type for the Tex layout engine.
pub type Result<T> = std::result::Result<T, TexError>;

/// Errors surfaced while building or rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TexError {
    #[error("gap count must be positive, got {0}")]
    InvalidGapCount(usize),
    #[error("gap literal must not be empty")]
    EmptyGap,
    #[error("inset literal must not be empty")]
    EmptyInset,
    #[error("intersection glyph `{0}` must be exactly one column wide")]
    InvalidIntersection(String),
    #[error("percentage must be within 1..=100, got {0}")]
    InvalidPercent(u16),
    #[error("span range minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: usize, max: usize },
    #[error("node tree is deeper than the render limit of {limit}")]
    DepthExceeded { limit: usize },
}
