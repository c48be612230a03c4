//! Root render configuration.
//!
//! The only process-wide input is the terminal width: resolved once per root
//! render from an explicit option, then `COLUMNS`, then the attached
//! terminal, then [`DEFAULT_TERMINAL_WIDTH`].

use crate::layout::{AxisValues, Bounds, Orientation};
use crate::logging::Logger;

/// Width used when nothing else is known.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Environment variable consulted for the terminal width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Options for the root of a [`Tex`](crate::Tex) tree.
#[derive(Debug, Clone, Default)]
pub struct TexOptions {
    pub orientation: Orientation,
    pub span_range: AxisValues<Bounds>,
    pub terminal_width: Option<usize>,
    pub logger: Option<Logger>,
}

impl TexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_span_range(mut self, span_range: AxisValues<Bounds>) -> Self {
        self.span_range = span_range;
        self
    }

    pub fn with_terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = Some(width);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Width the root render is allowed to use.
    pub fn effective_terminal_width(&self) -> usize {
        if let Some(width) = self.terminal_width {
            return width;
        }
        let columns = std::env::var(COLUMNS_ENV).ok();
        resolve_terminal_width(None, columns.as_deref(), detect_terminal_width())
    }
}

/// Pick the terminal width from the available sources, in priority order.
///
/// `columns` is only honoured when it parses as a positive integer.
pub fn resolve_terminal_width(
    explicit: Option<usize>,
    columns: Option<&str>,
    detected: Option<usize>,
) -> usize {
    explicit
        .or_else(|| {
            columns
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width > 0)
        })
        .or(detected.filter(|width| *width > 0))
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Width of the attached terminal, if there is one.
pub fn detect_terminal_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_width_wins() {
        assert_eq!(resolve_terminal_width(Some(40), Some("100"), Some(120)), 40);
    }

    #[test]
    fn columns_env_is_next() {
        assert_eq!(resolve_terminal_width(None, Some("100"), Some(120)), 100);
        assert_eq!(resolve_terminal_width(None, Some(" 72 "), None), 72);
    }

    #[test]
    fn non_numeric_columns_fall_through() {
        assert_eq!(resolve_terminal_width(None, Some("wide"), Some(120)), 120);
        assert_eq!(resolve_terminal_width(None, Some("0"), None), DEFAULT_TERMINAL_WIDTH);
    }

    #[test]
    fn default_when_nothing_is_known() {
        assert_eq!(resolve_terminal_width(None, None, None), DEFAULT_TERMINAL_WIDTH);
    }

    #[test]
    fn options_prefer_explicit_width() {
        let options = TexOptions::new().with_terminal_width(33);
        assert_eq!(options.effective_terminal_width(), 33);
    }
}
