//! Border description: per-edge glyphs or hooks, plus optional corners.

use std::fmt;
use std::sync::Arc;

use super::core::PhysicalEdge;
use crate::render::SiblingIndex;
use crate::width::display_width;

/// Everything a border hook may look at when choosing a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderHookContext {
    /// Position of the cell along the edge, from the top or the left.
    pub edge_index: usize,
    /// Output line the glyph is drawn on.
    pub line_index: usize,
    /// Length of the edge in cells.
    pub total_edges: usize,
    /// Total lines of the bordered block.
    pub total_lines: usize,
    /// Position of the bordered node among its siblings.
    pub sibling: SiblingIndex,
}

pub type BorderHook = Arc<dyn Fn(&BorderHookContext) -> String + Send + Sync>;

/// Glyph for one border edge.
#[derive(Clone)]
pub enum BorderGlyph {
    Literal(String),
    /// Evaluated once per drawn cell. Hooks are expected to return one column.
    Hook(BorderHook),
}

impl BorderGlyph {
    pub fn hook<F>(f: F) -> Self
    where
        F: Fn(&BorderHookContext) -> String + Send + Sync + 'static,
    {
        Self::Hook(Arc::new(f))
    }

    /// Columns the edge takes when drawn on the left or right.
    pub fn columns(&self) -> usize {
        match self {
            Self::Literal(glyph) => display_width(glyph),
            Self::Hook(_) => 1,
        }
    }

    pub fn glyph(&self, context: &BorderHookContext) -> String {
        match self {
            Self::Literal(glyph) => glyph.clone(),
            Self::Hook(hook) => hook(context),
        }
    }
}

impl fmt::Debug for BorderGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(glyph) => f.debug_tuple("Literal").field(glyph).finish(),
            Self::Hook(_) => f.write_str("Hook(..)"),
        }
    }
}

impl From<&str> for BorderGlyph {
    fn from(glyph: &str) -> Self {
        Self::Literal(glyph.to_string())
    }
}

impl From<String> for BorderGlyph {
    fn from(glyph: String) -> Self {
        Self::Literal(glyph)
    }
}

impl From<char> for BorderGlyph {
    fn from(glyph: char) -> Self {
        Self::Literal(glyph.to_string())
    }
}

/// Corner glyphs, clockwise from the top left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Corners {
    pub top_left: String,
    pub top_right: String,
    pub bottom_right: String,
    pub bottom_left: String,
}

impl Corners {
    pub fn new(
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_right: impl Into<String>,
        bottom_left: impl Into<String>,
    ) -> Self {
        Self {
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_right: bottom_right.into(),
            bottom_left: bottom_left.into(),
        }
    }

    pub fn uniform(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        Self::new(glyph.clone(), glyph.clone(), glyph.clone(), glyph)
    }
}

/// Border drawn around a block after every other structural operation.
#[derive(Debug, Clone, Default)]
pub struct Border {
    pub top: Option<BorderGlyph>,
    pub right: Option<BorderGlyph>,
    pub bottom: Option<BorderGlyph>,
    pub left: Option<BorderGlyph>,
    pub corners: Option<Corners>,
}

impl Border {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same glyph on all four edges and corners.
    pub fn all(glyph: impl Into<BorderGlyph>) -> Self {
        let glyph = glyph.into();
        Self {
            top: Some(glyph.clone()),
            right: Some(glyph.clone()),
            bottom: Some(glyph.clone()),
            left: Some(glyph),
            corners: None,
        }
    }

    fn boxed(horizontal: &str, vertical: &str, corners: Corners) -> Self {
        Self {
            top: Some(horizontal.into()),
            right: Some(vertical.into()),
            bottom: Some(horizontal.into()),
            left: Some(vertical.into()),
            corners: Some(corners),
        }
    }

    pub fn single() -> Self {
        Self::boxed("─", "│", Corners::new("┌", "┐", "┘", "└"))
    }

    pub fn rounded() -> Self {
        Self::boxed("─", "│", Corners::new("╭", "╮", "╯", "╰"))
    }

    pub fn ascii() -> Self {
        Self::boxed("-", "|", Corners::uniform("+"))
    }

    pub fn with_top(mut self, glyph: impl Into<BorderGlyph>) -> Self {
        self.top = Some(glyph.into());
        self
    }

    pub fn with_right(mut self, glyph: impl Into<BorderGlyph>) -> Self {
        self.right = Some(glyph.into());
        self
    }

    pub fn with_bottom(mut self, glyph: impl Into<BorderGlyph>) -> Self {
        self.bottom = Some(glyph.into());
        self
    }

    pub fn with_left(mut self, glyph: impl Into<BorderGlyph>) -> Self {
        self.left = Some(glyph.into());
        self
    }

    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = Some(corners);
        self
    }

    pub fn edge(&self, edge: PhysicalEdge) -> Option<&BorderGlyph> {
        match edge {
            PhysicalEdge::Top => self.top.as_ref(),
            PhysicalEdge::Right => self.right.as_ref(),
            PhysicalEdge::Bottom => self.bottom.as_ref(),
            PhysicalEdge::Left => self.left.as_ref(),
        }
    }

    /// Columns taken by the left and right edges.
    pub fn horizontal_columns(&self) -> usize {
        self.left.as_ref().map_or(0, BorderGlyph::columns)
            + self.right.as_ref().map_or(0, BorderGlyph::columns)
    }

    /// Lines taken by the top and bottom edges.
    pub fn vertical_lines(&self) -> usize {
        usize::from(self.top.is_some()) + usize::from(self.bottom.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(edge_index: usize) -> BorderHookContext {
        BorderHookContext {
            edge_index,
            line_index: 0,
            total_edges: 4,
            total_lines: 3,
            sibling: SiblingIndex::root(),
        }
    }

    #[test]
    fn literal_glyph_ignores_context() {
        let glyph = BorderGlyph::from("│");
        assert_eq!(glyph.glyph(&context(3)), "│");
        assert_eq!(glyph.columns(), 1);
    }

    #[test]
    fn hook_sees_position() {
        let glyph = BorderGlyph::hook(|ctx| if ctx.edge_index % 2 == 0 { "=" } else { "-" }.into());
        assert_eq!(glyph.glyph(&context(0)), "=");
        assert_eq!(glyph.glyph(&context(1)), "-");
    }

    #[test]
    fn presets_cover_every_edge() {
        let border = Border::single();
        assert_eq!(border.horizontal_columns(), 2);
        assert_eq!(border.vertical_lines(), 2);
        assert_eq!(Border::new().with_left("> ").horizontal_columns(), 2);
    }
}
