use super::compose::Composition;
use super::style::Style;
use crate::error::{Result, TexError};
use crate::geometry::Size;
use crate::logging::{LogLevel, Logger, event_with_fields};
use crate::metrics::RenderMetrics;
use serde_json::Value;

/// Deepest node tree a render will walk before giving up.
pub const MAX_RENDER_DEPTH: usize = 256;

/// Position of a node among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiblingIndex {
    pub total: usize,
    pub position: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl SiblingIndex {
    pub fn new(position: usize, total: usize) -> Self {
        Self {
            total,
            position,
            is_first: position == 0,
            is_last: position + 1 >= total,
        }
    }

    /// Index of a node rendered on its own.
    pub fn root() -> Self {
        Self::new(0, 1)
    }
}

impl Default for SiblingIndex {
    fn default() -> Self {
        Self::root()
    }
}

/// Constraints handed from a parent to a child render.
///
/// A context is never mutated during a render; each child gets a fresh one.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub max_width: Option<usize>,
    pub height: Option<usize>,
    /// Style inherited from the nearest styled ancestor.
    pub style: Option<Style>,
    pub index: SiblingIndex,
    depth: usize,
    logger: Option<Logger>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_index(mut self, index: SiblingIndex) -> Self {
        self.index = index;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for a child one level below this one.
    pub(crate) fn child(
        &self,
        max_width: Option<usize>,
        height: Option<usize>,
        style: Option<Style>,
        index: SiblingIndex,
    ) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > MAX_RENDER_DEPTH {
            return Err(TexError::DepthExceeded {
                limit: MAX_RENDER_DEPTH,
            });
        }
        Ok(Self {
            max_width,
            height,
            style,
            index,
            depth,
            logger: self.logger.clone(),
        })
    }

    pub(crate) fn log(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(logger) = &self.logger {
            if logger.enabled(level) {
                let _ = logger.log_event(event_with_fields(level, target, message, fields));
            }
        }
    }
}

/// Measurements reported alongside rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Shape {
    pub intrinsic_width: usize,
    pub intrinsic_height: usize,
    /// Width the node would take with no width constraint applied.
    pub desired_width: usize,
}

/// Output of rendering one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub(crate) composition: Composition,
    shape: Shape,
    metrics: RenderMetrics,
}

impl Rendered {
    pub(crate) fn new(
        composition: Composition,
        measured: Size,
        desired_width: usize,
        metrics: RenderMetrics,
    ) -> Self {
        Self {
            composition,
            shape: Shape {
                intrinsic_width: measured.width,
                intrinsic_height: measured.height,
                desired_width,
            },
            metrics,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn lines(&self) -> &[String] {
        &self.composition.lines
    }

    /// Width of the box, including trailing blank columns.
    pub fn width(&self) -> usize {
        self.composition.width
    }

    pub fn height(&self) -> usize {
        self.composition.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composition.lines.is_empty()
    }

    /// The rendered text, newline-delimited.
    pub fn value(&self) -> String {
        self.composition.lines.join("\n")
    }

    pub fn metrics(&self) -> RenderMetrics {
        self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut RenderMetrics {
        &mut self.metrics
    }

    pub(crate) fn into_composition(self) -> Composition {
        self.composition
    }

    /// Truncate every line to `width` columns.
    pub(crate) fn clamp_width(&mut self, width: usize) {
        self.composition.clamp(width);
        self.shape.intrinsic_width = self.shape.intrinsic_width.min(width);
    }
}
