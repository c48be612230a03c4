use crate::layout::{Axis, AxisValues, Border, Bounds, Dimension, Gap, Insets, Orientation, Span};
use crate::render::{RenderContext, Style};

/// Box-model parameters shared by blocks, tables and lists.
#[derive(Debug, Clone, Default)]
pub struct BlockParameters {
    pub orientation: Orientation,
    pub span: AxisValues<Span>,
    /// `cross.max` limits child wrapping; the other bounds clamp the box.
    pub span_range: AxisValues<Bounds>,
    pub gap: Gap,
    pub padding: Insets,
    pub margin: Insets,
    pub border: Option<Border>,
    pub style: Option<Style>,
}

impl BlockParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_span(mut self, span: AxisValues<Span>) -> Self {
        self.span = span;
        self
    }

    pub fn with_span_range(mut self, span_range: AxisValues<Bounds>) -> Self {
        self.span_range = span_range;
        self
    }

    pub fn with_gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Columns taken by padding, margin and border on the left and right.
    pub(crate) fn horizontal_insets(&self) -> usize {
        self.padding.horizontal_columns(self.orientation)
            + self.margin.horizontal_columns(self.orientation)
            + self.border.as_ref().map_or(0, Border::horizontal_columns)
    }

    /// Lines taken by padding, margin and border on the top and bottom.
    pub(crate) fn vertical_insets(&self) -> usize {
        self.padding.vertical_lines(self.orientation)
            + self.margin.vertical_lines(self.orientation)
            + self.border.as_ref().map_or(0, Border::vertical_lines)
    }

    /// Upper limit on the width children wrap to.
    pub(crate) fn wrap_limit(&self) -> Option<usize> {
        self.span_range.cross.and_then(|bounds| bounds.max)
    }

    /// Bounds enforced on the finished box along `dimension`.
    ///
    /// `cross.max` is left out, it was already spent as the wrap limit.
    pub(crate) fn box_bounds(&self, dimension: Dimension) -> Bounds {
        let main = self.span_range.main.unwrap_or_default();
        let cross = self
            .span_range
            .cross
            .map(Bounds::without_max)
            .unwrap_or_default();
        match self.orientation.axis(dimension) {
            Axis::Main => main,
            Axis::Cross => cross,
        }
    }

    pub(crate) fn span_width(&self, context: &RenderContext) -> Option<usize> {
        self.fixed_width(context.max_width)
    }

    pub(crate) fn span_height(&self, context: &RenderContext) -> Option<usize> {
        self.span
            .along(self.orientation, Dimension::Height)
            .and_then(|span| span.resolve(context.height))
    }

    /// Width forced by the span, resolved against the parent's width.
    pub(crate) fn fixed_width(&self, parent_width: Option<usize>) -> Option<usize> {
        self.span
            .along(self.orientation, Dimension::Width)
            .and_then(|span| span.resolve(parent_width))
    }

    /// Width budget handed to children.
    pub(crate) fn inner_width(&self, context: &RenderContext) -> Option<usize> {
        let outer = min_present(self.wrap_limit(), context.max_width);
        min_present(outer, self.span_width(context))
            .map(|width| width.saturating_sub(self.horizontal_insets()))
    }

    /// Height handed to children, when the block's own height is fixed.
    pub(crate) fn inner_height(&self, context: &RenderContext) -> Option<usize> {
        min_present(
            self.box_bounds(Dimension::Height).max,
            self.span_height(context),
        )
            .map(|height| height.saturating_sub(self.vertical_insets()))
    }
}

/// Smaller of two optional limits; an absent limit never wins.
fn min_present(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (limit, None) | (None, limit) => limit,
    }
}
