//! Box compositor.
//!
//! A [`Composition`] is a box of lines with a known width. Blocks build one
//! from their rendered children and then run the box operations over it in
//! a fixed order: join, padding, margin, span, span range, border, measure,
//! style.

use super::core::{RenderContext, SiblingIndex};
use super::style::Style;
use crate::geometry::Size;
use crate::layout::{
    Border, BorderGlyph, BorderHookContext, Bounds, Dimension, Gap, Inset, Insets, Orientation,
    PhysicalEdge, Separator,
};
use crate::node::BlockParameters;
use crate::width::{display_width, fit_to, overlay_column, pad_to, repeat_to_width, truncate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Composition {
    pub(crate) lines: Vec<String>,
    /// Box width in columns. Never less than the widest line.
    pub(crate) width: usize,
    /// Columns where a cross separator runs through this box.
    pub(crate) crossings: Vec<usize>,
}

impl Composition {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        Self {
            lines,
            width,
            crossings: Vec::new(),
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.lines.len()
    }

    /// Join children along the main axis, separated by `gap.main`.
    pub(crate) fn join(children: Vec<Composition>, orientation: Orientation, gap: &Gap) -> Self {
        match orientation {
            Orientation::Vertical => Self::join_vertical(children, gap),
            Orientation::Horizontal => Self::join_horizontal(children, gap),
        }
    }

    fn join_vertical(children: Vec<Composition>, gap: &Gap) -> Self {
        let mut width = children.iter().map(|child| child.width).max().unwrap_or(0);
        let crossing = gap.crossing_glyph();
        let mut lines = Vec::new();
        let mut above: Option<Vec<usize>> = None;

        for child in children {
            if let (Some(previous), Some(separator)) = (&above, &gap.main) {
                let mut rows = separator.rows(width);
                if let Some(glyph) = crossing {
                    for column in previous.iter().filter(|c| child.crossings.contains(*c)) {
                        for row in &mut rows {
                            *row = overlay_column(row, *column, glyph);
                        }
                    }
                }
                lines.extend(rows);
            }
            above = Some(child.crossings);
            lines.extend(child.lines);
        }

        width = width.max(lines.iter().map(|line| display_width(line)).max().unwrap_or(0));
        Self {
            lines,
            width,
            crossings: Vec::new(),
        }
    }

    fn join_horizontal(children: Vec<Composition>, gap: &Gap) -> Self {
        let height = children.iter().map(Composition::height).max().unwrap_or(0);
        let last = children.len().saturating_sub(1);
        let mut lines = vec![String::new(); height];
        let mut width = 0;
        let mut crossings = Vec::new();

        for (position, child) in children.into_iter().enumerate() {
            if position > 0 {
                if let Some(separator) = &gap.main {
                    crossings.extend(separator.crossings().into_iter().map(|c| c + width));
                    for (line, cell) in lines.iter_mut().zip(separator.column(height)) {
                        line.push_str(&cell);
                    }
                    width += separator.columns();
                }
            }
            crossings.extend(child.crossings.iter().map(|c| c + width));
            for (row, line) in lines.iter_mut().enumerate() {
                let cell = child.lines.get(row).map(String::as_str).unwrap_or("");
                if position == last {
                    line.push_str(cell);
                } else {
                    line.push_str(&pad_to(cell, child.width));
                }
            }
            width += child.width;
        }

        Self {
            lines,
            width,
            crossings,
        }
    }

    /// Surround the box with padding or margin. Sides go first, so top and
    /// bottom rules span the full inset width.
    pub(crate) fn inset(&mut self, insets: &Insets, orientation: Orientation) {
        if let Some(inset) = insets.physical(orientation, PhysicalEdge::Right) {
            self.inset_right(inset);
        }
        if let Some(inset) = insets.physical(orientation, PhysicalEdge::Left) {
            self.inset_left(inset);
        }
        if let Some(inset) = insets.physical(orientation, PhysicalEdge::Top) {
            let rows = self.inset_rows(inset);
            self.lines.splice(0..0, rows);
        }
        if let Some(inset) = insets.physical(orientation, PhysicalEdge::Bottom) {
            let rows = self.inset_rows(inset);
            self.lines.extend(rows);
        }
    }

    fn inset_left(&mut self, inset: &Inset) {
        let columns = inset.columns();
        if columns == 0 {
            return;
        }
        let cells = side_cells(inset, self.lines.len());
        for (line, cell) in self.lines.iter_mut().zip(cells) {
            line.insert_str(0, &cell);
        }
        self.width += columns;
        for crossing in &mut self.crossings {
            *crossing += columns;
        }
    }

    fn inset_right(&mut self, inset: &Inset) {
        let columns = inset.columns();
        if columns == 0 {
            return;
        }
        let width = self.width;
        let cells = side_cells(inset, self.lines.len());
        for (line, cell) in self.lines.iter_mut().zip(cells) {
            let mut padded = pad_to(line, width);
            padded.push_str(&cell);
            *line = padded;
        }
        self.width += columns;
    }

    fn inset_rows(&mut self, inset: &Inset) -> Vec<String> {
        match inset {
            Inset::Count(lines) => vec![String::new(); *lines],
            Inset::Literal(text) => {
                let rows = Separator::Literal(text.clone()).rows(self.width);
                let widest = rows.iter().map(|row| display_width(row)).max().unwrap_or(0);
                self.width = self.width.max(widest);
                rows
            }
        }
    }

    /// Force the box to an exact width and/or height.
    pub(crate) fn force_size(&mut self, width: Option<usize>, height: Option<usize>) {
        if let Some(width) = width {
            for line in &mut self.lines {
                if display_width(line) > width {
                    *line = truncate(line, width);
                }
            }
            self.width = width;
            self.crossings.retain(|column| *column < width);
        }
        if let Some(height) = height {
            self.lines.resize(height, String::new());
        }
    }

    /// Clamp the box into width and height bounds.
    pub(crate) fn bound(&mut self, width: Bounds, height: Bounds) {
        if let Some(min) = width.min {
            self.width = self.width.max(min);
        }
        if let Some(max) = width.max {
            if self.width > max {
                self.force_size(Some(max), None);
            }
        }
        if let Some(min) = height.min {
            if self.lines.len() < min {
                self.lines.resize(min, String::new());
            }
        }
        if let Some(max) = height.max {
            self.lines.truncate(max);
        }
    }

    /// Draw `border` around the box.
    pub(crate) fn border(&mut self, border: &Border, sibling: SiblingIndex) {
        let inner = self.width;
        let left_columns = border.left.as_ref().map_or(0, BorderGlyph::columns);
        let right_columns = border.right.as_ref().map_or(0, BorderGlyph::columns);
        let top = usize::from(border.top.is_some());
        let bottom = usize::from(border.bottom.is_some());
        let content = self.lines.len();
        let total_lines = content + top + bottom;

        let context = |edge_index, line_index, total_edges| BorderHookContext {
            edge_index,
            line_index,
            total_edges,
            total_lines,
            sibling,
        };
        let rule = |edge: &BorderGlyph, line_index: usize| -> String {
            match edge {
                BorderGlyph::Literal(glyph) => fit_to(&repeat_to_width(glyph, inner), inner),
                BorderGlyph::Hook(_) => (0..inner)
                    .map(|column| fit_to(&edge.glyph(&context(column, line_index, inner)), 1))
                    .collect(),
            }
        };
        let corner = |fixed: Option<&String>, edge: &BorderGlyph, line_index, columns| {
            if columns == 0 {
                return String::new();
            }
            match fixed {
                Some(glyph) => fit_to(glyph, columns),
                None => {
                    let glyph = edge.glyph(&context(0, line_index, inner));
                    fit_to(&repeat_to_width(&glyph, columns), columns)
                }
            }
        };
        let corners = border.corners.as_ref();

        let mut lines = Vec::with_capacity(total_lines);
        if let Some(edge) = &border.top {
            let mut row = corner(corners.map(|c| &c.top_left), edge, 0, left_columns);
            row.push_str(&rule(edge, 0));
            row.push_str(&corner(corners.map(|c| &c.top_right), edge, 0, right_columns));
            lines.push(row);
        }
        for (row_index, line) in self.lines.iter().enumerate() {
            let line_index = row_index + top;
            let mut row = String::new();
            if let Some(edge) = &border.left {
                let glyph = edge.glyph(&context(row_index, line_index, content));
                row.push_str(&fit_to(&glyph, left_columns));
            }
            match &border.right {
                Some(edge) => {
                    row.push_str(&pad_to(line, inner));
                    let glyph = edge.glyph(&context(row_index, line_index, content));
                    row.push_str(&fit_to(&glyph, right_columns));
                }
                None => row.push_str(line),
            }
            lines.push(row);
        }
        if let Some(edge) = &border.bottom {
            let line_index = total_lines - 1;
            let mut row = corner(corners.map(|c| &c.bottom_left), edge, line_index, left_columns);
            row.push_str(&rule(edge, line_index));
            row.push_str(&corner(
                corners.map(|c| &c.bottom_right),
                edge,
                line_index,
                right_columns,
            ));
            lines.push(row);
        }

        self.lines = lines;
        self.width = inner + left_columns + right_columns;
        for crossing in &mut self.crossings {
            *crossing += left_columns;
        }
    }

    /// Visual size of the box as it stands.
    pub(crate) fn measure(&self) -> Size {
        let widest = self.lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        Size::new(self.width.max(widest), self.lines.len())
    }

    /// Apply `own` to every non-empty line, restoring `inherited` afterwards.
    pub(crate) fn stylize(&mut self, own: Option<&Style>, inherited: Option<&Style>) {
        let Some(style) = own else {
            return;
        };
        let restore = inherited.map(Style::opening).unwrap_or_default();
        for line in &mut self.lines {
            if line.is_empty() {
                continue;
            }
            let mut styled = style.apply_line(line);
            styled.push_str(&restore);
            *line = styled;
        }
    }

    /// Truncate lines wider than `width`.
    pub(crate) fn clamp(&mut self, width: usize) {
        for line in &mut self.lines {
            if display_width(line) > width {
                *line = truncate(line, width);
            }
        }
        self.width = self.width.min(width);
        self.crossings.retain(|column| *column < width);
    }
}

fn side_cells(inset: &Inset, height: usize) -> Vec<String> {
    match inset {
        Inset::Count(columns) => vec![" ".repeat(*columns); height],
        Inset::Literal(text) => Separator::Literal(text.clone()).column(height),
    }
}

/// Run the box operations over joined children for one block.
///
/// Returns the finished box and its size measured before styling.
pub(crate) fn compose(
    children: Vec<Composition>,
    parameters: &BlockParameters,
    context: &RenderContext,
) -> (Composition, Size) {
    let orientation = parameters.orientation;

    let mut boxed = Composition::join(children, orientation, &parameters.gap);
    boxed.inset(&parameters.padding, orientation);
    boxed.inset(&parameters.margin, orientation);
    boxed.force_size(
        parameters.span_width(context),
        parameters.span_height(context),
    );
    boxed.bound(
        parameters.box_bounds(Dimension::Width),
        parameters.box_bounds(Dimension::Height),
    );
    if let Some(border) = &parameters.border {
        boxed.border(border, context.index);
    }
    let size = boxed.measure();
    boxed.stylize(parameters.style.as_ref(), context.style.as_ref());

    (boxed, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Corners, GapInput};

    fn boxed(lines: &[&str]) -> Composition {
        Composition::from_lines(lines.iter().map(|line| line.to_string()).collect())
    }

    #[test]
    fn vertical_join_inserts_blank_lines() {
        let gap = Gap::resolve(1usize).unwrap();
        let joined = Composition::join(
            vec![boxed(&["a"]), boxed(&["bb"])],
            Orientation::Vertical,
            &gap,
        );
        assert_eq!(joined.lines, vec!["a", "", "bb"]);
        assert_eq!(joined.width, 2);
    }

    #[test]
    fn vertical_literal_gap_is_a_rule() {
        let gap = Gap::resolve("-").unwrap();
        let joined = Composition::join(
            vec![boxed(&["abc"]), boxed(&["d"])],
            Orientation::Vertical,
            &gap,
        );
        assert_eq!(joined.lines, vec!["abc", "---", "d"]);
    }

    #[test]
    fn horizontal_join_aligns_columns() {
        let gap = Gap::resolve(" | ").unwrap();
        let joined = Composition::join(
            vec![boxed(&["a", "aa"]), boxed(&["b"])],
            Orientation::Horizontal,
            &gap,
        );
        assert_eq!(joined.lines, vec!["a  | b", "aa | "]);
        assert_eq!(joined.width, 6);
        assert_eq!(joined.crossings, vec![3]);
    }

    #[test]
    fn intersections_overlay_shared_crossings() {
        let row_gap = Gap::resolve(" | ").unwrap();
        let row = |a: &str, b: &str| {
            Composition::join(vec![boxed(&[a]), boxed(&[b])], Orientation::Horizontal, &row_gap)
        };
        let gap = Gap::resolve(
            GapInput::axes()
                .with_main("-")
                .with_cross(" | ")
                .with_intersection("+"),
        )
        .unwrap();
        let table = Composition::join(vec![row("a", "b"), row("c", "d")], Orientation::Vertical, &gap);
        assert_eq!(table.lines, vec!["a | b", "--+--", "c | d"]);
    }

    #[test]
    fn insets_map_through_orientation() {
        let insets = Insets::new().with_cross_start(2usize).with_main_start(1usize);
        let mut vertical = boxed(&["x"]);
        vertical.inset(&insets, Orientation::Vertical);
        assert_eq!(vertical.lines, vec!["", "  x"]);

        let mut horizontal = boxed(&["x"]);
        horizontal.inset(&insets, Orientation::Horizontal);
        assert_eq!(horizontal.lines, vec!["", "", " x"]);
    }

    #[test]
    fn literal_insets_draw_on_every_line() {
        let insets = Insets::new()
            .with_cross_start(Inset::literal("> ").unwrap())
            .with_main_end(Inset::literal("=").unwrap());
        let mut boxed = boxed(&["a", "bc"]);
        boxed.inset(&insets, Orientation::Vertical);
        assert_eq!(boxed.lines, vec!["> a", "> bc", "===="]);
    }

    #[test]
    fn force_size_truncates_and_fills() {
        let mut boxed = boxed(&["hello world"]);
        boxed.force_size(Some(5), Some(2));
        assert_eq!(boxed.lines, vec!["hello", ""]);
        assert_eq!(boxed.width, 5);
    }

    #[test]
    fn bounds_raise_minimums() {
        let mut boxed = boxed(&["ab"]);
        boxed.bound(Bounds::at_least(4), Bounds::at_least(3));
        assert_eq!(boxed.width, 4);
        assert_eq!(boxed.lines.len(), 3);
    }

    #[test]
    fn single_border_wraps_box() {
        let mut boxed = boxed(&["ab", "c"]);
        boxed.border(&Border::single(), SiblingIndex::root());
        assert_eq!(boxed.lines, vec!["┌──┐", "│ab│", "│c │", "└──┘"]);
        assert_eq!(boxed.width, 4);
    }

    #[test]
    fn missing_corners_repeat_the_edge() {
        let mut boxed = boxed(&["ab"]);
        boxed.border(&Border::all("#"), SiblingIndex::root());
        assert_eq!(boxed.lines, vec!["####", "#ab#", "####"]);
    }

    #[test]
    fn explicit_corners_are_used() {
        let mut boxed = boxed(&["a"]);
        let border = Border::all("*").with_corners(Corners::uniform("+"));
        boxed.border(&border, SiblingIndex::root());
        assert_eq!(boxed.lines, vec!["+*+", "*a*", "+*+"]);
    }

    #[test]
    fn border_hooks_see_positions() {
        let mut boxed = boxed(&["a", "b", "c"]);
        let border = Border::new().with_left(BorderGlyph::hook(|ctx| {
            if ctx.edge_index + 1 == ctx.total_edges {
                "└".to_string()
            } else {
                "│".to_string()
            }
        }));
        boxed.border(&border, SiblingIndex::root());
        assert_eq!(boxed.lines, vec!["│a", "│b", "└c"]);
    }

    #[test]
    fn stylize_skips_empty_lines_and_restores() {
        let mut boxed = boxed(&["a", ""]);
        let own = Style::custom(|s| format!("[{s}]"));
        let inherited = Style::custom(|s| format!("<{s}>"));
        boxed.stylize(Some(&own), Some(&inherited));
        assert_eq!(boxed.lines, vec!["[a]<", ""]);
    }

    #[test]
    fn clamp_truncates_wide_lines() {
        let mut boxed = boxed(&["abcdef", "ab"]);
        boxed.clamp(3);
        assert_eq!(boxed.lines, vec!["abc", "ab"]);
        assert_eq!(boxed.width, 3);
    }
}
