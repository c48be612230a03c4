use std::num::NonZeroUsize;

use crate::error::Result;
use crate::layout::{AxisValues, Bounds, Gap, Orientation, Separator, Span, shrink_to_fit};
use crate::logging::{LogLevel, json_kv};
use crate::node::{Block, BlockParameters, Node};
use crate::render::{RenderContext, Rendered, SiblingIndex};

/// Separator between columns when the table's gap has no cross value.
const DEFAULT_COLUMN_GAP: Separator = Separator::Blank(NonZeroUsize::MIN);

/// One table cell; `None` renders as an empty cell.
#[derive(Debug, Clone, Default)]
pub struct TableCell(pub Option<Node>);

impl From<Node> for TableCell {
    fn from(node: Node) -> Self {
        Self(Some(node))
    }
}

impl From<Option<Node>> for TableCell {
    fn from(node: Option<Node>) -> Self {
        Self(node)
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        Self(Some(Node::text(text)))
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        Self(Some(Node::text(text)))
    }
}

impl From<Option<&str>> for TableCell {
    fn from(text: Option<&str>) -> Self {
        Self(text.map(Node::text))
    }
}

impl From<Option<String>> for TableCell {
    fn from(text: Option<String>) -> Self {
        Self(text.map(Node::text))
    }
}

/// Grid of cells rendered as a vertical block of horizontal rows.
///
/// `gap.main` separates rows, `gap.cross` separates columns and
/// `gap.intersection` marks where they cross.
#[derive(Debug, Clone, Default)]
pub struct Table {
    parameters: BlockParameters,
    headers: Vec<Node>,
    rows: Vec<Vec<Option<Node>>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(mut self, parameters: BlockParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_headers<I, T>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header(mut self, header: impl Into<Node>) -> Self {
        self.headers.push(header.into());
        self
    }

    pub fn with_row<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TableCell>,
    {
        self.rows
            .push(row.into_iter().map(|cell| cell.into().0).collect());
        self
    }

    pub fn parameters(&self) -> &BlockParameters {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut BlockParameters {
        &mut self.parameters
    }

    pub fn headers(&self) -> &[Node] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<Node>>] {
        &self.rows
    }

    /// Columns fixed by the headers, or by the longest row without headers.
    pub fn column_count(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            self.headers.len()
        }
    }

    /// Header row and data rows, each exactly `columns` cells wide.
    fn grid(&self, columns: usize) -> Vec<Vec<Option<&Node>>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        if !self.headers.is_empty() {
            grid.push(self.headers.iter().take(columns).map(Some).collect());
        }
        for row in &self.rows {
            let mut cells: Vec<Option<&Node>> =
                row.iter().take(columns).map(Option::as_ref).collect();
            cells.resize(columns, None);
            grid.push(cells);
        }
        grid
    }

    pub fn render(&self, context: &RenderContext) -> Result<Rendered> {
        let columns = self.column_count();
        let column_gap = self
            .parameters
            .gap
            .cross
            .clone()
            .unwrap_or(DEFAULT_COLUMN_GAP);
        let parameters = BlockParameters {
            orientation: Orientation::Vertical,
            gap: Gap {
                cross: Some(column_gap.clone()),
                ..self.parameters.gap.clone()
            },
            ..self.parameters.clone()
        };

        let grid = self.grid(columns);
        let budget = parameters.inner_width(context);
        let measuring = context.child(
            budget,
            None,
            parameters.style.clone().or_else(|| context.style.clone()),
            SiblingIndex::root(),
        )?;

        let mut cell_widths = Vec::with_capacity(grid.len());
        let mut natural = vec![0; columns];
        for row in &grid {
            let mut widths = Vec::with_capacity(columns);
            for (column, cell) in row.iter().enumerate() {
                let width = match cell {
                    Some(cell) => cell.render(&measuring)?.width(),
                    None => 0,
                };
                natural[column] = natural[column].max(width);
                widths.push(width);
            }
            cell_widths.push(widths);
        }

        let separators = column_gap.columns() * columns.saturating_sub(1);
        let widths = match budget {
            Some(available) if natural.iter().sum::<usize>() + separators > available => {
                let fitted = shrink_to_fit(&natural, &[], available.saturating_sub(separators));
                context.log(
                    LogLevel::Debug,
                    "tex::table",
                    "table.columns_shrunk",
                    [
                        json_kv("natural", natural.clone()),
                        json_kv("fitted", fitted.clone()),
                        json_kv("available", available),
                    ],
                );
                fitted
            }
            _ => natural,
        };

        let rewraps = cell_widths
            .iter()
            .flat_map(|row| row.iter().zip(&widths))
            .filter(|(natural, fitted)| natural > fitted)
            .count();

        let rows = grid
            .into_iter()
            .map(|row| row_node(row, &widths, &column_gap))
            .collect();
        let mut rendered = Block::new(parameters, rows).render(context)?;
        rendered.metrics_mut().record_table();
        rendered.metrics_mut().record_rewraps(rewraps);
        Ok(rendered)
    }
}

fn row_node(cells: Vec<Option<&Node>>, widths: &[usize], column_gap: &Separator) -> Node {
    let parameters = BlockParameters::new()
        .with_orientation(Orientation::Horizontal)
        .with_gap(Gap::main_only(column_gap.clone()))
        .with_span_range(AxisValues::cross(Bounds::at_least(1)));
    let cells = cells
        .into_iter()
        .zip(widths)
        .map(|(cell, &width)| cell_node(cell, width))
        .collect();
    Node::Block(Block::new(parameters, cells))
}

fn cell_node(cell: Option<&Node>, width: usize) -> Node {
    let parameters = BlockParameters::new()
        .with_span(AxisValues::cross(Span::Absolute(width)))
        .with_span_range(AxisValues::main(Bounds::at_least(1)));
    Node::Block(Block::new(parameters, cell.cloned().into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GapInput;
    use crate::logging::{Logger, MemorySink};
    use crate::width::display_width;

    fn render(table: &Table, width: usize) -> Rendered {
        table
            .render(&RenderContext::new().with_max_width(width))
            .unwrap()
    }

    #[test]
    fn empty_cells_keep_their_column() {
        let table = Table::new()
            .with_row(["a", "b", "c"])
            .with_row(["x", "", "z"])
            .with_row(["1", "2", "3"]);
        assert_eq!(render(&table, 80).lines(), ["a b c", "x   z", "1 2 3"]);
    }

    #[test]
    fn short_rows_are_padded_to_header_count() {
        let table = Table::new()
            .with_headers(["name", "type"])
            .with_row(["id"])
            .with_row(["flag", "bool", "extra"]);
        assert_eq!(
            render(&table, 80).lines(),
            ["name type", "id   ", "flag bool"]
        );
    }

    #[test]
    fn null_row_renders_blank_line() {
        let table = Table::new()
            .with_row(["a"])
            .with_row([None::<&str>])
            .with_row(["b"]);
        assert_eq!(render(&table, 80).lines(), ["a", "", "b"]);
    }

    #[test]
    fn intersections_mark_column_boundaries() {
        let gap = Gap::resolve(
            GapInput::axes()
                .with_main("-")
                .with_cross(" | ")
                .with_intersection("+"),
        )
        .unwrap();
        let table = Table::new()
            .with_parameters(BlockParameters::new().with_gap(gap))
            .with_row(["a", "b"])
            .with_row(["c", "d"]);
        assert_eq!(render(&table, 80).lines(), ["a | b", "--+--", "c | d"]);
    }

    #[test]
    fn overflowing_columns_are_shrunk_and_logged() {
        let sink = MemorySink::new();
        let ctx = RenderContext::new()
            .with_max_width(10)
            .with_logger(Logger::new(sink.clone()));
        let table = Table::new().with_row(["aaaa bbbb", "cc"]);
        let rendered = table.render(&ctx).unwrap();
        assert_eq!(rendered.lines(), ["aaaa    cc", "bbbb    "]);
        assert_eq!(rendered.metrics().rewraps, 1);
        assert_eq!(rendered.metrics().tables, 1);
        assert!(
            sink.messages()
                .contains(&"table.columns_shrunk".to_string())
        );
    }

    #[test]
    fn narrow_tables_never_exceed_width() {
        let table = Table::new()
            .with_headers(["parameter", "description"])
            .with_row(["--verbose", "print every step of the build as it runs"])
            .with_row(["--jobs", "number of parallel workers"]);
        for width in [6, 12, 20, 31] {
            for line in render(&table, width).lines() {
                assert!(display_width(line) <= width, "{width}: {line:?}");
            }
        }
    }

    #[test]
    fn column_count_without_headers_uses_longest_row() {
        let table = Table::new().with_row(["a"]).with_row(["b", "c", "d"]);
        assert_eq!(table.column_count(), 3);
    }
}
