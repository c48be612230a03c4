use std::num::NonZeroU8;

use crate::error::{Result, TexError};
use crate::geometry::Size;
use crate::width;

/// Stacking direction of a block's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Orientation {
    /// Children stack top to bottom; the main axis is vertical.
    #[default]
    Vertical,
    /// Children sit side by side; the main axis is horizontal.
    Horizontal,
}

/// Logical axis relative to an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Main,
    Cross,
}

/// Physical screen dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

/// Edge expressed relative to the main/cross axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalEdge {
    MainStart,
    MainEnd,
    CrossStart,
    CrossEnd,
}

/// Edge of the screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orientation {
    /// Physical dimension an axis maps to.
    pub fn dimension(self, axis: Axis) -> Dimension {
        match (self, axis) {
            (Self::Vertical, Axis::Main) | (Self::Horizontal, Axis::Cross) => Dimension::Height,
            (Self::Vertical, Axis::Cross) | (Self::Horizontal, Axis::Main) => Dimension::Width,
        }
    }

    /// Logical axis that runs along a physical dimension.
    pub fn axis(self, dimension: Dimension) -> Axis {
        match (self, dimension) {
            (Self::Vertical, Dimension::Height) | (Self::Horizontal, Dimension::Width) => Axis::Main,
            _ => Axis::Cross,
        }
    }

    /// Physical edge a logical edge lands on.
    pub fn edge(self, edge: LogicalEdge) -> PhysicalEdge {
        match (self, edge) {
            (Self::Vertical, LogicalEdge::MainStart) => PhysicalEdge::Top,
            (Self::Vertical, LogicalEdge::MainEnd) => PhysicalEdge::Bottom,
            (Self::Vertical, LogicalEdge::CrossStart) => PhysicalEdge::Left,
            (Self::Vertical, LogicalEdge::CrossEnd) => PhysicalEdge::Right,
            (Self::Horizontal, LogicalEdge::MainStart) => PhysicalEdge::Left,
            (Self::Horizontal, LogicalEdge::MainEnd) => PhysicalEdge::Right,
            (Self::Horizontal, LogicalEdge::CrossStart) => PhysicalEdge::Top,
            (Self::Horizontal, LogicalEdge::CrossEnd) => PhysicalEdge::Bottom,
        }
    }

    /// Logical edge that lands on a physical edge.
    pub fn logical(self, edge: PhysicalEdge) -> LogicalEdge {
        match (self, edge) {
            (Self::Vertical, PhysicalEdge::Top) => LogicalEdge::MainStart,
            (Self::Vertical, PhysicalEdge::Bottom) => LogicalEdge::MainEnd,
            (Self::Vertical, PhysicalEdge::Left) => LogicalEdge::CrossStart,
            (Self::Vertical, PhysicalEdge::Right) => LogicalEdge::CrossEnd,
            (Self::Horizontal, PhysicalEdge::Left) => LogicalEdge::MainStart,
            (Self::Horizontal, PhysicalEdge::Right) => LogicalEdge::MainEnd,
            (Self::Horizontal, PhysicalEdge::Top) => LogicalEdge::CrossStart,
            (Self::Horizontal, PhysicalEdge::Bottom) => LogicalEdge::CrossEnd,
        }
    }

    /// Extent of `size` along a logical axis.
    pub fn extent(self, axis: Axis, size: Size) -> usize {
        match self.dimension(axis) {
            Dimension::Width => size.width,
            Dimension::Height => size.height,
        }
    }
}

/// Measure `text` along a logical axis of `orientation`.
pub fn axis_extent(text: &str, orientation: Orientation, axis: Axis) -> usize {
    orientation.extent(axis, width::size(text))
}

/// A pair of optional values keyed by logical axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisValues<T> {
    pub main: Option<T>,
    pub cross: Option<T>,
}

impl<T> Default for AxisValues<T> {
    fn default() -> Self {
        Self {
            main: None,
            cross: None,
        }
    }
}

impl<T> AxisValues<T> {
    pub fn new(main: Option<T>, cross: Option<T>) -> Self {
        Self { main, cross }
    }

    pub fn main(value: T) -> Self {
        Self::new(Some(value), None)
    }

    pub fn cross(value: T) -> Self {
        Self::new(None, Some(value))
    }

    pub fn with_main(mut self, value: T) -> Self {
        self.main = Some(value);
        self
    }

    pub fn with_cross(mut self, value: T) -> Self {
        self.cross = Some(value);
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&T> {
        match axis {
            Axis::Main => self.main.as_ref(),
            Axis::Cross => self.cross.as_ref(),
        }
    }

    /// Value on whichever axis runs along `dimension` for `orientation`.
    pub fn along(&self, orientation: Orientation, dimension: Dimension) -> Option<&T> {
        self.get(orientation.axis(dimension))
    }
}

/// Percentage of the parent's resolved size, `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Percent(NonZeroU8);

impl Percent {
    pub fn new(value: u16) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(TexError::InvalidPercent(value))
    }

    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Share of `total`, rounded down.
    pub fn of(self, total: usize) -> usize {
        total * self.get() as usize / 100
    }
}

/// A forced size on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    Absolute(usize),
    Percent(Percent),
}

impl Span {
    pub fn percent(value: u16) -> Result<Self> {
        Percent::new(value).map(Self::Percent)
    }

    /// Concrete cell count, when the parent size needed by a percentage is known.
    pub fn resolve(self, parent: Option<usize>) -> Option<usize> {
        match self {
            Self::Absolute(cells) => Some(cells),
            Self::Percent(percent) => parent.map(|total| percent.of(total)),
        }
    }
}

impl From<usize> for Span {
    fn from(cells: usize) -> Self {
        Self::Absolute(cells)
    }
}

impl From<Percent> for Span {
    fn from(percent: Percent) -> Self {
        Self::Percent(percent)
    }
}

/// Inclusive `{min, max}` size bounds on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Bounds {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(TexError::InvalidBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// The same bounds without the upper limit.
    pub fn without_max(self) -> Self {
        Self {
            min: self.min,
            max: None,
        }
    }
}

/// One side of a padding or margin: a cell count or a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Inset {
    Count(usize),
    Literal(String),
}

impl Inset {
    /// Literal inset drawn from `text`. Empty text is rejected.
    pub fn literal(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(TexError::EmptyInset);
        }
        Ok(Self::Literal(text))
    }

    /// Columns this inset adds when placed on a left or right edge.
    pub fn columns(&self) -> usize {
        match self {
            Self::Count(cells) => *cells,
            Self::Literal(text) => width::size(text).width,
        }
    }
}

impl From<usize> for Inset {
    fn from(cells: usize) -> Self {
        Self::Count(cells)
    }
}

/// Logical-edge insets used for padding and margin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Insets {
    pub main_start: Option<Inset>,
    pub main_end: Option<Inset>,
    pub cross_start: Option<Inset>,
    pub cross_end: Option<Inset>,
}

impl Insets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same count on every edge.
    pub fn all(cells: usize) -> Self {
        Self::axes(cells, cells)
    }

    /// `main` cells on both main edges, `cross` cells on both cross edges.
    pub fn axes(main: usize, cross: usize) -> Self {
        Self {
            main_start: Some(Inset::Count(main)),
            main_end: Some(Inset::Count(main)),
            cross_start: Some(Inset::Count(cross)),
            cross_end: Some(Inset::Count(cross)),
        }
    }

    pub fn with_main_start(mut self, inset: impl Into<Inset>) -> Self {
        self.main_start = Some(inset.into());
        self
    }

    pub fn with_main_end(mut self, inset: impl Into<Inset>) -> Self {
        self.main_end = Some(inset.into());
        self
    }

    pub fn with_cross_start(mut self, inset: impl Into<Inset>) -> Self {
        self.cross_start = Some(inset.into());
        self
    }

    pub fn with_cross_end(mut self, inset: impl Into<Inset>) -> Self {
        self.cross_end = Some(inset.into());
        self
    }

    pub fn get(&self, edge: LogicalEdge) -> Option<&Inset> {
        match edge {
            LogicalEdge::MainStart => self.main_start.as_ref(),
            LogicalEdge::MainEnd => self.main_end.as_ref(),
            LogicalEdge::CrossStart => self.cross_start.as_ref(),
            LogicalEdge::CrossEnd => self.cross_end.as_ref(),
        }
    }

    /// Inset that lands on a physical edge under `orientation`.
    pub fn physical(&self, orientation: Orientation, edge: PhysicalEdge) -> Option<&Inset> {
        self.get(orientation.logical(edge))
    }

    /// Columns consumed on the left and right edges.
    pub fn horizontal_columns(&self, orientation: Orientation) -> usize {
        [PhysicalEdge::Left, PhysicalEdge::Right]
            .into_iter()
            .filter_map(|edge| self.physical(orientation, edge))
            .map(Inset::columns)
            .sum()
    }

    /// Lines consumed on the top and bottom edges.
    pub fn vertical_lines(&self, orientation: Orientation) -> usize {
        [PhysicalEdge::Top, PhysicalEdge::Bottom]
            .into_iter()
            .filter_map(|edge| self.physical(orientation, edge))
            .map(|inset| match inset {
                Inset::Count(lines) => *lines,
                Inset::Literal(text) => width::size(text).height,
            })
            .sum()
    }
}
