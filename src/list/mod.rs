//! Bulleted and numbered lists.
//!
//! Every item becomes a horizontal row of a fixed-width bullet cell and the
//! item content, so wrapped content lines up under the first content column.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::error::Result;
use crate::layout::{AxisValues, Gap, Orientation, Separator, Span};
use crate::node::{Block, BlockParameters, Node};
use crate::render::{RenderContext, Rendered};
use crate::width::{display_width, pad_to};

pub type BulletFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// What is drawn in the bullet column for the item at a zero-based index.
#[derive(Clone, Default)]
pub enum BulletGraphic {
    /// `1.`, `2.`, ...
    #[default]
    Numbered,
    Symbol(String),
    Custom(BulletFn),
}

impl BulletGraphic {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn render(&self, index: usize) -> String {
        match self {
            Self::Numbered => format!("{}.", index + 1),
            Self::Symbol(symbol) => symbol.clone(),
            Self::Custom(graphic) => graphic(index),
        }
    }
}

impl fmt::Debug for BulletGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbered => f.write_str("Numbered"),
            Self::Symbol(symbol) => f.debug_tuple("Symbol").field(symbol).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for BulletGraphic {
    fn from(symbol: &str) -> Self {
        Self::Symbol(symbol.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BulletAlign {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub graphic: BulletGraphic,
    pub align: BulletAlign,
    /// Spaces between the bullet column and the content.
    pub gap: usize,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            graphic: BulletGraphic::Numbered,
            align: BulletAlign::Left,
            gap: 1,
        }
    }
}

impl Bullet {
    pub fn new(graphic: impl Into<BulletGraphic>) -> Self {
        Self {
            graphic: graphic.into(),
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: BulletAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    fn cell(&self, index: usize, width: usize) -> String {
        let graphic = self.graphic.render(index);
        match self.align {
            BulletAlign::Left => pad_to(&graphic, width),
            BulletAlign::Right => {
                let indent = width.saturating_sub(display_width(&graphic));
                format!("{}{graphic}", " ".repeat(indent))
            }
        }
    }
}

/// One list entry; `None` entries are dropped before numbering.
#[derive(Debug, Clone, Default)]
pub struct ListItem(pub Option<Node>);

impl From<Node> for ListItem {
    fn from(node: Node) -> Self {
        Self(Some(node))
    }
}

impl From<Option<Node>> for ListItem {
    fn from(node: Option<Node>) -> Self {
        Self(node)
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        Self(Some(Node::text(text)))
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        Self(Some(Node::text(text)))
    }
}

impl From<Option<&str>> for ListItem {
    fn from(text: Option<&str>) -> Self {
        Self(text.map(Node::text))
    }
}

impl From<Option<String>> for ListItem {
    fn from(text: Option<String>) -> Self {
        Self(text.map(Node::text))
    }
}

#[derive(Debug, Clone, Default)]
pub struct List {
    parameters: BlockParameters,
    bullet: Bullet,
    items: Vec<Node>,
}

impl List {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        Self {
            items: items.into_iter().filter_map(|item| item.into().0).collect(),
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, parameters: BlockParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = bullet;
        self
    }

    pub fn parameters(&self) -> &BlockParameters {
        &self.parameters
    }

    pub fn bullet(&self) -> &Bullet {
        &self.bullet
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// Widest bullet graphic over every item.
    pub fn bullet_width(&self) -> usize {
        (0..self.items.len())
            .map(|index| display_width(&self.bullet.graphic.render(index)))
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self, context: &RenderContext) -> Result<Rendered> {
        let width = self.bullet_width();
        let gap = NonZeroUsize::new(self.bullet.gap)
            .map(|gap| Gap::main_only(Separator::Blank(gap)))
            .unwrap_or_default();

        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let bullet = Block::new(
                    BlockParameters::new().with_span(AxisValues::cross(Span::Absolute(width))),
                    vec![Node::text(self.bullet.cell(index, width))],
                );
                let row = BlockParameters::new()
                    .with_orientation(Orientation::Horizontal)
                    .with_gap(gap.clone());
                Node::Block(Block::new(row, vec![bullet.into(), item.clone()]))
            })
            .collect();

        let parameters = BlockParameters {
            orientation: Orientation::Vertical,
            ..self.parameters.clone()
        };
        let mut rendered = Block::new(parameters, rows).render(context)?;
        rendered.metrics_mut().record_list();
        Ok(rendered)
    }
}
