use super::block::Block;
use super::leaf::Leaf;
use crate::error::Result;
use crate::list::List;
use crate::render::{RenderContext, Rendered};
use crate::table::Table;

/// Any node of a layout tree.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(Leaf),
    Block(Block),
    Table(Table),
    List(List),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Leaf(Leaf::new(text))
    }

    pub fn render(&self, context: &RenderContext) -> Result<Rendered> {
        match self {
            Self::Leaf(leaf) => leaf.render(context),
            Self::Block(block) => block.render(context),
            Self::Table(table) => table.render(context),
            Self::List(list) => list.render(context),
        }
    }

    /// Width this node insists on when placed in a `parent_width` budget.
    pub(crate) fn fixed_width(&self, parent_width: Option<usize>) -> Option<usize> {
        match self {
            Self::Leaf(_) => None,
            Self::Block(block) => block.parameters().fixed_width(parent_width),
            Self::Table(table) => table.parameters().fixed_width(parent_width),
            Self::List(list) => list.parameters().fixed_width(parent_width),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
