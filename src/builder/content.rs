use super::core::BlockBuilder;
use crate::list::List;
use crate::node::{Block, BlockParameters, Leaf, Node};
use crate::table::Table;

type BuildFn<'a> = Box<dyn FnOnce(BlockBuilder) -> Option<BlockBuilder> + 'a>;

/// Every shape the content of a block can be given in.
pub enum ContentInput<'a> {
    Text(String),
    Node(Node),
    Nodes(Vec<Node>),
    /// Receives a builder already carrying the block's parameters. Returning
    /// `None` omits the block entirely.
    Build(BuildFn<'a>),
}

impl<'a> ContentInput<'a> {
    pub fn build<F>(f: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> Option<BlockBuilder> + 'a,
    {
        Self::Build(Box::new(f))
    }

    /// Resolve into the block node it describes, if any.
    pub(crate) fn into_block(self, parameters: BlockParameters) -> Option<Node> {
        let children = match self {
            Self::Text(text) => vec![Node::text(text)],
            Self::Node(node) => vec![node],
            Self::Nodes(nodes) => nodes,
            Self::Build(build) => {
                return build(BlockBuilder::with_parameters(parameters)).map(BlockBuilder::into_node);
            }
        };
        Some(Node::Block(Block::new(parameters, children)))
    }
}

impl std::fmt::Debug for ContentInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Nodes(nodes) => f.debug_tuple("Nodes").field(nodes).finish(),
            Self::Build(_) => f.write_str("Build(..)"),
        }
    }
}

impl From<&str> for ContentInput<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for ContentInput<'_> {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<Node>> for ContentInput<'_> {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Nodes(nodes)
    }
}

impl From<Leaf> for ContentInput<'_> {
    fn from(leaf: Leaf) -> Self {
        Self::Node(leaf.into())
    }
}

impl From<Block> for ContentInput<'_> {
    fn from(block: Block) -> Self {
        Self::Node(block.into())
    }
}

impl From<Table> for ContentInput<'_> {
    fn from(table: Table) -> Self {
        Self::Node(table.into())
    }
}

impl From<List> for ContentInput<'_> {
    fn from(list: List) -> Self {
        Self::Node(list.into())
    }
}
