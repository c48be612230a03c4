//! Node tree: leaves, blocks, tables and lists.

mod block;
mod core;
mod leaf;
mod params;

pub use block::Block;
pub use core::Node;
pub use leaf::Leaf;
pub use params::BlockParameters;
