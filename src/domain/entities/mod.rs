//! Domain Entities
//!
//! - `Node` - An entry of the permission tree (menu or operation)
//! - `TreeIndex` - Parent/children/id indices derived from a tree

mod node;
mod tree_index;

pub use node::{Node, NodeId, NodeKind, ROOT_PARENT};
pub use tree_index::{flatten, FlatEntry, PreOrderIter, TreeIndex};
