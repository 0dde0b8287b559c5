//! Repository Implementations
//!
//! File-backed loaders for permission trees.

mod tree;

pub use tree::{FsTreeRepository, LoadedTree, TreeFormat};
