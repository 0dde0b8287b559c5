//! Permission tree node entity
//!
//! Mirrors the shape served by the menu listing service:
//! `{ id, name, kind, permission?, children? }`.

use serde::{Deserialize, Serialize};

/// Identifier of a node in the permission tree.
pub type NodeId = u64;

/// Parent id recorded for roots; never a valid node id.
pub const ROOT_PARENT: NodeId = 0;

/// What a node represents in the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A menu or menu category
    #[default]
    Menu,
    /// An operation (button-level capability) inside a menu
    Operation,
}

impl NodeKind {
    pub fn is_menu(&self) -> bool {
        matches!(self, NodeKind::Menu)
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, NodeKind::Operation)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Menu => write!(f, "menu"),
            NodeKind::Operation => write!(f, "operation"),
        }
    }
}

/// A node in the permission tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    /// Permission string such as `system:role:edit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a menu node without children
    pub fn menu(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: NodeKind::Menu,
            permission: None,
            children: Vec::new(),
        }
    }

    /// Create an operation node carrying a permission string
    pub fn operation(id: NodeId, name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: NodeKind::Operation,
            permission: Some(permission.into()),
            children: Vec::new(),
        }
    }

    /// Attach a permission string
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
