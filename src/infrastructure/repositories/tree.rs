//! Permission Tree Repository
//!
//! Reads permission trees from JSON or YAML files. Two document shapes are
//! accepted:
//!
//! - a bare forest: `[ { "id": 1, "name": "System", ... } ]`
//! - the role-menu response: `{ "menus": [...], "checkedKeys": [1, 2] }`,
//!   which also carries the role's saved selection

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Node, NodeId, TreeIndex};
use crate::domain::value_objects::SelectionSet;
use crate::error::{PermTreeError, PermTreeResult};

/// Supported tree file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
}

impl TreeFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> PermTreeResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(TreeFormat::Json),
            Some("yaml") | Some("yml") => Ok(TreeFormat::Yaml),
            _ => Err(PermTreeError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Forest(Vec<Node>),
    RoleMenus {
        menus: Vec<Node>,
        #[serde(default, rename = "checkedKeys", alias = "checked_keys")]
        checked_keys: Vec<NodeId>,
    },
}

/// A decoded tree with the selection stored next to it, if any
#[derive(Debug, Clone)]
pub struct LoadedTree {
    pub index: TreeIndex,
    pub selection: SelectionSet,
}

/// File-backed tree loader
#[derive(Debug, Clone, Copy)]
pub struct FsTreeRepository {
    reject_duplicate_ids: bool,
}

impl Default for FsTreeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FsTreeRepository {
    /// Loader that rejects duplicate and sentinel ids
    pub fn new() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }

    pub fn with_reject_duplicate_ids(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }

    /// Read and index the tree at `path`
    pub fn load(&self, path: &Path) -> PermTreeResult<LoadedTree> {
        let format = TreeFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let loaded = self.parse(&content, format)?;
        debug!(
            path = %path.display(),
            nodes = loaded.index.len(),
            saved = loaded.selection.len(),
            "loaded permission tree"
        );
        Ok(loaded)
    }

    /// Decode and index `content`
    pub fn parse(&self, content: &str, format: TreeFormat) -> PermTreeResult<LoadedTree> {
        let document: TreeDocument = match format {
            TreeFormat::Json => serde_json::from_str(content)?,
            TreeFormat::Yaml => serde_yaml_ng::from_str(content)?,
        };

        let (roots, checked) = match document {
            TreeDocument::Forest(roots) => (roots, Vec::new()),
            TreeDocument::RoleMenus {
                menus,
                checked_keys,
            } => (menus, checked_keys),
        };

        let index = if self.reject_duplicate_ids {
            TreeIndex::try_build(roots)?
        } else {
            TreeIndex::build(roots)
        };

        Ok(LoadedTree {
            index,
            selection: checked.into(),
        })
    }
}
