//! permtree - hierarchical permission selection
//!
//! The engine behind a role editor's permission tree: a tree of menus and
//! operations, a set of checked ids, and the linkage rules that keep parents
//! and children consistent when one of them is toggled.
//!
//! ## Layers
//!
//! - `domain` - Tree index, selection/expansion sets, linkage and display walk
//! - `application` - [`PermissionEditor`] session driven by a host
//! - `infrastructure` - Tree file loading and NDJSON event output
//! - `presentation` - CLI definitions, editor factory, logging setup

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EditorOptions, PermissionEditor};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::{Node, NodeId, NodeKind, TreeIndex};
pub use domain::services::{apply_toggle, display_rows, expand_all, select_all, DisplayRow};
pub use domain::value_objects::{parse_selection, ExpansionSet, SelectionDiff, SelectionSet};
pub use error::{PermTreeError, PermTreeResult};
pub use infrastructure::{FsTreeRepository, JsonEventSink};
