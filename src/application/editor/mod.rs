//! Editor Module
//!
//! A permission editor session: the controlled-component wrapper around the
//! selection engine that a role editor screen drives.
//!
//! ## Structure
//!
//! - `options` - Session settings (`EditorOptions`)
//! - `session` - The session itself (`PermissionEditor`)
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use permtree::application::editor::{EditorOptions, PermissionEditor};
//! use permtree::domain::entities::Node;
//! use permtree::domain::ports::RecordingSink;
//! use permtree::domain::value_objects::SelectionSet;
//!
//! let tree = vec![Node::menu(1, "System").with_child(Node::menu(2, "Roles"))];
//! let sink = Arc::new(RecordingSink::new());
//! let mut editor = PermissionEditor::new(tree, SelectionSet::new(), EditorOptions::default(), sink.clone());
//!
//! if let Some(next) = editor.toggle_node(2, true) {
//!     editor.set_selection(next);
//! }
//! assert_eq!(editor.selection().to_vec(), vec![1, 2]);
//! ```

mod options;
mod session;

pub use options::EditorOptions;
pub use session::PermissionEditor;
