//! Editor Factory
//!
//! Wires a tree file, the config and an event sink into a
//! [`PermissionEditor`].

use std::path::Path;
use std::sync::Arc;

use crate::application::{EditorOptions, PermissionEditor};
use crate::config::Config;
use crate::domain::ports::SelectionEventSink;
use crate::domain::value_objects::SelectionSet;
use crate::error::PermTreeResult;
use crate::infrastructure::FsTreeRepository;

/// Load `tree` and open an editor over it.
///
/// `selection` overrides the `checkedKeys` stored in the file, if any.
pub fn open_editor(
    tree: &Path,
    selection: Option<SelectionSet>,
    options: EditorOptions,
    config: &Config,
    sink: Arc<dyn SelectionEventSink>,
) -> PermTreeResult<PermissionEditor> {
    let repository =
        FsTreeRepository::new().with_reject_duplicate_ids(config.selection.reject_duplicate_ids);
    let loaded = repository.load(tree)?;
    let selection = selection.unwrap_or(loaded.selection);

    Ok(PermissionEditor::from_index(loaded.index, selection, options, sink))
}
