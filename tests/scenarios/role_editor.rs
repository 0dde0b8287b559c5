//! Scenario: Editing a role's permissions
//!
//! Journey: An admin opens a role form, grants and revokes menus, and saves.
//!
//! Steps:
//! 1. The form loads the menu tree and the role's saved selection
//! 2. The admin checks and unchecks nodes; the form adopts every proposal
//! 3. The menu tree is reloaded while the form is open
//! 4. The form reads the permission strings to save
//!
//! Success Criteria:
//! - Cascades follow the linkage flag
//! - The editor never changes the selection on its own
//! - Reloads keep the expansion state sane

use std::sync::{Arc, Mutex};

use permtree::application::{EditorOptions, PermissionEditor};
use permtree::domain::entities::{Node, NodeId};
use permtree::domain::ports::{CallbackSink, RecordingSink, SelectionEvent};
use permtree::domain::value_objects::SelectionSet;
use permtree::infrastructure::{FsTreeRepository, TreeFormat};

use crate::common::*;

/// Host side of the form: adopts whatever the editor proposes
fn adopt(editor: &mut PermissionEditor, proposal: Option<SelectionSet>) {
    if let Some(next) = proposal {
        editor.set_selection(next);
    }
}

/// SCENARIO: Granting one operation pulls in its menus, revoking it prunes them
#[test]
fn scenario_grant_and_revoke_operation() {
    let mut editor = PermissionEditor::new(
        role_tree(),
        SelectionSet::new(),
        EditorOptions::default(),
        Arc::new(RecordingSink::new()),
    );

    let proposal = editor.toggle_node(5, true);
    adopt(&mut editor, proposal);
    assert_eq!(editor.selection().to_vec(), vec![1, 2, 5]);
    assert_eq!(editor.permissions(), vec!["system:role:edit"]);

    let proposal = editor.toggle_node(6, true);
    adopt(&mut editor, proposal);
    assert_eq!(editor.selection().to_vec(), vec![1, 2, 3, 5, 6]);

    // Revoking Edit drops Roles, but System keeps Menus
    let proposal = editor.toggle_node(5, false);
    adopt(&mut editor, proposal);
    assert_eq!(editor.selection().to_vec(), vec![1, 3, 6]);

    let proposal = editor.toggle_node(6, false);
    adopt(&mut editor, proposal);
    assert!(editor.selection().is_empty());
}

/// SCENARIO: A form that ignores proposals keeps its selection
#[test]
fn scenario_host_rejects_proposal() {
    let proposals: Arc<Mutex<Vec<Vec<NodeId>>>> = Arc::default();
    let seen = Arc::clone(&proposals);
    let editor = PermissionEditor::new(
        role_tree(),
        SelectionSet::from([7]),
        EditorOptions::default(),
        Arc::new(CallbackSink::new(move |ids| seen.lock().unwrap().push(ids))),
    );

    let _ = editor.toggle_node(4, true);
    let _ = editor.select_all(false);

    assert_eq!(editor.selection().to_vec(), vec![7]);
    assert_eq!(
        *proposals.lock().unwrap(),
        vec![vec![1, 2, 4, 7], Vec::<NodeId>::new()]
    );
}

/// SCENARIO: With linkage off the admin grants a menu without its children
#[test]
fn scenario_independent_selection() {
    let mut editor = PermissionEditor::new(
        role_tree(),
        SelectionSet::new(),
        EditorOptions::default().with_linkage(false),
        Arc::new(RecordingSink::new()),
    );

    for id in [1, 2] {
        let proposal = editor.toggle(id);
        adopt(&mut editor, proposal);
    }
    assert_eq!(editor.selection().to_vec(), vec![1, 2]);

    // Turning linkage back on does not rewrite the existing selection
    assert!(editor.set_linkage(true));
    assert_eq!(editor.selection().to_vec(), vec![1, 2]);

    let proposal = editor.toggle_node(2, false);
    adopt(&mut editor, proposal);
    assert!(editor.selection().is_empty());
}

/// SCENARIO: A disabled form rejects every toggle, expansion included
#[test]
fn scenario_read_only_form() {
    let sink = Arc::new(RecordingSink::new());
    let mut editor = PermissionEditor::new(
        role_tree(),
        SelectionSet::from([1, 2, 4]),
        EditorOptions::default().with_disabled(true),
        sink.clone(),
    );

    assert_eq!(editor.toggle_node(5, true), None);
    assert_eq!(editor.select_all(true), None);
    assert!(!editor.set_linkage(false));
    assert!(editor.linkage());

    assert!(!editor.expand_all(false));
    assert!(editor.all_expanded());

    let events = sink.events();
    assert!(events
        .iter()
        .any(|e| matches!(e, SelectionEvent::Rejected { action: "toggle_node" })));
    assert!(events
        .iter()
        .any(|e| matches!(e, SelectionEvent::Rejected { action: "expand_all" })));
    assert!(events
        .iter()
        .all(|e| !matches!(e, SelectionEvent::ExpansionChanged { .. })));
    assert!(events
        .iter()
        .all(|e| !matches!(e, SelectionEvent::Changed { .. })));
}

/// SCENARIO: The menu list is reloaded while the form is open
#[test]
fn scenario_tree_reload_expands_new_menus() {
    let mut editor = PermissionEditor::new(
        role_tree(),
        SelectionSet::new(),
        EditorOptions::default(),
        Arc::new(RecordingSink::new()),
    );
    editor.set_expanded(3, false);
    assert!(!editor.is_expanded(3));

    let mut tree = role_tree();
    tree[1] = Node::menu(7, "Monitor").with_child(Node::operation(8, "Online", "monitor:online"));
    editor.set_tree(tree);

    assert!(editor.is_expanded(7));
    assert!(editor.all_expanded());
    assert_eq!(editor.rows().last().map(|r| r.id()), Some(8));
}

/// SCENARIO: A saved role-menu document round-trips through the editor
#[test]
fn scenario_saved_role_is_edited() {
    let loaded = FsTreeRepository::new()
        .parse(ROLE_MENUS_YAML, TreeFormat::Yaml)
        .unwrap();
    let mut editor = PermissionEditor::from_index(
        loaded.index,
        loaded.selection,
        EditorOptions::default(),
        Arc::new(RecordingSink::new()),
    );
    assert_eq!(editor.permissions(), vec!["system:role:add"]);
    assert!(editor.rows()[0].indeterminate);

    let proposal = editor.select_all(true);
    adopt(&mut editor, proposal);
    assert!(editor.all_selected());
    assert_eq!(
        editor.permissions(),
        vec!["system:role:add", "system:role:edit", "system:menu:add"]
    );
    assert_eq!(editor.summary().selected, 7);
}
