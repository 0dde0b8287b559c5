//! Selection Event Port
//!
//! The editor never writes the selection back itself. Every proposed change is
//! published as a [`SelectionEvent`] carrying the complete next selection,
//! and the host decides whether to adopt it.

use std::sync::Mutex;

use crate::domain::entities::NodeId;
use crate::domain::value_objects::SelectionSet;

/// Event emitted by a permission editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A new selection is proposed (full set, never a delta)
    Changed { selected: SelectionSet },

    /// Linkage flag flipped
    LinkageChanged { enabled: bool },

    /// Expansion state changed
    ExpansionChanged { expanded: Vec<NodeId> },

    /// A toggle arrived while the editor is disabled
    Rejected { action: &'static str },
}

/// Trait for receiving selection events
///
/// Implementations can be:
/// - CallbackSink: adapts a plain `onSelectionChange` closure
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait SelectionEventSink: Send + Sync {
    /// Handle a selection event
    fn on_event(&self, event: SelectionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SelectionEventSink for NoopEventSink {
    fn on_event(&self, _event: SelectionEvent) {}
}

/// Forwards `Changed` events to a closure receiving the ascending id list
pub struct CallbackSink<F>
where
    F: Fn(Vec<NodeId>) + Send + Sync,
{
    on_change: F,
}

impl<F> CallbackSink<F>
where
    F: Fn(Vec<NodeId>) + Send + Sync,
{
    pub fn new(on_change: F) -> Self {
        Self { on_change }
    }
}

impl<F> SelectionEventSink for CallbackSink<F>
where
    F: Fn(Vec<NodeId>) + Send + Sync,
{
    fn on_event(&self, event: SelectionEvent) {
        if let SelectionEvent::Changed { selected } = event {
            (self.on_change)(selected.to_vec());
        }
    }
}

/// Keeps every event in memory; handy for hosts that batch and for tests
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SelectionEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SelectionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// The most recent proposed selection
    pub fn last_selection(&self) -> Option<SelectionSet> {
        self.events().into_iter().rev().find_map(|event| match event {
            SelectionEvent::Changed { selected } => Some(selected),
            _ => None,
        })
    }
}

impl SelectionEventSink for RecordingSink {
    fn on_event(&self, event: SelectionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
