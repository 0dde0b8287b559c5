//! JSON Event Sink
//!
//! Outputs editor events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            command,
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of a single event
pub fn event_to_json(command: &str, event: &SelectionEvent) -> serde_json::Value {
    match event {
        SelectionEvent::Changed { selected } => serde_json::json!({
            "event": "selection_changed",
            "command": command,
            "selected": selected,
            "count": selected.len(),
        }),

        SelectionEvent::LinkageChanged { enabled } => serde_json::json!({
            "event": "linkage_changed",
            "command": command,
            "enabled": enabled,
        }),

        SelectionEvent::ExpansionChanged { expanded } => serde_json::json!({
            "event": "expansion_changed",
            "command": command,
            "expanded": expanded,
        }),

        SelectionEvent::Rejected { action } => serde_json::json!({
            "event": "rejected",
            "command": command,
            "action": action,
            "reason": "disabled",
        }),
    }
}

impl SelectionEventSink for JsonEventSink {
    fn on_event(&self, event: SelectionEvent) {
        self.write_event(event_to_json(self.command, &event));
    }
}
