//! Domain Ports (Interfaces)

pub mod selection_events;

pub use selection_events::{
    CallbackSink, NoopEventSink, RecordingSink, SelectionEvent, SelectionEventSink,
};
