//! Event sinks for editor events

mod json;

pub use json::{event_to_json, JsonEventSink};
