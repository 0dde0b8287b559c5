//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (NDJSON)
//! - `repositories/` - Tree file loaders (JSON, YAML)

pub mod events;
pub mod repositories;

// Re-export for convenience
pub use events::JsonEventSink;
pub use repositories::{FsTreeRepository, LoadedTree, TreeFormat};
