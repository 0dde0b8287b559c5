//! Domain Layer
//!
//! The permission-selection engine: pure logic, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Permission tree nodes and the derived [`TreeIndex`]
//! - `value_objects/` - Selection and expansion sets
//! - `services/` - Linkage algorithm, bulk operations, display walk
//! - `ports/` - Event sink the editor publishes proposals through
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Trees arrive already decoded; nothing here reads files
//! 2. **Pure Functions** - Every service returns a new set and leaves its
//!    inputs untouched
//! 3. **Ports & Adapters** - Hosts observe changes through [`ports::SelectionEventSink`]
//!
//! [`TreeIndex`]: entities::TreeIndex

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
