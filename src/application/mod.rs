//! Application Layer
//!
//! Sessions that wire the domain engine to a host.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain selection rules (those are in Domain)
//!
//! ## Sessions
//!
//! - `PermissionEditor` - Controlled permission-tree editor for a role form

pub mod editor;

pub use editor::{EditorOptions, PermissionEditor};
