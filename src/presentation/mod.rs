//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating editor sessions with infrastructure dependencies
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Opens editors over tree files (dependency injection)
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::{Cli, Commands, TreeArgs};
pub use factory::open_editor;
pub use logging::setup_logging;
