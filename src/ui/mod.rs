//! Terminal UI
//!
//! - `theme` - Icon and color tokens
//! - `terminal` - Capability detection
//! - `context` - Resolved rendering decisions for one invocation
//! - `widgets` - Tree menu

pub mod context;
pub mod terminal;
pub mod theme;
pub mod widgets;
