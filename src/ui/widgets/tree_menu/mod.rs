//! Tree Menu Widget
//!
//! Interactive permission tree for the `edit` command, plus the row layout
//! shared with `show`.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::TreeMenu;
pub use render::{render_rows, render_status_bar, RenderStyle};
