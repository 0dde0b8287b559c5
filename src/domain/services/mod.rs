//! Domain Services
//!
//! Stateless operations over a [`TreeIndex`](crate::domain::entities::TreeIndex).

pub mod bulk;
pub mod display;
pub mod linkage;
pub mod permissions;

pub use bulk::{all_expanded, all_selected, expand_all, select_all};
pub use display::{display_rows, DisplayRow};
pub use linkage::{apply_toggle, collect_ancestors, collect_descendants};
pub use permissions::{selected_permissions, summarize, SelectionSummary};
