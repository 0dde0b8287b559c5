//! Domain Value Objects
//!
//! Id sets handed between the engine and its host.

mod expansion;
mod selection;

pub use expansion::ExpansionSet;
pub use selection::{parse_selection, SelectionDiff, SelectionSet};
