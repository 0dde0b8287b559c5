//! Terminal widgets

pub mod tree_menu;
