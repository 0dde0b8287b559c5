//! Common test utilities for permtree CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory and HOME, plus a CLI runner
//! - Fixtures: Reusable permission trees

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
