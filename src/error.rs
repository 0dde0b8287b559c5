//! Error types for permtree
//!
//! The selection engine itself never fails. Errors only surface at the edges:
//! loading trees and config files, and parsing user-supplied id lists.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::NodeId;

/// Result type alias for permtree operations
pub type PermTreeResult<T> = Result<T, PermTreeError>;

/// Main error type for permtree operations
#[derive(Error, Debug)]
pub enum PermTreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON tree or selection could not be decoded
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML tree could not be decoded
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The same node id appears more than once in a tree
    #[error("duplicate node id {id} in permission tree")]
    DuplicateNodeId { id: NodeId },

    /// Node id collides with the root sentinel
    #[error("node id {id} is reserved for the root sentinel")]
    InvalidNodeId { id: NodeId },

    /// Tree file extension is not one we know how to decode
    #[error("unsupported tree format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// Selection list could not be parsed into ids
    #[error("invalid selection '{input}': expected comma-separated node ids")]
    InvalidSelection { input: String },
}
