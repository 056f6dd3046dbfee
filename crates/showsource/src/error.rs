//! Ошибки сериализации и монтирования.

use ego_tree::NodeId;
use thiserror::Error;

/// Ошибки, которые возвращают публичные точки входа.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowSourceError {
    #[error("selector parse error in `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("invalid attribute pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("node {0:?} not found")]
    NodeNotFound(NodeId),
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}
