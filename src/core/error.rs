//! Error types for butterfly-path
//!
//! Provides error handling for graph construction, heap operations and
//! shortest-path queries.

use std::fmt;

use crate::core::graph::NodeId;

/// Main error type for butterfly-path operations
#[derive(Debug)]
pub enum Error {
    /// Node identifier outside `[0, node_count)`
    InvalidNodeId { id: NodeId, node_count: usize },

    /// Extraction attempted on an empty priority queue
    EmptyQueue,

    /// Edge weight below zero in a graph definition
    NegativeWeight { from: NodeId, to: NodeId, weight: i64 },

    /// Edge weight that does not fit the engine's weight type
    WeightOverflow { from: NodeId, to: NodeId, weight: i64 },

    /// Predecessor links did not lead back to the source
    BrokenPredecessorChain { src: NodeId, dest: NodeId },

    /// Graph definition could not be parsed
    ParseError(serde_json::Error),

    /// File I/O error
    IoError(std::io::Error),

    /// Invalid configuration or parameters
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNodeId { id, node_count } => {
                write!(f, "Node {id} is out of range (graph has {node_count} nodes)")
            }
            Error::EmptyQueue => {
                write!(f, "Cannot extract from an empty priority queue")
            }
            Error::NegativeWeight { from, to, weight } => {
                write!(f, "Edge {from} -> {to} has negative weight {weight}")
            }
            Error::WeightOverflow { from, to, weight } => {
                write!(f, "Edge {from} -> {to} has weight {weight}, which exceeds {}", u32::MAX)
            }
            Error::BrokenPredecessorChain { src, dest } => {
                write!(f, "Predecessor chain from {dest} does not reach source {src}")
            }
            Error::ParseError(err) => {
                write!(f, "Parse error: {err}")
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {err}")
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::ParseError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err)
    }
}

/// Convenience result type for butterfly-path operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_node_display() {
        let err = Error::InvalidNodeId { id: 9, node_count: 7 };
        assert_eq!(err.to_string(), "Node 9 is out of range (graph has 7 nodes)");
    }

    #[test]
    fn test_negative_weight_display() {
        let err = Error::NegativeWeight { from: 1, to: 2, weight: -4 };
        assert_eq!(err.to_string(), "Edge 1 -> 2 has negative weight -4");
    }

    #[test]
    fn test_io_error_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.source().is_some());
    }
}
