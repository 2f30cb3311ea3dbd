//! Core library modules for butterfly-path
//!
//! The shortest-path engine and the pieces it is built from.

pub mod definition;
pub mod engine;
pub mod error;
pub mod graph;
pub mod heap;

// Re-export main types for internal use
pub use definition::{EdgeSpec, GraphDefinition};
pub use engine::{PathOutcome, QueryState, Route, ShortestPathEngine};
pub use graph::{Distance, Edge, Graph, Node, NodeId, Weight, INFINITY};
pub use heap::{HeapEntry, IndexedMinHeap};
