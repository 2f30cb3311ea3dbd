//! # Butterfly-path Library
//!
//! Single-source, single-destination shortest paths over small weighted
//! directed graphs.
//!
//! ## Features
//!
//! - **Indexed min-heap**: O(1) membership and O(log n) decrease-key by node id
//! - **Dijkstra engine**: path reconstruction and total cost for each query
//! - **Reusable engine**: scratch state is reset around every query
//! - **Graph definitions**: build graphs from JSON or the compiled-in dataset
//!
//! ## Basic Usage
//!
//! ```rust
//! use butterfly_path::{GraphDefinition, PathOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = butterfly_path::engine(&GraphDefinition::reference())?;
//!
//! match engine.shortest_path(2, 0)? {
//!     PathOutcome::Found(route) => {
//!         assert_eq!(route.nodes, vec![2, 3, 0]);
//!         assert_eq!(route.cost, 26);
//!     }
//!     PathOutcome::Unreachable => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a Graph by Hand
//!
//! ```rust
//! use butterfly_path::{Graph, ShortestPathEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = ShortestPathEngine::new(Graph::with_names(["home", "park", "work"]));
//! engine.add_edge(0, 5, 1)?;
//! engine.add_edge(1, 5, 2)?;
//! engine.add_edge(0, 12, 2)?;
//!
//! let route = engine.shortest_path(0, 2)?.into_route().unwrap();
//! assert_eq!(route.cost, 10);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

// Re-export core types that users might need
pub use crate::core::error::{Error, Result};
pub use crate::core::{
    Distance, Edge, EdgeSpec, Graph, GraphDefinition, HeapEntry, IndexedMinHeap, Node, NodeId,
    PathOutcome, QueryState, Route, ShortestPathEngine, Weight, INFINITY,
};

// Internal modules
mod core;

/// Build an engine from a graph definition
pub fn engine(definition: &GraphDefinition) -> Result<ShortestPathEngine> {
    definition.build().map(ShortestPathEngine::new)
}

/// Build an engine from a JSON graph definition file
///
/// # Examples
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = butterfly_path::load_engine("graphs/subway.json")?;
/// println!("{} locations", engine.node_count());
/// # Ok(())
/// # }
/// ```
pub fn load_engine<P: AsRef<Path>>(path: P) -> Result<ShortestPathEngine> {
    engine(&GraphDefinition::from_json_file(path)?)
}

/// One-shot query against a graph definition
pub fn shortest_path(
    definition: &GraphDefinition,
    src: NodeId,
    dest: NodeId,
) -> Result<PathOutcome> {
    engine(definition)?.shortest_path(src, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_query() {
        let outcome = shortest_path(&GraphDefinition::reference(), 0, 4).unwrap();
        let route = outcome.into_route().unwrap();
        // 0 -> 1 -> 4 = 7 + 22 beats 0 -> 3 -> 4 = 20 + 10
        assert_eq!(route.nodes, vec![0, 1, 4]);
        assert_eq!(route.cost, 29);
    }

    #[test]
    fn test_one_shot_rejects_bad_id() {
        assert!(shortest_path(&GraphDefinition::reference(), 0, 7).is_err());
    }

    #[test]
    fn test_load_engine_missing_file() {
        let err = load_engine("/nonexistent/graph.json").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
