//! Graph definitions supplied by the caller
//!
//! A [`GraphDefinition`] is the configuration payload a graph is built from:
//! location names plus directed weighted edges. It can be loaded from JSON or
//! taken from the compiled-in reference dataset.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::graph::{Graph, NodeId, Weight};

/// One directed edge in a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub weight: i64,
    pub to: NodeId,
}

/// Location names and edges a graph is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub locations: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Manhattan-to-Brooklyn locations of the reference deployment
const REFERENCE_LOCATIONS: [&str; 7] = [
    "Empire State Building",
    "Penn Station",
    "Rector Street Station",
    "9/11 Memorial",
    "Wall Street Station",
    "Grand Army Plaza Station",
    "Grand Army Plaza",
];

/// (from, minutes, to)
const REFERENCE_EDGES: [(NodeId, i64, NodeId); 13] = [
    (0, 7, 1),
    (0, 20, 3),
    (0, 39, 6),
    (1, 22, 4),
    (1, 36, 5),
    (1, 27, 2),
    (2, 6, 3),
    (3, 10, 4),
    (3, 23, 6),
    (3, 20, 0),
    (4, 26, 5),
    (5, 1, 6),
    (6, 40, 0),
];

impl GraphDefinition {
    /// The seven-location reference dataset
    pub fn reference() -> Self {
        Self {
            locations: REFERENCE_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|&(from, weight, to)| EdgeSpec { from, weight, to })
                .collect(),
        }
    }

    /// Parse a definition from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a definition from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let definition: Self = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded graph definition from {}: {} locations, {} edges",
            path.as_ref().display(),
            definition.locations.len(),
            definition.edges.len()
        );
        Ok(definition)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every edge and build the graph.
    ///
    /// Fails on the first out-of-range id, negative weight or weight that
    /// does not fit the engine's weight type.
    pub fn build(&self) -> Result<Graph> {
        if self.locations.is_empty() {
            return Err(Error::InvalidInput(
                "graph definition has no locations".to_string(),
            ));
        }

        let mut graph = Graph::with_names(self.locations.iter().cloned());
        for edge in &self.edges {
            let EdgeSpec { from, weight, to } = *edge;
            if weight < 0 {
                return Err(Error::NegativeWeight { from, to, weight });
            }
            let weight = Weight::try_from(weight)
                .map_err(|_| Error::WeightOverflow { from, to, weight })?;
            graph.add_edge(from, weight, to)?;
        }

        debug!(
            "Built graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
