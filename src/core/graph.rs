//! Graph topology for butterfly-path
//!
//! A graph is a dense vector of [`Node`] records. Each node owns its display
//! name and its outgoing edges in insertion order. Per-query state lives
//! elsewhere (see [`crate::core::engine::QueryState`]).

use crate::core::error::{Error, Result};

/// Dense node identifier, also used as an index
pub type NodeId = usize;

/// Edge weight
pub type Weight = u32;

/// Accumulated path cost
pub type Distance = u64;

/// Distance of a node that has not been reached
pub const INFINITY: Distance = Distance::MAX;

/// Directed edge stored on its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub weight: Weight,
    pub target: NodeId,
}

/// A named location and its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub edges: Vec<Edge>,
}

/// Weighted directed graph with named nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with one node per name and no edges
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes = names
            .into_iter()
            .map(|name| Node {
                name: name.into(),
                edges: Vec::new(),
            })
            .collect();
        Self { nodes }
    }

    /// Append a node and return its id
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.push(Node {
            name: name.into(),
            edges: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Append the edge `from -> to` to `from`'s adjacency sequence.
    ///
    /// Parallel edges are kept as-is.
    pub fn add_edge(&mut self, from: NodeId, weight: Weight, to: NodeId) -> Result<()> {
        self.check(to)?;
        self.check(from)?;
        self.nodes[from].edges.push(Edge { weight, target: to });
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display name of `id`
    pub fn name(&self, id: NodeId) -> Result<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// Outgoing edges of `id` in insertion order
    pub fn neighbors(&self, id: NodeId) -> Result<&[Edge]> {
        self.node(id).map(|n| n.edges.as_slice())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        let node_count = self.nodes.len();
        self.nodes
            .get(id)
            .ok_or(Error::InvalidNodeId { id, node_count })
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Find a node by name, ignoring ASCII case
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let name = name.trim();
        self.nodes
            .iter()
            .position(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// Fail with `InvalidNodeId` unless `id` is in range
    pub fn check(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ())
    }
}
