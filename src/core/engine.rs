//! Dijkstra shortest-path engine
//!
//! The engine owns the graph topology. Every query runs against a
//! [`QueryState`] holding tentative distances and predecessor links, and a
//! private [`IndexedMinHeap`] that is dropped when the query returns.

use log::{debug, trace};

use crate::core::error::{Error, Result};
use crate::core::graph::{Distance, Graph, NodeId, Weight, INFINITY};
use crate::core::heap::IndexedMinHeap;

/// A shortest path, source first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Node ids from source to destination, both included
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along `nodes`
    pub cost: Distance,
    /// Number of nodes whose distance was finalized during the search
    pub settled: usize,
}

impl Route {
    /// First node, `None` for an empty route
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node, `None` for an empty route
    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(Route),
    /// The heap ran dry before the destination was reached
    Unreachable,
}

impl PathOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            PathOutcome::Found(route) => Some(route),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            PathOutcome::Found(route) => Some(route),
            PathOutcome::Unreachable => None,
        }
    }
}

/// Per-query scratch state
///
/// Distances start at [`INFINITY`], predecessors at `None`. The engine
/// resets the state before and after each query so nothing leaks between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
    settled: Vec<bool>,
}

impl QueryState {
    pub fn new(node_count: usize) -> Self {
        let mut state = Self::default();
        state.reset(node_count);
        state
    }

    /// Restore initial values for `node_count` nodes
    pub fn reset(&mut self, node_count: usize) {
        self.distances.clear();
        self.distances.resize(node_count, INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(node_count, None);
        self.settled.clear();
        self.settled.resize(node_count, false);
    }

    pub fn distance(&self, id: NodeId) -> Option<Distance> {
        self.distances.get(id).copied()
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id).copied().flatten()
    }

    /// True when every node is at its initial value
    pub fn is_clear(&self) -> bool {
        self.distances.iter().all(|&d| d == INFINITY)
            && self.predecessors.iter().all(Option::is_none)
            && self.settled.iter().all(|&s| !s)
    }
}

/// Shortest-path engine over an owned graph
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    graph: Graph,
}

impl ShortestPathEngine {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Append a directed edge during setup
    pub fn add_edge(&mut self, from: NodeId, weight: Weight, to: NodeId) -> Result<()> {
        self.graph.add_edge(from, weight, to)
    }

    /// Display name of `id`
    pub fn name(&self, id: NodeId) -> Result<&str> {
        self.graph.name(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Find a shortest path from `src` to `dest`
    pub fn shortest_path(&self, src: NodeId, dest: NodeId) -> Result<PathOutcome> {
        let mut state = QueryState::default();
        self.shortest_path_with(&mut state, src, dest)
    }

    /// Find a shortest path reusing the caller's scratch buffers.
    ///
    /// `state` is reset on entry and again before returning.
    pub fn shortest_path_with(
        &self,
        state: &mut QueryState,
        src: NodeId,
        dest: NodeId,
    ) -> Result<PathOutcome> {
        self.graph.check(src)?;
        self.graph.check(dest)?;

        let node_count = self.graph.node_count();
        state.reset(node_count);
        debug!("Query {src} -> {dest} over {node_count} nodes");

        let outcome = self.search(state, src, dest);
        state.reset(node_count);

        match &outcome {
            Ok(PathOutcome::Found(route)) => debug!(
                "Query {src} -> {dest}: cost {} via {} hops, {} settled",
                route.cost,
                route.hops(),
                route.settled
            ),
            Ok(PathOutcome::Unreachable) => debug!("Query {src} -> {dest}: unreachable"),
            Err(e) => debug!("Query {src} -> {dest} failed: {e}"),
        }
        outcome
    }

    fn search(&self, state: &mut QueryState, src: NodeId, dest: NodeId) -> Result<PathOutcome> {
        let mut heap = IndexedMinHeap::with_capacity(self.graph.node_count());

        state.distances[src] = 0;
        state.settled[src] = true;
        let mut current = src;
        let mut cost: Distance = 0;
        let mut settled = 1;

        while current != dest {
            let base = state.distances[current];
            for edge in self.graph.neighbors(current)? {
                let target = edge.target;
                if state.settled[target] {
                    continue;
                }
                let candidate = match base.checked_add(Distance::from(edge.weight)) {
                    Some(d) if d < INFINITY => d,
                    _ => continue,
                };
                if candidate <= state.distances[target] {
                    trace!("relax {current} -> {target}: {candidate}");
                    state.distances[target] = candidate;
                    state.predecessors[target] = Some(current);
                    heap.insert(target, candidate)?;
                }
            }

            if heap.is_empty() {
                return Ok(PathOutcome::Unreachable);
            }
            let next = heap.extract_min()?;
            current = next.node;
            cost = next.distance;
            state.settled[current] = true;
            settled += 1;
        }

        let nodes = reconstruct(state, src, dest)?;
        Ok(PathOutcome::Found(Route {
            nodes,
            cost,
            settled,
        }))
    }
}

/// Walk predecessor links back from `dest`, at most one step per node
fn reconstruct(state: &QueryState, src: NodeId, dest: NodeId) -> Result<Vec<NodeId>> {
    let limit = state.predecessors.len();
    let broken = || Error::BrokenPredecessorChain { src, dest };

    let mut nodes = vec![dest];
    let mut at = dest;
    while at != src {
        let prev = state.predecessor(at).ok_or_else(broken)?;
        if nodes.len() >= limit {
            return Err(broken());
        }
        nodes.push(prev);
        at = prev;
    }
    nodes.reverse();
    Ok(nodes)
}
