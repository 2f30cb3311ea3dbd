//! Indexed binary min-heap keyed by node identifier
//!
//! Entries are `(NodeId, Distance)` pairs ordered by distance. A position
//! index maps every queued node to its slot, so membership is O(1) and
//! decrease-key is O(log n). Each node has at most one live entry.

use log::trace;

use crate::core::error::{Error, Result};
use crate::core::graph::{Distance, NodeId};

/// A queued node and the distance it was queued with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: Distance,
}

/// Min-heap over node distances with a per-node position index
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
/// The id range `[0, capacity)` is fixed at construction.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    positions: Vec<Option<usize>>,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

impl IndexedMinHeap {
    /// Create an empty heap for node ids in `[0, node_count)`
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(node_count),
            positions: vec![None; node_count],
        }
    }

    /// Number of node ids the heap accepts
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Is `node` currently queued?
    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    /// Queued distance of `node`, if it is in the heap
    pub fn distance_of(&self, node: NodeId) -> Option<Distance> {
        self.position(node).map(|pos| self.entries[pos].distance)
    }

    /// Smallest entry without removing it
    pub fn peek(&self) -> Option<HeapEntry> {
        self.entries.first().copied()
    }

    /// Insert `node`, or update its distance if it is already queued.
    ///
    /// An existing entry is overwritten unconditionally and sifted up. Callers
    /// only pass distances that are not larger than the queued one. Fails with
    /// `InvalidNodeId` when `node` is outside the heap's capacity.
    pub fn insert(&mut self, node: NodeId, distance: Distance) -> Result<()> {
        let slot = self
            .positions
            .get(node)
            .copied()
            .ok_or(Error::InvalidNodeId {
                id: node,
                node_count: self.positions.len(),
            })?;

        match slot {
            Some(pos) => self.update(pos, distance),
            None => {
                let pos = self.entries.len();
                self.entries.push(HeapEntry { node, distance });
                self.positions[node] = Some(pos);
                self.sift_up(pos);
            }
        }
        Ok(())
    }

    /// Lower the distance of a queued node. Returns false if it is not queued.
    pub fn decrease_key(&mut self, node: NodeId, distance: Distance) -> bool {
        match self.position(node) {
            Some(pos) => {
                self.update(pos, distance);
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry with the smallest distance
    pub fn extract_min(&mut self) -> Result<HeapEntry> {
        let last = match self.entries.len() {
            0 => return Err(Error::EmptyQueue),
            len => len - 1,
        };

        let hole = if last == 0 { 0 } else { self.sift_down_hole(0) };

        // Fill the hole with the last entry; the old root ends up at the tail
        self.swap(hole, last);
        let min = self.entries.pop().ok_or(Error::EmptyQueue)?;
        self.positions[min.node] = None;

        trace!("heap: extract {} at {}", min.node, min.distance);
        Ok(min)
    }

    fn update(&mut self, pos: usize, distance: Distance) {
        trace!(
            "heap: decrease {} {} -> {distance}",
            self.entries[pos].node,
            self.entries[pos].distance
        );
        self.entries[pos].distance = distance;
        self.sift_up(pos);
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions[self.entries[a].node] = Some(a);
        self.positions[self.entries[b].node] = Some(b);
    }

    /// Move the entry at `index` toward the root while it is strictly
    /// smaller than its parent. Returns its final position.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 && self.entries[parent(index)].distance > self.entries[index].distance {
            self.swap(index, parent(index));
            index = parent(index);
        }
        index
    }

    /// Walk the hole at `hole` down toward the leaves.
    ///
    /// At each level the smaller child (left on ties) moves up into the hole,
    /// but only while the last entry, which will fill the hole, is not smaller
    /// than that child. Returns the slot where the last entry belongs.
    fn sift_down_hole(&mut self, mut hole: usize) -> usize {
        let len = self.entries.len();
        let last_distance = self.entries[len - 1].distance;

        while left(hole) < len {
            let l = left(hole);
            let r = right(hole);
            let child = if r < len && self.entries[r].distance < self.entries[l].distance {
                r
            } else {
                l
            };

            if last_distance >= self.entries[child].distance {
                self.swap(hole, child);
                hole = child;
            } else {
                break;
            }
        }
        hole
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|i| self.entries[parent(i)].distance <= self.entries[i].distance);
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, e)| self.positions[e.node] == Some(i));
        let queued = self.positions.iter().filter(|p| p.is_some()).count();
        ordered && indexed && queued == self.entries.len()
    }
}
