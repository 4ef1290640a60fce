//! GraphIndex: the typed adjacency store

use super::relation::RelMask;
use indexmap::IndexMap;

/// Integer node identifier.
///
/// Nodes exist implicitly: an id is a node once it appears as a key in the
/// store, whether added explicitly or as the endpoint of an edge.
pub type NodeId = i32;

/// In-memory index over a directed, typed multigraph.
///
/// Each ordered node pair holds at most one entry — a [`RelMask`] carrying
/// every relation kind asserted between the pair. Insertion-ordered maps
/// make neighbor iteration, edge iteration, and everything built on them
/// (serialization output, path discovery order) deterministic across runs.
///
/// The index is a single-owner, single-threaded structure. Callers that
/// need concurrent access must serialize it externally.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    adjacency: IndexMap<NodeId, IndexMap<NodeId, RelMask>>,
    edge_count: usize,
}

impl GraphIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Insert a node with no edges.
    ///
    /// Returns false (and changes nothing) when the node already exists.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, IndexMap::new());
        true
    }

    /// Insert or extend the directed edge `source -> target`.
    ///
    /// Self-loops are rejected: returns false with no mutation. Otherwise
    /// both endpoints are created if absent and `mask` is merged into the
    /// stored mask. The edge counter advances by the number of kinds the
    /// call introduces on the pair, so it always equals the number of
    /// distinct (pair, kind) combinations in the store regardless of how
    /// they were inserted. Re-asserting kinds already present is a no-op.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, mask: RelMask) -> bool {
        if source == target {
            return false;
        }
        self.add_node(source);
        self.add_node(target);

        let slot = self
            .adjacency
            .get_mut(&source)
            .expect("source inserted above")
            .entry(target);

        match slot {
            indexmap::map::Entry::Occupied(mut entry) => {
                let merged = entry.get().union(mask);
                let introduced = merged.len() - entry.get().len();
                if introduced > 0 {
                    entry.insert(merged);
                    self.edge_count += introduced;
                }
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(mask);
                self.edge_count += mask.len();
            }
        }
        true
    }

    /// Insert the edge in both directions.
    ///
    /// Always returns true, whether or not either direction changed the
    /// store (matching the directed variant's merge semantics per side).
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, mask: RelMask) -> bool {
        self.add_edge(a, b, mask);
        self.add_edge(b, a, mask);
        true
    }

    /// All neighbors of `id` whose stored mask shares at least one relation
    /// kind with `mask`.
    ///
    /// An unknown id yields an empty vec, not an error.
    pub fn neighbors(&self, id: NodeId, mask: RelMask) -> Vec<NodeId> {
        match self.adjacency.get(&id) {
            Some(targets) => targets
                .iter()
                .filter(|(_, stored)| stored.intersects(mask))
                .map(|(&n, _)| n)
                .collect(),
            None => Vec::new(),
        }
    }

    /// The stored mask on `source -> target`, if that edge exists.
    pub fn edge_mask(&self, source: NodeId, target: NodeId) -> Option<RelMask> {
        self.adjacency.get(&source)?.get(&target).copied()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Number of nodes in the store.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct typed edges — (pair, kind) combinations —
    /// currently stored.
    ///
    /// State-derived, not history-dependent: rebuilding the same store
    /// from its persisted edge list yields the same count (see
    /// [`add_edge`]).
    ///
    /// [`add_edge`]: GraphIndex::add_edge
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate every directed edge as `(source, target, mask)`, in store
    /// iteration order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, RelMask)> + '_ {
        self.adjacency.iter().flat_map(|(&source, targets)| {
            targets
                .iter()
                .map(move |(&target, &mask)| (source, target, mask))
        })
    }
}
