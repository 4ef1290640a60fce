//! Level-synchronous BFS with shortest-path predecessor tracking

use crate::graph::{GraphIndex, NodeId, RelMask};
use indexmap::IndexMap;
use tracing::trace;

/// The shortest-path DAG rooted at a source node.
///
/// Built by a level-synchronous BFS: every node at hop distance k is
/// expanded before any node at k+1, so the first level a node is seen at
/// is its minimum hop distance. For each reached node the DAG records
/// *every* previous-level node it was reached from — the full set of
/// predecessors lying on some shortest path, not just one — which is what
/// lets [`PathQuery`](super::PathQuery) enumerate all shortest paths.
#[derive(Debug, Clone)]
pub struct ShortestPathDag {
    source: NodeId,
    /// First-seen hop level per reached node.
    seen: IndexMap<NodeId, usize>,
    /// Same-level-arrival predecessors per reached node, in discovery order.
    pred: IndexMap<NodeId, Vec<NodeId>>,
}

impl ShortestPathDag {
    /// Run the traversal from `source`, following edges whose stored mask
    /// overlaps `mask`, out to at most `max_hops` levels.
    ///
    /// `max_hops == 0` expands nothing: only the source itself is reached.
    /// An unknown source is fine — it has no neighbors, so the DAG holds
    /// just the source at level 0.
    pub fn build(index: &GraphIndex, source: NodeId, mask: RelMask, max_hops: usize) -> Self {
        let mut seen: IndexMap<NodeId, usize> = IndexMap::new();
        let mut pred: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
        seen.insert(source, 0);
        pred.insert(source, Vec::new());

        let mut frontier = vec![source];
        let mut level = 0;

        while !frontier.is_empty() && level < max_hops {
            level += 1;
            let mut next = Vec::new();

            for &node in &frontier {
                for n in index.neighbors(node, mask) {
                    match seen.get(&n) {
                        None => {
                            seen.insert(n, level);
                            pred.insert(n, vec![node]);
                            next.push(n);
                        }
                        // An alternative arrival at the same level is
                        // another shortest-path predecessor.
                        Some(&l) if l == level => {
                            pred.get_mut(&n).expect("seen implies pred").push(node);
                        }
                        // Seen at an earlier level: not on a shortest path
                        // through `node`.
                        Some(_) => {}
                    }
                }
            }

            trace!(level, frontier = next.len(), "bfs level complete");
            frontier = next;
        }

        Self { source, seen, pred }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The hop level `node` was first seen at, if it was reached.
    pub fn level(&self, node: NodeId) -> Option<usize> {
        self.seen.get(&node).copied()
    }

    /// Whether the traversal reached `node` within its hop budget.
    pub fn reached(&self, node: NodeId) -> bool {
        self.seen.contains_key(&node)
    }

    /// The shortest-path predecessors of `node`, in discovery order.
    ///
    /// Empty for the source and for unreached nodes.
    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        self.pred.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes reached (including the source).
    pub fn reached_count(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RelKind;

    fn chain(n: NodeId) -> GraphIndex {
        let mut index = GraphIndex::new();
        for i in 0..n {
            index.add_edge(i, i + 1, RelKind::Schema.into());
        }
        index
    }

    #[test]
    fn test_levels_are_hop_distances() {
        let index = chain(4);
        let dag = ShortestPathDag::build(&index, 0, RelMask::ALL, 10);

        for i in 0..=4 {
            assert_eq!(dag.level(i), Some(i as usize));
        }
    }

    #[test]
    fn test_max_hops_bounds_expansion() {
        let index = chain(4);
        let dag = ShortestPathDag::build(&index, 0, RelMask::ALL, 2);

        assert!(dag.reached(2));
        assert!(!dag.reached(3));
        assert_eq!(dag.reached_count(), 3);
    }

    #[test]
    fn test_max_hops_zero_reaches_only_source() {
        let index = chain(4);
        let dag = ShortestPathDag::build(&index, 0, RelMask::ALL, 0);

        assert_eq!(dag.reached_count(), 1);
        assert_eq!(dag.level(0), Some(0));
        assert!(!dag.reached(1));
    }

    #[test]
    fn test_alternative_arrivals_collect_predecessors() {
        // Diamond: 0 -> 1 -> 3, 0 -> 2 -> 3
        let mut index = GraphIndex::new();
        index.add_edge(0, 1, RelKind::Schema.into());
        index.add_edge(0, 2, RelKind::Schema.into());
        index.add_edge(1, 3, RelKind::Schema.into());
        index.add_edge(2, 3, RelKind::Schema.into());

        let dag = ShortestPathDag::build(&index, 0, RelMask::ALL, 5);
        assert_eq!(dag.level(3), Some(2));
        assert_eq!(dag.predecessors(3), &[1, 2]);
    }

    #[test]
    fn test_longer_arrivals_are_not_predecessors() {
        // 0 -> 1 -> 2 and a long way round 0 -> 3 -> 4 -> 2.
        let mut index = GraphIndex::new();
        index.add_edge(0, 1, RelKind::Schema.into());
        index.add_edge(1, 2, RelKind::Schema.into());
        index.add_edge(0, 3, RelKind::Schema.into());
        index.add_edge(3, 4, RelKind::Schema.into());
        index.add_edge(4, 2, RelKind::Schema.into());

        let dag = ShortestPathDag::build(&index, 0, RelMask::ALL, 10);
        // Node 2 is first seen at level 2; the level-3 arrival via 4 is
        // ignored.
        assert_eq!(dag.level(2), Some(2));
        assert_eq!(dag.predecessors(2), &[1]);
    }

    #[test]
    fn test_mask_filters_traversal() {
        let mut index = GraphIndex::new();
        index.add_edge(0, 1, RelKind::Schema.into());
        index.add_edge(1, 2, RelKind::Pkfk.into());

        let dag = ShortestPathDag::build(&index, 0, RelKind::Schema.into(), 10);
        assert!(dag.reached(1));
        assert!(!dag.reached(2));
    }

    #[test]
    fn test_unknown_source_holds_only_itself() {
        let index = chain(2);
        let dag = ShortestPathDag::build(&index, 99, RelMask::ALL, 10);
        assert_eq!(dag.reached_count(), 1);
        assert_eq!(dag.level(99), Some(0));
    }
}
