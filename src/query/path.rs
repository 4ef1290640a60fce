//! All-shortest-paths enumeration

use super::traverse::ShortestPathDag;
use super::types::PathSet;
use crate::graph::{GraphIndex, NodeId, RelMask};
use tracing::debug;

/// Query for every minimum-hop path between two nodes.
///
/// Runs the level-synchronous traversal, then backtracks through the
/// predecessor DAG to enumerate all shortest paths within the hop budget.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Relation kinds an edge must share at least one of to be followed
    pub mask: RelMask,
    /// Maximum number of hops to search
    pub max_hops: usize,
}

impl PathQuery {
    /// Create a new path query between two nodes.
    pub fn between(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            mask: RelMask::ALL,
            max_hops: 10, // Default hop budget
        }
    }

    /// Restrict traversal to edges overlapping `mask`.
    pub fn mask(mut self, mask: RelMask) -> Self {
        self.mask = mask;
        self
    }

    /// Set the hop budget.
    pub fn max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Execute the query against an index.
    pub fn execute(&self, index: &GraphIndex) -> PathSet {
        let dag = ShortestPathDag::build(index, self.source, self.mask, self.max_hops);
        let paths = enumerate_paths(&dag, self.target);
        debug!(
            source = self.source,
            target = self.target,
            count = paths.len(),
            "path query complete"
        );
        paths
    }
}

/// Backtrack from `target` through the predecessor DAG, emitting every
/// shortest path in source→target order.
///
/// Iterative depth-first backtracking: each stack frame is (node,
/// next-predecessor-index). A frame whose node is the source emits the
/// current stack read top-to-bottom; exhausted frames pop and bump their
/// parent's index. Paths come out in predecessor discovery order.
fn enumerate_paths(dag: &ShortestPathDag, target: NodeId) -> PathSet {
    if !dag.reached(target) {
        return PathSet::empty();
    }

    let source = dag.source();
    let mut stack: Vec<(NodeId, usize)> = vec![(target, 0)];
    let mut paths: Vec<Vec<NodeId>> = Vec::new();

    while let Some(&(node, idx)) = stack.last() {
        if node == source && idx == 0 {
            paths.push(stack.iter().rev().map(|&(n, _)| n).collect());
        }

        let preds = dag.predecessors(node);
        if let Some(&next) = preds.get(idx) {
            stack.push((next, 0));
        } else {
            stack.pop();
            if let Some(parent) = stack.last_mut() {
                parent.1 += 1;
            }
        }
    }

    PathSet::from_paths(paths)
}
