//! Query result structures

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// The set of shortest paths found by a [`PathQuery`](super::PathQuery).
///
/// Each path is a node sequence in source→target order, source and target
/// inclusive. Paths appear in discovery order: the order alternative
/// predecessors were recorded during the traversal, which is deterministic
/// for a given edge-insertion history but not lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSet {
    paths: Vec<Vec<NodeId>>,
}

impl PathSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_paths(paths: Vec<Vec<NodeId>>) -> Self {
        Self { paths }
    }

    /// Number of paths found.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeId]> {
        self.paths.iter().map(Vec::as_slice)
    }

    /// Hop length of the paths (they are all shortest, hence equal),
    /// or None when no path was found.
    pub fn hop_length(&self) -> Option<usize> {
        self.paths.first().map(|p| p.len() - 1)
    }

    pub fn into_inner(self) -> Vec<Vec<NodeId>> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Vec<NodeId>;
    type IntoIter = std::slice::Iter<'a, Vec<NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
