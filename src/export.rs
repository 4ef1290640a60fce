//! Flat buffer packaging for callers outside the crate's ownership domain
//!
//! Hosts that cannot hold references into the index receive query results
//! as a single contiguous `Vec<i32>` returned by value — the caller owns
//! the buffer outright and drops it normally, with no paired release call.
//! Path sets use a sentinel-delimited encoding: [`PATH_SENTINEL`] marks the
//! start of each path, node ids follow in source→target order until the
//! next sentinel or the end of the buffer.
//!
//! The sentinel encoding requires node ids to be non-negative.

use crate::graph::NodeId;
use crate::query::PathSet;

/// Marks the start of a path record in a flat path buffer.
pub const PATH_SENTINEL: i32 = -1;

/// Package a neighbor list as a flat buffer.
pub fn flatten_neighbors(neighbors: &[NodeId]) -> Vec<i32> {
    neighbors.to_vec()
}

/// Package a path set as a sentinel-delimited flat buffer.
pub fn flatten_paths(paths: &PathSet) -> Vec<i32> {
    let total: usize = paths.iter().map(|p| p.len() + 1).sum();
    let mut buffer = Vec::with_capacity(total);
    for path in paths.iter() {
        buffer.push(PATH_SENTINEL);
        buffer.extend_from_slice(path);
    }
    buffer
}

/// View a sentinel-delimited flat buffer as one slice per path.
///
/// Leading non-sentinel values (a buffer not produced by
/// [`flatten_paths`]) are skipped.
pub fn split_paths(buffer: &[i32]) -> Vec<&[i32]> {
    let mut paths = Vec::new();
    let mut start = None;

    for (i, &value) in buffer.iter().enumerate() {
        if value == PATH_SENTINEL {
            if let Some(s) = start {
                paths.push(&buffer[s..i]);
            }
            start = Some(i + 1);
        }
    }
    if let Some(s) = start {
        paths.push(&buffer[s..]);
    }
    paths
}
