//! Trellis: Typed Multigraph Index
//!
//! An in-memory index over a directed, typed multigraph: nodes are integer
//! identifiers, edges carry a set of named relation kinds, and reachability
//! queries enumerate *all* minimum-hop paths between two nodes subject to a
//! hop budget. A building block for knowledge-graph style applications that
//! need fast neighbor lookups and bounded path discovery without a graph
//! database.
//!
//! # Core Concepts
//!
//! - **GraphIndex**: the adjacency store — one relation-kind set per ordered
//!   node pair, insertion-ordered for reproducible iteration
//! - **PathQuery**: level-synchronous BFS plus predecessor backtracking,
//!   enumerating every shortest path within a hop budget
//! - **storage**: flat edge-list text checkpointing of the full store
//! - **export**: sentinel-delimited flat buffers for callers that own no
//!   references into the index
//!
//! # Example
//!
//! ```
//! use trellis::{GraphIndex, PathQuery, RelKind};
//!
//! let mut index = GraphIndex::new();
//! index.add_edge(0, 1, RelKind::Schema.into());
//! index.add_edge(1, 2, RelKind::Schema.into());
//!
//! let paths = PathQuery::between(0, 2).max_hops(5).execute(&index);
//! assert_eq!(paths.len(), 1);
//! ```

mod graph;

pub mod export;
pub mod query;
pub mod storage;

pub use graph::{GraphIndex, NodeId, RelKind, RelMask};
pub use query::{PathQuery, PathSet, ShortestPathDag};
pub use storage::{StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
