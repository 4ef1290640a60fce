//! Path queries over the graph index
//!
//! A query runs against a frozen borrow of the index: the traversal builds
//! a shortest-path DAG, and path enumeration backtracks through it.

mod path;
mod traverse;
mod types;

pub use path::PathQuery;
pub use traverse::ShortestPathDag;
pub use types::PathSet;
