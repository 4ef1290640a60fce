//! Core graph data structures

mod index;
mod relation;

pub use index::{GraphIndex, NodeId};
pub use relation::{RelKind, RelMask};
