//! Generic graph model and builder
//!
//! The builder accumulates nodes and edges while the resolver walks the
//! dependency tree, deduplicating revisited nodes, and hands the finished
//! collections to a [`crate::format::GraphFormatter`].

mod builder;
mod types;

pub use builder::GraphBuilder;
pub use types::{GraphEdge, GraphNode};
