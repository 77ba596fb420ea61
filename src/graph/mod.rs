//! Traits and implementations of attributed graphs.
//!
//! # Vertices, edges and attributes
//!
//! Vertices are [VertexId]'s, essentially `usize` chosen by callers.
//! An [Edge] is an ordered pair of them.
//! Vertices carry optional attributes, which may be absent even when the
//! vertex is present. Edges carry attributes from their birth.
//!
//! # Layers
//!
//! [AdjacencyStore] owns the data and provides directed primitives.
//! [Graph] wraps it and, in [Mode::Undirected], mirrors every edge mutation
//! onto both orientations.
//! Both implement the same traits, so algorithms in [crate::algorithm] run
//! on either.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency_store;
pub use self::adjacency_store::*;
mod attributed_graph;
pub use self::attributed_graph::*;
mod graph_debug;
pub use self::graph_debug::*;
