//! An in-memory attributed graph.
//!
//! Vertices are caller-chosen `usize` indices. Every vertex may carry an
//! optional attribute of type `V`; every edge carries an attribute of type `E`
//! from the moment it is created. A [graph::Graph] is either directed or
//! undirected, decided when it is constructed.
//!
//! ```rust
//! use attrgraph::{algorithm::*, graph::*};
//!
//! let mut g = Graph::<&str, u32>::undirected();
//! g.add_edge_with(Edge::from((0, 1)), 7);
//! g.add_edge(Edge::from((1, 2)));
//! g.set_vertex_attribute(VertexId::new(0), "root");
//!
//! assert_eq!(g.edge_size(), 2);
//! assert_eq!(*g.edge_attribute(&Edge::from((1, 0))).unwrap(), 7);
//! assert_eq!(*g.vertex_attribute(&VertexId::new(0)).unwrap(), "root");
//!
//! let order: Vec<_> = g
//!     .breadth_first_order(&VertexId::new(2))
//!     .unwrap()
//!     .map(|v| v.to_raw())
//!     .collect();
//! assert_eq!(order, vec![2, 1, 0]);
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
