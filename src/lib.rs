//! An in-memory directed graph whose vertices and edges are addressed by
//! hashes of their payloads.
//!
//! ```
//! use hashgraph::graph::{directed::DirectedGraph, *};
//!
//! let mut g: DirectedGraph<&str, &str> = DirectedGraph::new();
//! let a = g.add_vertex("A");
//! let b = g.add_vertex("B");
//! let x = g.add_edge(a, b, "x").unwrap();
//! assert!(g.children(&a).unwrap().contains(&b));
//! assert!(g.outgoing_edges(&a).unwrap().contains(&x));
//! assert_eq!(g.delete_vertex(&a).unwrap_err().kind(), ErrorKind::VertexNotFree);
//! ```

pub mod graph;
