//! Traits and an implementation of directed graphs addressed by hashes of their payloads.
//!
//! # Content-derived IDs
//!
//! A vertex is known by the hash of its payload, and so is an edge.
//! There is no counter handing out IDs:
//! adding an equal payload twice gives the same ID twice and changes nothing the second time.
//! IDs are lightweight `u64`'s and may be copied and stored freely.
//!
//! Edges are bound to their endpoints when they are first added.
//! Adding an equal edge payload between other endpoints is an error,
//! and so is deleting a vertex which still has edges.
//!
//! # Traits
//!
//! ```plain
//! Queryable    Growable   VertexShrinkable
//!     |            |             |
//!     |            |             v
//!     |            |       EdgeShrinkable
//!     |            |             |
//!     |            v             |
//!     +-------->  Graph <--------+
//! ```

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod error;
pub use self::error::*;
mod id;
pub use self::id::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
