use super::VertexId;

/// ID for edges, the hash of an edge payload.
///
/// It depends on the payload only, never on the endpoints.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u64);

/// An edge record as stored in a graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Edge<E> {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub payload: E,
}

/// An edge payload carrying nothing but an integer identity.
///
/// Handy for graphs whose edges need to be told apart but hold no data.
/// Under [IdentityState](crate::graph::IdentityState), `DefaultEdge(n)` gets `EdgeId(n)`;
/// under the default [IdState](crate::graph::IdState) its ID is a hash of `n`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct DefaultEdge(pub u64);

impl EdgeId {
    pub fn new(x: u64) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(x: u64) -> Self {
        Self(x)
    }
}

impl<E> Edge<E> {
    /// Whether this edge goes from `source` to `sink`, in that direction.
    pub fn connects(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.source == *source && self.sink == *sink
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }
}

impl DefaultEdge {
    pub fn new(x: u64) -> Self {
        Self(x)
    }
}
