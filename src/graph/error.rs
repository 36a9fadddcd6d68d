use super::{EdgeId, VertexId};
use thiserror::Error;

/// Failures of graph operations.
///
/// All of them are expected and recoverable.
/// Retrying after fixing the precondition succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced vertex is not in the graph.
    #[error("vertex {0:?} is absent")]
    AbsentVertex(VertexId),

    /// The referenced edge is not in the graph.
    #[error("edge {0:?} is absent")]
    AbsentEdge(EdgeId),

    /// The edge ID is already taken by an edge with other endpoints.
    ///
    /// `from` and `to` are the endpoints of the edge already stored.
    #[error("edge {edge:?} already exists from {from:?} to {to:?}")]
    EdgeAlreadyExists {
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
    },

    /// The vertex still has incident edges, so it cannot be deleted.
    #[error("vertex {vertex:?} still has {incoming} incoming and {outgoing} outgoing edges")]
    VertexNotFree {
        vertex: VertexId,
        incoming: usize,
        outgoing: usize,
    },
}

/// Field-less discriminant of [GraphError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AbsentVertex,
    AbsentEdge,
    EdgeAlreadyExists,
    VertexNotFree,
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::AbsentVertex(_) => ErrorKind::AbsentVertex,
            GraphError::AbsentEdge(_) => ErrorKind::AbsentEdge,
            GraphError::EdgeAlreadyExists { .. } => ErrorKind::EdgeAlreadyExists,
            GraphError::VertexNotFree { .. } => ErrorKind::VertexNotFree,
        }
    }
}
