use crate::graph::*;

/// Payload types of a graph.
pub trait Graph {
    /// customized vertex type
    type Vertex;
    /// customized edge type
    type Edge;
}

pub trait GrowableGraph: Graph {
    /// Inserts a vertex if no vertex with the same ID is present.
    ///
    /// Either way, the ID of the payload is returned.
    /// An already stored payload is never overwritten.
    fn add_vertex(&mut self, vert: Self::Vertex) -> VertexId;

    /// Adds an edge from `source` to `sink`.
    ///
    /// Adding the same payload between the same endpoints again is a no-op.
    /// Adding it between other endpoints fails with [GraphError::EdgeAlreadyExists].
    fn add_edge(&mut self, source: VertexId, sink: VertexId, edge: Self::Edge) -> Result<EdgeId>;
}

pub trait EdgeShrinkableGraph: Graph {
    /// Removes an edge.
    ///
    /// Removing an edge will not remove its endpoints.
    fn delete_edge(&mut self, edge: &EdgeId) -> Result<EdgeId>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex without any incoming or outgoing edges.
    fn delete_vertex(&mut self, vertex: &VertexId) -> Result<VertexId>;
}

pub trait QueryableGraph: Graph {
    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertex payloads without any specific order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    /// Iterates over vertex IDs without any specific order.
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;
    fn vertex(&self, v: &VertexId) -> Result<&Self::Vertex>;

    /// Total number of edges.
    fn edge_size(&self) -> usize;
    /// Iterates over edges without any specific order.
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<Self::Edge>> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn edge(&self, e: &EdgeId) -> Result<&Edge<Self::Edge>>;
    /// Iterates edges from `source` to `sink`.
    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = &Edge<Self::Edge>> + '_>;

    fn incoming_edges(&self, v: &VertexId) -> Result<IdSet<EdgeId>>;
    fn outgoing_edges(&self, v: &VertexId) -> Result<IdSet<EdgeId>>;
    fn in_degree(&self, v: &VertexId) -> Result<usize>;
    fn out_degree(&self, v: &VertexId) -> Result<usize>;

    /// Sinks of out-edges, each once.
    fn children(&self, v: &VertexId) -> Result<IdSet<VertexId>>;
    /// Sources of in-edges, each once.
    fn parents(&self, v: &VertexId) -> Result<IdSet<VertexId>>;

    /// Union of children and parents.
    fn neighbours(&self, v: &VertexId) -> Result<IdSet<VertexId>> {
        let mut res = self.children(v)?;
        res.extend(self.parents(v)?);
        Ok(res)
    }

    fn is_empty(&self) -> bool {
        self.vertex_size() == 0
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
