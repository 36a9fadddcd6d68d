use crate::graph::*;
use ahash::RandomState;
use std::collections::{hash_map::Entry, HashMap};
use std::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

/// In-edges and out-edges of a vertex.
#[derive(Clone, Default)]
struct EdgeSet {
    incoming: IdSet<EdgeId>,
    outgoing: IdSet<EdgeId>,
}

/// A directed graph addressing vertices and edges by hashes of their payloads.
///
/// The ID of a vertex is the hash of its payload under `S`,
/// and so is the ID of an edge, regardless of its endpoints.
/// Collisions between unequal payloads are not defended against.
///
/// |                    | Complexity                                        |
/// | ------------------ | ------------------------------------------------- |
/// | `add_vertex`       | amortized O(1)                                    |
/// | `add_edge`         | amortized O(1)                                    |
/// | `delete_edge`      | amortized O(1)                                    |
/// | `delete_vertex`    | amortized O(1)                                    |
/// | `vertex`, `edge`   | O(1)                                              |
/// | `children`         | O(k), where k is the number of out-edges          |
/// | `parents`          | O(k), where k is the number of in-edges           |
/// | `neighbours`       | O(k), where k is the number of incident edges     |
/// | `edges_connecting` | O(k) in total, where k is the number of out-edges |
/// | `vertices`         | O(1) on each call to `.next`                      |
/// | `edges`            | O(1) on each call to `.next`                      |
#[derive(Clone)]
pub struct DirectedGraph<V, E, S = IdState> {
    id_state: S,
    vertices: HashMap<VertexId, V, RandomState>,
    edges: HashMap<EdgeId, Edge<E>, RandomState>,
    adjacency: HashMap<VertexId, EdgeSet, RandomState>,
}

impl<V, E> DirectedGraph<V, E, IdState>
where
    V: Hash + Eq,
    E: Hash + Eq,
{
    pub fn new() -> Self {
        Self::with_hasher(IdState::default())
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self::with_capacity_and_hasher(vertices, edges, IdState::default())
    }
}

impl<V, E, S> DirectedGraph<V, E, S>
where
    V: Hash + Eq,
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty graph computing IDs with `id_state`.
    pub fn with_hasher(id_state: S) -> Self {
        Self::with_capacity_and_hasher(0, 0, id_state)
    }

    pub fn with_capacity_and_hasher(vertices: usize, edges: usize, id_state: S) -> Self {
        Self {
            id_state,
            vertices: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
            edges: HashMap::with_capacity_and_hasher(edges, RandomState::new()),
            adjacency: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
        }
    }

    /// The ID `vert` has, or would have, in this graph.
    pub fn id_of_vertex(&self, vert: &V) -> VertexId {
        VertexId(self.id_state.hash_one(vert))
    }

    /// The ID `edge` has, or would have, in this graph.
    pub fn id_of_edge(&self, edge: &E) -> EdgeId {
        EdgeId(self.id_state.hash_one(edge))
    }

    pub fn hasher(&self) -> &S {
        &self.id_state
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
        trace!("cleared graph");
    }

    fn edge_set(&self, v: &VertexId) -> Result<&EdgeSet> {
        self.adjacency.get(v).ok_or(GraphError::AbsentVertex(*v))
    }
}

impl<V, E> Default for DirectedGraph<V, E, IdState>
where
    V: Hash + Eq,
    E: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, S> std::fmt::Debug for DirectedGraph<V, E, S>
where
    V: Hash + Eq + std::fmt::Debug,
    E: Hash + Eq + std::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        write!(f, "}}")
    }
}

impl<V, E, S> Graph for DirectedGraph<V, E, S> {
    type Vertex = V;
    type Edge = E;
}

impl<V, E, S> GrowableGraph for DirectedGraph<V, E, S>
where
    V: Hash + Eq,
    E: Hash + Eq,
    S: BuildHasher,
{
    fn add_vertex(&mut self, vert: V) -> VertexId {
        let vid = self.id_of_vertex(&vert);
        if let Entry::Vacant(slot) = self.vertices.entry(vid) {
            slot.insert(vert);
            self.adjacency.insert(vid, EdgeSet::default());
            trace!(vertex = vid.0, "added vertex");
        }
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, edge: E) -> Result<EdgeId> {
        for v in [source, sink] {
            if !self.vertices.contains_key(&v) {
                debug!(vertex = v.0, "edge endpoint is absent");
                return Err(GraphError::AbsentVertex(v));
            }
        }
        let eid = self.id_of_edge(&edge);
        match self.edges.entry(eid) {
            Entry::Occupied(occupied) => {
                let existing = occupied.get();
                if existing.connects(&source, &sink) {
                    Ok(eid)
                } else {
                    debug!(
                        edge = eid.0,
                        source = existing.source.0,
                        sink = existing.sink.0,
                        "edge already exists between other vertices"
                    );
                    Err(GraphError::EdgeAlreadyExists {
                        edge: eid,
                        from: existing.source,
                        to: existing.sink,
                    })
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(Edge {
                    id: eid,
                    source,
                    sink,
                    payload: edge,
                });
                self.adjacency
                    .entry(source)
                    .or_default()
                    .outgoing
                    .insert(eid);
                self.adjacency.entry(sink).or_default().incoming.insert(eid);
                trace!(edge = eid.0, source = source.0, sink = sink.0, "added edge");
                Ok(eid)
            }
        }
    }
}

impl<V, E, S> EdgeShrinkableGraph for DirectedGraph<V, E, S> {
    fn delete_edge(&mut self, edge: &EdgeId) -> Result<EdgeId> {
        match self.edges.remove(edge) {
            None => {
                debug!(edge = edge.0, "edge to delete is absent");
                Err(GraphError::AbsentEdge(*edge))
            }
            Some(e) => {
                if let Some(set) = self.adjacency.get_mut(&e.source) {
                    set.outgoing.remove(edge);
                }
                if let Some(set) = self.adjacency.get_mut(&e.sink) {
                    set.incoming.remove(edge);
                }
                trace!(edge = edge.0, "deleted edge");
                Ok(*edge)
            }
        }
    }
}

impl<V, E, S> VertexShrinkableGraph for DirectedGraph<V, E, S> {
    fn delete_vertex(&mut self, vertex: &VertexId) -> Result<VertexId> {
        let (incoming, outgoing) = match self.adjacency.get(vertex) {
            None => {
                debug!(vertex = vertex.0, "vertex to delete is absent");
                return Err(GraphError::AbsentVertex(*vertex));
            }
            Some(set) => (set.incoming.len(), set.outgoing.len()),
        };
        if incoming > 0 || outgoing > 0 {
            debug!(vertex = vertex.0, incoming, outgoing, "vertex is not free");
            return Err(GraphError::VertexNotFree {
                vertex: *vertex,
                incoming,
                outgoing,
            });
        }
        self.adjacency.remove(vertex);
        self.vertices.remove(vertex);
        trace!(vertex = vertex.0, "deleted vertex");
        Ok(*vertex)
    }
}

impl<V, E, S> QueryableGraph for DirectedGraph<V, E, S>
where
    V: Hash + Eq,
    E: Hash + Eq,
    S: BuildHasher,
{
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.values())
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.keys().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains_key(v)
    }

    fn vertex(&self, v: &VertexId) -> Result<&V> {
        self.vertices.get(v).ok_or(GraphError::AbsentVertex(*v))
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<E>> + '_> {
        Box::new(self.edges.values())
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn edge(&self, e: &EdgeId) -> Result<&Edge<E>> {
        self.edges.get(e).ok_or(GraphError::AbsentEdge(*e))
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = &Edge<E>> + '_> {
        let Some(set) = self.adjacency.get(source) else {
            return Box::new(std::iter::empty());
        };
        let edges = &self.edges;
        let source = *source;
        let sink = *sink;
        let it = set
            .outgoing
            .iter()
            .filter_map(move |eid| edges.get(eid))
            .filter(move |e| e.connects(&source, &sink));
        Box::new(it)
    }

    fn incoming_edges(&self, v: &VertexId) -> Result<IdSet<EdgeId>> {
        self.edge_set(v).map(|set| set.incoming.clone())
    }

    fn outgoing_edges(&self, v: &VertexId) -> Result<IdSet<EdgeId>> {
        self.edge_set(v).map(|set| set.outgoing.clone())
    }

    fn in_degree(&self, v: &VertexId) -> Result<usize> {
        self.edge_set(v).map(|set| set.incoming.len())
    }

    fn out_degree(&self, v: &VertexId) -> Result<usize> {
        self.edge_set(v).map(|set| set.outgoing.len())
    }

    fn children(&self, v: &VertexId) -> Result<IdSet<VertexId>> {
        let set = self.edge_set(v)?;
        let res = set
            .outgoing
            .iter()
            .filter_map(|eid| self.edges.get(eid))
            .map(|e| e.sink)
            .collect();
        Ok(res)
    }

    fn parents(&self, v: &VertexId) -> Result<IdSet<VertexId>> {
        let set = self.edge_set(v)?;
        let res = set
            .incoming
            .iter()
            .filter_map(|eid| self.edges.get(eid))
            .map(|e| e.source)
            .collect();
        Ok(res)
    }
}
