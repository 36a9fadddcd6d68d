use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashgraph::graph::{directed::*, *};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, hash_backed);
criterion_main!(benches);

fn hash_backed(c: &mut Criterion) {
    cases::<DirectedGraph<usize, usize>>(c, "hash_backed");
}

fn cases<G>(c: &mut Criterion, prefix: &str)
where
    G: GrowableGraph<Vertex = usize, Edge = usize>
        + QueryableGraph
        + VertexShrinkableGraph
        + Default
        + Clone,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/add_vertex"), |b| {
        b.iter(|| add_vertices::<G>(vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/add_vertex and add_edge"), |b| {
        b.iter(|| add_vertices_and_edges::<G>(vertex_size, edge_size))
    });

    let (g, vertices, edges) = add_vertices_and_edges::<G>(vertex_size, edge_size);
    c.bench_function(&(prefix.to_string() + "/vertices"), |b| {
        b.iter(|| iter_vertices(&g))
    });
    c.bench_function(&(prefix.to_string() + "/edges"), |b| b.iter(|| iter_edges(&g)));
    c.bench_function(&(prefix.to_string() + "/neighbours"), |b| {
        b.iter(|| neighbours(&g, &vertices))
    });
    c.bench_function(&(prefix.to_string() + "/delete_edges"), |b| {
        b.iter(|| delete_edges(&mut g.clone(), &edges))
    });
    c.bench_function(&(prefix.to_string() + "/delete_edges and delete_vertices"), |b| {
        b.iter(|| {
            let mut g = g.clone();
            delete_edges(&mut g, &edges);
            delete_vertices(&mut g, &vertices);
        })
    });
}

fn add_vertices<G>(vertex_size: usize) -> (G, Vec<VertexId>)
where
    G: GrowableGraph<Vertex = usize> + Default,
{
    let mut g = G::default();
    let vertices = (0..vertex_size).map(|i| g.add_vertex(i)).collect();
    (g, vertices)
}

fn add_vertices_and_edges<G>(vertex_size: usize, edge_size: usize) -> (G, Vec<VertexId>, Vec<EdgeId>)
where
    G: GrowableGraph<Vertex = usize, Edge = usize> + Default,
{
    let (mut g, vertices) = add_vertices::<G>(vertex_size);
    let mut edges = vec![];
    for i in 0..edge_size {
        let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        if let Ok(eid) = g.add_edge(v0, v1, i) {
            edges.push(eid);
        }
    }
    (g, vertices, edges)
}

fn iter_vertices<G>(g: &G)
where
    G: QueryableGraph<Vertex = usize>,
{
    for x in g.vertices() {
        black_box(x);
    }
}

fn iter_edges<G>(g: &G)
where
    G: QueryableGraph,
{
    for x in g.edges() {
        black_box(x.id.to_raw());
    }
}

fn neighbours<G>(g: &G, vertices: &[VertexId])
where
    G: QueryableGraph,
{
    let vid = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    let _ = black_box(g.neighbours(&vid));
}

fn delete_edges<G>(g: &mut G, edges: &[EdgeId])
where
    G: EdgeShrinkableGraph,
{
    for e in edges {
        let _ = black_box(g.delete_edge(e));
    }
}

fn delete_vertices<G>(g: &mut G, vertices: &[VertexId])
where
    G: VertexShrinkableGraph,
{
    for v in vertices {
        let _ = black_box(g.delete_vertex(v));
    }
}
