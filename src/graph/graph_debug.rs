use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex payload is printed on its own line,
/// followed by its out-edges as `--edge-> sink`.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        write!(f, "{:indention$}", "")
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Vertex: std::fmt::Debug,
    G::Edge: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vid in self.graph.vertex_ids() {
            let vert = self.graph.vertex(&vid).map_err(|_| std::fmt::Error)?;
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", vert)?;
            let mut outs: Vec<_> = self
                .graph
                .outgoing_edges(&vid)
                .map_err(|_| std::fmt::Error)?
                .into_iter()
                .collect();
            outs.sort();
            for eid in outs {
                let e = self.graph.edge(&eid).map_err(|_| std::fmt::Error)?;
                let sink = self.graph.vertex(&e.sink).map_err(|_| std::fmt::Error)?;
                self.display_indent(f, 1)?;
                writeln!(f, "--{:?}-> {:?}", e.payload, sink)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{directed::*, *};

    #[test]
    fn single_edge() {
        let mut g: DirectedGraph<&str, &str> = DirectedGraph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        g.add_edge(a, b, "x").unwrap();
        let out = format!("{:?}", g.debug().indent(1, 3));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let a_at = lines.iter().position(|l| *l == " \"A\"").unwrap();
        assert_eq!(lines[a_at + 1], "    --\"x\"-> \"B\"");
        assert!(lines.contains(&" \"B\""));
    }

    #[test]
    fn empty() {
        let g: DirectedGraph<u32, u32> = DirectedGraph::new();
        assert_eq!(format!("{:?}", g.debug()), "");
    }
}
