use crate::graph::*;

/// Inspects a graph with customized indentation.
///
/// Vertices are listed in increasing order, each followed by its neighbor
/// sequence as `--attribute-> sink`.
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
    G::EdgeAttr: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut vertices: Vec<_> = self.graph.iter_vertices().collect();
        vertices.sort_unstable();
        for v in vertices {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            for n in self.graph.neighbors(&v).map_err(|_| std::fmt::Error)? {
                self.display_indent(f, 1)?;
                writeln!(f, "--{:?}-> {:?}", n.attribute, n.sink)?;
            }
        }
        Ok(())
    }
}
