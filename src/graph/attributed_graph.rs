use crate::{graph::*, GraphError, Result};
use tracing::{debug, warn};

/// Whether edges of a [Graph] are ordered pairs or unordered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Directed,
    Undirected,
}

/// An attributed graph over an [AdjacencyStore].
///
/// * `V`: optional attributes of vertices.
/// * `E`: attributes of edges, default-constructed when an edge is created.
///
/// In [Mode::Undirected], every edge `(a, b)` is stored together with `(b, a)`.
/// Both orientations are added, removed and attributed in lockstep,
/// and [QueryableGraph::edge_size] counts the pair once.
/// A self-loop is a single stored edge and also counts once.
#[derive(Clone)]
pub struct Graph<V = (), E = ()> {
    mode: Mode,
    store: AdjacencyStore<V, E>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl<V, E> std::fmt::Debug for Graph<V, E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph({:?}) {{", self.mode)?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<V, E> DirectedOrNot for Graph<V, E> {
    fn is_directed(&self) -> bool {
        self.mode == Mode::Directed
    }
}

impl<V, E> Graph<V, E> {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            store: AdjacencyStore::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Mode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Mode::Undirected)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(mode: Mode, vertices: usize) -> Self {
        Self {
            mode,
            store: AdjacencyStore::with_capacity(vertices),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The underlying directed edges, where an undirected edge shows up twice.
    pub fn store(&self) -> &AdjacencyStore<V, E> {
        &self.store
    }

    fn mirrors(&self, e: &Edge) -> bool {
        self.mode == Mode::Undirected && !e.is_self_loop()
    }
}

impl<V, E> QueryableGraph for Graph<V, E> {
    type EdgeAttr = E;

    fn vertex_size(&self) -> usize {
        self.store.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.store.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.store.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        match self.mode {
            Mode::Directed => self.store.edge_size(),
            Mode::Undirected => {
                let loops = self.store.self_loop_size();
                (self.store.edge_size() - loops) / 2 + loops
            }
        }
    }

    fn contains_edge(&self, e: &Edge) -> bool {
        self.store.contains_edge(e)
    }

    fn neighbors(&self, v: &VertexId) -> Result<&[Neighbor<E>]> {
        self.store.neighbors(v)
    }
}

impl<V, E> GrowableGraph for Graph<V, E>
where
    E: Default + Clone,
{
    fn add_vertex(&mut self, v: VertexId) {
        self.store.add_vertex(v);
    }

    fn add_edge(&mut self, e: Edge) {
        self.store.add_edge(e);
        if self.mirrors(&e) {
            self.store.add_edge(e.reversal());
            debug!(edge = %e, "undirected edge added");
        }
    }

    fn add_edge_with(&mut self, e: Edge, attribute: E) {
        if self.mirrors(&e) {
            self.store.add_edge_with(e, attribute.clone());
            self.store.add_edge_with(e.reversal(), attribute);
            debug!(edge = %e, "undirected edge added with attribute");
        } else {
            self.store.add_edge_with(e, attribute);
        }
    }
}

impl<V, E> EdgeShrinkableGraph for Graph<V, E> {
    fn remove_edge(&mut self, e: &Edge) -> bool {
        let forward = self.store.remove_edge(e);
        if !self.mirrors(e) {
            return forward;
        }
        let backward = self.store.remove_edge(&e.reversal());
        if forward != backward {
            warn!(
                edge = %e,
                forward,
                backward,
                "undirected edge was stored in one orientation"
            );
        } else if forward {
            debug!(edge = %e, "undirected edge removed");
        }
        forward && backward
    }
}

impl<V, E> AttributedGraph for Graph<V, E>
where
    E: Clone,
{
    type VertexAttr = V;

    fn vertex_attribute(&self, v: &VertexId) -> Result<&V> {
        self.store.vertex_attribute(v)
    }

    fn set_vertex_attribute(&mut self, v: VertexId, attribute: V) {
        self.store.set_vertex_attribute(v, attribute);
    }

    fn edge_attribute(&self, e: &Edge) -> Result<&E> {
        self.store.edge_attribute(e)
    }

    fn set_edge_attribute(&mut self, e: &Edge, attribute: E) -> Result<()> {
        if !self.mirrors(e) {
            return self.store.set_edge_attribute(e, attribute);
        }
        let reversal = e.reversal();
        // check both before writing either, so a failure leaves no trace
        if !self.store.contains_edge(e) || !self.store.contains_edge(&reversal) {
            return Err(GraphError::EdgeNotFound(*e));
        }
        self.store.set_edge_attribute(&reversal, attribute.clone())?;
        self.store.set_edge_attribute(e, attribute)
    }
}
