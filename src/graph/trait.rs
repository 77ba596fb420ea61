use crate::{graph::*, GraphError, Result};

pub trait DirectedOrNot {
    fn is_directed(&self) -> bool;
}

pub trait QueryableGraph {
    /// Attribute carried by every edge.
    type EdgeAttr;

    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices without any specific order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Total number of edges.
    ///
    /// An undirected edge counts once even though both orientations are stored.
    fn edge_size(&self) -> usize;
    fn contains_edge(&self, e: &Edge) -> bool;
    /// The out-going neighbor sequence of `v`, in order of edge creation.
    fn neighbors(&self, v: &VertexId) -> Result<&[Neighbor<Self::EdgeAttr>]>;

    fn out_degree(&self, v: &VertexId) -> Result<usize> {
        self.neighbors(v).map(|ns| ns.len())
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait GrowableGraph: QueryableGraph {
    /// Adds `v` if it is absent.
    fn add_vertex(&mut self, v: VertexId);
    /// Adds `e` and its endpoints if they are absent.
    /// The attribute of a new edge is default-constructed.
    fn add_edge(&mut self, e: Edge);
    /// Adds `e` if it is absent and then overwrites its attribute.
    fn add_edge_with(&mut self, e: Edge, attribute: Self::EdgeAttr);
}

pub trait EdgeShrinkableGraph {
    /// Removes `e` and reports whether it was present.
    ///
    /// Endpoints are never removed.
    fn remove_edge(&mut self, e: &Edge) -> bool;
}

pub trait AttributedGraph: QueryableGraph {
    /// Optional attribute of vertices.
    type VertexAttr;

    fn vertex_attribute(&self, v: &VertexId) -> Result<&Self::VertexAttr>;
    fn set_vertex_attribute(&mut self, v: VertexId, attribute: Self::VertexAttr);
    fn edge_attribute(&self, e: &Edge) -> Result<&Self::EdgeAttr>;
    fn set_edge_attribute(&mut self, e: &Edge, attribute: Self::EdgeAttr) -> Result<()>;

    /// Like `set_vertex_attribute`, but refuses vertices outside the vertex set.
    fn try_set_vertex_attribute(
        &mut self,
        v: VertexId,
        attribute: Self::VertexAttr,
    ) -> Result<()> {
        if !self.contains_vertex(&v) {
            return Err(GraphError::IntegrityViolation(v));
        }
        self.set_vertex_attribute(v, attribute);
        Ok(())
    }

    fn has_vertex_attribute(&self, v: &VertexId) -> bool {
        self.vertex_attribute(v).is_ok()
    }

    fn vertex_attribute_cloned(&self, v: &VertexId) -> Result<Self::VertexAttr>
    where
        Self::VertexAttr: Clone,
    {
        self.vertex_attribute(v).map(Clone::clone)
    }

    fn edge_attribute_cloned(&self, e: &Edge) -> Result<Self::EdgeAttr>
    where
        Self::EdgeAttr: Clone,
    {
        self.edge_attribute(e).map(Clone::clone)
    }
}
