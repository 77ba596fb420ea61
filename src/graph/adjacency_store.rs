use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use tracing::{trace, warn};

/// Directed primitives over a hash-backed adjacency list.
///
/// Each source vertex owns an append-only sequence of [Neighbor]s, so neighbors
/// are always enumerated in the order their edges were created.
/// Re-adding a removed edge appends it at the end.
///
/// |                    | Complexity          |
/// | ------------------ | ------------------- |
/// | `add_vertex`       | $O(1)$              |
/// | `add_edge`         | $O(\deg(a))$        |
/// | `remove_edge`      | $O(\deg(a))$        |
/// | `contains_vertex`  | $O(1)$              |
/// | `contains_edge`    | $O(\deg(a))$        |
/// | `vertex_size`      | $O(1)$              |
/// | `edge_size`        | $O(1)$              |
/// | `neighbors`        | $O(1)$ to borrow, $O(\deg(v))$ to walk |
#[derive(Clone)]
pub struct AdjacencyStore<V = (), E = ()> {
    vertices: HashSet<VertexId, RandomState>,
    vertex_attributes: HashMap<VertexId, V, RandomState>,
    adjacency: HashMap<VertexId, Vec<Neighbor<E>>, RandomState>,
    edge_size: usize,
    self_loop_size: usize,
}

impl<V, E> Default for AdjacencyStore<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> DirectedOrNot for AdjacencyStore<V, E> {
    fn is_directed(&self) -> bool {
        true
    }
}

impl<V, E> std::fmt::Debug for AdjacencyStore<V, E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyStore {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<V, E> AdjacencyStore<V, E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: HashSet::with_capacity_and_hasher(vertices, RandomState::new()),
            vertex_attributes: HashMap::with_hasher(RandomState::new()),
            adjacency: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
            edge_size: 0,
            self_loop_size: 0,
        }
    }

    /// Number of stored edges whose endpoints coincide.
    pub fn self_loop_size(&self) -> usize {
        self.self_loop_size
    }

    fn find_neighbor(&self, e: &Edge) -> Option<&Neighbor<E>> {
        self.adjacency
            .get(&e.source)
            .and_then(|ns| ns.iter().find(|n| n.sink == e.sink))
    }

    fn find_neighbor_mut(&mut self, e: &Edge) -> Option<&mut Neighbor<E>> {
        self.adjacency
            .get_mut(&e.source)
            .and_then(|ns| ns.iter_mut().find(|n| n.sink == e.sink))
    }

    fn insert_vertex(&mut self, v: VertexId) {
        if self.vertices.insert(v) {
            trace!(vertex = v.to_raw(), "vertex inserted");
        }
    }

    fn insert_edge(&mut self, e: Edge, attribute: E) {
        self.insert_vertex(e.source);
        self.insert_vertex(e.sink);
        self.adjacency.entry(e.source).or_default().push(Neighbor {
            sink: e.sink,
            attribute,
        });
        self.edge_size += 1;
        if e.is_self_loop() {
            self.self_loop_size += 1;
        }
        trace!(edge = %e, "edge inserted");
    }
}

impl<V, E> QueryableGraph for AdjacencyStore<V, E> {
    type EdgeAttr = E;

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn contains_edge(&self, e: &Edge) -> bool {
        self.find_neighbor(e).is_some()
    }

    fn neighbors(&self, v: &VertexId) -> Result<&[Neighbor<E>]> {
        if !self.vertices.contains(v) {
            return Err(GraphError::VertexNotFound(*v));
        }
        // vertices that have only ever been sinks own no sequence
        Ok(self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[]))
    }
}

impl<V, E> GrowableGraph for AdjacencyStore<V, E>
where
    E: Default,
{
    fn add_vertex(&mut self, v: VertexId) {
        self.insert_vertex(v);
    }

    fn add_edge(&mut self, e: Edge) {
        if self.contains_edge(&e) {
            return;
        }
        self.insert_edge(e, E::default());
    }

    fn add_edge_with(&mut self, e: Edge, attribute: E) {
        match self.find_neighbor_mut(&e) {
            Some(n) => {
                n.attribute = attribute;
                trace!(edge = %e, "edge attribute overwritten");
            }
            None => self.insert_edge(e, attribute),
        }
    }
}

impl<V, E> EdgeShrinkableGraph for AdjacencyStore<V, E> {
    fn remove_edge(&mut self, e: &Edge) -> bool {
        let removed = match self.adjacency.get_mut(&e.source) {
            None => false,
            Some(ns) => match ns.iter().position(|n| n.sink == e.sink) {
                None => false,
                Some(idx) => {
                    ns.remove(idx);
                    true
                }
            },
        };
        if removed {
            self.edge_size -= 1;
            if e.is_self_loop() {
                self.self_loop_size -= 1;
            }
            trace!(edge = %e, "edge removed");
        }
        removed
    }
}

impl<V, E> AttributedGraph for AdjacencyStore<V, E> {
    type VertexAttr = V;

    fn vertex_attribute(&self, v: &VertexId) -> Result<&V> {
        self.vertex_attributes
            .get(v)
            .ok_or(GraphError::VertexAttributeNotFound(*v))
    }

    fn set_vertex_attribute(&mut self, v: VertexId, attribute: V) {
        if !self.vertices.contains(&v) {
            warn!(
                vertex = v.to_raw(),
                "attribute stored for a vertex outside the vertex set"
            );
        }
        self.vertex_attributes.insert(v, attribute);
        trace!(vertex = v.to_raw(), "vertex attribute set");
    }

    fn edge_attribute(&self, e: &Edge) -> Result<&E> {
        self.find_neighbor(e)
            .map(|n| &n.attribute)
            .ok_or(GraphError::EdgeNotFound(*e))
    }

    fn set_edge_attribute(&mut self, e: &Edge, attribute: E) -> Result<()> {
        let n = self
            .find_neighbor_mut(e)
            .ok_or(GraphError::EdgeNotFound(*e))?;
        n.attribute = attribute;
        trace!(edge = %e, "edge attribute overwritten");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::*;
    use quickcheck_macros::*;

    fn sinks<E>(store: &AdjacencyStore<i32, E>, v: usize) -> Vec<usize> {
        store
            .neighbors(&VertexId::new(v))
            .unwrap()
            .iter()
            .map(|n| n.sink.to_raw())
            .collect()
    }

    #[test]
    fn add_nonexistent_edge() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        let e = Edge::from((0, 1));
        store.add_edge(e);
        assert!(store.contains_vertex(&e.source));
        assert!(store.contains_vertex(&e.sink));
        assert!(store.contains_edge(&e));
        assert!(!store.contains_edge(&e.reversal()));
        assert_eq!(store.vertex_size(), 2);
        assert_eq!(store.edge_size(), 1);
    }

    #[test]
    fn add_edge_from_existing_vertex() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        store.add_edge(Edge::from((0, 2)));
        store.add_edge(Edge::from((0, 1)));
        assert!(store.contains_edge(&Edge::from((0, 2))));
        assert!(store.contains_edge(&Edge::from((0, 1))));
        assert_eq!(store.vertex_size(), 3);
        assert_eq!(sinks(&store, 0), vec![2, 1]);
    }

    #[test]
    fn add_existing_edge() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        let e = Edge::from((0, 1));
        store.add_edge(e);
        store.set_edge_attribute(&e, 5).unwrap();
        store.add_edge(e);
        assert_eq!(store.vertex_size(), 2);
        assert_eq!(store.edge_size(), 1);
        assert_eq!(*store.edge_attribute(&e).unwrap(), 5);
    }

    #[test]
    fn add_edge_with_overwrites() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        let e = Edge::from((4, 2));
        store.add_edge_with(e, 1);
        assert_eq!(*store.edge_attribute(&e).unwrap(), 1);
        store.add_edge_with(e, 2);
        assert_eq!(*store.edge_attribute(&e).unwrap(), 2);
        assert_eq!(store.edge_size(), 1);
    }

    #[test]
    fn vertex_count() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        assert_eq!(store.vertex_size(), 0);
        store.add_vertex(VertexId::new(7));
        store.add_vertex(VertexId::new(7));
        assert_eq!(store.vertex_size(), 1);
        store.add_edge(Edge::from((7, 8)));
        assert_eq!(store.vertex_size(), 2);
    }

    #[test]
    fn remove_edge_keeps_vertices_and_order() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        for sink in [1, 2, 3] {
            store.add_edge(Edge::from((0, sink)));
        }
        assert!(store.remove_edge(&Edge::from((0, 2))));
        assert!(!store.remove_edge(&Edge::from((0, 2))));
        assert!(!store.remove_edge(&Edge::from((5, 6))));
        assert_eq!(sinks(&store, 0), vec![1, 3]);
        assert_eq!(store.edge_size(), 2);
        assert_eq!(store.vertex_size(), 4);

        store.add_edge(Edge::from((0, 2)));
        assert_eq!(sinks(&store, 0), vec![1, 3, 2]);
    }

    #[test]
    fn self_loop() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        let e = Edge::from((3, 3));
        store.add_edge(e);
        assert_eq!(store.vertex_size(), 1);
        assert_eq!(store.edge_size(), 1);
        assert_eq!(store.self_loop_size(), 1);
        assert_eq!(sinks(&store, 3), vec![3]);
        assert!(store.remove_edge(&e));
        assert_eq!(store.self_loop_size(), 0);
        assert_eq!(store.edge_size(), 0);
    }

    #[test]
    fn neighbors_of_sink_only_vertex() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        store.add_edge(Edge::from((0, 1)));
        assert_eq!(sinks(&store, 1), Vec::<usize>::new());
        assert_eq!(store.out_degree(&VertexId::new(0)), Ok(1));
        assert_eq!(
            store.neighbors(&VertexId::new(9)),
            Err(GraphError::VertexNotFound(VertexId::new(9)))
        );
    }

    #[test]
    fn neighbors_carry_attributes() {
        let mut store = AdjacencyStore::<(), &str>::new();
        store.add_edge_with(Edge::from((0, 1)), "a");
        store.add_edge(Edge::from((0, 2)));
        let ns = store.neighbors(&VertexId::new(0)).unwrap();
        assert_eq!(
            ns,
            &[
                Neighbor {
                    sink: VertexId::new(1),
                    attribute: "a",
                },
                Neighbor {
                    sink: VertexId::new(2),
                    attribute: "",
                },
            ]
        );
    }

    #[test]
    fn vertex_attributes() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        store.add_edge(Edge::from((0, 1)));
        store.set_vertex_attribute(VertexId::new(0), 32);
        store.set_vertex_attribute(VertexId::new(0), 64);
        assert_eq!(store.vertex_attribute(&VertexId::new(0)), Ok(&64));
        assert_eq!(store.vertex_attribute_cloned(&VertexId::new(0)), Ok(64));
        assert_eq!(
            store.vertex_attribute(&VertexId::new(1)),
            Err(GraphError::VertexAttributeNotFound(VertexId::new(1)))
        );
        assert!(!store.has_vertex_attribute(&VertexId::new(1)));
    }

    #[test]
    fn vertex_attribute_of_unknown_vertex() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        store.set_vertex_attribute(VertexId::new(5), 1);
        assert!(!store.contains_vertex(&VertexId::new(5)));
        assert_eq!(store.vertex_size(), 0);
        assert_eq!(store.vertex_attribute(&VertexId::new(5)), Ok(&1));

        assert_eq!(
            store.try_set_vertex_attribute(VertexId::new(6), 1),
            Err(GraphError::IntegrityViolation(VertexId::new(6)))
        );
        assert!(!store.has_vertex_attribute(&VertexId::new(6)));
        store.add_vertex(VertexId::new(6));
        assert_eq!(store.try_set_vertex_attribute(VertexId::new(6), 2), Ok(()));
        assert_eq!(store.vertex_attribute(&VertexId::new(6)), Ok(&2));
    }

    #[test]
    fn missing_edge_attribute() {
        let mut store = AdjacencyStore::<i32, i32>::new();
        let e = Edge::from((1, 2));
        assert_eq!(store.edge_attribute(&e), Err(GraphError::EdgeNotFound(e)));
        assert_eq!(
            store.set_edge_attribute(&e, 3),
            Err(GraphError::EdgeNotFound(e))
        );
        assert_eq!(store.vertex_size(), 0);
        assert_eq!(store.edge_size(), 0);
    }

    #[quickcheck]
    fn against_model(ops: Ops) {
        let mut trial = AdjacencyStore::<i32, i32>::new();
        let mut oracle = Model::new(true);
        for op in ops.iter() {
            apply(&mut trial, op);
            oracle.apply(op);
        }
        oracle.check(&trial);
        let stored: usize = trial
            .iter_vertices()
            .map(|v| trial.out_degree(&v).unwrap())
            .sum();
        assert_eq!(stored, trial.edge_size());
    }
}
