use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use std::collections::HashSet;

/// Depth-first discovery order.
///
/// Vertices are discovered when they are popped from the stack, not when they
/// are pushed. Neighbors are pushed in the order of their neighbor sequence,
/// so the most recently added neighbor is explored first.
pub trait DepthFirstOrder
where
    Self: QueryableGraph + Sized,
{
    /// Iterates over vertices reachable from `source`, `source` first.
    ///
    /// Fails without yielding anything if `source` is not in the graph.
    fn depth_first_order(
        &self,
        source: &VertexId,
    ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>> {
        if !self.contains_vertex(source) {
            return Err(GraphError::VertexNotFound(*source));
        }
        Ok(Box::new(DepthFirstIter::new(self, *source)))
    }
}

impl<G: QueryableGraph> DepthFirstOrder for G {}

struct DepthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    source: Option<VertexId>,
    stack: Vec<VertexId>,
    discovered: HashSet<VertexId, RandomState>,
}

impl<'a, G> Iterator for DepthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            self.expand(&source);
            return Some(source);
        }
        // A vertex may sit on the stack more than once. Anything pushed above
        // a stale copy is exhausted before the copy surfaces, so skipping it
        // loses nothing.
        while let Some(vert) = self.stack.pop() {
            if self.discovered.insert(vert) {
                self.expand(&vert);
                return Some(vert);
            }
        }
        None
    }
}

impl<'a, G> DepthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: VertexId) -> Self {
        let mut res = Self {
            graph,
            source: Some(source),
            stack: vec![],
            discovered: HashSet::with_hasher(RandomState::new()),
        };
        res.discovered.insert(source);
        res
    }

    fn expand(&mut self, vert: &VertexId) {
        if let Ok(neighbors) = self.graph.neighbors(vert) {
            for n in neighbors {
                if !self.discovered.contains(&n.sink) {
                    self.stack.push(n.sink);
                }
            }
        }
    }
}
