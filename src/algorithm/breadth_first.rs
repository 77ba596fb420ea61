use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Breadth-first discovery order.
///
/// Vertices are discovered when they are enqueued.
/// Siblings are visited in the order of their neighbor sequence,
/// i.e., the order their edges were created.
/// So for a fixed history of edge insertions, the order is fixed.
pub trait BreadthFirstOrder
where
    Self: QueryableGraph + Sized,
{
    /// Iterates over vertices reachable from `source`, `source` first.
    ///
    /// Fails without yielding anything if `source` is not in the graph.
    fn breadth_first_order(
        &self,
        source: &VertexId,
    ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>> {
        if !self.contains_vertex(source) {
            return Err(GraphError::VertexNotFound(*source));
        }
        Ok(Box::new(BreadthFirstIter::new(self, *source)))
    }
}

impl<G: QueryableGraph> BreadthFirstOrder for G {}

struct BreadthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    frontier: VecDeque<VertexId>,
    discovered: HashSet<VertexId, RandomState>,
}

impl<'a, G> Iterator for BreadthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vert = self.frontier.pop_front()?;
        if let Ok(neighbors) = self.graph.neighbors(&vert) {
            for n in neighbors {
                if self.discovered.insert(n.sink) {
                    self.frontier.push_back(n.sink);
                }
            }
        }
        Some(vert)
    }
}

impl<'a, G> BreadthFirstIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: VertexId) -> Self {
        let mut res = Self {
            graph,
            frontier: VecDeque::new(),
            discovered: HashSet::with_hasher(RandomState::new()),
        };
        res.discovered.insert(source);
        res.frontier.push_back(source);
        res
    }
}
