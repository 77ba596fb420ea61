use super::VertexId;

/// An ordered pair of endpoints.
///
/// `(a, b)` and `(b, a)` are different edges as far as a directed graph is
/// concerned. Undirected graphs keep both of them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

/// Retrieves the reverse of `edge`.
pub fn edge_reversal(edge: &Edge) -> Edge {
    Edge {
        source: edge.sink,
        sink: edge.source,
    }
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }

    pub fn reversal(&self) -> Self {
        edge_reversal(self)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, sink): (usize, usize)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(sink))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source, self.sink)
    }
}

/// An entry in the neighbor sequence of a source vertex: the sink and the
/// attribute carried by the edge leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor<E> {
    pub sink: VertexId,
    pub attribute: E,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal() {
        let e = Edge::from((3, 5));
        assert_eq!(edge_reversal(&e), Edge::from((5, 3)));
        assert_eq!(e.reversal().reversal(), e);
        assert_ne!(e, e.reversal());
    }

    #[test]
    fn self_loop() {
        assert!(Edge::from((2, 2)).is_self_loop());
        assert!(!Edge::from((2, 3)).is_self_loop());
        assert_eq!(Edge::from((2, 2)).reversal(), Edge::from((2, 2)));
    }
}
