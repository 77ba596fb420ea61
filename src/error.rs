use crate::graph::{Edge, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures surfaced by graph lookups.
///
/// Adding something already present or removing something absent is never an
/// error; those are reported through ordinary return values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    VertexNotFound(VertexId),

    #[error("no attribute has been set for vertex {0}")]
    VertexAttributeNotFound(VertexId),

    #[error("edge {0} does not exist")]
    EdgeNotFound(Edge),

    #[error("vertex {0} is not in the vertex set")]
    IntegrityViolation(VertexId),
}

impl GraphError {
    /// Whether a lookup referenced something that is not present.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_)
                | GraphError::VertexAttributeNotFound(_)
                | GraphError::EdgeNotFound(_)
        )
    }
}
