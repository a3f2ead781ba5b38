use thiserror::Error;

/// Everything that can go wrong before the search is even allowed to start.
///
/// Pruning decisions and per-width failures are *not* represented here: they
/// are expected control flow, reported through [`crate::Outcome`] instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("edge ({0}, {1}) references a vertex outside [0, {2})")]
    VertexOutOfRange(usize, usize, usize),

    #[error("self-loop at vertex {0} is not allowed in a simple graph")]
    SelfLoop(usize),

    #[error("`labels` has {given} entries but the graph has {expected} vertices")]
    LabelCountMismatch { given: usize, expected: usize },

    #[error("upper_bound hint must be at least 1, got 0")]
    ZeroUpperBound,
}
