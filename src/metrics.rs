use thiserror::Error;

mod hierarchical;

pub use hierarchical::{determine_all_stats, HierarchicalMetrics, HierarchicalStats};

/// Common errors raised when a partition cannot be evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Input sets don't have matching lengths.
    #[error("input sets don't have the same length (expected {expected} items, got {actual})")]
    InputLenMismatch { expected: usize, actual: usize },

    /// A vertex is assigned to a location that does not exist.
    #[error("vertex {vertex} is assigned to part {part}, but only {num_parts} parts exist")]
    PartIdOutOfRange { vertex: usize, part: usize, num_parts: usize },

    /// Metrics over zero parts are undefined.
    #[error("expected at least one part")]
    NoParts,

    /// A metric exceeds the range of [`Weight`](crate::graph::Weight).
    #[error("metric value does not fit into 64 bits")]
    WeightOverflow,
}

/// Check that `partition` assigns each of the `num_vertices` vertices to a
/// part in `[0, num_parts)`.
///
/// Evaluators call this once up front so that their inner loops can index by
/// part id without further checks.
pub fn validate_partition(num_vertices: usize, partition: &[usize], num_parts: usize) -> Result<(), Error> {
    if num_parts == 0 {
        return Err(Error::NoParts);
    }
    if partition.len() != num_vertices {
        return Err(Error::InputLenMismatch { expected: num_vertices, actual: partition.len() });
    }
    if let Some((vertex, &part)) = partition.iter().enumerate().find(|(_, &part)| part >= num_parts) {
        return Err(Error::PartIdOutOfRange { vertex, part, num_parts });
    }
    Ok(())
}
