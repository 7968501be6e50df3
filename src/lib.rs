pub mod graph;
pub mod imbalance;
pub mod io;
pub mod metrics;
pub mod report;
pub mod tokenizer;
pub mod topology;

// The `Evaluate` trait scores an existing partition.
// Metrics implement this trait.
// The generic argument `M` defines the input the metric reads (e.g. a graph).
// The partition maps every vertex to a part ID and is never modified; it is
// validated against the input before any metric is computed.
pub trait Evaluate<M> {
    // Result of the evaluation.
    type Output;

    // Error details, should the input be inconsistent.
    type Error;

    // Evaluate the partition `part_ids` of the given data.
    //
    // Part IDs must be smaller than the number of parts the metric was
    // configured with.
    fn evaluate(&self, part_ids: &[usize], data: M)
                -> Result<Self::Output, Self::Error>;
}
