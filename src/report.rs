use serde::Serialize;
use crate::graph::{Graph, Weight};
use crate::imbalance::{compute_imbalance_from_part_loads, BalanceSummary};
use crate::metrics::HierarchicalStats;

/// Everything known about one evaluated mapping, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub n: usize,
    pub m: usize,
    pub graph_weight: Weight,
    pub edge_weight: Weight,
    #[serde(flatten)]
    pub stats: HierarchicalStats,
    pub imbalance: f64,
    #[serde(flatten)]
    pub summary: BalanceSummary,
    pub partition_balance: Vec<f64>,
    pub partition_weights: Vec<Weight>,
    /// Seconds spent reading the inputs.
    pub io_in: f64,
    /// Seconds spent computing the metrics.
    pub processed_in: f64,
}

impl Report {
    pub fn new(
        graph: &Graph,
        stats: HierarchicalStats,
        partition_weights: Vec<Weight>,
        partition_balance: Vec<f64>,
        epsilon: f64,
    ) -> Self {
        let summary = BalanceSummary::new(&partition_balance, &partition_weights, epsilon);
        Self {
            n: graph.len(),
            m: graph.num_edges(),
            graph_weight: graph.total_vertex_weight(),
            edge_weight: graph.total_edge_weight(),
            stats,
            imbalance: compute_imbalance_from_part_loads(partition_weights.len(), &partition_weights),
            summary,
            partition_balance,
            partition_weights,
            io_in: 0.0,
            processed_in: 0.0,
        }
    }

    pub fn with_timings(self, io_in: f64, processed_in: f64) -> Self {
        Self { io_in, processed_in, ..self }
    }
}
