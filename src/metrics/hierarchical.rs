// Edge cut and communication cost of a mapping onto a hierarchical topology.

use serde::Serialize;
use tracing::debug;
use crate::Evaluate;
use crate::graph::{Graph, Weight};
use crate::metrics::{validate_partition, Error};
use crate::topology::Topology;

/// Cut statistics of a mapping, totals and their split per hierarchy level.
///
/// The `*_per_layer` vectors are indexed by the level at which the two
/// endpoints of a cut edge diverge, level 0 being the innermost one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HierarchicalStats {
    pub edge_cut: u64,
    pub weighted_edge_cut: Weight,
    pub comm_cost: Weight,
    pub edge_cut_per_layer: Vec<u64>,
    pub weighted_edge_cut_per_layer: Vec<Weight>,
    pub comm_cost_per_layer: Vec<Weight>,
}

/// Compute every cut statistic in a single pass over the half-edges.
///
/// The partition must already be validated against the graph and the number
/// of leaf locations of `topology`. Weights are accumulated in 128 bits, only
/// the halved results have to fit into a [`Weight`].
pub fn determine_all_stats(
    graph: &Graph,
    partition: &[usize],
    topology: &Topology,
) -> Result<HierarchicalStats, Error> {
    debug_assert_eq!(graph.len(), partition.len());

    let depth = topology.depth();
    let mut edge_cut_per_layer = vec![0u64; depth];
    let mut weighted_edge_cut_per_layer = vec![0u128; depth];
    let mut comm_cost_per_layer = vec![0u128; depth];

    for (vertex, &vertex_part) in partition.iter().enumerate() {
        for (neighbor, edge_weight) in graph.neighbors(vertex) {
            let Some((distance, level)) = topology.distance(vertex_part, partition[neighbor]) else {
                continue;
            };
            let edge_weight = u128::from(edge_weight);
            let cost = edge_weight * u128::from(distance);
            edge_cut_per_layer[level] += 1;
            weighted_edge_cut_per_layer[level] = weighted_edge_cut_per_layer[level]
                .checked_add(edge_weight)
                .ok_or(Error::WeightOverflow)?;
            comm_cost_per_layer[level] = comm_cost_per_layer[level]
                .checked_add(cost)
                .ok_or(Error::WeightOverflow)?;
        }
    }

    // Every undirected edge was seen from both of its endpoints.
    let edge_cut_per_layer: Vec<u64> = edge_cut_per_layer.into_iter().map(|twice| twice / 2).collect();
    let weighted_edge_cut_per_layer = halve(weighted_edge_cut_per_layer)?;
    let comm_cost_per_layer = halve(comm_cost_per_layer)?;

    let stats = HierarchicalStats {
        edge_cut: checked_total(&edge_cut_per_layer)?,
        weighted_edge_cut: checked_total(&weighted_edge_cut_per_layer)?,
        comm_cost: checked_total(&comm_cost_per_layer)?,
        edge_cut_per_layer,
        weighted_edge_cut_per_layer,
        comm_cost_per_layer,
    };

    debug!(
        edge_cut = stats.edge_cut,
        weighted_edge_cut = stats.weighted_edge_cut,
        comm_cost = stats.comm_cost,
        "computed hierarchical cut statistics"
    );
    Ok(stats)
}

fn halve(layers: Vec<u128>) -> Result<Vec<Weight>, Error> {
    layers
        .into_iter()
        .map(|twice| Weight::try_from(twice / 2).map_err(|_| Error::WeightOverflow))
        .collect()
}

fn checked_total(layers: &[Weight]) -> Result<Weight, Error> {
    layers
        .iter()
        .try_fold(0 as Weight, |acc, &layer| acc.checked_add(layer))
        .ok_or(Error::WeightOverflow)
}

/// Evaluates a mapping of graph vertices onto the leaves of a [`Topology`].
///
/// # Example
///
/// ```rust
/// use MapCut::Evaluate;
/// use MapCut::graph::Graph;
/// use MapCut::metrics::HierarchicalMetrics;
/// use MapCut::topology::Topology;
///
/// // 4-cycle, cut in two halves placed on two distinct leaves.
/// let graph = Graph::from_edges(vec![1; 4], &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
/// let topology = Topology::new(vec![2], vec![5]).unwrap();
///
/// let stats = HierarchicalMetrics { topology: &topology }
///     .evaluate(&[0, 0, 1, 1], &graph)
///     .unwrap();
///
/// assert_eq!(stats.edge_cut, 2);
/// assert_eq!(stats.comm_cost, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HierarchicalMetrics<'a> {
    pub topology: &'a Topology,
}

impl<'a> Evaluate<&'a Graph> for HierarchicalMetrics<'_> {
    type Output = HierarchicalStats;
    type Error = Error;

    fn evaluate(&self, partition: &[usize], graph: &'a Graph) -> Result<Self::Output, Self::Error> {
        validate_partition(graph.len(), partition, self.topology.num_locations())?;
        determine_all_stats(graph, partition, self.topology)
    }
}
