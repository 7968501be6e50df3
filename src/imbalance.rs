// This file has code from https://github.com/LIHPC-Computational-Geometry/coupe (See NOTICE.md)
// Load of each leaf location and how it compares to a perfectly even split.
use itertools::{Itertools, MinMaxResult};
use num_traits::ToPrimitive;
use serde::Serialize;
use tracing::warn;
use crate::Evaluate;
use crate::graph::{Graph, Weight};
use crate::metrics::{validate_partition, Error};

/// Calculates the total weight for each part of a given partition.
pub fn compute_parts_load(partition: &[usize], num_parts: usize, weights: &[Weight]) -> Vec<Weight> {
    let mut loads = vec![0; num_parts];

    for (&part, w) in partition.iter().zip(weights) {
        if part < num_parts {
            loads[part] += w;
        }
    }

    loads
}

/// Load of each part relative to the ideal load `total_weight / num_parts`.
///
/// A value of 1.0 means the part carries exactly its share. When the total
/// weight is zero every part is reported as 0.0.
pub fn compute_balance_from_part_loads(num_parts: usize, part_loads: &[Weight]) -> Vec<f64> {
    let total_weight: Weight = part_loads.iter().sum();
    let ideal_part_weight = total_weight.to_f64().unwrap_or(0.0) / num_parts.to_f64().unwrap_or(1.0);
    if ideal_part_weight == 0.0 {
        warn!("total vertex weight is zero, every part is reported with a balance of 0");
        return vec![0.0; part_loads.len()];
    }

    part_loads
        .iter()
        .map(|part_weight| part_weight.to_f64().unwrap_or(0.0) / ideal_part_weight)
        .collect()
}

/// Compute imbalance after passing part loads.
pub fn compute_imbalance_from_part_loads(num_parts: usize, part_loads: &[Weight]) -> f64 {
    let total_weight: Weight = part_loads.iter().sum();

    let ideal_part_weight = total_weight.to_f64().unwrap_or(0.0) / num_parts.to_f64().unwrap_or(1.0);
    if ideal_part_weight == 0.0 {
        return 0.0;
    }

    part_loads
        .iter()
        .map(|part_weight| {
            let part_weight: f64 = part_weight.to_f64().unwrap_or(0.0);
            (part_weight - ideal_part_weight) / ideal_part_weight
        })
        .fold(0.0f64, |acc, dev| acc.max(dev))
}

/// Total vertex weight assigned to each of the `num_parts` leaf locations.
#[derive(Debug, Clone, Copy)]
pub struct PartitionWeights {
    pub num_parts: usize,
}

impl<'a> Evaluate<&'a Graph> for PartitionWeights {
    type Output = Vec<Weight>;
    type Error = Error;

    fn evaluate(&self, partition: &[usize], graph: &'a Graph) -> Result<Self::Output, Self::Error> {
        validate_partition(graph.len(), partition, self.num_parts)?;
        Ok(compute_parts_load(partition, self.num_parts, graph.vertex_weights()))
    }
}

/// Load of each leaf location relative to an even split of the graph weight.
#[derive(Debug, Clone, Copy)]
pub struct PartitionBalance {
    pub num_parts: usize,
}

impl<'a> Evaluate<&'a Graph> for PartitionBalance {
    type Output = Vec<f64>;
    type Error = Error;

    fn evaluate(&self, partition: &[usize], graph: &'a Graph) -> Result<Self::Output, Self::Error> {
        let part_loads = PartitionWeights { num_parts: self.num_parts }.evaluate(partition, graph)?;
        Ok(compute_balance_from_part_loads(self.num_parts, &part_loads))
    }
}

/// Aggregate view over the per-part balance and weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSummary {
    pub max_balance: f64,
    pub avg_balance: f64,
    pub min_balance: f64,
    /// Largest load a part may carry, `ceil((1 + epsilon) * total_weight / num_parts)`.
    pub l_max: f64,
    pub is_balanced_on_epsilon: bool,
    pub is_balanced_on_l_max: bool,
}

impl BalanceSummary {
    /// Summarize `balance` and `part_loads` as returned by [`PartitionBalance`]
    /// and [`PartitionWeights`] for the same partition.
    pub fn new(balance: &[f64], part_loads: &[Weight], epsilon: f64) -> Self {
        let num_parts = balance.len().max(1).to_f64().unwrap_or(1.0);
        let total_weight: Weight = part_loads.iter().sum();

        let (min_balance, max_balance) = match balance.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(b) => (b, b),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let avg_balance = balance.iter().sum::<f64>() / num_parts;
        let l_max = ((1.0 + epsilon) * (total_weight.to_f64().unwrap_or(0.0) / num_parts)).ceil();
        let heaviest = part_loads.iter().copied().max().unwrap_or(0);

        Self {
            max_balance,
            avg_balance,
            min_balance,
            l_max,
            is_balanced_on_epsilon: max_balance <= 1.0 + epsilon,
            is_balanced_on_l_max: heaviest.to_f64().unwrap_or(f64::INFINITY) <= l_max,
        }
    }
}
