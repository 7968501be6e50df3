// This file has code from https://github.com/LIHPC-Computational-Geometry/coupe (See NOTICE.md)
use std::iter::{Cloned, Zip};
use std::slice::Iter;
use thiserror::Error;

/// Vertex and edge weights, as well as every metric derived from them.
pub type Weight = u64;

/// Violations of the compressed adjacency invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("offset array must start at 0 and hold n + 1 = {expected} entries, got {actual}")]
    BadOffsets { expected: usize, actual: usize },

    #[error("offsets are not monotonically non-decreasing at vertex {vertex}")]
    NonMonotonic { vertex: usize },

    #[error("last offset is {last} but {half_edges} half-edges are stored")]
    OffsetOverrun { last: usize, half_edges: usize },

    #[error("edge targets ({targets}) and edge weights ({weights}) differ in length")]
    WeightLenMismatch { targets: usize, weights: usize },

    #[error("half-edge {index} points to vertex {target} but the graph has {n} vertices")]
    TargetOutOfRange { index: usize, target: usize, n: usize },

    #[error("total vertex or edge weight does not fit into 64 bits")]
    WeightOverflow,
}

/// Struct that represents an undirected weighted graph.
///
/// The adjacency is stored in CSR form: the half-edges of vertex `u` occupy
/// `targets[neighborhood_start[u]..neighborhood_start[u + 1]]`, with their
/// weights at the same positions in `edge_weights`. Every undirected edge
/// `{u, v}` is stored twice, once from each endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_weights: Vec<Weight>,
    neighborhood_start: Vec<usize>,
    targets: Vec<usize>,
    edge_weights: Vec<Weight>,
    total_vertex_weight: Weight,
    total_edge_weight: Weight,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {

    /// Create a new graph without any vertex.
    pub fn new() -> Self {
        Self {
            vertex_weights: Vec::new(),
            neighborhood_start: vec![0],
            targets: Vec::new(),
            edge_weights: Vec::new(),
            total_vertex_weight: 0,
            total_edge_weight: 0,
        }
    }

    /// Build a graph from raw CSR arrays, checking every structural invariant.
    pub fn from_csr(
        vertex_weights: Vec<Weight>,
        neighborhood_start: Vec<usize>,
        targets: Vec<usize>,
        edge_weights: Vec<Weight>,
    ) -> Result<Self, StructureError> {
        let n = vertex_weights.len();
        if neighborhood_start.len() != n + 1 || neighborhood_start[0] != 0 {
            return Err(StructureError::BadOffsets {
                expected: n + 1,
                actual: neighborhood_start.len(),
            });
        }
        if let Some(vertex) = neighborhood_start.windows(2).position(|w| w[0] > w[1]) {
            return Err(StructureError::NonMonotonic { vertex });
        }
        if targets.len() != edge_weights.len() {
            return Err(StructureError::WeightLenMismatch {
                targets: targets.len(),
                weights: edge_weights.len(),
            });
        }
        if neighborhood_start[n] != targets.len() {
            return Err(StructureError::OffsetOverrun {
                last: neighborhood_start[n],
                half_edges: targets.len(),
            });
        }
        if let Some(index) = targets.iter().position(|&t| t >= n) {
            return Err(StructureError::TargetOutOfRange { index, target: targets[index], n });
        }

        let total_vertex_weight = vertex_weights
            .iter()
            .try_fold(0 as Weight, |acc, &w| acc.checked_add(w))
            .ok_or(StructureError::WeightOverflow)?;
        // Half-edge weights are summed wide, only the halved total has to fit.
        let total_edge_weight = edge_weights.iter().map(|&w| u128::from(w)).sum::<u128>() / 2;
        let total_edge_weight = Weight::try_from(total_edge_weight).map_err(|_| StructureError::WeightOverflow)?;
        Ok(Self {
            vertex_weights,
            neighborhood_start,
            targets,
            edge_weights,
            total_vertex_weight,
            total_edge_weight,
        })
    }

    /// Build a graph from a list of undirected edges `(u, v, weight)`.
    ///
    /// Each edge is inserted from both endpoints. The number of vertices is
    /// given by the length of `vertex_weights`.
    pub fn from_edges(
        vertex_weights: Vec<Weight>,
        edges: &[(usize, usize, Weight)],
    ) -> Result<Self, StructureError> {
        let n = vertex_weights.len();
        if let Some(index) = edges.iter().position(|&(u, v, _)| u >= n || v >= n) {
            let (u, v, _) = edges[index];
            return Err(StructureError::TargetOutOfRange { index, target: u.max(v), n });
        }

        // Counting sort of the half-edges by their source vertex.
        let mut neighborhood_start = vec![0usize; n + 1];
        for &(u, v, _) in edges {
            neighborhood_start[u + 1] += 1;
            neighborhood_start[v + 1] += 1;
        }
        for vertex in 0..n {
            neighborhood_start[vertex + 1] += neighborhood_start[vertex];
        }

        let mut next_slot = neighborhood_start.clone();
        let mut targets = vec![0; 2 * edges.len()];
        let mut edge_weights = vec![0; 2 * edges.len()];
        for &(u, v, w) in edges {
            for (from, to) in [(u, v), (v, u)] {
                let slot = next_slot[from];
                targets[slot] = to;
                edge_weights[slot] = w;
                next_slot[from] += 1;
            }
        }

        Self::from_csr(vertex_weights, neighborhood_start, targets, edge_weights)
    }

    /// The number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertex_weights.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.targets.len() / 2
    }

    /// The number of stored half-edges, twice the number of undirected edges.
    pub fn num_half_edges(&self) -> usize {
        self.targets.len()
    }

    pub fn vertex_weight(&self, vertex: usize) -> Weight {
        self.vertex_weights[vertex]
    }

    pub fn vertex_weights(&self) -> &[Weight] {
        &self.vertex_weights
    }

    /// Sum of all vertex weights.
    pub fn total_vertex_weight(&self) -> Weight {
        self.total_vertex_weight
    }

    /// Sum of all undirected edge weights, each edge counted once.
    pub fn total_edge_weight(&self) -> Weight {
        self.total_edge_weight
    }

    /// The CSR offsets, `n + 1` entries.
    pub fn neighborhood_start(&self) -> &[usize] {
        &self.neighborhood_start
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.neighborhood_start[vertex + 1] - self.neighborhood_start[vertex]
    }

    /// An iterator over the neighbors of the given vertex and the weights of the connecting edges.
    pub fn neighbors(&self, vertex: usize) -> Zip<Cloned<Iter<'_, usize>>, Cloned<Iter<'_, Weight>>> {
        let start = self.neighborhood_start[vertex];
        let end = self.neighborhood_start[vertex + 1];
        self.targets[start..end].iter().cloned().zip(self.edge_weights[start..end].iter().cloned())
    }

    /// The weighted edge cut of a partition.
    ///
    /// Given a partition and a weighted graph, the edge cut of a partition is
    /// defined as the total weight of the edges that link vertices of
    /// different parts.
    ///
    /// # Example
    ///
    /// A partition with two parts (0 and 1)
    /// ```text,ignore
    ///          0
    ///    1*──┆─*────* 0
    ///    ╱ ╲ ┆╱    ╱
    ///  1*  1*┆ <┈┈╱┈┈┈ Dotted line passes through edges that contribute to edge cut.
    ///    ╲ ╱ ┆   ╱     If all edges have a weight of 1 then edge_cut = 3
    ///    1*  ┆╲ ╱
    ///          * 0
    /// ```
    pub fn edge_cut(&self, partition: &[usize]) -> Weight
    {
        debug_assert_eq!(self.len(), partition.len());

        let cut_twice: u128 = self.neighborhood_start
            .iter()
            .zip(&self.neighborhood_start[1..])
            .enumerate()
            .map(|(vertex, (start, end))| {
                let neighbors = &self.targets[*start..*end];
                let edge_weights = &self.edge_weights[*start..*end];
                let vertex_part = partition[vertex];
                neighbors
                    .iter()
                    .zip(edge_weights)
                    .filter(|(neighbor, _edge_weight)| vertex_part != partition[**neighbor])
                    .map(|(_neighbor, edge_weight)| u128::from(*edge_weight))
                    .sum::<u128>()
            })
            .sum();
        // The cut never exceeds the total edge weight, which fits.
        (cut_twice / 2) as Weight
    }
}
