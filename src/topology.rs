//! Hierarchical machine topologies and the distance between leaf locations.
//!
//! A topology is described by per-level fan-outs `h[0], .., h[s-1]` and a
//! distance table `d[0], .., d[s-1]`. Level 0 groups the leaves directly
//! (e.g. cores of a socket), level `s-1` is the outermost grouping (e.g. the
//! nodes of a cluster). The `k = h[0] * .. * h[s-1]` leaves are laid out so
//! that consecutive ids share as many levels as possible: the address digit at
//! level 0 varies fastest.
//!
//! Two leaves communicate at the outermost level at which their addresses
//! differ, and pay `d[level]` per unit of edge weight.

use std::str::FromStr;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::warn;
use crate::graph::Weight;

/// Address of a leaf location, one digit per hierarchy level.
pub type Address = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("hierarchy must have at least one level")]
    EmptyHierarchy,

    #[error("hierarchy level {level} has a fan-out of zero")]
    ZeroFanOut { level: usize },

    #[error("hierarchy has {hierarchy} levels but {distances} distances were given")]
    LengthMismatch { hierarchy: usize, distances: usize },

    #[error("{token:?} is not a non-negative integer")]
    InvalidNumber { token: String },

    #[error("the number of leaf locations overflows")]
    TooManyLocations,
}

/// A validated hierarchy together with its distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    hierarchy: Vec<usize>,
    distances: Vec<Weight>,
    // strides[l] = h[0] * .. * h[l-1], the number of leaves below one group of level l.
    strides: Vec<usize>,
    num_locations: usize,
}

impl Topology {
    pub fn new(hierarchy: Vec<usize>, distances: Vec<Weight>) -> Result<Self, TopologyError> {
        if hierarchy.is_empty() {
            return Err(TopologyError::EmptyHierarchy);
        }
        if hierarchy.len() != distances.len() {
            return Err(TopologyError::LengthMismatch {
                hierarchy: hierarchy.len(),
                distances: distances.len(),
            });
        }
        if let Some(level) = hierarchy.iter().position(|&h| h == 0) {
            return Err(TopologyError::ZeroFanOut { level });
        }

        let mut strides = Vec::with_capacity(hierarchy.len());
        let mut num_locations: usize = 1;
        for &fan_out in &hierarchy {
            strides.push(num_locations);
            num_locations = num_locations
                .checked_mul(fan_out)
                .ok_or(TopologyError::TooManyLocations)?;
        }

        if distances.windows(2).any(|w| w[0] > w[1]) {
            warn!(?distances, "distances decrease towards outer hierarchy levels");
        }

        Ok(Self { hierarchy, distances, strides, num_locations })
    }

    /// Parse colon separated lists such as `4:8:6` and `1:10:100`.
    ///
    /// Empty entries (`4::8`) are ignored.
    pub fn from_colon_lists(hierarchy: &str, distances: &str) -> Result<Self, TopologyError> {
        Self::new(parse_colon_list(hierarchy)?, parse_colon_list(distances)?)
    }

    /// Number of hierarchy levels.
    pub fn depth(&self) -> usize {
        self.hierarchy.len()
    }

    /// Number of leaf locations `k`.
    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn hierarchy(&self) -> &[usize] {
        &self.hierarchy
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    #[inline]
    fn digit(&self, location: usize, level: usize) -> usize {
        (location / self.strides[level]) % self.hierarchy[level]
    }

    /// Address of a leaf location.
    ///
    /// Starting from the whole range `[0, k)`, the range is split into
    /// `h[s-1]` equal blocks, the block holding `location` gives the digit of
    /// level `s-1`, and the search continues inside that block with the next
    /// inner level. Since every block has exactly `strides[level]` leaves, this
    /// reduces to a mixed-radix decomposition of `location`.
    pub fn locate(&self, location: usize) -> Address {
        debug_assert!(location < self.num_locations);
        (0..self.depth()).map(|level| self.digit(location, level)).collect()
    }

    /// Outermost hierarchy level at which the addresses of `a` and `b` differ.
    ///
    /// Returns `None` when both ids denote the same leaf.
    #[inline]
    pub fn divergence_level(&self, a: usize, b: usize) -> Option<usize> {
        if a == b {
            return None;
        }
        (0..self.depth()).rev().find(|&level| self.digit(a, level) != self.digit(b, level))
    }

    /// Communication cost between two leaves and the level it is charged to.
    ///
    /// `None` when `a == b`: placing both ends on the same leaf costs nothing.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> Option<(Weight, usize)> {
        self.divergence_level(a, b)
            .map(|level| (self.distances[level], level))
    }
}

/// Values of a colon separated list, empty entries are skipped.
fn parse_colon_list<T: FromStr>(list: &str) -> Result<Vec<T>, TopologyError> {
    list.split(':')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<T>().map_err(|_| TopologyError::InvalidNumber { token: token.to_string() })
        })
        .collect()
}
