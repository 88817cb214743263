//! Distance- and area-weighted averaging for a single bad node.
//!
//! A bad node takes the weighted mean of good values found, in order:
//!
//! 1. within the geodesic search radius,
//! 2. among its immediate neighbors, if the radius held no good node,
//! 3. otherwise the value is `0.0`.
//!
//! Each contributing node `j` at distance `d` has weight `area[j] / d²`,
//! with `d` floored at [`DISTANCE_TOLERANCE`].

use crate::classify::ClassificationMask;
use crate::surface::DilationSurface;

/// Distances at or below this use the floor instead of `d` itself.
pub const DISTANCE_TOLERANCE: f64 = 1e-5;

/// Weight of a good node with the given area at the given distance.
///
/// # Example
///
/// ```
/// use mesh_dilate::{contribution_weight, DISTANCE_TOLERANCE};
///
/// assert!((contribution_weight(2.0, 2.0) - 0.5).abs() < 1e-12);
///
/// // Near-coincident nodes are clamped
/// let clamped = 1.0 / (DISTANCE_TOLERANCE * DISTANCE_TOLERANCE);
/// assert!((contribution_weight(1.0, 1e-7) - clamped).abs() < 1.0);
/// ```
#[inline]
#[must_use]
pub fn contribution_weight(area: f64, distance: f64) -> f64 {
    let d = if distance > DISTANCE_TOLERANCE {
        distance
    } else {
        DISTANCE_TOLERANCE
    };
    area / (d * d)
}

/// How a bad node's value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTier {
    /// Good nodes within the search radius.
    Radius,
    /// Good immediate neighbors.
    Neighbors,
    /// No good node reachable; value is zero.
    Zero,
}

/// Dilated value of one bad node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFill {
    /// The new value.
    pub value: f64,
    /// Which tier produced it.
    pub tier: FillTier,
}

#[derive(Debug, Default)]
struct WeightedMean {
    total_weight: f64,
    weighted_sum: f64,
}

impl WeightedMean {
    fn add(&mut self, value: f64, weight: f64) {
        self.total_weight += weight;
        self.weighted_sum += value * weight;
    }

    #[allow(clippy::float_cmp)]
    fn mean(&self) -> Option<f64> {
        if self.total_weight == 0.0 {
            None
        } else {
            Some(self.weighted_sum / self.total_weight)
        }
    }
}

/// Computes dilated values for the bad nodes of one column.
///
/// Reads only the input column values, never previously filled ones,
/// so nodes can be filled in any order or concurrently.
pub struct WeightedAverager<'a, S: ?Sized> {
    surface: &'a S,
    mask: &'a ClassificationMask,
    values: &'a [f64],
    distance: f64,
}

impl<'a, S: DilationSurface + ?Sized> WeightedAverager<'a, S> {
    /// Create an averager over one column.
    ///
    /// `mask` and `values` must both have one entry per surface node.
    #[must_use]
    pub const fn new(
        surface: &'a S,
        mask: &'a ClassificationMask,
        values: &'a [f64],
        distance: f64,
    ) -> Self {
        Self {
            surface,
            mask,
            values,
            distance,
        }
    }

    /// Dilated value for `node`.
    ///
    /// The caller decides which nodes need filling; good nodes are normally
    /// passed through without calling this.
    ///
    /// # Panics
    ///
    /// Panics if the surface reports a node index outside the column, or
    /// returns a candidate distance list of the wrong length.
    #[must_use]
    pub fn fill(&self, node: usize) -> NodeFill {
        if let Some(value) = self.from_radius(node) {
            return NodeFill {
                value,
                tier: FillTier::Radius,
            };
        }
        if let Some(value) = self.from_neighbors(node) {
            return NodeFill {
                value,
                tier: FillTier::Neighbors,
            };
        }
        NodeFill {
            value: 0.0,
            tier: FillTier::Zero,
        }
    }

    fn from_radius(&self, node: usize) -> Option<f64> {
        let within = self.surface.nodes_within(node, self.distance);
        self.accumulate(node, within)
    }

    fn from_neighbors(&self, node: usize) -> Option<f64> {
        let mut candidates = self.surface.neighbors_of(node);
        // The node itself is always bad, so it never contributes
        candidates.push(node);
        let distances = self.surface.distances_to(node, &candidates);
        assert_eq!(
            distances.len(),
            candidates.len(),
            "surface returned {} distances for {} candidates",
            distances.len(),
            candidates.len()
        );
        self.accumulate(node, candidates.into_iter().zip(distances))
    }

    fn accumulate(
        &self,
        node: usize,
        contributors: impl IntoIterator<Item = (usize, f64)>,
    ) -> Option<f64> {
        let mut mean = WeightedMean::default();
        for (other, distance) in contributors {
            if other == node || !self.mask.is_good(other) || !distance.is_finite() {
                continue;
            }
            let weight = contribution_weight(self.surface.node_area(other), distance);
            mean.add(self.values[other], weight);
        }
        mean.mean()
    }
}
