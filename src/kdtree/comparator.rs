//! The domain knowledge a [`KDTree`][crate::kdtree::KDTree] needs about its points.
//!
//! The tree itself never looks inside a point. Construction orders points along one axis at a
//! time with [`AxisComparable::compare`], and the nearest neighbor search ranks candidates with
//! [`AxisComparable::distance`] and prunes subtrees with [`AxisComparable::distance_to_plane`].

use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::r#type::{IndexableNum, Point3, DIMENSIONS};

/// Per-axis ordering and metric over a point type.
///
/// Implementations must uphold two contracts for the tree to return exact results:
///
/// - For every fixed axis, `compare` is a total order (consistent, antisymmetric, transitive).
/// - `distance_to_plane(axis, query, reference)` never exceeds the distance from `query` to
///   any point on the far side of the hyperplane through `reference` at `axis`. An
///   overestimate makes the search prune subtrees that may hold the true nearest neighbor.
pub trait AxisComparable {
    /// The point type being ordered and measured.
    type Point;

    /// The value returned by the metric. Only its ordering matters, so monotonic transforms of
    /// a true distance (such as the squared Euclidean distance) are fine.
    type Distance: PartialOrd + Copy + Debug;

    /// The number of axes cycled through by tree depth.
    const DIMENSIONS: usize;

    /// Order two points by their coordinate on `axis % DIMENSIONS`.
    fn compare(&self, axis: usize, a: &Self::Point, b: &Self::Point) -> Ordering;

    /// The full distance between two points.
    fn distance(&self, a: &Self::Point, b: &Self::Point) -> Self::Distance;

    /// A lower bound on the distance from `query` to anything across the splitting plane through
    /// `reference` at `axis % DIMENSIONS`.
    fn distance_to_plane(
        &self,
        axis: usize,
        query: &Self::Point,
        reference: &Self::Point,
    ) -> Self::Distance;
}

/// How [`SquaredEuclidean`] bounds the distance to a splitting plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneBound {
    /// `(query[axis] - reference[axis])^2`. A true lower bound: searches are exact.
    #[default]
    AxisOnly,

    /// The full squared distance between `query` and `reference`.
    ///
    /// This folds the non-split coordinates into the bound and therefore overestimates it.
    /// Searches using it may skip the subtree holding the nearest neighbor and silently return a
    /// farther element. Only useful to reproduce results of tools that bound this way.
    FullPoint,
}

/// Squared Euclidean distance over [`Point3`] coordinates, evaluated in `f64`.
///
/// ```
/// use mosaic_index::kdtree::{AxisComparable, SquaredEuclidean};
/// use mosaic_index::Rgb;
///
/// let metric = SquaredEuclidean::<u8>::new();
/// let a = Rgb::new(6, 6, 6);
/// let b = Rgb::new(10, 10, 10);
/// assert_eq!(metric.distance(&a, &b), 48.0);
/// assert_eq!(metric.distance_to_plane(0, &a, &b), 16.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SquaredEuclidean<N: IndexableNum> {
    plane_bound: PlaneBound,
    phantom: PhantomData<N>,
}

impl<N: IndexableNum> SquaredEuclidean<N> {
    /// A metric using the exact [`PlaneBound::AxisOnly`] pruning bound.
    pub fn new() -> Self {
        Self::with_plane_bound(PlaneBound::AxisOnly)
    }

    /// A metric using the given pruning bound.
    pub fn with_plane_bound(plane_bound: PlaneBound) -> Self {
        Self {
            plane_bound,
            phantom: PhantomData,
        }
    }

    /// The pruning bound in use.
    pub fn plane_bound(&self) -> PlaneBound {
        self.plane_bound
    }
}

impl<N: IndexableNum> Default for SquaredEuclidean<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: IndexableNum> AxisComparable for SquaredEuclidean<N> {
    type Point = Point3<N>;
    type Distance = f64;

    const DIMENSIONS: usize = DIMENSIONS;

    /// Incomparable coordinates (NaN) compare as equal.
    #[inline]
    fn compare(&self, axis: usize, a: &Point3<N>, b: &Point3<N>) -> Ordering {
        a.coord(axis)
            .partial_cmp(&b.coord(axis))
            .unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn distance(&self, a: &Point3<N>, b: &Point3<N>) -> f64 {
        a.coords()
            .iter()
            .zip(b.coords())
            .map(|(&x, &y)| sq_axis_dist(x, y))
            .sum()
    }

    #[inline]
    fn distance_to_plane(&self, axis: usize, query: &Point3<N>, reference: &Point3<N>) -> f64 {
        match self.plane_bound {
            PlaneBound::AxisOnly => sq_axis_dist(query.coord(axis), reference.coord(axis)),
            PlaneBound::FullPoint => self.distance(query, reference),
        }
    }
}

#[inline]
fn sq_axis_dist<N: IndexableNum>(a: N, b: N) -> f64 {
    let d = a.to_distance() - b.to_distance();
    d * d
}
