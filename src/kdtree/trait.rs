use std::cmp::Ordering;

use log::trace;
use tinyvec::TinyVec;

use crate::error::{MosaicIndexError, Result};
use crate::kdtree::builder::{height, median};
use crate::kdtree::traversal::Node;
use crate::kdtree::{AxisComparable, Element, KDTree, KDTreeRef};

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<C: AxisComparable, T>: Sized {
    /// The elements of this tree in kd-sorted order.
    fn elements(&self) -> &[Element<C::Point, T>];

    /// The comparator this tree was built with.
    fn comparator(&self) -> &C;

    /// The number of elements in this KDTree
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns `true` if this KDTree holds no elements
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// The number of nodes on the longest path from the root down to a leaf.
    fn height(&self) -> usize {
        height(self.len())
    }

    /// Access the root node of the KDTree for manual traversal. `None` for an empty tree.
    fn root(&self) -> Option<Node<'_, C, T>> {
        Node::from_root(KDTreeRef {
            elements: self.elements(),
            comparator: self.comparator(),
        })
    }

    /// Find the element closest to `query`.
    ///
    /// When several elements are equally close, the first one met by the traversal wins: the
    /// root before its descendants, and the subtree on the query's side of a split before the
    /// other one.
    ///
    /// Returns [`MosaicIndexError::EmptyTree`] if the tree has no elements.
    fn nearest_neighbor(&self, query: &C::Point) -> Result<&Element<C::Point, T>> {
        self.nearest_neighbor_with_distance(query)
            .map(|(element, _)| element)
    }

    /// Find the element closest to `query`, together with its distance to `query`.
    fn nearest_neighbor_with_distance(
        &self,
        query: &C::Point,
    ) -> Result<(&Element<C::Point, T>, C::Distance)> {
        let elements = self.elements();
        let comparator = self.comparator();
        if elements.is_empty() {
            return Err(MosaicIndexError::EmptyTree);
        }

        let mut best = median(elements.len());
        let mut best_dist = comparator.distance(&elements[best].point, query);
        let mut visited = 0;

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[Pending; 32]> = TinyVec::new();
        stack.push(Pending {
            start: 0,
            end: elements.len(),
            depth: 0,
            plane: None,
        });

        // depth-first: the near side of every split is exhausted before its far side is popped
        while let Some(pending) = stack.pop() {
            // far side: skip it if the splitting plane is already farther than the best match
            if let Some((splitter, axis)) = pending.plane {
                let bound = comparator.distance_to_plane(axis, query, &elements[splitter].point);
                if bound > best_dist {
                    continue;
                }
            }

            visited += 1;
            let m = pending.start + median(pending.end - pending.start);
            let value = &elements[m];
            let dist = comparator.distance(&value.point, query);
            if dist < best_dist {
                best = m;
                best_dist = dist;
            }

            let axis = pending.depth % C::DIMENSIONS;
            let left = (pending.start, m);
            let right = (m + 1, pending.end);
            let (near, far) = match comparator.compare(axis, query, &value.point) {
                Ordering::Less => (left, right),
                Ordering::Equal | Ordering::Greater => (right, left),
            };

            // Note: these are pushed in backwards order to what gets popped
            if far.0 < far.1 {
                stack.push(Pending {
                    start: far.0,
                    end: far.1,
                    depth: pending.depth + 1,
                    plane: Some((m, axis)),
                });
            }
            if near.0 < near.1 {
                stack.push(Pending {
                    start: near.0,
                    end: near.1,
                    depth: pending.depth + 1,
                    plane: None,
                });
            }
        }

        trace!(
            "nearest neighbor at rank {} of {} (distance {:?}), {} nodes visited",
            best,
            elements.len(),
            best_dist,
            visited
        );
        Ok((&elements[best], best_dist))
    }

    /// Find the nearest element for each query, in query order.
    fn nearest_neighbors(&self, queries: &[C::Point]) -> Result<Vec<&Element<C::Point, T>>> {
        queries
            .iter()
            .map(|query| self.nearest_neighbor(query))
            .collect()
    }

    /// Like [`nearest_neighbors`][Self::nearest_neighbors], but runs the queries on the rayon
    /// thread pool. The tree is never mutated, so no locking is involved.
    #[cfg(feature = "rayon")]
    fn par_nearest_neighbors(&self, queries: &[C::Point]) -> Result<Vec<&Element<C::Point, T>>>
    where
        Self: Sync,
        C::Point: Sync,
        T: Sync,
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        queries
            .par_iter()
            .map(|query| self.nearest_neighbor(query))
            .collect()
    }
}

/// A subtree range waiting on the traversal stack.
#[derive(Debug, Clone, Copy, Default)]
struct Pending {
    start: usize,
    end: usize,
    depth: usize,
    /// For a far side: the kd-sorted index of the node it was split off from, and that node's
    /// axis. The plane bound is evaluated when popped, after the near side is done.
    plane: Option<(usize, usize)>,
}

impl<C: AxisComparable, T> KDTreeIndex<C, T> for KDTree<C, T> {
    fn elements(&self) -> &[Element<C::Point, T>] {
        &self.elements
    }

    fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<C: AxisComparable, T> KDTreeIndex<C, T> for KDTreeRef<'_, C, T> {
    fn elements(&self) -> &[Element<C::Point, T>] {
        self.elements
    }

    fn comparator(&self) -> &C {
        self.comparator
    }
}
