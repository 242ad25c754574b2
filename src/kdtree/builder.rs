use log::debug;

use crate::error::{MosaicIndexError, Result};
use crate::kdtree::{AxisComparable, Element, KDTree};

/// Ranges at or below this length are kd-sorted on the calling thread by
/// [`KDTreeBuilder::finish_parallel`].
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

/// A builder to create a [`KDTree`].
///
/// ```
/// use mosaic_index::kdtree::{KDTreeBuilder, KDTreeIndex, SquaredEuclidean};
/// use mosaic_index::Rgb;
///
/// let mut builder = KDTreeBuilder::new(SquaredEuclidean::new());
/// builder.add(Rgb::new(0, 0, 0), "black.png");
/// builder.add(Rgb::new(255, 255, 255), "white.png");
/// let tree = builder.finish().unwrap();
///
/// let nearest = tree.nearest_neighbor(&Rgb::new(30, 20, 10)).unwrap();
/// assert_eq!(nearest.payload, "black.png");
/// ```
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<C: AxisComparable, T> {
    elements: Vec<Element<C::Point, T>>,
    comparator: C,
    allow_empty: bool,
}

impl<C: AxisComparable, T> KDTreeBuilder<C, T> {
    /// Create a new builder that orders and measures points with `comparator`.
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(comparator, 0)
    }

    /// Create a new builder with room for `num_items` elements.
    pub fn with_capacity(comparator: C, num_items: usize) -> Self {
        Self {
            elements: Vec::with_capacity(num_items),
            comparator,
            allow_empty: true,
        }
    }

    /// Whether [`finish`][Self::finish] accepts an empty element list.
    ///
    /// Defaults to `true`, yielding an empty tree whose queries fail with
    /// [`MosaicIndexError::EmptyTree`]. When `false`, finishing without elements fails up front
    /// with [`MosaicIndexError::EmptyInput`].
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Add a point and its payload. Returns the insertion index.
    pub fn add(&mut self, point: C::Point, payload: T) -> usize {
        self.add_element(Element::new(point, payload))
    }

    /// Add an element. Returns the insertion index.
    pub fn add_element(&mut self, element: Element<C::Point, T>) -> usize {
        let index = self.elements.len();
        self.elements.push(element);
        index
    }

    /// The number of elements added so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements were added.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume this builder, performing the k-d sort and generating a KDTree ready for queries.
    pub fn finish(self) -> Result<KDTree<C, T>> {
        check_input(self.elements.len(), self.allow_empty)?;
        Ok(self.into_tree())
    }

    /// Build without checking the `allow_empty` setting.
    pub(crate) fn into_tree(self) -> KDTree<C, T> {
        let Self {
            mut elements,
            comparator,
            ..
        } = self;

        sort(&mut elements, &comparator, 0);

        finished(elements, comparator)
    }

    /// Like [`finish`][Self::finish], but kd-sorts independent subtrees on the rayon thread
    /// pool. Produces the same tree shape as the serial build.
    #[cfg(feature = "rayon")]
    pub fn finish_parallel(self) -> Result<KDTree<C, T>>
    where
        C: Sync,
        C::Point: Send,
        T: Send,
    {
        let Self {
            mut elements,
            comparator,
            allow_empty,
        } = self;
        check_input(elements.len(), allow_empty)?;

        par_sort(&mut elements, &comparator, 0);

        Ok(finished(elements, comparator))
    }
}

impl<C: AxisComparable, T> Extend<Element<C::Point, T>> for KDTreeBuilder<C, T> {
    fn extend<I: IntoIterator<Item = Element<C::Point, T>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

fn check_input(num_items: usize, allow_empty: bool) -> Result<()> {
    if num_items == 0 && !allow_empty {
        return Err(MosaicIndexError::EmptyInput);
    }
    Ok(())
}

fn finished<C: AxisComparable, T>(
    elements: Vec<Element<C::Point, T>>,
    comparator: C,
) -> KDTree<C, T> {
    let tree = KDTree::from_sorted(elements, comparator);
    debug!(
        "built kd-tree with {} elements, height {}",
        tree.elements.len(),
        height(tree.elements.len())
    );
    tree
}

/// Median rank of a range of `len` elements: the exact middle for odd lengths, the upper middle
/// for even lengths.
#[inline]
pub(crate) fn median(len: usize) -> usize {
    len / 2
}

/// The number of nodes on the longest root-to-leaf path of a tree over `len` elements.
pub(crate) fn height(mut len: usize) -> usize {
    let mut height = 0;
    // the left half, `median(len)` long, is never shorter than the right
    while len > 0 {
        height += 1;
        len = median(len);
    }
    height
}

/// Recursively kd-sort `elements`: place the median along `axis` at its rank, so that
/// everything before it compares `<=` and everything after it `>=`, then sort both halves on
/// the next axis.
///
/// Splitting is by rank, not by value. Elements tied with the median on `axis` may land on
/// either side of it.
fn sort<C: AxisComparable, T>(elements: &mut [Element<C::Point, T>], comparator: &C, axis: usize) {
    if elements.len() <= 1 {
        return;
    }

    let (left, _, right) = partition(elements, comparator, axis);

    let next_axis = (axis + 1) % C::DIMENSIONS;
    sort(left, comparator, next_axis);
    sort(right, comparator, next_axis);
}

#[cfg(feature = "rayon")]
fn par_sort<C, T>(elements: &mut [Element<C::Point, T>], comparator: &C, axis: usize)
where
    C: AxisComparable + Sync,
    C::Point: Send,
    T: Send,
{
    if elements.len() <= PARALLEL_THRESHOLD {
        sort(elements, comparator, axis);
        return;
    }

    let (left, _, right) = partition(elements, comparator, axis);

    let next_axis = (axis + 1) % C::DIMENSIONS;
    rayon::join(
        || par_sort(left, comparator, next_axis),
        || par_sort(right, comparator, next_axis),
    );
}

#[inline]
#[allow(clippy::type_complexity)]
fn partition<'a, C: AxisComparable, T>(
    elements: &'a mut [Element<C::Point, T>],
    comparator: &C,
    axis: usize,
) -> (
    &'a mut [Element<C::Point, T>],
    &'a mut Element<C::Point, T>,
    &'a mut [Element<C::Point, T>],
) {
    let m = median(elements.len());
    elements.select_nth_unstable_by(m, |a, b| comparator.compare(axis, &a.point, &b.point))
}
