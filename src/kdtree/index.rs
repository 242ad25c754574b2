use crate::kdtree::{AxisComparable, Element, KDTreeBuilder};

/// An owned, immutable KDTree.
///
/// The elements are stored in a single buffer in kd-sorted order: the root sits at the median
/// rank of the whole buffer, and its left and right subtrees occupy the ranges before and after
/// it, recursively. There are no child pointers.
///
/// Usually this will be created via [`KDTree::build`] or a [`KDTreeBuilder`]. Queries live on
/// the [`KDTreeIndex`][crate::kdtree::KDTreeIndex] trait.
#[derive(Debug, Clone)]
pub struct KDTree<C: AxisComparable, T> {
    pub(crate) elements: Vec<Element<C::Point, T>>,
    pub(crate) comparator: C,
}

impl<C: AxisComparable, T> KDTree<C, T> {
    /// Build a balanced tree over `elements`.
    ///
    /// An empty list yields an empty tree; use [`KDTreeBuilder::allow_empty`] to reject it
    /// instead.
    pub fn build<I>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = Element<C::Point, T>>,
    {
        let mut builder = KDTreeBuilder::new(comparator);
        builder.extend(elements);
        builder.into_tree()
    }

    pub(crate) fn from_sorted(elements: Vec<Element<C::Point, T>>, comparator: C) -> Self {
        Self {
            elements,
            comparator,
        }
    }

    /// Borrow this tree as a [`KDTreeRef`], which is `Copy` and cheap to hand to other threads.
    pub fn as_ref(&self) -> KDTreeRef<'_, C, T> {
        KDTreeRef {
            elements: &self.elements,
            comparator: &self.comparator,
        }
    }

    /// Release the kd-sorted elements.
    pub fn into_elements(self) -> Vec<Element<C::Point, T>> {
        self.elements
    }
}

/// A reference onto a [`KDTree`].
#[derive(Debug)]
pub struct KDTreeRef<'a, C: AxisComparable, T> {
    pub(crate) elements: &'a [Element<C::Point, T>],
    pub(crate) comparator: &'a C,
}

impl<C: AxisComparable, T> Clone for KDTreeRef<'_, C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: AxisComparable, T> Copy for KDTreeRef<'_, C, T> {}
