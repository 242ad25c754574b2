//! Utilities to traverse the KDTree structure.

use std::fmt;

use crate::kdtree::builder::median;
use crate::kdtree::{AxisComparable, Element, KDTreeRef};

/// A non-empty subtree of a KDTree.
///
/// An empty subtree has no `Node`: [`left_child`][Node::left_child] and
/// [`right_child`][Node::right_child] return `None` for it.
pub struct Node<'a, C: AxisComparable, T> {
    /// The tree that this node is a reference onto
    tree: KDTreeRef<'a, C, T>,

    /// Start of this subtree's range in the kd-sorted elements, inclusive
    start: usize,
    /// End of this subtree's range, exclusive
    end: usize,

    depth: usize,
}

impl<C: AxisComparable, T> Clone for Node<'_, C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: AxisComparable, T> Copy for Node<'_, C, T> {}

impl<C: AxisComparable, T> fmt::Debug for Node<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'a, C: AxisComparable, T> Node<'a, C, T> {
    pub(crate) fn from_root(tree: KDTreeRef<'a, C, T>) -> Option<Self> {
        Self::new(tree, 0, tree.elements.len(), 0)
    }

    fn new(tree: KDTreeRef<'a, C, T>, start: usize, end: usize, depth: usize) -> Option<Self> {
        (start < end).then_some(Self {
            tree,
            start,
            end,
            depth,
        })
    }

    /// Note: this is the index into the kd-sorted elements, not the insertion index.
    #[inline]
    pub(crate) fn middle_index(&self) -> usize {
        self.start + median(self.end - self.start)
    }

    /// The element stored at this node.
    pub fn value(&self) -> &'a Element<C::Point, T> {
        &self.tree.elements[self.middle_index()]
    }

    /// Distance from the root, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis this node splits its children over.
    pub fn axis(&self) -> usize {
        self.depth % C::DIMENSIONS
    }

    /// The number of elements in this subtree, including this node's own.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The child holding elements ranked below this node on [`axis`][Self::axis].
    pub fn left_child(&self) -> Option<Node<'a, C, T>> {
        Self::new(self.tree, self.start, self.middle_index(), self.depth + 1)
    }

    /// The child holding elements ranked above this node on [`axis`][Self::axis].
    pub fn right_child(&self) -> Option<Node<'a, C, T>> {
        Self::new(self.tree, self.middle_index() + 1, self.end, self.depth + 1)
    }

    /// Returns `true` if both children are empty.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.len() == 1
    }

    /// Returns `true` if this node has at least one child.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}
