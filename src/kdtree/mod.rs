//! An implementation of an immutable, balanced K-D Tree with exact nearest neighbor search.

#![warn(missing_docs)]

mod builder;
mod comparator;
mod element;
mod index;
mod r#trait;
pub mod traversal;

pub use builder::KDTreeBuilder;
pub use comparator::{AxisComparable, PlaneBound, SquaredEuclidean};
pub use element::Element;
pub use index::{KDTree, KDTreeRef};
pub use r#trait::KDTreeIndex;
