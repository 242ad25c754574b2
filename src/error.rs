use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicIndexError {
    /// A query was issued against a tree holding no elements.
    #[error("Cannot query an empty tree")]
    EmptyTree,

    /// A builder configured with `allow_empty(false)` was finished without elements.
    #[error("Cannot build a tree from an empty element list")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, MosaicIndexError>;
