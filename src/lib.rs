#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{MosaicIndexError, Result};
pub use r#type::{IndexableNum, Point3, Rgb, DIMENSIONS};
