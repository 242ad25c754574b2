use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// The number of coordinate axes of every indexed point.
pub const DIMENSIONS: usize = 3;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Distances are always
/// evaluated in `f64`, so narrow channel types such as `u8` never overflow when squared.
pub trait IndexableNum:
    private::Sealed + Num + NumCast + ToPrimitive + PartialOrd + Debug + Copy + Send + Sync + Bounded
{
    /// Widen this coordinate for metric arithmetic.
    #[inline]
    fn to_distance(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl IndexableNum for i8 {}
impl IndexableNum for u8 {}
impl IndexableNum for i16 {}
impl IndexableNum for u16 {}
impl IndexableNum for i32 {}
impl IndexableNum for u32 {}
impl IndexableNum for f32 {}
impl IndexableNum for f64 {}

/// A point with three coordinates.
///
/// Axis arguments are reduced modulo [`DIMENSIONS`], so callers can pass a tree depth
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point3<N: IndexableNum>(pub [N; DIMENSIONS]);

impl<N: IndexableNum> Point3<N> {
    /// Create a point from its three coordinates.
    pub fn new(a: N, b: N, c: N) -> Self {
        Self([a, b, c])
    }

    /// The coordinate on `axis % DIMENSIONS`.
    #[inline]
    pub fn coord(&self, axis: usize) -> N {
        self.0[axis % DIMENSIONS]
    }

    /// All coordinates in axis order.
    pub fn coords(&self) -> &[N; DIMENSIONS] {
        &self.0
    }
}

impl<N: IndexableNum> From<[N; DIMENSIONS]> for Point3<N> {
    fn from(value: [N; DIMENSIONS]) -> Self {
        Self(value)
    }
}

impl<N: IndexableNum> From<(N, N, N)> for Point3<N> {
    fn from((a, b, c): (N, N, N)) -> Self {
        Self([a, b, c])
    }
}

/// A representative colour with 8-bit red, green and blue channels.
pub type Rgb = Point3<u8>;

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
