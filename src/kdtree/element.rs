/// A point stored in the tree together with an opaque payload.
///
/// The payload is typically a handle to a tile image. It is carried through construction and
/// returned by queries unchanged; the tree only ever looks at `point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<P, T> {
    /// The coordinates used for ordering and distance.
    pub point: P,
    /// Caller data returned verbatim from queries.
    pub payload: T,
}

impl<P, T> Element<P, T> {
    /// Pair a point with its payload.
    pub fn new(point: P, payload: T) -> Self {
        Self { point, payload }
    }

    /// Split back into point and payload.
    pub fn into_parts(self) -> (P, T) {
        (self.point, self.payload)
    }
}

impl<P, T> From<(P, T)> for Element<P, T> {
    fn from((point, payload): (P, T)) -> Self {
        Self::new(point, payload)
    }
}
