use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index fell outside of a collection after resolving negative indexes from the end.
///
/// # Examples
/// ```
/// # use original::error::IndexOutOfBounds;
/// let err = IndexOutOfBounds { index: -4, len: 3 };
/// assert_eq!(err.to_string(), "Index -4 out of bounds for collection with 3 elements!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index as it was requested.
    pub index: i64,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity overflowed `usize` or exceeded `isize::MAX` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A cursor was dereferenced while positioned before the first or after the last element.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("cursor is positioned outside of its container")]
pub struct OutOfBoundError;

/// A cursor was dereferenced while it doesn't reference any node.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("cursor doesn't reference a node")]
pub struct NullPointerError;

/// The receiver deliberately doesn't support the requested operation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unsupported operation: {operation}")]
pub struct UnsupportedError {
    /// The name of the refused operation.
    pub operation: &'static str,
}

/// An element was requested from an empty container.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("no element in container")]
pub struct NoElementError;

/// Every way a cursor operation can fail.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum CursorError {
    /// See [`OutOfBoundError`].
    OutOfBound(OutOfBoundError),
    /// See [`NullPointerError`].
    NullPointer(NullPointerError),
    /// See [`UnsupportedError`].
    Unsupported(UnsupportedError),
}
