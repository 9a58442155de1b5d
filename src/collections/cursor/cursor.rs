use super::CursorIter;
use crate::traits::Comparable;
use crate::util::error::CursorError;

/// A position within a container, able to read and overwrite the element it refers to and to move
/// through the container.
///
/// Reading returns a copy of the element. Cursors can be cloned freely and several of them may write
/// to the same container, so handing out references that outlive a single call would allow aliasing
/// mutation.
///
/// A cursor is _valid_ when it refers to a live element. Moving past either end is allowed and simply
/// leaves the cursor invalid; dereferencing an invalid cursor is an error.
///
/// # Example
/// ```
/// # use original::collections::contiguous::Array;
/// # use original::collections::cursor::Cursor;
/// let mut arr = Array::from([1, 2, 3, 4].into_iter());
/// let mut cursor = arr.begins();
/// while cursor.is_valid() {
///     let value = cursor.get().unwrap();
///     cursor.set(value * 10).unwrap();
///     cursor.next().unwrap();
/// }
/// assert_eq!(&*arr, &[10, 20, 30, 40]);
/// ```
pub trait Cursor: Clone {
    type Item;

    /// Returns true if the cursor currently refers to an element.
    fn is_valid(&self) -> bool;

    /// Returns a copy of the element under the cursor.
    fn get(&self) -> Result<Self::Item, CursorError>
    where
        Self::Item: Clone;

    /// Overwrites the element under the cursor, returning the previous value.
    fn replace(&mut self, value: Self::Item) -> Result<Self::Item, CursorError>;

    /// Moves the cursor one step towards the end.
    fn next(&mut self) -> Result<(), CursorError>;

    /// Moves the cursor one step towards the beginning.
    fn prev(&mut self) -> Result<(), CursorError>;

    /// Returns true if a call to [`next`](Cursor::next) would land on a valid element.
    fn has_next(&self) -> bool;

    /// Returns true if a call to [`prev`](Cursor::prev) would land on a valid element.
    fn has_prev(&self) -> bool;

    /// Returns true if advancing `self` by exactly one step would reach `other`.
    fn at_next(&self, other: &Self) -> bool;

    /// Returns true if retreating `self` by exactly one step would reach `other`.
    fn at_prev(&self, other: &Self) -> bool {
        other.at_next(self)
    }

    /// Identity: true if both cursors denote the same position. Always `O(1)`.
    fn equal_ptr(&self, other: &Self) -> bool;

    /// The signed number of steps from `other` to `self`, positive when `self` comes after `other`.
    /// Returns [`None`] if the cursors don't belong to the same container or if neither can reach
    /// the other.
    fn distance(&self, other: &Self) -> Option<i64>;

    /// Overwrites the element under the cursor.
    fn set(&mut self, value: Self::Item) -> Result<(), CursorError> {
        self.replace(value).map(drop)
    }

    /// Moves the cursor `steps` positions, retreating for negative values.
    fn advance(&mut self, steps: i64) -> Result<(), CursorError> {
        for _ in 0..steps.unsigned_abs() {
            if steps < 0 {
                self.prev()?;
            } else {
                self.next()?;
            }
        }
        Ok(())
    }

    /// Moves the cursor `steps` positions backwards, advancing for negative values.
    fn retreat(&mut self, steps: i64) -> Result<(), CursorError> {
        for _ in 0..steps.unsigned_abs() {
            if steps < 0 {
                self.next()?;
            } else {
                self.prev()?;
            }
        }
        Ok(())
    }

    /// Returns a new cursor one step after this one.
    fn get_next(&self) -> Result<Self, CursorError> {
        let mut next = self.clone();
        next.next()?;
        Ok(next)
    }

    /// Returns a new cursor one step before this one.
    fn get_prev(&self) -> Result<Self, CursorError> {
        let mut prev = self.clone();
        prev.prev()?;
        Ok(prev)
    }

    /// Returns a new cursor `steps` positions away from this one.
    fn stepped(&self, steps: i64) -> Result<Self, CursorError> {
        let mut stepped = self.clone();
        stepped.advance(steps)?;
        Ok(stepped)
    }

    /// Converts the cursor into an [`Iterator`] yielding copies of each element from the current
    /// position to the end.
    fn values(self) -> CursorIter<Self> {
        CursorIter::new(self)
    }
}

impl<C: Cursor> Comparable for C {
    /// The distance between the cursors. Unrelated cursors compare as [`i64::MAX`].
    fn compare_to(&self, other: &Self) -> i64 {
        self.distance(other).unwrap_or(i64::MAX)
    }
}
