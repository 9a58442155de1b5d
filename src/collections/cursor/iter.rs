use std::iter::FusedIterator;

use super::Cursor;

/// An [`Iterator`] which walks a [`Cursor`] towards the end of its container, yielding a copy of
/// every element it passes. See [`Cursor::values`].
#[derive(Debug, Clone)]
pub struct CursorIter<C: Cursor> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> CursorIter<C> {
    pub const fn new(cursor: C) -> CursorIter<C> {
        CursorIter {
            cursor,
            done: false,
        }
    }

    /// Returns the underlying cursor at its current position.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C>
where
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let value = self.cursor.get().ok()?;
        if self.cursor.next().is_err() {
            self.done = true;
        }
        Some(value)
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> where C::Item: Clone {}
