use std::cmp::Ordering;

use derive_more::{From, IsVariant};

use super::Cursor;
use crate::collections::contiguous::ArrayCursor;
use crate::collections::linked::{ChainCursor, ForwardChainCursor};
use crate::util::error::CursorError;

/// A cursor over any of the sequence containers, for code that handles positions without knowing
/// the storage behind them.
///
/// Cursors of different kinds never refer to the same slot: [`equal_ptr`](Cursor::equal_ptr) is
/// false and [`distance`](Cursor::distance) is [`None`] between them.
///
/// # Example
/// ```
/// # use original::collections::contiguous::Array;
/// # use original::collections::linked::Chain;
/// # use original::collections::cursor::{AnyCursor, Cursor};
/// let mut arr = Array::from([1, 2].into_iter());
/// let mut chain: Chain<_> = [3, 4].into_iter().collect();
///
/// let cursors = [AnyCursor::from(arr.begins()), AnyCursor::from(chain.begins())];
/// let total: i32 = cursors.into_iter().flat_map(Cursor::values).sum();
/// assert_eq!(total, 10);
/// ```
#[derive(Debug, From, IsVariant)]
pub enum AnyCursor<'a, T> {
    Array(ArrayCursor<'a, T>),
    Chain(ChainCursor<'a, T>),
    ForwardChain(ForwardChainCursor<'a, T>),
}

/// Applies the same expression to whichever cursor is inside.
macro_rules! dispatch {
    ($self:expr, $cursor:ident => $body:expr) => {
        match $self {
            AnyCursor::Array($cursor) => $body,
            AnyCursor::Chain($cursor) => $body,
            AnyCursor::ForwardChain($cursor) => $body,
        }
    };
}

/// Applies the same expression to a pair of cursors of the same kind, or returns `$mismatch`.
macro_rules! dispatch_pair {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $body:expr, _ => $mismatch:expr) => {
        match ($lhs, $rhs) {
            (AnyCursor::Array($a), AnyCursor::Array($b)) => $body,
            (AnyCursor::Chain($a), AnyCursor::Chain($b)) => $body,
            (AnyCursor::ForwardChain($a), AnyCursor::ForwardChain($b)) => $body,
            _ => $mismatch,
        }
    };
}

impl<'a, T> Cursor for AnyCursor<'a, T> {
    type Item = T;

    fn is_valid(&self) -> bool {
        dispatch!(self, cursor => cursor.is_valid())
    }

    fn get(&self) -> Result<T, CursorError>
    where
        T: Clone,
    {
        dispatch!(self, cursor => cursor.get())
    }

    fn replace(&mut self, value: T) -> Result<T, CursorError> {
        dispatch!(self, cursor => cursor.replace(value))
    }

    fn next(&mut self) -> Result<(), CursorError> {
        dispatch!(self, cursor => cursor.next())
    }

    fn prev(&mut self) -> Result<(), CursorError> {
        dispatch!(self, cursor => cursor.prev())
    }

    fn has_next(&self) -> bool {
        dispatch!(self, cursor => cursor.has_next())
    }

    fn has_prev(&self) -> bool {
        dispatch!(self, cursor => cursor.has_prev())
    }

    fn at_next(&self, other: &Self) -> bool {
        dispatch_pair!(self, other, (a, b) => a.at_next(b), _ => false)
    }

    fn at_prev(&self, other: &Self) -> bool {
        dispatch_pair!(self, other, (a, b) => a.at_prev(b), _ => false)
    }

    fn equal_ptr(&self, other: &Self) -> bool {
        dispatch_pair!(self, other, (a, b) => a.equal_ptr(b), _ => false)
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        dispatch_pair!(self, other, (a, b) => a.distance(b), _ => None)
    }

    fn advance(&mut self, steps: i64) -> Result<(), CursorError> {
        dispatch!(self, cursor => cursor.advance(steps))
    }

    fn retreat(&mut self, steps: i64) -> Result<(), CursorError> {
        dispatch!(self, cursor => cursor.retreat(steps))
    }
}

impl<'a, T> Clone for AnyCursor<'a, T> {
    fn clone(&self) -> Self {
        dispatch!(self, cursor => cursor.clone().into())
    }
}

impl<'a, T> PartialEq for AnyCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ptr(other)
    }
}

impl<'a, T> Eq for AnyCursor<'a, T> {}

impl<'a, T> PartialOrd for AnyCursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance(other).map(|steps| steps.cmp(&0))
    }
}
