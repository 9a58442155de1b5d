use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{BitSet, WORD_BITS, Word, bit_mask};
use crate::collections::cursor::Cursor;
use crate::util::error::{CursorError, OutOfBoundError};

/// A random-access cursor over the bits of a [`BitSet`].
///
/// The position is kept as a signed bit index, which is split into a word and a bit within that
/// word on access. Like an [`ArrayCursor`](crate::collections::contiguous::ArrayCursor), it may move
/// past either end and only touches memory while in bounds.
pub struct BitSetCursor<'a> {
    pub(crate) words: NonNull<Word>,
    pub(crate) size: usize,
    pub(crate) index: i64,
    pub(crate) _phantom: PhantomData<&'a mut [Word]>,
}

impl<'a> BitSetCursor<'a> {
    pub(crate) fn new(set: &'a mut BitSet, index: i64) -> BitSetCursor<'a> {
        BitSetCursor {
            size: set.size,
            // SAFETY: Slice pointers are never null.
            words: unsafe { NonNull::new_unchecked(set.words.as_mut_ptr()) },
            index,
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the bit under the cursor, counted across the whole BitSet.
    pub const fn index(&self) -> i64 {
        self.index
    }

    /// Returns the index of the word containing the cursor's bit.
    pub const fn word_index(&self) -> i64 {
        self.index.div_euclid(WORD_BITS as i64)
    }

    /// Returns the position of the cursor's bit within its word.
    pub const fn bit_index(&self) -> usize {
        self.index.rem_euclid(WORD_BITS as i64) as usize
    }

    const fn in_bounds(&self, index: i64) -> bool {
        index >= 0 && (index as u64) < self.size as u64
    }

    fn word(&self) -> Result<NonNull<Word>, OutOfBoundError> {
        if self.in_bounds(self.index) {
            // SAFETY: The bit is in bounds, so its word is within the borrowed allocation.
            Ok(unsafe { self.words.add(self.word_index() as usize) })
        } else {
            Err(OutOfBoundError)
        }
    }

    fn same_set(&self, other: &Self) -> bool {
        self.words == other.words && self.size == other.size
    }
}

impl<'a> Cursor for BitSetCursor<'a> {
    type Item = bool;

    fn is_valid(&self) -> bool {
        self.in_bounds(self.index)
    }

    fn get(&self) -> Result<bool, CursorError> {
        // SAFETY: The word is in bounds and the reference doesn't outlive this call.
        let word = unsafe { *self.word()?.as_ref() };
        Ok(word & bit_mask(self.bit_index()) != 0)
    }

    fn replace(&mut self, value: bool) -> Result<bool, CursorError> {
        let mask = bit_mask(self.bit_index());
        // SAFETY: The word is in bounds and the BitSet is mutably borrowed for 'a.
        let word = unsafe { self.word()?.as_mut() };
        let old = *word & mask != 0;
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        Ok(old)
    }

    fn next(&mut self) -> Result<(), CursorError> {
        self.index = self.index.saturating_add(1);
        Ok(())
    }

    fn prev(&mut self) -> Result<(), CursorError> {
        self.index = self.index.saturating_sub(1);
        Ok(())
    }

    fn has_next(&self) -> bool {
        self.in_bounds(self.index.saturating_add(1))
    }

    fn has_prev(&self) -> bool {
        self.in_bounds(self.index.saturating_sub(1))
    }

    fn at_next(&self, other: &Self) -> bool {
        self.same_set(other) && self.index.checked_add(1) == Some(other.index)
    }

    fn at_prev(&self, other: &Self) -> bool {
        self.same_set(other) && self.index.checked_sub(1) == Some(other.index)
    }

    fn equal_ptr(&self, other: &Self) -> bool {
        self.same_set(other) && self.index == other.index
    }

    fn distance(&self, other: &Self) -> Option<i64> {
        self.same_set(other).then(|| self.index.saturating_sub(other.index))
    }

    fn advance(&mut self, steps: i64) -> Result<(), CursorError> {
        self.index = self.index.saturating_add(steps);
        Ok(())
    }

    fn retreat(&mut self, steps: i64) -> Result<(), CursorError> {
        self.index = self.index.saturating_sub(steps);
        Ok(())
    }
}

impl<'a> Clone for BitSetCursor<'a> {
    fn clone(&self) -> Self {
        BitSetCursor {
            words: self.words,
            size: self.size,
            index: self.index,
            _phantom: PhantomData,
        }
    }
}

impl<'a> PartialEq for BitSetCursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ptr(other)
    }
}

impl<'a> Eq for BitSetCursor<'a> {}

impl<'a> PartialOrd for BitSetCursor<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance(other).map(|steps| steps.cmp(&0))
    }
}

impl<'a> Debug for BitSetCursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSetCursor")
            .field("word", &self.word_index())
            .field("bit", &self.bit_index())
            .finish()
    }
}
