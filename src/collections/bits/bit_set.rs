use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::{BitSetCursor, Iter};
use crate::collections::contiguous::Array;
use crate::collections;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// The storage unit of a [`BitSet`].
pub type Word = u32;

/// The number of bits held by each [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// A fixed-size set of bits, packed into [`Word`]s.
///
/// Bits past [`size`](BitSet::size) in the last word are never set, so whole-word operations such as
/// [`count`](BitSet::count) and equality don't need to mask them.
///
/// Like the other sequences, indexes are signed and negative values count back from the end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of bits in the BitSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `count` | `O(n)` |
/// | `resize` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `&, \|, ^, !` | `O(n)` |
///
/// # Examples
/// ```
/// # use original::collections::bits::BitSet;
/// let mut bits = BitSet::new(40);
/// bits.set(3, true);
/// bits.set(-1, true);
/// assert_eq!(bits.count(), 2);
/// assert_eq!((!&bits).count(), 38);
/// ```
pub struct BitSet {
    pub(crate) words: Array<Word>,
    pub(crate) size: usize,
}

impl BitSet {
    /// Creates a BitSet of `size` cleared bits.
    pub fn new(size: usize) -> BitSet {
        BitSet {
            words: Array::repeat_item(0, words_for(size)),
            size,
        }
    }

    /// Creates a BitSet holding the provided bits in order.
    pub fn from_bools(bits: &[bool]) -> BitSet {
        let mut set = BitSet::new(bits.len());
        for (index, bit) in bits.iter().enumerate() {
            set.write(index, *bit);
        }
        set
    }

    /// Returns the number of bits in the BitSet.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the BitSet.
    pub fn get(&self, index: i64) -> bool {
        self.try_get(index).throw()
    }

    /// Returns the bit at `index`, or an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: i64) -> Result<bool, IndexOutOfBounds> {
        Ok(self.read(collections::element_index(index, self.size)?))
    }

    /// Writes the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the BitSet.
    pub fn set(&mut self, index: i64, bit: bool) {
        self.try_set(index, bit).throw()
    }

    /// Writes the bit at `index`, or returns an [`Err`] if it is out of bounds.
    pub fn try_set(&mut self, index: i64, bit: bool) -> Result<(), IndexOutOfBounds> {
        let index = collections::element_index(index, self.size)?;
        self.write(index, bit);
        Ok(())
    }

    /// Returns the index of the first bit equal to `bit`.
    pub fn index_of(&self, bit: bool) -> Option<usize> {
        // Skip whole words which can't contain a match.
        let skip = if bit { 0 } else { Word::MAX };
        self.words.iter()
            .position(|word| *word != skip)
            .and_then(|word| (word * WORD_BITS..self.size).find(|index| self.read(*index) == bit))
    }

    /// Changes the number of bits, keeping the bits that are still in range and clearing new ones.
    pub fn resize(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        self.words.realloc_with_copy(0, words_for(new_size));
        self.size = new_size;
        self.clear_unused();
    }

    /// Returns a copy of self with `new_size` bits.
    pub fn resized(&self, new_size: usize) -> BitSet {
        let mut copy = self.clone();
        copy.resize(new_size);
        copy
    }

    /// Returns a cursor at the first bit. The cursor is invalid if the BitSet is empty.
    pub fn begins(&mut self) -> BitSetCursor<'_> {
        BitSetCursor::new(self, 0)
    }

    /// Returns a cursor at the last bit. The cursor is invalid if the BitSet is empty.
    pub fn ends(&mut self) -> BitSetCursor<'_> {
        let last = self.size as i64 - 1;
        BitSetCursor::new(self, last)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub(crate) fn read(&self, index: usize) -> bool {
        self.words[index / WORD_BITS] & bit_mask(index % WORD_BITS) != 0
    }

    pub(crate) fn write(&mut self, index: usize, bit: bool) {
        let word = &mut self.words[index / WORD_BITS];
        if bit {
            *word |= bit_mask(index % WORD_BITS);
        } else {
            *word &= !bit_mask(index % WORD_BITS);
        }
    }

    /// Clears the bits of the last word which are past the size.
    fn clear_unused(&mut self) {
        let used = self.size % WORD_BITS;
        if used != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= bit_mask(used) - 1;
        }
    }

    /// Combines every word with the matching word of `other`, resized to match self when needed.
    fn combine(&mut self, other: &BitSet, op: impl Fn(Word, Word) -> Word) {
        let resized;
        let other = if other.size == self.size {
            other
        } else {
            resized = other.resized(self.size);
            &resized
        };

        for (word, other) in self.words.iter_mut().zip(other.words.iter()) {
            *word = op(*word, *other);
        }
        self.clear_unused();
    }
}

const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

pub(crate) const fn bit_mask(bit: usize) -> Word {
    1 << bit
}

impl BitAndAssign<&BitSet> for BitSet {
    /// Intersects self with `rhs`. A differently sized `rhs` is resized to self's size first.
    fn bitand_assign(&mut self, rhs: &BitSet) {
        self.combine(rhs, |a, b| a & b);
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    /// Unites self with `rhs`. A differently sized `rhs` is resized to self's size first.
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.combine(rhs, |a, b| a | b);
    }
}

impl BitXorAssign<&BitSet> for BitSet {
    /// Toggles the bits of self which are set in `rhs`. A differently sized `rhs` is resized to
    /// self's size first.
    fn bitxor_assign(&mut self, rhs: &BitSet) {
        self.combine(rhs, |a, b| a ^ b);
    }
}

impl BitAnd<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        let mut result = self.clone();
        result &= rhs;
        result
    }
}

impl BitOr<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        let mut result = self.clone();
        result |= rhs;
        result
    }
}

impl BitXor<&BitSet> for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: &BitSet) -> BitSet {
        let mut result = self.clone();
        result ^= rhs;
        result
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        !self.clone()
    }
}

impl Not for BitSet {
    type Output = BitSet;

    fn not(mut self) -> BitSet {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        self.clear_unused();
        self
    }
}

impl FromIterator<bool> for BitSet {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Array<bool> = iter.into_iter().collect();
        BitSet::from_bools(&bits)
    }
}

impl Default for BitSet {
    fn default() -> Self {
        BitSet::new(0)
    }
}

impl Clone for BitSet {
    fn clone(&self) -> Self {
        BitSet {
            words: self.words.clone(),
            size: self.size,
        }
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        // Unused bits are always clear, so whole words can be compared.
        self.size == other.size && self.words == other.words
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.words.hash(state);
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("size", &self.size)
            .field("words", &self.words)
            .finish()
    }
}

impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "bitSet(")?;
        for (index, bit) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", bit as u8)?;
        }
        write!(f, ")")
    }
}
