use std::iter::FusedIterator;
use std::ops::Range;

use super::BitSet;

impl<'a> IntoIterator for &'a BitSet {
    type Item = bool;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            set: self,
            range: 0..self.size,
        }
    }
}

/// An iterator over the bits of a [`BitSet`], from the first to the last.
pub struct Iter<'a> {
    pub(crate) set: &'a BitSet,
    pub(crate) range: Range<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|index| self.set.read(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|index| self.set.read(index))
    }
}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> ExactSizeIterator for Iter<'a> {}
