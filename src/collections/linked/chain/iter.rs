use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::chain::{ChainContents, ChainState};
use super::Chain;

use ChainState::*;

impl<T> IntoIterator for Chain<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chain: self,
        }
    }
}

/// An owning iterator over the elements of a [`Chain`].
pub struct IntoIter<T> {
    // The Chain already knows how to pop from both ends and free its nodes.
    pub(crate) chain: Chain<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_begin().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_end().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.chain.len()
    }
}

impl<'a, T> IntoIterator for &'a mut Chain<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowing iterator over the elements of a [`Chain`].
pub struct IterMut<'a, T> {
    // A copy of the Chain's links. The nodes themselves are never modified, len tracks how many
    // items are left to yield.
    pub(crate) state: ChainState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ChainContents { len, head, .. }) => {
                let value = head.value_mut();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The remaining length is greater than 1, so the head is followed
                        // by at least one more node.
                        *head = unsafe { head.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ChainContents { len, tail, .. }) => {
                let value = tail.value_mut();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The remaining length is greater than 1, so the tail is preceded
                        // by at least one more node.
                        *tail = unsafe { tail.prev().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the elements of a [`Chain`].
pub struct Iter<'a, T> {
    pub(crate) state: ChainState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ChainContents { len, head, .. }) => {
                let value = head.value();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The remaining length is greater than 1, so the head is followed
                        // by at least one more node.
                        *head = unsafe { head.next().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ChainContents { len, tail, .. }) => {
                let value = tail.value();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The remaining length is greater than 1, so the tail is preceded
                        // by at least one more node.
                        *tail = unsafe { tail.prev().unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}
