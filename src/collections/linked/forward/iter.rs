use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::forward_chain::{ForwardContents, ForwardState};
use super::ForwardChain;

use ForwardState::*;

impl<T> IntoIterator for ForwardChain<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chain: self,
        }
    }
}

/// An owning iterator over the elements of a [`ForwardChain`].
pub struct IntoIter<T> {
    pub(crate) chain: ForwardChain<T>,
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

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.chain.len()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardChain<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowing iterator over the elements of a [`ForwardChain`].
pub struct IterMut<'a, T> {
    pub(crate) state: ForwardState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ForwardContents { len, head, .. }) => {
                let value = head.value_mut();

                match (*head.next(), len.checked_sub(1)) {
                    (Some(next), Some(new_len)) => {
                        *head = next;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a ForwardChain<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the elements of a [`ForwardChain`].
pub struct Iter<'a, T> {
    pub(crate) state: ForwardState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ForwardContents { len, head, .. }) => {
                let value = head.value();

                match (*head.next(), len.checked_sub(1)) {
                    (Some(next), Some(new_len)) => {
                        *head = next;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}
