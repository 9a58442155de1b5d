use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            alloc: ptr,
            size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// An owned type for owned iteration over an [`Array`] or
/// [`Vector`](crate::collections::contiguous::Vector).
pub struct IntoIter<T> {
    pub(crate) alloc: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values between start and end haven't been moved out yet.
            unsafe { ptr::drop_in_place(self.alloc.add(i).as_ptr()) }
        }

        // SAFETY: The allocation came from an Array of this size. Reinterpreting it as uninitialized
        // frees the memory without dropping anything again.
        let arr: Array<MaybeUninit<T>> = unsafe { Array::from_parts(self.alloc.cast(), self.size) };
        mem::drop(arr);
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is in bounds and the value is initialized. Incrementing start means the
            // value is never read or dropped again, moving it off of the heap.
            let value = unsafe { self.alloc.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end was just decremented and is still >= start, so the value is initialized.
            Some(unsafe { self.alloc.add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Borrowed iteration comes from Deref<Target = [T]>.
