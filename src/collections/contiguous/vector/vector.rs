use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::{self, contiguous::{Array, ArrayCursor}};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, NoElementError};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `push_begin` | `O(n)` |
/// | `pop_begin` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `begins/ends` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use original::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the object.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector. All
            // values < the old len are initialized, and the value is forgotten by the Vector once
            // len is decremented.
            let value = unsafe { self.arr.ptr.add(self.len).read().assume_init() };
            Some(value)
        }
    }

    /// Pops the last value, returning a [`NoElementError`] if the Vector is empty.
    pub fn try_pop(&mut self) -> Result<T, NoElementError> {
        self.pop().ok_or(NoElementError)
    }

    /// Inserts the provided value at the front of the Vector, moving every other element back.
    pub fn push_begin(&mut self, value: T) {
        self.insert_at(0, value);
    }

    /// Removes the first value of the Vector, returning a [`NoElementError`] if it is empty.
    pub fn pop_begin(&mut self) -> Result<T, NoElementError> {
        if self.is_empty() {
            Err(NoElementError)
        } else {
            Ok(self.remove_at(0))
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length appends the value, and negative indexes count back from the end.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds for insertion. See [`Vector::try_insert`].
    ///
    /// # Examples
    /// ```
    /// # use original::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(-1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 100, 1, 200, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: i64, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, or returns an [`Err`] if the index is out of
    /// bounds for insertion.
    pub fn try_insert(&mut self, index: i64, value: T) -> Result<(), IndexOutOfBounds> {
        let index = collections::insertion_index(index, self.len)?;
        self.insert_at(index, value);
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds. See [`Vector::try_remove`].
    pub fn remove(&mut self, index: i64) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, or returns an [`Err`] if it is out of bounds.
    pub fn try_remove(&mut self, index: i64) -> Result<T, IndexOutOfBounds> {
        let index = collections::element_index(index, self.len)?;
        Ok(self.remove_at(index))
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds. See [`Vector::try_replace`].
    pub fn replace(&mut self, index: i64, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index, or returns an [`Err`] if it is out of bounds.
    pub fn try_replace(&mut self, index: i64, new_value: T) -> Result<T, IndexOutOfBounds> {
        let index = collections::element_index(index, self.len)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Appends all elements from `other` to self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);

        // SAFETY: self is valid from len to len + other.len and other is valid from 0 to other.len.
        // Both are properly aligned and don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(self.len).as_ptr(),
                other.len,
            );
        }

        self.len += other.len;

        // The values now belong to self, other only needs to free its buffer.
        other.len = 0;
    }

    /// Returns a cursor at the first element. The cursor is invalid if the Vector is empty.
    pub fn begins(&mut self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self, 0)
    }

    /// Returns a cursor at the last element. The cursor is invalid if the Vector is empty.
    pub fn ends(&mut self) -> ArrayCursor<'_, T> {
        let last = self.len as i64 - 1;
        ArrayCursor::new(self, last)
    }

    /// Reallocates the internal Array with the provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        self.realloc_with_cap(new_cap);
    }

    /// Inserts at a resolved index, which must be <= len.
    fn insert_at(&mut self, index: usize, value: T) {
        if self.len == self.cap() {
            self.grow()
        }

        // SAFETY: The capacity is at least len + 1. Moving index..len back by one stays inside the
        // allocation and the gap at index is filled straight away.
        unsafe {
            let slot = self.arr.ptr.add(index).as_ptr();
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    /// Removes at a resolved index, which must be < len.
    fn remove_at(&mut self, index: usize) -> T {
        // SAFETY: index < len, so the value is initialized. Moving the following values forward
        // overwrites the bitwise copy that was just read, so it is never dropped twice.
        let value = unsafe {
            let slot = self.arr.ptr.add(index).as_ptr();
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        value
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents any other access to self while the
        // slice exists.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        // SAFETY: After shrinking, the Vector holds exactly len initialized values, which has the
        // same layout as an Array of that size. The Vector is forgotten so nothing is freed twice.
        let arr = unsafe { Array::from_parts(value.arr.ptr.cast(), value.len) };
        mem::forget(value);
        arr
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vector(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
