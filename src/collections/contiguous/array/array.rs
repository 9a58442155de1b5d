use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::ArrayCursor;
use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, UnsupportedError};
use crate::util::result::ResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// An Array can't grow or shrink one element at a time, [`try_push`](Array::try_push) and
/// [`try_pop`](Array::try_pop) always report an unsupported operation. Use [`Vector`] for that.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `begins/ends` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* It might be possible to get an `O(1)` reallocation, but it isn't very likely.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use original::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0.
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be turned back into an Array with [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// For the produced value to be valid:
    /// - `ptr` needs to be a currently and correctly allocated pointer within the global allocator.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - `size` needs to be less than or equal to [`isize::MAX`] / `size_of::<T>()`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, which allows [`Array::realloc`] to be called
    /// on a previously initialized Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        // SAFETY: Array<T> has the same layout as Array<MaybeUninit<T>>.
        unsafe { mem::transmute::<Array<T>, Array<MaybeUninit<T>>>(self) }
    }

    /// Returns a cursor at the first element. The cursor is invalid if the Array is empty.
    ///
    /// # Examples
    /// ```
    /// # use original::collections::contiguous::Array;
    /// # use original::collections::cursor::Cursor;
    /// let mut arr = Array::from(0..3);
    /// let begin = arr.begins();
    /// assert_eq!(begin.get(), Ok(0));
    /// assert!(!begin.has_prev());
    /// ```
    pub fn begins(&mut self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self, 0)
    }

    /// Returns a cursor at the last element. The cursor is invalid if the Array is empty.
    pub fn ends(&mut self) -> ArrayCursor<'_, T> {
        let last = self.size as i64 - 1;
        ArrayCursor::new(self, last)
    }

    /// Always fails, an Array has a fixed size.
    pub fn try_push(&mut self, _value: T) -> Result<(), UnsupportedError> {
        Err(UnsupportedError { operation: "push onto a fixed-size Array" })
    }

    /// Always fails, an Array has a fixed size.
    pub fn try_pop(&mut self) -> Result<T, UnsupportedError> {
        Err(UnsupportedError { operation: "pop from a fixed-size Array" })
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    pub(crate) const unsafe fn clone_shallow(&mut self) -> Array<T> {
        // SAFETY: There are no safety guarantees here, responsibility it passed to the caller.
        unsafe { Array::from_parts(self.ptr, self.size) }
    }

    /// Reallocate self with `new_size`, dropping any removed elements and filling any new ones
    /// with the result of `fill`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc_with<F: FnMut() -> T>(&mut self, mut fill: F, new_size: usize) {
        let old_size = self.size;
        // Validate the new layout before anything is dropped.
        Array::<T>::make_layout(new_size);

        for i in new_size..old_size {
            // SAFETY: i < size, so the value is initialized and in bounds. The size is updated below
            // so that the value is never used again.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()); }
        }

        // SAFETY: We use a shallow clone here to allow us to change the type of the Array without
        // moving it out from behind a mutable reference. The original is forgotten once replaced,
        // so the allocation is only ever freed once.
        let mut wip_arr = ManuallyDrop::new(unsafe { self.clone_shallow().forget_init() });
        wip_arr.realloc(new_size);

        for i in old_size..new_size {
            // SAFETY: i < new_size, which is within the allocated range of the new Array.
            unsafe { wip_arr.ptr.add(i).write(MaybeUninit::new(fill())) }
        }

        mem::forget(mem::replace(
            self,
            // SAFETY: Every value < new_size is either retained from before or newly written.
            unsafe { ManuallyDrop::into_inner(wip_arr).assume_init() }
        ));
    }
}

impl<T: Copy> Array<T> {
    /// Creates a new `Array<T>` with `count` copies of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use original::collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: All possible values are within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(item)) }
        }

        // SAFETY: All values are initialized with a copy of item.
        unsafe { arr.assume_init() }
    }

    /// Reallocate self with `new_size`, filling any extra elements with a copy of `item`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc_with_copy(&mut self, item: T, new_size: usize) {
        self.realloc_with(|| item, new_size);
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: All possible values are within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(T::default())) }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { arr.assume_init() }
    }

    /// Reallocate self with `new_size`, filling any extra elements with the default value of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc_with_default(&mut self, new_size: usize) {
        self.realloc_with(T::default, new_size);
    }
}

impl<T, I> From<I> for Array<T>
where
    I: Iterator<Item = T> + ExactSizeIterator,
{
    /// Creates an Array from an [`ExactSizeIterator`]. An iterator which misreports its length still
    /// produces an Array of every yielded item.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn from(iter: I) -> Self {
        let mut vec = Vector::with_cap(iter.len());
        vec.extend(iter);
        Array::from(vec)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vector<T>>())
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Converts a `Array<MaybeUninit<T>>` to `MaybeUninit<Array<T>>`.
    pub fn transpose(self) -> MaybeUninit<Array<T>> {
        // SAFETY: Array<MaybeUninit<T>> has the same layout as MaybeUninit<Array<T>>.
        unsafe { mem::transmute(self) }
    }

    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        // SAFETY: There are no safety guarantees here, responsibility it passed to the caller.
        unsafe { self.transpose().assume_init() }
    }

    /// Reallocate the Array to have size equal to new_size, with new locations uninitialized.
    /// Values beyond `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            // Zero-sized types are never allocated, the dangling pointer stays as it is.
            (_, _) if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(new_size);
                Array::<MaybeUninit<T>>::make_ptr(layout)
            },
            (_, 0) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                // SAFETY: ptr was allocated with this layout, which has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
                NonNull::dangling()
            },
            (_, _) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                let new_layout = Array::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, as well as properly aligned, initialized and ready to
            // drop. All possible values are within the allocated range of the Array.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()); }
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents any other access throughout the
        // lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "array(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
