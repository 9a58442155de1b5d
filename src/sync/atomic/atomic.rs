use std::fmt::{self, Debug, Formatter};
use std::ops::{AddAssign, SubAssign};

use super::{AtomicArith, AtomicRepr, Atomizable, MemOrder};

/// A value which is read and written atomically across threads.
///
/// The representation is fixed at compile time by [`Atomizable::Repr`]: primitives are stored in
/// hardware atomics and anything else behind a [`Mutex`](crate::sync::Mutex). Both support the same
/// operations, so code using an Atomic doesn't depend on which one is chosen.
///
/// # Examples
/// ```
/// # use original::sync::{Atomic, MemOrder};
/// let counter = Atomic::new(5_i32);
/// let mut expected = 5;
/// assert!(counter.exchange_cmp(&mut expected, 10, MemOrder::SeqCst));
///
/// expected = 5;
/// assert!(!counter.exchange_cmp(&mut expected, 20, MemOrder::SeqCst));
/// assert_eq!(expected, 10);
/// assert!(counter.is_lock_free());
///
/// let name = Atomic::new(String::from("main"));
/// assert!(!name.is_lock_free());
/// ```
pub struct Atomic<T: Atomizable> {
    repr: T::Repr,
}

impl<T: Atomizable> Atomic<T> {
    pub fn new(value: T) -> Atomic<T> {
        Atomic {
            repr: T::Repr::new(value),
        }
    }

    pub fn load(&self, order: MemOrder) -> T {
        self.repr.load(order)
    }

    pub fn store(&self, value: T, order: MemOrder) {
        self.repr.store(value, order);
    }

    /// Replaces the value, returning the previous one.
    pub fn exchange(&self, value: T, order: MemOrder) -> T {
        self.repr.exchange(value, order)
    }

    /// Replaces the value with `desired` if it currently equals `expected`, returning whether it did.
    /// On failure, `expected` is updated to the value that was observed.
    pub fn exchange_cmp(&self, expected: &mut T, desired: T, order: MemOrder) -> bool {
        self.repr.exchange_cmp(expected, desired, order)
    }

    /// Returns true if operations on this Atomic use hardware atomics rather than a lock.
    pub const fn is_lock_free(&self) -> bool {
        <T::Repr as AtomicRepr<T>>::LOCK_FREE
    }

    /// Loads the value with [`MemOrder::SeqCst`].
    pub fn get(&self) -> T {
        self.load(MemOrder::SeqCst)
    }

    /// Stores the value with [`MemOrder::SeqCst`].
    pub fn set(&self, value: T) {
        self.store(value, MemOrder::SeqCst);
    }
}

impl<T: Atomizable> Atomic<T> where T::Repr: AtomicArith<T> {
    /// Adds to the value, returning the previous one.
    pub fn fetch_add(&self, value: T, order: MemOrder) -> T {
        self.repr.fetch_add(value, order)
    }

    /// Subtracts from the value, returning the previous one.
    pub fn fetch_sub(&self, value: T, order: MemOrder) -> T {
        self.repr.fetch_sub(value, order)
    }
}

/// Creates an [`Atomic`] holding `value`.
pub fn make_atomic<T: Atomizable>(value: T) -> Atomic<T> {
    Atomic::new(value)
}

impl<T: Atomizable> AddAssign<T> for Atomic<T> where T::Repr: AtomicArith<T> {
    fn add_assign(&mut self, rhs: T) {
        self.fetch_add(rhs, MemOrder::SeqCst);
    }
}

impl<T: Atomizable> SubAssign<T> for Atomic<T> where T::Repr: AtomicArith<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.fetch_sub(rhs, MemOrder::SeqCst);
    }
}

/// Shared counterpart of `+=`, usable through an `Arc` or any other shared reference.
impl<T: Atomizable> AddAssign<T> for &Atomic<T> where T::Repr: AtomicArith<T> {
    fn add_assign(&mut self, rhs: T) {
        self.fetch_add(rhs, MemOrder::SeqCst);
    }
}

impl<T: Atomizable> SubAssign<T> for &Atomic<T> where T::Repr: AtomicArith<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.fetch_sub(rhs, MemOrder::SeqCst);
    }
}

impl<T: Atomizable + Default> Default for Atomic<T> {
    fn default() -> Self {
        Atomic::new(T::default())
    }
}

impl<T: Atomizable> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Atomic::new(value)
    }
}

impl<T: Atomizable + Debug> Debug for Atomic<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.get()).finish()
    }
}
