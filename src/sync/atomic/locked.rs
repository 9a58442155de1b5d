use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};

use super::{AtomicArith, AtomicRepr, MemOrder, WrappingArith};
use crate::sync::{LockPolicy, Mutex, UniqueLock};
use crate::util::result::ResultExtension;

/// The locked representation of an [`Atomic`](super::Atomic), for types without a hardware atomic.
///
/// Every operation holds the internal [`Mutex`] from start to finish, including the read and write
/// of a compare-exchange or an addition. The requested [`MemOrder`] is ignored, since the lock
/// already orders each operation sequentially.
pub struct Locked<T> {
    mutex: Mutex,
    value: UnsafeCell<T>,
}

impl<T> Locked<T> {
    /// Runs `op` on the value while holding the lock.
    ///
    /// # Panics
    /// Panics if the mutex can't be locked.
    fn with<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
        let _guard = UniqueLock::new(&self.mutex, LockPolicy::Auto).throw();
        // SAFETY: The mutex is held until _guard drops, so this is the only reference to the value.
        op(unsafe { &mut *self.value.get() })
    }
}

// SAFETY: The value is only reached through `with`, which serializes all access on the mutex.
unsafe impl<T: Send> Send for Locked<T> {}
// SAFETY: As above, shared references only ever reach the value one thread at a time.
unsafe impl<T: Send> Sync for Locked<T> {}

impl<T: Clone + PartialEq + Send> AtomicRepr<T> for Locked<T> {
    const LOCK_FREE: bool = false;

    fn new(value: T) -> Self {
        Locked {
            mutex: Mutex::new(),
            value: UnsafeCell::new(value),
        }
    }

    fn load(&self, _order: MemOrder) -> T {
        self.with(|value| value.clone())
    }

    fn store(&self, value: T, _order: MemOrder) {
        // The old value is dropped after the lock is released.
        let _old = self.with(|current| std::mem::replace(current, value));
    }

    fn exchange(&self, value: T, _order: MemOrder) -> T {
        self.with(|current| std::mem::replace(current, value))
    }

    fn exchange_cmp(&self, expected: &mut T, desired: T, _order: MemOrder) -> bool {
        self.with(|current| {
            if current == expected {
                *current = desired;
                true
            } else {
                expected.clone_from(current);
                false
            }
        })
    }
}

impl<T> AtomicArith<T> for Locked<T>
where
    T: Clone + PartialEq + Send + WrappingArith,
{
    fn fetch_add(&self, value: T, _order: MemOrder) -> T {
        self.with(|current| {
            let previous = current.clone();
            *current = previous.clone().wrapping_add(value);
            previous
        })
    }

    fn fetch_sub(&self, value: T, _order: MemOrder) -> T {
        self.with(|current| {
            let previous = current.clone();
            *current = previous.clone().wrapping_sub(value);
            previous
        })
    }
}

impl<T: Debug> Debug for Locked<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Locked").field(value).finish())
    }
}

/// Makes types storable in an [`Atomic`](crate::sync::Atomic) by giving them a
/// [`Locked`](crate::sync::Locked) representation.
///
/// The type must be `Clone + PartialEq + Send`. Arithmetic is available if it also implements
/// [`WrappingArith`](crate::sync::WrappingArith).
///
/// # Examples
/// ```
/// # use original::sync::Atomic;
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point(i32, i32);
///
/// original::locked_atomic!(Point);
///
/// let point = Atomic::new(Point(1, 2));
/// assert!(!point.is_lock_free());
/// assert_eq!(point.exchange(Point(3, 4), Default::default()), Point(1, 2));
/// ```
#[macro_export]
macro_rules! locked_atomic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::sync::Atomizable for $ty {
                type Repr = $crate::sync::Locked<$ty>;
            }
        )*
    };
}

crate::locked_atomic!(i128, u128, String);

impl<T: Clone + PartialEq + Send> super::Atomizable for Option<T> {
    type Repr = Locked<Option<T>>;
}
