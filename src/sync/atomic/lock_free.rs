use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicIsize, AtomicPtr, AtomicU8, AtomicU16,
    AtomicU32, AtomicUsize,
};
#[cfg(target_has_atomic = "64")]
use std::sync::atomic::{AtomicI64, AtomicU64};

use super::{AtomicArith, AtomicRepr, Atomizable, MemOrder};

/// A type with a matching hardware atomic in `std::sync::atomic`.
pub trait Primitive: Copy {
    /// The `std` atomic which stores this type.
    type Cell: Send + Sync;

    fn new_cell(value: Self) -> Self::Cell;

    fn load(cell: &Self::Cell, order: MemOrder) -> Self;

    fn store(cell: &Self::Cell, value: Self, order: MemOrder);

    fn swap(cell: &Self::Cell, value: Self, order: MemOrder) -> Self;

    fn compare_exchange(
        cell: &Self::Cell,
        current: Self,
        new: Self,
        order: MemOrder,
    ) -> Result<Self, Self>;
}

/// A [`Primitive`] with atomic addition and subtraction. Integers wrap on overflow.
pub trait PrimitiveArith: Primitive {
    fn fetch_add(cell: &Self::Cell, value: Self, order: MemOrder) -> Self;

    fn fetch_sub(cell: &Self::Cell, value: Self, order: MemOrder) -> Self;
}

/// The lock-free representation of an [`Atomic`](super::Atomic), which stores the value directly in
/// its hardware atomic.
pub struct LockFree<T: Primitive> {
    cell: T::Cell,
}

impl<T: Primitive> AtomicRepr<T> for LockFree<T> {
    const LOCK_FREE: bool = true;

    fn new(value: T) -> Self {
        LockFree {
            cell: T::new_cell(value),
        }
    }

    fn load(&self, order: MemOrder) -> T {
        T::load(&self.cell, order)
    }

    fn store(&self, value: T, order: MemOrder) {
        T::store(&self.cell, value, order);
    }

    fn exchange(&self, value: T, order: MemOrder) -> T {
        T::swap(&self.cell, value, order)
    }

    fn exchange_cmp(&self, expected: &mut T, desired: T, order: MemOrder) -> bool {
        match T::compare_exchange(&self.cell, *expected, desired, order) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            },
        }
    }
}

impl<T: PrimitiveArith> AtomicArith<T> for LockFree<T> {
    fn fetch_add(&self, value: T, order: MemOrder) -> T {
        T::fetch_add(&self.cell, value, order)
    }

    fn fetch_sub(&self, value: T, order: MemOrder) -> T {
        T::fetch_sub(&self.cell, value, order)
    }
}

impl<T: Primitive> Debug for LockFree<T> where T::Cell: Debug {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LockFree").field(&self.cell).finish()
    }
}

macro_rules! primitive {
    ($($ty:ty => $cell:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Cell = $cell;

                fn new_cell(value: Self) -> Self::Cell {
                    <$cell>::new(value)
                }

                fn load(cell: &Self::Cell, order: MemOrder) -> Self {
                    cell.load(order.load())
                }

                fn store(cell: &Self::Cell, value: Self, order: MemOrder) {
                    cell.store(value, order.store());
                }

                fn swap(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    cell.swap(value, order.rmw())
                }

                fn compare_exchange(
                    cell: &Self::Cell,
                    current: Self,
                    new: Self,
                    order: MemOrder,
                ) -> Result<Self, Self> {
                    cell.compare_exchange(current, new, order.rmw(), order.failure())
                }
            }

            impl Atomizable for $ty {
                type Repr = LockFree<$ty>;
            }
        )*
    };
}

macro_rules! primitive_int {
    ($($ty:ty => $cell:ty),* $(,)?) => {
        primitive!($($ty => $cell),*);

        $(
            impl PrimitiveArith for $ty {
                fn fetch_add(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    cell.fetch_add(value, order.rmw())
                }

                fn fetch_sub(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    cell.fetch_sub(value, order.rmw())
                }
            }
        )*
    };
}

/// Floats are stored as their bit patterns, so comparisons in `compare_exchange` are bitwise:
/// `-0.0` doesn't match `0.0` and a NaN matches an identical NaN.
macro_rules! primitive_float {
    ($($ty:ty => $cell:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Cell = $cell;

                fn new_cell(value: Self) -> Self::Cell {
                    <$cell>::new(value.to_bits())
                }

                fn load(cell: &Self::Cell, order: MemOrder) -> Self {
                    <$ty>::from_bits(cell.load(order.load()))
                }

                fn store(cell: &Self::Cell, value: Self, order: MemOrder) {
                    cell.store(value.to_bits(), order.store());
                }

                fn swap(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    <$ty>::from_bits(cell.swap(value.to_bits(), order.rmw()))
                }

                fn compare_exchange(
                    cell: &Self::Cell,
                    current: Self,
                    new: Self,
                    order: MemOrder,
                ) -> Result<Self, Self> {
                    cell.compare_exchange(current.to_bits(), new.to_bits(), order.rmw(), order.failure())
                        .map(<$ty>::from_bits)
                        .map_err(<$ty>::from_bits)
                }
            }

            impl PrimitiveArith for $ty {
                fn fetch_add(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    let previous = cell.fetch_update(order.rmw(), order.failure(), |bits| {
                        Some((<$ty>::from_bits(bits) + value).to_bits())
                    });
                    // The update never declines, so both arms hold the previous value.
                    <$ty>::from_bits(previous.unwrap_or_else(|bits| bits))
                }

                fn fetch_sub(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
                    let previous = cell.fetch_update(order.rmw(), order.failure(), |bits| {
                        Some((<$ty>::from_bits(bits) - value).to_bits())
                    });
                    <$ty>::from_bits(previous.unwrap_or_else(|bits| bits))
                }
            }

            impl Atomizable for $ty {
                type Repr = LockFree<$ty>;
            }
        )*
    };
}

primitive!(bool => AtomicBool);

primitive_int!(
    i8 => AtomicI8,
    u8 => AtomicU8,
    i16 => AtomicI16,
    u16 => AtomicU16,
    i32 => AtomicI32,
    u32 => AtomicU32,
    isize => AtomicIsize,
    usize => AtomicUsize,
);

#[cfg(target_has_atomic = "64")]
primitive_int!(i64 => AtomicI64, u64 => AtomicU64);

#[cfg(not(target_has_atomic = "64"))]
crate::locked_atomic!(i64, u64);

primitive_float!(f32 => AtomicU32);

#[cfg(target_has_atomic = "64")]
primitive_float!(f64 => AtomicU64);

#[cfg(not(target_has_atomic = "64"))]
crate::locked_atomic!(f64);

impl<U> Primitive for *mut U {
    type Cell = AtomicPtr<U>;

    fn new_cell(value: Self) -> Self::Cell {
        AtomicPtr::new(value)
    }

    fn load(cell: &Self::Cell, order: MemOrder) -> Self {
        cell.load(order.load())
    }

    fn store(cell: &Self::Cell, value: Self, order: MemOrder) {
        cell.store(value, order.store());
    }

    fn swap(cell: &Self::Cell, value: Self, order: MemOrder) -> Self {
        cell.swap(value, order.rmw())
    }

    fn compare_exchange(
        cell: &Self::Cell,
        current: Self,
        new: Self,
        order: MemOrder,
    ) -> Result<Self, Self> {
        cell.compare_exchange(current, new, order.rmw(), order.failure())
    }
}

impl<U> Atomizable for *mut U {
    type Repr = LockFree<*mut U>;
}
