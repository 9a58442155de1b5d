/// The storage behind an [`Atomic<T>`](super::Atomic).
pub trait AtomicRepr<T>: Send + Sync {
    /// True if the operations compile to hardware atomics rather than taking a lock.
    const LOCK_FREE: bool;

    fn new(value: T) -> Self;

    fn load(&self, order: super::MemOrder) -> T;

    fn store(&self, value: T, order: super::MemOrder);

    /// Replaces the value, returning the previous one.
    fn exchange(&self, value: T, order: super::MemOrder) -> T;

    /// Replaces the value with `desired` if it equals `expected`. Otherwise, `expected` is overwritten
    /// with the current value.
    fn exchange_cmp(&self, expected: &mut T, desired: T, order: super::MemOrder) -> bool;
}

/// Atomic arithmetic, for representations of numeric types.
pub trait AtomicArith<T>: AtomicRepr<T> {
    /// Adds to the value, returning the previous one.
    fn fetch_add(&self, value: T, order: super::MemOrder) -> T;

    /// Subtracts from the value, returning the previous one.
    fn fetch_sub(&self, value: T, order: super::MemOrder) -> T;
}

/// Addition and subtraction that wrap around at the bounds of the type, matching the overflow
/// behaviour of the hardware atomics.
pub trait WrappingArith: Sized {
    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! wrapping_int {
    ($($ty:ty),*) => {
        $(
            impl WrappingArith for $ty {
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

wrapping_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats saturate to infinity rather than wrapping.
macro_rules! wrapping_float {
    ($($ty:ty),*) => {
        $(
            impl WrappingArith for $ty {
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

wrapping_float!(f32, f64);

/// A type which can be stored in an [`Atomic`](super::Atomic).
///
/// `Repr` selects the representation: [`LockFree<Self>`](super::LockFree) for hardware-supported
/// types and [`Locked<Self>`](super::Locked) for everything else. Other types can be made atomizable
/// with [`locked_atomic!`](crate::locked_atomic).
pub trait Atomizable: Sized {
    type Repr: AtomicRepr<Self>;
}
