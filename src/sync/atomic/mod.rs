//! An [`Atomic`] cell whose representation is picked at compile time from the wrapped type.
//!
//! Types the hardware can update atomically ([`Primitive`]s) are stored in a [`LockFree`] cell over
//! `std::sync::atomic`. Every other [`Atomizable`] type is stored in a [`Locked`] cell, guarded by a
//! [`Mutex`](crate::sync::Mutex). Both expose the same operations through [`AtomicRepr`].

mod atomic;
mod lock_free;
mod locked;
mod order;
mod repr;
mod tests;

pub use atomic::*;
pub use lock_free::*;
pub use locked::*;
pub use order::*;
pub use repr::*;
