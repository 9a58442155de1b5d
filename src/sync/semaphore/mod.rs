//! A counting [`Semaphore`] with a compile-time maximum, and the [`SemaphoreGuard`] which holds one of
//! its permits for a scope.

mod guard;
mod semaphore;
mod tests;

pub use guard::*;
pub use semaphore::*;
