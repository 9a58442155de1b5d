use std::fmt::{self, Debug, Formatter};

use super::Semaphore;
use crate::sync::{OrTerminate, SysError};

/// Holds one permit of a [`Semaphore`], returning it on drop.
///
/// # Examples
/// ```
/// # use original::sync::{Semaphore, SemaphoreGuard};
/// let permits = Semaphore::<1>::new();
/// {
///     let _permit = SemaphoreGuard::new(&permits).unwrap();
///     assert!(!permits.try_acquire().unwrap());
/// }
/// assert_eq!(permits.available(), 1);
/// ```
pub struct SemaphoreGuard<'a, const MAX: u64 = 1> {
    semaphore: &'a Semaphore<MAX>,
}

impl<'a, const MAX: u64> SemaphoreGuard<'a, MAX> {
    /// Blocks until a permit of `semaphore` is acquired.
    pub fn new(semaphore: &'a Semaphore<MAX>) -> Result<SemaphoreGuard<'a, MAX>, SysError> {
        semaphore.acquire()?;
        Ok(SemaphoreGuard { semaphore })
    }

    pub const fn semaphore(&self) -> &'a Semaphore<MAX> {
        self.semaphore
    }
}

impl<'a, const MAX: u64> Drop for SemaphoreGuard<'a, MAX> {
    fn drop(&mut self) {
        self.semaphore.release(1).or_terminate();
    }
}

impl<'a, const MAX: u64> Debug for SemaphoreGuard<'a, MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SemaphoreGuard").field(self.semaphore).finish()
    }
}
