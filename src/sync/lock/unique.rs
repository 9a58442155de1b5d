use std::fmt::{self, Debug, Formatter};

use super::LockPolicy;
use crate::sync::{Lockable, Mutex, OrTerminate, SysError};

/// A guard over a single mutex, which unlocks it on drop if it is held.
///
/// Unlike a scoped guard, a UniqueLock can be unlocked and relocked during its lifetime. Locking it
/// while it is already locked is an error rather than a deadlock.
pub struct UniqueLock<'a, M: Lockable + ?Sized = Mutex> {
    mutex: &'a M,
    locked: bool,
}

impl<'a, M: Lockable + ?Sized> UniqueLock<'a, M> {
    /// Creates a guard over `mutex`, applying `policy` immediately.
    pub fn new(mutex: &'a M, policy: LockPolicy) -> Result<UniqueLock<'a, M>, SysError> {
        let mut guard = UniqueLock {
            mutex,
            locked: false,
        };
        match policy {
            LockPolicy::Manual => {},
            LockPolicy::Auto => guard.lock()?,
            LockPolicy::Try => {
                guard.try_lock()?;
            },
            LockPolicy::Adopt => guard.locked = true,
        }
        Ok(guard)
    }

    /// Blocks until the mutex is acquired.
    pub fn lock(&mut self) -> Result<(), SysError> {
        if self.locked {
            return Err(SysError::misuse("lock unique lock", "already locked"));
        }
        self.mutex.lock()?;
        self.locked = true;
        Ok(())
    }

    /// Tries to acquire the mutex without blocking, returning whether it succeeded.
    pub fn try_lock(&mut self) -> Result<bool, SysError> {
        if self.locked {
            return Err(SysError::misuse("try-lock unique lock", "already locked"));
        }
        self.locked = self.mutex.try_lock()?;
        Ok(self.locked)
    }

    /// Releases the mutex if the guard holds it, otherwise does nothing.
    pub fn unlock(&mut self) -> Result<(), SysError> {
        if self.locked {
            self.mutex.unlock()?;
            self.locked = false;
        }
        Ok(())
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the mutex managed by this guard.
    pub const fn mutex(&self) -> &'a M {
        self.mutex
    }
}

impl<'a, M: Lockable + ?Sized> Drop for UniqueLock<'a, M> {
    fn drop(&mut self) {
        self.unlock().or_terminate();
    }
}

impl<'a, M: Lockable + ?Sized> Debug for UniqueLock<'a, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueLock")
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}
