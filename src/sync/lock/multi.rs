use std::fmt::{self, Debug, Formatter};

use super::LockPolicy;
use crate::sync::{Lockable, OrTerminate, SysError};

/// A guard over several mutexes, which are always acquired in the order they were provided and
/// released in reverse.
///
/// A MultiLock never leaves a partial set of its mutexes held: if acquiring one of them fails, the
/// ones it already acquired are released again before the failure is reported.
///
/// # Examples
/// ```
/// # use original::sync::{LockPolicy, Mutex, MultiLock};
/// let (a, b) = (Mutex::new(), Mutex::new());
/// let mut guard = MultiLock::new([&a, &b], LockPolicy::Auto).unwrap();
/// assert!(guard.is_locked());
/// guard.unlock().unwrap();
/// ```
pub struct MultiLock<'a, const N: usize> {
    mutexes: [&'a dyn Lockable; N],
    locked: bool,
}

impl<'a, const N: usize> MultiLock<'a, N> {
    /// Creates a guard over `mutexes`, applying `policy` immediately.
    pub fn new(mutexes: [&'a dyn Lockable; N], policy: LockPolicy) -> Result<MultiLock<'a, N>, SysError> {
        let mut guard = MultiLock {
            mutexes,
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

    /// Blocks until every mutex is acquired, in order.
    ///
    /// If one of them fails to lock, the mutexes acquired before it are released and the error is
    /// returned.
    pub fn lock(&mut self) -> Result<(), SysError> {
        if self.locked {
            return Err(SysError::misuse("lock multi lock", "already locked"));
        }
        for (index, mutex) in self.mutexes.iter().enumerate() {
            if let Err(error) = mutex.lock() {
                release(self.mutexes[..index].iter().rev());
                return Err(error);
            }
        }
        self.locked = true;
        Ok(())
    }

    /// Tries every mutex without blocking. If any of them is unavailable, the ones that were acquired
    /// are released again and false is returned.
    pub fn try_lock(&mut self) -> Result<bool, SysError> {
        if self.locked {
            return Err(SysError::misuse("try-lock multi lock", "already locked"));
        }

        let mut acquired = [false; N];
        let mut outcome = Ok(true);
        for (index, mutex) in self.mutexes.iter().enumerate() {
            match mutex.try_lock() {
                Ok(true) => acquired[index] = true,
                Ok(false) => outcome = outcome.map(|_| false),
                Err(error) => {
                    outcome = Err(error);
                    break;
                },
            }
        }

        if outcome != Ok(true) {
            release(
                self.mutexes.iter()
                    .zip(acquired)
                    .filter_map(|(mutex, held)| held.then_some(mutex))
                    .rev()
            );
        }
        self.locked = outcome == Ok(true);
        outcome
    }

    /// Releases every mutex in reverse order if the guard holds them, otherwise does nothing.
    ///
    /// All of the mutexes are released even if one of them fails, and the first failure is returned.
    pub fn unlock(&mut self) -> Result<(), SysError> {
        if !self.locked {
            return Ok(());
        }
        self.locked = false;

        let mut result = Ok(());
        for mutex in self.mutexes.iter().rev() {
            if let Err(error) = mutex.unlock()
                && result.is_ok()
            {
                result = Err(error);
            }
        }
        result
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the number of mutexes managed by this guard.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

/// Unlocks mutexes acquired during a failed attempt. The attempt's own failure takes precedence, so
/// errors here are only logged.
fn release<'m, 'a: 'm>(mutexes: impl Iterator<Item = &'m &'a dyn Lockable>) {
    for mutex in mutexes {
        if let Err(error) = mutex.unlock() {
            tracing::warn!(%error, "failed to release a mutex while rolling back a multi lock");
        }
    }
}

impl<'a, const N: usize> Drop for MultiLock<'a, N> {
    fn drop(&mut self) {
        self.unlock().or_terminate();
    }
}

impl<'a, const N: usize> Debug for MultiLock<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLock")
            .field("mutexes", &N)
            .field("locked", &self.locked)
            .finish()
    }
}
