use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use crate::sync::{Atomic, Condition, LockPolicy, MemOrder, Mutex, RawCondition, RawMutex, SysError, UniqueLock};
use crate::util::result::ResultExtension;

/// A counting semaphore holding at most `MAX` permits. A `MAX` of zero leaves the count unbounded.
///
/// Acquiring takes a permit, blocking while none are available. Releasing returns permits, blocking
/// while that would push the count above `MAX`. Both sides wait on the same [`Condition`], so every
/// change to the count wakes all waiters and lets them recheck.
///
/// # Examples
/// ```
/// # use original::sync::Semaphore;
/// let permits = Semaphore::<2>::new();
/// assert!(permits.try_acquire().unwrap());
/// assert_eq!(permits.available(), 1);
///
/// permits.release(1).unwrap();
/// assert!(!permits.try_release(1).unwrap(), "The count can't exceed the maximum.");
/// ```
pub struct Semaphore<const MAX: u64 = 1> {
    mutex: Mutex,
    condition: Condition,
    // Only written while the mutex is held.
    count: Atomic<u64>,
}

impl<const MAX: u64> Semaphore<MAX> {
    /// The largest count the semaphore can reach.
    pub const CAPACITY: u64 = if MAX == 0 { u64::MAX } else { MAX };

    /// Creates a full semaphore, or an empty one if it is unbounded.
    ///
    /// # Panics
    /// Panics if the OS fails to initialize the underlying primitives.
    pub fn new() -> Semaphore<MAX> {
        Semaphore::with_count(MAX)
    }

    /// Creates a semaphore holding `count` permits.
    ///
    /// # Panics
    /// Panics if `count` exceeds `MAX`. See [`Semaphore::try_with_count`].
    pub fn with_count(count: u64) -> Semaphore<MAX> {
        Semaphore::try_with_count(count).throw()
    }

    pub fn try_with_count(count: u64) -> Result<Semaphore<MAX>, SysError> {
        if count > Self::CAPACITY {
            return Err(SysError::misuse("create semaphore", "initial count exceeds the maximum"));
        }
        let semaphore = Semaphore {
            mutex: Mutex::try_new()?,
            condition: Condition::try_new()?,
            count: Atomic::new(count),
        };
        tracing::trace!(max = MAX, count, "created semaphore");
        Ok(semaphore)
    }

    /// Blocks until a permit is available and takes it.
    pub fn acquire(&self) -> Result<(), SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        self.condition.wait_lock_until(&guard, || self.count() > 0)?;
        self.count.fetch_sub(1, MemOrder::Relaxed);
        self.changed(&mut guard)
    }

    /// Takes a permit if one is available, without blocking.
    pub fn try_acquire(&self) -> Result<bool, SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        if self.count() == 0 {
            return Ok(false);
        }
        self.count.fetch_sub(1, MemOrder::Relaxed);
        self.changed(&mut guard)?;
        Ok(true)
    }

    /// Waits up to `timeout` for a permit, returning whether one was taken.
    pub fn acquire_for(&self, timeout: Duration) -> Result<bool, SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        if !self.condition.wait_lock_for_until(&guard, timeout, || self.count() > 0)? {
            tracing::trace!(?timeout, "semaphore acquire timed out");
            return Ok(false);
        }
        self.count.fetch_sub(1, MemOrder::Relaxed);
        self.changed(&mut guard)?;
        Ok(true)
    }

    /// Returns `increase` permits, blocking until there is room for all of them.
    ///
    /// Returning more permits than `MAX` at once can never succeed and is an error.
    pub fn release(&self, increase: u64) -> Result<(), SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        let limit = Self::limit_for(increase)?;
        self.condition.wait_lock_until(&guard, || self.count() <= limit)?;
        self.count.fetch_add(increase, MemOrder::Relaxed);
        self.changed(&mut guard)
    }

    /// Returns `increase` permits if there is room for all of them, without blocking.
    pub fn try_release(&self, increase: u64) -> Result<bool, SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        let Some(limit) = Self::CAPACITY.checked_sub(increase) else {
            return Ok(false);
        };
        if self.count() > limit {
            return Ok(false);
        }
        self.count.fetch_add(increase, MemOrder::Relaxed);
        self.changed(&mut guard)?;
        Ok(true)
    }

    /// Waits up to `timeout` for room to return `increase` permits, returning whether they were
    /// returned.
    pub fn release_for(&self, increase: u64, timeout: Duration) -> Result<bool, SysError> {
        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        let limit = Self::limit_for(increase)?;
        if !self.condition.wait_lock_for_until(&guard, timeout, || self.count() <= limit)? {
            tracing::trace!(?timeout, increase, "semaphore release timed out");
            return Ok(false);
        }
        self.count.fetch_add(increase, MemOrder::Relaxed);
        self.changed(&mut guard)?;
        Ok(true)
    }

    /// Returns the number of permits available at the time of the call.
    pub fn available(&self) -> u64 {
        self.count.load(MemOrder::Acquire)
    }

    fn count(&self) -> u64 {
        self.count.load(MemOrder::Relaxed)
    }

    /// Returns the highest count from which `increase` permits can still be returned.
    fn limit_for(increase: u64) -> Result<u64, SysError> {
        Self::CAPACITY
            .checked_sub(increase)
            .ok_or(SysError::misuse("release semaphore", "increase exceeds the maximum count"))
    }

    /// Unlocks and wakes every waiter, since acquirers and releasers share the condition.
    fn changed(&self, guard: &mut UniqueLock<'_, Mutex>) -> Result<(), SysError> {
        guard.unlock()?;
        self.condition.notify_all()
    }
}

impl<const MAX: u64> Default for Semaphore<MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX: u64> Debug for Semaphore<MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Semaphore")
            .field("max", &MAX)
            .field("available", &self.available())
            .finish_non_exhaustive()
    }
}
