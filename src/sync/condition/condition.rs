use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use super::RawCondition;
use crate::sync::{Mutex, SysError, UniqueLock};
use crate::util::result::ResultExtension;

#[cfg(unix)]
type NativeCondition = super::PCondition;
#[cfg(windows)]
type NativeCondition = super::WCondition;

/// The condition variable of the current platform, waiting on the platform's [`Mutex`].
///
/// Besides the [`RawCondition`] methods, which take the mutex itself, each wait has a `wait_lock`
/// form taking a [`UniqueLock`], which must be locked.
///
/// # Examples
/// ```
/// # use original::sync::{Condition, LockPolicy, Mutex, RawCondition, UniqueLock};
/// # use std::time::Duration;
/// let mutex = Mutex::new();
/// let condition = Condition::new();
///
/// let guard = UniqueLock::new(&mutex, LockPolicy::Auto).unwrap();
/// let notified = condition.wait_lock_for(&guard, Duration::from_millis(1)).unwrap();
/// assert!(!notified);
/// ```
pub struct Condition {
    inner: NativeCondition,
}

impl Condition {
    /// Creates a new Condition.
    ///
    /// # Panics
    /// Panics if the OS fails to initialize the condition variable. See [`Condition::try_new`].
    pub fn new() -> Condition {
        Condition::try_new().throw()
    }

    pub fn wait_lock(&self, lock: &UniqueLock<'_, Mutex>) -> Result<(), SysError> {
        self.wait(held(lock, "wait on condition variable")?)
    }

    pub fn wait_lock_for(&self, lock: &UniqueLock<'_, Mutex>, duration: Duration) -> Result<bool, SysError> {
        self.wait_for(held(lock, "timed wait on condition variable")?, duration)
    }

    pub fn wait_lock_until<P: FnMut() -> bool>(
        &self,
        lock: &UniqueLock<'_, Mutex>,
        predicate: P,
    ) -> Result<(), SysError> {
        self.wait_until(held(lock, "wait on condition variable")?, predicate)
    }

    pub fn wait_lock_for_until<P: FnMut() -> bool>(
        &self,
        lock: &UniqueLock<'_, Mutex>,
        duration: Duration,
        predicate: P,
    ) -> Result<bool, SysError> {
        self.wait_for_until(held(lock, "timed wait on condition variable")?, duration, predicate)
    }
}

/// Returns the mutex of `lock`, or an error if the guard doesn't hold it.
fn held<'a>(lock: &UniqueLock<'a, Mutex>, operation: &'static str) -> Result<&'a Mutex, SysError> {
    if lock.is_locked() {
        Ok(lock.mutex())
    } else {
        Err(SysError::misuse(operation, "unique lock isn't locked"))
    }
}

impl RawCondition for Condition {
    type Mutex = Mutex;

    fn try_new() -> Result<Condition, SysError> {
        Ok(Condition {
            inner: NativeCondition::try_new()?,
        })
    }

    fn wait(&self, mutex: &Mutex) -> Result<(), SysError> {
        self.inner.wait(&mutex.inner)
    }

    fn wait_for(&self, mutex: &Mutex, duration: Duration) -> Result<bool, SysError> {
        self.inner.wait_for(&mutex.inner, duration)
    }

    fn notify(&self) -> Result<(), SysError> {
        self.inner.notify()
    }

    fn notify_all(&self) -> Result<(), SysError> {
        self.inner.notify_all()
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.inner).finish()
    }
}
