use std::fmt::{self, Debug, Formatter};

use super::{Lockable, RawMutex};
use crate::sync::SysError;
use crate::util::result::ResultExtension;

#[cfg(unix)]
pub(crate) type NativeMutex = super::PMutex;
#[cfg(windows)]
pub(crate) type NativeMutex = super::WMutex;

/// The mutex of the current platform: a [`PMutex`](super::PMutex) on unix and a
/// [`WMutex`](super::WMutex) on Windows.
///
/// A Mutex doesn't guard any data itself. It is locked through a
/// [`UniqueLock`](crate::sync::UniqueLock) or a [`MultiLock`](crate::sync::MultiLock), or directly
/// through [`Lockable`].
///
/// # Examples
/// ```
/// # use original::sync::{LockPolicy, Mutex, UniqueLock};
/// let mutex = Mutex::new();
/// {
///     let guard = UniqueLock::new(&mutex, LockPolicy::Auto).unwrap();
///     assert!(guard.is_locked());
/// }
/// assert!(UniqueLock::new(&mutex, LockPolicy::Try).unwrap().is_locked());
/// ```
pub struct Mutex {
    pub(crate) inner: NativeMutex,
}

impl Mutex {
    /// Creates a new, unlocked Mutex.
    ///
    /// # Panics
    /// Panics if the OS fails to initialize the mutex. See [`Mutex::try_new`].
    pub fn new() -> Mutex {
        Mutex::try_new().throw()
    }
}

impl Lockable for Mutex {
    fn lock(&self) -> Result<(), SysError> {
        self.inner.lock()
    }

    fn try_lock(&self) -> Result<bool, SysError> {
        self.inner.try_lock()
    }

    fn unlock(&self) -> Result<(), SysError> {
        self.inner.unlock()
    }
}

impl RawMutex for Mutex {
    type Native = <NativeMutex as RawMutex>::Native;

    fn try_new() -> Result<Mutex, SysError> {
        Ok(Mutex {
            inner: NativeMutex::try_new()?,
        })
    }

    fn id(&self) -> u64 {
        self.inner.id()
    }

    fn native_handle(&self) -> *mut Self::Native {
        self.inner.native_handle()
    }
}

impl Default for Mutex {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Mutex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mutex(#{})", self.id())
    }
}
