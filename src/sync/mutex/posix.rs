use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;

use libc::{EBUSY, pthread_mutex_t, pthread_mutexattr_t};

use super::{Lockable, RawMutex};
use crate::sync::{OrTerminate, SysError};

/// A mutex over `pthread_mutex_t`.
///
/// The mutex is created with the `PTHREAD_MUTEX_ERRORCHECK` type, so a relock by the owning thread
/// fails with `EDEADLK` and an unlock by any other thread fails with `EPERM`. The handle is boxed,
/// because pthread mutexes may not move once initialized.
pub struct PMutex {
    handle: Box<UnsafeCell<pthread_mutex_t>>,
}

impl PMutex {
    pub(crate) fn as_ptr(&self) -> *mut pthread_mutex_t {
        self.handle.get()
    }
}

impl Lockable for PMutex {
    fn lock(&self) -> Result<(), SysError> {
        // SAFETY: The handle was initialized in try_new and isn't destroyed until drop.
        let code = unsafe { libc::pthread_mutex_lock(self.as_ptr()) };
        SysError::check(code, "lock mutex", "pthread_mutex_lock")
    }

    fn try_lock(&self) -> Result<bool, SysError> {
        // SAFETY: The handle was initialized in try_new and isn't destroyed until drop.
        match unsafe { libc::pthread_mutex_trylock(self.as_ptr()) } {
            0 => Ok(true),
            EBUSY => Ok(false),
            code => Err(SysError::os("try-lock mutex", "pthread_mutex_trylock", code)),
        }
    }

    fn unlock(&self) -> Result<(), SysError> {
        // SAFETY: The handle was initialized in try_new. Unlocking from a thread which doesn't own
        // the mutex is reported as EPERM by an error checking mutex.
        let code = unsafe { libc::pthread_mutex_unlock(self.as_ptr()) };
        SysError::check(code, "unlock mutex", "pthread_mutex_unlock")
    }
}

impl RawMutex for PMutex {
    type Native = pthread_mutex_t;

    fn try_new() -> Result<PMutex, SysError> {
        let mut attr = MaybeUninit::<pthread_mutexattr_t>::uninit();
        // SAFETY: attr is valid for writes.
        let code = unsafe { libc::pthread_mutexattr_init(attr.as_mut_ptr()) };
        SysError::check(code, "initialize mutex attributes", "pthread_mutexattr_init")?;

        let handle = Box::new(UnsafeCell::new(libc::PTHREAD_MUTEX_INITIALIZER));
        // SAFETY: attr was initialized above and handle points to a live, boxed mutex.
        let result = unsafe {
            SysError::check(
                libc::pthread_mutexattr_settype(attr.as_mut_ptr(), libc::PTHREAD_MUTEX_ERRORCHECK),
                "set mutex type",
                "pthread_mutexattr_settype",
            )
            .and_then(|()| SysError::check(
                libc::pthread_mutex_init(handle.get(), attr.as_ptr()),
                "initialize mutex",
                "pthread_mutex_init",
            ))
        };
        // SAFETY: attr was initialized and isn't used past this point.
        unsafe { libc::pthread_mutexattr_destroy(attr.as_mut_ptr()) };

        result.map(|()| PMutex { handle })
    }

    fn id(&self) -> u64 {
        self.as_ptr() as usize as u64
    }

    fn native_handle(&self) -> *mut pthread_mutex_t {
        self.as_ptr()
    }
}

impl Drop for PMutex {
    fn drop(&mut self) {
        // SAFETY: The mutex is initialized and, since self is being dropped, no guard borrows it.
        let code = unsafe { libc::pthread_mutex_destroy(self.as_ptr()) };
        SysError::check(code, "destroy mutex", "pthread_mutex_destroy").or_terminate();
    }
}

// SAFETY: pthread mutexes are designed to be shared between threads, and the handle never moves.
unsafe impl Send for PMutex {}
// SAFETY: As above, every operation goes through the thread-safe pthread API.
unsafe impl Sync for PMutex {}

impl Debug for PMutex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PMutex(#{})", self.id())
    }
}
