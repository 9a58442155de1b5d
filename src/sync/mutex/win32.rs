use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicU32, Ordering};

use windows::Win32::System::Threading::{
    AcquireSRWLockExclusive, GetCurrentThreadId, InitializeSRWLock, ReleaseSRWLockExclusive, SRWLOCK,
    TryAcquireSRWLockExclusive,
};

use super::{Lockable, RawMutex};
use crate::sync::SysError;

/// A mutex over a slim reader/writer lock, only ever acquired in exclusive mode.
///
/// SRW locks don't detect misuse, so the id of the owning thread is tracked alongside the lock.
/// A relock by the owner or an unlock by another thread is reported instead of being passed on.
pub struct WMutex {
    handle: Box<UnsafeCell<SRWLOCK>>,
    owner: AtomicU32,
}

/// No thread has an id of zero.
const NO_OWNER: u32 = 0;

fn current_thread() -> u32 {
    // SAFETY: GetCurrentThreadId has no preconditions.
    unsafe { GetCurrentThreadId() }
}

impl WMutex {
    pub(crate) fn as_ptr(&self) -> *mut SRWLOCK {
        self.handle.get()
    }

    /// Gives up ownership before the lock is released by a condition variable wait.
    pub(crate) fn disown(&self, operation: &'static str) -> Result<(), SysError> {
        self.owner
            .compare_exchange(current_thread(), NO_OWNER, Ordering::Relaxed, Ordering::Relaxed)
            .map(|_| ())
            .map_err(|_| SysError::misuse(operation, "mutex isn't held by the calling thread"))
    }

    /// Claims ownership once a condition variable wait has reacquired the lock.
    pub(crate) fn claim(&self) {
        self.owner.store(current_thread(), Ordering::Relaxed);
    }
}

impl Lockable for WMutex {
    fn lock(&self) -> Result<(), SysError> {
        if self.owner.load(Ordering::Relaxed) == current_thread() {
            return Err(SysError::misuse("lock mutex", "already held by the calling thread"));
        }
        // SAFETY: The lock was initialized in try_new and is boxed, so its address is stable.
        unsafe { AcquireSRWLockExclusive(self.as_ptr()) };
        self.claim();
        Ok(())
    }

    fn try_lock(&self) -> Result<bool, SysError> {
        // SAFETY: The lock was initialized in try_new and is boxed, so its address is stable.
        let acquired = unsafe { TryAcquireSRWLockExclusive(self.as_ptr()) }.0 != 0;
        if acquired {
            self.claim();
        }
        Ok(acquired)
    }

    fn unlock(&self) -> Result<(), SysError> {
        self.disown("unlock mutex")?;
        // SAFETY: The calling thread owned the lock, checked by disown.
        unsafe { ReleaseSRWLockExclusive(self.as_ptr()) };
        Ok(())
    }
}

impl RawMutex for WMutex {
    type Native = SRWLOCK;

    fn try_new() -> Result<WMutex, SysError> {
        let handle = Box::new(UnsafeCell::new(SRWLOCK::default()));
        // SAFETY: handle points to a live SRWLOCK which nothing else references yet.
        unsafe { InitializeSRWLock(handle.get()) };
        Ok(WMutex {
            handle,
            owner: AtomicU32::new(NO_OWNER),
        })
    }

    fn id(&self) -> u64 {
        self.as_ptr() as usize as u64
    }

    fn native_handle(&self) -> *mut SRWLOCK {
        self.as_ptr()
    }
}

// SAFETY: SRW locks are designed to be shared between threads, and the handle never moves.
unsafe impl Send for WMutex {}
// SAFETY: As above, every operation goes through the thread-safe Win32 API.
unsafe impl Sync for WMutex {}

impl Debug for WMutex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WMutex(#{})", self.id())
    }
}
