use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;
use std::time::Duration;

use libc::{ETIMEDOUT, clockid_t, pthread_cond_t, pthread_condattr_t, time_t, timespec};

use super::RawCondition;
use crate::sync::{PMutex, SysError};
use crate::util::syscall::err_no;

/// The clock used for timed waits. Apple platforms can't configure a condition variable's clock, so
/// they fall back to the realtime clock.
#[cfg(not(target_vendor = "apple"))]
const WAIT_CLOCK: clockid_t = libc::CLOCK_MONOTONIC;
#[cfg(target_vendor = "apple")]
const WAIT_CLOCK: clockid_t = libc::CLOCK_REALTIME;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A condition variable over `pthread_cond_t`, waiting on a [`PMutex`].
///
/// Timed waits are measured against `CLOCK_MONOTONIC` where the platform allows it, so changes to the
/// system time don't shorten or extend them.
pub struct PCondition {
    handle: Box<UnsafeCell<pthread_cond_t>>,
}

impl PCondition {
    fn as_ptr(&self) -> *mut pthread_cond_t {
        self.handle.get()
    }
}

/// Returns the absolute time on [`WAIT_CLOCK`] which lies `duration` from now, saturating at the
/// largest representable time.
fn deadline(duration: Duration) -> Result<timespec, SysError> {
    let mut now = MaybeUninit::<timespec>::uninit();
    // SAFETY: now is valid for writes.
    if unsafe { libc::clock_gettime(WAIT_CLOCK, now.as_mut_ptr()) } == -1 {
        return Err(SysError::os("read the wait clock", "clock_gettime", err_no()));
    }
    // SAFETY: clock_gettime succeeded, so now is initialized.
    let mut time = unsafe { now.assume_init() };

    let nanos = time.tv_nsec as i64 + i64::from(duration.subsec_nanos());
    let secs = (time.tv_sec as i64)
        .saturating_add(i64::try_from(duration.as_secs()).unwrap_or(i64::MAX))
        .saturating_add(nanos / NANOS_PER_SEC);

    time.tv_sec = secs.min(time_t::MAX as i64) as time_t;
    time.tv_nsec = (nanos % NANOS_PER_SEC) as _;
    Ok(time)
}

impl RawCondition for PCondition {
    type Mutex = PMutex;

    fn try_new() -> Result<PCondition, SysError> {
        let mut attr = MaybeUninit::<pthread_condattr_t>::uninit();
        // SAFETY: attr is valid for writes.
        let code = unsafe { libc::pthread_condattr_init(attr.as_mut_ptr()) };
        SysError::check(code, "initialize condition variable attributes", "pthread_condattr_init")?;

        #[cfg(not(target_vendor = "apple"))]
        let configured = SysError::check(
            // SAFETY: attr was initialized above.
            unsafe { libc::pthread_condattr_setclock(attr.as_mut_ptr(), WAIT_CLOCK) },
            "set condition variable clock",
            "pthread_condattr_setclock",
        );
        #[cfg(target_vendor = "apple")]
        let configured = Ok(());

        let handle = Box::new(UnsafeCell::new(libc::PTHREAD_COND_INITIALIZER));
        let result = configured.and_then(|()| SysError::check(
            // SAFETY: attr is initialized and handle points to a live, boxed condition variable.
            unsafe { libc::pthread_cond_init(handle.get(), attr.as_ptr()) },
            "initialize condition variable",
            "pthread_cond_init",
        ));
        // SAFETY: attr was initialized and isn't used past this point.
        unsafe { libc::pthread_condattr_destroy(attr.as_mut_ptr()) };

        result.map(|()| PCondition { handle })
    }

    fn wait(&self, mutex: &PMutex) -> Result<(), SysError> {
        // SAFETY: Both handles are initialized and boxed. Waiting without holding the error checking
        // mutex is reported as EPERM.
        let code = unsafe { libc::pthread_cond_wait(self.as_ptr(), mutex.as_ptr()) };
        SysError::check(code, "wait on condition variable", "pthread_cond_wait")
    }

    fn wait_for(&self, mutex: &PMutex, duration: Duration) -> Result<bool, SysError> {
        let deadline = deadline(duration)?;
        // SAFETY: As for wait, and deadline is a valid timespec.
        match unsafe { libc::pthread_cond_timedwait(self.as_ptr(), mutex.as_ptr(), &deadline) } {
            0 => Ok(true),
            ETIMEDOUT => Ok(false),
            code => Err(SysError::os("timed wait on condition variable", "pthread_cond_timedwait", code)),
        }
    }

    fn notify(&self) -> Result<(), SysError> {
        // SAFETY: The handle is initialized and boxed.
        let code = unsafe { libc::pthread_cond_signal(self.as_ptr()) };
        SysError::check(code, "signal condition variable", "pthread_cond_signal")
    }

    fn notify_all(&self) -> Result<(), SysError> {
        // SAFETY: The handle is initialized and boxed.
        let code = unsafe { libc::pthread_cond_broadcast(self.as_ptr()) };
        SysError::check(code, "broadcast condition variable", "pthread_cond_broadcast")
    }
}

impl Drop for PCondition {
    fn drop(&mut self) {
        // SAFETY: The handle is initialized, and no thread can be waiting on it since self is being
        // dropped.
        let code = unsafe { libc::pthread_cond_destroy(self.as_ptr()) };
        if let Err(error) = SysError::check(code, "destroy condition variable", "pthread_cond_destroy") {
            tracing::warn!(%error, "leaking a condition variable");
        }
    }
}

// SAFETY: pthread condition variables are designed to be shared between threads, and the handle
// never moves.
unsafe impl Send for PCondition {}
// SAFETY: As above, every operation goes through the thread-safe pthread API.
unsafe impl Sync for PCondition {}

impl Debug for PCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PCondition({:p})", self.as_ptr())
    }
}
