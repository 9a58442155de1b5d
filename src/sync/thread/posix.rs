use std::ffi::c_void;
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::time::Duration;

use libc::{EINTR, pthread_t, time_t, timespec};

use super::{RawThread, Task, run};
use crate::sync::{OrTerminate, SysError};
use crate::util::syscall::err_no;

/// A thread over `pthread_t`.
pub struct PThread {
    handle: Option<pthread_t>,
}

/// Reads the bytes of a `pthread_t` as an id. The type is opaque and may be an integer or a pointer,
/// so only its bytes are relied upon.
fn id_of(handle: pthread_t) -> u64 {
    let mut id = [0_u8; 8];
    let len = mem::size_of::<pthread_t>().min(id.len());
    // SAFETY: Both buffers hold at least len bytes and don't overlap.
    unsafe { ptr::copy_nonoverlapping((&raw const handle).cast::<u8>(), id.as_mut_ptr(), len) };
    u64::from_ne_bytes(id)
}

extern "C" fn trampoline(task: *mut c_void) -> *mut c_void {
    // SAFETY: spawn leaks exactly one Box<Task> per thread and hands it over here.
    let task = unsafe { Box::from_raw(task.cast::<Task>()) };
    run(*task);
    ptr::null_mut()
}

impl RawThread for PThread {
    fn spawn(task: Task) -> Result<PThread, SysError> {
        // The task is boxed again, since a Box<dyn FnOnce()> is too wide for a void pointer.
        let task = Box::into_raw(Box::new(task));
        let mut handle = MaybeUninit::<pthread_t>::uninit();
        // SAFETY: handle is writable, null attributes select the defaults and the trampoline takes
        // ownership of task if the thread starts.
        let code = unsafe {
            libc::pthread_create(handle.as_mut_ptr(), ptr::null(), trampoline, task.cast())
        };

        if code != 0 {
            // SAFETY: No thread was started, so task is still owned here.
            drop(unsafe { Box::from_raw(task) });
            return Err(SysError::os("create thread", "pthread_create", code));
        }
        Ok(PThread {
            // SAFETY: pthread_create succeeded, so it wrote the handle.
            handle: Some(unsafe { handle.assume_init() }),
        })
    }

    fn empty() -> PThread {
        PThread { handle: None }
    }

    fn joinable(&self) -> bool {
        self.handle.is_some()
    }

    fn join(&mut self) -> Result<(), SysError> {
        let handle = self.handle.take()
            .ok_or(SysError::misuse("join thread", "thread isn't joinable"))?;
        // SAFETY: The handle refers to a thread which hasn't been joined or detached.
        let code = unsafe { libc::pthread_join(handle, ptr::null_mut()) };
        if code != 0 {
            self.handle = Some(handle);
        }
        SysError::check(code, "join thread", "pthread_join")
    }

    fn detach(&mut self) -> Result<(), SysError> {
        let handle = self.handle.take()
            .ok_or(SysError::misuse("detach thread", "thread isn't joinable"))?;
        // SAFETY: The handle refers to a thread which hasn't been joined or detached.
        let code = unsafe { libc::pthread_detach(handle) };
        if code != 0 {
            self.handle = Some(handle);
        }
        SysError::check(code, "detach thread", "pthread_detach")
    }

    fn id(&self) -> u64 {
        self.handle.map_or(0, id_of)
    }

    fn current_id() -> u64 {
        // SAFETY: pthread_self has no preconditions.
        id_of(unsafe { libc::pthread_self() })
    }

    fn sleep(duration: Duration) -> Result<(), SysError> {
        if duration.is_zero() {
            return Ok(());
        }

        // SAFETY: timespec is plain data, for which all zeroes is valid.
        let mut request: timespec = unsafe { mem::zeroed() };
        request.tv_sec = duration.as_secs().min(time_t::MAX as u64) as time_t;
        request.tv_nsec = duration.subsec_nanos() as _;

        loop {
            // SAFETY: As above.
            let mut remaining: timespec = unsafe { mem::zeroed() };
            // SAFETY: Both pointers refer to live timespecs on this stack frame.
            if unsafe { libc::nanosleep(&request, &mut remaining) } == 0 {
                return Ok(());
            }
            match err_no() {
                EINTR => request = remaining,
                code => return Err(SysError::os("sleep", "nanosleep", code)),
            }
        }
    }
}

// SAFETY: A pthread_t may be used from any thread. It is only a pointer on some platforms.
unsafe impl Send for PThread {}
// SAFETY: Shared references only read the handle.
unsafe impl Sync for PThread {}

impl Drop for PThread {
    fn drop(&mut self) {
        if self.joinable() {
            self.detach().or_terminate();
        }
    }
}

impl Debug for PThread {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PThread(#{})", self.id())
    }
}
