use std::ffi::c_void;
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use windows::Win32::Foundation::{CloseHandle, HANDLE, WAIT_OBJECT_0};
use windows::Win32::System::Threading::{
    CreateThread, GetCurrentThreadId, GetThreadId, INFINITE, Sleep, THREAD_CREATION_FLAGS,
    WaitForSingleObject,
};

use super::{RawThread, Task, run};
use crate::sync::{OrTerminate, SysError};

/// A thread over a Win32 thread `HANDLE`.
pub struct WThread {
    handle: Option<HANDLE>,
}

unsafe extern "system" fn trampoline(task: *mut c_void) -> u32 {
    // SAFETY: spawn leaks exactly one Box<Task> per thread and hands it over here.
    let task = unsafe { Box::from_raw(task.cast::<Task>()) };
    run(*task);
    0
}

fn close(handle: HANDLE, operation: &'static str) -> Result<(), SysError> {
    // SAFETY: The handle came from CreateThread and is closed exactly once.
    unsafe { CloseHandle(handle) }
        .map_err(|error| SysError::os(operation, "CloseHandle", error.code().0))
}

impl RawThread for WThread {
    fn spawn(task: Task) -> Result<WThread, SysError> {
        let task = Box::into_raw(Box::new(task));
        // SAFETY: The trampoline takes ownership of task if the thread starts.
        let created = unsafe {
            CreateThread(
                None,
                0,
                Some(trampoline),
                Some(task.cast_const().cast()),
                THREAD_CREATION_FLAGS(0),
                None,
            )
        };

        match created {
            Ok(handle) => Ok(WThread {
                handle: Some(handle),
            }),
            Err(error) => {
                // SAFETY: No thread was started, so task is still owned here.
                drop(unsafe { Box::from_raw(task) });
                Err(SysError::os("create thread", "CreateThread", error.code().0))
            },
        }
    }

    fn empty() -> WThread {
        WThread { handle: None }
    }

    fn joinable(&self) -> bool {
        self.handle.is_some()
    }

    fn join(&mut self) -> Result<(), SysError> {
        let handle = self.handle
            .ok_or(SysError::misuse("join thread", "thread isn't joinable"))?;
        // SAFETY: The handle is open until it is closed below.
        let event = unsafe { WaitForSingleObject(handle, INFINITE) };
        if event != WAIT_OBJECT_0 {
            return Err(SysError::os("join thread", "WaitForSingleObject", event.0 as i32));
        }
        self.handle = None;
        close(handle, "join thread")
    }

    fn detach(&mut self) -> Result<(), SysError> {
        let handle = self.handle
            .take()
            .ok_or(SysError::misuse("detach thread", "thread isn't joinable"))?;
        close(handle, "detach thread")
    }

    fn id(&self) -> u64 {
        // SAFETY: The handle is open while it is stored.
        self.handle.map_or(0, |handle| u64::from(unsafe { GetThreadId(handle) }))
    }

    fn current_id() -> u64 {
        // SAFETY: GetCurrentThreadId has no preconditions.
        u64::from(unsafe { GetCurrentThreadId() })
    }

    fn sleep(duration: Duration) -> Result<(), SysError> {
        let mut remaining = duration.as_nanos().div_ceil(1_000_000);
        while remaining > 0 {
            // INFINITE itself would never return.
            let chunk = remaining.min(u128::from(INFINITE - 1)) as u32;
            // SAFETY: Sleep has no preconditions.
            unsafe { Sleep(chunk) };
            remaining -= u128::from(chunk);
        }
        Ok(())
    }
}

// SAFETY: Thread handles may be used from any thread.
unsafe impl Send for WThread {}
// SAFETY: Shared references only read the handle.
unsafe impl Sync for WThread {}

impl Drop for WThread {
    fn drop(&mut self) {
        if self.joinable() {
            self.detach().or_terminate();
        }
    }
}

impl Debug for WThread {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WThread(#{})", self.id())
    }
}
