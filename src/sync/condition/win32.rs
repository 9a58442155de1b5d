use std::cell::UnsafeCell;
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use windows::Win32::Foundation::ERROR_TIMEOUT;
use windows::Win32::System::Threading::{
    CONDITION_VARIABLE, INFINITE, InitializeConditionVariable, SleepConditionVariableSRW,
    WakeAllConditionVariable, WakeConditionVariable,
};

use super::RawCondition;
use crate::sync::{SysError, WMutex};

/// A condition variable over `CONDITION_VARIABLE`, waiting on a [`WMutex`].
pub struct WCondition {
    handle: Box<UnsafeCell<CONDITION_VARIABLE>>,
}

impl WCondition {
    fn as_ptr(&self) -> *mut CONDITION_VARIABLE {
        self.handle.get()
    }

    fn sleep(&self, mutex: &WMutex, millis: u32, operation: &'static str) -> Result<bool, SysError> {
        mutex.disown(operation)?;
        // SAFETY: Both handles are initialized and boxed, and the calling thread holds the lock.
        let result = unsafe { SleepConditionVariableSRW(self.as_ptr(), mutex.as_ptr(), millis, 0) };
        // The lock is held again once the call returns, whatever the outcome.
        mutex.claim();

        match result {
            Ok(()) => Ok(true),
            Err(error) if error.code() == ERROR_TIMEOUT.to_hresult() => Ok(false),
            Err(error) => Err(SysError::os(operation, "SleepConditionVariableSRW", error.code().0)),
        }
    }
}

impl RawCondition for WCondition {
    type Mutex = WMutex;

    fn try_new() -> Result<WCondition, SysError> {
        let handle = Box::new(UnsafeCell::new(CONDITION_VARIABLE::default()));
        // SAFETY: handle points to a live CONDITION_VARIABLE which nothing else references yet.
        unsafe { InitializeConditionVariable(handle.get()) };
        Ok(WCondition { handle })
    }

    fn wait(&self, mutex: &WMutex) -> Result<(), SysError> {
        self.sleep(mutex, INFINITE, "wait on condition variable").map(|_| ())
    }

    fn wait_for(&self, mutex: &WMutex, duration: Duration) -> Result<bool, SysError> {
        // INFINITE itself would never time out.
        let millis = duration.as_millis().min(u128::from(INFINITE - 1)) as u32;
        self.sleep(mutex, millis, "timed wait on condition variable")
    }

    fn notify(&self) -> Result<(), SysError> {
        // SAFETY: The handle is initialized and boxed.
        unsafe { WakeConditionVariable(self.as_ptr()) };
        Ok(())
    }

    fn notify_all(&self) -> Result<(), SysError> {
        // SAFETY: The handle is initialized and boxed.
        unsafe { WakeAllConditionVariable(self.as_ptr()) };
        Ok(())
    }
}

// SAFETY: Condition variables are designed to be shared between threads, and the handle never moves.
unsafe impl Send for WCondition {}
// SAFETY: As above, every operation goes through the thread-safe Win32 API.
unsafe impl Sync for WCondition {}

impl Debug for WCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WCondition({:p})", self.as_ptr())
    }
}
