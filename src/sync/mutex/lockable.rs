use crate::sync::SysError;

/// Something that can be locked and unlocked, the minimal interface used by the lock guards.
///
/// The trait is object safe, which lets a [`MultiLock`](crate::sync::MultiLock) manage mutexes of
/// different types.
pub trait Lockable {
    /// Blocks until the lock is acquired.
    fn lock(&self) -> Result<(), SysError>;

    /// Acquires the lock if it is free, returning false without blocking if it isn't.
    fn try_lock(&self) -> Result<bool, SysError>;

    /// Releases the lock, which must be held by the calling thread.
    fn unlock(&self) -> Result<(), SysError>;
}

/// A mutex backed directly by an OS primitive.
///
/// Locking a mutex that the calling thread already holds, or unlocking one it doesn't hold, is
/// reported as an error instead of deadlocking or corrupting the lock.
pub trait RawMutex: Lockable {
    /// The OS handle type, shared with the condition variable of the same platform.
    type Native;

    fn try_new() -> Result<Self, SysError>
    where
        Self: Sized;

    /// Returns an identity for the mutex, derived from the address of its native handle. It is stable
    /// for the lifetime of the mutex.
    fn id(&self) -> u64;

    /// Returns the native handle, for interoperation with the OS API.
    fn native_handle(&self) -> *mut Self::Native;
}
