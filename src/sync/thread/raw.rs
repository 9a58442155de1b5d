use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use super::panic_message;
use crate::sync::SysError;

/// A task run by a [`RawThread`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An OS thread handle.
///
/// A handle is joinable from the moment it is spawned until it is joined or detached, after which it
/// is empty. Dropping a handle which is still joinable detaches it.
pub trait RawThread: Sized {
    /// Starts a new OS thread running `task`.
    fn spawn(task: Task) -> Result<Self, SysError>;

    /// Creates a handle which doesn't refer to any thread.
    fn empty() -> Self;

    fn joinable(&self) -> bool;

    /// Blocks until the thread finishes, leaving the handle empty.
    fn join(&mut self) -> Result<(), SysError>;

    /// Lets the thread run on without the handle, leaving the handle empty.
    fn detach(&mut self) -> Result<(), SysError>;

    /// Returns the id of the thread, or zero for an empty handle.
    fn id(&self) -> u64;

    /// Returns the id of the calling thread.
    fn current_id() -> u64;

    /// Blocks the calling thread for at least `duration`.
    fn sleep(duration: Duration) -> Result<(), SysError>;
}

/// Runs a task on a freshly spawned thread. A panic is logged and swallowed, since it can't unwind
/// across the OS entry point.
pub(crate) fn run(task: Task) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
        tracing::error!(panic = %panic_message(&*payload), "thread task panicked");
    }
}
