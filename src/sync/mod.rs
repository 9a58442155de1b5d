//! Portable synchronization primitives over the operating system's threading API.
//!
//! Each primitive is specified by a trait ([`RawMutex`], [`RawCondition`], [`RawThread`]) with one
//! implementation per platform: pthreads through `libc` on unix, and the Win32 threading API through
//! `windows` on Windows. The facades [`Mutex`], [`Condition`] and [`Thread`] alias the backend picked
//! at compile time, so code written against them is portable without any runtime dispatch.
//!
//! [`Semaphore`] and [`SyncPoint`] are built on the facades alone, so they need no platform code.
//!
//! Fallible operations return a [`SysError`]. Failures which can't be reported because they happen
//! during a `drop` are logged and abort the process, see [`Terminate`].

mod atomic;
mod condition;
mod error;
mod lock;
mod mutex;
mod semaphore;
mod sync_point;
mod thread;

pub use atomic::*;
pub use condition::*;
pub use error::*;
pub use lock::*;
pub use mutex::*;
pub use semaphore::*;
pub use sync_point::*;
pub use thread::*;

#[cfg(not(any(unix, windows)))]
compile_error!("the sync module requires either a unix or a windows target");
