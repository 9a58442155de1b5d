//! Mutual exclusion: the [`Lockable`] and [`RawMutex`] traits, their platform implementations and
//! the [`Mutex`] facade.

mod lockable;
mod mutex;
#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod win32;
mod tests;

pub use lockable::*;
pub use mutex::*;
#[cfg(unix)]
pub use posix::*;
#[cfg(windows)]
pub use win32::*;
