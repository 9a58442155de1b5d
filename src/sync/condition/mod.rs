//! Condition variables: the [`RawCondition`] trait, its platform implementations and the
//! [`Condition`] facade.

mod condition;
#[cfg(unix)]
mod posix;
mod raw;
#[cfg(windows)]
mod win32;

pub use condition::*;
#[cfg(unix)]
pub use posix::*;
pub use raw::*;
#[cfg(windows)]
pub use win32::*;
