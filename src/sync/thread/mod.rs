mod outcome;
#[cfg(unix)]
mod posix;
mod raw;
mod thread;
mod tests;
#[cfg(windows)]
mod win32;

pub use outcome::*;
#[cfg(unix)]
pub use posix::*;
pub use raw::*;
pub use thread::*;
#[cfg(windows)]
pub use win32::*;
