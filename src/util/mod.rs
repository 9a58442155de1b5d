#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod hash;
pub mod panic;
pub mod result;
#[cfg(all(unix, feature = "sync"))]
pub mod syscall;
