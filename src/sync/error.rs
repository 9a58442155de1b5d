use std::fmt::Display;
use std::process;

use derive_more::{Display, Error, IsVariant};

/// A failure reported by one of the synchronization primitives.
///
/// Every concurrency failure is funneled into this one type, whether it came from the OS, from
/// misusing a guard or from a thread's callback.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error, IsVariant)]
pub enum SysError {
    /// An OS call returned an error code.
    #[display("Failed to {operation} ({call} returned {code})")]
    Os {
        operation: &'static str,
        call: &'static str,
        code: i32,
    },
    /// The primitive was used in a state which doesn't allow the operation.
    #[display("Cannot {operation}: {reason}")]
    Misuse {
        operation: &'static str,
        reason: &'static str,
    },
    /// A thread's callback panicked or returned an error, carrying its message.
    #[display("Thread callback execution failed with message: {_0}")]
    Callback(#[error(not(source))] String),
}

impl SysError {
    pub(crate) const fn os(operation: &'static str, call: &'static str, code: i32) -> SysError {
        SysError::Os { operation, call, code }
    }

    pub(crate) const fn misuse(operation: &'static str, reason: &'static str) -> SysError {
        SysError::Misuse { operation, reason }
    }

    /// Converts the return value of a pthread-style call, where zero is success and anything else is
    /// an error code.
    pub(crate) const fn check(code: i32, operation: &'static str, call: &'static str) -> Result<(), SysError> {
        match code {
            0 => Ok(()),
            code => Err(SysError::os(operation, call, code)),
        }
    }

    /// Returns the OS error code, if this error came from the OS.
    pub const fn code(&self) -> Option<i32> {
        match self {
            SysError::Os { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// An error which can't be handled where it occurs, such as during a `drop`.
///
/// Terminating logs the error through [`tracing`] and then aborts the process. Unwinding isn't an
/// option, since a panic during another panic's unwind would abort anyway, without the message.
pub trait Terminate: Display {
    fn terminate(&self) -> ! {
        tracing::error!(error = %self, "fatal error in a synchronization primitive, aborting");
        process::abort()
    }
}

impl Terminate for SysError {}

pub(crate) trait OrTerminate<T> {
    /// Returns the contained value, or terminates the process with the error.
    fn or_terminate(self) -> T;
}

impl<T, E: Terminate> OrTerminate<T> for Result<T, E> {
    fn or_terminate(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => error.terminate(),
        }
    }
}
