use std::time::{Duration, Instant};

use crate::sync::{RawMutex, SysError};

/// A condition variable backed directly by an OS primitive.
///
/// Each implementation is tied to the mutex of its platform through [`Mutex`](RawCondition::Mutex),
/// so pairing a condition with a mutex it can't wait on is a compile error. Every wait requires that
/// mutex to be held by the calling thread. It is released while waiting and held again on return.
pub trait RawCondition {
    type Mutex: RawMutex;

    fn try_new() -> Result<Self, SysError>
    where
        Self: Sized;

    /// Blocks until notified. The wakeup may be spurious.
    fn wait(&self, mutex: &Self::Mutex) -> Result<(), SysError>;

    /// Blocks until notified or until `duration` has passed, returning false on timeout.
    fn wait_for(&self, mutex: &Self::Mutex, duration: Duration) -> Result<bool, SysError>;

    /// Wakes one waiting thread.
    fn notify(&self) -> Result<(), SysError>;

    /// Wakes every waiting thread.
    fn notify_all(&self) -> Result<(), SysError>;

    /// Blocks until `predicate` returns true, waiting again after every wakeup where it doesn't.
    fn wait_until<P: FnMut() -> bool>(&self, mutex: &Self::Mutex, mut predicate: P) -> Result<(), SysError>
    where
        Self: Sized,
    {
        while !predicate() {
            self.wait(mutex)?;
        }
        Ok(())
    }

    /// Blocks until `predicate` returns true or `duration` has passed, returning the final value of
    /// the predicate.
    ///
    /// Spurious wakeups don't extend the wait: each wait only uses what is left of the budget.
    fn wait_for_until<P: FnMut() -> bool>(
        &self,
        mutex: &Self::Mutex,
        duration: Duration,
        mut predicate: P,
    ) -> Result<bool, SysError>
    where
        Self: Sized,
    {
        let start = Instant::now();
        while !predicate() {
            let Some(remaining) = duration.checked_sub(start.elapsed()) else {
                return Ok(false);
            };
            if !self.wait_for(mutex, remaining)? {
                return Ok(predicate());
            }
        }
        Ok(true)
    }

    /// Wakes `count` waiting threads: none for zero, one for one, every thread otherwise.
    fn notify_some(&self, count: u32) -> Result<(), SysError> {
        match count {
            0 => Ok(()),
            1 => self.notify(),
            _ => self.notify_all(),
        }
    }
}
