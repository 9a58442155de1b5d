use std::fmt::{self, Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};

use crate::sync::{
    Atomic, Condition, LockPolicy, MemOrder, Mutex, Outcome, RawCondition, SysError, UniqueLock, panic_message,
};

type Completion = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// A reusable barrier for a fixed number of threads.
///
/// Each thread calls [`arrive`](SyncPoint::arrive) and blocks until `max_arrived` threads have
/// arrived in the current round. The last one to arrive runs the completion callback, if any, starts
/// the next round and releases the others. A failure of the callback is reported to every thread of
/// that round as a [`SysError::Callback`].
///
/// A SyncPoint for zero threads is disabled: arriving returns immediately.
///
/// # Examples
/// ```
/// # use original::sync::SyncPoint;
/// # use std::thread;
/// let point = SyncPoint::new(3);
/// thread::scope(|s| {
///     for _ in 0..3 {
///         s.spawn(|| point.arrive().unwrap());
///     }
/// });
/// assert_eq!(point.round(), 1);
/// ```
pub struct SyncPoint {
    max: u64,
    mutex: Mutex,
    condition: Condition,
    // The counters and the failure are only written while the mutex is held.
    arrived: Atomic<u64>,
    round: Atomic<u64>,
    failure: Atomic<Option<(u64, String)>>,
    completion: Option<Completion>,
}

impl SyncPoint {
    /// Creates a SyncPoint releasing `max` threads at a time.
    ///
    /// # Panics
    /// Panics if the OS fails to initialize the underlying primitives.
    pub fn new(max: u64) -> SyncPoint {
        SyncPoint::build(max, None)
    }

    /// Creates a SyncPoint which runs `completion` once per round, before releasing its threads.
    ///
    /// The callback may return a [`Result`]; an error or a panic fails the round for every thread.
    pub fn with_completion<F, O>(max: u64, completion: F) -> SyncPoint
    where
        F: Fn() -> O + Send + Sync + 'static,
        O: Outcome,
    {
        SyncPoint::build(max, Some(Box::new(move || completion().failure())))
    }

    fn build(max: u64, completion: Option<Completion>) -> SyncPoint {
        SyncPoint {
            max,
            mutex: Mutex::new(),
            condition: Condition::new(),
            arrived: Atomic::new(0),
            round: Atomic::new(0),
            failure: Atomic::new(None),
            completion,
        }
    }

    /// Blocks until every thread of the current round has arrived.
    pub fn arrive(&self) -> Result<(), SysError> {
        if self.max == 0 {
            return Ok(());
        }

        let mut guard = UniqueLock::new(&self.mutex, LockPolicy::Auto)?;
        let this_round = self.round.load(MemOrder::Relaxed);
        let arrived = self.arrived.fetch_add(1, MemOrder::Relaxed) + 1;

        if arrived < self.max {
            self.condition
                .wait_lock_until(&guard, || self.round.load(MemOrder::Relaxed) != this_round)?;
            return match self.failure.load(MemOrder::Relaxed) {
                Some((round, message)) if round == this_round => Err(SysError::Callback(message)),
                _ => Ok(()),
            };
        }

        self.round.store(this_round.wrapping_add(1), MemOrder::Relaxed);
        let failure = self.complete();
        self.failure
            .store(failure.clone().map(|message| (this_round, message)), MemOrder::Relaxed);
        self.arrived.fetch_sub(self.max, MemOrder::Relaxed);

        guard.unlock()?;
        self.condition.notify_all()?;
        tracing::trace!(round = this_round, failed = failure.is_some(), "sync point released");

        match failure {
            Some(message) => Err(SysError::Callback(message)),
            None => Ok(()),
        }
    }

    /// Runs the completion callback, returning its failure message.
    fn complete(&self) -> Option<String> {
        let completion = self.completion.as_ref()?;
        match panic::catch_unwind(AssertUnwindSafe(|| completion())) {
            Ok(failure) => failure,
            Err(payload) => Some(panic_message(&*payload)),
        }
    }

    /// Returns the number of threads released together.
    pub const fn max_arrived(&self) -> u64 {
        self.max
    }

    /// Returns the number of threads waiting in the current round.
    pub fn current_arrived(&self) -> u64 {
        self.arrived.load(MemOrder::Acquire)
    }

    /// Returns the number of completed rounds.
    pub fn round(&self) -> u64 {
        self.round.load(MemOrder::Acquire)
    }
}

impl Default for SyncPoint {
    fn default() -> Self {
        SyncPoint::new(0)
    }
}

impl Debug for SyncPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncPoint")
            .field("max", &self.max)
            .field("arrived", &self.current_arrived())
            .field("round", &self.round())
            .finish_non_exhaustive()
    }
}
