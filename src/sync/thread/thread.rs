use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use derive_more::IsVariant;

use super::{Outcome, RawThread, panic_message};
use crate::sync::{Atomic, MemOrder, SysError, Terminate};
use crate::util::result::ResultExtension;

#[cfg(unix)]
pub(crate) type NativeThread = super::PThread;
#[cfg(windows)]
pub(crate) type NativeThread = super::WThread;

/// What a [`Thread`] does with its OS thread when dropped while still joinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum JoinPolicy {
    /// Block until the thread finishes.
    #[default]
    AutoJoin,
    /// Let the thread run on unobserved.
    AutoDetach,
}

/// The failure reported by a thread's callback, written by the thread and taken by the joiner.
type FailureSlot = Arc<Atomic<Option<String>>>;

/// An OS thread, which is joined or detached when dropped according to its [`JoinPolicy`].
///
/// The callback may return `()` or a `Result<(), E>`. If it panics or returns an [`Err`], the message
/// is kept until the thread is joined and returned as a [`SysError::Callback`].
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use original::sync::{Atomic, SysError, Thread};
/// let count = Arc::new(Atomic::new(0_u32));
/// let counter = Arc::clone(&count);
/// let mut thread = Thread::new(move || {
///     counter.set(1);
/// });
/// thread.join().unwrap();
/// assert_eq!(count.get(), 1);
///
/// let mut failing = Thread::new(|| Err::<(), _>("no input"));
/// assert_eq!(failing.join(), Err(SysError::Callback(String::from("no input"))));
/// ```
pub struct Thread {
    raw: NativeThread,
    policy: JoinPolicy,
    failure: Option<FailureSlot>,
}

impl Thread {
    /// Starts a thread running `callback`, which is joined when dropped.
    ///
    /// # Panics
    /// Panics if the OS fails to create the thread. See [`Thread::try_new`].
    pub fn new<F, O>(callback: F) -> Thread
    where
        F: FnOnce() -> O + Send + 'static,
        O: Outcome,
    {
        Thread::try_new(callback, JoinPolicy::AutoJoin).throw()
    }

    /// Starts a thread running `callback`, which is handled according to `policy` when dropped.
    ///
    /// # Panics
    /// Panics if the OS fails to create the thread. See [`Thread::try_new`].
    pub fn with_policy<F, O>(callback: F, policy: JoinPolicy) -> Thread
    where
        F: FnOnce() -> O + Send + 'static,
        O: Outcome,
    {
        Thread::try_new(callback, policy).throw()
    }

    /// Starts a thread running `callback`, or returns an [`Err`] if the OS can't create it.
    pub fn try_new<F, O>(callback: F, policy: JoinPolicy) -> Result<Thread, SysError>
    where
        F: FnOnce() -> O + Send + 'static,
        O: Outcome,
    {
        let failure = FailureSlot::default();
        let slot = Arc::clone(&failure);
        let raw = NativeThread::spawn(Box::new(move || {
            let message = match panic::catch_unwind(AssertUnwindSafe(callback)) {
                Ok(outcome) => outcome.failure(),
                Err(payload) => Some(panic_message(&*payload)),
            };
            if message.is_some() {
                slot.store(message, MemOrder::Release);
            }
        }))?;

        let thread = Thread {
            raw,
            policy,
            failure: Some(failure),
        };
        tracing::trace!(id = thread.id(), ?policy, "spawned thread");
        Ok(thread)
    }

    /// Creates a Thread which doesn't refer to any OS thread.
    pub fn empty() -> Thread {
        Thread {
            raw: NativeThread::empty(),
            policy: JoinPolicy::default(),
            failure: None,
        }
    }

    /// Returns self with its [`JoinPolicy`] replaced.
    pub fn with_join_policy(mut self, policy: JoinPolicy) -> Thread {
        self.policy = policy;
        self
    }

    pub const fn policy(&self) -> JoinPolicy {
        self.policy
    }

    /// Returns true if the Thread still refers to an OS thread, which hasn't been joined or detached.
    pub fn joinable(&self) -> bool {
        self.raw.joinable()
    }

    /// Blocks until the thread finishes. Joining a Thread which isn't joinable does nothing.
    ///
    /// Returns a [`SysError::Callback`] if the callback panicked or returned an [`Err`].
    pub fn join(&mut self) -> Result<(), SysError> {
        if !self.joinable() {
            return Ok(());
        }

        let id = self.id();
        self.raw.join()?;
        tracing::trace!(id, "joined thread");

        match self.failure.take().and_then(|slot| slot.exchange(None, MemOrder::Acquire)) {
            Some(message) => Err(SysError::Callback(message)),
            None => Ok(()),
        }
    }

    /// Lets the thread run on independently. A failure of its callback is no longer observable.
    /// Detaching a Thread which isn't joinable does nothing.
    pub fn detach(&mut self) -> Result<(), SysError> {
        if !self.joinable() {
            return Ok(());
        }

        let id = self.id();
        self.raw.detach()?;
        self.failure = None;
        tracing::trace!(id, "detached thread");
        Ok(())
    }

    /// Returns the id of the thread, or zero if the Thread isn't joinable.
    pub fn id(&self) -> u64 {
        self.raw.id()
    }

    /// Returns the id of the calling thread.
    pub fn this_id() -> u64 {
        NativeThread::current_id()
    }

    /// Blocks the calling thread for at least `duration`.
    ///
    /// # Panics
    /// Panics if the OS reports an error. See [`Thread::try_sleep`].
    pub fn sleep(duration: Duration) {
        Thread::try_sleep(duration).throw()
    }

    /// Blocks the calling thread for at least `duration`, resuming after interruptions.
    pub fn try_sleep(duration: Duration) -> Result<(), SysError> {
        NativeThread::sleep(duration)
    }
}

impl Default for Thread {
    fn default() -> Self {
        Thread::empty()
    }
}

impl Drop for Thread {
    fn drop(&mut self) {
        let id = self.id();
        let result = match self.policy {
            JoinPolicy::AutoJoin => self.join(),
            JoinPolicy::AutoDetach => self.detach(),
        };

        match result {
            Ok(()) => {},
            Err(SysError::Callback(message)) => {
                tracing::error!(id, failure = %message, "thread callback failed");
            },
            Err(error) => error.terminate(),
        }
    }
}

impl PartialEq for Thread {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Thread {}

impl PartialOrd for Thread {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Thread {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl Hash for Thread {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Debug for Thread {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thread")
            .field("id", &self.id())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Display for Thread {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Thread(#{})", self.id())
    }
}
