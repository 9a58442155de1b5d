use derive_more::IsVariant;

/// What a guard does with its mutexes when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum LockPolicy {
    /// Leave the mutexes alone. The guard starts unlocked.
    Manual,
    /// Lock the mutexes, blocking until they are acquired.
    #[default]
    Auto,
    /// Try to lock the mutexes without blocking. Whether it worked is reported by `is_locked`.
    Try,
    /// The caller already holds the mutexes. The guard only takes over unlocking them.
    Adopt,
}
