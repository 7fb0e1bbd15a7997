//! The flag capability set.
//!
//! [`FlagOps`] names the operations of a lock-free boolean so callers can be
//! written against the capability rather than a concrete type. [`AtomicFlag`]
//! is the one realization shipped here.
//!
//! [`AtomicFlag`]: crate::AtomicFlag

/// Operations of a thread-safe boolean flag.
///
/// Implementations must be non-blocking and linearizable: reads have acquire
/// semantics, writes have release semantics and read-modify-write operations
/// are single indivisible steps.
pub trait FlagOps: Send + Sync {
    /// Reads the current value.
    fn get(&self) -> bool;

    /// Overwrites the current value.
    fn set(&self, value: bool);

    /// Stores `new` iff the current value equals `expected`.
    ///
    /// Returns whether the store happened.
    fn compare_and_set(&self, expected: bool, new: bool) -> bool;

    /// Single attempt to move the flag from `false` to `true`.
    ///
    /// Returns `true` iff this call performed the transition.
    fn try_set_true(&self) -> bool;

    /// Single attempt to move the flag from `true` to `false`.
    ///
    /// Returns `true` iff this call performed the transition.
    fn try_set_false(&self) -> bool;

    /// Stores `new` unconditionally, returning the previous value.
    fn exchange(&self, new: bool) -> bool;

    /// Whether the flag currently reads `true`.
    #[inline]
    fn is_true(&self) -> bool {
        self.get()
    }

    /// Whether the flag currently reads `false`.
    #[inline]
    fn is_false(&self) -> bool {
        !self.get()
    }
}
