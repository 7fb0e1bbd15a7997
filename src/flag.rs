//! Lock-free boolean flag over a single 32-bit word.
//!
//! Ordering model:
//! - reads (`get`, `is_true`, `is_false`, formatting, serialization) are `Acquire` loads;
//! - writes (`set`) are `Release` stores;
//! - read-modify-write operations (`compare_and_set`, `exchange`, `try_set_*`)
//!   are `AcqRel`, with `Acquire` on a failed compare.
//!
//! A `Release` store that is observed by an `Acquire` load publishes every
//! write the storing thread made before it.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseFlagError;
use crate::sync::{AtomicU32, Ordering};
use crate::traits::FlagOps;

const FALSE: u32 = 0;
const TRUE: u32 = 1;

/// Only `0` and `1` are ever written to the word.
#[inline(always)]
const fn encode(value: bool) -> u32 {
    if value {
        TRUE
    } else {
        FALSE
    }
}

#[inline(always)]
const fn decode(word: u32) -> bool {
    word != FALSE
}

#[cfg(feature = "tracing")]
macro_rules! trace_transition {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_transition {
    ($($arg:tt)*) => {};
}

/// A thread-safe boolean.
///
/// All operations are wait-free and never fail. Share it by reference, in an
/// `Arc`, or as a `static`; no external locking is needed or expected.
///
/// ```rust
/// use atomflag::AtomicFlag;
///
/// static SHUTDOWN: AtomicFlag = AtomicFlag::new(false);
///
/// // Exactly one caller wins the claim.
/// assert!(SHUTDOWN.try_set_true());
/// assert!(!SHUTDOWN.try_set_true());
/// assert!(SHUTDOWN.is_true());
/// ```
#[repr(transparent)]
pub struct AtomicFlag {
    word: AtomicU32,
}

impl AtomicFlag {
    /// Creates a flag holding `initial`.
    #[cfg(not(feature = "loom"))]
    #[inline]
    pub const fn new(initial: bool) -> Self {
        Self {
            word: AtomicU32::new(encode(initial)),
        }
    }

    /// Creates a flag holding `initial`.
    #[cfg(feature = "loom")]
    pub fn new(initial: bool) -> Self {
        Self {
            word: AtomicU32::new(encode(initial)),
        }
    }

    /// Reads the current value with `Acquire` ordering.
    #[inline]
    pub fn get(&self) -> bool {
        decode(self.word.load(Ordering::Acquire))
    }

    /// Stores `value` with `Release` ordering.
    #[inline]
    pub fn set(&self, value: bool) {
        self.word.store(encode(value), Ordering::Release);
    }

    /// Stores `new` if the flag currently holds `expected`.
    ///
    /// The comparison and the store are one indivisible step. Returns `true`
    /// if the store happened; otherwise the flag is left untouched.
    ///
    /// This is a single attempt. Callers that need the transition to happen
    /// eventually must loop on it.
    #[inline]
    pub fn compare_and_set(&self, expected: bool, new: bool) -> bool {
        let swapped = self
            .word
            .compare_exchange(
                encode(expected),
                encode(new),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        trace_transition!(expected, new, swapped, "flag compare_and_set");
        swapped
    }

    /// Sets the flag to `true`, reporting whether this call flipped it.
    ///
    /// Exactly one of any number of racing callers sees `true` for a given
    /// `false -> true` edge, which makes this usable as a one-shot claim gate.
    #[inline]
    pub fn try_set_true(&self) -> bool {
        let claimed = self.word.swap(TRUE, Ordering::AcqRel) == FALSE;
        trace_transition!(claimed, "flag try_set_true");
        claimed
    }

    /// Sets the flag to `false`, reporting whether this call flipped it.
    #[inline]
    pub fn try_set_false(&self) -> bool {
        let released = self.word.swap(FALSE, Ordering::AcqRel) == TRUE;
        trace_transition!(released, "flag try_set_false");
        released
    }

    /// Stores `new` unconditionally and returns the previous value.
    #[inline]
    pub fn exchange(&self, new: bool) -> bool {
        let previous = decode(self.word.swap(encode(new), Ordering::AcqRel));
        trace_transition!(new, previous, "flag exchange");
        previous
    }

    /// Same as [`get`](Self::get).
    #[inline]
    pub fn is_true(&self) -> bool {
        self.get()
    }

    /// Negation of [`get`](Self::get).
    #[inline]
    pub fn is_false(&self) -> bool {
        !self.get()
    }

    /// Consumes the flag and returns its value.
    #[inline]
    pub fn into_inner(self) -> bool {
        // Exclusive ownership: no other thread can race this load.
        decode(self.word.load(Ordering::Relaxed))
    }
}

impl FlagOps for AtomicFlag {
    #[inline]
    fn get(&self) -> bool {
        AtomicFlag::get(self)
    }

    #[inline]
    fn set(&self, value: bool) {
        AtomicFlag::set(self, value);
    }

    #[inline]
    fn compare_and_set(&self, expected: bool, new: bool) -> bool {
        AtomicFlag::compare_and_set(self, expected, new)
    }

    #[inline]
    fn try_set_true(&self) -> bool {
        AtomicFlag::try_set_true(self)
    }

    #[inline]
    fn try_set_false(&self) -> bool {
        AtomicFlag::try_set_false(self)
    }

    #[inline]
    fn exchange(&self, new: bool) -> bool {
        AtomicFlag::exchange(self, new)
    }
}

impl Default for AtomicFlag {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Snapshot clone: the copy is an independent flag.
impl Clone for AtomicFlag {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl From<bool> for AtomicFlag {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<AtomicFlag> for bool {
    fn from(flag: AtomicFlag) -> Self {
        flag.into_inner()
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicFlag").field(&self.get()).finish()
    }
}

/// Renders `true` or `false` from a single atomic read.
impl fmt::Display for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

/// Accepts `true`/`false` in any ASCII case, ignoring surrounding whitespace.
impl FromStr for AtomicFlag {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        if literal.eq_ignore_ascii_case("true") {
            Ok(Self::new(true))
        } else if literal.eq_ignore_ascii_case("false") {
            Ok(Self::new(false))
        } else {
            Err(ParseFlagError::new(s))
        }
    }
}

impl Serialize for AtomicFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.get())
    }
}

impl<'de> Deserialize<'de> for AtomicFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for AtomicFlag {
    type Parameters = ();
    type Strategy =
        proptest::strategy::Map<<bool as proptest::arbitrary::Arbitrary>::Strategy, fn(bool) -> Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        proptest::arbitrary::any::<bool>().prop_map(Self::new as fn(bool) -> Self)
    }
}
