//! Atomic shim.
//!
//! Production builds use `core::sync::atomic`; the `loom` feature swaps in
//! loom's model-checked atomics so every interleaving of the flag's
//! operations can be explored.

#[cfg(not(feature = "loom"))]
pub(crate) use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "loom")]
pub(crate) use loom::sync::atomic::{AtomicU32, Ordering};
