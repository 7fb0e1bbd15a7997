//! # `atomflag` - Lock-Free Atomic Flag
//!
//! A thread-safe boolean backed by one 32-bit word and mutated only through
//! atomic hardware instructions. Reads never observe anything but `true` or
//! `false`, and no operation locks, blocks, or fails.
//!
//! ## Memory Ordering
//!
//! | Operation | Ordering |
//! |---|---|
//! | `get`, `is_true`, `is_false` | `Acquire` |
//! | `set` | `Release` |
//! | `compare_and_set` | `AcqRel` (success) / `Acquire` (failure) |
//! | `exchange`, `try_set_true`, `try_set_false` | `AcqRel` |
//!
//! A writer that performs ordinary stores and then `set(true)` publishes those
//! stores to any reader whose `get()` returns `true`.
//!
//! ## One-Shot Transitions
//!
//! `try_set_true`/`try_set_false` make exactly one atomic attempt. Among any
//! number of racing callers, exactly one observes the transition, which makes
//! them suitable as "first to act" gates. Use `compare_and_set` in a loop when
//! a transition must eventually happen.
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events from the transition operations.
//! - `proptest`: `Arbitrary` for [`AtomicFlag`].
//! - `loom`: back the flag with loom's atomics for model-checked tests.
//!
//! ## Example
//!
//! ```rust
//! use atomflag::AtomicFlag;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let flag = Arc::new(AtomicFlag::default());
//!
//! let winners: usize = (0..8)
//!     .map(|_| {
//!         let flag = Arc::clone(&flag);
//!         thread::spawn(move || flag.try_set_true())
//!     })
//!     .collect::<Vec<_>>()
//!     .into_iter()
//!     .map(|h| usize::from(h.join().unwrap()))
//!     .sum();
//!
//! assert_eq!(winners, 1);
//! assert_eq!(flag.to_string(), "true");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod flag;
pub mod traits;

mod sync;

pub use error::ParseFlagError;
pub use flag::AtomicFlag;
pub use traits::FlagOps;

// Compile-time layout assertions: the flag is exactly one atomic word.
#[cfg(not(feature = "loom"))]
const _: () = {
    use core::mem;

    assert!(mem::size_of::<AtomicFlag>() == mem::size_of::<u32>());
    assert!(mem::align_of::<AtomicFlag>() == mem::align_of::<u32>());
};
