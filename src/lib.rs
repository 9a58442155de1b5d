//! Generic containers that share one cursor protocol, plus a portable set of synchronization
//! primitives.
//!
//! # Collections
//! Every container in [`collections`] hands out cursors through `begins()` and `ends()`. A cursor is
//! a plain value: cloning one gives an independent position, and the borrow checker guarantees that
//! the container can't be restructured underneath it. All cursor kinds implement the same
//! [`Cursor`](collections::cursor::Cursor) trait, so algorithms can be written once and run over an
//! [`Array`](collections::contiguous::Array), a [`Chain`](collections::linked::Chain), a
//! [`BitSet`](collections::bits::BitSet) or a [`HashMap`](collections::hash::HashMap) alike.
//!
//! Containers aren't internally synchronized. Sharing one between threads is done by wrapping it
//! with the primitives from [`sync`].
//!
//! # Sync
//! The [`sync`] module wraps the operating system's threading API (pthreads on unix, the Win32
//! threading API on Windows) behind a set of traits, with the backend picked at compile time. On top
//! of that it provides RAII lock guards, condition variables, threads with a join policy and an
//! [`Atomic`](sync::Atomic) which chooses between a lock-free and a mutex-guarded representation
//! depending on the wrapped type.
//! A [`Semaphore`](sync::Semaphore) and a reusable [`SyncPoint`](sync::SyncPoint) barrier are built
//! from those.
//!
//! # Error Handling
//! Errors are strongly typed: each failure is a small struct (often a ZST) implementing
//! [`Error`](std::error::Error), grouped into enums where a method can fail in more than one way.
//! Container methods come in pairs, a `try_` method returning a [`Result`] and a panicking
//! convenience version. Failures that can't be reported because they happen during a `drop` are
//! logged through [`tracing`] and then abort the process.
//!
//! # Dependencies
//! - `derive_more` for the error types.
//! - `tracing` for diagnostics. The crate never installs a subscriber.
//! - `libc` and `windows` for the platform backends of [`sync`].
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod config;
#[cfg(feature = "sync")]
pub mod sync;
pub mod traits;

pub(crate) mod util;

pub use util::error;
