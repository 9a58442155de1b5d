//! Linked collection types: the doubly linked [`Chain`] and the singly linked [`ForwardChain`].
//!
//! Both are navigated with [`StepCursor`](crate::collections::cursor::StepCursor)s over their
//! nodes. A [`ChainCursor`] can move in both directions, while a [`ForwardChainCursor`] reports an
//! unsupported operation when asked to step backwards.
//!
//! Indexes are signed: negative values count back from the end, so `-1` is the last element.

pub mod chain;
pub mod forward;
mod length;

#[doc(inline)]
pub use chain::{Chain, ChainCursor};
#[doc(inline)]
pub use forward::{ForwardChain, ForwardChainCursor};
pub(crate) use length::*;
