//! A module containing [`ForwardChain`] and associated types.
//!
//! A ForwardChain only links each node to its successor, so its [`ForwardChainCursor`] can't step
//! backwards and removing from the back requires a walk from the head.

mod forward_chain;
mod iter;
mod node;
mod tests;

pub use forward_chain::*;
pub use iter::*;
pub use node::*;
