//! A module containing [`Chain`] and associated types.
//!
//! Borrowed and owned iteration is provided through [`Iter`], [`IterMut`] and [`IntoIter`], while
//! [`ChainCursor`] implements the bidirectional cursor protocol.

mod chain;
mod iter;
mod node;
mod tests;

pub use chain::*;
pub use iter::*;
pub use node::*;
