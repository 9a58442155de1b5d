//! A reusable rendezvous, [`SyncPoint`], which releases a fixed number of threads together.

mod sync_point;
mod tests;

pub use sync_point::*;
