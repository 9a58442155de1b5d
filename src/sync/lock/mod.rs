//! RAII guards over [`Lockable`](crate::sync::Lockable)s.

mod multi;
mod policy;
mod unique;
mod tests;

pub use multi::*;
pub use policy::*;
pub use unique::*;
