//! A packed, fixed-size [`BitSet`] and its cursor.

mod bit_set;
mod cursor;
mod iter;
mod tests;

pub use bit_set::*;
pub use cursor::*;
pub use iter::*;
