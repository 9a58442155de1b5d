//! Resolution of the signed indexes taken by the sequence containers.

use crate::util::error::IndexOutOfBounds;

/// Resolves a signed index against `len`, for access to an existing element.
pub(crate) const fn element_index(index: i64, len: usize) -> Result<usize, IndexOutOfBounds> {
    let resolved = if index < 0 { len as i64 + index } else { index };
    if resolved >= 0 && (resolved as u64) < len as u64 {
        Ok(resolved as usize)
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

/// Resolves a signed index against `len`, for insertion. Unlike [`element_index`], `len` itself is
/// accepted and refers to the position after the last element.
pub(crate) const fn insertion_index(index: i64, len: usize) -> Result<usize, IndexOutOfBounds> {
    let resolved = if index < 0 { len as i64 + index } else { index };
    if resolved >= 0 && (resolved as u64) <= len as u64 {
        Ok(resolved as usize)
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}
