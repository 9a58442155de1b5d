//! Restricted views over a [`Chain`](crate::collections::linked::Chain): [`Stack`], [`Queue`] and
//! [`Deque`].
//!
//! Each adaptor owns its chain and only exposes the operations of its discipline, plus cursors and
//! borrowed iteration from the first element to the last.

mod deque;
mod queue;
mod stack;
mod tests;

pub use deque::*;
pub use queue::*;
pub use stack::*;

/// Implements the parts that every adaptor shares by forwarding them to the `chain` field.
macro_rules! chain_adaptor {
    ($name:ident, $label:literal) => {
        impl<T> $name<T> {
            pub const fn new() -> $name<T> {
                $name {
                    chain: $crate::collections::linked::Chain::new(),
                }
            }

            pub const fn len(&self) -> usize {
                self.chain.len()
            }

            pub const fn is_empty(&self) -> bool {
                self.chain.is_empty()
            }

            /// Drops every element.
            pub fn clear(&mut self) {
                self.chain = $crate::collections::linked::Chain::new();
            }

            /// Returns a cursor at the first element. The cursor is invalid if the adaptor is empty.
            pub fn begins(&mut self) -> $crate::collections::linked::ChainCursor<'_, T> {
                self.chain.begins()
            }

            /// Returns a cursor at the last element. The cursor is invalid if the adaptor is empty.
            pub fn ends(&mut self) -> $crate::collections::linked::ChainCursor<'_, T> {
                self.chain.ends()
            }

            pub fn iter(&self) -> $crate::collections::linked::chain::Iter<'_, T> {
                self.chain.iter()
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                $name {
                    chain: iter.into_iter().collect(),
                }
            }
        }

        impl<T> IntoIterator for $name<T> {
            type Item = T;

            type IntoIter = $crate::collections::linked::chain::IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.chain.into_iter()
            }
        }

        impl<T: Clone> Clone for $name<T> {
            fn clone(&self) -> Self {
                $name {
                    chain: self.chain.clone(),
                }
            }
        }

        impl<T: PartialEq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.chain == other.chain
            }
        }

        impl<T: Eq> Eq for $name<T> {}

        impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.chain).finish()
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "("))?;
                for (index, value) in self.iter().enumerate() {
                    if index != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value:?}")?;
                }
                write!(f, ")")
            }
        }
    };
}

pub(crate) use chain_adaptor;
