use std::sync::atomic::Ordering;

use derive_more::IsVariant;

/// The memory ordering of an atomic operation.
///
/// Every operation accepts every order. An order which doesn't apply to an operation is mapped to
/// the nearest one that does: a load keeps the acquire half of an order and a store keeps the release
/// half, while a load with `Release` is treated as `Acquire` and a store with `Acquire` as `Release`.
///
/// A [`Locked`](super::Locked) atomic ignores the order, since holding its mutex already orders the
/// operation sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum MemOrder {
    Relaxed,
    Acquire,
    Release,
    AcqRel,
    #[default]
    SeqCst,
}

impl MemOrder {
    /// The order used for read-modify-write operations, which accept all of them.
    pub const fn rmw(self) -> Ordering {
        match self {
            MemOrder::Relaxed => Ordering::Relaxed,
            MemOrder::Acquire => Ordering::Acquire,
            MemOrder::Release => Ordering::Release,
            MemOrder::AcqRel => Ordering::AcqRel,
            MemOrder::SeqCst => Ordering::SeqCst,
        }
    }

    pub const fn load(self) -> Ordering {
        match self {
            MemOrder::Relaxed => Ordering::Relaxed,
            MemOrder::Acquire | MemOrder::Release | MemOrder::AcqRel => Ordering::Acquire,
            MemOrder::SeqCst => Ordering::SeqCst,
        }
    }

    pub const fn store(self) -> Ordering {
        match self {
            MemOrder::Relaxed => Ordering::Relaxed,
            MemOrder::Acquire | MemOrder::Release | MemOrder::AcqRel => Ordering::Release,
            MemOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// The order of the load performed when a compare-exchange fails, derived from its success order.
    pub const fn failure(self) -> Ordering {
        match self {
            MemOrder::Relaxed | MemOrder::Release => Ordering::Relaxed,
            MemOrder::Acquire | MemOrder::AcqRel => Ordering::Acquire,
            MemOrder::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<MemOrder> for Ordering {
    fn from(order: MemOrder) -> Self {
        order.rmw()
    }
}
