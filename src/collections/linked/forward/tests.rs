#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::cursor::Cursor;
use crate::util::alloc::CountedDrop;
use crate::util::error::{CursorError, IndexOutOfBounds, NoElementError, UnsupportedError};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut chain = ForwardChain::new();
    assert_eq!(chain.pop_end(), Err(NoElementError));

    chain.push_end(2);
    chain.push_begin(0);
    chain.push(1, 1);
    chain.push_end(4);
    chain.push(-1, 3);
    chain.push_end(5);
    chain.verify_links();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);

    assert_eq!(chain.pop_end(), Ok(5), "Popping from the end should walk to the new tail.");
    chain.verify_links();
    assert_eq!(chain.back(), Some(&4));

    assert_eq!(chain.pop(-1), 4);
    assert_eq!(chain.pop(1), 1);
    assert_eq!(chain.pop_begin(), Ok(0));
    chain.verify_links();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [2, 3]);

    assert_eq!(chain.try_pop(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(chain.pop_end(), Ok(3));
    assert_eq!(chain.pop_end(), Ok(2));
    assert!(chain.is_empty());
    assert_eq!(chain.front(), None);
}

#[test]
fn test_access_and_search() {
    let mut chain: ForwardChain<_> = (0..5).collect();
    assert_eq!(chain[2], 2);
    assert_eq!(chain[-1], 4);
    assert_eq!(chain.set(-5, 10), 0);
    chain[1] *= 10;
    assert_eq!(chain.index_of(&10), Some(0), "The first matching element should be found.");
    assert_eq!(chain.index_of(&6), None);
    assert_panics!({ chain.get(5) }, "Out of bounds indexing should panic.");

    chain += (5..7).collect::<ForwardChain<_>>();
    chain.verify_links();
    assert_eq!(chain.to_string(), "forwardChain(10, 10, 2, 3, 4, 5, 6)");
    assert_eq!(chain.clone(), chain);

    for value in &mut chain {
        *value += 1;
    }
    assert!(chain.into_iter().eq([11, 11, 3, 4, 5, 6, 7]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let chain: ForwardChain<_> = iter::repeat_with(|| counter.clone()).take(8).collect();
    drop(chain);
    assert_eq!(counter.take(), 8, "Every node should be freed.");
}

#[test]
fn test_cursor_is_forward_only() {
    let mut chain: ForwardChain<_> = (1..=3).collect();

    let mut cursor = chain.begins();
    assert!(!cursor.has_prev(), "Forward cursors can never report a predecessor.");
    assert_eq!(
        cursor.prev(),
        Err(CursorError::Unsupported(UnsupportedError {
            operation: "step backwards through a singly linked node",
        })),
    );
    assert!(cursor.retreat(1).is_err_and(|err| err.is_unsupported()));

    cursor.next().unwrap();
    cursor.set(20).unwrap();
    let end = chain_end_distance(&cursor);
    assert_eq!(end, 1);

    assert!(chain.begins().values().eq([1, 20, 3]));
    assert_eq!(chain.ends().get(), Ok(3));
}

fn chain_end_distance(cursor: &ForwardChainCursor<'_, i32>) -> i64 {
    let end = cursor.stepped(1).unwrap();
    assert!(cursor.at_next(&end));
    assert!(end.at_prev(cursor), "Adjacency should hold in both directions.");
    end.distance(cursor).unwrap()
}
