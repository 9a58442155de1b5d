#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::cursor::Cursor;
use crate::util::alloc::CountedDrop;
use crate::util::error::{CursorError, IndexOutOfBounds, NoElementError, NullPointerError};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_ends() {
    let mut chain = Chain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.pop_begin(), Err(NoElementError), "An empty Chain has nothing to pop.");
    assert_eq!(chain.pop_end(), Err(NoElementError));

    chain.push_end(2);
    chain.push_begin(1);
    chain.push_end(3);
    chain.verify_double_links();

    assert_eq!(chain.len(), 3);
    assert_eq!(chain.front(), Some(&1));
    assert_eq!(chain.back(), Some(&3));

    assert_eq!(chain.pop_end(), Ok(3));
    assert_eq!(chain.pop_begin(), Ok(1));
    assert_eq!(chain.pop_begin(), Ok(2));
    assert!(chain.is_empty(), "Popping the last element should empty the Chain.");
    chain.verify_double_links();

    chain.push_begin(4);
    assert_eq!(chain.front(), chain.back(), "A single element is both the front and back.");
}

#[test]
fn test_signed_indexing() {
    let mut chain: Chain<_> = (0..6).collect();

    assert_eq!(chain[0], 0);
    assert_eq!(chain[4], 4, "Seeking from the back should find the right node.");
    assert_eq!(chain[-1], 5, "Negative indexes count from the end.");
    assert_eq!(chain[-6], 0);
    assert_eq!(chain.try_get(6), Err(IndexOutOfBounds { index: 6, len: 6 }));
    assert_eq!(chain.try_get(-7), Err(IndexOutOfBounds { index: -7, len: 6 }));

    assert_eq!(chain.set(-2, 40), 4);
    chain[1] = 10;
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [0, 10, 2, 3, 40, 5]);

    assert_panics!({ chain.get(100) }, "Out of bounds indexing should panic.");
}

#[test]
fn test_push_and_pop_at_index() {
    let mut chain: Chain<_> = [1, 3].into_iter().collect();

    chain.push(1, 2);
    chain.push(3, 4);
    chain.push(0, 0);
    chain.push(-1, 35);
    chain.verify_double_links();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 35, 4]);

    assert_eq!(chain.pop(-2), 35);
    assert_eq!(chain.pop(0), 0);
    assert_eq!(chain.pop(2), 3);
    chain.verify_double_links();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [1, 2, 4]);

    assert_eq!(chain.try_push(5, 9), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(chain.try_pop(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({ chain.pop(-4) });
}

#[test]
fn test_append_and_search() {
    let mut chain: Chain<_> = (0..3).collect();
    chain += (3..5).collect::<Chain<_>>();
    chain.append(Chain::new());
    chain.verify_double_links();

    let chain = Chain::new() + chain;
    assert_eq!(chain.len(), 5);
    assert_eq!(chain.index_of(&3), Some(3));
    assert_eq!(chain.index_of(&7), None);
    assert!(chain.contains(&0));
    assert_eq!(chain.to_string(), "chain(0, 1, 2, 3, 4)");
    assert_eq!(format!("{:?}", chain), "[0, 1, 2, 3, 4]");
}

#[test]
fn test_iterators() {
    let mut chain: Chain<_> = (1..=4).collect();

    assert!(chain.iter().rev().copied().eq([4, 3, 2, 1]));
    assert_eq!(chain.iter().len(), 4);

    let mut iter = chain.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None, "Both ends meeting should exhaust the iterator.");
    assert_eq!(iter.next_back(), None);

    for value in chain.iter_mut() {
        *value *= 10;
    }
    assert_eq!(chain.clone(), (1..=4).map(|value| value * 10).collect::<Chain<_>>());

    assert!(chain.into_iter().rev().eq([40, 30, 20, 10]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut chain: Chain<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(chain.pop(3));
    assert_eq!(counter.take(), 1);

    let mut iter = chain.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.take(), 9, "Every remaining element should be dropped once.");
}

#[test]
fn test_cursor_walk() {
    let mut chain: Chain<_> = (1..=3).collect();

    let mut cursor = chain.begins();
    assert_eq!(cursor.get(), Ok(1));
    assert!(cursor.has_next() && !cursor.has_prev());

    cursor.next().unwrap();
    assert_eq!(cursor.replace(20), Ok(2));
    cursor.next().unwrap();
    assert!(!cursor.has_next());

    cursor.next().unwrap();
    assert!(!cursor.is_valid(), "Stepping past the last node should invalidate the cursor.");
    assert_eq!(cursor.get(), Err(CursorError::NullPointer(NullPointerError)));
    assert_eq!(cursor.next(), Err(CursorError::NullPointer(NullPointerError)));

    let mut cursor = chain.ends();
    cursor.prev().unwrap();
    assert_eq!(cursor.get(), Ok(20), "Writes through a cursor should stick.");
    cursor.retreat(1).unwrap();
    assert_eq!(cursor.get(), Ok(1));

    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [1, 20, 3]);
    assert!(!Chain::<u8>::new().begins().is_valid());
}

#[test]
fn test_cursor_relations() {
    let mut chain: Chain<_> = (0..5).collect();

    let begin = chain.begins();
    let end = begin.stepped(4).unwrap();
    let second = begin.get_next().unwrap();

    assert!(begin.at_next(&second), "The second node directly follows the first.");
    assert!(second.at_prev(&begin));
    assert!(!second.at_next(&begin));

    assert_eq!(end.distance(&begin), Some(4));
    assert_eq!(begin.distance(&end), Some(-4));
    assert!(begin < end);
    assert_eq!(end.get_prev().unwrap().get(), Ok(3));
    assert_eq!(begin.clone(), begin);
    assert!(begin.values().eq(0..5), "Iterating from a cursor should yield the rest of the chain.");
}
