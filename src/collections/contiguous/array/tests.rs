#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::collections::cursor::Cursor;
use crate::traits::Comparable;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CursorError, OutOfBoundError};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().as_slice().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    let old_ptr = arr.ptr;

    arr.realloc_with_default(30);
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_realloc() {
    let mut arr = Array::from(0..5);
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc_with_default(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc_with_default(0);
    assert_eq!(arr.size(), 0, "Shrinking to zero should leave an empty Array.");

    arr.realloc_with_default(10);
    for i in 0..10 {
        arr[i] = i;
    }

    arr.realloc_with_copy(7, 15);
    for i in 0..10 {
        assert_eq!(
            arr[i], i,
            "When growing, all elements should remain in the Array."
        );
    }
    for i in 10..15 {
        assert_eq!(arr[i], 7, "When growing, all new elements should be copies of the item.");
    }

    assert_panics!({
        let mut arr = Array::from(0..5);
        arr.realloc_with_default(isize::MAX as usize + 1)
    });

    let counter = CountedDrop::new(0);
    let mut arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    arr.realloc_with(|| unreachable!(), 5);

    assert_eq!(
        counter.take(),
        5,
        "5 elements should have been dropped during shrinking reallocation."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4].into_iter()), Array::from(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from(0_usize..5);
    let collected = Array::from(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    assert_eq!(
        arr,
        Array::from(arr.clone().into_iter()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop all elements."
    );
}

#[test]
fn test_fixed_size() {
    let mut arr = Array::from(0..3);
    assert!(arr.try_push(3).is_err(), "An Array can't be pushed onto.");
    assert!(arr.try_pop().is_err(), "An Array can't be popped from.");
    assert_eq!(arr.size(), 3);
}

#[test]
fn test_cursor_walk() {
    let mut arr = Array::from(0..5);
    let mut cursor = arr.begins();
    let mut seen = 0;

    while cursor.is_valid() {
        assert_eq!(cursor.get(), Ok(seen), "Cursor should visit elements in order.");
        cursor.set(seen * 10).expect("valid cursors can be written");
        cursor.next().expect("array cursors always step");
        seen += 1;
    }

    assert_eq!(seen, 5);
    assert_eq!(
        cursor.get(),
        Err(CursorError::OutOfBound(OutOfBoundError)),
        "A cursor past the end can't be dereferenced."
    );
    assert_eq!(&*arr, &[0, 10, 20, 30, 40]);

    let mut empty: Array<u8> = Array::new();
    assert!(!empty.begins().is_valid(), "An empty Array has no first element.");
    assert!(!empty.ends().is_valid(), "An empty Array has no last element.");
}

#[test]
fn test_cursor_identity_and_order() {
    let mut arr = Array::from(0..10);
    let begin = arr.begins();
    let mut moved = begin.clone();

    assert!(moved.equal_ptr(&begin), "A clone should denote the same position.");
    assert_eq!(moved.compare_to(&begin), 0);

    moved.advance(4).expect("array cursors always step");
    assert!(!moved.equal_ptr(&begin), "Moving a clone shouldn't move the original.");
    assert_eq!(begin.get(), Ok(0));
    assert_eq!(moved.distance(&begin), Some(4));
    assert_eq!(begin.distance(&moved), Some(-4));
    assert!(begin < moved, "Ordering should follow position.");

    let next = moved.get_next().expect("array cursors always step");
    assert!(moved.at_next(&next), "A cursor is adjacent to its successor.");
    assert!(next.at_prev(&moved), "A successor is adjacent to its predecessor.");
    assert!(!next.at_next(&moved));

    let last = moved.stepped(5).expect("array cursors always step");
    assert_eq!(last.get(), Ok(9));
    assert!(!last.has_next(), "The last element has no successor.");
    assert!(last.has_prev());

    let mut before = arr.begins();
    before.retreat(1).expect("array cursors always step");
    assert!(!before.is_valid(), "A cursor before the start is invalid.");
    assert!(before.has_next(), "Stepping forward from before the start reaches the first element.");
}

#[test]
fn test_cursor_extreme_steps() {
    let mut arr = Array::from(0..4);
    let begin = arr.begins();

    let mut low = begin.clone();
    low.advance(i64::MIN).expect("array cursors always step");
    assert!(!low.is_valid() && !low.has_prev(), "Extreme steps should saturate instead of overflowing.");
    assert_eq!(low.distance(&begin), Some(i64::MIN));
    low.prev().expect("array cursors always step");
    assert!(!low.at_prev(&begin));

    let mut high = begin.clone();
    high.retreat(i64::MIN).expect("array cursors always step");
    assert!(!high.is_valid() && !high.has_next());
    high.advance(i64::MAX).expect("array cursors always step");
    assert_eq!(high.distance(&low), Some(i64::MAX));
    assert!(!high.at_next(&low) && !low.at_prev(&high));
}

#[test]
fn test_cursor_values() {
    let mut arr = Array::from(0..6);
    let from_middle: Array<i32> = arr.begins().stepped(3).expect("array cursors always step").values().collect();
    assert_eq!(&*from_middle, &[3, 4, 5], "values should run from the cursor to the end.");

    let mut other = Array::from(0..6);
    let a = arr.begins();
    let b = other.begins();
    assert_eq!(a.distance(&b), None, "Cursors into different Arrays are unrelated.");
    assert_eq!(a.compare_to(&b), i64::MAX);
}
