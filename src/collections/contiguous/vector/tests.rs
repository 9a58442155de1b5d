#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::cursor::Cursor;
use crate::util::alloc::CountedDrop;
use crate::util::error::{IndexOutOfBounds, NoElementError};
use crate::util::panic::assert_panics;

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    for i in 0..20 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 20);
    assert!(vec.cap() >= 20, "Capacity should grow to fit every element.");

    for i in (0..20).rev() {
        assert_eq!(vec.pop(), Some(i), "Values should be popped in reverse order.");
    }
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.try_pop(), Err(NoElementError));
}

#[test]
fn test_begin_operations() {
    let mut vec: Vector<_> = (1..4).collect();
    vec.push_begin(0);
    assert_eq!(&*vec, &[0, 1, 2, 3]);
    assert_eq!(vec.pop_begin(), Ok(0));
    assert_eq!(vec.pop_begin(), Ok(1));
    assert_eq!(&*vec, &[2, 3]);

    let mut empty: Vector<u8> = Vector::new();
    assert_eq!(empty.pop_begin(), Err(NoElementError), "Popping from empty should fail.");
    empty.push_begin(4);
    assert_eq!(&*empty, &[4], "Pushing onto an empty Vector should work at the front too.");
}

#[test]
fn test_insert_remove() {
    let mut vec: Vector<_> = "Hello world!".chars().collect();
    assert_eq!(vec.remove(1), 'e');
    assert_eq!(vec.remove(4), ' ');
    assert_eq!(vec, "Hlloworld!".chars().collect());

    vec.insert(0, '>');
    vec.insert(vec.len() as i64, '<');
    assert_eq!(vec.first(), Some(&'>'));
    assert_eq!(vec.last(), Some(&'<'));
    assert_eq!(vec.replace(1, 'h'), 'H');
    assert_eq!(vec.replace(-2, '?'), '!', "Negative indexes should count back from the end.");
    assert_eq!(vec.remove(-1), '<');

    assert_eq!(vec.try_remove(100), Err(IndexOutOfBounds { index: 100, len: 11 }));
    assert_eq!(vec.try_insert(-12, 'x'), Err(IndexOutOfBounds { index: -12, len: 11 }));
    assert_eq!(vec.to_string(), "vector('>', 'h', 'l', 'l', 'o', 'w', 'o', 'r', 'l', 'd', '?')");

    assert_panics!({ vec.clone().remove(100); });
    assert_panics!({ vec.clone().insert(100, 'x'); });
}

#[test]
fn test_append_and_drop() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let other: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    vec.append(other);
    assert_eq!(vec.len(), 10);
    assert_eq!(counter.take(), 0, "Appending shouldn't drop any element.");

    drop(vec);
    assert_eq!(counter.take(), 10, "Every appended element should be dropped exactly once.");
}

#[test]
fn test_array_conversion() {
    let mut vec: Vector<_> = (0..3).collect();
    vec.reserve(10);
    let arr = Array::from(vec);
    assert_eq!(arr.size(), 3, "Converting should drop the spare capacity.");

    let vec = Vector::from(arr);
    assert_eq!(&*vec, &[0, 1, 2]);
    assert_eq!(vec.into_iter().rev().collect::<Vector<_>>(), (0..3).rev().collect());
}

#[test]
fn test_cursor_across_vector() {
    let mut vec: Vector<_> = (0..4).collect();
    let mut end = vec.ends();
    assert_eq!(end.get(), Ok(3));
    end.prev().expect("array cursors always step");
    end.set(-1).expect("the cursor is valid");

    let begin = vec.begins();
    assert_eq!(begin.values().collect::<Vector<_>>(), Vector::from(Array::from([0, 1, -1, 3].into_iter())));
}
