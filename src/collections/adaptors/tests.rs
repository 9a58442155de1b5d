#![cfg(test)]

use super::*;
use crate::collections::cursor::Cursor;
use crate::util::alloc::CountedDrop;
use crate::util::error::NoElementError;

#[test]
fn test_stack() {
    let mut stack: Stack<_> = (1..=3).collect();
    assert_eq!(stack.top(), Ok(&3));

    stack.push(4);
    assert_eq!(stack.pop(), Ok(4), "The last pushed element should be popped first.");
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.to_string(), "stack(1, 2)");

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(NoElementError));
    assert_eq!(stack.top(), Err(NoElementError));
}

#[test]
fn test_queue() {
    let mut queue = Queue::new();
    queue.push("a");
    queue.push("b");
    queue.push("c");

    assert_eq!((queue.head(), queue.tail()), (Ok(&"a"), Ok(&"c")));
    assert_eq!(queue.pop(), Ok("a"), "The oldest element should leave first.");
    assert_eq!(queue.head(), Ok(&"b"));
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), ["b", "c"]);

    let mut empty: Queue<u8> = Queue::default();
    assert_eq!(empty.pop(), Err(NoElementError));
    assert_eq!(empty.tail(), Err(NoElementError));
}

#[test]
fn test_deque() {
    let mut deque = Deque::new();
    deque.push_end(2);
    deque.push_begin(1);
    deque.push_end(3);

    assert_eq!((deque.head(), deque.tail()), (Ok(&1), Ok(&3)));
    assert_eq!(deque.pop_end(), Ok(3));
    assert_eq!(deque.pop_begin(), Ok(1));
    assert_eq!(deque.pop_begin(), Ok(2));
    assert_eq!(deque.pop_end(), Err(NoElementError));
    assert_eq!(deque.pop_begin(), Err(NoElementError));
}

#[test]
fn test_cursors() {
    let mut deque: Deque<_> = [10, 20, 30].into_iter().collect();

    let mut cursor = deque.begins();
    cursor.advance(1).unwrap();
    cursor.set(25).unwrap();
    assert_eq!(deque.ends().get(), Ok(30), "ends() should be the last element.");
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [10, 25, 30]);

    let mut stack: Stack<i32> = Stack::new();
    assert!(!stack.begins().is_valid() && !stack.ends().is_valid());
}

#[test]
fn test_clone_and_drop() {
    let counter = CountedDrop::new(0);
    let queue: Queue<_> = (0..4).map(|_| counter.clone()).collect();

    let copy = queue.clone();
    assert_eq!(copy.len(), 4);
    drop(copy);
    assert_eq!(counter.take(), 4);

    drop(queue);
    assert_eq!(counter.take(), 4, "Dropping an adaptor should drop its elements.");
}
