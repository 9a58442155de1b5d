#![cfg(test)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use super::*;
use crate::sync::SysError;

#[test]
fn test_disabled() {
    let point = SyncPoint::default();
    assert_eq!(point.max_arrived(), 0);
    assert_eq!(point.arrive(), Ok(()), "A sync point for zero threads shouldn't block.");
    assert_eq!(point.round(), 0);
}

#[test]
fn test_single_thread_rounds() {
    let point = SyncPoint::new(1);
    for _ in 0..3 {
        point.arrive().unwrap();
    }
    assert_eq!(point.round(), 3, "Every arrival completes a round on its own.");
    assert_eq!(point.current_arrived(), 0);
}

#[test]
fn test_rounds_under_contention() {
    const THREADS: u64 = 4;
    const ROUNDS: u64 = 25;

    let completed = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&completed);
    let point = SyncPoint::with_completion(THREADS, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for round in 0..ROUNDS {
                    point.arrive().unwrap();
                    assert_eq!(
                        completed.load(Ordering::SeqCst),
                        round + 1,
                        "The completion should run exactly once before a round is released."
                    );
                }
            });
        }
    });

    assert_eq!(point.round(), ROUNDS);
    assert_eq!(point.current_arrived(), 0);
    assert_eq!(completed.load(Ordering::SeqCst), ROUNDS);
}

#[test]
fn test_failed_completion_reaches_every_thread() {
    const THREADS: u64 = 3;
    let point = SyncPoint::with_completion(THREADS, || Err::<(), _>("checkpoint broken"));

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS).map(|_| s.spawn(|| point.arrive())).collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, Err(SysError::Callback(String::from("checkpoint broken"))));
    }
    assert_eq!(point.round(), 1, "A failed completion still ends the round.");
}

#[test]
fn test_panicking_completion() {
    let point = SyncPoint::with_completion(2, || -> () { panic!("boom") });

    thread::scope(|s| {
        let other = s.spawn(|| point.arrive());
        let mine = point.arrive();
        assert_eq!(mine, Err(SysError::Callback(String::from("boom"))));
        assert_eq!(other.join().unwrap(), mine);
    });

    let recovered = SyncPoint::with_completion(1, || Ok::<(), String>(()));
    assert_eq!(recovered.arrive(), Ok(()));
}
