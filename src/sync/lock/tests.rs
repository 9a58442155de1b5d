#![cfg(test)]

use std::sync::Barrier;
use std::thread;

use super::*;
use crate::sync::{Lockable, Mutex, RawMutex};

/// Runs `test` while `mutex` is held by another thread.
fn while_held_elsewhere(mutex: &Mutex, test: impl FnOnce()) {
    let barrier = Barrier::new(2);
    thread::scope(|s| {
        s.spawn(|| {
            mutex.lock().unwrap();
            barrier.wait();
            barrier.wait();
            mutex.unlock().unwrap();
        });
        barrier.wait();
        test();
        barrier.wait();
    });
}

fn is_free(mutex: &Mutex) -> bool {
    thread::scope(|s| {
        s.spawn(|| {
            let free = mutex.try_lock().unwrap();
            if free {
                mutex.unlock().unwrap();
            }
            free
        })
        .join()
        .unwrap()
    })
}

#[test]
fn test_unique_lock_policies() {
    let mutex = Mutex::new();

    let manual = UniqueLock::new(&mutex, LockPolicy::Manual).unwrap();
    assert!(!manual.is_locked() && is_free(&mutex));
    drop(manual);

    let auto = UniqueLock::new(&mutex, LockPolicy::Auto).unwrap();
    assert!(auto.is_locked() && !is_free(&mutex));
    drop(auto);
    assert!(is_free(&mutex), "Dropping a locked guard should unlock the mutex.");

    mutex.lock().unwrap();
    let adopted = UniqueLock::new(&mutex, LockPolicy::Adopt).unwrap();
    assert!(adopted.is_locked());
    drop(adopted);
    assert!(is_free(&mutex), "An adopted lock should be released by the guard.");

    while_held_elsewhere(&mutex, || {
        let attempt = UniqueLock::new(&mutex, LockPolicy::Try).unwrap();
        assert!(!attempt.is_locked(), "Try should report contention instead of blocking.");
    });
}

#[test]
fn test_unique_lock_relocking() {
    let mutex = Mutex::new();
    let mut guard = UniqueLock::new(&mutex, LockPolicy::Auto).unwrap();

    assert!(guard.lock().is_err_and(|e| e.is_misuse()), "Locking twice should be refused.");
    assert!(guard.try_lock().is_err());

    guard.unlock().unwrap();
    guard.unlock().unwrap();
    assert!(!guard.is_locked(), "Unlocking an unlocked guard should do nothing.");

    assert_eq!(guard.try_lock(), Ok(true));
    assert_eq!(guard.mutex().id(), mutex.id());
}

#[test]
fn test_multi_lock() {
    let (a, b, c) = (Mutex::new(), Mutex::new(), Mutex::new());

    let mut guard = MultiLock::new([&a, &b, &c], LockPolicy::Auto).unwrap();
    assert!(guard.is_locked());
    assert_eq!(guard.len(), 3);
    assert!(!is_free(&a) && !is_free(&b) && !is_free(&c));
    assert!(guard.lock().is_err_and(|e| e.is_misuse()));

    guard.unlock().unwrap();
    assert!(is_free(&a) && is_free(&b) && is_free(&c));

    assert_eq!(guard.try_lock(), Ok(true));
    drop(guard);
    assert!(is_free(&a) && is_free(&b) && is_free(&c), "Dropping should release every mutex.");
}

#[test]
fn test_multi_lock_rollback() {
    let (a, b, c) = (Mutex::new(), Mutex::new(), Mutex::new());

    while_held_elsewhere(&c, || {
        let mut guard = MultiLock::new([&a, &b, &c], LockPolicy::Manual).unwrap();
        assert_eq!(guard.try_lock(), Ok(false));
        assert!(!guard.is_locked());
        assert!(is_free(&a) && is_free(&b), "A failed try_lock shouldn't leave any mutex held.");

        let attempt = MultiLock::new([&c, &a, &b], LockPolicy::Try).unwrap();
        assert!(!attempt.is_locked());
        assert!(is_free(&a) && is_free(&b), "Mutexes after the contended one should be released too.");
    });

    a.lock().unwrap();
    let mut guard = MultiLock::new([&b, &a], LockPolicy::Manual).unwrap();
    assert!(guard.lock().is_err(), "Locking an already owned mutex should fail.");
    assert!(is_free(&b), "The mutexes locked before the failure should be rolled back.");
    a.unlock().unwrap();
}
