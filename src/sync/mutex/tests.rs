#![cfg(test)]

use std::thread;

use super::*;
use crate::sync::SysError;

#[test]
fn test_lock_and_unlock() {
    let mutex = Mutex::new();

    mutex.lock().unwrap();
    thread::scope(|s| {
        let contended = s.spawn(|| mutex.try_lock()).join().unwrap();
        assert_eq!(contended, Ok(false), "try_lock should fail without blocking while the mutex is held.");
    });
    mutex.unlock().unwrap();

    thread::scope(|s| {
        let free = s.spawn(|| {
            let locked = mutex.try_lock();
            mutex.unlock().unwrap();
            locked
        });
        assert_eq!(free.join().unwrap(), Ok(true));
    });
}

#[test]
fn test_misuse_is_reported() {
    let mutex = Mutex::new();

    assert!(mutex.unlock().is_err(), "Unlocking a free mutex should fail.");

    mutex.lock().unwrap();
    assert!(mutex.lock().is_err(), "Relocking from the owning thread should fail instead of deadlocking.");
    assert_eq!(mutex.try_lock(), Ok(false));

    thread::scope(|s| {
        let foreign = s.spawn(|| mutex.unlock()).join().unwrap();
        assert!(foreign.is_err(), "Only the owner should be able to unlock.");
    });
    mutex.unlock().unwrap();
}

#[test]
fn test_identity() {
    let a = Mutex::new();
    let b = Mutex::new();

    assert_ne!(a.id(), b.id());
    assert_eq!(a.id(), a.native_handle() as usize as u64);

    let id = a.id();
    let moved = a;
    assert_eq!(moved.id(), id, "The native handle should stay put when the Mutex moves.");
    assert_eq!(format!("{moved:?}"), format!("Mutex(#{})", moved.id()));
}

#[test]
fn test_error_display() {
    assert_eq!(
        SysError::os("lock mutex", "pthread_mutex_lock", 22).to_string(),
        "Failed to lock mutex (pthread_mutex_lock returned 22)"
    );
    assert_eq!(
        SysError::misuse("lock unique lock", "already locked").to_string(),
        "Cannot lock unique lock: already locked"
    );
    assert_eq!(SysError::os("a", "b", 1).code(), Some(1));
    assert_eq!(SysError::Callback(String::from("boom")).code(), None);
}
