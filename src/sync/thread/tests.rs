#![cfg(test)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::*;
use crate::sync::{Atomic, MemOrder, SysError};

fn fail() {
    panic!("boom")
}

#[test]
fn test_join() {
    let count = Arc::new(Atomic::new(0_u32));
    let counter = Arc::clone(&count);
    let mut thread = Thread::new(move || {
        counter.fetch_add(1, MemOrder::SeqCst);
    });

    assert!(thread.joinable());
    assert_ne!(thread.id(), 0);
    assert_eq!(thread.join(), Ok(()));
    assert_eq!(count.get(), 1, "The callback should have run before join returns.");

    assert!(!thread.joinable());
    assert_eq!(thread.id(), 0);
    assert_eq!(thread.join(), Ok(()), "A second join should do nothing.");
    assert_eq!(thread.detach(), Ok(()));
}

#[test]
fn test_callback_failures() {
    let mut panicking = Thread::new(fail);
    assert_eq!(panicking.join(), Err(SysError::Callback(String::from("boom"))));
    assert_eq!(panicking.join(), Ok(()), "A failure should only be reported once.");

    let mut erroring = Thread::new(|| Err::<(), _>(format!("code {}", 7)));
    assert_eq!(
        erroring.join().map_err(|error| error.to_string()),
        Err(String::from("Thread callback execution failed with message: code 7"))
    );

    let mut succeeding = Thread::new(|| Ok::<(), String>(()));
    assert_eq!(succeeding.join(), Ok(()));
}

#[test]
fn test_drop_joins() {
    let done = Arc::new(Atomic::new(false));
    let flag = Arc::clone(&done);
    drop(Thread::new(move || {
        Thread::sleep(Duration::from_millis(20));
        flag.set(true);
    }));
    assert!(done.get(), "Dropping an auto-join Thread should wait for it.");

    // A failure during the implicit join is logged rather than raised.
    drop(Thread::new(fail));
}

#[test]
fn test_detach() {
    let (sender, receiver) = mpsc::channel();
    let (release, wait) = mpsc::channel::<()>();
    let thread = Thread::with_policy(
        move || {
            wait.recv().ok();
            sender.send(Thread::this_id()).ok();
        },
        JoinPolicy::AutoDetach,
    );
    let id = thread.id();
    assert!(thread.policy().is_auto_detach());
    drop(thread);

    release.send(()).unwrap();
    assert_eq!(
        receiver.recv_timeout(Duration::from_secs(5)),
        Ok(id),
        "A detached thread should keep running after its Thread is dropped."
    );

    let mut detached = Thread::new(|| {}).with_join_policy(JoinPolicy::AutoDetach);
    assert!(detached.policy().is_auto_detach());
    assert_eq!(detached.detach(), Ok(()));
    assert!(!detached.joinable());
}

#[test]
fn test_ids() {
    let seen = Arc::new(Atomic::new(0_u64));
    let writer = Arc::clone(&seen);
    let mut thread = Thread::new(move || writer.set(Thread::this_id()));
    let id = thread.id();
    thread.join().unwrap();

    assert_eq!(seen.get(), id, "A thread should see the id its handle reports.");
    assert_ne!(id, Thread::this_id());

    let mut threads: Vec<_> = (0..4).map(|_| Thread::new(|| Thread::sleep(Duration::from_millis(10)))).collect();
    let ids: HashSet<_> = threads.iter().map(Thread::id).collect();
    assert_eq!(ids.len(), 4, "Live threads should have distinct ids.");
    threads.sort();
    assert!(threads.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_empty() {
    let mut thread = Thread::empty();
    assert!(!thread.joinable());
    assert_eq!(thread.join(), Ok(()));
    assert_eq!(thread, Thread::default());
    assert_eq!(thread.to_string(), "Thread(#0)");
}

#[test]
fn test_sleep() {
    let start = Instant::now();
    Thread::sleep(Duration::from_millis(30));
    assert!(start.elapsed() >= Duration::from_millis(30), "Sleep should last at least the duration.");

    let start = Instant::now();
    assert_eq!(Thread::try_sleep(Duration::ZERO), Ok(()));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_raw_misuse() {
    let mut raw = NativeThread::empty();
    assert!(raw.join().is_err_and(|error| error.is_misuse()));
    assert!(raw.detach().is_err_and(|error| error.is_misuse()));
}
