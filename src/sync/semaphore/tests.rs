#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::sync::SysError;

#[test]
fn test_counts() {
    let permits = Semaphore::<3>::new();
    assert_eq!(permits.available(), 3);

    for _ in 0..3 {
        assert!(permits.try_acquire().unwrap());
    }
    assert!(!permits.try_acquire().unwrap(), "An empty semaphore has nothing to hand out.");

    assert!(permits.try_release(2).unwrap());
    assert!(!permits.try_release(2).unwrap(), "Releasing past the maximum should be refused.");
    assert!(!permits.try_release(4).unwrap());
    assert_eq!(permits.available(), 2);

    assert!(
        permits.release(4).is_err_and(|err| err.is_misuse()),
        "An increase above the maximum can never fit."
    );
    assert!(permits.release_for(4, Duration::ZERO).is_err_and(|err| err.is_misuse()));
    assert_eq!(permits.release(0), Ok(()));
    assert_eq!(permits.available(), 2);
}

#[test]
fn test_initial_count() {
    assert_eq!(Semaphore::<4>::with_count(1).available(), 1);
    assert_eq!(Semaphore::<1>::default().available(), 1, "A bounded semaphore starts full.");
    assert!(matches!(
        Semaphore::<2>::try_with_count(3),
        Err(SysError::Misuse { operation: "create semaphore", .. })
    ));
}

#[test]
fn test_timeouts() {
    let empty = Semaphore::<1>::with_count(0);
    let start = Instant::now();
    assert_eq!(empty.acquire_for(Duration::from_millis(30)), Ok(false));
    assert!(start.elapsed() >= Duration::from_millis(25), "The acquire gave up too early.");
    assert_eq!(empty.available(), 0);

    let full = Semaphore::<1>::new();
    assert_eq!(full.release_for(1, Duration::from_millis(10)), Ok(false));
    assert_eq!(full.acquire_for(Duration::from_millis(10)), Ok(true));
    assert_eq!(full.release_for(1, Duration::from_millis(10)), Ok(true));
}

#[test]
fn test_release_waits_for_room() {
    let permits = Semaphore::<1>::new();

    thread::scope(|s| {
        let releaser = s.spawn(|| permits.release(1));

        thread::sleep(Duration::from_millis(20));
        assert!(!releaser.is_finished(), "A full semaphore should block the release.");

        permits.acquire().unwrap();
        assert_eq!(releaser.join().unwrap(), Ok(()), "Acquiring should wake the blocked release.");
    });
    assert_eq!(permits.available(), 1);
}

#[test]
fn test_guard_limits_concurrency() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 50;

    let permits = Semaphore::<2>::new();
    let inside = AtomicUsize::new(0);
    let peak = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    let _permit = SemaphoreGuard::new(&permits).unwrap();
                    let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    thread::yield_now();
                    inside.fetch_sub(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert!(peak.load(Ordering::SeqCst) <= 2, "At most two threads may hold a permit at once.");
    assert_eq!(permits.available(), 2, "Every guard should have returned its permit.");
}

#[test]
fn test_unbounded() {
    let queue = Semaphore::<0>::new();
    assert_eq!(Semaphore::<0>::CAPACITY, u64::MAX);
    assert_eq!(queue.available(), 0, "An unbounded semaphore starts empty.");
    assert!(!queue.try_acquire().unwrap());

    const ITEMS: u64 = 200;
    thread::scope(|s| {
        let consumer = s.spawn(|| {
            for _ in 0..ITEMS {
                queue.acquire().unwrap();
            }
        });
        for _ in 0..ITEMS {
            queue.release(1).unwrap();
        }
        consumer.join().unwrap();
    });
    assert_eq!(queue.available(), 0);

    queue.release(1_000_000).unwrap();
    assert_eq!(queue.available(), 1_000_000);
}
