#![cfg(test)]

use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn test_exchange_cmp() {
    let atomic = Atomic::new(5_i32);
    let mut expected = 5;

    assert!(atomic.exchange_cmp(&mut expected, 10, MemOrder::SeqCst));
    assert_eq!(atomic.get(), 10);
    assert_eq!(expected, 5, "A successful exchange shouldn't touch expected.");

    assert!(!atomic.exchange_cmp(&mut expected, 20, MemOrder::AcqRel));
    assert_eq!(atomic.get(), 10, "A failed exchange shouldn't store.");
    assert_eq!(expected, 10, "A failed exchange should report the observed value.");
}

#[test]
fn test_locked_exchange_cmp() {
    let atomic = Atomic::new(Some(String::from("a")));
    let mut expected = None;

    assert!(!atomic.exchange_cmp(&mut expected, Some(String::from("b")), MemOrder::Relaxed));
    assert_eq!(expected.as_deref(), Some("a"));
    assert!(atomic.exchange_cmp(&mut expected, None, MemOrder::Relaxed));
    assert_eq!(atomic.exchange(Some(String::from("c")), MemOrder::Release), None);
    assert_eq!(atomic.load(MemOrder::Acquire).as_deref(), Some("c"));
}

#[test]
fn test_is_lock_free() {
    assert!(Atomic::new(0_u8).is_lock_free());
    assert!(Atomic::new(false).is_lock_free());
    assert!(Atomic::new(0.5_f32).is_lock_free());
    assert!(Atomic::new(std::ptr::null_mut::<u8>()).is_lock_free());
    assert_eq!(Atomic::new(0_u64).is_lock_free(), crate::config::ATOMIC_64);

    assert!(!Atomic::new(0_u128).is_lock_free());
    assert!(!Atomic::new(String::new()).is_lock_free());
    assert!(!Atomic::<Option<i32>>::default().is_lock_free());
}

#[test]
fn test_arithmetic() {
    let mut count = make_atomic(10_i64);
    assert_eq!(count.fetch_add(5, MemOrder::Relaxed), 10);
    assert_eq!(count.fetch_sub(3, MemOrder::Relaxed), 15);
    count += 8;
    count -= 20;
    assert_eq!(count.get(), 0);

    let wrapping = Atomic::new(u8::MAX);
    assert_eq!(wrapping.fetch_add(1, MemOrder::SeqCst), u8::MAX);
    assert_eq!(wrapping.get(), 0, "Lock-free integers should wrap.");

    let float = Atomic::new(1.5_f64);
    float.fetch_add(2.25, MemOrder::SeqCst);
    assert_eq!(float.get(), 3.75);

    let big = Atomic::new(u128::MAX - 1);
    assert_eq!(big.fetch_sub(u128::MAX - 1, MemOrder::SeqCst), u128::MAX - 1);
    assert_eq!(big.get(), 0);
}

#[test]
fn test_locked_arithmetic_wraps() {
    let wide = Atomic::new(i128::MAX);
    assert!(!wide.is_lock_free());
    assert_eq!(wide.fetch_add(1, MemOrder::SeqCst), i128::MAX);
    assert_eq!(wide.get(), i128::MIN, "Locked integers should wrap like lock-free ones.");

    let unsigned = Atomic::new(0_u128);
    assert_eq!(unsigned.fetch_sub(1, MemOrder::SeqCst), 0);
    assert_eq!(unsigned.get(), u128::MAX);

    let locked = Locked::<i32>::new(i32::MIN);
    let lock_free = LockFree::<i32>::new(i32::MIN);
    assert_eq!(locked.fetch_sub(1, MemOrder::SeqCst), lock_free.fetch_sub(1, MemOrder::SeqCst));
    assert_eq!(locked.load(MemOrder::SeqCst), lock_free.load(MemOrder::SeqCst));
    assert_eq!(locked.load(MemOrder::SeqCst), i32::MAX);
}

#[test]
fn test_shared_assign_operators() {
    let counter = Arc::new(Atomic::new(0_u64));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let mut shared = &*counter;
                for _ in 0..100 {
                    shared += 3;
                    shared -= 1;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(counter.get(), 4 * 100 * 2, "+= and -= through a shared reference should be atomic.");
}

#[test]
fn test_float_bitwise_compare() {
    let atomic = Atomic::new(0.0_f32);
    let mut expected = -0.0;
    assert!(!atomic.exchange_cmp(&mut expected, 1.0, MemOrder::SeqCst), "-0.0 and 0.0 differ in bits.");
    assert!(expected.is_sign_positive());
}

#[test]
fn test_concurrent_counters() {
    const THREADS: usize = 8;
    const STEPS: usize = 1000;

    let lock_free = Arc::new(Atomic::new(0_usize));
    let locked = Arc::new(Atomic::new(0_i128));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let lock_free = Arc::clone(&lock_free);
            let locked = Arc::clone(&locked);
            thread::spawn(move || {
                for _ in 0..STEPS {
                    lock_free.fetch_add(1, MemOrder::Relaxed);
                    locked.fetch_add(2, MemOrder::Relaxed);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(lock_free.get(), THREADS * STEPS);
    assert_eq!(locked.get(), (THREADS * STEPS * 2) as i128, "Locked addition shouldn't lose updates.");
}

#[test]
fn test_concurrent_exchange_cmp() {
    let owner = Arc::new(Atomic::new(String::new()));

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let owner = Arc::clone(&owner);
            thread::spawn(move || {
                let mut expected = String::new();
                owner.exchange_cmp(&mut expected, format!("thread {id}"), MemOrder::SeqCst)
            })
        })
        .collect();
    let winners = handles.into_iter().map(|handle| handle.join().unwrap()).filter(|won| *won).count();

    assert_eq!(winners, 1, "Exactly one thread should claim an empty slot.");
    assert!(owner.get().starts_with("thread "));
}

#[test]
fn test_mem_order_mapping() {
    use std::sync::atomic::Ordering;

    assert_eq!(MemOrder::Release.load(), Ordering::Acquire);
    assert_eq!(MemOrder::AcqRel.load(), Ordering::Acquire);
    assert_eq!(MemOrder::Acquire.store(), Ordering::Release);
    assert_eq!(MemOrder::AcqRel.failure(), Ordering::Acquire);
    assert_eq!(MemOrder::Release.failure(), Ordering::Relaxed);
    assert_eq!(Ordering::from(MemOrder::default()), Ordering::SeqCst);
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Atomic::new(3_u16)), "Atomic(3)");
    assert_eq!(format!("{:?}", Atomic::new(Some(1))), "Atomic(Some(1))");
}
