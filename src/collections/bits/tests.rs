#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::cursor::Cursor;
use crate::util::error::{CursorError, IndexOutOfBounds, OutOfBoundError};
use crate::util::panic::assert_panics;

fn bits(pattern: &str) -> BitSet {
    pattern.chars().map(|c| c == '1').collect()
}

#[test]
fn test_get_and_set() {
    let mut set = BitSet::new(10);
    assert_eq!(set.size(), 10);
    assert_eq!(set.count(), 0);

    set.set(0, true);
    set.set(-1, true);
    set.set(4, true);
    set.set(4, false);

    assert!(set.get(0) && set.get(9) && !set.get(4));
    assert_eq!(set.count(), 2);
    assert_eq!(set.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));
    assert_eq!(set.try_set(-11, true), Err(IndexOutOfBounds { index: -11, len: 10 }));
    assert_panics!({ set.get(12) }, "Reading past the end should panic.");
    assert_eq!(set.to_string(), "bitSet(1, 0, 0, 0, 0, 0, 0, 0, 0, 1)");
}

#[test]
fn test_word_boundaries() {
    for size in [31, 32, 33, 64, 65] {
        let mut set = BitSet::new(size);
        set.set(-1, true);
        set.set(0, true);

        assert!(set.get(size as i64 - 1), "The last bit of a {size} bit set should be addressable.");
        assert_eq!(set.count(), 2);
        assert_eq!(set.words.len(), size.div_ceil(WORD_BITS));

        let flipped = !&set;
        assert_eq!(flipped.count(), size - set.count(), "Negation shouldn't set bits past the size.");
        assert_eq!((!flipped).count(), set.count());
    }
}

#[test]
fn test_resize() {
    let mut set = !BitSet::new(40);
    assert_eq!(set.count(), 40);

    set.resize(35);
    assert_eq!(set.count(), 35, "Shrinking should drop the bits past the new size.");

    set.resize(70);
    assert_eq!(set.count(), 35, "Growing should only add cleared bits.");
    assert_eq!(set.index_of(false), Some(35));

    let small = set.resized(3);
    assert_eq!(small, bits("111"));
    assert_eq!(set.size(), 70, "resized shouldn't touch the original.");
}

#[test]
fn test_index_of() {
    assert_eq!(bits("0001").index_of(true), Some(3));
    assert_eq!(bits("1110").index_of(false), Some(3));
    assert_eq!(bits("000").index_of(true), None);
    assert_eq!((!BitSet::new(33)).index_of(false), None, "Unused bits shouldn't be reported.");
    assert_eq!(BitSet::new(0).index_of(false), None);

    let mut set = !BitSet::new(100);
    set.set(70, false);
    assert_eq!(set.index_of(false), Some(70), "Full words should be skipped over.");
}

#[test]
fn test_operators() {
    let a = bits("1100");
    let b = bits("1010");

    assert_eq!(&a & &b, bits("1000"));
    assert_eq!(&a | &b, bits("1110"));
    assert_eq!(&a ^ &b, bits("0110"));
    assert_eq!(!&a, bits("0011"));

    let mut c = a.clone();
    c ^= &a;
    assert_eq!(c.count(), 0);
}

#[test]
fn test_mismatched_sizes() {
    let mut long = bits("111111");
    long &= &bits("101");
    assert_eq!(long, bits("101000"), "A shorter operand should be padded with cleared bits.");

    let mut short = bits("001");
    short |= &bits("110111");
    assert_eq!(short, bits("111"), "A longer operand should be truncated to self's size.");

    assert_eq!((&bits("1") ^ &bits("11")).size(), 1, "The result keeps the size of the left operand.");
}

#[test]
fn test_cursor() {
    let mut set = bits(&"10".repeat(20));
    let mut cursor = set.begins();

    assert_eq!(cursor.get(), Ok(true));
    assert_eq!((cursor.word_index(), cursor.bit_index()), (0, 0));

    cursor.advance(33).unwrap();
    assert_eq!((cursor.word_index(), cursor.bit_index()), (1, 1));
    assert_eq!(cursor.replace(true), Ok(false));

    let end = cursor.clone().stepped(6).unwrap();
    assert_eq!(end.index(), 39);
    assert!(!end.has_next() && end.has_prev());
    assert_eq!(end.distance(&cursor), Some(6));
    assert!(cursor < end);

    let mut before = cursor.clone();
    before.retreat(34).unwrap();
    assert_eq!((before.word_index(), before.bit_index()), (-1, 31));
    assert_eq!(before.get(), Err(CursorError::OutOfBound(OutOfBoundError)));
    assert!(!before.is_valid());

    assert!(set.get(33), "Writes through the cursor should reach the set.");
    assert_eq!(set.count(), 21);
    assert_eq!(set.ends().get(), Ok(false));
    assert!(!BitSet::new(0).begins().is_valid());
}

#[test]
fn test_cursor_extreme_steps() {
    let mut set = bits("101");
    let begin = set.begins();

    let mut low = begin.clone();
    low.advance(i64::MIN).unwrap();
    assert_eq!(low.index(), i64::MIN, "Extreme steps should saturate instead of overflowing.");
    assert!(!low.is_valid() && !low.has_prev());
    assert_eq!(low.get(), Err(CursorError::OutOfBound(OutOfBoundError)));

    let mut high = begin.clone();
    high.retreat(i64::MIN).unwrap();
    high.next().unwrap();
    assert_eq!(high.index(), i64::MAX);
    assert!(!high.is_valid() && !high.has_next());
    assert!(!high.at_next(&low));
}

#[test]
fn test_iter() {
    let set = bits("1011");
    assert_eq!(set.iter().collect::<Vec<_>>(), [true, false, true, true]);
    assert_eq!(set.iter().rev().collect::<Vec<_>>(), [true, true, false, true]);
    assert_eq!(set.iter().len(), 4);
}

fn bit_set() -> impl Strategy<Value = BitSet> {
    prop::collection::vec(any::<bool>(), 0..100).prop_map(|bits| BitSet::from_bools(&bits))
}

fn bit_set_pair() -> impl Strategy<Value = (BitSet, BitSet)> {
    (0_usize..100).prop_flat_map(|size| {
        (
            prop::collection::vec(any::<bool>(), size),
            prop::collection::vec(any::<bool>(), size),
        )
            .prop_map(|(a, b)| (BitSet::from_bools(&a), BitSet::from_bools(&b)))
    })
}

proptest! {
    #[test]
    fn prop_double_negation(set in bit_set()) {
        prop_assert_eq!(!!set.clone(), set);
    }

    #[test]
    fn prop_xor_self_is_empty(set in bit_set()) {
        prop_assert_eq!((&set ^ &set).count(), 0);
    }

    #[test]
    fn prop_de_morgan((a, b) in bit_set_pair()) {
        prop_assert_eq!(!(&a & &b), &!&a | &!&b);
        prop_assert_eq!(!(&a | &b), &!&a & &!&b);
    }

    #[test]
    fn prop_inclusion_exclusion((a, b) in bit_set_pair()) {
        prop_assert_eq!((&a | &b).count() + (&a & &b).count(), a.count() + b.count());
    }

    #[test]
    fn prop_count_matches_iter(set in bit_set()) {
        prop_assert_eq!(set.count(), set.iter().filter(|bit| *bit).count());
    }
}
