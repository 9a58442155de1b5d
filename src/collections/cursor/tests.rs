#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;
use crate::traits::Comparable;

#[cfg(all(feature = "contiguous", feature = "linked"))]
mod any_cursor {
    use super::*;
    use crate::collections::contiguous::Array;
    use crate::collections::linked::{Chain, ForwardChain};
    use crate::util::error::CursorError;

    #[test]
    fn test_dispatch() {
        let mut arr = Array::from([1, 2, 3].into_iter());
        let mut chain: Chain<_> = [4, 5, 6].into_iter().collect();
        let mut forward: ForwardChain<_> = [7, 8, 9].into_iter().collect();

        let mut cursors = [
            AnyCursor::from(arr.begins()),
            AnyCursor::from(chain.ends()),
            AnyCursor::from(forward.begins()),
        ];

        assert!(cursors[0].is_array() && cursors[1].is_chain() && cursors[2].is_forward_chain());
        assert_eq!(cursors[0].get(), Ok(1));
        assert_eq!(cursors[1].get(), Ok(6), "ends() should denote the last element.");

        cursors[1].prev().unwrap();
        assert_eq!(cursors[1].replace(50), Ok(5));
        assert!(
            cursors[2].prev().is_err_and(|err| matches!(err, CursorError::Unsupported(_))),
            "The forward-only variant should keep refusing to step backwards."
        );

        let total: i32 = cursors.iter().cloned().flat_map(Cursor::values).sum();
        assert_eq!(total, (1 + 2 + 3) + (50 + 6) + (7 + 8 + 9));
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [4, 50, 6]);
    }

    #[test]
    fn test_mixed_kinds_are_unrelated() {
        let mut arr = Array::from([1].into_iter());
        let mut chain: Chain<_> = [1].into_iter().collect();

        let a = AnyCursor::from(arr.begins());
        let b = AnyCursor::from(chain.begins());

        assert!(!a.equal_ptr(&b), "Cursors of different kinds never share a position.");
        assert_eq!(a.distance(&b), None);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.compare_to(&b), i64::MAX, "Unrelated cursors compare as the maximum.");
        assert!(!a.at_next(&b) && !a.at_prev(&b));

        let same = a.clone();
        assert_eq!(a, same);
        assert!(!a.precedes(&same) && !a.follows(&same));
    }
}

#[cfg(feature = "contiguous")]
mod contiguous {
    use super::*;
    use crate::collections::contiguous::Array;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The distance between two array cursors is the difference between their indexes.
        #[test]
        fn prop_array_distance_matches_index(len in 1_usize..64, i in 0_usize..64, j in 0_usize..64) {
            let (i, j) = (i % len, j % len);
            let mut arr = Array::from(0..len);
            let begin = arr.begins();

            let a = begin.stepped(i as i64).unwrap();
            let b = begin.stepped(j as i64).unwrap();

            prop_assert_eq!(a.distance(&b), Some(i as i64 - j as i64));
            prop_assert_eq!(a.compare_to(&b), i as i64 - j as i64);
            prop_assert_eq!(a.partial_cmp(&b), Some(i.cmp(&j)));
            prop_assert_eq!(a == b, i == j);
            prop_assert_eq!(a.get(), Ok(i));
        }
    }

    #[test]
    fn test_ordering_helpers() {
        let mut arr = Array::from(0..4);
        let first = arr.begins();
        let last = first.stepped(3).unwrap();

        assert_eq!(first.ordering(&last), Ordering::Less);
        assert!(first.precedes(&last));
        assert!(last.follows(&first));
        assert!(first.at_next(&first.get_next().unwrap()), "A successor is adjacent on construction.");
        assert!(first.get_next().unwrap().at_prev(&first));
    }
}

#[cfg(feature = "linked")]
mod linked {
    use super::*;
    use crate::collections::linked::{Chain, ForwardChain};
    use crate::util::error::CursorError;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Walking a linked cursor gives the same distance as the indexes it was walked to.
        #[test]
        fn prop_chain_distance_matches_index(len in 1_usize..32, i in 0_usize..32, j in 0_usize..32) {
            let (i, j) = (i % len, j % len);
            let mut chain: Chain<_> = (0..len).collect();
            let begin = chain.begins();

            let a = begin.stepped(i as i64).unwrap();
            let b = begin.stepped(j as i64).unwrap();

            prop_assert_eq!(a.distance(&b), Some(i as i64 - j as i64));
            prop_assert_eq!(b.distance(&a), Some(j as i64 - i as i64));
            prop_assert_eq!(a.equal_ptr(&b), i == j);
            prop_assert_eq!(a.at_next(&b), i + 1 == j);
        }

        #[test]
        fn prop_forward_distance_matches_index(len in 1_usize..32, i in 0_usize..32, j in 0_usize..32) {
            let (i, j) = (i % len, j % len);
            let mut chain: ForwardChain<_> = (0..len).collect();
            let begin = chain.begins();

            let a = begin.stepped(i as i64).unwrap();
            let b = begin.stepped(j as i64).unwrap();

            prop_assert_eq!(a.distance(&b), Some(i as i64 - j as i64));
            prop_assert_eq!(a.get(), Ok(i));
        }
    }

    #[test]
    fn test_separate_chains_are_unrelated() {
        let mut first: Chain<_> = (0..3).collect();
        let mut second: Chain<_> = (0..3).collect();

        let a = first.begins();
        let b = second.begins();
        assert_eq!(a.distance(&b), None, "Cursors over different chains can't reach each other.");
        assert_eq!(a.compare_to(&b), i64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_cursors() {
        let mut chain: Chain<_> = (0..2).collect();
        let begin = chain.begins();
        let end = begin.stepped(2).unwrap();

        assert!(!end.is_valid());
        assert_eq!(end.distance(&begin), Some(2), "The past-the-end position counts as a step.");
        assert!(end.values().next().is_none());
        assert!(begin.values().eq([0, 1]));
    }

    #[test]
    fn test_extreme_steps_stop_at_the_ends() {
        let mut chain: Chain<_> = (0..3).collect();

        let mut before = chain.begins();
        assert!(before.advance(i64::MIN).is_err(), "Stepping back past the start should fail.");
        assert!(!before.is_valid());

        let mut after = chain.begins();
        assert!(after.retreat(i64::MIN).is_err(), "Stepping forward past the end should fail.");
        assert!(!after.is_valid());

        let mut forward: ForwardChain<_> = (0..3).collect();
        assert!(
            forward.begins().advance(i64::MIN).is_err_and(|err| matches!(err, CursorError::Unsupported(_))),
            "Forward-only cursors should refuse a negative advance."
        );
    }
}
