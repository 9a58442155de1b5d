use std::cmp::Ordering;

/// A three-way comparison producing a signed magnitude rather than just an [`Ordering`].
///
/// The sign of [`compare_to`](Comparable::compare_to) carries the order: negative when `self` comes
/// first, zero when equal and positive when `self` comes after `other`. For cursors the magnitude is
/// the number of steps between the two positions.
pub trait Comparable {
    fn compare_to(&self, other: &Self) -> i64;

    fn ordering(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }

    fn precedes(&self, other: &Self) -> bool {
        self.compare_to(other) < 0
    }

    fn follows(&self, other: &Self) -> bool {
        self.compare_to(other) > 0
    }
}
