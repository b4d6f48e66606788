// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A closed interval `[start, end]` defined by an inclusive start and an inclusive end.
///
/// This is the shape of every representable range in the engine: an integer kind
/// covers all values from its minimum up to and including its maximum, so a
/// closed interval needs no sentinel one past the end (which would not exist for
/// the widest kinds).
///
/// # Invariants
/// `start_inclusive` must always be less than or equal to `end_inclusive`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_inclusive: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 255);
    /// assert!(iv.contains(255));
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_inclusive: T) -> Self {
        assert!(
            start_inclusive <= end_inclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_inclusive"
        );
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_inclusive: T) -> Option<Self> {
        if start_inclusive <= end_inclusive {
            Some(Self {
                start_inclusive,
                end_inclusive,
            })
        } else {
            None
        }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_inclusive
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-128, 127);
    /// assert!(iv.contains(-128));
    /// assert!(iv.contains(127));
    /// assert!(!iv.contains(128));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start_inclusive <= value && value <= self.end_inclusive
    }

    /// Returns `true` if every point of `other` lies within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start_inclusive <= other.start_inclusive && other.end_inclusive <= self.end_inclusive
    }

    /// Returns `true` if the two intervals share at least one point.
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive <= other.end_inclusive && other.start_inclusive <= self.end_inclusive
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals share no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::math::interval::ClosedInterval;
    ///
    /// let signed = ClosedInterval::new(-128, 127);
    /// let unsigned = ClosedInterval::new(0, 255);
    /// assert_eq!(signed.intersection(unsigned), Some(ClosedInterval::new(0, 127)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            start_inclusive: max(self.start_inclusive, other.start_inclusive),
            end_inclusive: min(self.end_inclusive, other.end_inclusive),
        })
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.start_inclusive, self.end_inclusive)
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start_inclusive, self.end_inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i128;

    fn iv(s: IntegerType, e: IntegerType) -> ClosedInterval<IntegerType> {
        ClosedInterval::new(s, e)
    }

    #[test]
    fn test_construction_valid() {
        let i = iv(-5, 5);
        assert_eq!(i.start(), -5);
        assert_eq!(i.end(), 5);
    }

    #[test]
    fn test_construction_single_point() {
        let i = iv(7, 7);
        assert!(i.contains(7));
        assert!(!i.contains(6));
        assert!(!i.contains(8));
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_construction_invalid_panics() {
        let _ = iv(10, 5);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    fn test_contains_bounds_are_inclusive() {
        let i = iv(0, 255);
        assert!(i.contains(0));
        assert!(i.contains(255));
        assert!(!i.contains(-1));
        assert!(!i.contains(256));
    }

    #[test]
    fn test_contains_interval() {
        let outer = iv(i64::MIN as i128, i64::MAX as i128);
        assert!(outer.contains_interval(iv(-128, 127)));
        assert!(!outer.contains_interval(iv(0, u64::MAX as i128)));
        assert!(outer.contains_interval(outer));
    }

    #[test]
    fn test_intersection_overlapping() {
        assert_eq!(iv(-128, 127).intersection(iv(0, 255)), Some(iv(0, 127)));
        assert_eq!(iv(0, 255).intersection(iv(-128, 127)), Some(iv(0, 127)));
    }

    #[test]
    fn test_intersection_touching_at_one_point() {
        assert_eq!(iv(0, 10).intersection(iv(10, 20)), Some(iv(10, 10)));
    }

    #[test]
    fn test_intersection_disjoint() {
        assert_eq!(iv(-10, -1).intersection(iv(0, 10)), None);
        assert!(!iv(-10, -1).intersects(iv(0, 10)));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", iv(-128, 127)), "[-128, 127]");
        assert_eq!(format!("{:?}", iv(0, 1)), "[0, 1]");
    }
}
