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

use crate::num::{numeric::RefinableNumeric, ops::saturating_arithmetic::SaturatingNegVal};
use std::ops::{Add, BitAnd, Mul, Neg, RangeInclusive, Sub};

#[inline(always)]
fn min2<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline(always)]
fn max2<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// A closed interval `[lo, hi]` defined by an inclusive lower and upper bound.
///
/// This is the runtime counterpart of an interval refinement. All arithmetic
/// on intervals saturates at the bounds of `T` (or runs into the signed
/// infinities for floating-point types), so a derived interval is always a
/// sound, possibly loose, over-approximation of the exact result.
///
/// # Invariants
/// `lo` must always be less than or equal to `hi`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct ClosedInterval<T>
where
    T: RefinableNumeric,
{
    lo: T,
    hi: T,
}

impl<T> ClosedInterval<T>
where
    T: RefinableNumeric,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or if either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-2, 3);
    /// assert_eq!(iv.lo(), -2);
    /// assert_eq!(iv.hi(), 3);
    /// ```
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        assert!(
            lo <= hi,
            "Invalid interval: lower bound must be less than or equal to upper bound"
        );
        Self { lo, hi }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `lo > hi` or if either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// assert!(ClosedInterval::try_new(0.0, f64::NAN).is_none());
    /// ```
    #[inline]
    pub fn try_new(lo: T, hi: T) -> Option<Self> {
        if lo <= hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `lo <= hi`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(lo: T, hi: T) -> Self {
        debug_assert!(
            lo <= hi,
            "Invalid interval: lower bound must be less than or equal to upper bound"
        );
        Self { lo, hi }
    }

    /// Returns the interval covering every representable value of `T`.
    ///
    /// For floating-point types this is `[MIN, MAX]` of the finite values.
    #[inline]
    pub fn full() -> Self {
        Self::new_unchecked(T::min_value(), T::max_value())
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn hi(&self) -> T {
        self.hi
    }

    /// Returns `true` if `value` is contained in `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.contains_interval(ClosedInterval::new(2, 10)));
    /// assert!(!a.contains_interval(ClosedInterval::new(2, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Returns `true` if the intervals share at least one point.
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// Returns `true` if the interval contains exactly one value.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns `true` if the interval carries no refinement information.
    ///
    /// An integral interval is trivially wide when it spans the entire
    /// representable range of `T`. Floating-point intervals are never
    /// considered trivially wide, since infinity is a legitimate value and a
    /// bound of `±inf` still excludes NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::new(i8::MIN, i8::MAX).is_trivially_wide());
    /// assert!(!ClosedInterval::new(i8::MIN + 1, i8::MAX).is_trivially_wide());
    /// assert!(!ClosedInterval::new(f64::NEG_INFINITY, f64::INFINITY).is_trivially_wide());
    /// ```
    #[inline]
    pub fn is_trivially_wide(&self) -> bool {
        T::INTEGRAL && self.lo == T::min_value() && self.hi == T::max_value()
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(a.intersection(ClosedInterval::new(11, 12)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        Self::try_new(max2(self.lo, other.lo), min2(self.hi, other.hi))
    }

    /// Returns the smallest interval containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 2);
    /// let b = ClosedInterval::new(8, 9);
    /// assert_eq!(a.hull(b), ClosedInterval::new(0, 9));
    /// ```
    #[inline]
    pub fn hull(&self, other: Self) -> Self {
        Self::new_unchecked(min2(self.lo, other.lo), max2(self.hi, other.hi))
    }

    /// Interval addition `[lo1 + lo2, hi1 + hi2]`, saturating at the type bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// let b = ClosedInterval::new(10, i32::MAX);
    /// assert_eq!(a.saturating_add(b), ClosedInterval::new(11, i32::MAX));
    /// ```
    #[inline]
    pub fn saturating_add(&self, other: Self) -> Self {
        Self::new_unchecked(
            self.lo.saturating_add_val(other.lo),
            self.hi.saturating_add_val(other.hi),
        )
    }

    /// Interval subtraction `[lo1 - hi2, hi1 - lo2]`, saturating at the type bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0u8, 10);
    /// let b = ClosedInterval::new(3u8, 20);
    /// assert_eq!(a.saturating_sub(b), ClosedInterval::new(0, 7));
    /// ```
    #[inline]
    pub fn saturating_sub(&self, other: Self) -> Self {
        Self::new_unchecked(
            self.lo.saturating_sub_val(other.hi),
            self.hi.saturating_sub_val(other.lo),
        )
    }

    /// Interval multiplication: the hull of the four cross products,
    /// each saturating at the type bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(-2, 3);
    /// let b = ClosedInterval::new(-1, 4);
    /// assert_eq!(a.saturating_mul(b), ClosedInterval::new(-8, 12));
    /// ```
    #[inline]
    pub fn saturating_mul(&self, other: Self) -> Self {
        let ac = self.lo.saturating_mul_val(other.lo);
        let ad = self.lo.saturating_mul_val(other.hi);
        let bc = self.hi.saturating_mul_val(other.lo);
        let bd = self.hi.saturating_mul_val(other.hi);
        Self::new_unchecked(
            min2(min2(ac, ad), min2(bc, bd)),
            max2(max2(ac, ad), max2(bc, bd)),
        )
    }
}

impl<T> ClosedInterval<T>
where
    T: RefinableNumeric + SaturatingNegVal,
{
    /// Interval negation `[-hi, -lo]`.
    ///
    /// Negating the minimum of a signed integer type saturates to the maximum,
    /// which widens the interval conservatively instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use refinery_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(i32::MIN, 7);
    /// assert_eq!(iv.saturating_neg(), ClosedInterval::new(-7, i32::MAX));
    /// ```
    #[inline]
    pub fn saturating_neg(&self) -> Self {
        Self::new_unchecked(self.hi.saturating_neg_val(), self.lo.saturating_neg_val())
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl<T> Add for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl<T> Sub for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl<T> Mul for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.saturating_mul(rhs)
    }
}

impl<T> Neg for ClosedInterval<T>
where
    T: RefinableNumeric + SaturatingNegVal,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.saturating_neg()
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedInterval<T>
where
    T: RefinableNumeric,
{
    type Error = RangeInclusive<T>;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        Self::try_new(*range.start(), *range.end()).ok_or(range)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: RefinableNumeric,
{
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.lo..=iv.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_rejects_inverted_bounds() {
        let _ = ClosedInterval::new(5, 4);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(ClosedInterval::try_new(3, 3), Some(ClosedInterval::new(3, 3)));
        assert_eq!(ClosedInterval::try_new(4u8, 3u8), None);
        assert_eq!(ClosedInterval::try_new(f32::NAN, 1.0), None);
    }

    #[test]
    fn test_contains() {
        let iv = ClosedInterval::new(-3i64, 3);
        assert!(iv.contains(-3));
        assert!(iv.contains(0));
        assert!(iv.contains(3));
        assert!(!iv.contains(4));
        assert!(!iv.contains(-4));

        let unit = ClosedInterval::new(0.0f64, 1.0);
        assert!(!unit.contains(f64::NAN));
    }

    #[test]
    fn test_contains_interval_and_intersects() {
        let main = ClosedInterval::new(0, 10);
        assert!(main.contains_interval(main));
        assert!(main.contains_interval(ClosedInterval::new(3, 4)));
        assert!(!main.contains_interval(ClosedInterval::new(-1, 4)));

        assert!(main.intersects(ClosedInterval::new(10, 20)));
        assert!(!main.intersects(ClosedInterval::new(11, 20)));
    }

    #[test]
    fn test_intersection_and_hull() {
        let a = ClosedInterval::new(0, 10);
        let b = ClosedInterval::new(10, 20);
        assert_eq!(a & b, Some(ClosedInterval::new(10, 10)));
        assert_eq!(a.hull(b), ClosedInterval::new(0, 20));
        assert_eq!(a & ClosedInterval::new(11, 12), None);
    }

    #[test]
    fn test_add_saturates() {
        let a = ClosedInterval::new(i8::MAX - 1, i8::MAX);
        let b = ClosedInterval::new(1i8, 5);
        assert_eq!(a + b, ClosedInterval::new(i8::MAX, i8::MAX));

        let c = ClosedInterval::new(i8::MIN, 0);
        assert_eq!(c + c, ClosedInterval::new(i8::MIN, 0));
    }

    #[test]
    fn test_sub_crosses_bounds() {
        let a = ClosedInterval::new(0i32, 10);
        let b = ClosedInterval::new(-5i32, 5);
        assert_eq!(a - b, ClosedInterval::new(-5, 15));

        let nonneg = ClosedInterval::new(0i32, i32::MAX);
        assert_eq!(nonneg - nonneg, ClosedInterval::new(-i32::MAX, i32::MAX));
    }

    #[test]
    fn test_mul_all_sign_combinations() {
        let pos = ClosedInterval::new(2, 3);
        let neg = ClosedInterval::new(-5, -4);
        let mixed = ClosedInterval::new(-2, 3);

        assert_eq!(pos * pos, ClosedInterval::new(4, 9));
        assert_eq!(pos * neg, ClosedInterval::new(-15, -8));
        assert_eq!(neg * neg, ClosedInterval::new(16, 25));
        assert_eq!(mixed * ClosedInterval::new(-1, 4), ClosedInterval::new(-8, 12));
        assert_eq!(mixed * neg, ClosedInterval::new(-15, 10));
    }

    #[test]
    fn test_mul_saturates() {
        let big = ClosedInterval::new(-1_000_000i32, 1_000_000);
        assert_eq!(big * big, ClosedInterval::new(i32::MIN, i32::MAX));
        assert!((big * big).is_trivially_wide());
    }

    #[test]
    fn test_float_mul_with_infinite_bounds() {
        let a = ClosedInterval::new(0.0f64, f64::INFINITY);
        let b = ClosedInterval::new(0.0f64, 2.0);
        assert_eq!(a * b, ClosedInterval::new(0.0, f64::INFINITY));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-ClosedInterval::new(-3, 8), ClosedInterval::new(-8, 3));
        assert_eq!(-ClosedInterval::new(i32::MIN, 7), ClosedInterval::new(-7, i32::MAX));
        assert_eq!(
            -ClosedInterval::new(i64::MIN, i64::MIN),
            ClosedInterval::new(i64::MAX, i64::MAX)
        );
    }

    #[test]
    fn test_trivially_wide() {
        assert!(ClosedInterval::<u16>::full().is_trivially_wide());
        assert!(!ClosedInterval::new(1u16, u16::MAX).is_trivially_wide());
        assert!(!ClosedInterval::<f32>::full().is_trivially_wide());
    }

    #[test]
    fn test_display_and_range_conversions() {
        let iv = ClosedInterval::new(-1, 4);
        assert_eq!(format!("{}", iv), "[-1, 4]");

        let range: RangeInclusive<i32> = iv.into();
        assert_eq!(range, -1..=4);
        assert_eq!(ClosedInterval::try_from(-1..=4), Ok(iv));
        assert!(ClosedInterval::try_from(4..=-1).is_err());
    }
}
