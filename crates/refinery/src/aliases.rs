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

//! # Common Refined Types
//!
//! Ready-made aliases for frequently used refinements.
//!
//! Integer sign refinements are interval-backed, so they take part in the
//! interval arithmetic of [`crate::interval`]: adding two `PositiveI32`
//! values yields a value refined by `Sum<..>` with bounds `[2, i32::MAX]`.
//! `NonZero*` and the float aliases use the predicate catalog directly.
//!
//! ```rust
//! use refinery::{aliases::{PortNumber, Probability}, refined};
//!
//! const HTTP: PortNumber = refined!(PortNumber, 80);
//! assert_eq!(*HTTP, 80);
//!
//! assert!(Probability::<f64>::new(0.25).is_ok());
//! assert!(Probability::<f64>::new(1.5).is_err());
//! ```

use crate::{
    interval::Interval,
    predicate::{Finite, NonNegative, NonZero, Normalized, Positive},
    refined::Refined,
    refined_container::SizeRefined,
    size::SizeInterval,
};

macro_rules! signed_aliases {
    ($($t:ident => $pos:ident, $neg:ident, $nonneg:ident, $nonpos:ident);* $(;)?) => {
        $(
            #[doc = concat!("A `", stringify!($t), "` in `[1, MAX]`.")]
            pub type $pos = Refined<$t, Interval<1, { $t::MAX as i128 }>>;
            #[doc = concat!("A `", stringify!($t), "` in `[MIN, -1]`.")]
            pub type $neg = Refined<$t, Interval<{ $t::MIN as i128 }, -1>>;
            #[doc = concat!("A `", stringify!($t), "` in `[0, MAX]`.")]
            pub type $nonneg = Refined<$t, Interval<0, { $t::MAX as i128 }>>;
            #[doc = concat!("A `", stringify!($t), "` in `[MIN, 0]`.")]
            pub type $nonpos = Refined<$t, Interval<{ $t::MIN as i128 }, 0>>;
        )*
    };
}

signed_aliases! {
    i8 => PositiveI8, NegativeI8, NonNegativeI8, NonPositiveI8;
    i16 => PositiveI16, NegativeI16, NonNegativeI16, NonPositiveI16;
    i32 => PositiveI32, NegativeI32, NonNegativeI32, NonPositiveI32;
    i64 => PositiveI64, NegativeI64, NonNegativeI64, NonPositiveI64;
}

pub type NonZeroI8 = Refined<i8, NonZero>;
pub type NonZeroI16 = Refined<i16, NonZero>;
pub type NonZeroI32 = Refined<i32, NonZero>;
pub type NonZeroI64 = Refined<i64, NonZero>;
pub type NonZeroU8 = Refined<u8, NonZero>;
pub type NonZeroU16 = Refined<u16, NonZero>;
pub type NonZeroU32 = Refined<u32, NonZero>;
pub type NonZeroU64 = Refined<u64, NonZero>;
pub type NonZeroUsize = Refined<usize, NonZero>;

pub type PositiveF32 = Refined<f32, Positive>;
pub type PositiveF64 = Refined<f64, Positive>;
pub type NonNegativeF32 = Refined<f32, NonNegative>;
pub type NonNegativeF64 = Refined<f64, NonNegative>;
pub type NonZeroF32 = Refined<f32, NonZero>;
pub type NonZeroF64 = Refined<f64, NonZero>;
pub type FiniteF32 = Refined<f32, Finite>;
pub type FiniteF64 = Refined<f64, Finite>;
pub type NormalizedF32 = Refined<f32, Normalized>;
pub type NormalizedF64 = Refined<f64, Normalized>;

/// A strictly positive `i32`.
pub type Natural = PositiveI32;

/// A non-negative `i32`.
pub type Whole = NonNegativeI32;

/// An integer percentage in `[0, 100]`.
pub type Percentage<T = i32> = Refined<T, Interval<0, 100>>;

/// A probability in `[0, 1]`.
pub type Probability<T = f64> = Refined<T, Interval<0, 1>>;

/// An `f32` in the unit interval `[0, 1]`.
pub type UnitF32 = Refined<f32, Interval<0, 1>>;

/// An `f64` in the unit interval `[0, 1]`.
pub type UnitF64 = Refined<f64, Interval<0, 1>>;

/// A byte value in `[0, 255]`.
pub type ByteValue<T = i32> = Refined<T, Interval<0, 255>>;

/// A TCP/UDP port in `[1, 65535]`.
pub type PortNumber<T = u16> = Refined<T, Interval<1, 65535>>;

/// A container `C` with at least one element.
pub type NonEmptyContainer<C> = SizeRefined<C, SizeInterval<1>>;

/// A `Vec<T>` with at least one element.
///
/// # Examples
///
/// ```rust
/// use refinery::aliases::NonEmptyVec;
///
/// let v = NonEmptyVec::new(vec![1, 2, 3]).unwrap();
/// assert_eq!((*v.front(), *v.back()), (1, 3));
/// assert!(NonEmptyVec::<i32>::new(Vec::new()).is_err());
/// ```
pub type NonEmptyVec<T> = NonEmptyContainer<Vec<T>>;

/// A `Vec<T>` whose length lies in `[LO, HI]`.
pub type SizeRefinedVec<T, const LO: usize, const HI: usize> = SizeRefined<Vec<T>, SizeInterval<LO, HI>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined;

    #[test]
    fn test_sign_aliases() {
        assert!(PositiveI8::new(i8::MAX).is_ok());
        assert!(PositiveI8::new(0).is_err());
        assert!(NegativeI16::new(i16::MIN).is_ok());
        assert!(NegativeI16::new(0).is_err());
        assert!(NonNegativeI64::new(0).is_ok());
        assert!(NonPositiveI32::new(1).is_err());
        assert!(Natural::new(1).is_ok());
        assert!(Whole::new(-1).is_err());
    }

    #[test]
    fn test_domain_aliases() {
        const FULL: Percentage = refined!(Percentage, 100);
        assert_eq!(*FULL, 100);
        assert!(Percentage::<u8>::new(101).is_err());
        assert!(ByteValue::<i32>::new(256).is_err());
        assert!(PortNumber::<u16>::new(0).is_err());
        assert!(PortNumber::<u32>::new(65_536).is_err());
        assert!(UnitF32::new(1.0).is_ok());
        assert!(UnitF64::new(f64::NAN).is_err());
        assert!(Probability::<f32>::new(-0.1).is_err());
    }

    #[test]
    fn test_catalog_aliases() {
        assert!(NonZeroUsize::new(0).is_err());
        assert!(NonZeroU8::new(1).is_ok());
        assert!(PositiveF64::new(f64::MIN_POSITIVE).is_ok());
        assert!(NonNegativeF32::new(-0.0).is_ok());
        assert!(FiniteF64::new(f64::INFINITY).is_err());
        assert!(NormalizedF32::new(-1.0).is_ok());
        assert!(NonZeroF64::new(0.0).is_err());
    }

    #[test]
    fn test_container_aliases() {
        type Triple = SizeRefinedVec<u8, 3, 3>;
        assert!(Triple::new(vec![1, 2]).is_err());
        let t = Triple::new(vec![1, 2, 3]).unwrap();
        assert_eq!(*t.back(), 3);

        let n: NonEmptyContainer<[u8; 2]> = NonEmptyContainer::new([4, 5]).unwrap();
        assert_eq!(*n.front(), 4);
    }
}
