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

//! # Size Intervals
//!
//! Interval predicates over a container's element count. A size predicate is
//! a [`Predicate<usize>`] with associated bounds `LO` and `HI`, and the same
//! saturating interval algebra as value intervals, restricted to the
//! non-negative `usize` line:
//!
//! - [`SizeInterval<LO, HI>`]: literal bounds, `HI` defaults to `usize::MAX`.
//! - [`Grown<S, N>`]: `[LO + N, HI + N]`, the bounds after adding `N` elements.
//! - [`Shrunk<S, N>`]: `[LO - N, HI - N]`, the bounds after removing `N`.
//! - [`Joined<S1, S2>`]: `[LO1 + LO2, HI1 + HI2]`, the bounds of a
//!   concatenation.
//!
//! Every shift saturates: lower bounds clamp at `0`, upper bounds at
//! `usize::MAX`. Nothing ever wraps.

use crate::predicate::Predicate;
use refinery_core::math::interval::ClosedInterval;
use std::marker::PhantomData;

/// A closed interval over `usize` describing a container's element count.
///
/// # Examples
///
/// ```rust
/// use refinery::size::{Grown, SizeInterval, SizePredicate};
///
/// type AtLeastThree = SizeInterval<3, 10>;
/// assert_eq!(<Grown<AtLeastThree, 1> as SizePredicate>::LO, 4);
/// assert_eq!(<Grown<AtLeastThree, 1> as SizePredicate>::HI, 11);
/// ```
///
/// # Safety
///
/// `Predicate::test(n)` must imply `LO <= n && n <= HI`. Size-refined
/// containers read elements without a bounds check on the strength of `LO`.
/// A bound that `test` does not enforce is rejected unless the impl is
/// marked `unsafe`:
///
/// ```compile_fail
/// use refinery::{predicate::Predicate, size::SizePredicate};
///
/// struct AnyLength;
///
/// impl Predicate<usize> for AnyLength {
///     const NAME: &'static str = "AnyLength";
///
///     fn test(_: &usize) -> bool {
///         true
///     }
/// }
///
/// impl SizePredicate for AnyLength {
///     const LO: usize = 1;
///     const HI: usize = usize::MAX;
/// }
/// ```
pub unsafe trait SizePredicate: Predicate<usize> {
    /// Inclusive lower bound on the element count.
    const LO: usize;
    /// Inclusive upper bound on the element count.
    const HI: usize;

    /// Returns the bounds as a runtime interval.
    #[inline]
    fn bounds() -> ClosedInterval<usize> {
        ClosedInterval::new_unchecked(Self::LO, Self::HI)
    }
}

#[inline(always)]
fn contains<S: SizePredicate>(size: usize) -> bool {
    S::LO <= size && size <= S::HI
}

fn describe_bounds<S: SizePredicate>(name: &str) -> String {
    if S::HI == usize::MAX {
        format!("{}[{}, ∞)", name, S::LO)
    } else {
        format!("{}[{}, {}]", name, S::LO, S::HI)
    }
}

/// The literal size interval `[LO, HI]`.
///
/// An inverted interval (`LO > HI`) is rejected at compile time as soon as
/// its bounds are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizeInterval<const LO: usize, const HI: usize = { usize::MAX }>;

// SAFETY: every size predicate here tests through `contains`.
unsafe impl<const L: usize, const H: usize> SizePredicate for SizeInterval<L, H> {
    const LO: usize = {
        assert!(L <= H, "size interval lower bound exceeds upper bound");
        L
    };
    const HI: usize = H;
}

impl<const L: usize, const H: usize> Predicate<usize> for SizeInterval<L, H> {
    const NAME: &'static str = "SizeInterval";

    #[inline]
    fn test(size: &usize) -> bool {
        contains::<Self>(*size)
    }

    fn describe() -> String {
        describe_bounds::<Self>("SizeInterval")
    }
}

/// The size interval of `S` after adding exactly `N` elements.
pub struct Grown<S, const N: usize>(PhantomData<fn() -> S>);

unsafe impl<S: SizePredicate, const N: usize> SizePredicate for Grown<S, N> {
    const LO: usize = S::LO.saturating_add(N);
    const HI: usize = S::HI.saturating_add(N);
}

impl<S: SizePredicate, const N: usize> Predicate<usize> for Grown<S, N> {
    const NAME: &'static str = "Grown";

    #[inline]
    fn test(size: &usize) -> bool {
        contains::<Self>(*size)
    }

    fn describe() -> String {
        describe_bounds::<Self>("SizeInterval")
    }
}

/// The size interval of `S` after removing exactly `N` elements.
pub struct Shrunk<S, const N: usize>(PhantomData<fn() -> S>);

unsafe impl<S: SizePredicate, const N: usize> SizePredicate for Shrunk<S, N> {
    const LO: usize = S::LO.saturating_sub(N);
    const HI: usize = S::HI.saturating_sub(N);
}

impl<S: SizePredicate, const N: usize> Predicate<usize> for Shrunk<S, N> {
    const NAME: &'static str = "Shrunk";

    #[inline]
    fn test(size: &usize) -> bool {
        contains::<Self>(*size)
    }

    fn describe() -> String {
        describe_bounds::<Self>("SizeInterval")
    }
}

/// The size interval of a concatenation of an `S1`-sized and an `S2`-sized
/// container.
pub struct Joined<S1, S2>(PhantomData<fn() -> (S1, S2)>);

unsafe impl<S1: SizePredicate, S2: SizePredicate> SizePredicate for Joined<S1, S2> {
    const LO: usize = S1::LO.saturating_add(S2::LO);
    const HI: usize = S1::HI.saturating_add(S2::HI);
}

impl<S1: SizePredicate, S2: SizePredicate> Predicate<usize> for Joined<S1, S2> {
    const NAME: &'static str = "Joined";

    #[inline]
    fn test(size: &usize) -> bool {
        contains::<Self>(*size)
    }

    fn describe() -> String {
        describe_bounds::<Self>("SizeInterval")
    }
}
