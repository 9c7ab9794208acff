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

//! # Interval Predicates & Arithmetic
//!
//! Interval predicates restrict a numeric value to a closed range
//! `[LO, HI]` carried in the type. Arithmetic between interval-refined
//! values derives the result's interval at compile time:
//!
//! | Operation | Derived predicate    | Bounds                                |
//! |-----------|----------------------|---------------------------------------|
//! | `a + b`   | [`Sum<A, B>`]        | `[lo1 + lo2, hi1 + hi2]`              |
//! | `a - b`   | [`Difference<A, B>`] | `[lo1 - hi2, hi1 - lo2]`              |
//! | `a * b`   | [`Product<A, B>`]    | hull of the four cross products       |
//! | `-a`      | [`Negation<A>`]      | `[-hi, -lo]`                          |
//!
//! Bounds saturate: integer bounds clamp to `T::MIN`/`T::MAX` (negating
//! `T::MIN` yields `T::MAX`), float bounds run into the signed infinities and
//! a `0 * inf` cross product counts as `0`. The derived interval is therefore
//! always a sound, possibly loose, over-approximation.
//!
//! The runtime *value* is computed with checked arithmetic instead. An
//! integer operation whose literal result does not fit the base type fails
//! with [`RefineError::Overflow`], independent of whether the derived bounds
//! are still informative. Floating-point operations evaluate directly.
//!
//! Every operator returns a [`Derived`] value. When the derived interval of
//! an integral type covers the whole representable range it carries no
//! information, so the result degrades to [`Derived::Plain`]. Float results
//! never degrade.
//!
//! ```rust
//! use refinery::{interval::{Interval, IntervalPredicate, Product}, refined, Refined};
//!
//! let a = refined!(Refined<i32, Interval<-2, 3>>, 3);
//! let b = refined!(Refined<i32, Interval<-1, 4>>, -1);
//!
//! let product = (a * b).unwrap();
//! assert_eq!(product.value(), -3);
//!
//! type P = Product<Interval<-2, 3>, Interval<-1, 4>>;
//! assert_eq!(<P as IntervalPredicate<i32>>::LO, -8);
//! assert_eq!(<P as IntervalPredicate<i32>>::HI, 12);
//! ```

use crate::{
    error::{RefineError, RefineResult},
    predicate::Predicate,
    refined::Refined,
};
use refinery_core::{
    math::interval::ClosedInterval,
    num::{numeric::RefinableNumeric, ops::checked_arithmetic::CheckedNegVal},
};
use std::{
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};

/// A predicate of the form `LO <= v && v <= HI` with type-level bounds.
///
/// A predicate is an interval predicate exactly when it implements this
/// trait. The [`interval!`](crate::interval!) macro declares new ones.
///
/// # Safety
///
/// `Predicate::test(v)` must imply `LO <= v && v <= HI`, and `LO <= HI`
/// must hold. Derived interval results are constructed without a check and
/// size-refined containers index without a bounds check on the strength of
/// this contract. Implementing `test` through
/// [`contains_value`](IntervalPredicate::contains_value) satisfies it.
///
/// ```compile_fail
/// use refinery::{interval::IntervalPredicate, predicate::Predicate};
///
/// struct Small;
///
/// impl Predicate<usize> for Small {
///     const NAME: &'static str = "Small";
///
///     fn test(_: &usize) -> bool {
///         true
///     }
/// }
///
/// impl IntervalPredicate<usize> for Small {
///     const LO: usize = 0;
///     const HI: usize = 4;
/// }
/// ```
pub unsafe trait IntervalPredicate<T: RefinableNumeric>: Predicate<T> {
    /// Inclusive lower bound.
    const LO: T;
    /// Inclusive upper bound.
    const HI: T;

    /// Returns `true` if `LO <= value <= HI`. NaN is never contained.
    #[inline(always)]
    fn contains_value(value: &T) -> bool {
        Self::LO <= *value && *value <= Self::HI
    }

    /// Returns the bounds as a runtime interval.
    #[inline]
    fn bounds() -> ClosedInterval<T> {
        ClosedInterval::new_unchecked(Self::LO, Self::HI)
    }
}

/// The literal interval `[L, H]`.
///
/// Usable with every primitive integer and with `f32`/`f64`. The bounds are
/// narrowed to the base type at compile time; a bound the type cannot
/// represent, or `L > H`, is a compile-time error. Fractional float bounds
/// are declared with [`interval!`](crate::interval!) instead.
///
/// # Examples
///
/// ```rust
/// use refinery::{interval::Interval, Refined};
///
/// type Percent = Refined<u8, Interval<0, 100>>;
///
/// assert!(Percent::new(100).is_ok());
/// assert!(Percent::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval<const L: i128, const H: i128>;

/// `[A.LO + B.LO, A.HI + B.HI]`.
pub struct Sum<A, B>(PhantomData<fn() -> (A, B)>);

/// `[A.LO - B.HI, A.HI - B.LO]`.
pub struct Difference<A, B>(PhantomData<fn() -> (A, B)>);

/// The hull of the four cross products of `A` and `B`.
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

/// `[-A.HI, -A.LO]`.
pub struct Negation<A>(PhantomData<fn() -> A>);

macro_rules! impl_literal_interval {
    (@check $t:ty, $b:ident, range) => {
        assert!(
            $b >= <$t>::MIN as i128 && $b <= <$t>::MAX as i128,
            "interval bound is not representable in the base type"
        );
    };
    (@check $t:ty, $b:ident, non_negative) => {
        assert!($b >= 0, "interval bound is not representable in the base type");
    };
    (@check $t:ty, $b:ident, ) => {};
    ($t:ty; $($check:tt)*) => {
        // SAFETY: `test` is `contains_value`.
        unsafe impl<const L: i128, const H: i128> IntervalPredicate<$t> for Interval<L, H> {
            const LO: $t = {
                assert!(L <= H, "interval lower bound exceeds upper bound");
                impl_literal_interval!(@check $t, L, $($check)*);
                L as $t
            };
            const HI: $t = {
                impl_literal_interval!(@check $t, H, $($check)*);
                H as $t
            };
        }

        impl<const L: i128, const H: i128> Predicate<$t> for Interval<L, H> {
            const NAME: &'static str = "Interval";

            #[inline]
            fn test(value: &$t) -> bool {
                <Self as IntervalPredicate<$t>>::contains_value(value)
            }

            fn describe() -> String {
                format!("Interval[{}, {}]", L, H)
            }
        }
    };
}

impl_literal_interval!(i8; range);
impl_literal_interval!(i16; range);
impl_literal_interval!(i32; range);
impl_literal_interval!(i64; range);
impl_literal_interval!(isize; range);
impl_literal_interval!(i128;);
impl_literal_interval!(u8; range);
impl_literal_interval!(u16; range);
impl_literal_interval!(u32; range);
impl_literal_interval!(u64; range);
impl_literal_interval!(usize; range);
impl_literal_interval!(u128; non_negative);
impl_literal_interval!(f32;);
impl_literal_interval!(f64;);

// Derived predicates test through `contains_value`, which makes the
// `unsafe impl IntervalPredicate` of every derived type sound.
macro_rules! derived_predicate {
    ($t:ty, $name:ident < $($p:ident),+ >) => {
        impl<$($p),+> Predicate<$t> for $name<$($p),+>
        where
            $($p: IntervalPredicate<$t>),+
        {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn test(value: &$t) -> bool {
                <Self as IntervalPredicate<$t>>::contains_value(value)
            }

            fn describe() -> String {
                let operands: Vec<String> = vec![$(<$p as Predicate<$t>>::describe()),+];
                format!("{}<{}>", stringify!($name), operands.join(", "))
            }
        }
    };
}

macro_rules! impl_integer_algebra {
    ($($t:ty),*) => {
        $(
            unsafe impl<A, B> IntervalPredicate<$t> for Sum<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = A::LO.saturating_add(B::LO);
                const HI: $t = A::HI.saturating_add(B::HI);
            }

            unsafe impl<A, B> IntervalPredicate<$t> for Difference<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = A::LO.saturating_sub(B::HI);
                const HI: $t = A::HI.saturating_sub(B::LO);
            }

            unsafe impl<A, B> IntervalPredicate<$t> for Product<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = {
                    let (ac, ad) = (A::LO.saturating_mul(B::LO), A::LO.saturating_mul(B::HI));
                    let (bc, bd) = (A::HI.saturating_mul(B::LO), A::HI.saturating_mul(B::HI));
                    let m1 = if ac < ad { ac } else { ad };
                    let m2 = if bc < bd { bc } else { bd };
                    if m1 < m2 { m1 } else { m2 }
                };
                const HI: $t = {
                    let (ac, ad) = (A::LO.saturating_mul(B::LO), A::LO.saturating_mul(B::HI));
                    let (bc, bd) = (A::HI.saturating_mul(B::LO), A::HI.saturating_mul(B::HI));
                    let m1 = if ac > ad { ac } else { ad };
                    let m2 = if bc > bd { bc } else { bd };
                    if m1 > m2 { m1 } else { m2 }
                };
            }

            derived_predicate!($t, Sum<A, B>);
            derived_predicate!($t, Difference<A, B>);
            derived_predicate!($t, Product<A, B>);
        )*
    };
}

macro_rules! impl_signed_negation {
    ($($t:ty),*) => {
        $(
            unsafe impl<A> IntervalPredicate<$t> for Negation<A>
            where
                A: IntervalPredicate<$t>,
            {
                const LO: $t = A::HI.saturating_neg();
                const HI: $t = A::LO.saturating_neg();
            }

            derived_predicate!($t, Negation<A>);
        )*
    };
}

// Float bounds follow IEEE 754, which already saturates to the infinities.
// The only undefined cases are `inf - inf` (a bound at the far infinity) and
// `0 * inf` (zero).
macro_rules! impl_float_algebra {
    ($($t:ty),*) => {
        $(
            unsafe impl<A, B> IntervalPredicate<$t> for Sum<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = {
                    let v = A::LO + B::LO;
                    if v != v { <$t>::NEG_INFINITY } else { v }
                };
                const HI: $t = {
                    let v = A::HI + B::HI;
                    if v != v { <$t>::INFINITY } else { v }
                };
            }

            unsafe impl<A, B> IntervalPredicate<$t> for Difference<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = {
                    let v = A::LO - B::HI;
                    if v != v { <$t>::NEG_INFINITY } else { v }
                };
                const HI: $t = {
                    let v = A::HI - B::LO;
                    if v != v { <$t>::INFINITY } else { v }
                };
            }

            unsafe impl<A, B> IntervalPredicate<$t> for Product<A, B>
            where
                A: IntervalPredicate<$t>,
                B: IntervalPredicate<$t>,
            {
                const LO: $t = {
                    let p = [A::LO * B::LO, A::LO * B::HI, A::HI * B::LO, A::HI * B::HI];
                    let mut lo = <$t>::INFINITY;
                    let mut i = 0;
                    while i < 4 {
                        let v = if p[i] != p[i] { 0.0 } else { p[i] };
                        if v < lo {
                            lo = v;
                        }
                        i += 1;
                    }
                    lo
                };
                const HI: $t = {
                    let p = [A::LO * B::LO, A::LO * B::HI, A::HI * B::LO, A::HI * B::HI];
                    let mut hi = <$t>::NEG_INFINITY;
                    let mut i = 0;
                    while i < 4 {
                        let v = if p[i] != p[i] { 0.0 } else { p[i] };
                        if v > hi {
                            hi = v;
                        }
                        i += 1;
                    }
                    hi
                };
            }

            unsafe impl<A> IntervalPredicate<$t> for Negation<A>
            where
                A: IntervalPredicate<$t>,
            {
                const LO: $t = -A::HI;
                const HI: $t = -A::LO;
            }

            derived_predicate!($t, Sum<A, B>);
            derived_predicate!($t, Difference<A, B>);
            derived_predicate!($t, Product<A, B>);
            derived_predicate!($t, Negation<A>);
        )*
    };
}

impl_integer_algebra!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_signed_negation!(i8, i16, i32, i64, i128, isize);
impl_float_algebra!(f32, f64);

impl<T, P> Refined<T, P>
where
    T: RefinableNumeric,
    P: IntervalPredicate<T>,
{
    /// Returns the type-level bounds of this refinement as a runtime interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{interval::{Interval, Sum}, Refined};
    ///
    /// type S = Sum<Interval<1, 5>, Interval<-2, 10>>;
    /// assert_eq!(Refined::<i32, S>::bounds().to_string(), "[-1, 15]");
    /// ```
    #[inline]
    pub fn bounds() -> ClosedInterval<T> {
        P::bounds()
    }
}

macro_rules! impl_static_refinement {
    ($($t:ty),*) => {
        $(
            impl<P: IntervalPredicate<$t>> Refined<$t, P> {
                /// Creates a refined value whose interval membership is
                /// checked at compile time.
                ///
                /// Call it in a `const` context, usually through
                /// [`refined!`](crate::refined!); a value outside the
                /// interval then fails the build. Evaluated at runtime it
                /// panics instead, so prefer [`Refined::new`] there.
                #[inline]
                pub const fn new_static(value: $t) -> Self {
                    assert!(
                        P::LO <= value && value <= P::HI,
                        "static refinement violation: value lies outside the interval"
                    );
                    Self {
                        value,
                        predicate: PhantomData,
                    }
                }

                /// Widens the refinement to an interval `Q` that contains `P`.
                ///
                /// Containment is proven at compile time; no runtime check
                /// takes place.
                #[inline]
                pub fn relax<Q: IntervalPredicate<$t>>(self) -> Refined<$t, Q> {
                    const {
                        assert!(
                            Q::LO <= P::LO && P::HI <= Q::HI,
                            "relaxed interval must contain the original interval"
                        )
                    };
                    Refined {
                        value: self.value,
                        predicate: PhantomData,
                    }
                }
            }
        )*
    };
}

impl_static_refinement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// The result of an interval-arithmetic operation.
///
/// `Refined` when the derived interval carries information, `Plain` when an
/// integral result's derived interval spans the whole type.
pub enum Derived<T, P> {
    /// The result together with its derived refinement.
    Refined(Refined<T, P>),
    /// The bare result; its derived interval was trivially wide.
    Plain(T),
}

impl<T, P> Derived<T, P>
where
    T: RefinableNumeric,
    P: IntervalPredicate<T>,
{
    /// Wraps an operation result, proving or re-verifying it against `P`.
    ///
    /// Integral results are already proven: the operands lie in their
    /// intervals, the literal operation did not overflow, and the derived
    /// bounds only ever widen. Float results are re-verified to reject NaN.
    pub(crate) fn from_result(value: T) -> RefineResult<Self> {
        if !T::INTEGRAL {
            return Refined::new(value).map(Derived::Refined);
        }
        if P::bounds().is_trivially_wide() {
            tracing::trace!(
                predicate = %P::describe(),
                "derived interval is trivially wide; dropping the refinement"
            );
            return Ok(Derived::Plain(value));
        }
        // SAFETY: see above; `new_unchecked` still checks in debug builds.
        Ok(Derived::Refined(unsafe { Refined::new_unchecked(value) }))
    }

    /// Returns `true` if the result kept its refinement.
    #[inline]
    pub fn is_refined(&self) -> bool {
        matches!(self, Derived::Refined(_))
    }

    /// Returns `true` if the refinement was dropped.
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Derived::Plain(_))
    }

    /// Returns the refined result, or `None` if the refinement was dropped.
    #[inline]
    pub fn refined(self) -> Option<Refined<T, P>> {
        match self {
            Derived::Refined(r) => Some(r),
            Derived::Plain(_) => None,
        }
    }

    /// Returns the result value, forgetting any refinement.
    #[inline]
    pub fn value(self) -> T {
        match self {
            Derived::Refined(r) => r.into_inner(),
            Derived::Plain(v) => v,
        }
    }

    /// Returns the result as `Refined<T, P>`, re-verifying a plain value.
    ///
    /// A plain value always passes, since its interval spans the whole type.
    pub fn into_result(self) -> RefineResult<Refined<T, P>> {
        match self {
            Derived::Refined(r) => Ok(r),
            Derived::Plain(v) => Refined::new(v),
        }
    }
}

impl<T: Copy, P> Clone for Derived<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, P> Copy for Derived<T, P> {}

impl<T: std::fmt::Debug, P> std::fmt::Debug for Derived<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Derived::Refined(r) => f.debug_tuple("Refined").field(r.get()).finish(),
            Derived::Plain(v) => f.debug_tuple("Plain").field(v).finish(),
        }
    }
}

impl<T: PartialEq, P> PartialEq for Derived<T, P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Derived::Refined(a), Derived::Refined(b)) => a.get() == b.get(),
            (Derived::Plain(a), Derived::Plain(b)) => a == b,
            _ => false,
        }
    }
}

impl<T, A, B> Add<Refined<T, B>> for Refined<T, A>
where
    T: RefinableNumeric,
    A: IntervalPredicate<T>,
    B: IntervalPredicate<T>,
    Sum<A, B>: IntervalPredicate<T>,
{
    type Output = RefineResult<Derived<T, Sum<A, B>>>;

    #[inline]
    fn add(self, rhs: Refined<T, B>) -> Self::Output {
        let (a, b) = (self.into_inner(), rhs.into_inner());
        match a.checked_add_val(b) {
            Some(v) => Derived::from_result(v),
            None => Err(RefineError::overflow(a, "+", b)),
        }
    }
}

impl<T, A, B> Sub<Refined<T, B>> for Refined<T, A>
where
    T: RefinableNumeric,
    A: IntervalPredicate<T>,
    B: IntervalPredicate<T>,
    Difference<A, B>: IntervalPredicate<T>,
{
    type Output = RefineResult<Derived<T, Difference<A, B>>>;

    #[inline]
    fn sub(self, rhs: Refined<T, B>) -> Self::Output {
        let (a, b) = (self.into_inner(), rhs.into_inner());
        match a.checked_sub_val(b) {
            Some(v) => Derived::from_result(v),
            None => Err(RefineError::overflow(a, "-", b)),
        }
    }
}

impl<T, A, B> Mul<Refined<T, B>> for Refined<T, A>
where
    T: RefinableNumeric,
    A: IntervalPredicate<T>,
    B: IntervalPredicate<T>,
    Product<A, B>: IntervalPredicate<T>,
{
    type Output = RefineResult<Derived<T, Product<A, B>>>;

    #[inline]
    fn mul(self, rhs: Refined<T, B>) -> Self::Output {
        let (a, b) = (self.into_inner(), rhs.into_inner());
        match a.checked_mul_val(b) {
            Some(v) => Derived::from_result(v),
            None => Err(RefineError::overflow(a, "*", b)),
        }
    }
}

impl<T, A> Neg for Refined<T, A>
where
    T: RefinableNumeric + CheckedNegVal,
    A: IntervalPredicate<T>,
    Negation<A>: IntervalPredicate<T>,
{
    type Output = RefineResult<Derived<T, Negation<A>>>;

    #[inline]
    fn neg(self) -> Self::Output {
        let a = self.into_inner();
        match a.checked_neg_val() {
            Some(v) => Derived::from_result(v),
            None => Err(RefineError::unary_overflow("-", a)),
        }
    }
}

/// Declares a named interval predicate with arbitrary bounds.
///
/// Unlike [`Interval`], the bounds may be any constant expression of the
/// base type, which makes this the way to express fractional float ranges.
///
/// # Examples
///
/// ```rust
/// use refinery::{interval, interval::IntervalPredicate, Refined};
///
/// interval!(
///     /// A duty cycle between 5 % and 95 %.
///     pub DutyCycle: f64 = 0.05, 0.95
/// );
///
/// assert_eq!(<DutyCycle as IntervalPredicate<f64>>::LO, 0.05);
/// assert!(Refined::<f64, DutyCycle>::new(0.5).is_ok());
/// assert!(Refined::<f64, DutyCycle>::new(0.99).is_err());
/// ```
#[macro_export]
macro_rules! interval {
    ($(#[$meta:meta])* $vis:vis $name:ident : $t:ty = $lo:expr, $hi:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        // SAFETY: `test` is `contains_value`.
        unsafe impl $crate::interval::IntervalPredicate<$t> for $name {
            const LO: $t = {
                assert!($lo <= $hi, "interval lower bound exceeds upper bound");
                $lo
            };
            const HI: $t = $hi;
        }

        impl $crate::predicate::Predicate<$t> for $name {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn test(value: &$t) -> bool {
                <Self as $crate::interval::IntervalPredicate<$t>>::contains_value(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<T: RefinableNumeric, P: IntervalPredicate<T>>() -> (T, T) {
        (P::LO, P::HI)
    }

    fn r<T, P>(value: T) -> Refined<T, P>
    where
        T: RefinableNumeric,
        P: IntervalPredicate<T>,
    {
        Refined::new(value).expect("test value must satisfy its interval")
    }

    #[test]
    fn test_literal_interval_narrowing() {
        assert_eq!(bounds::<u8, Interval<0, 255>>(), (0, 255));
        assert_eq!(bounds::<i64, Interval<-5, 5>>(), (-5, 5));
        assert_eq!(bounds::<f64, Interval<0, 1>>(), (0.0, 1.0));
        assert_eq!(
            bounds::<u128, Interval<1, { i128::MAX }>>(),
            (1, i128::MAX as u128)
        );
    }

    #[test]
    fn test_literal_interval_predicate() {
        assert!(<Interval<-3, 3> as Predicate<i32>>::test(&-3));
        assert!(!<Interval<-3, 3> as Predicate<i32>>::test(&4));
        assert!(!<Interval<0, 1> as Predicate<f64>>::test(&f64::NAN));
        assert_eq!(<Interval<-3, 3> as Predicate<i32>>::describe(), "Interval[-3, 3]");
    }

    #[test]
    fn test_sum_and_difference_bounds() {
        type A = Interval<1, 5>;
        type B = Interval<-2, 10>;
        assert_eq!(bounds::<i32, Sum<A, B>>(), (-1, 15));
        assert_eq!(bounds::<i32, Difference<A, B>>(), (-9, 7));
        assert_eq!(bounds::<u8, Sum<Interval<200, 250>, Interval<10, 10>>>(), (210, 255));
        assert_eq!(bounds::<u8, Difference<Interval<0, 10>, Interval<3, 20>>>(), (0, 7));
    }

    #[test]
    fn test_product_bounds_all_sign_combinations() {
        assert_eq!(bounds::<i32, Product<Interval<-2, 3>, Interval<-1, 4>>>(), (-8, 12));
        assert_eq!(bounds::<i32, Product<Interval<2, 3>, Interval<-5, -4>>>(), (-15, -8));
        assert_eq!(bounds::<i32, Product<Interval<-5, -4>, Interval<-5, -4>>>(), (16, 25));
        assert_eq!(bounds::<i32, Product<Interval<-2, 3>, Interval<-5, -4>>>(), (-15, 10));
    }

    #[test]
    fn test_negation_bounds() {
        assert_eq!(bounds::<i32, Negation<Interval<-3, 8>>>(), (-8, 3));
        assert_eq!(
            bounds::<i32, Negation<Interval<{ i32::MIN as i128 }, 7>>>(),
            (-7, i32::MAX)
        );
        assert_eq!(bounds::<f64, Negation<Interval<0, 1>>>(), (-1.0, 0.0));
    }

    #[test]
    fn test_saturating_bounds() {
        type Big = Interval<{ i8::MAX as i128 - 1 }, { i8::MAX as i128 }>;
        assert_eq!(bounds::<i8, Sum<Big, Big>>(), (i8::MAX, i8::MAX));
        assert_eq!(
            bounds::<i8, Product<Interval<-100, 100>, Interval<-100, 100>>>(),
            (i8::MIN, i8::MAX)
        );
    }

    #[test]
    fn test_float_bounds_reach_infinity() {
        type Huge = Interval<0, { i128::MAX }>;
        let (lo, hi) = bounds::<f32, Product<Huge, Huge>>();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, f32::INFINITY);
    }

    #[test]
    fn test_add_values() {
        let a: Refined<i32, Interval<1, 5>> = r(4);
        let b: Refined<i32, Interval<-2, 10>> = r(7);
        let sum = (a + b).unwrap();
        assert!(sum.is_refined());
        assert_eq!(sum.value(), 11);
    }

    #[test]
    fn test_same_predicate_operands() {
        let a: Refined<i16, Interval<0, 100>> = r(40);
        let b: Refined<i16, Interval<0, 100>> = r(60);
        let sum = (a + b).unwrap().refined().unwrap();
        assert_eq!(*sum, 100);
        assert_eq!(Refined::<i16, Sum<Interval<0, 100>, Interval<0, 100>>>::bounds(), ClosedInterval::new(0, 200));
    }

    #[test]
    fn test_overflow_is_an_error() {
        type Wide = Interval<0, { i32::MAX as i128 }>;
        let a: Refined<i32, Wide> = r(i32::MAX);
        let b: Refined<i32, Wide> = r(1);
        let err = (a + b).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "arithmetic overflow: 2147483647 + 1 overflows i32");
    }

    #[test]
    fn test_negation_of_min_is_an_error() {
        let a: Refined<i32, Interval<{ i32::MIN as i128 }, 7>> = r(i32::MIN);
        assert!((-a).unwrap_err().is_overflow());

        let b: Refined<i32, Interval<{ i32::MIN as i128 }, 7>> = r(7);
        let neg = (-b).unwrap().refined().unwrap();
        assert_eq!(*neg, -7);
    }

    #[test]
    fn test_trivially_wide_result_degrades() {
        type Half = Interval<{ i8::MIN as i128 }, 0>;
        let a: Refined<i8, Half> = r(-100);
        let b: Refined<i8, Interval<0, { i8::MAX as i128 }>> = r(27);
        // [-128, 0] - [0, 127] stays informative; [-128, 0] + [0, 127] does not.
        assert!((a - b).unwrap().is_refined());
        let plain = (a + b).unwrap();
        assert!(plain.is_plain());
        assert_eq!(plain, Derived::Plain(-73));
        assert_eq!(plain.into_result().unwrap().into_inner(), -73);
    }

    #[test]
    fn test_float_results_never_degrade() {
        type All = Interval<{ -(i128::MAX) }, { i128::MAX }>;
        let a: Refined<f64, All> = r(1.5);
        let b: Refined<f64, All> = r(2.0);
        let product = (a * b).unwrap();
        assert!(product.is_refined());
        assert_eq!(product.value(), 3.0);
    }

    #[test]
    fn test_float_nan_result_is_rejected() {
        interval!(Unbounded: f64 = f64::NEG_INFINITY, f64::INFINITY);
        let a: Refined<f64, Unbounded> = r(f64::INFINITY);
        let b: Refined<f64, Unbounded> = r(f64::INFINITY);
        assert!((a - b).unwrap_err().is_violation());
    }

    #[test]
    fn test_interval_macro() {
        interval!(
            /// Unit range.
            Unit: f32 = 0.0, 1.0
        );
        assert_eq!(bounds::<f32, Unit>(), (0.0, 1.0));
        assert!(<Unit as Predicate<f32>>::test(&0.25));
        assert_eq!(<Unit as Predicate<f32>>::describe(), "Unit");
        assert_eq!(bounds::<f32, Sum<Unit, Unit>>(), (0.0, 2.0));
    }

    #[test]
    fn test_static_construction_and_relax() {
        const FIVE: Refined<u8, Interval<1, 10>> =
            Refined::<u8, Interval<1, 10>>::new_static(5);
        let wide: Refined<u8, Interval<0, 255>> = FIVE.relax();
        assert_eq!(*wide, 5);

        let half = crate::refined!(Refined<f64, Interval<0, 1>>, 0.5);
        assert_eq!(half.into_inner(), 0.5);
    }

    #[test]
    #[should_panic(expected = "static refinement violation")]
    fn test_new_static_panics_at_runtime_on_violation() {
        let v = std::hint::black_box(11u8);
        let _ = Refined::<u8, Interval<1, 10>>::new_static(v);
    }

    #[test]
    fn test_derived_describe() {
        assert_eq!(
            <Sum<Interval<1, 2>, Negation<Interval<0, 3>>> as Predicate<i32>>::describe(),
            "Sum<Interval[1, 2], Negation<Interval[0, 3]>>"
        );
    }
}
