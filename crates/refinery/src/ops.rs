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

//! # Operations on Non-Interval Refinements
//!
//! Arithmetic for predicates that are not backed by a closed range. Without
//! bounds to propagate, the result is either covered by a static
//! preservation proof ([`Preserves`]) or re-verified at runtime, which makes
//! these operations return `Option`.
//!
//! Subtraction and negation are never assumed to preserve a predicate and
//! return plain values. The remaining helpers carry a proof by construction:
//! division by a [`NonZero`] divisor, `min`/`max`/`clamp` (the result is one
//! of the inputs), and float functions whose domain is guaranteed by the
//! input refinement.

use crate::{
    compose::{All, And, Any, AtLeastN, AtMostN, ExactlyN, Iff, Implies, Not, Or, PredicateList, Xor},
    error::{RefineError, RefineResult},
    predicate::{
        Always, DivisibleBy, Even, Finite, GreaterOrEqual, GreaterThan, IsZero, LessOrEqual,
        LessThan, Negative, Never, NonNegative, NonPositive, NonZero, Normalized, NotNaN, Odd,
        Positive, PowerOfTwo, Predicate,
    },
    refined::Refined,
};
use num_traits::{Float, PrimInt};
use refinery_core::num::{numeric::RefinableNumeric, ops::checked_arithmetic::CheckedNegVal};

/// A static proof that a predicate survives an arithmetic operation.
///
/// `UNDER_ADD` claims: if `P(a)` and `P(b)` then `P(a + b)`, whenever
/// `a + b` is representable. `UNDER_MUL` claims the same for `a * b`. Both
/// default to `false`, which makes the operation fall back to re-verifying
/// its result.
///
/// Proofs shipped with this crate:
///
/// | Predicate     | Integers      | Floats        |
/// |---------------|---------------|---------------|
/// | `Positive`    | `+`, `*`      | `+`           |
/// | `NonNegative` | `+`, `*`      | `+`           |
/// | `Negative`    | `+`           |               |
/// | `NonPositive` | `+`           |               |
/// | `NonZero`     | `*`           |               |
/// | `IsZero`      | `+`, `*`      | `+`, `*`      |
/// | `GreaterThan<N>`, `GreaterOrEqual<N>` | `+`, `*` if `N >= 0` | `+` if `N >= 0` |
/// | `LessThan<N>`, `LessOrEqual<N>` | `+` if `N <= 0` | `+` if `N <= 0` |
/// | `DivisibleBy<N>` | `+`, `*`   |               |
///
/// Integer claims rest on the checked arithmetic of the operations: a result
/// that did not overflow keeps its sign. A float product of two positive
/// values can underflow to `0`, and `0 * inf` is NaN, so no float sign
/// predicate claims `UNDER_MUL`. Float sums only claim what monotonic
/// rounding guarantees.
///
/// Every other predicate in the crate, composites included, implements the
/// trait without claims, so `refined_add` and `refined_mul` accept them and
/// re-verify. `And` claims what both sides claim.
///
/// # Safety
///
/// A `true` claim lets the operation skip re-verification, so it must hold
/// for every pair of accepted operands. An implementation that keeps both
/// defaults claims nothing and is always sound; that is how a custom
/// predicate opts in:
///
/// ```rust
/// use refinery::{ops::{refined_add, Preserves}, predicate::Predicate, Refined};
///
/// struct MultipleOfTen;
///
/// impl Predicate<u32> for MultipleOfTen {
///     const NAME: &'static str = "MultipleOfTen";
///
///     fn test(value: &u32) -> bool {
///         value % 10 == 0
///     }
/// }
///
/// // SAFETY: no claims.
/// unsafe impl Preserves<u32> for MultipleOfTen {}
///
/// let a = Refined::<u32, MultipleOfTen>::new(20).unwrap();
/// let b = Refined::<u32, MultipleOfTen>::new(30).unwrap();
/// assert_eq!(refined_add(a, b).map(|r| r.into_inner()), Some(50));
/// ```
pub unsafe trait Preserves<T: ?Sized>: Predicate<T> {
    /// `P(a) && P(b) => P(a + b)`.
    const UNDER_ADD: bool = false;
    /// `P(a) && P(b) => P(a * b)`.
    const UNDER_MUL: bool = false;
}

// SAFETY: every claim below is one listed on `Preserves`; impls without
// claims are trivially sound.

macro_rules! no_preservation {
    ($pred:ty; $($t:ty),*) => {
        $(unsafe impl Preserves<$t> for $pred {})*
    };
}

macro_rules! preserves {
    ($pred:ty: add = $add:expr, mul = $mul:expr; $($t:ty),*) => {
        $(
            unsafe impl Preserves<$t> for $pred {
                const UNDER_ADD: bool = $add;
                const UNDER_MUL: bool = $mul;
            }
        )*
    };
}

macro_rules! impl_integer_preservation {
    ($($t:ty),*) => {
        preserves!(Positive: add = true, mul = true; $($t),*);
        preserves!(NonNegative: add = true, mul = true; $($t),*);
        preserves!(Negative: add = true, mul = false; $($t),*);
        preserves!(NonPositive: add = true, mul = false; $($t),*);
        preserves!(NonZero: add = false, mul = true; $($t),*);
        preserves!(IsZero: add = true, mul = true; $($t),*);
    };
}

impl_integer_preservation!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
preserves!(Positive: add = true, mul = false; f32, f64);
preserves!(NonNegative: add = true, mul = false; f32, f64);
preserves!(IsZero: add = true, mul = true; f32, f64);
no_preservation!(Negative; f32, f64);
no_preservation!(NonPositive; f32, f64);
no_preservation!(NonZero; f32, f64);

// Above a non-negative threshold, `a + b >= max(a, b)` and, for integers,
// `a * b >= a`. Below a non-positive threshold, `a + b <= min(a, b)`.
macro_rules! impl_comparison_preservation {
    ($($t:ty),*) => {
        $(
            unsafe impl<const N: i128> Preserves<$t> for GreaterThan<N> {
                const UNDER_ADD: bool = N >= 0;
                const UNDER_MUL: bool = N >= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for GreaterOrEqual<N> {
                const UNDER_ADD: bool = N >= 0;
                const UNDER_MUL: bool = N >= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for LessThan<N> {
                const UNDER_ADD: bool = N <= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for LessOrEqual<N> {
                const UNDER_ADD: bool = N <= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for DivisibleBy<N> {
                const UNDER_ADD: bool = true;
                const UNDER_MUL: bool = true;
            }
        )*
    };
}

macro_rules! impl_float_comparison_preservation {
    ($($t:ty),*) => {
        $(
            unsafe impl<const N: i128> Preserves<$t> for GreaterThan<N> {
                const UNDER_ADD: bool = N >= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for GreaterOrEqual<N> {
                const UNDER_ADD: bool = N >= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for LessThan<N> {
                const UNDER_ADD: bool = N <= 0;
            }

            unsafe impl<const N: i128> Preserves<$t> for LessOrEqual<N> {
                const UNDER_ADD: bool = N <= 0;
            }
        )*
    };
}

impl_comparison_preservation!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_comparison_preservation!(f32, f64);

unsafe impl<T: PrimInt> Preserves<T> for Even {}
unsafe impl<T: PrimInt> Preserves<T> for Odd {}
unsafe impl<T: PrimInt> Preserves<T> for PowerOfTwo {}
unsafe impl<T: Float> Preserves<T> for Finite {}
unsafe impl<T: Float> Preserves<T> for NotNaN {}
unsafe impl<T: Float> Preserves<T> for Normalized {}
unsafe impl<T: ?Sized> Preserves<T> for Always {}
unsafe impl<T: ?Sized> Preserves<T> for Never {}

unsafe impl<T, P, Q> Preserves<T> for And<P, Q>
where
    T: ?Sized,
    P: Preserves<T>,
    Q: Preserves<T>,
{
    const UNDER_ADD: bool = P::UNDER_ADD && Q::UNDER_ADD;
    const UNDER_MUL: bool = P::UNDER_MUL && Q::UNDER_MUL;
}

macro_rules! binary_without_claims {
    ($($name:ident),*) => {
        $(
            unsafe impl<T, P, Q> Preserves<T> for $name<P, Q>
            where
                T: ?Sized,
                P: Predicate<T>,
                Q: Predicate<T>,
            {
            }
        )*
    };
}

binary_without_claims!(Or, Implies, Iff, Xor);

unsafe impl<T: ?Sized, P: Predicate<T>> Preserves<T> for Not<P> {}

macro_rules! list_without_claims {
    ($($name:ident $(<$n:ident>)?),*) => {
        $(
            unsafe impl<T: ?Sized, $(const $n: usize,)? L: PredicateList<T>> Preserves<T>
                for $name<$($n,)? L>
            {
            }
        )*
    };
}

list_without_claims!(All, Any, ExactlyN<N>, AtLeastN<N>, AtMostN<N>);

#[inline]
fn wrap_result<T, P>(value: T, proven: bool) -> Option<Refined<T, P>>
where
    P: Predicate<T>,
{
    if proven {
        // SAFETY: `proven` is a `Preserves` claim for this exact operation.
        Some(unsafe { Refined::new_unchecked(value) })
    } else {
        let result = Refined::try_new(value);
        if result.is_none() {
            tracing::trace!(predicate = %P::describe(), "operation result failed re-verification");
        }
        result
    }
}

/// Adds two values refined by the same predicate.
///
/// Returns `None` if the sum overflows or, without a static proof, if the
/// sum does not satisfy `P`.
///
/// # Examples
///
/// ```rust
/// use refinery::{ops::refined_add, predicate::{Even, Positive}, Refined};
///
/// let a = Refined::<f64, Positive>::new(0.5).unwrap();
/// let b = Refined::<f64, Positive>::new(1.5).unwrap();
/// assert_eq!(refined_add(a, b).map(|r| r.into_inner()), Some(2.0));
///
/// let x = Refined::<i32, Even>::new(i32::MAX - 1).unwrap();
/// assert!(refined_add(x, x).is_none()); // overflow
/// ```
pub fn refined_add<T, P>(a: Refined<T, P>, b: Refined<T, P>) -> Option<Refined<T, P>>
where
    T: RefinableNumeric,
    P: Preserves<T>,
{
    let sum = a.into_inner().checked_add_val(b.into_inner())?;
    wrap_result(sum, P::UNDER_ADD)
}

/// Multiplies two values refined by the same predicate.
///
/// Returns `None` if the product overflows or, without a static proof, if
/// the product does not satisfy `P`.
pub fn refined_mul<T, P>(a: Refined<T, P>, b: Refined<T, P>) -> Option<Refined<T, P>>
where
    T: RefinableNumeric,
    P: Preserves<T>,
{
    let product = a.into_inner().checked_mul_val(b.into_inner())?;
    wrap_result(product, P::UNDER_MUL)
}

/// Subtracts two refined values. The predicate is not carried over.
///
/// Returns `None` on integer overflow.
pub fn refined_sub<T, P, Q>(a: Refined<T, P>, b: Refined<T, Q>) -> Option<T>
where
    T: RefinableNumeric,
{
    a.into_inner().checked_sub_val(b.into_inner())
}

/// Negates a refined value. The predicate is not carried over.
///
/// Returns `None` when negating the minimum of a signed integer type.
pub fn refined_neg<T, P>(a: Refined<T, P>) -> Option<T>
where
    T: CheckedNegVal,
{
    a.into_inner().checked_neg_val()
}

/// Adds one, keeping the predicate if it still holds.
///
/// # Examples
///
/// ```rust
/// use refinery::{ops::increment, predicate::Odd, Refined};
///
/// let n = Refined::<u8, Odd>::new(3).unwrap();
/// assert!(increment(n).is_none());
/// ```
pub fn increment<T, P>(a: Refined<T, P>) -> Option<Refined<T, P>>
where
    T: RefinableNumeric,
    P: Predicate<T>,
{
    Refined::try_new(a.into_inner().checked_add_val(T::one())?)
}

/// Subtracts one, keeping the predicate if it still holds.
pub fn decrement<T, P>(a: Refined<T, P>) -> Option<Refined<T, P>>
where
    T: RefinableNumeric,
    P: Predicate<T>,
{
    Refined::try_new(a.into_inner().checked_sub_val(T::one())?)
}

/// Divides by a divisor that is proven non-zero.
///
/// # Errors
///
/// Returns [`RefineError::Overflow`] for `T::MIN / -1` on signed integers.
///
/// # Examples
///
/// ```rust
/// use refinery::{ops::safe_divide, predicate::NonZero, Refined};
///
/// let d = Refined::<i32, NonZero>::new(4).unwrap();
/// assert_eq!(safe_divide(17, d).unwrap(), 4);
///
/// let minus_one = Refined::<i32, NonZero>::new(-1).unwrap();
/// assert!(safe_divide(i32::MIN, minus_one).unwrap_err().is_overflow());
/// ```
pub fn safe_divide<T>(dividend: T, divisor: Refined<T, NonZero>) -> RefineResult<T>
where
    T: RefinableNumeric,
{
    let divisor = divisor.into_inner();
    dividend
        .checked_div_val(divisor)
        .ok_or_else(|| RefineError::overflow(dividend, "/", divisor))
}

/// Remainder by a divisor that is proven non-zero.
///
/// # Errors
///
/// Returns [`RefineError::Overflow`] for `T::MIN % -1` on signed integers.
pub fn safe_remainder<T>(dividend: T, divisor: Refined<T, NonZero>) -> RefineResult<T>
where
    T: RefinableNumeric,
{
    let divisor = divisor.into_inner();
    dividend
        .checked_rem_val(divisor)
        .ok_or_else(|| RefineError::overflow(dividend, "%", divisor))
}

/// The smaller of two values. The result is one of the inputs, so `P` holds.
#[inline]
pub fn refined_min<T: PartialOrd, P>(a: Refined<T, P>, b: Refined<T, P>) -> Refined<T, P> {
    if b.get() < a.get() {
        b
    } else {
        a
    }
}

/// The larger of two values. The result is one of the inputs, so `P` holds.
#[inline]
pub fn refined_max<T: PartialOrd, P>(a: Refined<T, P>, b: Refined<T, P>) -> Refined<T, P> {
    if b.get() > a.get() {
        b
    } else {
        a
    }
}

/// Clamps `value` into `[lo, hi]`. The result is one of the inputs, so `P`
/// holds.
#[inline]
pub fn refined_clamp<T: PartialOrd, P>(
    value: Refined<T, P>,
    lo: Refined<T, P>,
    hi: Refined<T, P>,
) -> Refined<T, P> {
    if value.get() < lo.get() {
        lo
    } else if value.get() > hi.get() {
        hi
    } else {
        value
    }
}

/// Absolute value, refined as non-negative.
///
/// # Errors
///
/// Returns [`RefineError::Overflow`] for the minimum of a signed integer
/// type, and [`RefineError::Violation`] for NaN.
///
/// # Examples
///
/// ```rust
/// use refinery::{ops::abs, predicate::Negative, Refined};
///
/// let n = Refined::<i32, Negative>::new(-5).unwrap();
/// assert_eq!(*abs(n).unwrap(), 5);
/// ```
pub fn abs<T, P>(value: Refined<T, P>) -> RefineResult<Refined<T, NonNegative>>
where
    T: RefinableNumeric + CheckedNegVal,
{
    let v = value.into_inner();
    let magnitude = if v < T::zero() {
        v.checked_neg_val()
            .ok_or_else(|| RefineError::unary_overflow("abs", v))?
    } else {
        v
    };
    Refined::new(magnitude)
}

/// `value * value`, refined as non-negative.
///
/// # Errors
///
/// Returns [`RefineError::Overflow`] if the square does not fit `T`, and
/// [`RefineError::Violation`] for NaN.
pub fn square<T, P>(value: Refined<T, P>) -> RefineResult<Refined<T, NonNegative>>
where
    T: RefinableNumeric,
{
    let v = value.into_inner();
    let sq = v
        .checked_mul_val(v)
        .ok_or_else(|| RefineError::overflow(v, "*", v))?;
    Refined::new(sq)
}

/// Square root of a non-negative float; the result is non-negative.
#[inline]
pub fn sqrt_non_negative<F>(value: Refined<F, NonNegative>) -> Refined<F, NonNegative>
where
    F: Float,
{
    let root = value.into_inner().sqrt();
    // SAFETY: sqrt maps [0, inf] (including -0.0) onto [0, inf].
    unsafe { Refined::new_unchecked(root) }
}

/// Square root of a positive float; the result is positive.
#[inline]
pub fn sqrt_positive<F>(value: Refined<F, Positive>) -> Refined<F, Positive>
where
    F: Float,
{
    let root = value.into_inner().sqrt();
    // SAFETY: sqrt maps (0, inf] onto (0, inf] and never underflows to zero.
    unsafe { Refined::new_unchecked(root) }
}

/// Natural logarithm of a positive float.
#[inline]
pub fn safe_ln<F: Float>(value: Refined<F, Positive>) -> F {
    value.into_inner().ln()
}

/// Arcsine of a value in `[-1, 1]`.
#[inline]
pub fn safe_asin<F: Float>(value: Refined<F, Normalized>) -> F {
    value.into_inner().asin()
}

/// Arccosine of a value in `[-1, 1]`.
#[inline]
pub fn safe_acos<F: Float>(value: Refined<F, Normalized>) -> F {
    value.into_inner().acos()
}

/// `1 / value` for a non-zero float.
#[inline]
pub fn safe_reciprocal<F: Float>(value: Refined<F, NonZero>) -> F {
    value.into_inner().recip()
}
