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

//! # Predicates
//!
//! The predicate contract and the catalog of named predicates.
//!
//! A predicate is a zero-sized *type* implementing [`Predicate<T>`]. Its
//! identity is part of every refined type built from it, so
//! `Refined<i32, Positive>` and `Refined<i32, NonZero>` are distinct types
//! even though both wrap an `i32`. Predicates must be pure and total: the
//! same input always yields the same answer and evaluation never panics.
//!
//! ## Catalog
//!
//! - Sign: [`Positive`], [`Negative`], [`NonNegative`], [`NonPositive`],
//!   [`NonZero`], [`IsZero`].
//! - Comparison with a literal: [`GreaterThan`], [`GreaterOrEqual`],
//!   [`LessThan`], [`LessOrEqual`].
//! - Integer structure: [`Even`], [`Odd`], [`PowerOfTwo`], [`DivisibleBy`].
//! - Floating point: [`Finite`], [`NotNaN`], [`Normalized`].
//! - Containers: [`NonEmpty`], [`Empty`].
//! - Constants: [`Always`], [`Never`].
//!
//! Closed ranges are expressed with [`Interval`](crate::interval::Interval),
//! which additionally takes part in interval arithmetic.

use crate::container::Container;
use num_traits::{Float, PrimInt, Zero};

/// A pure, total boolean function attached to a refinement type.
///
/// # Examples
///
/// ```rust
/// use refinery::predicate::Predicate;
///
/// struct ShortName;
///
/// impl Predicate<str> for ShortName {
///     const NAME: &'static str = "ShortName";
///
///     fn test(value: &str) -> bool {
///         value.len() <= 8
///     }
/// }
///
/// assert!(ShortName::test("refinery"));
/// assert!(!ShortName::test("refinement"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Label used in diagnostics.
    const NAME: &'static str;

    /// Evaluates the predicate.
    fn test(value: &T) -> bool;

    /// A human-readable description of the predicate.
    ///
    /// Defaults to [`NAME`](Predicate::NAME). Parameterized and composite
    /// predicates override it to include their parameters.
    fn describe() -> String {
        Self::NAME.to_string()
    }
}

macro_rules! unit_predicate {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;
    };
}

unit_predicate!(
    /// `v > 0`.
    Positive
);
unit_predicate!(
    /// `v < 0`.
    Negative
);
unit_predicate!(
    /// `v >= 0`.
    NonNegative
);
unit_predicate!(
    /// `v <= 0`.
    NonPositive
);
unit_predicate!(
    /// `v != 0`.
    NonZero
);
unit_predicate!(
    /// `v == 0`.
    IsZero
);
unit_predicate!(
    /// `v % 2 == 0`.
    Even
);
unit_predicate!(
    /// `v % 2 != 0`.
    Odd
);
unit_predicate!(
    /// `v` is a positive power of two.
    PowerOfTwo
);
unit_predicate!(
    /// Neither infinite nor NaN.
    Finite
);
unit_predicate!(
    /// Not NaN.
    NotNaN
);
unit_predicate!(
    /// `-1 <= v <= 1`.
    Normalized
);
unit_predicate!(
    /// The container holds at least one element.
    NonEmpty
);
unit_predicate!(
    /// The container holds no elements.
    Empty
);
unit_predicate!(
    /// Accepts every value.
    Always
);
unit_predicate!(
    /// Rejects every value.
    Never
);

impl<T: Zero + PartialOrd> Predicate<T> for Positive {
    const NAME: &'static str = "Positive";

    #[inline]
    fn test(value: &T) -> bool {
        *value > T::zero()
    }
}

impl<T: Zero + PartialOrd> Predicate<T> for Negative {
    const NAME: &'static str = "Negative";

    #[inline]
    fn test(value: &T) -> bool {
        *value < T::zero()
    }
}

impl<T: Zero + PartialOrd> Predicate<T> for NonNegative {
    const NAME: &'static str = "NonNegative";

    #[inline]
    fn test(value: &T) -> bool {
        *value >= T::zero()
    }
}

impl<T: Zero + PartialOrd> Predicate<T> for NonPositive {
    const NAME: &'static str = "NonPositive";

    #[inline]
    fn test(value: &T) -> bool {
        *value <= T::zero()
    }
}

impl<T: Zero + PartialEq> Predicate<T> for NonZero {
    const NAME: &'static str = "NonZero";

    #[inline]
    fn test(value: &T) -> bool {
        *value != T::zero()
    }
}

impl<T: Zero + PartialEq> Predicate<T> for IsZero {
    const NAME: &'static str = "IsZero";

    #[inline]
    fn test(value: &T) -> bool {
        value.is_zero()
    }
}

#[inline(always)]
fn two<T: PrimInt>() -> T {
    T::one() + T::one()
}

impl<T: PrimInt> Predicate<T> for Even {
    const NAME: &'static str = "Even";

    #[inline]
    fn test(value: &T) -> bool {
        (*value % two::<T>()).is_zero()
    }
}

impl<T: PrimInt> Predicate<T> for Odd {
    const NAME: &'static str = "Odd";

    #[inline]
    fn test(value: &T) -> bool {
        !(*value % two::<T>()).is_zero()
    }
}

impl<T: PrimInt> Predicate<T> for PowerOfTwo {
    const NAME: &'static str = "PowerOfTwo";

    #[inline]
    fn test(value: &T) -> bool {
        *value > T::zero() && value.count_ones() == 1
    }
}

impl<T: Float> Predicate<T> for Finite {
    const NAME: &'static str = "Finite";

    #[inline]
    fn test(value: &T) -> bool {
        value.is_finite()
    }
}

impl<T: Float> Predicate<T> for NotNaN {
    const NAME: &'static str = "NotNaN";

    #[inline]
    fn test(value: &T) -> bool {
        !value.is_nan()
    }
}

impl<T: Float> Predicate<T> for Normalized {
    const NAME: &'static str = "Normalized";

    #[inline]
    fn test(value: &T) -> bool {
        -T::one() <= *value && *value <= T::one()
    }
}

impl<C: Container> Predicate<C> for NonEmpty {
    const NAME: &'static str = "NonEmpty";

    #[inline]
    fn test(value: &C) -> bool {
        !value.is_empty()
    }
}

impl Predicate<str> for NonEmpty {
    const NAME: &'static str = "NonEmpty";

    #[inline]
    fn test(value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NonEmpty {
    const NAME: &'static str = "NonEmpty";

    #[inline]
    fn test(value: &String) -> bool {
        !value.is_empty()
    }
}

impl<C: Container> Predicate<C> for Empty {
    const NAME: &'static str = "Empty";

    #[inline]
    fn test(value: &C) -> bool {
        value.is_empty()
    }
}

impl<T: ?Sized> Predicate<T> for Always {
    const NAME: &'static str = "Always";

    #[inline(always)]
    fn test(_: &T) -> bool {
        true
    }
}

impl<T: ?Sized> Predicate<T> for Never {
    const NAME: &'static str = "Never";

    #[inline(always)]
    fn test(_: &T) -> bool {
        false
    }
}

/// A static implication between predicates: every value accepted by `Self`
/// is accepted by `Q`.
///
/// Used by [`Refined::weaken`](crate::Refined::weaken) to change the
/// predicate without a runtime check.
///
/// # Safety
///
/// For every base type `T` both predicates apply to, `Self::test(v)` must
/// imply `Q::test(v)`. A false claim yields refined values that violate
/// their predicate, which unchecked indexing turns into out-of-bounds reads.
///
/// ```compile_fail
/// use refinery::{interval::Interval, predicate::{Entails, Predicate}};
///
/// struct AnyIndex;
///
/// impl Predicate<usize> for AnyIndex {
///     const NAME: &'static str = "AnyIndex";
///
///     fn test(_: &usize) -> bool {
///         true
///     }
/// }
///
/// impl Entails<Interval<0, 4>> for AnyIndex {}
/// ```
pub unsafe trait Entails<Q> {}

// SAFETY: `v > 0` and `v < 0` both imply `v != 0`; `v > 0` implies `v >= 0`
// and `v < 0` implies `v <= 0`.
unsafe impl Entails<NonZero> for Positive {}
unsafe impl Entails<NonNegative> for Positive {}
unsafe impl Entails<NonZero> for Negative {}
unsafe impl Entails<NonPositive> for Negative {}
// SAFETY: `Always` accepts every value.
unsafe impl<P> Entails<Always> for P {}

/// `v > N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GreaterThan<const N: i128>;

/// `v >= N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GreaterOrEqual<const N: i128>;

/// `v < N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LessThan<const N: i128>;

/// `v <= N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LessOrEqual<const N: i128>;

/// `v % N == 0`. `N` must not be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DivisibleBy<const N: i128>;

// Primitive values up to 64 bits widen losslessly into i128, so the literal
// bound is compared in i128 and never narrowed.
macro_rules! impl_comparison_predicates {
    ($($t:ty),*) => {
        $(
            impl<const N: i128> Predicate<$t> for GreaterThan<N> {
                const NAME: &'static str = "GreaterThan";

                #[inline]
                fn test(value: &$t) -> bool {
                    (*value as i128) > N
                }

                fn describe() -> String {
                    format!("GreaterThan<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for GreaterOrEqual<N> {
                const NAME: &'static str = "GreaterOrEqual";

                #[inline]
                fn test(value: &$t) -> bool {
                    (*value as i128) >= N
                }

                fn describe() -> String {
                    format!("GreaterOrEqual<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for LessThan<N> {
                const NAME: &'static str = "LessThan";

                #[inline]
                fn test(value: &$t) -> bool {
                    (*value as i128) < N
                }

                fn describe() -> String {
                    format!("LessThan<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for LessOrEqual<N> {
                const NAME: &'static str = "LessOrEqual";

                #[inline]
                fn test(value: &$t) -> bool {
                    (*value as i128) <= N
                }

                fn describe() -> String {
                    format!("LessOrEqual<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for DivisibleBy<N> {
                const NAME: &'static str = "DivisibleBy";

                #[inline]
                fn test(value: &$t) -> bool {
                    const { assert!(N != 0, "DivisibleBy<0> is not a valid predicate") };
                    (*value as i128) % N == 0
                }

                fn describe() -> String {
                    format!("DivisibleBy<{}>", N)
                }
            }
        )*
    };
}

impl_comparison_predicates!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_comparison_predicates {
    ($($t:ty),*) => {
        $(
            impl<const N: i128> Predicate<$t> for GreaterThan<N> {
                const NAME: &'static str = "GreaterThan";

                #[inline]
                fn test(value: &$t) -> bool {
                    *value > N as $t
                }

                fn describe() -> String {
                    format!("GreaterThan<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for GreaterOrEqual<N> {
                const NAME: &'static str = "GreaterOrEqual";

                #[inline]
                fn test(value: &$t) -> bool {
                    *value >= N as $t
                }

                fn describe() -> String {
                    format!("GreaterOrEqual<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for LessThan<N> {
                const NAME: &'static str = "LessThan";

                #[inline]
                fn test(value: &$t) -> bool {
                    *value < N as $t
                }

                fn describe() -> String {
                    format!("LessThan<{}>", N)
                }
            }

            impl<const N: i128> Predicate<$t> for LessOrEqual<N> {
                const NAME: &'static str = "LessOrEqual";

                #[inline]
                fn test(value: &$t) -> bool {
                    *value <= N as $t
                }

                fn describe() -> String {
                    format!("LessOrEqual<{}>", N)
                }
            }
        )*
    };
}

impl_float_comparison_predicates!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_predicates() {
        assert!(<Positive as Predicate<i32>>::test(&1));
        assert!(!<Positive as Predicate<i32>>::test(&0));
        assert!(<Negative as Predicate<i64>>::test(&-1));
        assert!(<NonNegative as Predicate<u8>>::test(&0));
        assert!(<NonPositive as Predicate<f64>>::test(&-0.0));
        assert!(!<NonNegative as Predicate<f64>>::test(&f64::NAN));
        assert!(<NonZero as Predicate<i16>>::test(&-7));
        assert!(<IsZero as Predicate<f32>>::test(&0.0));
    }

    #[test]
    fn test_parity_and_powers() {
        assert!(<Even as Predicate<i32>>::test(&-4));
        assert!(<Odd as Predicate<i32>>::test(&-3));
        assert!(!<Odd as Predicate<u32>>::test(&0));
        assert!(<PowerOfTwo as Predicate<u64>>::test(&1));
        assert!(<PowerOfTwo as Predicate<u64>>::test(&1024));
        assert!(!<PowerOfTwo as Predicate<u64>>::test(&0));
        assert!(!<PowerOfTwo as Predicate<i8>>::test(&i8::MIN));
        assert!(!<PowerOfTwo as Predicate<i32>>::test(&12));
    }

    #[test]
    fn test_float_predicates() {
        assert!(<Finite as Predicate<f64>>::test(&1.0e300));
        assert!(!<Finite as Predicate<f64>>::test(&f64::INFINITY));
        assert!(!<NotNaN as Predicate<f32>>::test(&f32::NAN));
        assert!(<NotNaN as Predicate<f32>>::test(&f32::NEG_INFINITY));
        assert!(<Normalized as Predicate<f64>>::test(&-1.0));
        assert!(!<Normalized as Predicate<f64>>::test(&1.000_001));
    }

    #[test]
    fn test_comparison_predicates() {
        assert!(<GreaterThan<5> as Predicate<u8>>::test(&6));
        assert!(!<GreaterThan<5> as Predicate<u8>>::test(&5));
        assert!(<GreaterOrEqual<-3> as Predicate<i32>>::test(&-3));
        assert!(!<LessThan<0> as Predicate<u64>>::test(&0));
        assert!(<LessOrEqual<10> as Predicate<f64>>::test(&10.0));
        assert!(<DivisibleBy<3> as Predicate<i64>>::test(&-9));
        assert!(!<DivisibleBy<3> as Predicate<usize>>::test(&10));
        assert_eq!(<GreaterThan<5> as Predicate<u8>>::describe(), "GreaterThan<5>");
    }

    #[test]
    fn test_container_predicates() {
        assert!(<NonEmpty as Predicate<Vec<i32>>>::test(&vec![1]));
        assert!(!<NonEmpty as Predicate<Vec<i32>>>::test(&Vec::new()));
        assert!(<Empty as Predicate<[u8; 0]>>::test(&[]));
        assert!(<NonEmpty as Predicate<str>>::test("x"));
        assert!(!<NonEmpty as Predicate<String>>::test(&String::new()));
    }

    #[test]
    fn test_constant_predicates() {
        assert!(<Always as Predicate<str>>::test(""));
        assert!(!<Never as Predicate<i32>>::test(&0));
        assert_eq!(<Always as Predicate<i32>>::describe(), "Always");
    }
}
