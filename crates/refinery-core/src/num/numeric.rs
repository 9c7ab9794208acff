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

//! # Refinable Numeric Trait
//!
//! Unified numeric bounds for values that can carry an interval refinement.
//! `RefinableNumeric` collects the capabilities the interval engine needs:
//! ordering, `num_traits` fundamentals, and the by-value checked/saturating
//! arithmetic traits from this crate.
//!
//! ## Highlights
//!
//! - Implemented for every primitive integer (`i8`..`i128`, `u8`..`u128`,
//!   `isize`, `usize`) and for `f32`/`f64`.
//! - `INTEGRAL` distinguishes the two families. Integral values are checked
//!   for overflow at runtime and can degrade to an unrefined value when
//!   their bounds become trivially wide; floating-point values never do.
//! - Signed types additionally implement the negation traits, which is what
//!   gates unary minus on refined values.

use crate::num::ops::{
    checked_arithmetic::{CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedRemVal, CheckedSubVal},
    saturating_arithmetic::{SaturatingAddVal, SaturatingMulVal, SaturatingSubVal},
};
use num_traits::{Bounded, Num};

/// A trait alias for numeric types that can be refined by a closed interval.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::numeric::RefinableNumeric;
///
/// fn is_integral<T: RefinableNumeric>() -> bool {
///     T::INTEGRAL
/// }
///
/// assert!(is_integral::<u16>());
/// assert!(!is_integral::<f64>());
/// ```
pub trait RefinableNumeric:
    Num
    + Bounded
    + Copy
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedDivVal
    + CheckedRemVal
    + SaturatingAddVal
    + SaturatingSubVal
    + SaturatingMulVal
    + Send
    + Sync
    + 'static
{
    /// `true` for integer types, `false` for floating-point types.
    const INTEGRAL: bool;
}

macro_rules! impl_refinable_numeric {
    ($integral:expr; $($t:ty),*) => {
        $(
            impl RefinableNumeric for $t {
                const INTEGRAL: bool = $integral;
            }
        )*
    };
}

impl_refinable_numeric!(true; u8, u16, u32, u64, usize, u128);
impl_refinable_numeric!(true; i8, i16, i32, i64, isize, i128);
impl_refinable_numeric!(false; f32, f64);
