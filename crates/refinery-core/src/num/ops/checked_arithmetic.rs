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

use core::ops::{Add, Div, Mul, Rem, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
/// Floating-point types never report overflow: infinity is a legitimate value,
/// so the sum is always returned.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.checked_add_val(b), None); // Overflow occurs
/// let c: u8 = 50;
/// assert_eq!(a.checked_add_val(c), Some(250)); // No overflow
///
/// let x: f64 = f64::MAX;
/// assert_eq!(x.checked_add_val(f64::MAX), Some(f64::INFINITY));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.checked_sub_val(b), None); // Underflow occurs
/// let c: u8 = 20;
/// assert_eq!(a.checked_sub_val(c), Some(30)); // No underflow
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.checked_mul_val(b), Some(200)); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.checked_mul_val(c), None); // Overflow occurs (20*20 = 400 > 255)
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked division by value (no references).
///
/// For signed integers this also catches `MIN / -1`, whose quotient is not
/// representable. Floating-point division is never rejected.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedDivVal;
///
/// let a: u8 = 100;
/// assert_eq!(a.checked_div_val(0), None); // Division by zero
/// assert_eq!(a.checked_div_val(4), Some(25));
/// assert_eq!(i32::MIN.checked_div_val(-1), None); // Quotient overflows
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by zero
    /// or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked remainder by value (no references).
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedRemVal;
///
/// let a: u8 = 10;
/// assert_eq!(a.checked_rem_val(0), None); // Division by zero
/// assert_eq!(a.checked_rem_val(3), Some(1));
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` on division by zero
    /// or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked negation by value (no references).
///
/// Only implemented for signed integers and floating-point types. Negating
/// an unsigned value has no meaningful refinement, so it is not offered.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::checked_arithmetic::CheckedNegVal;
///
/// let a: i8 = -128;
/// assert_eq!(a.checked_neg_val(), None); // Overflow occurs
/// let b: i8 = 100;
/// assert_eq!(b.checked_neg_val(), Some(-100)); // No overflow
/// ```
pub trait CheckedNegVal: Sized {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

macro_rules! checked_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Option<$t> {
                    <$t>::$src_method(self)
                }
            }
        )*
    };
}

macro_rules! float_impl_val {
    ($trait_name:ident, $method:ident, $op:tt; $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    Some(self $op v)
                }
            }
        )*
    };
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; u8, u16, u32, u64, usize, u128);
checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; i8, i16, i32, i64, isize, i128);
float_impl_val!(CheckedAddVal, checked_add_val, +; f32, f64);

checked_impl_val!(CheckedSubVal, checked_sub_val, checked_sub; u8, u16, u32, u64, usize, u128);
checked_impl_val!(CheckedSubVal, checked_sub_val, checked_sub; i8, i16, i32, i64, isize, i128);
float_impl_val!(CheckedSubVal, checked_sub_val, -; f32, f64);

checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; u8, u16, u32, u64, usize, u128);
checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; i8, i16, i32, i64, isize, i128);
float_impl_val!(CheckedMulVal, checked_mul_val, *; f32, f64);

checked_impl_val!(CheckedDivVal, checked_div_val, checked_div; u8, u16, u32, u64, usize, u128);
checked_impl_val!(CheckedDivVal, checked_div_val, checked_div; i8, i16, i32, i64, isize, i128);
float_impl_val!(CheckedDivVal, checked_div_val, /; f32, f64);

checked_impl_val!(CheckedRemVal, checked_rem_val, checked_rem; u8, u16, u32, u64, usize, u128);
checked_impl_val!(CheckedRemVal, checked_rem_val, checked_rem; i8, i16, i32, i64, isize, i128);
float_impl_val!(CheckedRemVal, checked_rem_val, %; f32, f64);

checked_impl_unary_val!(CheckedNegVal, checked_neg_val, checked_neg; i8, i16, i32, i64, isize, i128);

impl CheckedNegVal for f32 {
    #[inline(always)]
    fn checked_neg_val(self) -> Option<f32> {
        Some(-self)
    }
}

impl CheckedNegVal for f64 {
    #[inline(always)]
    fn checked_neg_val(self) -> Option<f64> {
        Some(-self)
    }
}
