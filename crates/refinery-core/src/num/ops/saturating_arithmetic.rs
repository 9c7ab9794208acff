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

use core::ops::{Add, Mul, Neg, Sub};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

macro_rules! saturating_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Self {
                    <$t>::$src_method(self)
                }
            }
        )*
    };
}

// IEEE 754 arithmetic already saturates towards the signed infinities.
macro_rules! saturating_impl_float_val {
    ($t:ty) => {
        impl SaturatingAddVal for $t {
            #[inline(always)]
            fn saturating_add_val(self, v: Self) -> Self {
                self + v
            }
        }

        impl SaturatingSubVal for $t {
            #[inline(always)]
            fn saturating_sub_val(self, v: Self) -> Self {
                self - v
            }
        }

        impl SaturatingMulVal for $t {
            #[inline(always)]
            fn saturating_mul_val(self, v: Self) -> Self {
                let product = self * v;
                // 0 * inf is NaN; as a bound the product of zero is zero.
                if product.is_nan() {
                    0.0
                } else {
                    product
                }
            }
        }

        impl SaturatingNegVal for $t {
            #[inline(always)]
            fn saturating_neg_val(self) -> Self {
                -self
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// This trait provides a by-value API for saturating addition, clamping the
/// result to the numeric bounds of the type instead of overflowing. For
/// floating-point types the result runs into the signed infinities.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let a: u8 = 250;
/// let b: u8 = 10;
/// assert_eq!(a.saturating_add_val(b), 255); // Clamps at u8::MAX
///
/// let m: i8 = -120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_add_val(n), -128); // Clamps at i8::MIN
///
/// assert_eq!(f64::MAX.saturating_add_val(f64::MAX), f64::INFINITY);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::saturating_arithmetic::SaturatingSubVal;
///
/// let a: u8 = 5;
/// let b: u8 = 10;
/// assert_eq!(a.saturating_sub_val(b), 0); // Clamps at u8::MIN
///
/// let m: i8 = 120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_sub_val(n), 127); // Clamps at i8::MAX
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value (no references).
///
/// For floating-point types the undefined product `0 * inf` is reported as
/// `0`, which is the value interval arithmetic assigns to it.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::saturating_arithmetic::SaturatingMulVal;
///
/// let x: i8 = 30;
/// let y: i8 = 10;
/// assert_eq!(x.saturating_mul_val(y), 127); // 300 -> clamps at i8::MAX
///
/// let m: i8 = -30;
/// let n: i8 = 10;
/// assert_eq!(m.saturating_mul_val(n), -128); // -300 -> clamps at i8::MIN
///
/// assert_eq!(0.0f64.saturating_mul_val(f64::INFINITY), 0.0);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

/// Saturating negation by value (no references).
///
/// For signed integers, negating the minimum value would overflow; saturating
/// negation clamps to the maximum instead.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::num::ops::saturating_arithmetic::SaturatingNegVal;
///
/// let a: i8 = 100;
/// assert_eq!(a.saturating_neg_val(), -100);
///
/// let b: i8 = -128;
/// assert_eq!(b.saturating_neg_val(), 127); // Clamps to i8::MAX
/// ```
pub trait SaturatingNegVal: Sized + Neg<Output = Self> {
    /// Performs saturating negation by value.
    fn saturating_neg_val(self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, saturating_add; u8, u16, u32, u64, usize, u128);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, saturating_add; i8, i16, i32, i64, isize, i128);

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, saturating_sub; u8, u16, u32, u64, usize, u128);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, saturating_sub; i8, i16, i32, i64, isize, i128);

saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, saturating_mul; u8, u16, u32, u64, usize, u128);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, saturating_mul; i8, i16, i32, i64, isize, i128);

saturating_impl_unary_val!(SaturatingNegVal, saturating_neg_val, saturating_neg; i8, i16, i32, i64, isize, i128);

saturating_impl_float_val!(f32);
saturating_impl_float_val!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn saturating_add_val<T: SaturatingAddVal>(a: T, b: T) -> T {
        a.saturating_add_val(b)
    }
    fn saturating_sub_val<T: SaturatingSubVal>(a: T, b: T) -> T {
        a.saturating_sub_val(b)
    }
    fn saturating_mul_val<T: SaturatingMulVal>(a: T, b: T) -> T {
        a.saturating_mul_val(b)
    }
    fn saturating_neg_val<T: SaturatingNegVal>(a: T) -> T {
        a.saturating_neg_val()
    }

    #[test]
    fn test_saturating_add_val() {
        assert_eq!(saturating_add_val(255u8, 1u8), 255u8);
        assert_eq!(saturating_add_val(usize::MAX, 3usize), usize::MAX);
        assert_eq!(saturating_add_val(-128i8, -1i8), -128i8);
        assert_eq!(saturating_add_val(f32::MAX, f32::MAX), f32::INFINITY);
    }

    #[test]
    fn test_saturating_sub_val() {
        assert_eq!(saturating_sub_val(0usize, 1usize), 0usize);
        assert_eq!(saturating_sub_val(-128i8, 1i8), -128i8);
        assert_eq!(saturating_sub_val(127i8, -1i8), 127i8);
        assert_eq!(saturating_sub_val(-f64::MAX, f64::MAX), f64::NEG_INFINITY);
    }

    #[test]
    fn test_saturating_mul_val() {
        assert_eq!(saturating_mul_val(255u8, 2u8), 255u8);
        assert_eq!(saturating_mul_val(i32::MIN, -1i32), i32::MAX);
        assert_eq!(saturating_mul_val(-128i8, 2i8), -128i8);
        assert_eq!(saturating_mul_val(f64::NEG_INFINITY, 0.0), 0.0);
        assert_eq!(saturating_mul_val(f64::INFINITY, -2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_saturating_neg_val() {
        assert_eq!(saturating_neg_val(127i8), -127i8);
        assert_eq!(saturating_neg_val(-128i8), 127i8);
        assert_eq!(saturating_neg_val(i64::MIN), i64::MAX);
        assert_eq!(saturating_neg_val(f64::INFINITY), f64::NEG_INFINITY);
    }
}
