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

//! # Predicate Composition
//!
//! Boolean algebra over predicate types. A composite is an ordinary
//! [`Predicate`], so `Refined<i32, And<Positive, Even>>` behaves exactly
//! like a refinement with a primitive predicate.
//!
//! - Binary: [`And`], [`Or`], [`Not`], [`Implies`], [`Iff`], [`Xor`].
//! - Counting over a tuple of up to six predicates: [`All`], [`Any`],
//!   [`ExactlyN`], [`AtLeastN`], [`AtMostN`].
//!
//! ```rust
//! use refinery::{
//!     compose::{And, AtLeastN, Not},
//!     predicate::{Even, Positive, PowerOfTwo},
//!     Refined,
//! };
//!
//! type PositiveEven = And<Positive, Even>;
//! assert!(Refined::<i32, PositiveEven>::new(4).is_ok());
//! assert!(Refined::<i32, PositiveEven>::new(-4).is_err());
//!
//! type TwoOfThree = AtLeastN<2, (Positive, Even, Not<PowerOfTwo>)>;
//! assert!(Refined::<i32, TwoOfThree>::new(6).is_ok());
//! assert!(Refined::<i32, TwoOfThree>::new(-3).is_err());
//! ```

use crate::predicate::Predicate;
use std::marker::PhantomData;

/// `P && Q`.
pub struct And<P, Q>(PhantomData<fn() -> (P, Q)>);

/// `P || Q`.
pub struct Or<P, Q>(PhantomData<fn() -> (P, Q)>);

/// `!P`.
pub struct Not<P>(PhantomData<fn() -> P>);

/// `!P || Q`.
pub struct Implies<P, Q>(PhantomData<fn() -> (P, Q)>);

/// `P == Q`.
pub struct Iff<P, Q>(PhantomData<fn() -> (P, Q)>);

/// `P != Q`.
pub struct Xor<P, Q>(PhantomData<fn() -> (P, Q)>);

macro_rules! binary_combinator {
    ($name:ident, |$p:ident, $q:ident| $body:expr) => {
        impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for $name<P, Q> {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn test(value: &T) -> bool {
                let $p = || P::test(value);
                let $q = || Q::test(value);
                $body
            }

            fn describe() -> String {
                format!("{}<{}, {}>", stringify!($name), P::describe(), Q::describe())
            }
        }
    };
}

binary_combinator!(And, |p, q| p() && q());
binary_combinator!(Or, |p, q| p() || q());
binary_combinator!(Implies, |p, q| !p() || q());
binary_combinator!(Iff, |p, q| p() == q());
binary_combinator!(Xor, |p, q| p() != q());

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    const NAME: &'static str = "Not";

    #[inline]
    fn test(value: &T) -> bool {
        !P::test(value)
    }

    fn describe() -> String {
        format!("Not<{}>", P::describe())
    }
}

/// A tuple of predicates evaluated against the same value.
///
/// Implemented for tuples of one to six predicates.
pub trait PredicateList<T: ?Sized> {
    /// Number of predicates in the list.
    const LEN: usize;

    /// Number of predicates that accept `value`.
    fn count(value: &T) -> usize;

    /// `true` if every predicate accepts `value`. Short-circuits.
    fn all(value: &T) -> bool;

    /// `true` if some predicate accepts `value`. Short-circuits.
    fn any(value: &T) -> bool;

    /// Comma-separated descriptions of the predicates.
    fn describe_all() -> String;
}

macro_rules! impl_predicate_list {
    ($len:expr; $($p:ident),+) => {
        impl<T: ?Sized, $($p: Predicate<T>),+> PredicateList<T> for ($($p,)+) {
            const LEN: usize = $len;

            #[inline]
            fn count(value: &T) -> usize {
                0 $(+ usize::from($p::test(value)))+
            }

            #[inline]
            fn all(value: &T) -> bool {
                true $(&& $p::test(value))+
            }

            #[inline]
            fn any(value: &T) -> bool {
                false $(|| $p::test(value))+
            }

            fn describe_all() -> String {
                [$($p::describe()),+].join(", ")
            }
        }
    };
}

impl_predicate_list!(1; P1);
impl_predicate_list!(2; P1, P2);
impl_predicate_list!(3; P1, P2, P3);
impl_predicate_list!(4; P1, P2, P3, P4);
impl_predicate_list!(5; P1, P2, P3, P4, P5);
impl_predicate_list!(6; P1, P2, P3, P4, P5, P6);

/// Every predicate in the tuple `L` holds.
pub struct All<L>(PhantomData<fn() -> L>);

/// At least one predicate in the tuple `L` holds.
pub struct Any<L>(PhantomData<fn() -> L>);

/// Exactly `N` predicates in the tuple `L` hold.
pub struct ExactlyN<const N: usize, L>(PhantomData<fn() -> L>);

/// At least `N` predicates in the tuple `L` hold.
pub struct AtLeastN<const N: usize, L>(PhantomData<fn() -> L>);

/// At most `N` predicates in the tuple `L` hold.
pub struct AtMostN<const N: usize, L>(PhantomData<fn() -> L>);

impl<T: ?Sized, L: PredicateList<T>> Predicate<T> for All<L> {
    const NAME: &'static str = "All";

    #[inline]
    fn test(value: &T) -> bool {
        L::all(value)
    }

    fn describe() -> String {
        format!("All<{}>", L::describe_all())
    }
}

impl<T: ?Sized, L: PredicateList<T>> Predicate<T> for Any<L> {
    const NAME: &'static str = "Any";

    #[inline]
    fn test(value: &T) -> bool {
        L::any(value)
    }

    fn describe() -> String {
        format!("Any<{}>", L::describe_all())
    }
}

macro_rules! counting_combinator {
    ($name:ident, $op:tt) => {
        impl<T: ?Sized, const N: usize, L: PredicateList<T>> Predicate<T> for $name<N, L> {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn test(value: &T) -> bool {
                L::count(value) $op N
            }

            fn describe() -> String {
                format!("{}<{}, {}>", stringify!($name), N, L::describe_all())
            }
        }
    };
}

counting_combinator!(ExactlyN, ==);
counting_combinator!(AtLeastN, >=);
counting_combinator!(AtMostN, <=);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Always, Even, Negative, Never, NonZero, Odd, Positive};

    fn test<P: Predicate<i32>>(v: i32) -> bool {
        P::test(&v)
    }

    #[test]
    fn test_binary_combinators() {
        assert!(test::<And<Positive, Even>>(2));
        assert!(!test::<And<Positive, Even>>(3));
        assert!(test::<Or<Negative, Even>>(-3));
        assert!(!test::<Or<Negative, Even>>(3));
        assert!(test::<Not<Positive>>(0));
        assert!(test::<Implies<Positive, Odd>>(-2));
        assert!(!test::<Implies<Positive, Odd>>(2));
        assert!(test::<Iff<Positive, NonZero>>(0));
        assert!(!test::<Iff<Positive, NonZero>>(-1));
        assert!(test::<Xor<Even, Odd>>(7));
        assert!(!test::<Xor<Always, Always>>(7));
    }

    #[test]
    fn test_counting_combinators() {
        type L = (Positive, Even, Never);
        assert!(test::<All<(Positive, Even)>>(4));
        assert!(!test::<All<L>>(4));
        assert!(test::<Any<L>>(-2));
        assert!(!test::<Any<L>>(-3));
        assert!(test::<ExactlyN<2, L>>(4));
        assert!(!test::<ExactlyN<2, L>>(3));
        assert!(test::<AtLeastN<1, L>>(3));
        assert!(test::<AtMostN<0, L>>(-3));
        assert!(!test::<AtMostN<1, L>>(4));
        assert_eq!(<L as PredicateList<i32>>::LEN, 3);
        assert_eq!(<L as PredicateList<i32>>::count(&4), 2);
    }

    #[test]
    fn test_six_element_list() {
        type L = (Always, Always, Always, Always, Always, Never);
        assert_eq!(<L as PredicateList<i32>>::count(&0), 5);
        assert!(test::<ExactlyN<5, L>>(0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            <And<Positive, Not<Even>> as Predicate<i32>>::describe(),
            "And<Positive, Not<Even>>"
        );
        assert_eq!(
            <ExactlyN<1, (Positive, Even)> as Predicate<i32>>::describe(),
            "ExactlyN<1, Positive, Even>"
        );
        assert_eq!(
            <All<(Positive,)> as Predicate<i32>>::describe(),
            "All<Positive>"
        );
    }
}
