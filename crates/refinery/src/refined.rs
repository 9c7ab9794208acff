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

//! # Refined Values
//!
//! [`Refined<T, P>`] wraps exactly one `T` and guarantees `P::test(&value)`
//! at every observable point. It has the same size and alignment as `T`, and
//! the predicate is part of the type, so a function taking
//! `Refined<u16, Interval<1, 65535>>` never needs to re-check its argument.
//!
//! ## Construction
//!
//! - *Static*: [`Refined::new_static`] for interval predicates, evaluated in
//!   a `const` context through [`refined!`](crate::refined!). A violation
//!   fails the build.
//! - *Dynamic*: [`Refined::new`] checks the predicate and returns a
//!   [`RefineError::Violation`] on failure; [`Refined::try_new`] returns an
//!   `Option` instead.
//! - *Trusted*: [`Refined::new_unchecked`] performs no check in release
//!   builds. It is `unsafe` because other code, such as unchecked container
//!   indexing, relies on the invariant.
//!
//! The value can always be read back ([`Refined::get`], `Deref`) or released
//! ([`Refined::into_inner`]). There is no mutable access.

use crate::{
    error::{RefineError, RefineResult},
    predicate::{Entails, Predicate},
};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
};

/// A value of type `T` that is proven to satisfy the predicate `P`.
///
/// # Examples
///
/// ```rust
/// use refinery::{predicate::Positive, Refined};
///
/// let n = Refined::<i32, Positive>::new(42).unwrap();
/// assert_eq!(*n, 42);
/// assert!(Refined::<i32, Positive>::new(0).is_err());
/// ```
#[repr(transparent)]
pub struct Refined<T, P> {
    pub(crate) value: T,
    pub(crate) predicate: PhantomData<fn() -> P>,
}

impl<T, P> Refined<T, P>
where
    P: Predicate<T>,
{
    /// Creates a refined value, verifying the predicate at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RefineError::Violation`] carrying the value's `Debug`
    /// rendering and the predicate's description if the predicate fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{predicate::Even, Refined, RefineError};
    ///
    /// let err = Refined::<u8, Even>::new(3).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     RefineError::Violation { value: "3".into(), predicate: "Even".into() }
    /// );
    /// ```
    #[inline]
    pub fn new(value: T) -> RefineResult<Self>
    where
        T: std::fmt::Debug,
    {
        if P::test(&value) {
            Ok(Self {
                value,
                predicate: PhantomData,
            })
        } else {
            Err(RefineError::violation(&value, P::describe()))
        }
    }

    /// Creates a refined value, returning `None` if the predicate fails.
    #[inline]
    pub fn try_new(value: T) -> Option<Self> {
        if P::test(&value) {
            Some(Self {
                value,
                predicate: PhantomData,
            })
        } else {
            None
        }
    }

    /// Creates a refined value without checking the predicate.
    ///
    /// The predicate is still asserted in debug builds.
    ///
    /// # Safety
    ///
    /// `P::test(&value)` must be `true`. Code elsewhere may rely on the
    /// invariant for memory safety, e.g. a `Refined<usize, _>` index used for
    /// unchecked container access.
    #[inline]
    pub unsafe fn new_unchecked(value: T) -> Self {
        debug_assert!(
            P::test(&value),
            "trusted refinement violates {}",
            P::describe()
        );
        Self {
            value,
            predicate: PhantomData,
        }
    }

    /// Evaluates the predicate on a candidate value. Pure; no instance needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{predicate::NonZero, Refined};
    ///
    /// assert!(Refined::<i64, NonZero>::is_valid(&-1));
    /// assert!(!Refined::<i64, NonZero>::is_valid(&0));
    /// ```
    #[inline]
    pub fn is_valid(value: &T) -> bool {
        P::test(value)
    }

    /// Re-verifies the value under another predicate `Q`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{predicate::{Even, Positive}, Refined};
    ///
    /// let n = Refined::<i32, Positive>::new(4).unwrap();
    /// let even = n.refine_to::<Even>().unwrap();
    /// assert_eq!(*even, 4);
    /// ```
    #[inline]
    pub fn refine_to<Q>(self) -> RefineResult<Refined<T, Q>>
    where
        Q: Predicate<T>,
        T: std::fmt::Debug,
    {
        Refined::new(self.value)
    }

    /// Re-verifies the value under another predicate `Q`, returning `None` on
    /// failure.
    #[inline]
    pub fn try_refine_to<Q>(self) -> Option<Refined<T, Q>>
    where
        Q: Predicate<T>,
    {
        Refined::try_new(self.value)
    }

    /// Changes the predicate to one that `P` statically entails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{predicate::{NonZero, Positive}, Refined};
    ///
    /// let p = Refined::<f64, Positive>::new(2.5).unwrap();
    /// let nz: Refined<f64, NonZero> = p.weaken();
    /// assert_eq!(*nz, 2.5);
    /// ```
    #[inline]
    pub fn weaken<Q>(self) -> Refined<T, Q>
    where
        P: Entails<Q>,
        Q: Predicate<T>,
    {
        // SAFETY: `P: Entails<Q>` guarantees that `Q` accepts every value
        // `P` accepts.
        unsafe { Refined::new_unchecked(self.value) }
    }

    /// Transforms the value and verifies the result under `Q`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{predicate::{NonNegative, Positive}, Refined};
    ///
    /// let n = Refined::<i32, NonNegative>::new(0).unwrap();
    /// let shifted = n.map::<Positive, _>(|v| v + 1).unwrap();
    /// assert_eq!(*shifted, 1);
    /// ```
    #[inline]
    pub fn map<Q, U>(self, f: impl FnOnce(T) -> U) -> RefineResult<Refined<U, Q>>
    where
        Q: Predicate<U>,
        U: std::fmt::Debug,
    {
        Refined::new(f(self.value))
    }
}

impl<T, P> Refined<T, P> {
    /// Returns a reference to the wrapped value.
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Releases the wrapped value, forgetting the proof.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, P> Deref for Refined<T, P> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, P> AsRef<T> for Refined<T, P> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P> Borrow<T> for Refined<T, P> {
    #[inline(always)]
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, P> Clone for Refined<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            predicate: PhantomData,
        }
    }
}

impl<T: Copy, P> Copy for Refined<T, P> {}

impl<T: PartialEq, P, Q> PartialEq<Refined<T, Q>> for Refined<T, P> {
    #[inline]
    fn eq(&self, other: &Refined<T, Q>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P> Eq for Refined<T, P> {}

impl<T: PartialOrd, P, Q> PartialOrd<Refined<T, Q>> for Refined<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Refined<T, Q>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P> Ord for Refined<T, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: PartialEq, P> PartialEq<T> for Refined<T, P> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: PartialOrd, P> PartialOrd<T> for Refined<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T: Hash, P> Hash for Refined<T, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: std::fmt::Display, P> std::fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

/// Creates a refined value whose predicate is checked at compile time.
///
/// Expands to `const { <$ty>::new_static($value) }`, so `$value` must be a
/// constant expression and the refinement must be interval-backed. A value
/// outside the interval is a compile error.
///
/// # Examples
///
/// ```rust
/// use refinery::{aliases::PortNumber, refined};
///
/// let port = refined!(PortNumber, 8080);
/// assert_eq!(*port, 8080);
/// ```
///
/// Port `0` lies outside `[1, 65535]`, so this does not compile:
///
/// ```rust,compile_fail
/// use refinery::{aliases::PortNumber, refined};
///
/// const _: PortNumber = refined!(PortNumber, 0);
/// ```
#[macro_export]
macro_rules! refined {
    ($ty:ty, $value:expr $(,)?) => {
        const { <$ty>::new_static($value) }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Always, Even, Never, NonEmpty, Positive};
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_layout_matches_base_type() {
        assert_eq!(std::mem::size_of::<Refined<u8, Positive>>(), 1);
        assert_eq!(std::mem::size_of::<Refined<f64, Positive>>(), 8);
        assert_eq!(
            std::mem::align_of::<Refined<u64, Even>>(),
            std::mem::align_of::<u64>()
        );
        assert_eq!(
            std::mem::size_of::<Refined<Vec<u8>, NonEmpty>>(),
            std::mem::size_of::<Vec<u8>>()
        );
    }

    #[test]
    fn test_new_succeeds_iff_predicate_holds() {
        for v in -5i32..=5 {
            assert_eq!(Refined::<i32, Positive>::new(v).is_ok(), v > 0);
            assert_eq!(Refined::<i32, Positive>::try_new(v).is_some(), v > 0);
        }
        assert!(Refined::<i32, Never>::new(1).is_err());
        assert!(Refined::<i32, Always>::new(i32::MIN).is_ok());
    }

    #[test]
    fn test_violation_carries_value_and_label() {
        let err = Refined::<Vec<u8>, NonEmpty>::new(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            RefineError::Violation {
                value: "[]".into(),
                predicate: "NonEmpty".into(),
            }
        );
    }

    #[test]
    fn test_trusted_round_trip() {
        let r = unsafe { Refined::<i32, Positive>::new_unchecked(7) };
        assert_eq!(r.into_inner(), 7);
    }

    #[test]
    fn test_weaken_follows_entailment() {
        use crate::predicate::{Negative, NonPositive, NonZero};

        let n = Refined::<i16, Negative>::new(-3).unwrap();
        let np: Refined<i16, NonPositive> = n.weaken();
        let nz: Refined<i16, NonZero> = n.weaken();
        let any: Refined<i16, Always> = n.weaken();
        assert_eq!((*np, *nz, *any), (-3, -3, -3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "trusted refinement violates Positive")]
    fn test_trusted_violation_is_caught_in_debug() {
        let _ = unsafe { Refined::<i32, Positive>::new_unchecked(-1) };
    }

    #[test]
    fn test_access() {
        let r = Refined::<String, NonEmpty>::new("abc".to_string()).unwrap();
        assert_eq!(r.get(), "abc");
        assert_eq!(r.len(), 3);
        let s: &String = r.as_ref();
        assert_eq!(s, "abc");
        assert_eq!(format!("{}", r), "abc");
        assert_eq!(format!("{:?}", r), "\"abc\"");
    }

    #[test]
    fn test_comparisons_delegate_to_value() {
        let a = Refined::<i32, Positive>::new(1).unwrap();
        let b = Refined::<i32, Positive>::new(2).unwrap();
        let c = Refined::<i32, Even>::new(2).unwrap();
        assert!(a < b);
        assert_eq!(b, c);
        assert_eq!(a, 1);
        assert!(b > 1);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_hash_and_borrow() {
        let set: HashSet<Refined<u32, Positive>> = [1, 2, 3]
            .into_iter()
            .map(|v| Refined::new(v).unwrap())
            .collect();
        assert!(set.contains(&2));

        let ordered: BTreeSet<Refined<u32, Positive>> = set.into_iter().collect();
        assert_eq!(
            ordered.iter().map(|r| r.into_inner()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_refine_to_and_map() {
        let n = Refined::<i32, Positive>::new(3).unwrap();
        assert!(n.refine_to::<Even>().is_err());
        assert!(n.try_refine_to::<Even>().is_none());

        let doubled = n.map::<Even, _>(|v| v * 2).unwrap();
        assert_eq!(*doubled, 6);

        let len = Refined::<String, NonEmpty>::new("xy".into())
            .unwrap()
            .map::<Positive, usize>(|s| s.len())
            .unwrap();
        assert_eq!(*len, 2);
    }

    #[test]
    fn test_is_valid_is_pure() {
        let results: Vec<bool> = (0..4).map(|_| Refined::<i32, Even>::is_valid(&4)).collect();
        assert!(results.iter().all(|&r| r));
        assert!(!Refined::<i32, Even>::is_valid(&5));
        assert!(Refined::<i32, Even>::is_valid(&4));
    }
}
