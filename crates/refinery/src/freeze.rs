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

//! # Frozen Containers and Branded Indices
//!
//! Freezing hands a size-refined container to a closure together with a
//! [`Guard`] that mints indices for it. An index passes
//! [`Guard::check`] once and can then be used with [`Frozen`] any number of
//! times without a bounds check.
//!
//! Both carry the same brand: a fresh invariant lifetime `'id` introduced by
//! the closure's higher-ranked signature. Two `freeze` calls never share a
//! brand, so an index can only reach the container it was checked against.
//! The closure's result cannot mention `'id` either, which keeps indices from
//! escaping the frozen scope.
//!
//! ```rust
//! use refinery::aliases::NonEmptyVec;
//!
//! let scores = NonEmptyVec::new(vec![3, 1, 4, 1, 5]).unwrap();
//! let total = scores.freeze(|guard, frozen| {
//!     guard.indices().map(|i| frozen[i]).sum::<i32>()
//! });
//! assert_eq!(total, 14);
//! ```
//!
//! Indices from another freeze are rejected:
//!
//! ```compile_fail
//! use refinery::aliases::NonEmptyVec;
//!
//! let a = NonEmptyVec::new(vec![1, 2]).unwrap();
//! let b = NonEmptyVec::new(vec![3, 4]).unwrap();
//! a.freeze(|guard_a, _| {
//!     b.freeze(|_, frozen_b| {
//!         let i = guard_a.check(0).unwrap();
//!         frozen_b[i]
//!     })
//! });
//! ```
//!
//! So is letting an index escape the closure:
//!
//! ```compile_fail
//! use refinery::aliases::NonEmptyVec;
//!
//! let a = NonEmptyVec::new(vec![1, 2]).unwrap();
//! let escaped = a.freeze(|guard, _| guard.check(0));
//! ```

use crate::{
    container::{Contiguous, Sequence},
    refined_container::SizeRefined,
    size::SizePredicate,
};
use refinery_core::utils::{
    index::BrandedIndex,
    marker::{with_brand, Brand},
};
use std::ops::Index;

/// An index proven to be in bounds for the [`Frozen`] container with brand
/// `'id`.
pub type GuardedIndex<'id> = BrandedIndex<'id>;

/// Mints [`GuardedIndex`] values for the frozen container with brand `'id`.
#[derive(Clone, Copy)]
pub struct Guard<'id> {
    len: usize,
    brand: Brand<'id>,
}

impl<'id> Guard<'id> {
    /// Returns a branded index if `index < len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{size::SizeInterval, SizeRefined};
    ///
    /// let v = SizeRefined::<Vec<u8>, SizeInterval<0>>::new(vec![7, 8, 9]).unwrap();
    /// v.freeze(|guard, frozen| {
    ///     assert!(guard.check(3).is_none());
    ///     assert!(guard.check(99).is_none());
    ///     let i = guard.check(2).unwrap();
    ///     assert_eq!(frozen[i], 9);
    /// });
    /// ```
    #[inline]
    pub fn check(self, index: usize) -> Option<GuardedIndex<'id>> {
        if index < self.len {
            // SAFETY: index < len, and the frozen container cannot change
            // length while the brand lives.
            Some(unsafe { BrandedIndex::new(index, self.brand) })
        } else {
            None
        }
    }

    /// The length of the container at freeze time.
    #[inline]
    pub fn len(self) -> usize {
        self.len
    }

    /// Returns `true` if the frozen container is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Iterates over every valid index in ascending order.
    #[inline]
    pub fn indices(self) -> impl DoubleEndedIterator<Item = GuardedIndex<'id>> + ExactSizeIterator {
        let brand = self.brand;
        // SAFETY: every i in 0..len is in bounds.
        (0..self.len).map(move |i| unsafe { BrandedIndex::new(i, brand) })
    }
}

impl std::fmt::Debug for Guard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("len", &self.len).finish()
    }
}

/// A container that cannot change length while its brand `'id` lives.
pub struct Frozen<'id, C> {
    container: C,
    _brand: Brand<'id>,
}

impl<'id, C: Sequence> Frozen<'id, C> {
    /// Returns the element at a plain `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&C::Item> {
        self.container.get(index)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Returns a borrowing iterator over the elements.
    #[inline]
    pub fn iter(&self) -> C::Iter<'_> {
        self.container.iter()
    }

    /// Releases the container, dropping the brand.
    #[inline]
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<'id, C: Contiguous> Frozen<'id, C> {
    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[C::Item] {
        self.container.as_slice()
    }
}

impl<'id, C: Sequence> Index<GuardedIndex<'id>> for Frozen<'id, C> {
    type Output = C::Item;

    #[inline]
    fn index(&self, index: GuardedIndex<'id>) -> &C::Item {
        // SAFETY: the brand ties `index` to this container, and
        // `Guard::check` verified it against the unchanged length.
        unsafe { self.container.get_unchecked(index.get()) }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Frozen<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Frozen").field(&self.container).finish()
    }
}

impl<C, S> SizeRefined<C, S>
where
    C: Sequence,
    S: SizePredicate,
{
    /// Freezes the container and runs `scope` with a fresh brand.
    ///
    /// The result `R` cannot borrow the brand, so neither the guard nor its
    /// indices outlive the call.
    pub fn freeze<R>(self, scope: impl for<'id> FnOnce(Guard<'id>, Frozen<'id, C>) -> R) -> R {
        let container = self.into_inner();
        let len = container.len();
        tracing::trace!(len, "freezing container");
        with_brand(move |brand| {
            scope(
                Guard { len, brand },
                Frozen {
                    container,
                    _brand: brand,
                },
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{size::SizeInterval, SizeRefined};
    use std::collections::VecDeque;

    #[test]
    fn test_check_matches_length() {
        let v = SizeRefined::<Vec<i32>, SizeInterval<0>>::new(vec![1, 2, 3]).unwrap();
        v.freeze(|guard, frozen| {
            assert_eq!(guard.len(), 3);
            for i in 0..10 {
                assert_eq!(guard.check(i).is_some(), i < 3);
            }
            assert_eq!(frozen.len(), 3);
        });
    }

    #[test]
    fn test_indexing_through_guard() {
        let v = SizeRefined::<VecDeque<char>, SizeInterval<1>>::new(VecDeque::from(vec![
            'x', 'y', 'z',
        ]))
        .unwrap();
        let collected = v.freeze(|guard, frozen| {
            guard.indices().rev().map(|i| frozen[i]).collect::<String>()
        });
        assert_eq!(collected, "zyx");
    }

    #[test]
    fn test_empty_freeze() {
        let v = SizeRefined::<Vec<u8>, SizeInterval<0, 4>>::new(Vec::new()).unwrap();
        let inner = v.freeze(|guard, frozen| {
            assert!(guard.is_empty());
            assert_eq!(guard.indices().len(), 0);
            assert!(guard.check(0).is_none());
            assert!(frozen.get(0).is_none());
            frozen.into_inner()
        });
        assert!(inner.is_empty());
    }

    #[test]
    fn test_frozen_accessors() {
        let v = SizeRefined::<Vec<u32>, SizeInterval<2, 2>>::new(vec![5, 6]).unwrap();
        v.freeze(|guard, frozen| {
            assert_eq!(frozen.as_slice(), &[5, 6]);
            assert_eq!(frozen.iter().sum::<u32>(), 11);
            let last = guard.check(1).unwrap();
            assert_eq!(last.get(), 1);
            assert_eq!(frozen[last], 6);
            assert_eq!(format!("{guard:?}"), "Guard { len: 2 }");
        });
    }
}
