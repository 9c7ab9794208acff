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

//! # Size-Refined Containers
//!
//! [`SizeRefined<C, S>`] owns a container whose element count is proven to
//! lie in the size interval `S`. The proof enables operations that would
//! otherwise need a runtime check:
//!
//! - [`front`](SizeRefined::front), [`back`](SizeRefined::back) and
//!   [`pop_back`](SizeRefined::pop_back) exist only for `S::LO >= 1`.
//! - Indexing with a `Refined<usize, I>` whose interval lies below `S::LO`
//!   skips the bounds check.
//!
//! Both gates are inline `const` assertions, evaluated once per
//! instantiation. A wrapper with `SizeInterval<0, 10>` cannot call `front`;
//! the build fails during monomorphisation.
//!
//! Mutations consume the wrapper and return one whose size predicate is
//! shifted by the exact delta: `push_back` yields [`Grown<S, 1>`], `pop_back`
//! yields [`Shrunk<S, 1>`], and `append` yields [`Joined<S, S2>`].
//!
//! ```rust
//! use refinery::{size::SizeInterval, SizeRefined};
//!
//! let empty = SizeRefined::<Vec<u32>, SizeInterval<0, 0>>::new(Vec::new()).unwrap();
//! let list = empty.push_back(1).push_back(2).push_back(3);
//!
//! // Three pushes from [0, 0] prove exactly three elements.
//! assert_eq!(*list.front(), 1);
//! assert_eq!(*list.back(), 3);
//! assert_eq!(list.size_bounds().lo(), 3);
//! ```

use crate::{
    container::{BackInsert, Container, Contiguous, Sequence},
    error::{RefineError, RefineResult},
    interval::IntervalPredicate,
    refined::Refined,
    size::{Grown, Joined, Shrunk, SizePredicate},
};
use refinery_core::math::interval::ClosedInterval;
use std::{marker::PhantomData, ops::Index};

/// A container whose length satisfies the size predicate `S`.
#[repr(transparent)]
pub struct SizeRefined<C, S> {
    container: C,
    size: PhantomData<fn() -> S>,
}

impl<C, S> SizeRefined<C, S>
where
    C: Container,
    S: SizePredicate,
{
    /// Wraps `container`, verifying its length at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RefineError::SizeViolation`] if the length lies outside `S`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{size::SizeInterval, SizeRefined};
    ///
    /// type Pair = SizeRefined<Vec<i32>, SizeInterval<2, 2>>;
    /// assert!(Pair::new(vec![1, 2]).is_ok());
    /// assert!(Pair::new(vec![1]).unwrap_err().to_string().contains("size 1"));
    /// ```
    #[inline]
    pub fn new(container: C) -> RefineResult<Self> {
        let len = container.len();
        if S::test(&len) {
            Ok(Self::wrap(container))
        } else {
            Err(RefineError::size_violation(len, S::describe()))
        }
    }

    /// Wraps `container`, returning `None` if its length lies outside `S`.
    #[inline]
    pub fn try_new(container: C) -> Option<Self> {
        S::test(&container.len()).then(|| Self::wrap(container))
    }

    /// Wraps `container` without checking its length.
    ///
    /// The size predicate is still asserted in debug builds.
    ///
    /// # Safety
    ///
    /// `S::test(&container.len())` must hold. Unchecked indexing relies on
    /// it.
    #[inline]
    pub unsafe fn new_unchecked(container: C) -> Self {
        debug_assert!(
            S::test(&container.len()),
            "trusted container size {} violates {}",
            container.len(),
            S::describe()
        );
        Self::wrap(container)
    }

    #[inline(always)]
    fn wrap(container: C) -> Self {
        Self {
            container,
            size: PhantomData,
        }
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

    /// Borrows the wrapped container.
    #[inline]
    pub fn get(&self) -> &C {
        &self.container
    }

    /// Releases the wrapped container, forgetting the proof.
    #[inline]
    pub fn into_inner(self) -> C {
        self.container
    }

    /// The size interval `[S::LO, S::HI]` the length is proven to lie in.
    #[inline]
    pub fn size_bounds(&self) -> ClosedInterval<usize> {
        S::bounds()
    }

    /// Widens the size predicate to `S2`, which must contain `S`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{size::SizeInterval, SizeRefined};
    ///
    /// let tight = SizeRefined::<Vec<u8>, SizeInterval<2, 4>>::new(vec![1, 2, 3]).unwrap();
    /// let loose: SizeRefined<Vec<u8>, SizeInterval<1>> = tight.relax();
    /// assert_eq!(loose.len(), 3);
    /// ```
    #[inline]
    pub fn relax<S2: SizePredicate>(self) -> SizeRefined<C, S2> {
        const {
            assert!(
                S2::LO <= S::LO && S::HI <= S2::HI,
                "relaxed size interval must contain the original"
            )
        };
        SizeRefined::wrap(self.container)
    }
}

impl<C, S> SizeRefined<C, S>
where
    C: Sequence,
    S: SizePredicate,
{
    /// Returns the first element. Requires `S::LO >= 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::aliases::NonEmptyVec;
    ///
    /// let v = NonEmptyVec::new(vec!['a', 'b']).unwrap();
    /// assert_eq!(*v.front(), 'a');
    /// ```
    #[inline]
    pub fn front(&self) -> &C::Item {
        const { assert!(S::LO >= 1, "front() requires a non-empty size interval") };
        // SAFETY: len >= S::LO >= 1.
        unsafe { self.container.get_unchecked(0) }
    }

    /// Returns the last element. Requires `S::LO >= 1`.
    #[inline]
    pub fn back(&self) -> &C::Item {
        const { assert!(S::LO >= 1, "back() requires a non-empty size interval") };
        // SAFETY: len >= S::LO >= 1.
        unsafe { self.container.get_unchecked(self.container.len() - 1) }
    }

    /// Returns the element at `index`, which is proven to be in bounds.
    ///
    /// The interval of `I` must lie below `S::LO`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{interval::Interval, size::SizeInterval, Refined, SizeRefined};
    ///
    /// let v = SizeRefined::<Vec<i32>, SizeInterval<3>>::new(vec![10, 20, 30, 40]).unwrap();
    /// let i = Refined::<usize, Interval<0, 2>>::new(2).unwrap();
    /// assert_eq!(*v.at(i), 30);
    /// assert_eq!(v[i], 30);
    /// ```
    #[inline]
    pub fn at<I>(&self, index: Refined<usize, I>) -> &C::Item
    where
        I: IntervalPredicate<usize>,
    {
        const {
            assert!(
                I::HI < S::LO,
                "index interval is not below the container's minimum size"
            )
        };
        // SAFETY: index <= I::HI < S::LO <= len.
        unsafe { self.container.get_unchecked(index.into_inner()) }
    }
}

impl<C, S, I> Index<Refined<usize, I>> for SizeRefined<C, S>
where
    C: Sequence,
    S: SizePredicate,
    I: IntervalPredicate<usize>,
{
    type Output = C::Item;

    #[inline]
    fn index(&self, index: Refined<usize, I>) -> &C::Item {
        self.at(index)
    }
}

impl<C, S> SizeRefined<C, S>
where
    C: Contiguous,
    S: SizePredicate,
{
    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[C::Item] {
        self.container.as_slice()
    }

    /// Returns a raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const C::Item {
        self.container.as_ptr()
    }
}

impl<C, S> SizeRefined<C, S>
where
    C: BackInsert,
    S: SizePredicate,
{
    /// Appends `value`; the size interval grows by one.
    #[inline]
    pub fn push_back(mut self, value: C::Item) -> SizeRefined<C, Grown<S, 1>> {
        self.container.push_back(value);
        // SAFETY: the length grew by exactly one.
        unsafe { SizeRefined::new_unchecked(self.container) }
    }

    /// Appends the value produced by `make`; the size interval grows by one.
    #[inline]
    pub fn emplace_back<F>(self, make: F) -> SizeRefined<C, Grown<S, 1>>
    where
        F: FnOnce() -> C::Item,
    {
        self.push_back(make())
    }

    /// Removes the last element; the size interval shrinks by one. Requires
    /// `S::LO >= 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{size::SizeInterval, SizeRefined};
    ///
    /// let v = SizeRefined::<Vec<i32>, SizeInterval<1, 3>>::new(vec![1, 2]).unwrap();
    /// let (rest, last) = v.pop_back();
    /// assert_eq!(last, 2);
    /// assert_eq!(rest.size_bounds().hi(), 2);
    /// ```
    #[inline]
    pub fn pop_back(mut self) -> (SizeRefined<C, Shrunk<S, 1>>, C::Item) {
        const { assert!(S::LO >= 1, "pop_back() requires a non-empty size interval") };
        let item = match self.container.pop_back() {
            Some(item) => item,
            // SAFETY: len >= S::LO >= 1, so the container is non-empty.
            None => unsafe { std::hint::unreachable_unchecked() },
        };
        // SAFETY: the length shrank by exactly one.
        (unsafe { SizeRefined::new_unchecked(self.container) }, item)
    }

    /// Appends every element of `values`; the size interval grows by `N`.
    #[inline]
    pub fn append_array<const N: usize>(
        mut self,
        values: [C::Item; N],
    ) -> SizeRefined<C, Grown<S, N>> {
        for value in values {
            self.container.push_back(value);
        }
        // SAFETY: exactly N elements were pushed.
        unsafe { SizeRefined::new_unchecked(self.container) }
    }

    /// Moves every element of `other` to the back; the size interval becomes
    /// `[S::LO + S2::LO, S::HI + S2::HI]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refinery::{size::SizeInterval, SizeRefined};
    ///
    /// let a = SizeRefined::<Vec<u8>, SizeInterval<1, 2>>::new(vec![1]).unwrap();
    /// let b = SizeRefined::<Vec<u8>, SizeInterval<2, 3>>::new(vec![2, 3]).unwrap();
    /// let joined = a.append(b);
    /// assert_eq!(joined.as_slice(), &[1, 2, 3]);
    /// assert_eq!((joined.size_bounds().lo(), joined.size_bounds().hi()), (3, 5));
    /// ```
    #[inline]
    pub fn append<C2, S2>(mut self, other: SizeRefined<C2, S2>) -> SizeRefined<C, Joined<S, S2>>
    where
        C2: Container<Item = C::Item> + IntoIterator<Item = C::Item>,
        S2: SizePredicate,
    {
        let expected = self.container.len() + other.len();
        for value in other.into_inner() {
            self.container.push_back(value);
        }
        debug_assert_eq!(self.container.len(), expected);
        // SAFETY: the `Container` contract on `C2` makes its by-value
        // `into_iter` yield exactly `other.len()` elements, which lies in
        // S2, so the new length lies in `Joined<S, S2>`.
        unsafe { SizeRefined::new_unchecked(self.container) }
    }
}

impl<C, S> AsRef<C> for SizeRefined<C, S> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.container
    }
}

impl<C: Clone, S> Clone for SizeRefined<C, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            size: PhantomData,
        }
    }
}

impl<C: PartialEq, S, S2> PartialEq<SizeRefined<C, S2>> for SizeRefined<C, S> {
    #[inline]
    fn eq(&self, other: &SizeRefined<C, S2>) -> bool {
        self.container == other.container
    }
}

impl<C: Eq, S> Eq for SizeRefined<C, S> {}

impl<C: std::fmt::Debug, S> std::fmt::Debug for SizeRefined<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.container.fmt(f)
    }
}

impl<C: IntoIterator, S> IntoIterator for SizeRefined<C, S> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.container.into_iter()
    }
}

impl<'a, C, S> IntoIterator for &'a SizeRefined<C, S>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (&self.container).into_iter()
    }
}
