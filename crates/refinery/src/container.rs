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

//! # Container Abstraction
//!
//! The minimal capability traits a container needs to be size-refined.
//! Capabilities are split so that each size-refined operation asks only for
//! what it uses: a fixed-size array can be indexed but never pushed to, a
//! `VecDeque` can be pushed to but has no contiguous slice.
//!
//! ## Traits
//!
//! - [`Container`]: element count and borrowing iteration.
//! - [`Sequence`]: positional access, including unchecked access.
//! - [`Contiguous`]: a slice view and raw pointer.
//! - [`BackInsert`]: push and pop at the back.
//!
//! ## Implementations
//!
//! | Type          | Container | Sequence | Contiguous | BackInsert |
//! |---------------|:---------:|:--------:|:----------:|:----------:|
//! | `Vec<T>`      | ✓         | ✓        | ✓          | ✓          |
//! | `VecDeque<T>` | ✓         | ✓        |            | ✓          |
//! | `SmallVec<T, N>` | ✓      | ✓        | ✓          | ✓          |
//! | `[T; N]`      | ✓         | ✓        | ✓          |            |
//! | `Box<[T]>`    | ✓         | ✓        | ✓          |            |

use smallvec::SmallVec;
use std::collections::VecDeque;

/// A collection with a known element count that can be iterated by reference.
///
/// # Safety
///
/// Implementations guarantee, for every value `c`:
///
/// - [`c.iter()`](Container::iter) yields exactly [`c.len()`](Container::len)
///   elements.
/// - If `Self: IntoIterator`, the by-value `c.into_iter()` yields exactly
///   `c.len()` elements.
///
/// Size-refined wrappers rely on both for unchecked element access and for
/// the size bounds of [`append`](crate::SizeRefined::append).
pub unsafe trait Container {
    /// The element type.
    type Item;

    /// Borrowing iterator over the elements.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a borrowing iterator over the elements.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A container with positional access.
///
/// # Safety
///
/// Every index below `len()` must be valid for
/// [`get_unchecked`](Sequence::get_unchecked).
pub unsafe trait Sequence: Container {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Item;

    /// Returns the first element, if any.
    #[inline]
    fn first(&self) -> Option<&Self::Item> {
        self.get(0)
    }

    /// Returns the last element, if any.
    #[inline]
    fn last(&self) -> Option<&Self::Item> {
        match self.len() {
            0 => None,
            len => self.get(len - 1),
        }
    }
}

/// A container whose elements live in one contiguous allocation.
///
/// # Safety
///
/// [`as_slice`](Contiguous::as_slice) must have length `len()`.
pub unsafe trait Contiguous: Sequence {
    /// Returns the elements as a slice.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns a raw pointer to the first element.
    #[inline]
    fn as_ptr(&self) -> *const Self::Item {
        self.as_slice().as_ptr()
    }
}

/// A container that grows and shrinks at the back.
///
/// # Safety
///
/// [`push_back`](BackInsert::push_back) must increase `len()` by exactly
/// one. [`pop_back`](BackInsert::pop_back) must return `Some` and decrease
/// `len()` by one whenever the container is non-empty.
pub unsafe trait BackInsert: Container {
    /// Appends an element.
    fn push_back(&mut self, value: Self::Item);

    /// Removes and returns the last element, or `None` if empty.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

unsafe impl<T> Container for Vec<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

unsafe impl<T> Sequence for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller.
        unsafe { <[T]>::get_unchecked(self, index) }
    }
}

unsafe impl<T> Contiguous for Vec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }
}

unsafe impl<T> BackInsert for Vec<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

unsafe impl<T> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

unsafe impl<T> Sequence for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        match VecDeque::get(self, index) {
            Some(value) => value,
            // SAFETY: the caller guarantees `index < len`.
            None => unsafe { std::hint::unreachable_unchecked() },
        }
    }
}

unsafe impl<T> BackInsert for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
}

unsafe impl<T, const N: usize> Container for SmallVec<T, N> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(SmallVec::as_slice(self))
    }
}

unsafe impl<T, const N: usize> Sequence for SmallVec<T, N> {
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(SmallVec::as_slice(self), index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller.
        unsafe { <[T]>::get_unchecked(SmallVec::as_slice(self), index) }
    }
}

unsafe impl<T, const N: usize> Contiguous for SmallVec<T, N> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        SmallVec::as_slice(self)
    }
}

unsafe impl<T, const N: usize> BackInsert for SmallVec<T, N> {
    #[inline]
    fn push_back(&mut self, value: T) {
        SmallVec::push(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        SmallVec::pop(self)
    }
}

unsafe impl<T, const N: usize> Container for [T; N] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

unsafe impl<T, const N: usize> Sequence for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller.
        unsafe { <[T]>::get_unchecked(self, index) }
    }
}

unsafe impl<T, const N: usize> Contiguous for [T; N] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

unsafe impl<T> Container for Box<[T]> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

unsafe impl<T> Sequence for Box<[T]> {
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller.
        unsafe { <[T]>::get_unchecked(self, index) }
    }
}

unsafe impl<T> Contiguous for Box<[T]> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<C>(container: &C) -> i32
    where
        C: Container<Item = i32>,
    {
        container.iter().sum()
    }

    fn ends<C: Sequence>(container: &C) -> (Option<&C::Item>, Option<&C::Item>) {
        (Sequence::first(container), Sequence::last(container))
    }

    #[test]
    fn test_vec() {
        let mut v = vec![1, 2, 3];
        assert_eq!(Container::len(&v), 3);
        assert_eq!(sum(&v), 6);
        assert_eq!(ends(&v), (Some(&1), Some(&3)));
        BackInsert::push_back(&mut v, 4);
        assert_eq!(BackInsert::pop_back(&mut v), Some(4));
        assert_eq!(Contiguous::as_slice(&v), &[1, 2, 3]);
        assert_eq!(unsafe { Sequence::get_unchecked(&v, 2) }, &3);
    }

    #[test]
    fn test_vec_deque() {
        let mut d: VecDeque<i32> = VecDeque::new();
        assert!(Container::is_empty(&d));
        assert_eq!(ends(&d), (None, None));
        BackInsert::push_back(&mut d, 5);
        d.push_front(4);
        assert_eq!(sum(&d), 9);
        assert_eq!(unsafe { Sequence::get_unchecked(&d, 0) }, &4);
        assert_eq!(Sequence::last(&d), Some(&5));
    }

    #[test]
    fn test_small_vec() {
        let mut s: SmallVec<i32, 2> = SmallVec::new();
        BackInsert::push_back(&mut s, 1);
        BackInsert::push_back(&mut s, 2);
        BackInsert::push_back(&mut s, 3);
        assert_eq!(Container::len(&s), 3);
        assert_eq!(sum(&s), 6);
        assert_eq!(Sequence::get(&s, 3), None);
        assert_eq!(Contiguous::as_slice(&s), &[1, 2, 3]);
    }

    #[test]
    fn test_array_and_boxed_slice() {
        let a = [7, 8, 9];
        assert_eq!(Container::len(&a), 3);
        assert_eq!(ends(&a), (Some(&7), Some(&9)));
        assert_eq!(Contiguous::as_ptr(&a), a.as_ptr());

        let b: Box<[i32]> = vec![1, 1].into_boxed_slice();
        assert_eq!(sum(&b), 2);
        assert_eq!(Sequence::get(&b, 1), Some(&1));

        let empty: [i32; 0] = [];
        assert!(Container::is_empty(&empty));
    }
}
