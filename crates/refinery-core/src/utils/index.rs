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

//! # Branded Indices (Zero-Cost)
//!
//! A `BrandedIndex<'id>` is a `usize` that has been proven in bounds for the
//! one container sharing the brand `'id`. The brand is an invariant lifetime
//! (see [`Brand`]), so an index minted for one container cannot be used with
//! another, and the container can skip the bounds check when indexing.
//!
//! ## Highlights
//!
//! - `#[repr(transparent)]` over `usize`; the brand is zero-sized.
//! - Construction is `unsafe`: only code that has checked the index against
//!   the branded container's length may create one.
//! - `Copy`, ordered and hashable like a plain index.

use crate::utils::marker::Brand;

/// An index into the container branded with `'id`.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::utils::{index::BrandedIndex, marker::with_brand};
///
/// let data = [10, 20, 30];
/// let value = with_brand(|brand| {
///     // SAFETY: 1 < data.len().
///     let idx = unsafe { BrandedIndex::new(1, brand) };
///     data[idx.get()]
/// });
/// assert_eq!(value, 20);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrandedIndex<'id> {
    index: usize,
    _brand: Brand<'id>,
}

impl<'id> BrandedIndex<'id> {
    /// Creates a new `BrandedIndex`.
    ///
    /// # Safety
    ///
    /// `index` must be strictly less than the length of the container that
    /// owns `brand`, and that length must not change while the brand lives.
    #[inline(always)]
    pub const unsafe fn new(index: usize, brand: Brand<'id>) -> Self {
        Self {
            index,
            _brand: brand,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.index
    }
}

impl<'id> From<BrandedIndex<'id>> for usize {
    #[inline(always)]
    fn from(index: BrandedIndex<'id>) -> usize {
        index.index
    }
}

impl<'id> std::fmt::Debug for BrandedIndex<'id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BrandedIndex({})", self.index)
    }
}

impl<'id> std::fmt::Display for BrandedIndex<'id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::marker::with_brand;

    #[test]
    fn test_size_matches_usize() {
        assert_eq!(
            std::mem::size_of::<BrandedIndex<'static>>(),
            std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_get_display_debug() {
        with_brand(|brand| {
            let idx = unsafe { BrandedIndex::new(7, brand) };
            assert_eq!(idx.get(), 7);
            assert_eq!(usize::from(idx), 7);
            assert_eq!(format!("{}", idx), "7");
            assert_eq!(format!("{:?}", idx), "BrandedIndex(7)");
        });
    }

    #[test]
    fn test_ordering() {
        with_brand(|brand| {
            let a = unsafe { BrandedIndex::new(1, brand) };
            let b = unsafe { BrandedIndex::new(2, brand) };
            assert!(a < b);
            assert_eq!(a, a);
        });
    }
}
