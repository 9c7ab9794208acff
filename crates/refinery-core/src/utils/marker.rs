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

/// An invariant lifetime brand used to create nominal types.
///
/// Two values carrying `Brand<'a>` and `Brand<'b>` are only interchangeable
/// if `'a` and `'b` are the same lifetime. Because the brand is invariant in
/// `'x`, the compiler cannot shrink or grow it to make two distinct brands
/// unify. A fresh, unnameable brand is obtained by running code inside a
/// higher-ranked closure (`for<'id> FnOnce(Brand<'id>) -> R`).
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brand<'x>(std::marker::PhantomData<fn(&'x ()) -> &'x ()>);

impl<'x> Brand<'x> {
    /// Creates a new `Brand` instance.
    ///
    /// Creating a brand is safe on its own; what matters is that the lifetime
    /// `'x` is chosen by a higher-ranked scope that no other value can share.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

/// Runs `scope` with a brand whose lifetime is unique to this call.
///
/// # Examples
///
/// ```rust
/// # use refinery_core::utils::marker::{with_brand, Brand};
///
/// let size = with_brand(|brand: Brand<'_>| std::mem::size_of_val(&brand));
/// assert_eq!(size, 0);
/// ```
#[inline(always)]
pub fn with_brand<R>(scope: impl for<'id> FnOnce(Brand<'id>) -> R) -> R {
    scope(Brand::new())
}

impl<'x> std::fmt::Debug for Brand<'x> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Brand")
    }
}
