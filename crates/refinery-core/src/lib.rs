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

//! # Refinery Core
//!
//! Numeric and lifetime primitives underpinning the `refinery` crate. The
//! refinement types themselves live in `refinery`; this crate provides the
//! arithmetic and branding machinery they are built from.
//!
//! ## Modules
//!
//! - `math`: Closed interval `[lo, hi]` with saturating interval arithmetic,
//!   used to report and cross-check the bounds of interval refinements.
//! - `num`: The `RefinableNumeric` trait and by-value arithmetic traits for
//!   checked (`Option<T>`) and saturating operations over every primitive
//!   integer and `f32`/`f64`.
//! - `utils`: Invariant lifetime brands (`Brand<'x>`) and branded indices
//!   (`BrandedIndex<'id>`).

pub mod math;
pub mod num;
pub mod utils;
