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

//! # Numeric Foundations
//!
//! Traits and utilities for numeric programming on refined values. This module
//! consolidates the by-value arithmetic traits that mirror Rust's intrinsic
//! behaviors and the `RefinableNumeric` bound used by the interval engine.
//!
//! ## Submodules
//!
//! - `numeric`: The `RefinableNumeric` trait alias implemented for every
//!   primitive integer and floating-point type.
//! - `ops`: Checked and saturating arithmetic traits (by value) for addition,
//!   subtraction, multiplication, division, remainder, and negation.
//!
//! ## Motivation
//!
//! Refinement bounds and refined values need two different overflow policies.
//! Bounds saturate so that a derived interval stays a sound over-approximation;
//! values are checked so that an overflow is never wrapped into something that
//! looks valid. Both policies are expressed here as uniform, generic traits.

pub mod numeric;
pub mod ops;
