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

//! # Refinery
//!
//! **Refinement types: values and containers that carry a proven predicate in
//! their type.**
//!
//! A [`Refined<T, P>`] is a `T` for which the predicate `P` is known to hold.
//! The proof is established once, at construction, and every function that
//! receives the refined value can rely on it without re-checking. The wrapper
//! is `#[repr(transparent)]` and predicates are zero-sized types, so the proof
//! costs nothing at runtime.
//!
//! ## Modules
//!
//! * **`predicate`**: The [`Predicate`](predicate::Predicate) trait and the
//!   built-in catalog (`Positive`, `Even`, `Finite`, `NonEmpty`, comparison
//!   predicates with const-generic thresholds, ...).
//! * **`compose`**: Boolean combinators (`And`, `Or`, `Not`, counting
//!   combinators over tuples) that are predicates themselves.
//! * **`refined`**: The [`Refined`] wrapper with static, dynamic and trusted
//!   construction.
//! * **`interval`**: Interval predicates `[LO, HI]` and arithmetic that
//!   derives the bounds of `+`, `-`, `*` and unary `-` at compile time.
//! * **`ops`**: Arithmetic and math helpers for non-interval refinements.
//! * **`size`**, **`container`**, **`refined_container`**: Containers whose
//!   element count is proven to lie in a size interval, with size-tracking
//!   mutations and bounds-check-free access.
//! * **`freeze`**: Branded indices that are checked once against a frozen
//!   container and then index it without further checks.
//! * **`aliases`**: Ready-made aliases such as `PortNumber` or `NonEmptyVec`.
//! * **`error`**: [`RefineError`], returned by every fallible operation.
//!
//! ## Verification Modes
//!
//! 1.  **Static**: interval refinements of literals are checked in a `const`
//!     context with [`refined!`]; a violation fails the build.
//! 2.  **Dynamic**: [`Refined::new`] checks at runtime and returns a
//!     [`RefineError`] describing the value and the predicate.
//! 3.  **Trusted**: [`Refined::new_unchecked`] skips the check (asserted in
//!     debug builds) for values already known to be valid.
//!
//! ```rust
//! use refinery::{
//!     aliases::PortNumber,
//!     interval::{Interval, IntervalPredicate, Sum},
//!     refined, Refined,
//! };
//!
//! fn connect(port: PortNumber) -> u16 {
//!     *port
//! }
//!
//! assert_eq!(connect(refined!(PortNumber, 443)), 443);
//!
//! let a = Refined::<i32, Interval<0, 10>>::new(7).unwrap();
//! let b = Refined::<i32, Interval<1, 5>>::new(2).unwrap();
//! let sum = (a + b).unwrap().refined().unwrap();
//! assert_eq!(*sum, 9);
//! assert_eq!(<Sum<Interval<0, 10>, Interval<1, 5>> as IntervalPredicate<i32>>::HI, 15);
//! ```
//!
//! ## Diagnostics
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events for failed
//! verifications, detected overflows, degradations and freezes. It never
//! installs a subscriber.

pub mod aliases;
pub mod compose;
pub mod container;
pub mod error;
pub mod freeze;
pub mod interval;
pub mod ops;
pub mod predicate;
pub mod refined;
pub mod refined_container;
pub mod size;

pub use error::{RefineError, RefineResult};
pub use freeze::{Frozen, Guard, GuardedIndex};
pub use interval::{Derived, Interval, IntervalPredicate};
pub use predicate::Predicate;
pub use refined::Refined;
pub use refined_container::SizeRefined;
pub use size::{SizeInterval, SizePredicate};
