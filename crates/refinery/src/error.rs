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

//! # Refinement Errors
//!
//! The error taxonomy for runtime refinement failures. Static violations never
//! reach this type: they abort compilation. Out-of-range guard checks are not
//! errors either and surface as `Option::None`.

use thiserror::Error;

/// Result type for fallible refinement operations.
pub type RefineResult<T> = std::result::Result<T, RefineError>;

/// Error type for runtime refinement failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RefineError {
    /// A value did not satisfy the predicate it was refined with.
    #[error("refinement violation: {value} does not satisfy {predicate}")]
    Violation {
        /// `Debug` rendering of the offending value.
        value: String,
        /// Label of the violated predicate.
        predicate: String,
    },

    /// A container's element count did not satisfy its size predicate.
    #[error("size violation: size {size} does not satisfy {predicate}")]
    SizeViolation {
        /// Element count of the offending container.
        size: usize,
        /// Label of the violated size predicate.
        predicate: String,
    },

    /// The literal result of an arithmetic operation does not fit the base type.
    #[error("arithmetic overflow: {expression} overflows {type_name}")]
    Overflow {
        /// The operation that overflowed, e.g. `2147483647 + 1`.
        expression: String,
        /// Name of the base type.
        type_name: &'static str,
    },
}

impl RefineError {
    /// Create a refinement violation error.
    #[must_use]
    pub fn violation(value: impl std::fmt::Debug, predicate: impl Into<String>) -> Self {
        let err = Self::Violation {
            value: format!("{:?}", value),
            predicate: predicate.into(),
        };
        tracing::debug!(error = %err, "dynamic refinement check failed");
        err
    }

    /// Create a size violation error.
    #[must_use]
    pub fn size_violation(size: usize, predicate: impl Into<String>) -> Self {
        let err = Self::SizeViolation {
            size,
            predicate: predicate.into(),
        };
        tracing::debug!(error = %err, "dynamic size check failed");
        err
    }

    /// Create an overflow error for the binary operation `lhs op rhs` over `T`.
    #[must_use]
    pub fn overflow<T: std::fmt::Display>(lhs: T, op: &str, rhs: T) -> Self {
        let err = Self::Overflow {
            expression: format!("{} {} {}", lhs, op, rhs),
            type_name: std::any::type_name::<T>(),
        };
        tracing::debug!(error = %err, "checked arithmetic overflowed");
        err
    }

    /// Create an overflow error for the unary operation `op value` over `T`.
    #[must_use]
    pub fn unary_overflow<T: std::fmt::Display>(op: &str, value: T) -> Self {
        let err = Self::Overflow {
            expression: format!("{}({})", op, value),
            type_name: std::any::type_name::<T>(),
        };
        tracing::debug!(error = %err, "checked arithmetic overflowed");
        err
    }

    /// Returns `true` if this is an arithmetic overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` if this is a value or size violation.
    #[inline]
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. } | Self::SizeViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message() {
        let err = RefineError::violation(-3, "Positive");
        assert_eq!(
            err.to_string(),
            "refinement violation: -3 does not satisfy Positive"
        );
        assert!(err.is_violation());
        assert!(!err.is_overflow());
    }

    #[test]
    fn test_size_violation_message() {
        let err = RefineError::size_violation(0, "SizeInterval<1, 18446744073709551615>");
        assert!(err.to_string().starts_with("size violation: size 0"));
        assert!(err.is_violation());
    }

    #[test]
    fn test_overflow_message() {
        let err = RefineError::overflow(i32::MAX, "+", 1);
        assert_eq!(
            err,
            RefineError::Overflow {
                expression: "2147483647 + 1".to_string(),
                type_name: "i32",
            }
        );
        assert_eq!(
            err.to_string(),
            "arithmetic overflow: 2147483647 + 1 overflows i32"
        );

        let neg = RefineError::unary_overflow("-", i8::MIN);
        assert_eq!(neg.to_string(), "arithmetic overflow: -(-128) overflows i8");
        assert!(neg.is_overflow());
    }

    #[test]
    fn test_string_values_are_debug_quoted() {
        let err = RefineError::violation("", "NonEmpty");
        assert_eq!(
            err,
            RefineError::Violation {
                value: "\"\"".to_string(),
                predicate: "NonEmpty".to_string(),
            }
        );
    }
}
