//! Error types for sealed construction and structural matching.
//!
//! Every failure the dynamic layer can report is a caller programming error,
//! so there is a single error enum and no retry or recovery path. Errors are
//! returned at the point of violation and propagated with `?`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::sealed::{construct, Value};
//! use kindred::AdtError;
//!
//! let error = construct("Cons", vec![Value::Int(1), Value::Int(2)]).unwrap_err();
//! assert!(matches!(error, AdtError::TypeMismatch { .. }));
//! assert_eq!(
//!     error.to_string(),
//!     "type mismatch in 2nd argument of Cons: expected List, found Int"
//! );
//! ```

use std::fmt;

/// The number of constructor arguments a variant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` arguments satisfy this arity.
    ///
    /// ```rust
    /// use kindred::Arity;
    ///
    /// assert!(Arity::Exactly(2).accepts(2));
    /// assert!(!Arity::Exactly(2).accepts(3));
    /// assert!(Arity::AtLeast(1).accepts(5));
    /// assert!(!Arity::AtLeast(1).accepts(0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(expected) => count == expected,
            Self::AtLeast(minimum) => count >= minimum,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(expected) => write!(formatter, "{expected}"),
            Self::AtLeast(minimum) => write!(formatter, "at least {minimum}"),
        }
    }
}

/// Errors raised by the sealed construction discipline and the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdtError {
    /// Construction was requested for an abstract family or an undeclared variant.
    #[error("{requested} cannot be constructed: {reason}")]
    SealViolation {
        /// The tag the caller asked for.
        requested: String,
        /// Why the tag was refused.
        reason: SealReason,
    },

    /// A constructor received the wrong number of arguments.
    #[error("wrong number of arguments for constructor {variant}: expected {expected}, found {found}")]
    Arity {
        /// The constructor (or clause) that was called.
        variant: String,
        /// What the constructor accepts.
        expected: Arity,
        /// How many arguments were supplied.
        found: usize,
    },

    /// A value had the wrong runtime type.
    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Where the mismatch was detected.
        context: String,
        /// The runtime type that was required.
        expected: String,
        /// The runtime type that was actually found.
        found: String,
    },

    /// Integer arithmetic left the range of `i64`.
    #[error("integer overflow in {context}: {left} + {right}")]
    Overflow {
        /// The operation that overflowed.
        context: String,
        /// The left operand.
        left: i64,
        /// The right operand.
        right: i64,
    },

    /// A handler asked for a capture its clause never bound.
    #[error("no capture named `{name}` was bound")]
    UnboundCapture {
        /// The requested capture name.
        name: String,
    },

    /// No clause of a match expression unified with the scrutinees.
    #[error("non-exhaustive match: no clause matched {scrutinees}")]
    NonExhaustiveMatch {
        /// The shown scrutinees.
        scrutinees: String,
    },
}

/// Why a [`AdtError::SealViolation`] was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SealReason {
    /// The tag names a family's abstract supertype.
    AbstractFamily,
    /// The tag is not a variant of any sealed family.
    UndeclaredVariant,
}

impl fmt::Display for SealReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbstractFamily => {
                formatter.write_str("the family is sealed; construct one of its variants")
            }
            Self::UndeclaredVariant => {
                formatter.write_str("not a variant declared by any sealed family")
            }
        }
    }
}

#[cfg(feature = "sealed")]
impl AdtError {
    /// Builds an [`AdtError::TypeMismatch`].
    pub(crate) fn type_mismatch(
        context: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Result alias used throughout the dynamic layer.
pub type Result<T> = std::result::Result<T, AdtError>;
