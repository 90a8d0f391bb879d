//! Traversable type class - effectful mapping that turns the structure inside out.
//!
//! `traverse` maps every element to an effect (`Option`, `Result`, or
//! `Validation`) and collects the outcomes into one effect holding the whole
//! structure. `sequence` is `traverse` with the identity function.
//!
//! `Option` and `Result` stop at the first failure. `Validation` visits every
//! element and combines all failures with [`Semigroup::combine`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Traversable;
//! use kindred::imm_list;
//!
//! assert_eq!(
//!     imm_list![Some(1), Some(2), Some(3)].sequence_option(),
//!     Some(imm_list![1, 2, 3])
//! );
//! assert_eq!(imm_list![Some(1), None, Some(3)].sequence_option(), None);
//! ```

#[cfg(feature = "control")]
use super::semigroup::Semigroup;
use super::{Foldable, Functor, Kind};
#[cfg(feature = "control")]
use crate::control::Validation;

/// A type class for structures that can be traversed with an effect.
pub trait Traversable: Functor + Foldable {
    /// Maps each element to an `Option`; `None` anywhere yields `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Maps each element to a `Result`; the first `Err` is returned.
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    /// use kindred::imm_list;
    ///
    /// let parsed = imm_list!["1", "x", "y"].traverse_result(|s| s.parse::<i32>().map_err(|_| s));
    /// assert_eq!(parsed, Err("x"));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Maps each element to a `Validation`, accumulating every failure.
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    /// use kindred::control::Validation;
    /// use kindred::imm_list;
    ///
    /// let checked = imm_list![1, -2, 3, -4].traverse_validation(|n| {
    ///     if n > 0 { Validation::Success(n) } else { Validation::Failure(vec![n]) }
    /// });
    /// assert_eq!(checked, Validation::Failure(vec![-2, -4]));
    /// ```
    #[cfg(feature = "control")]
    fn traverse_validation<E, B, F>(self, function: F) -> Validation<E, Self::WithType<B>>
    where
        E: Semigroup,
        F: FnMut(Self::Inner) -> Validation<E, B>;

    /// Turns a structure of `Option`s into an `Option` of the structure.
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as Kind>::Inner>>
    where
        Self: Sized,
        Self::Inner: Kind + Into<Option<<Self::Inner as Kind>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s into a `Result` of the structure.
    fn sequence_result<E>(self) -> Result<Self::WithType<<Self::Inner as Kind>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: Kind + Into<Result<<Self::Inner as Kind>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }

    /// Turns a structure of `Validation`s into a `Validation` of the structure.
    #[cfg(feature = "control")]
    fn sequence_validation<E, B>(self) -> Validation<E, Self::WithType<B>>
    where
        Self: Sized,
        E: Semigroup,
        Self::Inner: Into<Validation<E, B>>,
    {
        self.traverse_validation(Into::into)
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Ok(None),
        }
    }

    #[cfg(feature = "control")]
    fn traverse_validation<E, B, F>(self, mut function: F) -> Validation<E, Option<B>>
    where
        E: Semigroup,
        F: FnMut(A) -> Validation<E, B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Validation::Success(None),
        }
    }
}
