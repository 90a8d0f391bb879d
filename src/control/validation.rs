//! Validation - a success value or an accumulated failure.
//!
//! [`Validation<E, A>`] is either `Success(A)` or `Failure(E)`. Unlike
//! `Result`, its applicative instance does not stop at the first failure:
//! combining two failures merges their payloads with [`Semigroup::combine`],
//! so every problem in a batch of independent checks is reported at once.
//! Because of that, `Validation` has no `Monad` instance.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Validation;
//! use kindred::typeclass::Applicative;
//!
//! fn non_empty(name: &str) -> Validation<Vec<String>, String> {
//!     if name.is_empty() {
//!         Validation::Failure(vec!["name is empty".to_string()])
//!     } else {
//!         Validation::Success(name.to_string())
//!     }
//! }
//!
//! fn adult(age: u32) -> Validation<Vec<String>, u32> {
//!     if age >= 18 {
//!         Validation::Success(age)
//!     } else {
//!         Validation::Failure(vec![format!("{age} is under 18")])
//!     }
//! }
//!
//! let person = non_empty("").map2(adult(12), |name, age| (name, age));
//! assert_eq!(
//!     person,
//!     Validation::Failure(vec!["name is empty".to_string(), "12 is under 18".to_string()])
//! );
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Kind, Monoid, Semigroup, Show};

/// A success value or a failure payload.
///
/// Exactly one of [`Validation::is_left`] (failure) and
/// [`Validation::is_right`] (success) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, A> {
    /// A successful value.
    Success(A),
    /// A failure payload.
    Failure(E),
}

impl<E, A> Validation<E, A> {
    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success value, if any.
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Validation<&E, &A> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// The success value, or `default` for a failure.
    ///
    /// ```rust
    /// use kindred::control::Validation;
    ///
    /// assert_eq!(Validation::<&str, i32>::Success(1).get_or_else(0), 1);
    /// assert_eq!(Validation::<&str, i32>::Failure("bad").get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Maps the success value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Maps the failure payload.
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Validation<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(function(error)),
        }
    }

    /// Collapses both cases into one value.
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into a `Result`: `Success` becomes `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Validation<E, A>> for Result<A, E> {
    fn from(validation: Validation<E, A>) -> Self {
        match validation {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Success with Success combines the values, Failure with Failure combines the
/// payloads, and a Failure on either side wins over a Success.
impl<E: Semigroup, A: Semigroup> Semigroup for Validation<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => Self::Success(left.combine(right)),
            (Self::Failure(left), Self::Failure(right)) => Self::Failure(left.combine(right)),
            (Self::Failure(error), _) => Self::Failure(error),
            (_, failure) => failure,
        }
    }
}

impl<E: Semigroup, A: Monoid> Monoid for Validation<E, A> {
    fn empty() -> Self {
        Self::Success(A::empty())
    }
}

impl<E, A> Kind for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E: Clone, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> Validation<E, B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(error) => Validation::Failure(error.clone()),
        }
    }
}

/// Failures accumulate through [`Semigroup::combine`], left payload first.
impl<E: Semigroup + Clone, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Success(value)
    }

    fn map2<B, C, F>(self, other: Validation<E, B>, mut function: F) -> Validation<E, C>
    where
        F: FnMut(A, B) -> C,
        A: Clone,
        B: Clone,
    {
        match (self, other) {
            (Self::Success(left), Validation::Success(right)) => {
                Validation::Success(function(left, right))
            }
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Self::Failure(error), _) | (_, Validation::Failure(error)) => {
                Validation::Failure(error)
            }
        }
    }

    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: Fn(B) -> Output,
        B: Clone,
    {
        match (self, other) {
            (Self::Success(function), Validation::Success(value)) => {
                Validation::Success(function(value))
            }
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Self::Failure(error), _) | (_, Validation::Failure(error)) => {
                Validation::Failure(error)
            }
        }
    }
}

impl<E, A> Foldable for Validation<E, A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Success(value) => function(init, value),
            Self::Failure(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Success(value) => function(value, init),
            Self::Failure(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

impl<E: Show, A: Show> Show for Validation<E, A> {
    fn show(&self) -> String {
        match self {
            Self::Success(value) => format!("Success({})", value.show()),
            Self::Failure(error) => format!("Failure({})", error.show()),
        }
    }
}

impl<E: Show, A: Show> fmt::Display for Validation<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked = Validation<String, i32>;

    #[rstest]
    fn exactly_one_side_holds() {
        let success: Checked = Validation::Success(1);
        let failure: Checked = Validation::Failure("e".to_string());
        assert!(success.is_right() && !success.is_left());
        assert!(failure.is_left() && !failure.is_right());
    }

    #[rstest]
    #[case(Validation::Success(String::from("a")), Validation::Success(String::from("b")), Validation::Success(String::from("ab")))]
    #[case(Validation::Failure(String::from("a")), Validation::Failure(String::from("b")), Validation::Failure(String::from("ab")))]
    #[case(Validation::Failure(String::from("a")), Validation::Success(String::from("b")), Validation::Failure(String::from("a")))]
    #[case(Validation::Success(String::from("a")), Validation::Failure(String::from("b")), Validation::Failure(String::from("b")))]
    fn combine_follows_the_four_rules(
        #[case] left: Validation<String, String>,
        #[case] right: Validation<String, String>,
        #[case] expected: Validation<String, String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn monoid_empty_is_success_of_empty() {
        let empty: Validation<String, String> = Monoid::empty();
        assert_eq!(empty, Validation::Success(String::new()));
    }

    #[rstest]
    fn map2_accumulates_failures() {
        let left: Validation<Vec<&str>, i32> = Validation::Failure(vec!["first"]);
        let right: Validation<Vec<&str>, i32> = Validation::Failure(vec!["second"]);
        assert_eq!(
            left.map2(right, |a, b| a + b),
            Validation::Failure(vec!["first", "second"])
        );
    }

    #[rstest]
    fn apply_success_to_success() {
        let function: Validation<Vec<&str>, fn(i32) -> i32> = Validation::Success(|x| x * 2);
        assert_eq!(function.apply(Validation::Success(4)), Validation::Success(8));
    }

    #[rstest]
    fn fmap_leaves_failure_alone() {
        let failure: Checked = Validation::Failure("bad".to_string());
        assert_eq!(failure.clone().fmap(|x| x + 1), failure);
        assert_eq!(failure.fmap_ref(|x| x + 1), Validation::Failure("bad".to_string()));
    }

    #[rstest]
    fn imap_maps_forward() {
        let success: Checked = Validation::Success(2);
        assert_eq!(success.imap(|x| x * 3, |x| x / 3), Validation::Success(6));
    }

    #[rstest]
    fn result_round_trip() {
        let validation: Checked = Ok(5).into();
        assert_eq!(validation, Validation::Success(5));
        assert_eq!(validation.into_result(), Ok(5));
        let failed: Checked = Err("no".to_string()).into();
        assert_eq!(failed.into_result(), Err("no".to_string()));
    }

    #[rstest]
    fn fold_and_accessors() {
        let success: Checked = Validation::Success(3);
        assert_eq!(success.clone().fold(|e| e.len() as i32, |v| v * 2), 6);
        assert_eq!(success.success(), Some(3));
        let failure: Checked = Validation::Failure("x".to_string());
        assert_eq!(failure.as_ref().failure(), Some(&"x".to_string()));
        assert_eq!(failure.failure(), Some("x".to_string()));
    }

    #[rstest]
    fn show_quotes_strings() {
        let success: Validation<String, i32> = Validation::Success(1);
        let failure: Validation<String, i32> = Validation::Failure("b".to_string());
        assert_eq!(success.show(), "Success(1)");
        assert_eq!(failure.to_string(), r#"Failure("b")"#);
    }

    #[rstest]
    fn fold_left_counts_success_only() {
        let failure: Checked = Validation::Failure("x".to_string());
        assert_eq!(failure.length(), 0);
        assert_eq!(Checked::Success(4).fold_left(1, |acc, x| acc + x), 5);
    }
}
