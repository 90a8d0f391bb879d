//! Applicative type class - combining independent computations in a context.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`, which lifts a plain value into the context
//! - `map2`, which combines two contexts with a binary function
//! - `apply`, which applies the functions held by one context to the values
//!   held by another
//!
//! For multi-element containers `map2` and `apply` are cartesian: every left
//! element is paired with every right element, left-major. For `Validation`
//! they accumulate failures instead of stopping at the first one.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Map Consistency
//!
//! ```text
//! pure(f).apply(v) == v.fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Applicative;
//! use kindred::imm_list;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sums = imm_list![1, 2].map2(imm_list![10, 20], |a, b| a + b);
//! assert_eq!(sums, imm_list![11, 21, 12, 22]);
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// The element bounds on `map2` and `apply` (`Clone` on both sides) are what
/// cartesian instances need to reuse an element more than once. Single-slot
/// instances such as `Option` never clone.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    /// use kindred::persistent::ImmList;
    ///
    /// assert_eq!(<Option<()>>::pure(1), Some(1));
    /// assert_eq!(<ImmList<()>>::pure(1).to_vec(), vec![1]);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnMut(Self::Inner, B) -> C,
        Self::Inner: Clone,
        B: Clone;

    /// Applies the functions contained in `self` to the values in `other`.
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output,
        B: Clone;

    /// Pairs the values of two applicatives.
    ///
    /// ```rust
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two applicatives, keeping the left values.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |left, _| left)
    }

    /// Combines two applicatives, keeping the right values.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |_, right| right)
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        F: FnMut(A, B) -> C,
        A: Clone,
        B: Clone,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: Fn(B) -> Output,
        B: Clone,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}
