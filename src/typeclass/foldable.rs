//! Foldable type class - reducing a structure to a summary value.
//!
//! `fold_left` and `fold_right` are the only required methods; everything
//! else (`reduce`, `fold_map`, `length`, `find`, `exists`, ...) is derived
//! from them.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Foldable, Sum};
//! use kindred::imm_list;
//!
//! let list = imm_list![1, 2, 3, 4];
//! assert_eq!(list.clone().fold_left(0, |acc, x| acc + x), 10);
//! assert_eq!(list.clone().reduce(|a, b| a * b), Some(24));
//! assert_eq!(list.fold_map(Sum::new), Sum::new(10));
//! ```

use super::monoid::Monoid;
use super::Kind;

/// A type class for structures that can be folded to a single value.
pub trait Foldable: Kind {
    /// Folds from the left: `function(function(init, a0), a1) ...`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right: `function(a0, function(a1, ... init))`.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Folds without a seed: the first element is the initial accumulator.
    ///
    /// Returns `None` for an empty structure.
    ///
    /// ```rust
    /// use kindred::typeclass::Foldable;
    /// use kindred::persistent::ImmList;
    ///
    /// let words: ImmList<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    /// assert_eq!(words.reduce(|x, y| x + &y), Some("abc".to_string()));
    /// assert_eq!(ImmList::<i32>::nil().reduce(|x, y| x + y), None);
    /// ```
    fn reduce<F>(self, mut function: F) -> Option<Self::Inner>
    where
        Self: Sized,
        F: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
    {
        self.fold_left(None, |accumulator, element| {
            Some(match accumulator {
                Some(accumulated) => function(accumulated, element),
                None => element,
            })
        })
    }

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` when the structure holds no element.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements, in fold order.
    fn to_vec(&self) -> Vec<Self::Inner>
    where
        Self: Clone,
    {
        self.clone().fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate` (vacuously for empty).
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
