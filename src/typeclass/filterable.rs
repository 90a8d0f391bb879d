//! Filterable type class - keeping the elements that satisfy a predicate.
//!
//! `filter` keeps matching elements in their original order, `reject` keeps
//! the others, and `with_filter` defers the filtering so that a following
//! `fmap` or `flat_map` sees only the matching elements.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Filterable;
//! use kindred::imm_list;
//!
//! let numbers = imm_list![1, 2, 3, 4, 5, 6];
//! assert_eq!(numbers.clone().filter(|n| n % 2 == 0), imm_list![2, 4, 6]);
//! assert_eq!(numbers.clone().reject(|n| n % 2 == 0), imm_list![1, 3, 5]);
//! assert_eq!(
//!     numbers.with_filter(|n| n % 2 == 0).fmap(|n| n * 10),
//!     imm_list![20, 40, 60]
//! );
//! ```

use super::{Foldable, Functor, Kind, Monad};

/// A type class for structures whose elements can be filtered.
pub trait Filterable: Kind + Sized {
    /// Keeps the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Keeps the elements for which `predicate` does not hold.
    #[inline]
    fn reject<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.filter(move |element| !predicate(element))
    }

    /// Defers filtering until the view is mapped or collected.
    #[inline]
    fn with_filter<P>(self, predicate: P) -> WithFilter<Self, P>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        WithFilter {
            collection: self,
            predicate,
        }
    }
}

/// A filtered view over a collection.
///
/// Nothing is filtered until [`WithFilter::fmap`], [`WithFilter::flat_map`],
/// [`WithFilter::for_each`] or [`WithFilter::into_filtered`] is called.
pub struct WithFilter<C, P> {
    collection: C,
    predicate: P,
}

impl<C, P> WithFilter<C, P>
where
    C: Filterable,
    P: FnMut(&C::Inner) -> bool,
{
    /// Maps the matching elements; equal to `filter(p).fmap(f)`.
    pub fn fmap<B, F>(self, function: F) -> C::WithType<B>
    where
        C: Functor,
        F: FnMut(C::Inner) -> B,
    {
        self.into_filtered().fmap(function)
    }

    /// Flat-maps the matching elements; equal to `filter(p).flat_map(f)`.
    pub fn flat_map<B, F>(self, function: F) -> C::WithType<B>
    where
        C: Monad,
        B: Clone,
        F: FnMut(C::Inner) -> C::WithType<B>,
    {
        self.into_filtered().flat_map(function)
    }

    /// Narrows the view further; an element must satisfy both predicates.
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    /// use kindred::imm_list;
    ///
    /// let view = imm_list![1, 2, 3, 4, 5, 6, 7, 8]
    ///     .with_filter(|n| n % 2 == 0)
    ///     .with_filter(|n| *n > 4);
    /// assert_eq!(view.into_filtered(), imm_list![6, 8]);
    /// ```
    pub fn with_filter<Q>(self, mut next: Q) -> WithFilter<C, impl FnMut(&C::Inner) -> bool>
    where
        Q: FnMut(&C::Inner) -> bool,
    {
        let mut predicate = self.predicate;
        WithFilter {
            collection: self.collection,
            predicate: move |element: &C::Inner| predicate(element) && next(element),
        }
    }

    /// Runs `action` on every matching element.
    pub fn for_each<F>(self, mut action: F)
    where
        C: Foldable,
        F: FnMut(C::Inner),
    {
        self.into_filtered()
            .fold_left((), |(), element| action(element));
    }

    /// Applies the predicate, producing the filtered collection.
    pub fn into_filtered(self) -> C {
        self.collection.filter(self.predicate)
    }
}

impl<A> Filterable for Option<A> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        Self::filter(self, predicate)
    }
}
