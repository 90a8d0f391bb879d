//! Immutable, insertion-ordered set.
//!
//! [`ImmSet`] keeps at most one copy of each element (by `PartialEq`) and
//! remembers the order in which elements were first inserted. Elements are
//! stored inline for small sets and shared between clones.
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(n)       |
//! | `remove`   | O(n)       |
//! | `contains` | O(n)       |
//! | `len`      | O(1)       |
//! | `union`    | O(n * m)   |
//!
//! Mapping a set needs `PartialEq` on the new element type to restore the
//! no-duplicates invariant, which the [`Functor`](crate::typeclass::Functor)
//! signature cannot ask for; `map`, `apply`, `flat_map` and `pure` are
//! therefore inherent methods.
//!
//! # Examples
//!
//! ```rust
//! use kindred::persistent::ImmSet;
//! use kindred::typeclass::Show;
//!
//! let set = ImmSet::from_iter([3, 1, 3, 2, 1]);
//! assert_eq!(set.show(), "Set(3, 1, 2)");
//! assert_eq!(set.map(|x| x % 2).show(), "Set(1, 0)");
//! ```

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::typeclass::{Filterable, Foldable, Kind, Monoid, Semigroup, Show, show_constructor};

const INLINE_CAPACITY: usize = 8;

type Elements<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// An immutable set without duplicates, iterated in insertion order.
pub struct ImmSet<T> {
    elements: ReferenceCounter<Elements<T>>,
}

impl<T> ImmSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: ReferenceCounter::new(SmallVec::new()),
        }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> ImmSet<T> {
    /// Returns `true` if `element` is in the set.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// A set holding exactly `value`.
    ///
    /// ```rust
    /// use kindred::persistent::ImmSet;
    ///
    /// assert_eq!(ImmSet::pure(1).len(), 1);
    /// ```
    #[must_use]
    pub fn pure(value: T) -> Self {
        let mut elements = SmallVec::new();
        elements.push(value);
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }
}

impl<T: Clone + PartialEq> ImmSet<T> {
    /// A set that also contains `element`; unchanged if it was already present.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut elements = (*self.elements).clone();
        elements.push(element);
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// A set without `element`.
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        if !self.contains(element) {
            return self.clone();
        }
        self.iter()
            .filter(|candidate| *candidate != element)
            .cloned()
            .collect()
    }

    /// Every element of `self`, then the elements of `other` not already present.
    ///
    /// ```rust
    /// use kindred::persistent::ImmSet;
    ///
    /// let left = ImmSet::from_iter([1, 2]);
    /// let right = ImmSet::from_iter([2, 3]);
    /// assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Copies the elements into a `Vec`, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Maps every element; results that collide are kept once.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> ImmSet<B>
    where
        B: PartialEq,
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }

    /// Applies every function in `self` to every value in `values`.
    ///
    /// ```rust
    /// use kindred::persistent::ImmSet;
    ///
    /// let functions: ImmSet<fn(i32) -> i32> = ImmSet::from_iter([
    ///     (|x: i32| x + 1) as fn(i32) -> i32,
    ///     (|x: i32| x * 2) as fn(i32) -> i32,
    /// ]);
    /// let values = ImmSet::from_iter([1, 2]);
    /// assert_eq!(functions.apply(&values).to_vec(), vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn apply<A, B>(&self, values: &ImmSet<A>) -> ImmSet<B>
    where
        T: Fn(A) -> B,
        A: Clone,
        B: PartialEq,
    {
        self.iter()
            .flat_map(|function| values.iter().map(move |value| function(value.clone())))
            .collect()
    }

    /// Maps every element to a set and unites the results.
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> ImmSet<B>
    where
        B: Clone + PartialEq,
        F: FnMut(&T) -> ImmSet<B>,
    {
        self.iter()
            .flat_map(|element| function(element).to_vec())
            .collect()
    }
}

impl<T> Clone for ImmSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for ImmSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set equality: the same elements, in any order.
impl<T: PartialEq> PartialEq for ImmSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for ImmSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Show> fmt::Display for ImmSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

/// Later duplicates are dropped; the first occurrence keeps its position.
impl<T: PartialEq> FromIterator<T> for ImmSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Elements<T> = SmallVec::new();
        for element in iter {
            if !elements.contains(&element) {
                elements.push(element);
            }
        }
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> Kind for ImmSet<T> {
    type Inner = T;
    type WithType<B> = ImmSet<B>;
}

impl<T: Clone> Foldable for ImmSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().cloned().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.iter()
            .rev()
            .cloned()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone + PartialEq> Filterable for ImmSet<T> {
    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }
}

/// Union.
impl<T: Clone + PartialEq> Semigroup for ImmSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<T: Clone + PartialEq> Monoid for ImmSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Show> Show for ImmSet<T> {
    fn show(&self) -> String {
        show_constructor("Set", self.iter())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmSet<i32>: Send, Sync);
