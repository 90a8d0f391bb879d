//! Immutable list backed by a shared, materialized slice.
//!
//! This module provides [`ImmList`], an immutable ordered sequence. Elements
//! live in a reference-counted slice and a list is a window into that slice,
//! so the structural operations share storage with the list they came from:
//!
//! - O(1) `head`, `last`, `get`, `len`
//! - O(1) `tail`, `init`, `take`, `drop` (window adjustments)
//! - O(n) `cons`, `append`, `reverse`, and the capability operations
//!
//! A list is either `Nil` (empty) or `Cons` (a head followed by a tail list);
//! [`ImmList::view`] exposes that shape for native `match`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::persistent::ImmList;
//! use kindred::typeclass::{Foldable, Functor, Show};
//! use kindred::imm_list;
//!
//! let list = imm_list![1, 2, 3];
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.tail(), imm_list![2, 3]);
//! assert_eq!(list.clone().fmap(|x| x + 1).show(), "List(2, 3, 4)");
//!
//! let prepended = ImmList::cons(0, &list);
//! assert_eq!(prepended.len(), 4);
//! assert_eq!(list.len(), 3);
//!
//! let total: i32 = list.iter().sum();
//! assert_eq!(total, 6);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::typeclass::{
    Applicative, Filterable, Foldable, Functor, Kind, Monad, Monoid, Semigroup, Show,
    Traversable, show_constructor,
};

/// An immutable list.
///
/// Cloning is O(1): the clone shares the element storage.
pub struct ImmList<T> {
    elements: ReferenceCounter<[T]>,
    start: usize,
    end: usize,
}

/// The shape of a list, for exhaustive `match`.
///
/// ```rust
/// use kindred::persistent::ListView;
/// use kindred::imm_list;
///
/// fn sum(list: &kindred::persistent::ImmList<i32>) -> i32 {
///     match list.view() {
///         ListView::Nil => 0,
///         ListView::Cons(head, tail) => head + sum(&tail),
///     }
/// }
///
/// assert_eq!(sum(&imm_list![1, 2, 3]), 6);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a, T> {
    /// The empty list.
    Nil,
    /// A head element and the remaining list.
    Cons(&'a T, ImmList<T>),
}

impl<T> ImmList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn nil() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Alias for [`ImmList::nil`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::nil()
    }

    /// Creates a list holding exactly `element`.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    /// Creates a list from a head and at least zero further elements.
    ///
    /// The result is never empty.
    ///
    /// ```rust
    /// use kindred::persistent::ImmList;
    ///
    /// let list = ImmList::non_empty(1, [2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn non_empty<I>(head: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = vec![head];
        elements.extend(rest);
        Self::from_vec(elements)
    }

    fn from_vec(elements: Vec<T>) -> Self {
        let end = elements.len();
        Self {
            elements: ReferenceCounter::from(elements),
            start: 0,
            end,
        }
    }

    fn window(&self, start: usize, end: usize) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            start,
            end,
        }
    }

    /// The elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements[self.start..self.end]
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Every element but the first; `Nil` stays `Nil`.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.drop(1)
    }

    /// Every element but the last; `Nil` stays `Nil`.
    ///
    /// ```rust
    /// use kindred::imm_list;
    ///
    /// assert_eq!(imm_list![1, 2, 3].init(), imm_list![1, 2]);
    /// ```
    #[must_use]
    pub fn init(&self) -> Self {
        self.take(self.len().saturating_sub(1))
    }

    /// The first `count` elements, or the whole list if it is shorter.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.window(self.start, self.start + count.min(self.len()))
    }

    /// The list without its first `count` elements; `Nil` if it is shorter.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        self.window(self.start + count.min(self.len()), self.end)
    }

    /// The longest prefix whose elements all satisfy `predicate`.
    ///
    /// ```rust
    /// use kindred::imm_list;
    ///
    /// let list = imm_list![1, 2, 3, 1];
    /// assert_eq!(list.take_while(|x| *x < 3), imm_list![1, 2]);
    /// assert_eq!(list.drop_while(|x| *x < 3), imm_list![3, 1]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.take(self.prefix_length(predicate))
    }

    /// The list after the longest prefix satisfying `predicate`.
    #[must_use]
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.drop(self.prefix_length(predicate))
    }

    fn prefix_length<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .position(|element| !predicate(element))
            .unwrap_or_else(|| self.len())
    }

    /// Iterates over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// The `Nil`/`Cons` shape of this list.
    #[must_use]
    pub fn view(&self) -> ListView<'_, T> {
        match self.head() {
            None => ListView::Nil,
            Some(head) => ListView::Cons(head, self.tail()),
        }
    }
}

impl<T: Clone> ImmList<T> {
    /// Prepends `head` to `tail`.
    ///
    /// ```rust
    /// use kindred::persistent::ImmList;
    ///
    /// let list = ImmList::cons(1, &ImmList::cons(2, &ImmList::nil()));
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn cons(head: T, tail: &Self) -> Self {
        Self::non_empty(head, tail.iter().cloned())
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Pairs elements positionally, truncating to the shorter list.
    ///
    /// ```rust
    /// use kindred::imm_list;
    ///
    /// assert_eq!(
    ///     imm_list![1, 2, 3].zip(&imm_list!["a", "b"]),
    ///     imm_list![(1, "a"), (2, "b")]
    /// );
    /// ```
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &ImmList<U>) -> ImmList<(T, U)> {
        self.iter().cloned().zip(other.iter().cloned()).collect()
    }
}

impl<T: Clone> ImmList<ImmList<T>> {
    /// Regroups rows into columns.
    ///
    /// M rows of length N become N rows of length M. Rows of unequal length
    /// are truncated to the shortest one.
    ///
    /// ```rust
    /// use kindred::imm_list;
    ///
    /// let rows = imm_list![imm_list![1, 2, 3], imm_list![4, 5, 6]];
    /// assert_eq!(
    ///     rows.transpose(),
    ///     imm_list![imm_list![1, 4], imm_list![2, 5], imm_list![3, 6]]
    /// );
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let width = self.iter().map(ImmList::len).min().unwrap_or(0);
        (0..width)
            .map(|column| {
                self.iter()
                    .filter_map(|row| row.get(column).cloned())
                    .collect()
            })
            .collect()
    }
}

impl<T> Clone for ImmList<T> {
    #[inline]
    fn clone(&self) -> Self {
        self.window(self.start, self.end)
    }
}

impl<T> Default for ImmList<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T: PartialEq> PartialEq for ImmList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ImmList<T> {}

impl<T: Hash> Hash for ImmList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Show> fmt::Display for ImmList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

impl<T> FromIterator<T> for ImmList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for ImmList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for ImmList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<'a, T> IntoIterator for &'a ImmList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over an [`ImmList`]; yields clones of the shared elements.
pub struct ImmListIntoIterator<T> {
    list: ImmList<T>,
}

impl<T: Clone> Iterator for ImmListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.list.head().cloned()?;
        self.list.start += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> DoubleEndedIterator for ImmListIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        let element = self.list.last().cloned()?;
        self.list.end -= 1;
        Some(element)
    }
}

impl<T: Clone> ExactSizeIterator for ImmListIntoIterator<T> {}

impl<T: Clone> IntoIterator for ImmList<T> {
    type Item = T;
    type IntoIter = ImmListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ImmListIntoIterator { list: self }
    }
}

/// Builds an [`ImmList`].
///
/// ```rust
/// use kindred::imm_list;
/// use kindred::persistent::ImmList;
///
/// let empty: ImmList<i32> = imm_list![];
/// assert!(empty.is_empty());
/// assert_eq!(imm_list![1, 2, 3].len(), 3);
/// assert_eq!(imm_list!["x"; 2], imm_list!["x", "x"]);
/// ```
#[macro_export]
macro_rules! imm_list {
    () => {
        $crate::persistent::ImmList::nil()
    };
    ($element:expr; $count:expr) => {
        $crate::persistent::ImmList::from(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::ImmList::from([$($element),+])
    };
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> Kind for ImmList<T> {
    type Inner = T;
    type WithType<B> = ImmList<B>;
}

impl<T: Clone> Functor for ImmList<T> {
    fn fmap<B, F>(self, function: F) -> ImmList<B>
    where
        F: FnMut(T) -> B,
    {
        self.iter().cloned().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> ImmList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

/// Cartesian: every left element meets every right element, left-major.
impl<T: Clone> Applicative for ImmList<T> {
    fn pure<B>(value: B) -> ImmList<B> {
        ImmList::singleton(value)
    }

    fn map2<B, C, F>(self, other: ImmList<B>, mut function: F) -> ImmList<C>
    where
        F: FnMut(T, B) -> C,
        T: Clone,
        B: Clone,
    {
        let mut combined = Vec::with_capacity(self.len() * other.len());
        for left in &self {
            for right in &other {
                combined.push(function(left.clone(), right.clone()));
            }
        }
        ImmList::from_vec(combined)
    }

    fn apply<B, Output>(self, other: ImmList<B>) -> ImmList<Output>
    where
        T: Fn(B) -> Output,
        B: Clone,
    {
        let mut applied = Vec::with_capacity(self.len() * other.len());
        for function in &self {
            for value in &other {
                applied.push(function(value.clone()));
            }
        }
        ImmList::from_vec(applied)
    }
}

impl<T: Clone> Monad for ImmList<T> {
    fn flat_map<B, F>(self, mut function: F) -> ImmList<B>
    where
        B: Clone,
        F: FnMut(T) -> ImmList<B>,
    {
        let mut spliced = Vec::new();
        for element in &self {
            spliced.extend(function(element.clone()).iter().cloned());
        }
        ImmList::from_vec(spliced)
    }
}

impl<T: Clone> Foldable for ImmList<T> {
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

    fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Clone> Traversable for ImmList<T> {
    fn traverse_option<B, F>(self, function: F) -> Option<ImmList<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.iter().cloned().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<ImmList<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.iter().cloned().map(function).collect()
    }

    #[cfg(feature = "control")]
    fn traverse_validation<E, B, F>(
        self,
        mut function: F,
    ) -> crate::control::Validation<E, ImmList<B>>
    where
        E: Semigroup,
        F: FnMut(T) -> crate::control::Validation<E, B>,
    {
        use crate::control::Validation;

        let mut successes = Vec::with_capacity(self.len());
        let mut failures: Option<E> = None;
        for element in &self {
            match function(element.clone()) {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(accumulated) => accumulated.combine(error),
                        None => error,
                    });
                }
            }
        }
        match failures {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(ImmList::from_vec(successes)),
        }
    }
}

impl<T: Clone> Filterable for ImmList<T> {
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

/// Concatenation.
impl<T: Clone> Semigroup for ImmList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for ImmList<T> {
    fn empty() -> Self {
        Self::nil()
    }
}

impl<T: Show> Show for ImmList<T> {
    fn show(&self) -> String {
        show_constructor("List", self.iter())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ImmListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ImmListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ImmList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ImmList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmList<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nil_is_empty() {
        let list: ImmList<i32> = ImmList::nil();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.view(), ListView::Nil);
    }

    #[rstest]
    fn view_splits_head_and_tail() {
        let list = imm_list![1, 2, 3];
        match list.view() {
            ListView::Cons(head, tail) => {
                assert_eq!(*head, 1);
                assert_eq!(tail, imm_list![2, 3]);
            }
            ListView::Nil => panic!("expected Cons"),
        }
    }

    #[rstest]
    fn tail_shares_storage() {
        let list = imm_list![1, 2, 3];
        let tail = list.tail();
        assert!(ReferenceCounter::ptr_eq(&list.elements, &tail.elements));
        assert_eq!(tail.as_slice(), &[2, 3]);
    }

    #[rstest]
    fn tail_and_init_of_nil_are_nil() {
        let list: ImmList<i32> = ImmList::nil();
        assert!(list.tail().is_empty());
        assert!(list.init().is_empty());
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(10, vec![1, 2, 3])]
    fn take_clamps(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(imm_list![1, 2, 3].take(count).to_vec(), expected);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(10, vec![])]
    fn drop_clamps(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(imm_list![1, 2, 3].drop(count).to_vec(), expected);
    }

    #[rstest]
    fn take_while_stops_at_first_failure() {
        let list = imm_list![2, 4, 5, 6];
        assert_eq!(list.take_while(|x| x % 2 == 0), imm_list![2, 4]);
        assert_eq!(list.drop_while(|x| x % 2 == 0), imm_list![5, 6]);
        assert_eq!(list.take_while(|_| true), list);
        assert!(list.drop_while(|_| true).is_empty());
    }

    #[rstest]
    fn last_and_get() {
        let list = imm_list!['a', 'b', 'c'];
        assert_eq!(list.last(), Some(&'c'));
        assert_eq!(list.get(1), Some(&'b'));
        assert_eq!(list.get(3), None);
    }

    #[rstest]
    fn reverse_and_append() {
        let list = imm_list![1, 2, 3];
        assert_eq!(list.reverse(), imm_list![3, 2, 1]);
        assert_eq!(list.append(&imm_list![4]), imm_list![1, 2, 3, 4]);
        assert_eq!(ImmList::nil().append(&list), list);
    }

    #[rstest]
    fn transpose_ragged_truncates_to_shortest_row() {
        let rows = imm_list![imm_list![1, 2, 3], imm_list![4, 5]];
        assert_eq!(rows.transpose(), imm_list![imm_list![1, 4], imm_list![2, 5]]);
    }

    #[rstest]
    fn transpose_of_nil_is_nil() {
        let rows: ImmList<ImmList<i32>> = ImmList::nil();
        assert!(rows.transpose().is_empty());
    }

    #[rstest]
    fn fmap_over_nil_is_nil() {
        let list: ImmList<i32> = ImmList::nil();
        assert_eq!(list.fmap(|x| x + 1), ImmList::<i32>::nil());
    }

    #[rstest]
    fn apply_is_cartesian_function_major() {
        let functions: ImmList<fn(i32) -> i32> = imm_list![|x| x + 1, |x| x * 10];
        assert_eq!(functions.apply(imm_list![1, 2]), imm_list![2, 3, 10, 20]);
    }

    #[rstest]
    fn flat_map_splices_in_order() {
        let list = imm_list![1, 2, 3];
        assert_eq!(
            list.flat_map(|x| imm_list![x; usize::try_from(x).unwrap_or(0)]),
            imm_list![1, 2, 2, 3, 3, 3]
        );
    }

    #[rstest]
    fn fold_right_visits_from_the_end() {
        let list = imm_list!["a", "b", "c"];
        let joined = list.fold_right(String::new(), |element, accumulator| {
            accumulator + element
        });
        assert_eq!(joined, "cba");
    }

    #[rstest]
    fn traverse_result_keeps_first_error() {
        let list = imm_list![1, -1, -2];
        let result = list.traverse_result(|x| if x > 0 { Ok(x) } else { Err(x) });
        assert_eq!(result, Err(-1));
    }

    #[rstest]
    fn owned_iterator_is_double_ended() {
        let mut iterator = imm_list![1, 2, 3].into_iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next_back(), Some(3));
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2]);
    }

    #[rstest]
    fn display_matches_show() {
        let list = imm_list![1, 2, 3];
        assert_eq!(list.to_string(), "List(1, 2, 3)");
        assert_eq!(ImmList::<i32>::nil().to_string(), "List()");
    }

    #[rstest]
    fn debug_is_a_list() {
        assert_eq!(format!("{:?}", imm_list![1, 2]), "[1, 2]");
    }
}
