//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape. Mapping an empty container yields the empty container of the same
//! concrete type.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(|x| f(g(x))) == fa.fmap(g).fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Functor;
//! use kindred::imm_list;
//!
//! assert_eq!(imm_list![1, 2, 3].fmap(|x| x + 1), imm_list![2, 3, 4]);
//! assert_eq!(Some(5).fmap(|n: i32| n.to_string()), Some("5".to_string()));
//! ```

use super::higher::Kind;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `FnMut` so that multi-element containers can call it
/// once per element.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(|x| f(g(x))) == fa.fmap(g).fmap(f)
/// ```
pub trait Functor: Kind {
    /// Applies `function` to every element, preserving the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to references of the elements, leaving `self` intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Some(5));
    /// assert!(x.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Invariant map: takes a forward and a backward function.
    ///
    /// Every container in this crate is covariant, so the backward function is
    /// ignored and this is `fmap(function)`.
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// let x = Some(2);
    /// assert_eq!(x.imap(|n| n * 10, |n| n / 10), Some(20));
    /// ```
    #[inline]
    fn imap<B, F, G>(self, function: F, _inverse: G) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> B,
        G: FnMut(B) -> Self::Inner,
    {
        self.fmap(function)
    }

    /// Replaces every element with a clone of `value`.
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }

    /// Discards the elements, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_some() {
        let x: Option<i32> = Some(5);
        assert_eq!(x.fmap(|n| n.to_string()), Some("5".to_string()));
    }

    #[rstest]
    fn option_fmap_none_stays_none() {
        let x: Option<i32> = None;
        assert_eq!(x.fmap(|n| n + 1), None);
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let x: Option<String> = Some("hello".to_string());
        assert_eq!(x.fmap_ref(|s| s.len()), Some(5));
        assert_eq!(x, Some("hello".to_string()));
    }

    #[rstest]
    fn option_imap_ignores_inverse() {
        let x = Some(3);
        assert_eq!(x.imap(|n| n + 1, |_| panic!("never called")), Some(4));
    }

    #[rstest]
    fn option_void() {
        assert_eq!(Some(5).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }

    #[rstest]
    fn option_identity_law() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.fmap(|x| x), some_value);
    }

    #[rstest]
    fn option_composition_law() {
        let some_value: Option<i32> = Some(5);
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = some_value.fmap(function1).fmap(function2);
        let right = some_value.fmap(|x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Some(12));
    }
}
