//! Monad type class - sequencing dependent computations.
//!
//! A `Monad` extends [`Applicative`] with `flat_map`, which feeds the value(s)
//! of one computation into a function producing the next computation.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Kleisli composition
//!
//! [`mcompose!`](crate::mcompose) chains functions `A -> M<B>`, `B -> M<C>`, ...
//! left to right; [`kleisli`] does the same for exactly two functions.
//!
//! ```rust
//! use kindred::mcompose;
//!
//! let parse = |s: &str| s.parse::<i32>().ok();
//! let positive = |n: i32| if n > 0 { Some(n) } else { None };
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//!
//! let mut pipeline = mcompose!(parse, positive, halve);
//! assert_eq!(pipeline("42"), Some(21));
//! assert_eq!(pipeline("-2"), None);
//! assert_eq!(pipeline("x"), None);
//! ```

use super::applicative::Applicative;
use super::higher::Kind;

/// A type class for contexts whose computations can depend on earlier results.
///
/// Persistent instances keep their elements in shared storage, so splicing the
/// inner contexts together copies their elements out; hence `B: Clone`.
pub trait Monad: Applicative {
    /// Applies `function` to each value and flattens the resulting contexts.
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first one's values.
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        Self::WithType<B>: Clone,
    {
        self.flat_map(|_| next.clone())
    }

    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use kindred::typeclass::Monad;
    /// use kindred::imm_list;
    ///
    /// let nested = imm_list![imm_list![1, 2], imm_list![], imm_list![3]];
    /// assert_eq!(Monad::flatten(nested), imm_list![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Self::WithType<<Self::Inner as Kind>::Inner>
    where
        Self: Sized,
        Self::Inner: Kind + Into<Self::WithType<<Self::Inner as Kind>::Inner>>,
        <Self::Inner as Kind>::Inner: Clone,
    {
        self.flat_map(Into::into)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        B: Clone,
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

/// Left-to-right Kleisli composition of two monadic functions.
///
/// `kleisli(first, second)(a)` is `first(a).flat_map(second)`.
///
/// ```rust
/// use kindred::typeclass::kleisli;
/// use kindred::imm_list;
///
/// let mut both = kleisli(|n: i32| imm_list![n, n + 1], |n: i32| imm_list![n * 10]);
/// assert_eq!(both(1), imm_list![10, 20]);
/// ```
pub fn kleisli<A, C, M, F, G>(mut first: F, mut second: G) -> impl FnMut(A) -> M::WithType<C>
where
    M: Monad,
    C: Clone,
    F: FnMut(A) -> M,
    G: FnMut(M::Inner) -> M::WithType<C>,
{
    move |input| first(input).flat_map(&mut second)
}

/// Composes monadic functions left to right.
///
/// `mcompose!(f, g, h)(a)` is `f(a).flat_map(g).flat_map(h)`. A single
/// function is returned unchanged. The resulting closure is `FnMut`.
///
/// ```rust
/// use kindred::mcompose;
/// use kindred::imm_list;
///
/// let duplicate = |n: i32| imm_list![n, n];
/// let tag = |n: i32| imm_list![n * 10];
///
/// let mut composed = mcompose!(duplicate, tag);
/// assert_eq!(composed(2), imm_list![20, 20]);
/// ```
#[macro_export]
macro_rules! mcompose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let mut first = $first_function;
        let mut remaining = $crate::mcompose!($($remaining_functions),+);
        move |input| $crate::typeclass::Monad::flat_map(first(input), &mut remaining)
    }};
}
