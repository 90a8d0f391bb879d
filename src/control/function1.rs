//! Function1 - a one-argument function as a shareable value.
//!
//! [`Function1<A, B>`] wraps `A -> B` behind a reference count so that it can
//! be cloned, stored in collections, and combined with the same vocabulary as
//! the containers: `map`/`and_then` post-compose, `compose` pre-composes, and
//! `pure`/`apply`/`flat_map` form the reader applicative and monad, where every
//! function in a pipeline reads the same input.
//!
//! The function is shared through `Rc`, or `Arc` when the `arc` feature is
//! enabled.
//!
//! The capability traits take non-`'static` closures, which a stored function
//! cannot hold, so these operations are inherent methods. `apply` feeds the
//! input to both sides, `x -> ff(x)(fa(x))`, and satisfies the interchange law:
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Function1;
//!
//! let increment = Function1::new(|x: i32| x + 1);
//! let describe = increment.and_then(|x| format!("got {x}"));
//! assert_eq!(describe.call(1), "got 2");
//!
//! let length = Function1::new(|s: String| s.len());
//! let doubled_then_length = length.compose(|s: String| s.repeat(2));
//! assert_eq!(doubled_then_length.call("ab".to_string()), 4);
//! ```

use std::fmt;
use crate::ReferenceCounter;
use crate::typeclass::{Kind, Show};

/// A shareable `A -> B`.
pub struct Function1<A, B> {
    function: ReferenceCounter<dyn Fn(A) -> B>,
}

impl<A: 'static, B: 'static> Function1<A, B> {
    /// Wraps `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Calls the function.
    #[inline]
    pub fn call(&self, argument: A) -> B {
        (self.function)(argument)
    }

    /// Runs `self`, then `next` on its result.
    pub fn and_then<C, F>(&self, next: F) -> Function1<A, C>
    where
        C: 'static,
        F: Fn(B) -> C + 'static,
    {
        let function = ReferenceCounter::clone(&self.function);
        Function1::new(move |argument| next(function(argument)))
    }

    /// Functor map; the same as [`Function1::and_then`].
    pub fn map<C, F>(&self, function: F) -> Function1<A, C>
    where
        C: 'static,
        F: Fn(B) -> C + 'static,
    {
        self.and_then(function)
    }

    /// Invariant map; the backward function is not needed and is ignored.
    pub fn imap<C, F, G>(&self, function: F, _inverse: G) -> Function1<A, C>
    where
        C: 'static,
        F: Fn(B) -> C + 'static,
        G: Fn(C) -> B,
    {
        self.map(function)
    }

    /// Runs `previous`, then `self` on its result.
    pub fn compose<Z, F>(&self, previous: F) -> Function1<Z, B>
    where
        Z: 'static,
        F: Fn(Z) -> A + 'static,
    {
        let function = ReferenceCounter::clone(&self.function);
        Function1::new(move |argument| function(previous(argument)))
    }

    /// A function ignoring its input and always returning `value`.
    ///
    /// ```rust
    /// use kindred::control::Function1;
    ///
    /// let always: Function1<i32, &str> = Function1::pure("x");
    /// assert_eq!(always.call(99), "x");
    /// ```
    pub fn pure(value: B) -> Self
    where
        B: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs `self` on the input, then `next`'s result on the same input.
    ///
    /// ```rust
    /// use kindred::control::Function1;
    ///
    /// let double = Function1::new(|x: i32| x * 2);
    /// let plus_input = double.flat_map(|doubled| Function1::new(move |x: i32| doubled + x));
    /// assert_eq!(plus_input.call(5), 15);
    /// ```
    pub fn flat_map<C, F>(&self, next: F) -> Function1<A, C>
    where
        A: Clone,
        C: 'static,
        F: Fn(B) -> Function1<A, C> + 'static,
    {
        let function = ReferenceCounter::clone(&self.function);
        Function1::new(move |argument: A| next(function(argument.clone())).call(argument))
    }
}

impl<A: Clone + 'static, F: 'static> Function1<A, F> {
    /// Reader application: `x -> self(x)(values(x))`.
    ///
    /// ```rust
    /// use kindred::control::Function1;
    ///
    /// let adder = Function1::new(|x: i32| move |y: i32| x + y);
    /// let square = Function1::new(|x: i32| x * x);
    /// assert_eq!(adder.apply(&square).call(3), 12);
    /// ```
    pub fn apply<B, C>(&self, values: &Function1<A, B>) -> Function1<A, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(B) -> C,
    {
        let functions = ReferenceCounter::clone(&self.function);
        let values = ReferenceCounter::clone(&values.function);
        Function1::new(move |argument: A| functions(argument.clone())(values(argument)))
    }
}

impl<A: 'static> Function1<A, A> {
    /// The identity function.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|argument| argument)
    }
}

impl<A, B> Clone for Function1<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<A, B> Kind for Function1<A, B> {
    type Inner = B;
    type WithType<C> = Function1<A, C>;
}

impl<A, B> Show for Function1<A, B> {
    fn show(&self) -> String {
        "Function1".to_string()
    }
}

impl<A, B> fmt::Debug for Function1<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function1")
    }
}

impl<A, B> fmt::Display for Function1<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_input() {
        assert_eq!(Function1::<i32, i32>::identity().call(7), 7);
    }

    #[rstest]
    fn map_is_and_then() {
        let f = Function1::new(|x: i32| x + 1);
        assert_eq!(f.map(|x| x * 10).call(1), f.and_then(|x| x * 10).call(1));
    }

    #[rstest]
    fn imap_ignores_inverse() {
        let f = Function1::new(|x: i32| x + 1);
        assert_eq!(f.imap(|x| x * 2, |y: i32| y / 2).call(4), 10);
    }

    #[rstest]
    fn functor_identity_law() {
        let f = Function1::new(|x: i32| x - 3);
        let mapped = f.map(|x| x);
        for input in [-5, 0, 12] {
            assert_eq!(mapped.call(input), f.call(input));
        }
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    #[rstest]
    fn applicative_interchange_law() {
        type Step = fn(i32) -> i32;
        let u = Function1::new(|x: i32| -> Step { if x % 2 == 0 { double } else { negate } });
        let y = 6;
        let left = u.apply(&Function1::pure(y));
        let right = Function1::pure(move |function: Step| function(y)).apply(&u);
        for input in [0, 1, 4, 5] {
            assert_eq!(left.call(input), right.call(input));
        }
        assert_eq!(left.call(0), 12);
        assert_eq!(left.call(1), -6);
    }

    #[rstest]
    fn applicative_homomorphism_law() {
        let double = |x: i32| x * 2;
        let left = Function1::<(), _>::pure(double).apply(&Function1::pure(21));
        assert_eq!(left.call(()), Function1::<(), i32>::pure(double(21)).call(()));
    }

    #[rstest]
    fn monad_left_identity() {
        let next = |b: i32| Function1::new(move |a: i32| a + b);
        let left = Function1::pure(4).flat_map(next);
        assert_eq!(left.call(10), next(4).call(10));
    }

    #[rstest]
    fn clones_share_the_function() {
        let f = Function1::new(|x: i32| x * x);
        let g = f.clone();
        assert_eq!(f.call(3), g.call(3));
        assert!(ReferenceCounter::ptr_eq(&f.function, &g.function));
        assert_eq!(ReferenceCounter::strong_count(&f.function), 2);
    }

    #[cfg(feature = "arc")]
    #[rstest]
    fn storage_is_atomic_under_arc() {
        let f = Function1::new(|x: i32| x + 1);
        let shared: &std::sync::Arc<dyn Fn(i32) -> i32> = &f.function;
        assert_eq!(shared(1), 2);
    }

    #[rstest]
    fn shows_as_function1() {
        let f = Function1::new(|x: i32| x);
        assert_eq!(f.show(), "Function1");
        assert_eq!(format!("{f:?}"), "Function1");
        assert_eq!(f.to_string(), "Function1");
    }
}
