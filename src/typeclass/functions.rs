//! Free-function forms of the capability operations.
//!
//! Each function is written once against the trait and dispatches to the
//! argument's own instance, so generic code can be written without method
//! syntax.
//!
//! ```rust
//! use kindred::typeclass::functions::{ap, bind, fmap, pure};
//! use kindred::imm_list;
//! use kindred::persistent::ImmList;
//!
//! assert_eq!(fmap(Some(1), |x| x + 1), Some(2));
//! assert_eq!(pure::<ImmList<()>, _>(7), imm_list![7]);
//! assert_eq!(bind(imm_list![1, 2], |x| imm_list![x, x]), imm_list![1, 1, 2, 2]);
//!
//! let functions: Option<fn(i32) -> i32> = Some(|x| x * 3);
//! assert_eq!(ap(functions, Some(5)), Some(15));
//! ```

use super::{Applicative, Functor, Kind, Monad};

/// `container.fmap(function)`.
#[inline]
pub fn fmap<K, B, F>(container: K, function: F) -> K::WithType<B>
where
    K: Functor,
    F: FnMut(K::Inner) -> B,
{
    container.fmap(function)
}

/// Lifts `value` into the applicative `K`; `K`'s own element type is ignored.
#[inline]
pub fn pure<K, B>(value: B) -> K::WithType<B>
where
    K: Applicative,
{
    K::pure(value)
}

/// Applies the functions in `functions` to the values in `values`.
#[inline]
pub fn ap<K, B, Output>(functions: K, values: K::WithType<B>) -> K::WithType<Output>
where
    K: Applicative,
    K::Inner: Fn(B) -> Output,
    B: Clone,
{
    functions.apply(values)
}

/// `left.map2(right, function)`.
#[inline]
pub fn map2<K, B, C, F>(left: K, right: K::WithType<B>, function: F) -> K::WithType<C>
where
    K: Applicative,
    K::Inner: Clone,
    B: Clone,
    F: FnMut(K::Inner, B) -> C,
{
    left.map2(right, function)
}

/// `monad.flat_map(function)`.
#[inline]
pub fn bind<K, B, F>(monad: K, function: F) -> K::WithType<B>
where
    K: Monad,
    B: Clone,
    F: FnMut(K::Inner) -> K::WithType<B>,
{
    monad.flat_map(function)
}

/// Removes one level of monadic nesting.
#[inline]
pub fn flatten<K>(nested: K) -> K::WithType<<K::Inner as Kind>::Inner>
where
    K: Monad,
    K::Inner: Kind + Into<K::WithType<<K::Inner as Kind>::Inner>>,
    <K::Inner as Kind>::Inner: Clone,
{
    Monad::flatten(nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_ignores_carrier_element_type() {
        assert_eq!(pure::<Option<String>, _>(3), Some(3));
    }

    #[rstest]
    fn map2_over_options() {
        assert_eq!(map2(Some(2), Some(5), |a, b| a * b), Some(10));
        assert_eq!(map2(Some(2), None::<i32>, |a, b| a * b), None);
    }

    #[rstest]
    fn flatten_nested_option() {
        assert_eq!(flatten(Some(Some('x'))), Some('x'));
    }

    #[rstest]
    fn bind_short_circuits_on_none() {
        assert_eq!(bind(None::<i32>, |x| Some(x + 1)), None);
    }
}
