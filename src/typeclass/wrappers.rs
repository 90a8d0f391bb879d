//! Numeric newtypes selecting which `Semigroup`/`Monoid` a number uses.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`

use std::fmt;

use super::show::Show;

/// Addition monoid.
///
/// ```rust
/// use kindred::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(4)), Sum::new(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the number.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Multiplication monoid.
///
/// `Default` is not derived: the identity is `1`, not `0`.
///
/// ```rust
/// use kindred::typeclass::{Monoid, Product};
///
/// assert_eq!(Product::combine_all([Product::new(2), Product::new(3)]), Product::new(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the number.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: Show> Show for Sum<A> {
    fn show(&self) -> String {
        format!("Sum({})", self.0.show())
    }
}

impl<A: Show> Show for Product<A> {
    fn show(&self) -> String {
        format!("Product({})", self.0.show())
    }
}

impl<A: Show> fmt::Display for Sum<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

impl<A: Show> fmt::Display for Product<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}
