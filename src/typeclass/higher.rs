//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `ImmList<_>` directly. [`Kind`] stands in for that: every container that
//! takes part in the capability traits names its element type (`Inner`) and
//! how to rebuild itself around another element type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::Kind;
//!
//! fn empty_like<K: Kind>(_value: K) -> K::WithType<String>
//! where
//!     K::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = empty_like(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A single-argument type constructor taking part in the capability traits.
///
/// `Kind` carries no data; it is the contract that lets generic operations
/// (`pure`, `apply`, `map2`, `flat_map`, `flatten`, `mcompose!`) be written once
/// and dispatched over every conforming container.
///
/// # Laws
///
/// `<F as Kind>::WithType<F::Inner>` is `F` itself.
pub trait Kind {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: Kind<Inner = B>;
}

impl<A> Kind for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> Kind for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
