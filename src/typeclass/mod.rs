//! Capability traits shared by every container in the crate.
//!
//! - [`Functor`]: mapping over contents
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations, plus [`mcompose!`](crate::mcompose)
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Traversable`]: effectful mapping with `Option`, `Result` or `Validation`
//! - [`Filterable`]: keeping elements that satisfy a predicate
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//! - [`Show`]: canonical textual rendering
//!
//! Equality is Rust's own `PartialEq`/`Eq`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`Kind`] uses Generic Associated Types to
//! name "the same container with another element type", which is all the
//! traits above need.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Applicative, Foldable, Functor, Monad, Show};
//! use kindred::imm_list;
//!
//! let list = imm_list![1, 2, 3];
//! assert_eq!(list.clone().fmap(|x| x * 2).show(), "List(2, 4, 6)");
//! assert_eq!(list.clone().flat_map(|x| imm_list![x; 2]).length(), 6);
//! assert_eq!(list.map2(imm_list![10], |a, b| a + b), imm_list![11, 12, 13]);
//! ```

mod applicative;
mod filterable;
mod foldable;
pub mod functions;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod show;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use filterable::{Filterable, WithFilter};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::Kind;
pub use monad::{Monad, kleisli};
pub use monoid::Monoid;
pub use semigroup::{Semigroup, combine};
pub use show::Show;
#[cfg(feature = "persistent")]
pub(crate) use show::show_constructor;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
