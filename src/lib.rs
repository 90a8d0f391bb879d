//! # kindred
//!
//! Sealed algebraic data types, typeclass-style capabilities and structural
//! pattern matching.
//!
//! ## Overview
//!
//! - **Capabilities**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Semigroup, Monoid, Show and Filterable, expressed over a GAT-based
//!   [`Kind`](typeclass::Kind) so that generic code can name "the same
//!   container holding another type"
//! - **Persistent collections**: [`ImmList`](persistent::ImmList) and
//!   [`ImmSet`](persistent::ImmSet)
//! - **Control structures**: [`Validation`](control::Validation) and
//!   [`Function1`](control::Function1)
//! - **Sealed families**: closed sets of variants, statically through
//!   [`SealedFamily`](sealed::SealedFamily) and dynamically through
//!   [`Value`](sealed::Value) and [`construct`](sealed::construct)
//! - **Pattern matching**: first-match-wins clauses with captures, wildcards
//!   and guards over [`Value`](sealed::Value)
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits
//! - `persistent`: persistent collections
//! - `control`: `Validation` and `Function1`
//! - `sealed`: sealed families and dynamic values
//! - `pattern`: the matching engine
//! - `arc`: share storage through `Arc` so values are `Send + Sync`
//! - `serde`: serialization support
//! - `full`: every feature except `arc`
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let list = imm_list![Some(1), Some(2), Some(3)];
//! assert_eq!(list.sequence_option(), Some(imm_list![1, 2, 3]));
//!
//! let combined = Validation::<String, String>::Success("a".to_string())
//!     .combine(Validation::Failure("b".to_string()));
//! assert_eq!(combined.show(), r#"Failure("b")"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "sealed")]
    pub use crate::sealed::*;

    #[cfg(feature = "pattern")]
    pub use crate::pattern::*;

    pub use crate::error::{AdtError, Arity, SealReason};

    #[cfg(feature = "persistent")]
    pub use crate::imm_list;

    #[cfg(feature = "typeclass")]
    pub use crate::mcompose;
}

mod error;

#[cfg(all(feature = "arc", any(feature = "persistent", feature = "control")))]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(all(not(feature = "arc"), any(feature = "persistent", feature = "control")))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub use error::{AdtError, Arity, Result, SealReason};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "sealed")]
pub mod sealed;

#[cfg(feature = "pattern")]
pub mod pattern;
