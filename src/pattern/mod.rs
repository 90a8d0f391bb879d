//! Structural pattern matching over [`Value`](crate::sealed::Value).
//!
//! A [`MatchExpression`] pairs one or more scrutinees with an ordered list of
//! clauses. Each clause holds one [`Pattern`] per scrutinee:
//!
//! - [`Pattern::Wildcard`] matches anything and binds nothing
//! - [`Pattern::Capture`] matches anything and binds it by name
//! - [`Pattern::Literal`] matches an equal value
//! - [`Pattern::Constructor`] compares the variant tag, then matches the
//!   constructor arguments recursively
//!
//! The first clause whose patterns all unify (and whose guard, if any,
//! accepts the bindings) wins and its handler produces the result. When no
//! clause unifies, evaluation fails with
//! [`AdtError::NonExhaustiveMatch`](crate::AdtError::NonExhaustiveMatch).
//!
//! # Examples
//!
//! ```rust
//! use kindred::pattern::{match_on, Pattern};
//! use kindred::sealed::Value;
//!
//! let total = match_on::<kindred::Result<Value>, _>([Value::some(2), Value::some(3)])
//!     .case(
//!         [Pattern::some(Pattern::capture("a")), Pattern::some(Pattern::capture("b"))],
//!         |bindings| bindings.require("a")?.try_combine(bindings.require("b")?),
//!     )
//!     .otherwise(|| Ok(Value::Int(0)))
//!     .evaluate();
//!
//! assert_eq!(total, Ok(Ok(Value::Int(5))));
//! ```

mod bindings;
mod combine;
mod matcher;
mod shape;

pub use bindings::Bindings;
pub use matcher::{MatchExpression, match_on};
pub use shape::{ConstructorPattern, Pattern};
