//! Control structures.
//!
//! - [`Validation`]: success or failure, where failures accumulate under
//!   applicative combination instead of short-circuiting
//! - [`Function1`]: a shareable one-argument function with functor,
//!   reader-applicative and reader-monad operations
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Function1, Validation};
//! use kindred::typeclass::Applicative;
//!
//! let checked: Validation<String, i32> = Validation::Failure("bad a".to_string());
//! let other: Validation<String, i32> = Validation::Failure(", bad b".to_string());
//! let combined = checked.map2(other, |a, b| a + b);
//! assert_eq!(combined, Validation::Failure("bad a, bad b".to_string()));
//!
//! let length = Function1::new(|s: String| s.len());
//! assert_eq!(length.map(|n| n * 2).call("abc".to_string()), 6);
//! ```

mod function1;
mod validation;

pub use function1::Function1;
pub use validation::Validation;
